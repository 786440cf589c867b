//! Application-level input
//!
//! Rotation controls live in `hypercube_input`; this module only maps the
//! keys that act on the whole application.

mod input_mapper;

pub use input_mapper::{InputAction, InputMapper};
