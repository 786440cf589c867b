//! Integration tests for the per-tick frame pipeline
//!
//! Drives FrameUpdater through ControlPanel the way the viewer does and checks
//! the geometry that reaches the renderer.

use hypercube_core::{
    AngleSource, AutoRotation, ControlPanel, FrameUpdater, PerspectiveProjection, PlaneAngles,
    RotationPlane, SliderMapping, Tesseract4D, Vec4,
};
use hypercube_math::{mat4, EDGES};

const EPSILON: f32 = 0.0001;

fn point_approx_eq(a: [f32; 3], b: [f32; 3]) -> bool {
    (0..3).all(|i| (a[i] - b[i]).abs() < EPSILON)
}

#[test]
fn test_rest_controls_with_auto_off_fall_back_to_stored_angles() {
    let mut updater = FrameUpdater::default();

    // Spin up some stored angles first
    let running = ControlPanel::default();
    for _ in 0..50 {
        updater.tick(&running);
    }
    let stored = *updater.auto().angles();
    assert_ne!(stored, PlaneAngles::ZERO);

    // Every auto flag off, every slider at its rest position
    let mapping = SliderMapping::default();
    let frozen = ControlPanel::from_sliders([0; 6], [false; 6], &mapping);
    let frame = updater.tick(&frozen);

    // Stored angles are used, not a zero rotation
    assert_eq!(*frame.angles(), stored);
    assert_ne!(frame.rotation(), mat4::IDENTITY);

    // And they no longer advance
    let again = updater.tick(&frozen);
    assert_eq!(*again.angles(), stored);
}

#[test]
fn test_explicit_manual_zero_gives_zero_rotation() {
    let mut updater = FrameUpdater::default();
    for _ in 0..10 {
        updater.tick(&ControlPanel::default());
    }

    let mut panel = ControlPanel::new(false);
    for plane in RotationPlane::ALL {
        panel.set_manual(plane, 0.0);
    }
    let frame = updater.tick(&panel);

    assert_eq!(*frame.angles(), PlaneAngles::ZERO);
    let projection = PerspectiveProjection::default();
    for (i, v) in Tesseract4D::unit().vertices().iter().enumerate() {
        assert_eq!(frame.points()[i], projection.project(*v));
    }
}

#[test]
fn test_thousand_ticks_match_direct_modulo() {
    let mut updater = FrameUpdater::default();
    let mut panel = ControlPanel::new(false);
    panel.control_mut(RotationPlane::XY).auto_advance = true;

    for _ in 0..1000 {
        updater.tick(&panel);
    }

    let direct = (1000.0f64 * 0.01f64).rem_euclid(std::f64::consts::TAU) as f32;
    let stepped = updater.auto().angle(RotationPlane::XY);
    assert!((stepped - direct).abs() < 0.001, "stepped {} vs direct {}", stepped, direct);
    assert_eq!(updater.auto().angle(RotationPlane::XZ), 0.0);
}

#[test]
fn test_center_relative_corner_projection() {
    let projection = PerspectiveProjection::new(2.5);
    let corner = Vec4::splat(1.0) - Tesseract4D::unit().center();
    assert_eq!(projection.project(corner), [0.625, 0.625, 0.625]);
}

#[test]
fn test_theta_then_minus_theta_restores_projection() {
    let updater = FrameUpdater::default();
    let reference = updater.project_with(&PlaneAngles::ZERO);
    let center = updater.tesseract().center();

    for plane in RotationPlane::ALL {
        let mut forward = PlaneAngles::ZERO;
        forward[plane] = 1.3;
        let rotated = updater.project_with(&forward);

        let back = plane.matrix(-1.3);
        for i in 0..16 {
            let restored = mat4::rotate_about(back, rotated.rotated()[i], center);
            let projected = updater.projection().project(restored);
            assert!(point_approx_eq(projected, reference.points()[i]),
                "{} vertex {}: {:?} vs {:?}", plane, i, projected, reference.points()[i]);
        }
    }
}

#[test]
fn test_slider_driven_frame_uses_slider_angle() {
    let mapping = SliderMapping::default();
    let mut panel = ControlPanel::default();
    panel.nudge(RotationPlane::ZW, 157, &mapping);
    assert_eq!(panel.control(RotationPlane::ZW).source, AngleSource::Manual(1.57));

    let mut updater = FrameUpdater::new(AutoRotation::new(), PerspectiveProjection::default());
    let frame = updater.tick(&panel);
    assert_eq!(frame.angles()[RotationPlane::ZW], 1.57);
    assert_eq!(frame.angles()[RotationPlane::XY], 0.01);
}

#[test]
fn test_every_frame_has_32_segments_in_edge_order() {
    let mut updater = FrameUpdater::default();
    let panel = ControlPanel::default();
    for _ in 0..5 {
        let frame = updater.tick(&panel);
        assert_eq!(frame.segments().len(), 32);
        for (segment, &(a, b)) in frame.segments().iter().zip(EDGES.iter()) {
            assert_eq!(segment.start, frame.points()[a]);
            assert_eq!(segment.end, frame.points()[b]);
        }
    }
}

#[test]
fn test_rotated_w_stays_in_front_of_eye() {
    let mut updater = FrameUpdater::default();
    let panel = ControlPanel::default();
    for _ in 0..2000 {
        let frame = updater.tick(&panel);
        for v in frame.rotated() {
            assert!(v.w > -0.5 - EPSILON && v.w < 1.5 + EPSILON, "w {} out of range", v.w);
            assert!(updater.projection().is_safe(v.w));
        }
    }
}
