//! Animation system
//!
//! Manages the fixed-rate animation loop:
//! - Elapsed time measurement
//! - Tick scheduling through the frame ticker
//! - Frame updates from the control panel

use std::time::{Duration, Instant};
use hypercube_core::{
    AutoRotation, ControlPanel, FrameTicker, FrameUpdater, PerspectiveProjection, ProjectedFrame,
};
use crate::config::{AnimationConfig, ProjectionConfig};

/// Result of an animation update
pub struct AnimationResult {
    /// Ticks run during this update
    pub ticks: u32,
    /// Whether a new frame was built and needs uploading
    pub frame_dirty: bool,
}

/// Runs due ticks and keeps the latest projected frame
pub struct AnimationSystem {
    ticker: FrameTicker,
    updater: FrameUpdater,
    frame: ProjectedFrame,
    last_update: Instant,
}

impl AnimationSystem {
    /// Create from config, building the initial frame without advancing
    pub fn new(
        animation: &AnimationConfig,
        projection: &ProjectionConfig,
        panel: &ControlPanel,
    ) -> Self {
        let ticker = FrameTicker::new(animation.tick_interval())
            .with_max_catch_up(animation.max_catch_up);
        let updater = FrameUpdater::new(
            AutoRotation::with_speeds(animation.plane_speeds()),
            PerspectiveProjection::new(projection.w_distance),
        );
        let frame = updater.project_with(&updater.effective_angles(panel));

        log::info!(
            "Animation: {:?} per tick, catch-up limit {}, w distance {}",
            ticker.interval(),
            ticker.max_catch_up(),
            projection.w_distance
        );

        Self {
            ticker,
            updater,
            frame,
            last_update: Instant::now(),
        }
    }

    /// Run ticks due since the last update
    pub fn update(&mut self, panel: &ControlPanel) -> AnimationResult {
        let now = Instant::now();
        let elapsed = now - self.last_update;
        self.last_update = now;
        self.advance(elapsed, panel)
    }

    /// Run ticks due after `elapsed` more time has passed
    pub fn advance(&mut self, elapsed: Duration, panel: &ControlPanel) -> AnimationResult {
        let ticks = self.ticker.accumulate(elapsed);
        for _ in 0..ticks {
            self.frame = self.updater.tick(panel);
        }
        AnimationResult {
            ticks,
            frame_dirty: ticks > 0,
        }
    }

    /// Rebuild the frame from the current angles without advancing
    ///
    /// Used after a control change so edits show before the next tick.
    pub fn refresh(&mut self, panel: &ControlPanel) {
        self.frame = self.updater.project_with(&self.updater.effective_angles(panel));
    }

    /// When the next tick is due
    pub fn next_deadline(&self) -> Instant {
        self.last_update + self.ticker.time_until_next_tick()
    }

    /// Zero the stored auto angles and restart timing
    pub fn reset(&mut self, panel: &ControlPanel) {
        self.updater.reset();
        self.ticker.reset();
        self.last_update = Instant::now();
        self.refresh(panel);
        log::info!("Animation reset");
    }

    pub fn frame(&self) -> &ProjectedFrame {
        &self.frame
    }

    pub fn updater(&self) -> &FrameUpdater {
        &self.updater
    }
}
