//! Headless host that plays a `Scenario` the way a render loop would
//!
//! Feeds a fixed frame delta into [`Scenario::tick`], reads back the
//! snapshot, lays out both bobs and the energy bars, and consumes the
//! collision flash once per frame. Detaching stops further ticks.

use log::info;

use crate::error::SimError;
use crate::simulation::energy::EnergyShares;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{NVec2, StateSnapshot};
use crate::visualization::layout::angle_to_point;

/// Everything the presentation needs to draw one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameRecord {
    pub snapshot: StateSnapshot,
    pub bobs: [NVec2; 2],
    pub shares: EnergyShares,
    pub flash: bool, // a collision was resolved during this frame
}

pub struct HeadlessHost {
    pub scenario: Scenario,
    pub pivot: NVec2,
    frame_delta: f64,
    attached: bool,
    elapsed: f64, // wall time fed to the scenario so far
}

impl HeadlessHost {
    pub fn new(scenario: Scenario, fps: f64) -> Self {
        Self {
            scenario,
            pivot: NVec2::new(0.0, 2.5),
            frame_delta: 1.0 / fps,
            attached: true,
            elapsed: 0.0,
        }
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Stop ticking the scenario; state stays as of the last frame
    pub fn detach(&mut self) {
        self.attached = false;
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Play one frame of `delta` wall time; `None` once detached
    pub fn frame(&mut self, delta: f64) -> Result<Option<FrameRecord>, SimError> {
        if !self.attached {
            return Ok(None);
        }

        let snapshot = self.scenario.tick(delta)?;
        self.elapsed += delta;

        let length = self.scenario.parameters.length;
        let bobs = [
            angle_to_point(self.pivot, length, snapshot.theta1),
            angle_to_point(self.pivot, length, snapshot.theta2),
        ];

        Ok(Some(FrameRecord {
            snapshot,
            bobs,
            shares: self.scenario.energy_shares(),
            flash: self.scenario.take_flash().is_some(),
        }))
    }

    /// Play frames of the configured delta until `duration` of wall time has
    /// been fed (the last frame is shortened to land exactly on it)
    pub fn run_for(&mut self, duration: f64) -> Result<Vec<FrameRecord>, SimError> {
        let mut records = Vec::new();
        let end = self.elapsed + duration;

        while self.attached && end - self.elapsed > 1e-12 {
            let delta = self.frame_delta.min(end - self.elapsed);
            if let Some(record) = self.frame(delta)? {
                if record.flash {
                    info!(
                        "hit at t = {:.3}: kinetic shares {:.3} / {:.3}",
                        record.snapshot.t, record.shares.share1, record.shares.share2
                    );
                }
                records.push(record);
            }
        }

        Ok(records)
    }
}
