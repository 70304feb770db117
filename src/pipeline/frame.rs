//! Grid frames - one sampled snapshot of every card's pose.
//!
//! The renderer never reads the clock or the latch. It receives a
//! [`GridFrame`] taken at a single instant, so every card in one render
//! agrees on the time.

use crate::config::RevealConfig;
use crate::content::FeatureGrid;
use crate::state::{Pose, RevealState};

/// Grid state plus one pose per card, in card order.
#[derive(Debug, Clone, PartialEq)]
pub struct GridFrame {
    state: RevealState,
    poses: Vec<Pose>,
}

impl GridFrame {
    pub(crate) fn new(state: RevealState, poses: Vec<Pose>) -> Self {
        Self { state, poses }
    }

    /// Every card in its hidden pose (server render before the reveal).
    pub fn hidden(grid: &FeatureGrid, config: &RevealConfig) -> Self {
        Self::new(RevealState::Hidden, vec![Pose::hidden(config); grid.len()])
    }

    /// Every card at rest (no animation, e.g. reduced-motion hosts).
    pub fn settled(grid: &FeatureGrid) -> Self {
        Self::new(RevealState::Shown, vec![Pose::SHOWN; grid.len()])
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    /// Pose of card `index`, if the frame covers it.
    pub fn pose(&self, index: usize) -> Option<Pose> {
        self.poses.get(index).copied()
    }

    pub fn poses(&self) -> &[Pose] {
        &self.poses
    }
}
