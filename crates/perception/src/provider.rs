//! Perception provider boundary

use std::collections::VecDeque;

use crate::observation::FrameObservation;
use crate::PerceptionError;

/// Source of per-frame observations.
///
/// The only fallible boundary of the system: a failed frame means the caller
/// skips that tick entirely, without advancing any tracker state.
pub trait PerceptionProvider {
    /// Produce the next observation.
    ///
    /// `Ok(None)` means the stream has ended; `Err` means this frame failed
    /// and should be skipped.
    fn next_observation(&mut self) -> Result<Option<FrameObservation>, PerceptionError>;
}

/// Replays a fixed observation sequence.
///
/// Used by the demo binary and by scenario tests that drive the full
/// per-frame pipeline without a camera.
#[derive(Debug, Default)]
pub struct ScriptedProvider {
    frames: VecDeque<Result<FrameObservation, PerceptionError>>,
}

impl ScriptedProvider {
    pub fn new(frames: impl IntoIterator<Item = FrameObservation>) -> Self {
        Self {
            frames: frames.into_iter().map(Ok).collect(),
        }
    }

    /// Append one observation to the script
    pub fn push(&mut self, observation: FrameObservation) {
        self.frames.push_back(Ok(observation));
    }

    /// Append a frame that fails to acquire
    pub fn push_failure(&mut self, reason: &str) {
        self.frames
            .push_back(Err(PerceptionError::Acquisition(reason.to_string())));
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl PerceptionProvider for ScriptedProvider {
    fn next_observation(&mut self) -> Result<Option<FrameObservation>, PerceptionError> {
        match self.frames.pop_front() {
            None => Ok(None),
            Some(Ok(observation)) => Ok(Some(observation)),
            Some(Err(err)) => Err(err),
        }
    }
}
