//! Test and helper mocks for kinsense_core

use std::collections::VecDeque;

use kinsense_traits::{AngleSensor, PresenceSensor};

/// A presence sensor that replays a fixed script of readings, then stays
/// inactive forever once exhausted.
pub struct ScriptedPresence {
    frames: VecDeque<bool>,
}

impl ScriptedPresence {
    pub fn new(frames: impl IntoIterator<Item = bool>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }
}

impl PresenceSensor for ScriptedPresence {
    fn read(&mut self) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.frames.pop_front().unwrap_or(false))
    }
}

/// An angle sensor that replays a fixed script of readings and errors once
/// exhausted; useful for driving the tracker with a scripted waveform.
pub struct ScriptedAngle {
    frames: VecDeque<f64>,
}

impl ScriptedAngle {
    pub fn new(frames: impl IntoIterator<Item = f64>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }
}

impl AngleSensor for ScriptedAngle {
    fn read(&mut self) -> Result<f64, Box<dyn std::error::Error + Send + Sync>> {
        self.frames
            .pop_front()
            .ok_or_else(|| Box::from(std::io::Error::other("angle script exhausted")))
    }
}

/// An angle sensor that always reads the same value; useful for sampler
/// lifecycle tests where the signal content does not matter.
pub struct SteadyAngle(pub f64);

impl AngleSensor for SteadyAngle {
    fn read(&mut self) -> Result<f64, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.0)
    }
}

/// A presence sensor that always fails; exercises the hardware-fault path.
pub struct FaultyPresence;

impl PresenceSensor for FaultyPresence {
    fn read(&mut self) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        Err(Box::new(std::io::Error::other("presence sensor fault")))
    }
}
