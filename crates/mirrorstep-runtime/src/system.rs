//! Runtime system trait

use crate::input::InputState;
use mirrorstep_core::Result;

/// A system that can be ticked by the frame loop
///
/// The host calls `update` once per frame with that frame's input and the
/// seconds elapsed since the previous frame, then clears the input edges.
pub trait RuntimeSystem {
    /// Called once when the system is first registered
    fn initialize(&mut self) -> Result<()>;

    /// Called once per frame
    fn update(&mut self, input: &InputState, dt: f64) -> Result<()>;

    /// Called when the system is being shut down
    fn shutdown(&mut self) -> Result<()>;

    /// Human-readable name for this system
    fn name(&self) -> &str;
}
