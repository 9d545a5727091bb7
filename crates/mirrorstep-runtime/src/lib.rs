//! Mirrorstep Runtime - Frame loop infrastructure
//!
//! Provides the building blocks a host uses to drive twin movement:
//! - `GameClock` — frame delta tracking with a fixed-timestep accumulator
//! - `InputState` — edge-triggered keyboard tracking with action bindings
//! - `MotionEvent` / `EventBus` — queue of movement outcomes for the host
//! - `RuntimeSystem` — trait for systems ticked by the frame loop

mod clock;
mod event;
mod event_bus;
mod input;
mod system;

pub use clock::GameClock;
pub use event::MotionEvent;
pub use event_bus::EventBus;
pub use input::InputState;
pub use system::RuntimeSystem;
