//! Movement outcome events

use mirrorstep_core::{Direction, Vec3};

/// Events emitted by the twin controller for the host to consume
/// (sound cues, move counters, undo history).
#[derive(Debug, Clone, PartialEq)]
pub enum MotionEvent {
    /// A move cycle began. `false` means that twin bumps instead of moving.
    CycleStarted {
        direction: Direction,
        primary_moves: bool,
        mirrored_moves: bool,
    },
    /// A move cycle completed; positions are the exact resting cells
    CycleFinished { primary: Vec3, mirrored: Vec3 },
    /// Both twins were blocked, the input was discarded
    InputDropped { direction: Direction },
    /// Input arrived while a cycle was running and was ignored
    InputIgnored { direction: Direction },
}
