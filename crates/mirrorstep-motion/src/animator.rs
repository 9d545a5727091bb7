//! Move cycle playback
//!
//! A move cycle animates both twins at once over `1 / move_speed` seconds.
//! A twin that may move eases from its start cell to the next cell along a
//! smooth-step curve. A blocked twin bumps: it slides linearly a short way
//! toward the obstacle during the first half of the cycle and back during
//! the second half. When the cycle ends every twin is snapped to its exact
//! resting cell, so interpolation error never accumulates across moves.
//!
//! The cycle is an explicit state machine. The host drives it by calling
//! [`MovementAnimator::advance`] once per frame with the frame delta.

use crate::character::{Role, TwinPair};
use crate::resolver::MoveCommand;
use mirrorstep_core::easing::smooth_step;
use mirrorstep_core::{Direction, MovementConfig, Vec3};

/// Where a twin is within its cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Easing toward the next cell
    Sliding,
    /// Blocked, pushing toward the bump point
    BumpOut,
    /// Blocked, returning to the start cell
    BumpBack,
}

/// Per-twin animation data, captured once at cycle start
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacterTrack {
    pub start: Vec3,
    /// One full cell away from `start` along the twin's direction
    pub target: Vec3,
    /// `bump_distance` away from `start` along the twin's direction
    pub bump: Vec3,
    pub moved: bool,
}

impl CharacterTrack {
    pub fn new(start: Vec3, dir: Vec3, moved: bool, config: &MovementConfig) -> Self {
        Self {
            start,
            target: start + dir * config.grid_size,
            bump: start + dir * config.bump_distance,
            moved,
        }
    }

    pub fn phase(&self, elapsed: f64, duration: f64) -> Phase {
        if self.moved {
            Phase::Sliding
        } else if elapsed < duration * 0.5 {
            Phase::BumpOut
        } else {
            Phase::BumpBack
        }
    }

    /// Position at `elapsed` seconds into a cycle of `duration` seconds
    pub fn sample(&self, elapsed: f64, duration: f64) -> Vec3 {
        let half = duration * 0.5;
        match self.phase(elapsed, duration) {
            Phase::Sliding => {
                let t = smooth_step(0.0, 1.0, (elapsed / duration) as f32);
                Vec3::lerp(self.start, self.target, t)
            }
            Phase::BumpOut => Vec3::lerp(self.start, self.bump, (elapsed / half) as f32),
            Phase::BumpBack => {
                Vec3::lerp(self.bump, self.start, ((elapsed - half) / half) as f32)
            }
        }
    }

    /// The exact cell the twin occupies once the cycle is over
    pub fn rest(&self) -> Vec3 {
        if self.moved {
            self.target
        } else {
            self.start
        }
    }
}

/// An in-flight move cycle
#[derive(Debug, Clone, PartialEq)]
pub struct Cycle {
    pub direction: Direction,
    pub elapsed: f64,
    pub duration: f64,
    tracks: [CharacterTrack; 2],
}

impl Cycle {
    pub fn track(&self, role: Role) -> &CharacterTrack {
        &self.tracks[role.index()]
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum AnimatorState {
    #[default]
    Idle,
    Animating(Cycle),
}

/// Plays one move cycle at a time
#[derive(Debug, Default)]
pub struct MovementAnimator {
    state: AnimatorState,
}

impl MovementAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// True from cycle start until the final snap has been applied
    pub fn is_busy(&self) -> bool {
        matches!(self.state, AnimatorState::Animating(_))
    }

    pub fn state(&self) -> &AnimatorState {
        &self.state
    }

    /// Begin a cycle for `command`, capturing both twins' start positions.
    ///
    /// Returns false and leaves the running cycle untouched if one is
    /// already in progress.
    pub fn start(
        &mut self,
        command: &MoveCommand,
        twins: &TwinPair,
        config: &MovementConfig,
    ) -> bool {
        if self.is_busy() {
            log::warn!("move cycle requested while another is running, ignoring");
            return false;
        }

        let track = |role: Role| {
            CharacterTrack::new(
                twins.position(role),
                command.direction_for(role),
                command.can_move(role),
                config,
            )
        };

        self.state = AnimatorState::Animating(Cycle {
            direction: command.direction,
            elapsed: 0.0,
            duration: config.cycle_duration(),
            tracks: [track(Role::Primary), track(Role::Mirrored)],
        });
        true
    }

    /// Advance the running cycle by `dt` seconds and write positions.
    ///
    /// On the tick where elapsed time reaches the cycle duration both twins
    /// are set to their exact resting cells, the animator returns to idle,
    /// and the final `[primary, mirrored]` positions are returned.
    pub fn advance(&mut self, dt: f64, twins: &mut TwinPair) -> Option<[Vec3; 2]> {
        let AnimatorState::Animating(cycle) = &mut self.state else {
            return None;
        };

        cycle.elapsed += dt.max(0.0);

        if cycle.elapsed < cycle.duration {
            for role in Role::BOTH {
                twins.get_mut(role).position =
                    cycle.track(role).sample(cycle.elapsed, cycle.duration);
            }
            return None;
        }

        for role in Role::BOTH {
            twins.get_mut(role).position = cycle.track(role).rest();
        }
        self.state = AnimatorState::Idle;
        Some(twins.positions())
    }
}
