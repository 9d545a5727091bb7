//! Twin controller: input gating plus cycle playback

use crate::animator::MovementAnimator;
use crate::character::{Role, TwinPair};
use crate::obstacle::ObstacleQuery;
use crate::resolver::{self, MoveCommand};
use mirrorstep_core::{Direction, MirrorstepError, MovementConfig, Result, Vec3};
use mirrorstep_runtime::{EventBus, InputState, MotionEvent, RuntimeSystem};

/// Tolerance used when checking that start positions sit on the grid
const GRID_EPSILON: f32 = 1e-4;

/// What happened to a directional input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputOutcome {
    /// A move cycle started for this command
    Started(MoveCommand),
    /// Both twins were blocked; nothing happens
    Dropped,
    /// A cycle was already running; the input was discarded
    Ignored,
}

/// Owns both twins and runs at most one move cycle at a time.
///
/// Each frame the host passes its input and frame delta to
/// [`TwinController::tick`]. While a cycle is running every directional
/// press is ignored; the gate reopens on the tick the cycle snaps the twins
/// to their final cells.
pub struct TwinController<Q: ObstacleQuery> {
    config: MovementConfig,
    twins: TwinPair,
    animator: MovementAnimator,
    query: Q,
    events: EventBus,
}

impl<Q: ObstacleQuery> TwinController<Q> {
    /// Create a controller. Fails if the config is invalid or either start
    /// position is off the grid; positions within tolerance are snapped.
    pub fn new(config: MovementConfig, primary: Vec3, mirrored: Vec3, query: Q) -> Result<Self> {
        config.validate()?;
        let primary = snap_on_grid(&config, Role::Primary, primary)?;
        let mirrored = snap_on_grid(&config, Role::Mirrored, mirrored)?;

        Ok(Self {
            config,
            twins: TwinPair::new(primary, mirrored),
            animator: MovementAnimator::new(),
            query,
            events: EventBus::new(),
        })
    }

    /// Resolve one directional input.
    pub fn handle_direction(&mut self, direction: Direction) -> InputOutcome {
        if self.animator.is_busy() {
            self.events.push(MotionEvent::InputIgnored { direction });
            return InputOutcome::Ignored;
        }

        let Some(command) = resolver::resolve(&self.query, &self.config, &self.twins, direction)
        else {
            log::debug!("both twins blocked moving {}, input dropped", direction);
            self.events.push(MotionEvent::InputDropped { direction });
            return InputOutcome::Dropped;
        };

        self.animator.start(&command, &self.twins, &self.config);
        self.events.push(MotionEvent::CycleStarted {
            direction,
            primary_moves: command.primary_can_move,
            mirrored_moves: command.mirrored_can_move,
        });
        InputOutcome::Started(command)
    }

    /// Advance the running cycle. Returns final positions on completion.
    pub fn advance(&mut self, dt: f64) -> Option<[Vec3; 2]> {
        let finished = self.animator.advance(dt, &mut self.twins)?;
        log::debug!(
            "cycle finished: primary {:?} mirrored {:?}",
            finished[0].to_array(),
            finished[1].to_array()
        );
        self.events.push(MotionEvent::CycleFinished {
            primary: finished[0],
            mirrored: finished[1],
        });
        Some(finished)
    }

    /// One frame: read the edge-triggered direction, then advance by `dt`.
    ///
    /// Input is read before advancing, so a press on the frame a cycle ends
    /// is still ignored, and a newly started cycle already consumes this
    /// frame's delta.
    pub fn tick(&mut self, input: &InputState, dt: f64) -> Option<[Vec3; 2]> {
        if let Some(direction) = input.direction_just_pressed() {
            self.handle_direction(direction);
        }
        self.advance(dt)
    }

    pub fn is_busy(&self) -> bool {
        self.animator.is_busy()
    }

    pub fn animator(&self) -> &MovementAnimator {
        &self.animator
    }

    pub fn config(&self) -> &MovementConfig {
        &self.config
    }

    pub fn twins(&self) -> &TwinPair {
        &self.twins
    }

    /// Positions as `[primary, mirrored]`
    pub fn positions(&self) -> [Vec3; 2] {
        self.twins.positions()
    }

    /// Place both twins directly (level reset, undo). Refused mid-cycle or
    /// when a position is off the grid.
    pub fn set_positions(&mut self, primary: Vec3, mirrored: Vec3) -> Result<()> {
        if self.is_busy() {
            return Err(MirrorstepError::Level(
                "cannot reposition twins during a move cycle".into(),
            ));
        }
        let primary = snap_on_grid(&self.config, Role::Primary, primary)?;
        let mirrored = snap_on_grid(&self.config, Role::Mirrored, mirrored)?;
        self.twins = TwinPair::new(primary, mirrored);
        Ok(())
    }

    pub fn query(&self) -> &Q {
        &self.query
    }

    /// Mutable access to the obstacle backend, e.g. to open a door
    pub fn query_mut(&mut self) -> &mut Q {
        &mut self.query
    }

    pub fn drain_events(&mut self) -> Vec<MotionEvent> {
        self.events.drain()
    }
}

/// Resting positions are exact grid multiples; float noise within
/// `GRID_EPSILON` is rounded away here so it never carries into later cells.
fn snap_on_grid(config: &MovementConfig, role: Role, position: Vec3) -> Result<Vec3> {
    if position.is_grid_aligned(config.grid_size, GRID_EPSILON) {
        Ok(position.snap_to_grid(config.grid_size))
    } else {
        Err(MirrorstepError::Level(format!(
            "{} twin at {:?} is not on a {} unit grid",
            role.as_str(),
            position.to_array(),
            config.grid_size
        )))
    }
}

impl<Q: ObstacleQuery> RuntimeSystem for TwinController<Q> {
    fn initialize(&mut self) -> Result<()> {
        let [primary, mirrored] = self.positions();
        log::info!(
            "Twin controller initialized (primary at {:?}, mirrored at {:?}, {:.3}s per move)",
            primary.to_array(),
            mirrored.to_array(),
            self.config.cycle_duration()
        );
        Ok(())
    }

    fn update(&mut self, input: &InputState, dt: f64) -> Result<()> {
        self.tick(input, dt);
        Ok(())
    }

    fn shutdown(&mut self) -> Result<()> {
        log::info!("Twin controller shut down");
        Ok(())
    }

    fn name(&self) -> &str {
        "twins"
    }
}
