//! Frame clock

use std::time::Instant;

/// Longest frame delta accepted in one step (avoids a spiral of death)
const MAX_FRAME_TIME: f64 = 0.25;

/// Tracks frame time for the per-tick driver.
///
/// Hosts running on wall time call [`GameClock::tick`]; headless drivers and
/// tests feed a known delta through [`GameClock::advance`].
pub struct GameClock {
    /// Total elapsed game time in seconds
    pub total_time: f64,
    /// Time since last frame in seconds
    pub delta_time: f64,
    /// Last tick instant
    last_instant: Instant,
    /// Whether this is the first tick
    first_tick: bool,
}

impl Default for GameClock {
    fn default() -> Self {
        Self {
            total_time: 0.0,
            delta_time: 0.0,
            last_instant: Instant::now(),
            first_tick: true,
        }
    }
}

impl GameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock from wall time. Call once per frame.
    pub fn tick(&mut self) {
        let now = Instant::now();

        if self.first_tick {
            self.first_tick = false;
            self.last_instant = now;
            self.delta_time = 0.0;
            return;
        }

        let elapsed = now.duration_since(self.last_instant).as_secs_f64();
        self.last_instant = now;
        self.advance(elapsed);
    }

    /// Advance the clock by an explicit delta in seconds
    pub fn advance(&mut self, dt: f64) {
        self.first_tick = false;
        self.delta_time = dt.clamp(0.0, MAX_FRAME_TIME);
        self.total_time += self.delta_time;
    }
}
