//! Headless move playback command

use crate::Backend;
use anyhow::{Context, Result};
use mirrorstep_core::Direction;
use mirrorstep_motion::{load_level, ObstacleQuery, TwinController};
use mirrorstep_physics::PhysicsObstacles;
use mirrorstep_runtime::{GameClock, InputState, MotionEvent};
use serde::Serialize;
use winit::keyboard::KeyCode;

/// Upper bound on frames spent in one cycle before giving up
const MAX_FRAMES_PER_MOVE: usize = 10_000;

pub struct SimulateArgs {
    pub level: String,
    pub moves: String,
    pub fps: f64,
    pub backend: Backend,
    pub format: String,
}

/// What one input did
#[derive(Debug, Serialize, PartialEq)]
pub struct StepReport {
    pub direction: Direction,
    /// "moved", "bumped" per twin, or "dropped" when both were blocked
    pub primary: &'static str,
    pub mirrored: &'static str,
    pub frames: usize,
    pub primary_position: [f32; 3],
    pub mirrored_position: [f32; 3],
}

pub fn run(args: SimulateArgs) -> Result<()> {
    if !(args.fps.is_finite() && args.fps > 0.0) {
        anyhow::bail!("--fps must be a positive number, got {}", args.fps);
    }

    let level = load_level(&args.level)
        .with_context(|| format!("failed to load level '{}'", args.level))?;
    let directions = parse_moves(&args.moves)?;

    let reports = match args.backend {
        Backend::Map => play(level.controller_with(level.obstacle_map())?, &directions, args.fps)?,
        Backend::Physics => play(
            level.controller_with(PhysicsObstacles::from_level(&level))?,
            &directions,
            args.fps,
        )?,
    };

    println!("{}", render(&level.level.name, &reports, &args.format)?);
    Ok(())
}

/// Format step reports as `text` or `json`
pub fn render(level_name: &str, reports: &[StepReport], format: &str) -> Result<String> {
    match format {
        "json" => Ok(serde_json::to_string_pretty(reports)?),
        "text" => {
            let mut out = format!("Level: {} ({} move(s))", level_name, reports.len());
            for (i, r) in reports.iter().enumerate() {
                out.push_str(&format!(
                    "\n  {:>3}. {:<5}  primary {:<7} mirrored {:<7}  -> {:?} / {:?}  [{} frames]",
                    i + 1,
                    r.direction.as_str(),
                    r.primary,
                    r.mirrored,
                    r.primary_position,
                    r.mirrored_position,
                    r.frames
                ));
            }
            Ok(out)
        }
        _ => anyhow::bail!("Unknown format: {}", format),
    }
}

/// Parse a move list such as `"r, r up L"`
pub fn parse_moves(moves: &str) -> Result<Vec<Direction>> {
    moves
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<Direction>().map_err(anyhow::Error::from))
        .collect()
}

fn key_for(direction: Direction) -> KeyCode {
    match direction {
        Direction::Up => KeyCode::KeyW,
        Direction::Down => KeyCode::KeyS,
        Direction::Left => KeyCode::KeyA,
        Direction::Right => KeyCode::KeyD,
    }
}

/// Press each direction for one frame, then tick until the twins are at rest
pub fn play<Q: ObstacleQuery>(
    mut controller: TwinController<Q>,
    directions: &[Direction],
    fps: f64,
) -> Result<Vec<StepReport>> {
    let mut clock = GameClock::new();
    let mut input = InputState::new();
    let frame = 1.0 / fps;
    let mut reports = Vec::with_capacity(directions.len());

    for &direction in directions {
        let key = key_for(direction);
        input.process_key_down(key);

        let mut frames = 0;
        loop {
            clock.advance(frame);
            controller.tick(&input, clock.delta_time);
            input.end_frame();
            frames += 1;

            if !controller.is_busy() {
                break;
            }
            if frames >= MAX_FRAMES_PER_MOVE {
                anyhow::bail!("move {} did not finish within {} frames", direction, frames);
            }
        }
        input.process_key_up(key);

        let (primary, mirrored) = summarize(&controller.drain_events());
        let [primary_position, mirrored_position] = controller.positions();
        log::debug!("{} -> primary {}, mirrored {}", direction, primary, mirrored);

        reports.push(StepReport {
            direction,
            primary,
            mirrored,
            frames,
            primary_position: primary_position.to_array(),
            mirrored_position: mirrored_position.to_array(),
        });
    }

    Ok(reports)
}

fn summarize(events: &[MotionEvent]) -> (&'static str, &'static str) {
    let describe = |moves: bool| if moves { "moved" } else { "bumped" };
    for event in events {
        match event {
            MotionEvent::CycleStarted {
                primary_moves,
                mirrored_moves,
                ..
            } => return (describe(*primary_moves), describe(*mirrored_moves)),
            MotionEvent::InputDropped { .. } => return ("dropped", "dropped"),
            _ => {}
        }
    }
    ("idle", "idle")
}

#[cfg(test)]
mod tests {
    use super::*;
    use mirrorstep_motion::load_level_str;

    const LEVEL: &str = r#"
[level]
name = "test"

[characters]
primary = [0.0, 0.0, 0.0]
mirrored = [0.0, 0.0, 0.0]

[[obstacles]]
cell = [1, 0]

[[obstacles]]
cell = [0, -1]
"#;

    #[test]
    fn test_parse_moves() {
        let dirs = parse_moves("r, R up  left,d").unwrap();
        assert_eq!(
            dirs,
            vec![
                Direction::Right,
                Direction::Right,
                Direction::Up,
                Direction::Left,
                Direction::Down
            ]
        );
        assert!(parse_moves("r x").is_err());
        assert!(parse_moves("").unwrap().is_empty());
    }

    #[test]
    fn test_play_reports_each_outcome() {
        let level = load_level_str(LEVEL).unwrap();
        let ctl = level.controller_with(level.obstacle_map()).unwrap();
        let reports = play(
            ctl,
            &[Direction::Right, Direction::Down, Direction::Left],
            60.0,
        )
        .unwrap();

        // Right: primary bumps into (1,0), mirrored walks to (-1,0)
        assert_eq!(reports[0].primary, "bumped");
        assert_eq!(reports[0].mirrored, "moved");
        assert_eq!(reports[0].primary_position, [0.0, 0.0, 0.0]);
        assert_eq!(reports[0].mirrored_position, [-1.0, 0.0, 0.0]);
        assert!(reports[0].frames >= 12);

        // Down: primary blocked by (0,-1), mirrored at (-1,0) moves to (-1,-1)
        assert_eq!(reports[1].primary, "bumped");
        assert_eq!(reports[1].mirrored_position, [-1.0, -1.0, 0.0]);

        // Left: primary walks to (-1,0); mirrored heads right into (0,-1)
        assert_eq!(reports[2].primary, "moved");
        assert_eq!(reports[2].mirrored, "bumped");
        assert_eq!(reports[2].primary_position, [-1.0, 0.0, 0.0]);
        assert_eq!(reports[2].mirrored_position, [-1.0, -1.0, 0.0]);
    }

    #[test]
    fn test_render_formats() {
        let level = load_level_str(LEVEL).unwrap();
        let ctl = level.controller_with(level.obstacle_map()).unwrap();
        let reports = play(ctl, &[Direction::Right], 60.0).unwrap();

        let text = render("test", &reports, "text").unwrap();
        assert!(text.starts_with("Level: test (1 move(s))"));
        assert!(text.contains("primary bumped"));

        let json: serde_json::Value =
            serde_json::from_str(&render("test", &reports, "json").unwrap()).unwrap();
        assert_eq!(json[0]["direction"], "right");
        assert_eq!(json[0]["mirrored"], "moved");

        let err = render("test", &reports, "jsno").unwrap_err();
        assert!(err.to_string().contains("Unknown format: jsno"));
    }

    #[test]
    fn test_play_dropped_input_takes_one_frame() {
        let level = load_level_str(LEVEL).unwrap();
        let mut map = level.obstacle_map();
        map.add_cell(-1, 0, 1.0, 0);
        let ctl = level.controller_with(map).unwrap();

        let reports = play(ctl, &[Direction::Right], 30.0).unwrap();
        assert_eq!(reports[0].primary, "dropped");
        assert_eq!(reports[0].frames, 1);
    }

    #[test]
    fn test_physics_backend_matches_map() {
        let level = load_level_str(LEVEL).unwrap();
        let moves = parse_moves("r d l u u").unwrap();
        let from_map = play(
            level.controller_with(level.obstacle_map()).unwrap(),
            &moves,
            60.0,
        )
        .unwrap();
        let from_physics = play(
            level
                .controller_with(PhysicsObstacles::from_level(&level))
                .unwrap(),
            &moves,
            60.0,
        )
        .unwrap();
        assert_eq!(from_map, from_physics);
    }
}
