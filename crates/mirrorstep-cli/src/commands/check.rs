//! Level check command

use anyhow::Result;
use mirrorstep_core::Direction;
use mirrorstep_motion::{load_level, resolver, Role};

pub fn run(path: &str) -> Result<()> {
    let level = load_level(path)?;
    let map = level.obstacle_map();
    let controller = level.controller_with(&map)?;
    let config = controller.config();

    println!("Level: {}", level.level.name);
    if let Some(desc) = &level.level.description {
        println!("  {}", desc);
    }
    println!(
        "  grid {} | {:.3}s per move | bump {} | probe radius {}",
        config.grid_size,
        config.cycle_duration(),
        config.bump_distance,
        config.collision_radius
    );
    println!("  {} obstacle cell(s)", level.obstacles.len());
    for role in Role::BOTH {
        println!(
            "  {} starts at {:?}",
            role.as_str(),
            controller.twins().position(role).to_array()
        );
    }

    println!("\nFirst move:");
    for direction in Direction::ALL {
        match resolver::resolve(&map, config, controller.twins(), direction) {
            Some(cmd) => println!(
                "  {:<5}  primary {:<7}  mirrored {}",
                direction.as_str(),
                describe(cmd.primary_can_move),
                describe(cmd.mirrored_can_move)
            ),
            None => println!("  {:<5}  both blocked, input dropped", direction.as_str()),
        }
    }

    Ok(())
}

fn describe(can_move: bool) -> &'static str {
    if can_move {
        "moves"
    } else {
        "bumps"
    }
}
