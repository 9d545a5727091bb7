//! Sample level creation command

use anyhow::Result;
use mirrorstep_motion::LevelFile;
use std::fs;
use std::path::Path;

pub fn run(path: &str) -> Result<()> {
    let target = Path::new(path);

    if target.exists() {
        anyhow::bail!("File '{}' already exists", path);
    }

    if let Some(parent) = target.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let name = target
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("level");
    let content = LevelFile::sample(name).to_toml_string()?;
    fs::write(target, content)?;

    println!("Created level '{}' at {}", name, path);
    println!("Try: mirrorstep simulate {} --moves \"r u l\"", path);
    Ok(())
}
