//! High-score persistence: a single JSON integer in a flat file.

use std::fs;
use std::io;
use std::path::Path;

/// Stored high score, or 0 when the file is missing or unreadable.
pub fn load_high_score(path: &Path) -> u32 {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            log::info!("no high score at {}, starting from 0", path.display());
            return 0;
        }
        Err(err) => {
            log::warn!("could not read {}: {}", path.display(), err);
            return 0;
        }
    };
    match serde_json::from_str::<u32>(text.trim()) {
        Ok(score) => score,
        Err(err) => {
            log::warn!("ignoring corrupt high score in {}: {}", path.display(), err);
            0
        }
    }
}

/// Overwrite the stored high score.
pub fn save_high_score(path: &Path, score: u32) -> io::Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    let json = serde_json::to_string(&score)?;
    fs::write(path, json)?;
    log::info!("high score {} saved to {}", score, path.display());
    Ok(())
}

/// Persist `score` only if it beats `stored`; returns the resulting best.
pub fn record_score(path: &Path, stored: u32, score: u32) -> io::Result<u32> {
    if score > stored {
        save_high_score(path, score)?;
        Ok(score)
    } else {
        Ok(stored)
    }
}
