//! Runtime configuration, read from the environment.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_FPS;

pub const HIGH_SCORE_ENV: &str = "SPACE_JUMPER_HIGH_SCORE";
pub const LOG_ENV: &str = "SPACE_JUMPER_LOG";
pub const FPS_ENV: &str = "SPACE_JUMPER_FPS";

const HIGH_SCORE_FILE: &str = ".space_jumper_high_score.json";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub high_score_path: PathBuf,
    pub log_path: PathBuf,
    /// Target frames per second for every screen loop.
    pub fps: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            high_score_path: default_high_score_path(std::env::var_os("HOME").map(PathBuf::from)),
            log_path: std::env::temp_dir().join("space_jumper.log"),
            fps: DEFAULT_FPS,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source; unset keys keep defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Config::default();
        if let Some(path) = lookup(HIGH_SCORE_ENV).filter(|s| !s.is_empty()) {
            config.high_score_path = PathBuf::from(path);
        }
        if let Some(path) = lookup(LOG_ENV).filter(|s| !s.is_empty()) {
            config.log_path = PathBuf::from(path);
        }
        if let Some(raw) = lookup(FPS_ENV) {
            match raw.trim().parse::<u32>() {
                Ok(fps) => config.fps = fps.clamp(1, 240),
                Err(_) => log::warn!("ignoring {}={:?}", FPS_ENV, raw),
            }
        }
        config
    }

    pub fn frame_duration(&self) -> std::time::Duration {
        std::time::Duration::from_micros(1_000_000 / u64::from(self.fps.max(1)))
    }
}

fn default_high_score_path(home: Option<PathBuf>) -> PathBuf {
    match home {
        Some(home) => home.join(HIGH_SCORE_FILE),
        None => PathBuf::from("high_score.json"),
    }
}
