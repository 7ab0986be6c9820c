//! Configuration of the preprocessing pipeline.
use crate::frame::FrameTransformConfig;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use stagehand_core::error::WrapperError;
use std::{
    default::Default,
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configuration of the pipelines built by [`wrap_deepmind`] and
/// [`wrap_deepmind_ram`].
///
/// [`wrap_deepmind`]: crate::wrap_deepmind
/// [`wrap_deepmind_ram`]: crate::wrap_deepmind_ram
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
#[serde(default)]
pub struct AtariWrapperConfig {
    /// Maximum number of no-ops after reset.
    pub noop_max: usize,

    /// Number of simulator steps per pipeline step.
    pub skip: usize,

    /// If `true`, loss of a life ends an episode.
    pub episode_life: bool,

    /// If `true`, rewards are clipped to their sign.
    pub clip_rewards: bool,

    /// If `true`, fire is pressed after reset in games having a `FIRE` action.
    pub fire_reset: bool,

    /// Conversion of raw screens, used by the visual pipeline only.
    pub frame: FrameTransformConfig,
}

impl Default for AtariWrapperConfig {
    fn default() -> Self {
        Self {
            noop_max: 30,
            skip: 4,
            episode_life: true,
            clip_rewards: true,
            fire_reset: true,
            frame: FrameTransformConfig::default(),
        }
    }
}

impl AtariWrapperConfig {
    /// Sets the maximum number of no-ops after reset.
    pub fn noop_max(mut self, v: usize) -> Self {
        self.noop_max = v;
        self
    }

    /// Sets the number of simulator steps per pipeline step.
    pub fn skip(mut self, v: usize) -> Self {
        self.skip = v;
        self
    }

    /// Sets if loss of a life ends an episode.
    pub fn episode_life(mut self, v: bool) -> Self {
        self.episode_life = v;
        self
    }

    /// Sets if rewards are clipped.
    pub fn clip_rewards(mut self, v: bool) -> Self {
        self.clip_rewards = v;
        self
    }

    /// Sets if fire is pressed after reset.
    pub fn fire_reset(mut self, v: bool) -> Self {
        self.fire_reset = v;
        self
    }

    /// Sets the configuration of frame conversion.
    pub fn frame(mut self, v: FrameTransformConfig) -> Self {
        self.frame = v;
        self
    }

    /// Configuration for evaluation.
    ///
    /// Episodes end only at game over and rewards are not clipped, so the
    /// returns are the scores of the game.
    pub fn eval(mut self) -> Self {
        self.episode_life = false;
        self.clip_rewards = false;
        self
    }

    /// Checks the values.
    pub fn validate(&self) -> Result<()> {
        if self.noop_max == 0 {
            return Err(WrapperError::InvalidConfig("noop_max must be at least 1".into()).into());
        }
        if self.skip == 0 {
            return Err(WrapperError::InvalidConfig("skip must be at least 1".into()).into());
        }
        Ok(())
    }

    /// Constructs [`AtariWrapperConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`AtariWrapperConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}
