//! Greyscale and downsampling of frames.
use crate::{
    frame::{FrameTransform, FrameTransformConfig},
    obs::Frame,
};
use anyhow::Result;
use log::trace;
use stagehand_core::{Act, Env, Step};

/// Applies [`FrameTransform`] to every observation.
pub struct WarpFrameEnv<E> {
    env: E,
    transform: FrameTransform,
}

impl<E: Env<Obs = Frame>> WarpFrameEnv<E> {
    /// Wraps `env`. Fails if `config` is inconsistent.
    pub fn new(env: E, config: FrameTransformConfig) -> Result<Self> {
        Ok(Self {
            env,
            transform: FrameTransform::new(config)?,
        })
    }
}

impl<E: Env<Obs = Frame>> Env for WarpFrameEnv<E> {
    type Obs = Frame;
    type Info = E::Info;

    fn name(&self) -> &str {
        self.env.name()
    }

    fn action_labels(&self) -> &[String] {
        self.env.action_labels()
    }

    fn lives(&self) -> usize {
        self.env.lives()
    }

    fn reset(&mut self) -> Result<Self::Obs> {
        trace!("WarpFrameEnv::reset()");
        self.transform.transform(&self.env.reset()?)
    }

    fn step(&mut self, act: &Act) -> Result<Step<Self>> {
        trace!("WarpFrameEnv::step()");
        let step = self.env.step(act)?;
        let obs = self.transform.transform(&step.obs)?;
        Ok(Step::new(obs, step.reward, step.is_done, step.info))
    }
}
