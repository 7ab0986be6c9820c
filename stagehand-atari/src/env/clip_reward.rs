//! Clipping of rewards to their sign.
use anyhow::Result;
use log::trace;
use stagehand_core::{Act, Env, Step};

/// Sign of `r`; zero and NaN are returned unchanged.
fn sign(r: f32) -> f32 {
    if r > 0.0 {
        1.0
    } else if r < 0.0 {
        -1.0
    } else {
        r
    }
}

/// Replaces rewards with their sign.
pub struct ClipRewardEnv<E> {
    env: E,
}

impl<E: Env> ClipRewardEnv<E> {
    /// Wraps `env`.
    pub fn new(env: E) -> Self {
        Self { env }
    }
}

impl<E: Env> Env for ClipRewardEnv<E> {
    type Obs = E::Obs;
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
        trace!("ClipRewardEnv::reset()");
        self.env.reset()
    }

    fn step(&mut self, act: &Act) -> Result<Step<Self>> {
        trace!("ClipRewardEnv::step()");
        let mut step = self.env.step(act)?.cast::<Self>();
        step.reward = sign(step.reward);
        Ok(step)
    }
}
