//! Pressing fire after reset.
use crate::act::{ensure_label, ensure_num_actions, ActionMeaning};
use anyhow::Result;
use log::{debug, trace};
use stagehand_core::{Act, Env, Step};

/// Takes actions 1 (`FIRE`) and 2 on reset, for games that stay frozen
/// until the player fires.
pub struct FireResetEnv<E> {
    env: E,
}

impl<E: Env> FireResetEnv<E> {
    /// Wraps `env`.
    ///
    /// Fails if action 1 of `env` is not `FIRE` or there are fewer than 3 actions.
    pub fn new(env: E) -> Result<Self> {
        let labels = env.action_labels();
        ensure_label(labels, 1, ActionMeaning::Fire)?;
        ensure_num_actions(labels, 3)?;

        Ok(Self { env })
    }
}

impl<E: Env> Env for FireResetEnv<E> {
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
        trace!("FireResetEnv::reset()");
        self.env.reset()?;
        self.env.step(&Act::FIRE)?;
        let obs = self.env.step(&Act::new(2))?.obs;
        debug!("Fired after reset of {}", self.env.name());
        Ok(obs)
    }

    fn step(&mut self, act: &Act) -> Result<Step<Self>> {
        trace!("FireResetEnv::step()");
        Ok(self.env.step(act)?.cast())
    }
}
