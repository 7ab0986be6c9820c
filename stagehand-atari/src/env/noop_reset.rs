//! Random number of no-ops after reset.
use crate::act::{ensure_label, ActionMeaning};
use anyhow::Result;
use log::{debug, trace};
use rand::{rngs::SmallRng, Rng};
use stagehand_core::{error::WrapperError, Act, Env, Step};

/// Samples initial states by taking a random number of no-ops on reset.
///
/// The number of no-ops is drawn uniformly from `1..=noop_max` with the
/// random number generator given at construction, so pipelines seeded alike
/// start alike.
pub struct NoopResetEnv<E, R = SmallRng> {
    env: E,
    noop_max: usize,
    rng: R,
}

impl<E: Env, R: Rng> NoopResetEnv<E, R> {
    /// Wraps `env`.
    ///
    /// Fails if action 0 of `env` is not `NOOP` or `noop_max` is zero.
    pub fn new(env: E, noop_max: usize, rng: R) -> Result<Self> {
        if noop_max == 0 {
            return Err(WrapperError::InvalidConfig("noop_max must be at least 1".into()).into());
        }
        ensure_label(env.action_labels(), 0, ActionMeaning::Noop)?;

        Ok(Self { env, noop_max, rng })
    }
}

impl<E: Env, R: Rng> Env for NoopResetEnv<E, R> {
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
        trace!("NoopResetEnv::reset()");
        self.env.reset()?;

        let noops = self.rng.gen_range(1..=self.noop_max);
        debug!("{} no-ops after reset", noops);
        let mut obs = self.env.step(&Act::NOOP)?.obs;
        for _ in 1..noops {
            obs = self.env.step(&Act::NOOP)?.obs;
        }

        Ok(obs)
    }

    fn step(&mut self, act: &Act) -> Result<Step<Self>> {
        trace!("NoopResetEnv::step()");
        Ok(self.env.step(act)?.cast())
    }
}
