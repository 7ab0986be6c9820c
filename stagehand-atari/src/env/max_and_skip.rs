//! Action repeat with max pooling over the last two frames.
use crate::obs::ObsBuffer;
use anyhow::Result;
use log::trace;
use stagehand_core::{error::WrapperError, Act, Env, Step};

/// Repeats an action `skip` times and returns the element-wise maximum of the
/// last two observations.
///
/// Some games draw objects only on every other frame; taking the maximum
/// over the last two frames keeps them visible.
pub struct MaxAndSkipEnv<E: Env> {
    env: E,

    // Most recent raw observations, for max pooling across time steps
    obs_buffer: ObsBuffer<E::Obs>,

    skip: usize,
}

impl<E: Env> MaxAndSkipEnv<E> {
    /// Wraps `env`. Fails if `skip` is zero.
    pub fn new(env: E, skip: usize) -> Result<Self> {
        if skip == 0 {
            return Err(WrapperError::InvalidConfig("skip must be at least 1".into()).into());
        }

        Ok(Self {
            env,
            obs_buffer: ObsBuffer::new(2),
            skip,
        })
    }
}

impl<E: Env> Env for MaxAndSkipEnv<E> {
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

    /// Clears the frame buffer and initializes it with the first observation.
    fn reset(&mut self) -> Result<Self::Obs> {
        trace!("MaxAndSkipEnv::reset()");
        self.obs_buffer.clear();
        let obs = self.env.reset()?;
        self.obs_buffer.push(obs.clone());
        Ok(obs)
    }

    fn step(&mut self, act: &Act) -> Result<Step<Self>> {
        trace!("MaxAndSkipEnv::step()");
        let mut total_reward = 0f32;
        let mut last = None;

        for _ in 0..self.skip {
            let step = self.env.step(act)?;
            total_reward += step.reward;
            self.obs_buffer.push(step.obs);
            let is_done = step.is_done;
            last = Some((is_done, step.info));
            if is_done {
                break;
            }
        }

        let (is_done, info) = last
            .ok_or_else(|| WrapperError::InvalidConfig("skip must be at least 1".into()))?;
        let obs = self.obs_buffer.max()?;

        Ok(Step::new(obs, total_reward, is_done, info))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::{labels, ScriptedEnv};
    use crate::ActionMeaning::*;
    use ndarray::arr1;

    fn sim() -> Result<ScriptedEnv<crate::RamObs>> {
        // Frame 0 is the frame after reset, then frames alternate.
        let frames = vec![arr1(&[1u8, 9, 5]), arr1(&[7u8, 2, 5]), arr1(&[0u8, 3, 6])];
        ScriptedEnv::new("Scripted", labels(&[Noop, Fire, Right]), frames)
    }

    #[test]
    fn test_max_pooling() -> Result<()> {
        let mut env = MaxAndSkipEnv::new(sim()?.frames_cycle_from(1)?, 4)?;
        env.reset()?;
        for _ in 0..3 {
            let step = env.step(&Act::new(2))?;
            assert_eq!(step.obs, arr1(&[7u8, 3, 6]));
            assert!(!step.is_done);
        }
        Ok(())
    }

    #[test]
    fn test_reward_and_info() -> Result<()> {
        let sim = sim()?.rewards(vec![1.0, 2.0, 4.0, 8.0]);
        let probe = sim.probe();
        let mut env = MaxAndSkipEnv::new(sim, 4)?;
        env.reset()?;
        let step = env.step(&Act::new(1))?;
        assert_eq!(step.reward, 15.0);
        assert_eq!(step.info.tick, 4);
        assert_eq!(probe.actions(), vec![1; 4]);
        Ok(())
    }

    #[test]
    fn test_early_exit() -> Result<()> {
        let sim = sim()?.rewards(vec![1.0, 2.0, 4.0, 8.0]).done_at(Some(2));
        let probe = sim.probe();
        let mut env = MaxAndSkipEnv::new(sim, 4)?;
        env.reset()?;
        let step = env.step(&Act::new(2))?;
        assert!(step.is_done);
        assert_eq!(step.reward, 3.0);
        assert_eq!(step.info.tick, 2);
        assert_eq!(probe.actions().len(), 2);
        Ok(())
    }

    #[test]
    fn test_done_on_first_tick() -> Result<()> {
        // Only the frame after reset and one new frame are in the buffer.
        let mut env = MaxAndSkipEnv::new(sim()?.done_at(Some(1)), 4)?;
        let obs = env.reset()?;
        assert_eq!(obs, arr1(&[1u8, 9, 5]));
        let step = env.step(&Act::new(2))?;
        assert_eq!(step.obs, arr1(&[7u8, 9, 5]));
        Ok(())
    }

    #[test]
    fn test_reset_clears_buffer() -> Result<()> {
        let mut env = MaxAndSkipEnv::new(sim()?.done_at(Some(1)), 1)?;
        env.reset()?;
        env.step(&Act::new(2))?;
        env.reset()?;
        assert_eq!(env.obs_buffer.len(), 1);
        Ok(())
    }

    #[test]
    fn test_zero_skip() -> Result<()> {
        assert!(MaxAndSkipEnv::new(sim()?, 0).is_err());
        Ok(())
    }
}
