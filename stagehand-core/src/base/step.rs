//! Environment step.
use super::Env;

/// Additional information to `Obs` and reward.
pub trait Info {}

impl Info for () {}

/// Represents an observation, reward, end-of-episode flag and information
/// `(o_t+1, r_t, d_t, i_t)` emitted by an environment at every step.
pub struct Step<E: Env> {
    /// Observation.
    pub obs: E::Obs,

    /// Reward.
    pub reward: f32,

    /// Flag denoting if the episode has ended.
    pub is_done: bool,

    /// Information defined by the simulator.
    pub info: E::Info,
}

impl<E: Env> Step<E> {
    /// Constructs a [`Step`] object.
    pub fn new(obs: E::Obs, reward: f32, is_done: bool, info: E::Info) -> Self {
        Step {
            obs,
            reward,
            is_done,
            info,
        }
    }

    /// Converts this step into a step of another environment with the same
    /// observation and information types, e.g. the stage wrapping `E`.
    pub fn cast<F>(self) -> Step<F>
    where
        F: Env<Obs = E::Obs, Info = E::Info>,
    {
        Step {
            obs: self.obs,
            reward: self.reward,
            is_done: self.is_done,
            info: self.info,
        }
    }
}
