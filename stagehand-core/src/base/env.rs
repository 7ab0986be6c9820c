//! Environment.
use super::{Act, Info, Obs, Step};
use anyhow::Result;

/// Represents a game simulator, or a preprocessing stage wrapping one.
///
/// Stages forward [`Env::name`], [`Env::action_labels`] and [`Env::lives`] to
/// the environment they wrap, so the capabilities of the base simulator are
/// visible through any number of stages.
pub trait Env {
    /// Observation of the environment.
    type Obs: Obs;

    /// Information in the [`Step`] object.
    type Info: Info;

    /// Identifier of the simulator, e.g. `PongNoFrameskip-v4`.
    fn name(&self) -> &str;

    /// Labels of the legal actions, ordered by action index.
    fn action_labels(&self) -> &[String];

    /// Current number of lives in the game.
    fn lives(&self) -> usize;

    /// Starts or restarts an episode and returns the first observation.
    fn reset(&mut self) -> Result<Self::Obs>;

    /// Advances the environment by one step.
    ///
    /// Once a step with [`Step::is_done`] set has been returned, this method
    /// must not be called again before [`Env::reset`].
    fn step(&mut self, act: &Act) -> Result<Step<Self>>
    where
        Self: Sized;
}
