//! Loss of a life as the end of an episode.
use anyhow::Result;
use log::{debug, trace};
use stagehand_core::{Act, Env, Step};

/// Makes end-of-life the end of an episode, but only resets the game when all
/// lives are lost.
///
/// This way all states are still reachable although lives are episodic, and
/// the learner need not know about it.
pub struct EpisodicLifeEnv<E> {
    env: E,

    // Lives at the previous step
    lives: usize,

    // If the last step was the end of the game
    was_real_done: bool,
}

impl<E: Env> EpisodicLifeEnv<E> {
    /// Wraps `env`. The first reset is always a real one.
    pub fn new(env: E) -> Self {
        Self {
            env,
            lives: 0,
            was_real_done: true,
        }
    }

    /// Returns `true` if the last step ended the game, not only a life.
    pub fn was_real_done(&self) -> bool {
        self.was_real_done
    }
}

impl<E: Env> Env for EpisodicLifeEnv<E> {
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

    /// Resets the game if it is over, otherwise takes a no-op step to move
    /// on from the lost life.
    fn reset(&mut self) -> Result<Self::Obs> {
        trace!("EpisodicLifeEnv::reset()");
        let obs = if self.was_real_done {
            self.env.reset()?
        } else {
            self.env.step(&Act::NOOP)?.obs
        };
        self.lives = self.env.lives();
        Ok(obs)
    }

    fn step(&mut self, act: &Act) -> Result<Step<Self>> {
        trace!("EpisodicLifeEnv::step()");
        let mut step = self.env.step(act)?.cast::<Self>();
        self.was_real_done = step.is_done;

        // Some games stay at zero lives for a few frames before game over,
        // so only a loss leaving lives > 0 ends the episode here.
        let lives = self.env.lives();
        if lives < self.lives && lives > 0 {
            debug!("Life lost ({} -> {}) in {}", self.lives, lives, self.env.name());
            step.is_done = true;
        }
        self.lives = lives;

        Ok(step)
    }
}
