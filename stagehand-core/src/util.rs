//! Utilities for interaction of policies and environments.
use crate::{Env, Policy};
use anyhow::Result;
use log::info;

/// Runs episodes with a policy and returns the sum of rewards of each episode.
///
/// An episode ends at the first step with [`Step::is_done`](crate::Step::is_done)
/// set, so for a pipeline with episodic lives this is the return of a single life.
pub fn eval<E, P>(env: &mut E, policy: &mut P, n_episodes: usize) -> Result<Vec<f32>>
where
    E: Env,
    P: Policy<E>,
{
    let mut rs = Vec::with_capacity(n_episodes);

    for episode in 0..n_episodes {
        let mut prev_obs = env.reset()?;
        let mut count_step = 0;
        let mut r_total = 0.0;

        loop {
            let act = policy.sample(&prev_obs);
            let step = env.step(&act)?;
            r_total += step.reward;
            count_step += 1;
            if step.is_done {
                break;
            }
            prev_obs = step.obs;
        }

        info!(
            "Episode {:?}, {:?} steps, reward = {:?}",
            episode, count_step, r_total
        );
        rs.push(r_total);
    }

    Ok(rs)
}
