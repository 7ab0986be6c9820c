//! Assembly of the standard preprocessing pipelines.
//!
//! Both recipes stack, innermost first:
//!
//! 1. [`EpisodicLifeEnv`] (unless `episode_life` is off),
//! 2. [`NoopResetEnv`] with `noop_max` no-ops,
//! 3. [`MaxAndSkipEnv`] with `skip` repeats,
//! 4. [`FireResetEnv`] if the game has a `FIRE` action (unless `fire_reset` is off),
//! 5. [`WarpFrameEnv`], for the visual recipe only,
//! 6. [`ClipRewardEnv`] (unless `clip_rewards` is off).
//!
//! All preconditions of the stages are checked while assembling, so a
//! misconfigured pipeline fails before the first reset.
use crate::{
    act::ActionMeaning,
    env::{
        AtariWrapperConfig, ClipRewardEnv, EpisodicLifeEnv, FireResetEnv, MaxAndSkipEnv,
        NoopResetEnv, Toggle, WarpFrameEnv,
    },
    obs::Frame,
};
use anyhow::Result;
use log::info;
use rand::{rngs::SmallRng, Rng};
use stagehand_core::{error::WrapperError, Env};

/// Optional life-boundary stage.
pub type LifeStage<E> = Toggle<EpisodicLifeEnv<E>, E>;

/// Stages up to frame skipping.
pub type SkipStack<E, R> = MaxAndSkipEnv<NoopResetEnv<LifeStage<E>, R>>;

/// Stages up to the optional fire-on-reset stage.
pub type FireStage<E, R> = Toggle<FireResetEnv<SkipStack<E, R>>, SkipStack<E, R>>;

/// Pipeline built by [`wrap_deepmind`].
pub type AtariPipeline<E, R = SmallRng> =
    Toggle<ClipRewardEnv<WarpFrameEnv<FireStage<E, R>>>, WarpFrameEnv<FireStage<E, R>>>;

/// Pipeline built by [`wrap_deepmind_ram`].
pub type AtariRamPipeline<E, R = SmallRng> =
    Toggle<ClipRewardEnv<FireStage<E, R>>, FireStage<E, R>>;

fn wrap_common<E, R>(
    env: E,
    config: &AtariWrapperConfig,
    rng: R,
    stages: &mut Vec<&'static str>,
) -> Result<FireStage<E, R>>
where
    E: Env,
    R: Rng,
{
    config.validate()?;

    let env = Toggle::wrap_if(config.episode_life, env, |e| Ok(EpisodicLifeEnv::new(e)))?;
    if env.is_on() {
        stages.push("EpisodicLife");
    }
    let env = NoopResetEnv::new(env, config.noop_max, rng)?;
    stages.push("NoopReset");
    let env = MaxAndSkipEnv::new(env, config.skip)?;
    stages.push("MaxAndSkip");

    let fire = config.fire_reset && ActionMeaning::Fire.is_legal(env.action_labels());
    let env = Toggle::wrap_if(fire, env, FireResetEnv::new)?;
    if env.is_on() {
        stages.push("FireReset");
    }

    Ok(env)
}

/// Wraps a simulator emitting raw screens with the DeepMind preprocessing.
///
/// The simulator must not skip frames by itself, which is told by its name
/// containing `NoFrameskip`; the pipeline does its own skipping.
pub fn wrap_deepmind<E, R>(
    env: E,
    config: &AtariWrapperConfig,
    rng: R,
) -> Result<AtariPipeline<E, R>>
where
    E: Env<Obs = Frame>,
    R: Rng,
{
    if !env.name().contains("NoFrameskip") {
        return Err(WrapperError::FrameskipBase(env.name().to_string()).into());
    }

    let mut stages = vec![];
    let env = wrap_common(env, config, rng, &mut stages)?;
    let env = WarpFrameEnv::new(env, config.frame.clone())?;
    stages.push("WarpFrame");
    let env = Toggle::wrap_if(config.clip_rewards, env, |e| Ok(ClipRewardEnv::new(e)))?;
    if env.is_on() {
        stages.push("ClipReward");
    }

    info!("Pipeline for {}: {}", env.name(), stages.join(" -> "));
    Ok(env)
}

/// Wraps a simulator emitting its memory (RAM) with the DeepMind
/// preprocessing, leaving observations as they are.
pub fn wrap_deepmind_ram<E, R>(
    env: E,
    config: &AtariWrapperConfig,
    rng: R,
) -> Result<AtariRamPipeline<E, R>>
where
    E: Env,
    R: Rng,
{
    let mut stages = vec![];
    let env = wrap_common(env, config, rng, &mut stages)?;
    let env = Toggle::wrap_if(config.clip_rewards, env, |e| Ok(ClipRewardEnv::new(e)))?;
    if env.is_on() {
        stages.push("ClipReward");
    }

    info!("Pipeline for {}: {}", env.name(), stages.join(" -> "));
    Ok(env)
}
