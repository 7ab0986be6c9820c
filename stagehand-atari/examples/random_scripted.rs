use anyhow::Result;
use rand::{rngs::SmallRng, SeedableRng};
use stagehand_atari::{
    util::{labels, solid_screen, RandomPolicy, ScriptedEnv},
    wrap_deepmind, ActionMeaning, AtariWrapperConfig,
};
use stagehand_core::{util::eval, Env as _};

const N_EPISODES: usize = 5;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let meanings = [
        ActionMeaning::Noop,
        ActionMeaning::Fire,
        ActionMeaning::Right,
        ActionMeaning::Left,
    ];
    let frames = (0..8u8).map(|i| solid_screen(i * 32)).collect();
    let sim = ScriptedEnv::new("BreakoutNoFrameskip-v4", labels(&meanings), frames)?
        .rewards(vec![0.0, 0.0, 1.0, 0.0, 4.0, -2.0])
        .lives(vec![3, 3, 3, 2, 2, 2, 1, 1, 1, 1, 1, 0])
        .done_at(Some(400));

    let config = AtariWrapperConfig::default();
    let mut env = wrap_deepmind(sim, &config, SmallRng::seed_from_u64(42))?;
    let mut policy = RandomPolicy::new(env.action_labels().len(), 42);

    let returns = eval(&mut env, &mut policy, N_EPISODES)?;
    println!("{:?}", returns);

    Ok(())
}
