use anyhow::Result;
use ndarray::Array1;
use rand::{rngs::SmallRng, SeedableRng};
use stagehand_atari::{
    util::{labels, solid_screen, ScriptedEnv},
    wrap_deepmind, wrap_deepmind_ram, ActionMeaning, ActionMeaning::*, AtariWrapperConfig, Frame,
    RamObs,
};
use stagehand_core::{error::WrapperError, Act, Env};

fn screens(meanings: &[ActionMeaning]) -> Result<ScriptedEnv<Frame>> {
    ScriptedEnv::new(
        "BreakoutNoFrameskip-v4",
        labels(meanings),
        vec![solid_screen(0), solid_screen(200)],
    )
}

fn memory(meanings: &[ActionMeaning]) -> Result<ScriptedEnv<RamObs>> {
    let frames = (0..4u8).map(|i| Array1::from_elem(128, i * 40)).collect();
    ScriptedEnv::new("Breakout-ramNoFrameskip-v4", labels(meanings), frames)
}

fn rng() -> SmallRng {
    SmallRng::seed_from_u64(42)
}

fn wrapper_error(err: anyhow::Error) -> WrapperError {
    err.downcast::<WrapperError>().unwrap()
}

/// Steps with `NOOP` until the episode ends, returning the number of steps.
fn run_episode<E: Env>(env: &mut E) -> Result<usize> {
    env.reset()?;
    let mut n = 0;
    loop {
        n += 1;
        if env.step(&Act::NOOP)?.is_done {
            return Ok(n);
        }
    }
}

#[test]
fn test_visual_pipeline_reset() -> Result<()> {
    let sim = screens(&[Noop, Fire, Right, Left])?;
    let probe = sim.probe();
    let mut env = wrap_deepmind(sim, &AtariWrapperConfig::default(), rng())?;

    for _ in 0..20 {
        probe.clear();
        let obs = env.reset()?;
        assert_eq!(obs.shape(), &[84, 84, 1]);
        assert_eq!(probe.n_resets(), 1);

        // No-ops, then FIRE and action 2 each repeated by frame skipping.
        let actions = probe.actions();
        let n = actions.len() - 8;
        assert!((1..=30).contains(&n));
        assert!(actions[..n].iter().all(|&a| a == 0));
        assert_eq!(&actions[n..], &[1, 1, 1, 1, 2, 2, 2, 2]);
    }
    Ok(())
}

#[test]
fn test_visual_pipeline_step() -> Result<()> {
    let sim = screens(&[Noop, Fire, Right, Left])?.rewards(vec![3.0]);
    let probe = sim.probe();
    let mut env = wrap_deepmind(sim, &AtariWrapperConfig::default(), rng())?;
    env.reset()?;

    probe.clear();
    let step = env.step(&Act::new(3))?;
    assert_eq!(probe.actions(), vec![3; 4]);
    assert_eq!(step.reward, 1.0);
    assert!(!step.is_done);
    assert_eq!(step.obs.shape(), &[84, 84, 1]);
    // Max pooling keeps the bright screen of each pair.
    assert!(step.obs.iter().all(|&v| v >= 199));
    Ok(())
}

#[test]
fn test_no_fire_without_fire_action() -> Result<()> {
    let sim = screens(&[Noop, Right, Left])?;
    let probe = sim.probe();
    let mut env = wrap_deepmind(sim, &AtariWrapperConfig::default(), rng())?;

    env.reset()?;
    let actions = probe.actions();
    assert!((1..=30).contains(&actions.len()));
    assert!(actions.iter().all(|&a| a == 0));
    Ok(())
}

#[test]
fn test_fire_reset_disabled() -> Result<()> {
    let sim = screens(&[Noop, Fire, Right])?;
    let probe = sim.probe();
    let config = AtariWrapperConfig::default().noop_max(1).fire_reset(false);
    let mut env = wrap_deepmind(sim, &config, rng())?;

    env.reset()?;
    assert_eq!(probe.actions(), vec![0]);
    Ok(())
}

#[test]
fn test_frameskip_base_rejected() -> Result<()> {
    let frames = vec![solid_screen(0)];
    let sim = ScriptedEnv::new("Breakout-v4", labels(&[Noop, Fire, Right]), frames)?;
    let err = wrap_deepmind(sim, &AtariWrapperConfig::default(), rng())
        .err()
        .unwrap();
    assert_eq!(
        wrapper_error(err),
        WrapperError::FrameskipBase("Breakout-v4".to_string())
    );
    Ok(())
}

#[test]
fn test_misplaced_labels_rejected() -> Result<()> {
    let err = wrap_deepmind(screens(&[Fire, Noop, Right])?, &AtariWrapperConfig::default(), rng())
        .err()
        .unwrap();
    assert_eq!(
        wrapper_error(err),
        WrapperError::ActionLabel {
            index: 0,
            expected: "NOOP".to_string(),
            found: Some("FIRE".to_string()),
        }
    );

    let err = wrap_deepmind(screens(&[Noop, Right, Fire])?, &AtariWrapperConfig::default(), rng())
        .err()
        .unwrap();
    assert_eq!(
        wrapper_error(err),
        WrapperError::ActionLabel {
            index: 1,
            expected: "FIRE".to_string(),
            found: Some("RIGHT".to_string()),
        }
    );
    Ok(())
}

#[test]
fn test_invalid_config_rejected() -> Result<()> {
    let config = AtariWrapperConfig::default().skip(0);
    let err = wrap_deepmind_ram(memory(&[Noop, Fire, Right])?, &config, rng())
        .err()
        .unwrap();
    assert!(matches!(wrapper_error(err), WrapperError::InvalidConfig(_)));
    Ok(())
}

#[test]
fn test_ram_pipeline() -> Result<()> {
    let sim = memory(&[Noop, Fire, Right])?.rewards(vec![-0.5]);
    let mut env = wrap_deepmind_ram(sim, &AtariWrapperConfig::default(), rng())?;

    let obs = env.reset()?;
    assert_eq!(obs.shape(), &[128]);
    let step = env.step(&Act::new(2))?;
    assert_eq!(step.obs.shape(), &[128]);
    assert_eq!(step.reward, -1.0);
    Ok(())
}

#[test]
fn test_life_loss_through_pipeline() -> Result<()> {
    // Reset takes 1 no-op and 8 fire ticks; the life is lost at tick 12.
    let mut lives = vec![3; 12];
    lives.push(2);
    let sim = screens(&[Noop, Fire, Right])?.lives(lives.clone());
    let probe = sim.probe();
    let config = AtariWrapperConfig::default().noop_max(1);
    let mut env = wrap_deepmind(sim, &config, rng())?;

    env.reset()?;
    assert_eq!(env.lives(), 3);
    probe.clear();
    let step = env.step(&Act::NOOP)?;
    assert!(step.is_done);
    assert_eq!(probe.n_steps(), 3);
    assert_eq!(env.lives(), 2);

    // The game goes on without a reset of the simulator.
    probe.clear();
    env.reset()?;
    assert_eq!(probe.n_resets(), 0);
    assert_eq!(probe.actions(), vec![0, 0, 1, 1, 1, 1, 2, 2, 2, 2]);

    // Evaluation keeps whole games and raw rewards.
    let sim = screens(&[Noop, Fire, Right])?.lives(lives).rewards(vec![3.0]);
    let probe = sim.probe();
    let config = AtariWrapperConfig::default().noop_max(1).eval();
    let mut env = wrap_deepmind(sim, &config, rng())?;

    env.reset()?;
    probe.clear();
    let step = env.step(&Act::NOOP)?;
    assert!(!step.is_done);
    assert_eq!(probe.n_steps(), 4);
    assert_eq!(step.reward, 12.0);
    Ok(())
}

#[test]
fn test_substitutable_for_simulator() -> Result<()> {
    let sim = || -> Result<_> { Ok(memory(&[Noop, Fire, Right])?.done_at(Some(100))) };
    assert_eq!(run_episode(&mut sim()?)?, 100);

    // One no-op on reset, then 4 ticks per step with the last step cut short.
    let config = AtariWrapperConfig::default()
        .noop_max(1)
        .fire_reset(false)
        .episode_life(false);
    let mut env = wrap_deepmind_ram(sim()?, &config, rng())?;
    assert_eq!(run_episode(&mut env)?, 25);
    assert_eq!(run_episode(&mut env)?, 25);
    Ok(())
}
