//! Utilities for tests and demos.
//!
//! [`ScriptedEnv`] is a deterministic stand-in for a game simulator whose
//! observations, rewards, lives and end of game follow fixed scripts, and
//! [`Probe`] records the calls it receives even when it is buried under
//! several stages.
use crate::{act::ActionMeaning, obs::Frame};
use anyhow::Result;
use stagehand_core::{error::WrapperError, Act, Env, Info, Obs, Policy, Step};
use std::sync::{Arc, Mutex, MutexGuard};

/// Converts action meanings to labels.
pub fn labels(meanings: &[ActionMeaning]) -> Vec<String> {
    meanings.iter().map(|m| m.label().to_string()).collect()
}

/// A `210 x 160 x 3` screen filled with `v`.
pub fn solid_screen(v: u8) -> Frame {
    Frame::from_elem((210, 160, 3), v)
}

/// Information of [`ScriptedEnv`].
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptedInfo {
    /// Number of steps since the last reset.
    pub tick: usize,
}

impl Info for ScriptedInfo {}

#[derive(Debug, Default)]
struct ProbeLog {
    actions: Vec<u8>,
    n_resets: usize,
}

/// Shared record of the calls received by a [`ScriptedEnv`].
#[derive(Debug, Clone, Default)]
pub struct Probe(Arc<Mutex<ProbeLog>>);

impl Probe {
    fn log(&self) -> MutexGuard<'_, ProbeLog> {
        self.0.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Actions taken since construction or the last [`Probe::clear`].
    pub fn actions(&self) -> Vec<u8> {
        self.log().actions.clone()
    }

    /// Number of steps.
    pub fn n_steps(&self) -> usize {
        self.log().actions.len()
    }

    /// Number of resets.
    pub fn n_resets(&self) -> usize {
        self.log().n_resets
    }

    /// Forgets the calls recorded so far.
    pub fn clear(&self) {
        let mut log = self.log();
        log.actions.clear();
        log.n_resets = 0;
    }
}

/// A simulator following scripts indexed by the number of steps since reset
/// (the tick, 0 right after reset).
///
/// * The observation at tick `t` is `frames[t % frames.len()]`, see also
///   [`ScriptedEnv::frames_cycle_from`].
/// * The reward of the step reaching tick `t` is `rewards[(t - 1) % rewards.len()]`,
///   0 if there is no reward script.
/// * Lives at tick `t` are `lives[t]`, the last entry once the script is
///   exhausted, 0 if there is no script.
/// * The game ends at tick `done_at`. Stepping afterwards fails with
///   [`WrapperError::StepAfterDone`].
pub struct ScriptedEnv<O> {
    name: String,
    labels: Vec<String>,
    frames: Vec<O>,
    cycle_from: usize,
    rewards: Vec<f32>,
    lives: Vec<usize>,
    done_at: Option<usize>,
    tick: usize,
    done: bool,
    probe: Probe,
}

impl<O: Obs> ScriptedEnv<O> {
    /// Constructs a simulator. Fails if `frames` is empty.
    pub fn new(name: impl Into<String>, labels: Vec<String>, frames: Vec<O>) -> Result<Self> {
        if frames.is_empty() {
            return Err(
                WrapperError::InvalidConfig("ScriptedEnv needs at least one frame".into()).into(),
            );
        }
        Ok(Self {
            name: name.into(),
            labels,
            frames,
            cycle_from: 0,
            rewards: vec![],
            lives: vec![],
            done_at: None,
            tick: 0,
            done: false,
            probe: Probe::default(),
        })
    }

    /// Shows `frames[..k]` once after reset, then cycles over `frames[k..]`.
    ///
    /// Fails unless `k` indexes a frame.
    pub fn frames_cycle_from(mut self, k: usize) -> Result<Self> {
        if k >= self.frames.len() {
            return Err(WrapperError::InvalidConfig(format!(
                "cycle start {} out of {} frames",
                k,
                self.frames.len()
            ))
            .into());
        }
        self.cycle_from = k;
        Ok(self)
    }

    /// Sets the reward script.
    pub fn rewards(mut self, v: Vec<f32>) -> Self {
        self.rewards = v;
        self
    }

    /// Sets the lives script.
    pub fn lives(mut self, v: Vec<usize>) -> Self {
        self.lives = v;
        self
    }

    /// Sets the tick at which the game ends.
    pub fn done_at(mut self, v: Option<usize>) -> Self {
        self.done_at = v;
        self
    }

    /// Returns a handle on the record of calls.
    pub fn probe(&self) -> Probe {
        self.probe.clone()
    }

    fn frame(&self, t: usize) -> O {
        let k = self.cycle_from;
        let ix = if t < k {
            t
        } else {
            k + (t - k) % (self.frames.len() - k)
        };
        self.frames[ix].clone()
    }
}

impl<O: Obs> Env for ScriptedEnv<O> {
    type Obs = O;
    type Info = ScriptedInfo;

    fn name(&self) -> &str {
        &self.name
    }

    fn action_labels(&self) -> &[String] {
        &self.labels
    }

    fn lives(&self) -> usize {
        match self.lives.last() {
            Some(&last) => *self.lives.get(self.tick).unwrap_or(&last),
            None => 0,
        }
    }

    fn reset(&mut self) -> Result<O> {
        self.probe.log().n_resets += 1;
        self.tick = 0;
        self.done = false;
        Ok(self.frame(0))
    }

    fn step(&mut self, act: &Act) -> Result<Step<Self>> {
        if self.done {
            return Err(WrapperError::StepAfterDone.into());
        }
        self.probe.log().actions.push(act.act);
        self.tick += 1;

        let t = self.tick;
        let reward = match self.rewards.len() {
            0 => 0.0,
            n => self.rewards[(t - 1) % n],
        };
        self.done = self.done_at == Some(t);

        Ok(Step::new(self.frame(t), reward, self.done, ScriptedInfo { tick: t }))
    }
}

/// A policy taking uniformly random actions.
pub struct RandomPolicy {
    n_acts: u8,
    rng: fastrand::Rng,
}

impl RandomPolicy {
    /// Constructs a policy over actions `0..n_acts`.
    pub fn new(n_acts: usize, seed: u64) -> Self {
        let rng = fastrand::Rng::new();
        rng.seed(seed);
        Self {
            n_acts: n_acts.clamp(1, u8::MAX as usize) as u8,
            rng,
        }
    }
}

impl<E: Env> Policy<E> for RandomPolicy {
    fn sample(&mut self, _: &E::Obs) -> Act {
        self.rng.u8(..self.n_acts).into()
    }
}
