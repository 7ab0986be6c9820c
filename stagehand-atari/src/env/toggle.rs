//! Optional stages.
use anyhow::Result;
use stagehand_core::{Act, Env, Step};

/// Either a stage `W` or the environment `E` it would wrap.
///
/// Lets a pipeline include or leave out a stage, decided at run time, while
/// keeping a single type.
pub enum Toggle<W, E> {
    /// The stage is used.
    On(W),

    /// The stage is left out.
    Off(E),
}

impl<W, E> Toggle<W, E> {
    /// Returns `true` if the stage is used.
    pub fn is_on(&self) -> bool {
        matches!(self, Self::On(_))
    }

    /// Wraps `env` with `wrap` if `on`, otherwise leaves it as is.
    pub fn wrap_if<F>(on: bool, env: E, wrap: F) -> Result<Self>
    where
        F: FnOnce(E) -> Result<W>,
    {
        Ok(if on { Self::On(wrap(env)?) } else { Self::Off(env) })
    }
}

impl<W, E> Env for Toggle<W, E>
where
    W: Env,
    E: Env<Obs = W::Obs, Info = W::Info>,
{
    type Obs = W::Obs;
    type Info = W::Info;

    fn name(&self) -> &str {
        match self {
            Self::On(w) => w.name(),
            Self::Off(e) => e.name(),
        }
    }

    fn action_labels(&self) -> &[String] {
        match self {
            Self::On(w) => w.action_labels(),
            Self::Off(e) => e.action_labels(),
        }
    }

    fn lives(&self) -> usize {
        match self {
            Self::On(w) => w.lives(),
            Self::Off(e) => e.lives(),
        }
    }

    fn reset(&mut self) -> Result<Self::Obs> {
        match self {
            Self::On(w) => w.reset(),
            Self::Off(e) => e.reset(),
        }
    }

    fn step(&mut self, act: &Act) -> Result<Step<Self>> {
        Ok(match self {
            Self::On(w) => w.step(act)?.cast(),
            Self::Off(e) => e.step(act)?.cast(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ClipRewardEnv;
    use crate::util::{labels, ScriptedEnv};
    use crate::ActionMeaning::*;
    use ndarray::arr1;

    fn sim() -> Result<ScriptedEnv<crate::RamObs>> {
        let frames = vec![arr1(&[0u8])];
        Ok(ScriptedEnv::new("Scripted", labels(&[Noop, Fire]), frames)?.rewards(vec![5.0]))
    }

    #[test]
    fn test_toggle() -> Result<()> {
        let mut on = Toggle::wrap_if(true, sim()?, |e| Ok(ClipRewardEnv::new(e)))?;
        let mut off = Toggle::wrap_if(false, sim()?, |e| Ok(ClipRewardEnv::new(e)))?;
        assert!(on.is_on());
        assert!(!off.is_on());

        on.reset()?;
        off.reset()?;
        assert_eq!(on.step(&Act::NOOP)?.reward, 1.0);
        assert_eq!(off.step(&Act::NOOP)?.reward, 5.0);
        assert_eq!(off.name(), "Scripted");
        Ok(())
    }

    #[test]
    fn test_wrap_error() {
        type Sim = ScriptedEnv<crate::RamObs>;
        let toggle = Toggle::<ClipRewardEnv<Sim>, Sim>::wrap_if(true, sim().unwrap(), |_| {
            Err(anyhow::anyhow!("refused"))
        });
        assert!(toggle.is_err());
    }
}
