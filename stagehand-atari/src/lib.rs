//! DeepMind-style preprocessing of Atari games for reinforcement learning.
//!
//! The preprocessing is a stack of stages, each wrapping the environment below
//! it and implementing [`stagehand_core::Env`] itself, as in
//! [`atari_wrappers.py`](https://github.com/openai/baselines/blob/master/baselines/common/atari_wrappers.py):
//!
//! * [`EpisodicLifeEnv`]: loss of a life ends an episode,
//! * [`NoopResetEnv`]: a random number of no-ops after reset,
//! * [`MaxAndSkipEnv`]: action repeat with max pooling over the last two frames,
//! * [`FireResetEnv`]: pressing fire after reset,
//! * [`WarpFrameEnv`]: `84 x 84` greyscale frames,
//! * [`ClipRewardEnv`]: rewards clipped to their sign.
//!
//! [`wrap_deepmind`] and [`wrap_deepmind_ram`] assemble them for simulators
//! emitting screens and memory, respectively.
//!
//! The simulator itself is not part of this crate; anything implementing
//! [`stagehand_core::Env`] can be wrapped. Here is an example with the scripted
//! simulator used in tests.
//!
//! ```
//! use anyhow::Result;
//! use rand::{rngs::SmallRng, SeedableRng};
//! use stagehand_atari::{
//!     util::{labels, solid_screen, RandomPolicy, ScriptedEnv},
//!     wrap_deepmind, ActionMeaning, AtariWrapperConfig,
//! };
//! use stagehand_core::{util::eval, Env as _};
//!
//! fn main() -> Result<()> {
//!     let sim = ScriptedEnv::new(
//!         "BreakoutNoFrameskip-v4",
//!         labels(&[ActionMeaning::Noop, ActionMeaning::Fire, ActionMeaning::Right]),
//!         vec![solid_screen(0), solid_screen(200)],
//!     )?
//!     .rewards(vec![0.0, 4.0])
//!     .done_at(Some(200));
//!
//!     let config = AtariWrapperConfig::default();
//!     let mut env = wrap_deepmind(sim, &config, SmallRng::seed_from_u64(42))?;
//!     assert_eq!(env.reset()?.shape(), &[84, 84, 1]);
//!
//!     let mut policy = RandomPolicy::new(3, 42);
//!     let returns = eval(&mut env, &mut policy, 1)?;
//!     assert_eq!(returns.len(), 1);
//!     Ok(())
//! }
//! ```
mod act;
pub mod env;
pub mod frame;
mod obs;
pub mod pipeline;
pub mod util;
pub use act::ActionMeaning;
pub use env::{
    AtariWrapperConfig, ClipRewardEnv, EpisodicLifeEnv, FireResetEnv, MaxAndSkipEnv,
    NoopResetEnv, Toggle, WarpFrameEnv,
};
pub use frame::{FrameTransform, FrameTransformConfig, Interpolation};
pub use obs::{Frame, ObsBuffer, RamObs};
pub use pipeline::{wrap_deepmind, wrap_deepmind_ram, AtariPipeline, AtariRamPipeline};
