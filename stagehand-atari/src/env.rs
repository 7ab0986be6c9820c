//! Preprocessing stages.
//!
//! Each stage owns the environment it wraps and implements
//! [`Env`](stagehand_core::Env) itself. The assembler in
//! [`crate::pipeline`] stacks them, innermost first:
//!
//! [`EpisodicLifeEnv`] → [`NoopResetEnv`] → [`MaxAndSkipEnv`] →
//! [`FireResetEnv`] → [`WarpFrameEnv`] → [`ClipRewardEnv`].
mod clip_reward;
mod config;
mod episodic_life;
mod fire_reset;
mod max_and_skip;
mod noop_reset;
mod toggle;
mod warp_frame;
pub use clip_reward::ClipRewardEnv;
pub use config::AtariWrapperConfig;
pub use episodic_life::EpisodicLifeEnv;
pub use fire_reset::FireResetEnv;
pub use max_and_skip::MaxAndSkipEnv;
pub use noop_reset::NoopResetEnv;
pub use toggle::Toggle;
pub use warp_frame::WarpFrameEnv;
