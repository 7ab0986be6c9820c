//! Meanings of actions of Atari games.
use anyhow::Result;
use stagehand_core::error::WrapperError;
use strum::{EnumString, IntoStaticStr};

/// Meaning of an action in the full Atari action set.
///
/// The string forms are the labels reported by simulators through
/// [`Env::action_labels`](stagehand_core::Env::action_labels).
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr)]
pub enum ActionMeaning {
    #[strum(serialize = "NOOP")]
    Noop,
    #[strum(serialize = "FIRE")]
    Fire,
    #[strum(serialize = "UP")]
    Up,
    #[strum(serialize = "RIGHT")]
    Right,
    #[strum(serialize = "LEFT")]
    Left,
    #[strum(serialize = "DOWN")]
    Down,
    #[strum(serialize = "UPRIGHT")]
    UpRight,
    #[strum(serialize = "UPLEFT")]
    UpLeft,
    #[strum(serialize = "DOWNRIGHT")]
    DownRight,
    #[strum(serialize = "DOWNLEFT")]
    DownLeft,
    #[strum(serialize = "UPFIRE")]
    UpFire,
    #[strum(serialize = "RIGHTFIRE")]
    RightFire,
    #[strum(serialize = "LEFTFIRE")]
    LeftFire,
    #[strum(serialize = "DOWNFIRE")]
    DownFire,
    #[strum(serialize = "UPRIGHTFIRE")]
    UpRightFire,
    #[strum(serialize = "UPLEFTFIRE")]
    UpLeftFire,
    #[strum(serialize = "DOWNRIGHTFIRE")]
    DownRightFire,
    #[strum(serialize = "DOWNLEFTFIRE")]
    DownLeftFire,
}

impl ActionMeaning {
    /// Returns the label of the action.
    pub fn label(self) -> &'static str {
        self.into()
    }

    /// Returns `true` if `labels` contains this action.
    pub fn is_legal(self, labels: &[String]) -> bool {
        labels.iter().any(|l| l.as_str() == self.label())
    }
}

/// Fails unless `labels[index]` is `expected`.
pub(crate) fn ensure_label(labels: &[String], index: usize, expected: ActionMeaning) -> Result<()> {
    match labels.get(index) {
        Some(l) if l.as_str() == expected.label() => Ok(()),
        found => Err(WrapperError::ActionLabel {
            index,
            expected: expected.label().to_string(),
            found: found.cloned(),
        }
        .into()),
    }
}

/// Fails if there are fewer than `required` actions.
pub(crate) fn ensure_num_actions(labels: &[String], required: usize) -> Result<()> {
    if labels.len() < required {
        return Err(WrapperError::TooFewActions {
            required,
            found: labels.len(),
        }
        .into());
    }
    Ok(())
}
