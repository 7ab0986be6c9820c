//! Errors in the library.
use thiserror::Error;

/// Errors in the library.
///
/// Errors coming from a base simulator are not wrapped; they travel through
/// the stages untouched as [`anyhow::Error`].
#[derive(Error, Debug, PartialEq)]
pub enum WrapperError {
    /// The action table does not have the expected label at the given index.
    #[error("Action label error: action {index} must be {expected}, found {found:?}")]
    ActionLabel {
        /// Index in the action table.
        index: usize,
        /// Required label.
        expected: String,
        /// Label actually found, `None` if the table is too short.
        found: Option<String>,
    },

    /// The action table is shorter than a stage requires.
    #[error("Too few actions: {required} required, {found} found")]
    TooFewActions {
        /// Minimum number of actions.
        required: usize,
        /// Number of actions of the environment.
        found: usize,
    },

    /// The environment already skips frames by itself.
    #[error("Environment {0} must be a NoFrameskip variant")]
    FrameskipBase(String),

    /// A configuration value is out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// An observation does not have the expected shape.
    #[error("Observation shape error: expected {expected:?}, found {found:?}")]
    ObsShape {
        /// Expected shape.
        expected: Vec<usize>,
        /// Actual shape.
        found: Vec<usize>,
    },

    /// Max pooling over an empty observation buffer.
    #[error("Observation buffer is empty")]
    EmptyObsBuffer,

    /// `step()` was called after the end of an episode without `reset()`.
    #[error("step() called on a finished episode without reset()")]
    StepAfterDone,
}
