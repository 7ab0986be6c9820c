//! Core functionalities.
mod env;
mod policy;
mod step;
use crate::error::WrapperError;
use anyhow::Result;
use ndarray::{Array, Dimension, Zip};
use std::fmt::Debug;

pub use env::Env;
pub use policy::Policy;
pub use step::{Info, Step};

/// An observation of an environment.
///
/// Observations are fixed-shape buffers of 8-bit intensities, either a frame
/// (`height x width x channels`) or a memory dump of the simulator.
pub trait Obs: Clone + Debug {
    /// Returns the shape of the observation.
    fn shape_vec(&self) -> Vec<usize>;

    /// Takes the element-wise maximum of two observations.
    ///
    /// Fails if the shapes differ.
    fn elementwise_max(&self, other: &Self) -> Result<Self>;
}

impl<D: Dimension> Obs for Array<u8, D> {
    fn shape_vec(&self) -> Vec<usize> {
        self.shape().to_vec()
    }

    fn elementwise_max(&self, other: &Self) -> Result<Self> {
        if self.shape() != other.shape() {
            return Err(WrapperError::ObsShape {
                expected: self.shape_vec(),
                found: other.shape_vec(),
            }
            .into());
        }

        let mut out = self.clone();
        Zip::from(&mut out)
            .and(other)
            .for_each(|a, &b| *a = (*a).max(b));
        Ok(out)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// An action, given as an index into the action table of the simulator.
pub struct Act {
    /// Index of the action.
    pub act: u8,
}

impl Act {
    /// Index 0, which must mean "do nothing" for stages issuing no-ops.
    pub const NOOP: Self = Self { act: 0 };

    /// Index 1, which must mean "fire" for stages pressing the fire button.
    pub const FIRE: Self = Self { act: 1 };

    /// Constructs an action.
    pub fn new(act: u8) -> Self {
        Self { act }
    }
}

impl From<u8> for Act {
    fn from(act: u8) -> Self {
        Self { act }
    }
}
