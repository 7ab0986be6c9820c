//! Observations and the ring buffer used for max pooling over frames.
use anyhow::Result;
use ndarray::{Array1, Array3};
use stagehand_core::{error::WrapperError, Obs};
use std::collections::VecDeque;

/// A frame of the screen, `height x width x channels`.
pub type Frame = Array3<u8>;

/// The memory (RAM) of the simulator.
pub type RamObs = Array1<u8>;

/// Holds the most recent observations, evicting the oldest when full.
#[derive(Debug, Clone)]
pub struct ObsBuffer<O> {
    buf: VecDeque<O>,
    capacity: usize,
}

impl<O: Obs> ObsBuffer<O> {
    /// Creates an empty buffer holding at most `capacity` observations.
    pub fn new(capacity: usize) -> Self {
        Self {
            buf: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends an observation.
    pub fn push(&mut self, obs: O) {
        if self.buf.len() == self.capacity {
            self.buf.pop_front();
        }
        self.buf.push_back(obs);
    }

    /// Removes all observations.
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Number of observations held.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if the buffer holds no observation.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Element-wise maximum over the observations currently in the buffer.
    pub fn max(&self) -> Result<O> {
        let mut it = self.buf.iter();
        let first = it.next().ok_or(WrapperError::EmptyObsBuffer)?;
        it.try_fold(first.clone(), |acc, o| acc.elementwise_max(o))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr1;

    #[test]
    fn test_evicts_oldest() -> Result<()> {
        let mut buf = ObsBuffer::new(2);
        buf.push(arr1(&[9u8, 0]));
        buf.push(arr1(&[0u8, 1]));
        buf.push(arr1(&[0u8, 2]));
        assert_eq!(buf.len(), 2);
        assert_eq!(buf.max()?, arr1(&[0u8, 2]));
        Ok(())
    }

    #[test]
    fn test_max_single() -> Result<()> {
        let mut buf = ObsBuffer::new(2);
        buf.push(arr1(&[3u8, 4]));
        assert_eq!(buf.max()?, arr1(&[3u8, 4]));
        Ok(())
    }

    #[test]
    fn test_max_empty() {
        let mut buf = ObsBuffer::<RamObs>::new(2);
        buf.push(arr1(&[1u8]));
        buf.clear();
        assert!(buf.is_empty());
        let err = buf.max().unwrap_err();
        assert_eq!(
            err.downcast_ref::<WrapperError>(),
            Some(&WrapperError::EmptyObsBuffer)
        );
    }
}
