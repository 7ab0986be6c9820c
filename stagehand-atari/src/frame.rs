//! Conversion of raw screens into small greyscale frames.
//!
//! With the default configuration a `210 x 160 x 3` screen becomes an
//! `84 x 84 x 1` frame:
//!
//! 1. luminance `0.299 R + 0.587 G + 0.114 B`, computed in `f32`,
//! 2. resize to `110 x 84` (height x width),
//! 3. crop rows `18..102`,
//! 4. truncation to `u8`.
use crate::obs::Frame;
use anyhow::Result;
use image::{
    imageops::{resize, FilterType::Triangle},
    ImageBuffer, Luma,
};
use ndarray::{s, Array2, Array3, ArrayView3, Axis};
use serde::{Deserialize, Serialize};
use stagehand_core::error::WrapperError;

/// Interpolation used when resizing the luminance plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Interpolation {
    /// Bilinear sampling at pixel centres, edges clamped.
    Linear,

    /// Triangle filter of the `image` crate. Averages over the whole
    /// footprint of a destination pixel when shrinking.
    Triangle,
}

impl Default for Interpolation {
    fn default() -> Self {
        Self::Linear
    }
}

/// Configuration of [`FrameTransform`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameTransformConfig {
    /// Height of the raw screen.
    pub raw_height: usize,

    /// Width of the raw screen.
    pub raw_width: usize,

    /// Height of the resized plane.
    pub resize_height: usize,

    /// Width of the resized plane, also the width of the output.
    pub resize_width: usize,

    /// First row of the resized plane kept in the output.
    pub crop_top: usize,

    /// Number of rows kept in the output.
    pub crop_height: usize,

    /// Interpolation of the resize.
    pub interpolation: Interpolation,
}

impl Default for FrameTransformConfig {
    fn default() -> Self {
        Self {
            raw_height: 210,
            raw_width: 160,
            resize_height: 110,
            resize_width: 84,
            crop_top: 18,
            crop_height: 84,
            interpolation: Interpolation::Linear,
        }
    }
}

impl FrameTransformConfig {
    /// Sets the size of the raw screen.
    pub fn raw_size(mut self, height: usize, width: usize) -> Self {
        self.raw_height = height;
        self.raw_width = width;
        self
    }

    /// Sets the interpolation.
    pub fn interpolation(mut self, v: Interpolation) -> Self {
        self.interpolation = v;
        self
    }

    fn validate(&self) -> Result<()> {
        let dims = [
            self.raw_height,
            self.raw_width,
            self.resize_height,
            self.resize_width,
            self.crop_height,
        ];
        if dims.iter().any(|&d| d == 0) {
            return Err(WrapperError::InvalidConfig(format!(
                "frame dimensions must be positive: {:?}",
                self
            ))
            .into());
        }
        match self.crop_top.checked_add(self.crop_height) {
            Some(bottom) if bottom <= self.resize_height => {}
            _ => {
                return Err(WrapperError::InvalidConfig(format!(
                    "crop of {} rows from row {} exceeds resized height {}",
                    self.crop_height, self.crop_top, self.resize_height
                ))
                .into())
            }
        }
        Ok(())
    }
}

/// Sampling positions of one axis for bilinear interpolation:
/// `(lower index, upper index, weight of the upper index)`.
fn linear_taps(src: usize, dst: usize) -> Vec<(usize, usize, f32)> {
    let scale = src as f64 / dst as f64;
    (0..dst)
        .map(|d| {
            let pos = ((d as f64 + 0.5) * scale - 0.5) as f32;
            let lo = pos.floor();
            let (i0, w) = if lo < 0.0 {
                (0, 0.0)
            } else if lo as usize >= src - 1 {
                (src - 1, 0.0)
            } else {
                (lo as usize, pos - lo)
            };
            (i0, (i0 + 1).min(src - 1), w)
        })
        .collect()
}

/// Luminance of an RGB image.
fn luminance(raw: ArrayView3<u8>) -> Array2<f32> {
    raw.map_axis(Axis(2), |px| {
        px[0] as f32 * 0.299 + px[1] as f32 * 0.587 + px[2] as f32 * 0.114
    })
}

/// Converts raw screens into frames of shape [`FrameTransform::output_shape`].
///
/// The transform holds no mutable state and can be shared between threads.
#[derive(Debug, Clone)]
pub struct FrameTransform {
    config: FrameTransformConfig,
    row_taps: Vec<(usize, usize, f32)>,
    col_taps: Vec<(usize, usize, f32)>,
}

impl FrameTransform {
    /// Constructs the transform, failing on inconsistent geometry.
    pub fn new(config: FrameTransformConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            row_taps: linear_taps(config.raw_height, config.resize_height),
            col_taps: linear_taps(config.raw_width, config.resize_width),
            config,
        })
    }

    /// Shape of the raw screens accepted by the transform.
    pub fn raw_shape(&self) -> [usize; 3] {
        [self.config.raw_height, self.config.raw_width, 3]
    }

    /// Shape of the frames produced by the transform.
    pub fn output_shape(&self) -> [usize; 3] {
        [self.config.crop_height, self.config.resize_width, 1]
    }

    /// Applies the transform.
    ///
    /// `frame` is reshaped to [`FrameTransform::raw_shape`] when it has the
    /// same number of elements in another shape.
    pub fn transform(&self, frame: &Frame) -> Result<Frame> {
        let (h, w) = (self.config.raw_height, self.config.raw_width);
        let reshaped;
        let raw = if frame.dim() == (h, w, 3) {
            frame.view()
        } else if frame.len() == h * w * 3 {
            reshaped = Array3::from_shape_vec((h, w, 3), frame.iter().copied().collect())?;
            reshaped.view()
        } else {
            return Err(WrapperError::ObsShape {
                expected: self.raw_shape().to_vec(),
                found: frame.shape().to_vec(),
            }
            .into());
        };

        let lum = luminance(raw);
        let resized = match self.config.interpolation {
            Interpolation::Linear => self.resize_linear(&lum),
            Interpolation::Triangle => self.resize_triangle(lum)?,
        };

        let top = self.config.crop_top;
        let cropped = resized.slice(s![top..top + self.config.crop_height, ..]);

        // `as` truncates toward zero for values in range.
        Ok(cropped.mapv(|v| v as u8).insert_axis(Axis(2)))
    }

    fn resize_linear(&self, lum: &Array2<f32>) -> Array2<f32> {
        let shape = (self.config.resize_height, self.config.resize_width);
        Array2::from_shape_fn(shape, |(y, x)| {
            let (y0, y1, fy) = self.row_taps[y];
            let (x0, x1, fx) = self.col_taps[x];
            let top = lum[[y0, x0]] * (1.0 - fx) + lum[[y0, x1]] * fx;
            let bottom = lum[[y1, x0]] * (1.0 - fx) + lum[[y1, x1]] * fx;
            top * (1.0 - fy) + bottom * fy
        })
    }

    fn resize_triangle(&self, lum: Array2<f32>) -> Result<Array2<f32>> {
        let (h, w) = lum.dim();
        let img = ImageBuffer::<Luma<f32>, Vec<f32>>::from_raw(
            w as u32,
            h as u32,
            lum.iter().copied().collect(),
        )
        .ok_or_else(|| WrapperError::ObsShape {
            expected: vec![h, w],
            found: lum.shape().to_vec(),
        })?;
        let (rh, rw) = (self.config.resize_height, self.config.resize_width);
        let img = resize(&img, rw as u32, rh as u32, Triangle);
        Ok(Array2::from_shape_vec((rh, rw), img.into_raw())?)
    }
}
