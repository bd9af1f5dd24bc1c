//! Frame-difference motion estimation.
//!
//! A [`MotionSampler`] keeps exactly one previous frame. Each new frame is
//! compared pixel by pixel against it and then replaces it, so a ratio always
//! describes the change between two consecutive ticks.

use super::config::MotionConfig;
use super::constants::RGBA_CHANNELS;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FrameError {
    #[error("frame data has {actual} bytes, expected {expected} for {width}x{height} RGBA")]
    SizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
    #[error("cannot compare a {a_w}x{a_h} frame with a {b_w}x{b_h} frame")]
    DimensionMismatch { a_w: u32, a_h: u32, b_w: u32, b_h: u32 },
    #[error("frame has no pixels")]
    Empty,
}

/// One RGBA capture, row-major, 4 bytes per pixel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, FrameError> {
        if width == 0 || height == 0 {
            return Err(FrameError::Empty);
        }
        let expected = width as usize * height as usize * RGBA_CHANNELS;
        if data.len() != expected {
            return Err(FrameError::SizeMismatch {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Frame where every pixel has the same color.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Result<Self, FrameError> {
        let pixels = width as usize * height as usize;
        let data = rgba.iter().copied().cycle().take(pixels * RGBA_CHANNELS).collect();
        Self::new(width, height, data)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn set_pixel(&mut self, index: usize, rgba: [u8; 4]) {
        let at = index * RGBA_CHANNELS;
        if let Some(px) = self.data.get_mut(at..at + RGBA_CHANNELS) {
            px.copy_from_slice(&rgba);
        }
    }
}

/// Summed absolute difference of the color channels; alpha is ignored.
#[inline]
pub fn rgb_distance(a: &[u8], b: &[u8]) -> u16 {
    a.iter()
        .zip(b.iter())
        .take(3)
        .map(|(x, y)| x.abs_diff(*y) as u16)
        .sum()
}

/// Number of pixels whose RGB distance exceeds `threshold`.
pub fn count_moved_pixels(
    current: &FrameBuffer,
    previous: &FrameBuffer,
    threshold: u16,
) -> Result<usize, FrameError> {
    if current.width != previous.width || current.height != previous.height {
        return Err(FrameError::DimensionMismatch {
            a_w: current.width,
            a_h: current.height,
            b_w: previous.width,
            b_h: previous.height,
        });
    }
    Ok(current
        .data
        .chunks_exact(RGBA_CHANNELS)
        .zip(previous.data.chunks_exact(RGBA_CHANNELS))
        .filter(|(c, p)| rgb_distance(c, p) > threshold)
        .count())
}

/// Fraction of moved pixels in [0, 1].
pub fn motion_ratio(
    current: &FrameBuffer,
    previous: &FrameBuffer,
    threshold: u16,
) -> Result<f64, FrameError> {
    let moved = count_moved_pixels(current, previous, threshold)?;
    Ok(moved as f64 / current.pixel_count() as f64)
}

/// Outcome of asking the browser for a camera stream.
#[derive(Clone, Debug, PartialEq)]
pub enum CaptureAccess<S> {
    Granted(S),
    Denied(String),
    Unsupported,
}

impl<S> CaptureAccess<S> {
    pub fn is_granted(&self) -> bool {
        matches!(self, CaptureAccess::Granted(_))
    }
}

#[derive(Clone, Debug)]
pub struct MotionSampler {
    config: MotionConfig,
    previous: Option<FrameBuffer>,
}

impl MotionSampler {
    pub fn new(config: MotionConfig) -> Self {
        Self {
            config,
            previous: None,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    /// Feed one captured frame. Returns the ratio against the prior frame, or
    /// `None` on the first frame. The frame always becomes the new reference.
    pub fn sample(&mut self, frame: FrameBuffer) -> Option<f64> {
        let ratio = match &self.previous {
            Some(prev) => match motion_ratio(&frame, prev, self.config.pixel_threshold) {
                Ok(r) => Some(r),
                Err(e) => {
                    log::warn!("[motion] skipping comparison: {}", e);
                    None
                }
            },
            None => None,
        };
        self.previous = Some(frame);
        ratio
    }
}
