//! Owned, interleaved 8-bit image buffer.
//!
//! Every pixel access in the crate goes through the addressing helpers
//! defined here (`get`, `set`, `pixel`, `row`, `neighbor`). Pixel `(x, y)`
//! channel `c` lives at `y * stride + x * channels + c` and `stride` is
//! always `width * channels`.

use std::fmt;

use tracing::debug;

use crate::image_pipeline::buffer::types::Channels;
use crate::image_pipeline::common::error::{Result, VisionError};

#[derive(Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    channels: Channels,
    levels: u8,
    stride: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Allocates a zero-filled buffer.
    ///
    /// Fails with `InvalidLevels` when `levels` is 0, `InvalidDimensions`
    /// when either side is 0, and `AllocationFailure` when the byte buffer
    /// cannot be reserved.
    pub fn new(width: usize, height: usize, channels: Channels, levels: u8) -> Result<Self> {
        Self::validate_header(width, height, levels)?;

        let stride = width
            .checked_mul(channels.count())
            .ok_or(VisionError::InvalidDimensions(width, height))?;
        let size = stride
            .checked_mul(height)
            .ok_or(VisionError::InvalidDimensions(width, height))?;

        let mut data = Vec::new();
        data.try_reserve_exact(size)
            .map_err(|_| VisionError::AllocationFailure(size))?;
        data.resize(size, 0);

        debug!(
            "Allocated {}x{}x{} image ({} bytes)",
            width,
            height,
            channels.count(),
            size
        );

        Ok(Self {
            width,
            height,
            channels,
            levels,
            stride,
            data,
        })
    }

    /// Wraps bytes that were produced elsewhere, e.g. a decoded video frame.
    pub fn from_raw(
        width: usize,
        height: usize,
        channels: Channels,
        levels: u8,
        data: Vec<u8>,
    ) -> Result<Self> {
        Self::validate_header(width, height, levels)?;

        let stride = width
            .checked_mul(channels.count())
            .ok_or(VisionError::InvalidDimensions(width, height))?;
        let expected = stride
            .checked_mul(height)
            .ok_or(VisionError::InvalidDimensions(width, height))?;
        if data.len() != expected {
            return Err(VisionError::DimensionMismatch(format!(
                "{}x{}x{} image needs {} bytes, got {}",
                width,
                height,
                channels.count(),
                expected,
                data.len()
            )));
        }

        Ok(Self {
            width,
            height,
            channels,
            levels,
            stride,
            data,
        })
    }

    fn validate_header(width: usize, height: usize, levels: u8) -> Result<()> {
        if levels == 0 {
            return Err(VisionError::InvalidLevels(0));
        }
        if width == 0 || height == 0 {
            return Err(VisionError::InvalidDimensions(width, height));
        }
        Ok(())
    }

    /// Releases the buffer. Taking `self` by value means a freed buffer can
    /// no longer be named.
    pub fn free(self) {
        debug!("Released {}x{} image", self.width, self.height);
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn channels(&self) -> Channels {
        self.channels
    }

    pub fn channel_count(&self) -> usize {
        self.channels.count()
    }

    pub fn levels(&self) -> u8 {
        self.levels
    }

    /// Bytes per row.
    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y * self.stride + x * self.channels.count()
    }

    /// Sample of channel `c` at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate or channel is out of bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize, c: usize) -> u8 {
        assert!(x < self.width && y < self.height && c < self.channels.count());
        self.data[self.index(x, y) + c]
    }

    /// # Panics
    ///
    /// Panics if the coordinate or channel is out of bounds.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, c: usize, value: u8) {
        assert!(x < self.width && y < self.height && c < self.channels.count());
        let idx = self.index(x, y) + c;
        self.data[idx] = value;
    }

    /// Sample at a signed offset from `(x, y)`, or `None` outside the image.
    #[inline]
    pub fn neighbor(&self, x: usize, y: usize, dx: isize, dy: isize, c: usize) -> Option<u8> {
        let nx = x.checked_add_signed(dx)?;
        let ny = y.checked_add_signed(dy)?;
        if nx >= self.width || ny >= self.height || c >= self.channels.count() {
            return None;
        }
        Some(self.data[self.index(nx, ny) + c])
    }

    /// All channels of one pixel.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> &[u8] {
        assert!(x < self.width && y < self.height);
        let start = self.index(x, y);
        &self.data[start..start + self.channels.count()]
    }

    #[inline]
    pub fn pixel_mut(&mut self, x: usize, y: usize) -> &mut [u8] {
        assert!(x < self.width && y < self.height);
        let start = self.index(x, y);
        let end = start + self.channels.count();
        &mut self.data[start..end]
    }

    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.stride]
    }

    #[inline]
    pub fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.stride;
        &mut self.data[start..start + self.stride]
    }

    pub fn fill(&mut self, value: u8) {
        self.data.fill(value);
    }

    /// Copies every byte of `src` into `self`. Both buffers must share width,
    /// height and channel layout.
    pub fn copy_from(&mut self, src: &PixelBuffer) -> Result<()> {
        src.ensure_same_shape(self)?;
        self.data.copy_from_slice(&src.data);
        Ok(())
    }

    /// Copies the half-open rectangle `[x0, x1) × [y0, y1)` into a new buffer
    /// with the same channel layout and levels.
    pub fn crop(&self, x0: usize, y0: usize, x1: usize, y1: usize) -> Result<PixelBuffer> {
        if x0 >= x1 || y0 >= y1 || x1 > self.width || y1 > self.height {
            return Err(VisionError::InvalidParameter(format!(
                "crop rectangle ({x0},{y0})-({x1},{y1}) outside {}x{} image",
                self.width, self.height
            )));
        }

        let mut dst = PixelBuffer::new(x1 - x0, y1 - y0, self.channels, self.levels)?;
        let channels = self.channels.count();
        let (start, end) = (x0 * channels, x1 * channels);
        for y in y0..y1 {
            dst.row_mut(y - y0).copy_from_slice(&self.row(y)[start..end]);
        }

        debug!(
            "Cropped ({},{})-({},{}) into {}x{}",
            x0,
            y0,
            x1,
            y1,
            dst.width,
            dst.height
        );
        Ok(dst)
    }

    pub fn same_size(&self, other: &PixelBuffer) -> bool {
        self.width == other.width && self.height == other.height
    }

    pub(crate) fn ensure_channels(&self, expected: Channels, role: &str) -> Result<()> {
        if self.channels != expected {
            return Err(VisionError::InvalidChannelConfiguration {
                expected: format!("{} channel(s) for {role}", expected.count()),
                actual: self.channels.count(),
            });
        }
        Ok(())
    }

    pub(crate) fn ensure_same_size(&self, other: &PixelBuffer) -> Result<()> {
        if !self.same_size(other) {
            return Err(VisionError::DimensionMismatch(format!(
                "{}x{} vs {}x{}",
                self.width, self.height, other.width, other.height
            )));
        }
        Ok(())
    }

    pub(crate) fn ensure_same_shape(&self, other: &PixelBuffer) -> Result<()> {
        self.ensure_same_size(other)?;
        if self.channels != other.channels {
            return Err(VisionError::DimensionMismatch(format!(
                "{} channel(s) vs {} channel(s)",
                self.channels.count(),
                other.channels.count()
            )));
        }
        Ok(())
    }
}

impl fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("channels", &self.channels)
            .field("levels", &self.levels)
            .field("stride", &self.stride)
            .field("len", &self.data.len())
            .finish()
    }
}
