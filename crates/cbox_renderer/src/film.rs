//! Progressive accumulation buffer.

use cbox_math::DVec3;
use rayon::prelude::*;

use crate::Color;

/// Running radiance total for one pixel.
///
/// The sum is kept in f64 so small samples still register after millions
/// of frames.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AccumulationCell {
    pub radiance_sum: DVec3,
    pub sample_count: u64,
}

impl AccumulationCell {
    /// Add one sample.
    #[inline]
    pub fn accumulate(&mut self, sample: Color) {
        self.radiance_sum += sample.as_dvec3();
        self.sample_count += 1;
    }

    /// Mean of the samples so far, black before the first one.
    #[inline]
    pub fn read(&self) -> Color {
        if self.sample_count == 0 {
            Color::ZERO
        } else {
            (self.radiance_sum / self.sample_count as f64).as_vec3()
        }
    }
}

/// Linear index of pixel (u, v) in a row-major image `width` pixels wide.
#[inline]
pub(crate) fn pixel_index(width: u32, u: u32, v: u32) -> usize {
    v as usize * width as usize + u as usize
}

/// Pixel coordinates of a linear index in a row-major image `width` pixels wide.
#[inline]
pub(crate) fn pixel_coords(width: u32, pixel: usize) -> (u32, u32) {
    let width = width as usize;
    ((pixel % width) as u32, (pixel / width) as u32)
}

/// Per-pixel running sums, row-major with row 0 at the bottom of the image.
#[derive(Debug, Clone)]
pub struct AccumulationBuffer {
    width: u32,
    height: u32,
    cells: Vec<AccumulationCell>,
}

impl AccumulationBuffer {
    /// Create a zeroed buffer.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![AccumulationCell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the buffer has no pixels.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Linear index of pixel (u, v).
    #[inline]
    pub fn index(&self, u: u32, v: u32) -> usize {
        pixel_index(self.width, u, v)
    }

    /// Get the cell for a linear pixel index.
    pub fn cell(&self, pixel: usize) -> &AccumulationCell {
        &self.cells[pixel]
    }

    /// Add a sample to a pixel.
    pub fn accumulate(&mut self, pixel: usize, sample: Color) {
        self.cells[pixel].accumulate(sample);
    }

    /// Mean radiance of a pixel, black if it has no samples yet.
    pub fn read(&self, pixel: usize) -> Color {
        self.cells[pixel].read()
    }

    /// Parallel iterator over `((u, v), cell)`, one item per pixel. Each
    /// cell is handed to exactly one task.
    pub fn par_pixels_mut(
        &mut self,
    ) -> impl IndexedParallelIterator<Item = ((u32, u32), &mut AccumulationCell)> + '_ {
        let width = self.width;
        self.cells
            .par_iter_mut()
            .enumerate()
            .map(move |(pixel, cell)| (pixel_coords(width, pixel), cell))
    }

    /// Every pixel's mean radiance in buffer order.
    pub fn resolve(&self) -> Vec<Color> {
        self.cells.iter().map(AccumulationCell::read).collect()
    }

    /// Zero all sums and counts.
    pub fn reset(&mut self) {
        self.cells.fill(AccumulationCell::default());
    }
}
