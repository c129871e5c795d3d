//! Index grid and occurrence counts.
//!
//! [`IndexGrid`] is the canonical output of classification. It owns the
//! palette its indices refer to, so the renderer and the tabular exporter
//! always see the same ordering the classifier used.

use crate::api::MapError;
use crate::palette::Palette;

/// One palette index per cell, row-major, plus the palette itself.
///
/// Every index is a valid position in [`palette()`](IndexGrid::palette);
/// this is checked when a grid is built from caller-supplied data.
///
/// # Example
///
/// ```
/// use palette_grid::{IndexGrid, Palette};
///
/// let palette = Palette::from_hex(&["#000000", "#FFFFFF"]).unwrap();
/// let grid = IndexGrid::new(vec![0, 1, 1, 0], 2, 2, palette).unwrap();
///
/// assert_eq!(grid.get(1, 0), 1);
/// assert_eq!(grid.counts().as_slice(), &[2, 2]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct IndexGrid {
    indices: Vec<usize>,
    width: u32,
    height: u32,
    palette: Palette,
}

impl IndexGrid {
    /// Build a grid from caller-supplied indices.
    ///
    /// # Errors
    ///
    /// - [`MapError::GridShape`] if `indices.len() != width * height`
    /// - [`MapError::IndexOutOfRange`] if any index is `>= palette.len()`
    pub fn new(
        indices: Vec<usize>,
        width: u32,
        height: u32,
        palette: Palette,
    ) -> Result<Self, MapError> {
        if indices.len() != width as usize * height as usize {
            return Err(MapError::GridShape {
                width,
                height,
                len: indices.len(),
            });
        }
        if let Some((cell, &index)) = indices
            .iter()
            .enumerate()
            .find(|&(_, &i)| i >= palette.len())
        {
            return Err(MapError::IndexOutOfRange {
                index,
                cell,
                palette_len: palette.len(),
            });
        }
        Ok(Self::from_parts(indices, width, height, palette))
    }

    /// Assemble a grid the caller already knows to be valid.
    pub(crate) fn from_parts(
        indices: Vec<usize>,
        width: u32,
        height: u32,
        palette: Palette,
    ) -> Self {
        debug_assert_eq!(indices.len(), width as usize * height as usize);
        debug_assert!(indices.iter().all(|&i| i < palette.len()));
        Self {
            indices,
            width,
            height,
            palette,
        }
    }

    /// Palette indices in row-major order.
    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Grid width in cells.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in cells.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of cells (`width * height`).
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.indices.len()
    }

    /// The palette the indices refer to.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Index at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the grid.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> usize {
        assert!(x < self.width && y < self.height, "cell ({x}, {y}) out of bounds");
        self.indices[y as usize * self.width as usize + x as usize]
    }

    /// Rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[usize]> {
        // a zero-width grid has no cells, so any nonzero chunk size yields nothing
        self.indices.chunks_exact(self.width.max(1) as usize)
    }

    /// Histogram of indices with one bucket per palette entry.
    pub fn counts(&self) -> OccurrenceCounts {
        let mut counts = vec![0u64; self.palette.len()];
        for &idx in &self.indices {
            counts[idx] += 1;
        }
        OccurrenceCounts { counts }
    }
}

/// Number of cells assigned to each palette index.
///
/// Has exactly one entry per palette color (unused colors count 0), and the
/// entries sum to the cell count of the grid they were derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccurrenceCounts {
    counts: Vec<u64>,
}

impl OccurrenceCounts {
    /// Counts in palette order.
    #[inline]
    pub fn as_slice(&self) -> &[u64] {
        &self.counts
    }

    /// Number of buckets (the palette size).
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// `true` only for a histogram with no buckets.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum over all buckets.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// `(index, count)` pairs in palette order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.counts.iter().copied().enumerate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_colors() -> Palette {
        Palette::from_hex(&["#000000", "#FF0000", "#FFFFFF"]).unwrap()
    }

    #[test]
    fn test_new_stores_fields() {
        let grid = IndexGrid::new(vec![0, 1, 2, 0, 1, 2], 3, 2, three_colors()).unwrap();
        assert_eq!(grid.indices(), &[0, 1, 2, 0, 1, 2]);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.cell_count(), 6);
        assert_eq!(grid.palette().len(), 3);
        assert_eq!(grid.get(2, 1), 2);
    }

    #[test]
    fn test_shape_mismatch_rejected() {
        let err = IndexGrid::new(vec![0; 5], 3, 2, three_colors()).unwrap_err();
        assert_eq!(
            err,
            MapError::GridShape {
                width: 3,
                height: 2,
                len: 5
            }
        );
    }

    #[test]
    fn test_out_of_range_index_rejected() {
        let err = IndexGrid::new(vec![0, 1, 3, 2], 2, 2, three_colors()).unwrap_err();
        assert_eq!(
            err,
            MapError::IndexOutOfRange {
                index: 3,
                cell: 2,
                palette_len: 3
            }
        );
    }

    #[test]
    fn test_rows() {
        let grid = IndexGrid::new(vec![0, 1, 2, 2, 1, 0], 3, 2, three_colors()).unwrap();
        let rows: Vec<&[usize]> = grid.rows().collect();
        assert_eq!(rows, vec![&[0, 1, 2][..], &[2, 1, 0][..]]);
    }

    #[test]
    fn test_counts_include_unused_colors() {
        let grid = IndexGrid::new(vec![2, 2, 0, 2], 2, 2, three_colors()).unwrap();
        let counts = grid.counts();
        assert_eq!(counts.as_slice(), &[1, 0, 3]);
        assert_eq!(counts.len(), 3);
        assert_eq!(counts.total(), 4);
        assert_eq!(counts.iter().collect::<Vec<_>>(), vec![(0, 1), (1, 0), (2, 3)]);
    }
}
