//! Tabular encoding of an index grid.
//!
//! The document layout, with 0-based rows:
//!
//! ```text
//! row 0   | 0 | 1 | 2 | ...      palette indices, each cell filled with its color
//! row 1   | n0| n1| n2| ...      occurrence count per index
//! row 2   |                      blank separator
//! row 3.. | i | i | i | ...      the index grid, one row per image row
//! ```
//!
//! [`TabularDocument`] is format-neutral; writing it to a spreadsheet file is
//! the job of a sink in the application crate.

use crate::color::Rgba;
use crate::output::{IndexGrid, OccurrenceCounts};

/// Sheet name for the exported color map.
pub const SHEET_NAME: &str = "Color Map";

/// Row holding the palette swatches.
pub const HEADER_ROW: u32 = 0;

/// Row holding the occurrence counts.
pub const COUNTS_ROW: u32 = 1;

/// First row of grid data; row 2 stays blank.
pub const DATA_START_ROW: u32 = 3;

/// One populated cell of a [`TabularDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// 0-based row
    pub row: u32,
    /// 0-based column
    pub col: u32,
    /// Cell value (an index or a count)
    pub value: u64,
    /// Solid background fill, opaque. Only header cells carry one.
    pub fill: Option<Rgba>,
}

/// Spreadsheet-like view of an index grid with a palette header.
///
/// # Example
///
/// ```
/// use palette_grid::{export, IndexGrid, Palette, Rgba};
///
/// let palette = Palette::from_hex(&["#FF0000", "#00FF00", "#0000FF"]).unwrap();
/// let grid = IndexGrid::new(vec![0, 0, 2, 0], 2, 2, palette).unwrap();
/// let doc = export(&grid);
///
/// assert_eq!(doc.sheet_name(), "Color Map");
/// assert_eq!(doc.counts().as_slice(), &[3, 0, 1]);
/// assert_eq!(doc.header_fills()[2], Rgba::opaque(0, 0, 255));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TabularDocument {
    fills: Vec<Rgba>,
    counts: OccurrenceCounts,
    rows: Vec<Vec<usize>>,
}

impl TabularDocument {
    /// Name of the sheet the document is written to.
    #[inline]
    pub fn sheet_name(&self) -> &str {
        SHEET_NAME
    }

    /// Header fill colors in palette order, alpha forced opaque.
    #[inline]
    pub fn header_fills(&self) -> &[Rgba] {
        &self.fills
    }

    /// Occurrence counts in palette order.
    #[inline]
    pub fn counts(&self) -> &OccurrenceCounts {
        &self.counts
    }

    /// Grid rows, top to bottom.
    #[inline]
    pub fn data_rows(&self) -> &[Vec<usize>] {
        &self.rows
    }

    /// Every populated cell, header first, then counts, then grid data.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let header = self.fills.iter().enumerate().map(|(i, &fill)| Cell {
            row: HEADER_ROW,
            col: i as u32,
            value: i as u64,
            fill: Some(fill),
        });
        let counts = self.counts.iter().map(|(i, n)| Cell {
            row: COUNTS_ROW,
            col: i as u32,
            value: n,
            fill: None,
        });
        let data = self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter().enumerate().map(move |(x, &idx)| Cell {
                row: DATA_START_ROW + y as u32,
                col: x as u32,
                value: idx as u64,
                fill: None,
            })
        });
        header.chain(counts).chain(data)
    }
}

/// Build the tabular document for `grid`.
pub fn export(grid: &IndexGrid) -> TabularDocument {
    let fills = grid
        .palette()
        .colors()
        .iter()
        .map(|c| Rgba::opaque(c.r, c.g, c.b))
        .collect();
    let rows = grid.rows().map(<[usize]>::to_vec).collect();
    TabularDocument {
        fills,
        counts: grid.counts(),
        rows,
    }
}
