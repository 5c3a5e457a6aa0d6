//! Row pool — owns every animated row and the per-frame update pass.
//!
//! The pool is sized from the surface height at creation and on resize; rows
//! are never added or removed in between.  A resize throws the whole pool
//! away and builds a fresh one — no partial state survives.

use super::corpus::{self, CorpusError};
use super::row::Row;

/// How many rows fit a surface of `height` cells with one animated row per
/// `spacing` cells.  Degenerate surfaces yield zero rows, which is valid:
/// the pool simply idles.
pub fn compute_row_count(height: u16, spacing: u16) -> usize {
    if spacing == 0 {
        return 0;
    }
    (height / spacing) as usize
}

/// The set of animated rows for the current surface size.
pub struct RowPool {
    pub rows: Vec<Row>,
    /// Surface size the pool was built for.
    pub width: u16,
    pub height: u16,
    /// Cells between animated rows.
    spacing: u16,
    /// Seeded source for snippet choice, positions and timing jitter.
    rng: fastrand::Rng,
    snippets: &'static [&'static str],
}

impl RowPool {
    /// Build a pool for the given surface, validating the corpus up front.
    pub fn new(
        width: u16,
        height: u16,
        spacing: u16,
        rng: fastrand::Rng,
        snippets: &'static [&'static str],
    ) -> Result<Self, CorpusError> {
        corpus::validate(snippets)?;
        let mut pool = Self {
            rows: Vec::new(),
            width,
            height,
            spacing,
            rng,
            snippets,
        };
        pool.populate();
        Ok(pool)
    }

    fn populate(&mut self) {
        let count = compute_row_count(self.height, self.spacing);
        self.rows = (0..count)
            .map(|i| Row::new(i as u16, self.spacing, self.width, &mut self.rng, self.snippets))
            .collect();
    }

    /// Adopt a new surface size, discarding every row and creating a fresh
    /// set sized for it.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.populate();
    }

    /// Throw the rows away and re-roll them at the current size.
    pub fn reseed(&mut self) {
        self.populate();
    }

    /// Advance every row by one frame.  Called once per display frame,
    /// strictly before rendering.
    pub fn tick(&mut self) {
        for row in &mut self.rows {
            row.step(self.width, &mut self.rng, self.snippets);
        }
    }
}
