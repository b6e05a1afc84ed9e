//! Initial grid generation with local run avoidance
//!
//! Every slot is drawn uniformly from the palette. Along the constraint axis
//! the generator looks back at the tiles it already placed: if the two most
//! recent ones equal the fresh draw, it redraws until the type differs. The
//! check is purely backward-looking and per line, so runs across the other
//! axis are left alone.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::io::configuration::{MAX_GENERATED_RUN, MAX_PALETTE_SIZE};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::grid::{Grid, TileType, validate_dimensions};

/// Direction along which generation avoids runs of three
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ConstraintAxis {
    /// Fill each column bottom to top, avoiding vertical runs
    #[default]
    Vertical,
    /// Fill each row left to right, avoiding horizontal runs
    Horizontal,
}

/// Factory for the initial grid of an engine session
pub trait GridSource {
    /// Produce a fully populated `width x height` grid over `palette_size` types
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions or palette size are rejected
    fn create_grid(&mut self, width: usize, height: usize, palette_size: usize) -> Result<Grid>;
}

/// Validate the number of distinct tile types
///
/// # Errors
///
/// Returns `InvalidParameter` for an empty palette or one larger than
/// `MAX_PALETTE_SIZE`
pub fn validate_palette_size(palette_size: usize) -> Result<()> {
    if palette_size == 0 || palette_size > MAX_PALETTE_SIZE {
        return Err(invalid_parameter(
            "palette_size",
            &palette_size,
            &format!("must be between 1 and {MAX_PALETTE_SIZE}"),
        ));
    }
    Ok(())
}

/// Seeded generator for run-free starting grids
#[derive(Clone, Debug)]
pub struct GridGenerator {
    rng: StdRng,
    axis: ConstraintAxis,
}

impl GridGenerator {
    /// Create a deterministic generator using the vertical constraint
    pub fn new(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    /// Create a generator drawing from an existing random source
    pub const fn from_rng(rng: StdRng) -> Self {
        Self {
            rng,
            axis: ConstraintAxis::Vertical,
        }
    }

    /// Select the axis along which runs are avoided
    #[must_use]
    pub fn with_axis(mut self, axis: ConstraintAxis) -> Self {
        self.axis = axis;
        self
    }

    /// Axis along which runs are avoided
    pub const fn axis(&self) -> ConstraintAxis {
        self.axis
    }

    /// Build a fully populated grid
    ///
    /// A palette of a single type cannot satisfy the run constraint, so the
    /// constraint is skipped and the grid is filled with that type.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` for a zero or oversized dimension and
    /// `InvalidParameter` for an unusable palette size
    pub fn create_grid(&mut self, width: usize, height: usize, palette_size: usize) -> Result<Grid> {
        validate_dimensions(width, height)?;
        validate_palette_size(palette_size)?;

        match self.axis {
            ConstraintAxis::Vertical => {
                let columns = self.fill_lines(width, height, palette_size)?;
                Grid::from_columns(&columns)
            }
            ConstraintAxis::Horizontal => {
                let rows = self.fill_lines(height, width, palette_size)?;
                Grid::from_fn(width, height, |x, y| {
                    rows.get(y).and_then(|row| row.get(x)).copied()
                })
            }
        }
    }

    /// Fill `lines` independent lines of `length` tiles each
    fn fill_lines(
        &mut self,
        lines: usize,
        length: usize,
        palette_size: usize,
    ) -> Result<Vec<Vec<TileType>>> {
        let mut filled = Vec::with_capacity(lines);
        for _ in 0..lines {
            let mut line = Vec::with_capacity(length);
            for _ in 0..length {
                let kind = self.draw(&line, palette_size)?;
                line.push(kind);
            }
            filled.push(line);
        }
        Ok(filled)
    }

    /// Draw one tile type given the tiles already placed on its line
    fn draw(&mut self, previous: &[TileType], palette_size: usize) -> Result<TileType> {
        let mut candidate = self.random_type(palette_size)?;
        if palette_size < 2 {
            return Ok(candidate);
        }

        let run = previous
            .iter()
            .rev()
            .take_while(|&&kind| kind == candidate)
            .count();
        if run >= MAX_GENERATED_RUN {
            let repeated = candidate;
            while candidate == repeated {
                candidate = self.random_type(palette_size)?;
            }
        }
        Ok(candidate)
    }

    fn random_type(&mut self, palette_size: usize) -> Result<TileType> {
        TileType::from_index(self.rng.random_range(0..palette_size))
    }
}

impl GridSource for GridGenerator {
    fn create_grid(&mut self, width: usize, height: usize, palette_size: usize) -> Result<Grid> {
        Self::create_grid(self, width, height, palette_size)
    }
}

/// Build a starting grid with a fresh generator seeded by `seed`
///
/// # Errors
///
/// Propagates the validation errors of [`GridGenerator::create_grid`]
pub fn create_grid(width: usize, height: usize, palette_size: usize, seed: u64) -> Result<Grid> {
    GridGenerator::new(seed).create_grid(width, height, palette_size)
}
