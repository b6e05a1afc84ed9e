//! Grid storage for tile-matching sessions
//!
//! The grid is a fixed `width x height` array of cells addressed by `[x, y]`.
//! Row `y = 0` is the bottom of every column; collapse moves tiles toward
//! lower `y`. Occupied cells own a [`Tile`] that records its own position,
//! and every mutation keeps that record equal to the array index.

use std::fmt;
use std::str::FromStr;

use ndarray::Array2;

use crate::io::configuration::{EMPTY_GLYPH, MAX_GRID_DIMENSION, MAX_PALETTE_SIZE};
use crate::io::error::{CascadeError, Result, invalid_parameter};

/// Matching category of a tile, drawn from a palette of fixed size
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileType(u8);

impl TileType {
    /// Create a tile type from a palette index
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Create a tile type from a `usize` palette index
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the index cannot be represented
    pub fn from_index(index: usize) -> Result<Self> {
        u8::try_from(index).map(Self).map_err(|_overflow| {
            invalid_parameter(
                "tile_type",
                &index,
                &format!("must be below {MAX_PALETTE_SIZE}"),
            )
        })
    }

    /// Palette index of this tile type
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Single character used by the text rendering
    ///
    /// `A`-`Z` for the first 26 types, `a`-`z` for the next 26, `#` beyond.
    pub const fn glyph(self) -> char {
        match self.0 {
            i @ 0..=25 => (b'A' + i) as char,
            i @ 26..=51 => (b'a' + (i - 26)) as char,
            _ => '#',
        }
    }

    /// Inverse of [`TileType::glyph`] for the lettered range
    pub const fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            'A'..='Z' => Some(Self(glyph as u8 - b'A')),
            'a'..='z' => Some(Self(glyph as u8 - b'a' + 26)),
            _ => None,
        }
    }
}

/// Grid coordinates of a cell
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Column index
    pub x: usize,
    /// Row index, increasing upward
    pub y: usize,
}

impl Position {
    /// Create a position from column and row
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// A tile resident in the grid
///
/// The stored position is only ever changed by the grid itself, so it always
/// names the slot holding the tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    kind: TileType,
    position: Position,
}

impl Tile {
    const fn new(kind: TileType, position: Position) -> Self {
        Self { kind, position }
    }

    /// Matching category of the tile
    pub const fn kind(&self) -> TileType {
        self.kind
    }

    /// Slot currently holding the tile
    pub const fn position(&self) -> Position {
        self.position
    }
}

/// Content of a single grid slot
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Cell {
    /// No tile
    #[default]
    Empty,
    /// Slot holds a tile
    Occupied(Tile),
}

impl Cell {
    /// Check if the slot holds no tile
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Tile held by the slot, if any
    pub const fn tile(&self) -> Option<&Tile> {
        match self {
            Self::Occupied(tile) => Some(tile),
            Self::Empty => None,
        }
    }

    /// Tile type held by the slot, if any
    pub const fn tile_type(&self) -> Option<TileType> {
        match self {
            Self::Occupied(tile) => Some(tile.kind),
            Self::Empty => None,
        }
    }
}

/// Validate grid dimensions before allocation
///
/// # Errors
///
/// Returns `InvalidDimensions` if either dimension is zero or exceeds
/// `MAX_GRID_DIMENSION`
pub const fn validate_dimensions(width: usize, height: usize) -> Result<()> {
    if width == 0 || height == 0 || width > MAX_GRID_DIMENSION || height > MAX_GRID_DIMENSION {
        return Err(CascadeError::InvalidDimensions { width, height });
    }
    Ok(())
}

/// Fixed-size tile grid indexed by `[x, y]`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    /// Build a grid by asking `tile_at` for the content of every slot
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if the dimensions are rejected by
    /// [`validate_dimensions`]
    pub fn from_fn<F>(width: usize, height: usize, mut tile_at: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> Option<TileType>,
    {
        validate_dimensions(width, height)?;
        let cells = Array2::from_shape_fn((width, height), |(x, y)| {
            tile_at(x, y).map_or(Cell::Empty, |kind| {
                Cell::Occupied(Tile::new(kind, Position::new(x, y)))
            })
        });
        Ok(Self { cells })
    }

    /// Build a fully occupied grid from columns of tile types, bottom to top
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if there are no columns, a column is empty,
    /// or the columns differ in height
    pub fn from_columns(columns: &[Vec<TileType>]) -> Result<Self> {
        let width = columns.len();
        let height = columns.first().map_or(0, Vec::len);
        if columns.iter().any(|column| column.len() != height) {
            return Err(CascadeError::InvalidDimensions { width, height });
        }
        Self::from_fn(width, height, |x, y| {
            columns.get(x).and_then(|column| column.get(y)).copied()
        })
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.dim().0
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.dim().1
    }

    /// Grid dimensions as (width, height)
    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Check if coordinates address a slot of this grid
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width() && y < self.height()
    }

    /// Slot at the given coordinates
    pub fn get(&self, x: usize, y: usize) -> Option<&Cell> {
        self.cells.get([x, y])
    }

    /// Tile at the given coordinates
    pub fn tile(&self, x: usize, y: usize) -> Option<&Tile> {
        self.get(x, y).and_then(Cell::tile)
    }

    /// Tile type at the given coordinates, `None` for empty or out of range
    pub fn tile_type(&self, x: usize, y: usize) -> Option<TileType> {
        self.get(x, y).and_then(Cell::tile_type)
    }

    /// Check if the slot exists and holds a tile
    pub fn is_occupied(&self, x: usize, y: usize) -> bool {
        self.get(x, y).is_some_and(|cell| !cell.is_empty())
    }

    /// Number of occupied slots
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Positions of every occupied slot, column by column, bottom to top
    pub fn occupied_positions(&self) -> Vec<Position> {
        self.cells
            .indexed_iter()
            .filter(|(_, cell)| !cell.is_empty())
            .map(|((x, y), _)| Position::new(x, y))
            .collect()
    }

    /// Tile types of one column, bottom to top
    pub fn column_types(&self, x: usize) -> Vec<Option<TileType>> {
        (0..self.height()).map(|y| self.tile_type(x, y)).collect()
    }

    /// Tile types of one row, left to right
    pub fn row_types(&self, y: usize) -> Vec<Option<TileType>> {
        (0..self.width()).map(|x| self.tile_type(x, y)).collect()
    }

    /// Check that every tile's stored position equals its slot
    pub fn positions_consistent(&self) -> bool {
        self.cells.indexed_iter().all(|((x, y), cell)| {
            cell.tile()
                .is_none_or(|tile| tile.position == Position::new(x, y))
        })
    }

    /// Empty a slot, returning the tile it held
    pub(crate) fn take(&mut self, x: usize, y: usize) -> Option<Tile> {
        let cell = self.cells.get_mut([x, y])?;
        match std::mem::take(cell) {
            Cell::Occupied(tile) => Some(tile),
            Cell::Empty => None,
        }
    }

    /// Move the tile at `(x, from_y)` into the empty slot directly below it
    ///
    /// Returns `false` without mutating when there is no tile to move or the
    /// slot below is not empty.
    pub(crate) fn lower(&mut self, x: usize, from_y: usize) -> bool {
        let Some(to_y) = from_y.checked_sub(1) else {
            return false;
        };
        if !self.get(x, to_y).is_some_and(Cell::is_empty) || !self.is_occupied(x, from_y) {
            return false;
        }
        let Some(mut tile) = self.take(x, from_y) else {
            return false;
        };
        tile.position.y = to_y;
        if let Some(slot) = self.cells.get_mut([x, to_y]) {
            *slot = Cell::Occupied(tile);
        }
        true
    }
}

impl fmt::Display for Grid {
    /// Rows top to bottom, one glyph per column
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..self.height()).rev() {
            for x in 0..self.width() {
                let glyph = self.tile_type(x, y).map_or(EMPTY_GLYPH, TileType::glyph);
                write!(f, "{glyph}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = CascadeError;

    /// Parse the text rendering produced by `Display`
    ///
    /// Lines are rows from top to bottom; blank lines and surrounding
    /// whitespace are ignored.
    fn from_str(text: &str) -> Result<Self> {
        let rows: Vec<Vec<char>> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| line.chars().collect())
            .collect();

        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != width) {
            return Err(CascadeError::InvalidDimensions { width, height });
        }

        for glyph in rows.iter().flatten() {
            if *glyph != EMPTY_GLYPH && TileType::from_glyph(*glyph).is_none() {
                return Err(invalid_parameter(
                    "grid",
                    glyph,
                    &"expected a letter or the empty glyph",
                ));
            }
        }

        Self::from_fn(width, height, |x, y| {
            let row = height.checked_sub(y + 1)?;
            rows.get(row)
                .and_then(|glyphs| glyphs.get(x))
                .and_then(|glyph| TileType::from_glyph(*glyph))
        })
    }
}
