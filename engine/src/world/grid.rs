//! Grid Map Module
//!
//! Static voxel grid parsed from a text layout. Each character is one cell:
//!
//! | char | cell            | solid                           |
//! |------|-----------------|---------------------------------|
//! | ` `  | empty           | none                            |
//! | `S`  | spawn marker    | none                            |
//! | `T`  | short wall      | 1 vertical unit tall, walkable  |
//! | `X`  | tall wall       | 3 vertical units tall, blocking |
//!
//! ## Coordinates
//! Rows run along world Z, columns along world X, and the grid is centred on
//! the origin. A cell's world centre is
//! `x = (col + 1) * H - cols * H / 2`, `z = (row + 1) * H - rows * H / 2`
//! and the inverse lookup is
//! `col = floor((x + (cols + 1) * H / 2) / H) - 1` (same for rows on Z),
//! so placing a cell and looking up its centre always lands on the same cell.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{ArenaError, Result};

/// Height of the world floor plane.
pub const FLOOR_HEIGHT: f32 = 0.0;

/// Cell type of a single grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellKind {
    Empty,
    Spawn,
    ShortWall,
    TallWall,
}

impl CellKind {
    /// Parse a layout character.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            ' ' => Some(Self::Empty),
            'S' => Some(Self::Spawn),
            'T' => Some(Self::ShortWall),
            'X' => Some(Self::TallWall),
            _ => None,
        }
    }

    /// Layout character for this cell.
    pub fn as_char(self) -> char {
        match self {
            Self::Empty => ' ',
            Self::Spawn => 'S',
            Self::ShortWall => 'T',
            Self::TallWall => 'X',
        }
    }

    /// Wall height in vertical units (0 for open cells).
    pub fn height_units(self) -> f32 {
        match self {
            Self::Empty | Self::Spawn => 0.0,
            Self::ShortWall => 1.0,
            Self::TallWall => 3.0,
        }
    }

    pub fn is_solid(self) -> bool {
        matches!(self, Self::ShortWall | Self::TallWall)
    }
}

/// Stable handle of a wall solid, assigned once at setup in row-major order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SolidId(pub u32);

/// Solid geometry owned by a wall cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Solid {
    pub id: SolidId,
    pub kind: CellKind,
    /// Centre of the wall box in world space
    pub center: Vec3,
    /// Full extents of the wall box (width, height, depth)
    pub size: Vec3,
}

impl Solid {
    /// Y coordinate of the wall's top face.
    pub fn top(&self) -> f32 {
        self.center.y + self.size.y * 0.5
    }
}

/// Result of a world-position lookup.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapCell {
    pub row: usize,
    pub col: usize,
    pub kind: CellKind,
    pub solid: Option<Solid>,
}

/// Immutable arena grid with its wall solids and spawn points.
#[derive(Clone, Debug)]
pub struct GridMap {
    horizontal_unit: f32,
    vertical_unit: f32,
    rows: usize,
    cols: usize,
    /// Row-major cell kinds, `rows * cols` long
    cells: Vec<CellKind>,
    /// Row-major solid handles, parallel to `cells`
    solid_at: Vec<Option<SolidId>>,
    solids: Vec<Solid>,
    spawn_points: Vec<Vec3>,
}

impl GridMap {
    /// Parse a newline-delimited layout.
    ///
    /// Rows may have different lengths; the grid is as wide as the longest
    /// row and shorter rows are padded with empty cells.
    pub fn parse(layout: &str, horizontal_unit: f32, vertical_unit: f32) -> Result<Self> {
        let lines: Vec<&str> = layout
            .lines()
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();
        if lines.is_empty() {
            return Err(ArenaError::EmptyLayout);
        }

        let rows = lines.len();
        let cols = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);
        if cols == 0 {
            return Err(ArenaError::EmptyLayout);
        }

        let mut map = Self {
            horizontal_unit,
            vertical_unit,
            rows,
            cols,
            cells: vec![CellKind::Empty; rows * cols],
            solid_at: vec![None; rows * cols],
            solids: Vec::new(),
            spawn_points: Vec::new(),
        };

        for (row, line) in lines.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let kind =
                    CellKind::from_char(ch).ok_or(ArenaError::UnknownCell { row, col, ch })?;
                map.place(row, col, kind);
            }
        }

        if map.spawn_points.is_empty() {
            return Err(ArenaError::NoSpawnPoints);
        }

        tracing::debug!(
            rows,
            cols,
            solids = map.solids.len(),
            spawn_points = map.spawn_points.len(),
            "parsed arena grid"
        );

        Ok(map)
    }

    fn place(&mut self, row: usize, col: usize, kind: CellKind) {
        let index = row * self.cols + col;
        self.cells[index] = kind;

        let ground = self.world_center_of(row, col);
        match kind {
            CellKind::Empty => {}
            CellKind::Spawn => self.spawn_points.push(ground),
            CellKind::ShortWall | CellKind::TallWall => {
                let height = kind.height_units() * self.vertical_unit;
                let id = SolidId(self.solids.len() as u32);
                self.solids.push(Solid {
                    id,
                    kind,
                    center: Vec3::new(ground.x, height * 0.5, ground.z),
                    size: Vec3::new(self.horizontal_unit, height, self.horizontal_unit),
                });
                self.solid_at[index] = Some(id);
            }
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn horizontal_unit(&self) -> f32 {
        self.horizontal_unit
    }

    pub fn vertical_unit(&self) -> f32 {
        self.vertical_unit
    }

    /// World size of the grid as (x extent, z extent).
    pub fn extent(&self) -> (f32, f32) {
        (
            self.cols as f32 * self.horizontal_unit,
            self.rows as f32 * self.horizontal_unit,
        )
    }

    /// World-space centre of a cell at floor height.
    pub fn world_center_of(&self, row: usize, col: usize) -> Vec3 {
        let h = self.horizontal_unit;
        Vec3::new(
            (col + 1) as f32 * h - self.cols as f32 * h * 0.5,
            FLOOR_HEIGHT,
            (row + 1) as f32 * h - self.rows as f32 * h * 0.5,
        )
    }

    /// Unchecked (row, col) for a world position. May be negative or past the edge.
    pub fn row_col_of(&self, position: Vec3) -> (i64, i64) {
        let h = self.horizontal_unit;
        let x_offset = (self.cols + 1) as f32 * 0.5 * h;
        let z_offset = (self.rows + 1) as f32 * 0.5 * h;
        let col = ((position.x + x_offset) / h).floor() as i64 - 1;
        let row = ((position.z + z_offset) / h).floor() as i64 - 1;
        (row, col)
    }

    /// Look up the cell containing a world position.
    ///
    /// Fails with [`ArenaError::OutOfBounds`] when the position lies outside
    /// the grid. Callers keep bodies inside the walls; this lookup does not clamp.
    pub fn cell_for(&self, position: Vec3) -> Result<MapCell> {
        let (row, col) = self.row_col_of(position);
        if row < 0 || col < 0 || row as usize >= self.rows || col as usize >= self.cols {
            return Err(ArenaError::OutOfBounds { row, col });
        }
        let (row, col) = (row as usize, col as usize);
        let index = row * self.cols + col;
        Ok(MapCell {
            row,
            col,
            kind: self.cells[index],
            solid: self.solid_at[index].map(|id| self.solids[id.0 as usize]),
        })
    }

    /// Cell kind at a grid coordinate, if it exists.
    pub fn kind_at(&self, row: usize, col: usize) -> Option<CellKind> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// World positions (at floor height) of every spawn cell.
    pub fn spawn_points(&self) -> &[Vec3] {
        &self.spawn_points
    }

    /// Every wall solid, in row-major order.
    pub fn solids(&self) -> &[Solid] {
        &self.solids
    }

    pub fn solid(&self, id: SolidId) -> Option<&Solid> {
        self.solids.get(id.0 as usize)
    }
}
