//! Grid: fixed rows x cols tile map with world-space queries.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use rampart_core::enums::TileKind;
use rampart_core::types::{TileCoord, TowerId};

/// A single cell of the map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub coord: TileCoord,
    pub kind: TileKind,
    /// Tower standing on this tile (buildable tiles only).
    pub tower: Option<TowerId>,
}

/// Row-major tile map. Immutable in shape after generation; only the
/// tower slots change during play.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grid {
    cols: i32,
    rows: i32,
    tile_size: f32,
    tiles: Vec<Tile>,
    start: TileCoord,
    end: TileCoord,
}

impl Grid {
    /// Build a grid from row-major tile kinds.
    ///
    /// `kinds.len()` must equal `cols * rows`; `start` and `end` must be
    /// on the grid. Used by the generator and by tests that need a
    /// hand-drawn map.
    pub fn from_kinds(
        cols: i32,
        rows: i32,
        tile_size: f32,
        kinds: &[TileKind],
        start: TileCoord,
        end: TileCoord,
    ) -> Self {
        debug_assert_eq!(kinds.len(), (cols * rows) as usize);
        let tiles = kinds
            .iter()
            .enumerate()
            .map(|(i, &kind)| Tile {
                coord: TileCoord::new(i as i32 % cols, i as i32 / cols),
                kind,
                tower: None,
            })
            .collect();
        Self {
            cols,
            rows,
            tile_size,
            tiles,
            start,
            end,
        }
    }

    /// Parse an ASCII map: `S` start, `E` end, `#` path, `.` buildable.
    /// Rows are separated by newlines; surrounding whitespace is ignored.
    pub fn from_ascii(map: &str, tile_size: f32) -> Option<Self> {
        let lines: Vec<&str> = map
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let rows = lines.len() as i32;
        let cols = lines.first()?.len() as i32;
        let mut kinds = Vec::with_capacity((cols * rows) as usize);
        let mut start = None;
        let mut end = None;
        for (row, line) in lines.iter().enumerate() {
            if line.len() as i32 != cols {
                return None;
            }
            for (col, ch) in line.chars().enumerate() {
                let coord = TileCoord::new(col as i32, row as i32);
                let kind = match ch {
                    'S' => {
                        start = Some(coord);
                        TileKind::Start
                    }
                    'E' => {
                        end = Some(coord);
                        TileKind::End
                    }
                    '#' => TileKind::Path,
                    '.' => TileKind::Buildable,
                    _ => return None,
                };
                kinds.push(kind);
            }
        }
        Some(Self::from_kinds(cols, rows, tile_size, &kinds, start?, end?))
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    pub fn start(&self) -> TileCoord {
        self.start
    }

    pub fn end(&self) -> TileCoord {
        self.end
    }

    /// Width of the map in world units.
    pub fn world_width(&self) -> f32 {
        self.cols as f32 * self.tile_size
    }

    /// Height of the map in world units.
    pub fn world_height(&self) -> f32 {
        self.rows as f32 * self.tile_size
    }

    pub fn contains(&self, coord: TileCoord) -> bool {
        coord.col >= 0 && coord.row >= 0 && coord.col < self.cols && coord.row < self.rows
    }

    fn index(&self, coord: TileCoord) -> Option<usize> {
        self.contains(coord)
            .then(|| (coord.row * self.cols + coord.col) as usize)
    }

    pub fn tile(&self, coord: TileCoord) -> Option<&Tile> {
        self.index(coord).map(|i| &self.tiles[i])
    }

    /// Tile kind at `coord`, or `Unassigned` when off the grid.
    pub fn tile_kind(&self, coord: TileCoord) -> TileKind {
        self.tile(coord).map_or(TileKind::Unassigned, |t| t.kind)
    }

    pub fn is_traversable(&self, coord: TileCoord) -> bool {
        self.tile_kind(coord).is_traversable()
    }

    /// All tiles in row-major order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Tiles of one row, left to right. Empty when out of range.
    pub fn row(&self, row: i32) -> &[Tile] {
        if row < 0 || row >= self.rows {
            return &[];
        }
        let from = (row * self.cols) as usize;
        &self.tiles[from..from + self.cols as usize]
    }

    /// Centre of a tile in world units. Works for off-grid coordinates too.
    pub fn tile_center(&self, coord: TileCoord) -> Vec2 {
        Vec2::new(
            (coord.col as f32 + 0.5) * self.tile_size,
            (coord.row as f32 + 0.5) * self.tile_size,
        )
    }

    /// Tile containing a world position (floor division, so positions
    /// left of or above the map map to negative coordinates).
    pub fn world_to_tile(&self, pos: Vec2) -> TileCoord {
        TileCoord::new(
            (pos.x / self.tile_size).floor() as i32,
            (pos.y / self.tile_size).floor() as i32,
        )
    }

    // --- Tower slots ---

    pub fn tower_at(&self, coord: TileCoord) -> Option<TowerId> {
        self.tile(coord).and_then(|t| t.tower)
    }

    /// Whether a tower may be placed at `coord` right now.
    pub fn can_build(&self, coord: TileCoord) -> bool {
        self.tile(coord)
            .is_some_and(|t| t.kind == TileKind::Buildable && t.tower.is_none())
    }

    /// Claim a buildable, empty tile for `tower`. Returns false (and
    /// leaves the grid unchanged) when the tile is not eligible.
    pub fn place_tower(&mut self, coord: TileCoord, tower: TowerId) -> bool {
        if !self.can_build(coord) {
            return false;
        }
        match self.index(coord) {
            Some(i) => {
                self.tiles[i].tower = Some(tower);
                true
            }
            None => false,
        }
    }

    /// Free the tile held by `tower`, if any.
    pub fn clear_tower(&mut self, tower: TowerId) {
        for tile in self.tiles.iter_mut().filter(|t| t.tower == Some(tower)) {
            tile.tower = None;
        }
    }

    /// Free every tower slot.
    pub fn clear_towers(&mut self) {
        for tile in &mut self.tiles {
            tile.tower = None;
        }
    }
}
