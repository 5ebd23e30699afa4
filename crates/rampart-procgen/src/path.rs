//! Random left-to-right path carving with rejection sampling.

use log::debug;
use rand::Rng;
use thiserror::Error;

use rampart_core::enums::TileKind;
use rampart_core::types::TileCoord;
use rampart_grid::Grid;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("grid {cols}x{rows} is too small (need at least 3 columns and 3 rows)")]
    TooSmall { cols: i32, rows: i32 },
}

/// Vertical bias of one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bias {
    Up,
    Stay,
    Down,
}

impl Bias {
    fn delta(self) -> i32 {
        match self {
            Bias::Up => -1,
            Bias::Stay => 0,
            Bias::Down => 1,
        }
    }

    /// Roll a bias in 0..=9; never the opposite of the previous column's.
    fn roll<R: Rng + ?Sized>(rng: &mut R, previous: Bias) -> Self {
        let roll = rng.gen_range(0..=9);
        if roll < 5 && previous != Bias::Down {
            Bias::Up
        } else if roll > 4 && previous != Bias::Up {
            Bias::Down
        } else {
            Bias::Stay
        }
    }
}

/// Generate a level of `cols` x `rows` tiles.
///
/// Rows 0 and `rows - 1` never carry path; every other row is guaranteed
/// at least one path tile. Layouts that miss a row are thrown away and
/// carved again from scratch.
pub fn generate<R: Rng + ?Sized>(
    cols: i32,
    rows: i32,
    tile_size: f32,
    rng: &mut R,
) -> Result<Grid, GenerateError> {
    // With two columns only the start row can ever hold path.
    if cols < 3 || rows < 3 {
        return Err(GenerateError::TooSmall { cols, rows });
    }

    let mut attempts = 1u32;
    loop {
        if let Some(grid) = carve(cols, rows, tile_size, rng) {
            debug!("generated {cols}x{rows} level after {attempts} attempt(s)");
            return Ok(grid);
        }
        attempts += 1;
    }
}

/// One carving attempt. `None` when some interior row has no path tile.
fn carve<R: Rng + ?Sized>(cols: i32, rows: i32, tile_size: f32, rng: &mut R) -> Option<Grid> {
    let width = cols as usize;
    let mut kinds = vec![TileKind::Unassigned; width * rows as usize];
    let index = |col: i32, row: i32| row as usize * width + col as usize;

    let mut row = rng.gen_range(1..=rows - 2);
    let start = TileCoord::new(0, row);
    kinds[index(0, row)] = TileKind::Start;

    let mut previous = Bias::Stay;
    for col in 1..cols {
        let from = row;
        // The last column still draws its rolls.
        let bias = Bias::roll(rng, previous);
        let steps = rng.gen_range(1..=rows);
        let bias = if col == cols - 1 { Bias::Stay } else { bias };
        previous = bias;

        for _ in 0..steps {
            row = (row + bias.delta()).clamp(1, rows - 2);
        }

        let (lo, hi) = (from.min(row), from.max(row));
        for r in lo..=hi {
            kinds[index(col, r)] = TileKind::Path;
        }
    }

    let end = TileCoord::new(cols - 1, row);
    kinds[index(end.col, end.row)] = TileKind::End;

    let every_row_has_path = kinds
        .chunks(width)
        .skip(1)
        .take(rows as usize - 2)
        .all(|tiles| tiles.iter().any(|k| k.is_traversable()));
    if !every_row_has_path {
        debug!("rejected {cols}x{rows} layout with an empty row");
        return None;
    }

    for kind in kinds.iter_mut().filter(|k| **k == TileKind::Unassigned) {
        *kind = TileKind::Buildable;
    }
    Some(Grid::from_kinds(cols, rows, tile_size, &kinds, start, end))
}
