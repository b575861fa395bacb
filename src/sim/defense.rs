//! Defense line: bunker layout and cell damage
//!
//! A bullet that enters a bunker's box picks the first intact cell in its
//! column (scanning from the side it came from) as the epicenter and blasts a
//! fixed diamond around it. A column with no intact cell lets the bullet pass.

use glam::Vec2;

use super::state::{Bunker, BunkerCells, CellState};
use crate::consts::{
    BUNKER_COUNT, BUNKER_HEIGHT, BUNKER_WIDTH, DEFENSE_INITIAL_TOP, GAME_AREA_WIDTH,
};

/// Cells destroyed around an epicenter, as (row, column) offsets
const BLAST: [(isize, isize); 13] = [
    (0, 0),
    (0, -1),
    (0, 1),
    (0, -2),
    (0, 2),
    (-1, 0),
    (1, 0),
    (-2, 0),
    (2, 0),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Rows of the archway cut into the bunker's base
const ARCH_TOP: usize = 14;

/// Which side a bullet enters a bunker from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Approach {
    /// Cannon bullet rising into the base
    FromBelow,
    /// Invader bullet falling onto the roof
    FromAbove,
}

/// Evenly spaced bunkers along the defense line
pub fn init() -> [Bunker; BUNKER_COUNT] {
    let gap = (GAME_AREA_WIDTH - (BUNKER_COUNT * BUNKER_WIDTH) as f32) / (BUNKER_COUNT + 1) as f32;

    std::array::from_fn(|i| Bunker {
        position: Vec2::new(
            gap + i as f32 * (BUNKER_WIDTH as f32 + gap),
            DEFENSE_INITIAL_TOP,
        ),
        cells: silhouette(),
    })
}

/// Fresh cell grid with the corner bevels and archway marked unused
pub fn silhouette() -> BunkerCells {
    let mut cells = [[CellState::Intact; BUNKER_WIDTH]; BUNKER_HEIGHT];

    for (r, row) in cells.iter_mut().enumerate() {
        for (c, cell) in row.iter_mut().enumerate() {
            if is_cutout(r, c) {
                *cell = CellState::Unused;
            }
        }
    }

    cells
}

fn is_cutout(row: usize, col: usize) -> bool {
    let mirrored = BUNKER_WIDTH - 1 - col;
    let bevel = col + row < 4 || mirrored + row < 4;
    let arch = (row > ARCH_TOP && (6..=13).contains(&col))
        || (row == ARCH_TOP && (7..=12).contains(&col));
    bevel || arch
}

/// Cannon bullet hit from below: scans the column bottom-to-top
pub fn update_by_collision(bunker: &mut Bunker, bullet_x: f32) -> bool {
    hit(bunker, bullet_x, Approach::FromBelow)
}

/// Invader bullet hit from above: scans the column top-to-bottom
pub fn update_by_top_collision(bunker: &mut Bunker, bullet_x: f32) -> bool {
    hit(bunker, bullet_x, Approach::FromAbove)
}

/// Damage the bunker at the bullet's column. Returns true if the bullet is consumed.
pub fn hit(bunker: &mut Bunker, bullet_x: f32, approach: Approach) -> bool {
    let offset = (bullet_x - bunker.position.x).floor();
    if !(0.0..BUNKER_WIDTH as f32).contains(&offset) {
        return false;
    }
    let col = offset as usize;

    let intact = |r: &usize| bunker.cells[*r][col] == CellState::Intact;
    let epicenter = match approach {
        Approach::FromBelow => (0..BUNKER_HEIGHT).rev().find(intact),
        Approach::FromAbove => (0..BUNKER_HEIGHT).find(intact),
    };

    let Some(row) = epicenter else {
        return false;
    };
    let destroyed = blast(&mut bunker.cells, row, col);
    log::debug!(
        "Bunker at x={} hit {:?} at ({}, {}), {} cells destroyed",
        bunker.position.x,
        approach,
        row,
        col,
        destroyed
    );
    true
}

/// Destroy the epicenter and its neighborhood; returns how many cells changed
fn blast(cells: &mut BunkerCells, row: usize, col: usize) -> usize {
    let mut destroyed = 0;

    for (dr, dc) in BLAST {
        let (Some(r), Some(c)) = (row.checked_add_signed(dr), col.checked_add_signed(dc)) else {
            continue;
        };
        let Some(cell) = cells.get_mut(r).and_then(|cells| cells.get_mut(c)) else {
            continue;
        };
        if *cell == CellState::Intact {
            *cell = CellState::Destroyed;
            destroyed += 1;
        }
    }

    destroyed
}
