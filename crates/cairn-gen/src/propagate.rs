//! The arc-consistency propagation engine.
//!
//! Assignments narrow a cell's domain; narrowing a domain can strip
//! support from candidates in adjacent cells, so pruning ripples
//! outward until no further removal is possible. Both entry points
//! compute the same fixpoint — [`propagate_from`] incrementally from a
//! set of changed coordinates, [`propagate_all`] by whole-grid passes
//! after bulk placements that touch many cells at once.
//!
//! Termination is structural: domains only ever shrink and the catalog
//! is finite, so every run is a strictly decreasing fixpoint
//! computation. A domain that shrinks to empty is a contradiction and
//! aborts the run with the offending coordinate.

use std::collections::VecDeque;

use cairn_grid::{Cell, Grid, TerrainSet};
use cairn_hex::Hex;

use crate::error::GenError;

/// The candidates in `domain` that tolerate a neighbour whose own
/// domain is `against`.
fn supported(grid: &Grid, domain: TerrainSet, against: TerrainSet) -> TerrainSet {
    let catalog = grid.catalog();
    domain
        .iter()
        .filter(|&candidate| catalog.is_compatible(candidate, against))
        .collect()
}

/// Re-narrow `target`'s domain against `source`'s current domain.
///
/// Determined cells are commitments and are never re-narrowed; the
/// check runs along this single directed arc only, with the engine's
/// iteration responsible for covering the reverse arc. Returns whether
/// the domain shrank, or a contradiction if it emptied.
fn narrow_against(grid: &mut Grid, target: Hex, source: Hex) -> Result<bool, GenError> {
    let Some(source_domain) = grid.cell(source).map(Cell::candidates) else {
        return Ok(false);
    };
    let Some(target_cell) = grid.cell(target) else {
        return Ok(false);
    };
    if target_cell.is_determined() {
        return Ok(false);
    }
    let keep = supported(grid, target_cell.candidates(), source_domain);
    let changed = match grid.cell_mut(target) {
        Some(cell) => cell.narrow(keep),
        None => false,
    };
    if keep.is_empty() {
        return Err(GenError::Contradiction { at: target });
    }
    Ok(changed)
}

/// Propagate from the given just-changed coordinates to a fixpoint.
///
/// Worklist algorithm: pop a coordinate, re-narrow each grid-present
/// neighbour against it, and re-queue any neighbour whose domain
/// shrank (its own neighbours now need re-checking).
pub fn propagate_from(grid: &mut Grid, seeds: &[Hex]) -> Result<(), GenError> {
    let mut worklist: VecDeque<Hex> = seeds.iter().copied().collect();
    while let Some(current) = worklist.pop_front() {
        for neighbour in grid.neighbours(current) {
            if narrow_against(grid, neighbour, current)? {
                worklist.push_back(neighbour);
            }
        }
    }
    Ok(())
}

/// Re-narrow every ordered (cell, neighbour) pair repeatedly until a
/// full pass changes nothing.
///
/// Used after bulk placements (blobs, walls) rather than seeding the
/// worklist with every touched coordinate.
pub fn propagate_all(grid: &mut Grid) -> Result<(), GenError> {
    let positions: Vec<Hex> = grid.positions().collect();
    loop {
        let mut changed = false;
        for &current in &positions {
            for neighbour in grid.neighbours(current) {
                changed |= narrow_against(grid, current, neighbour)?;
            }
        }
        if !changed {
            return Ok(());
        }
    }
}
