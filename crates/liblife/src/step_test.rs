use indoc::indoc;
use pretty_assertions::assert_eq;

use crate::{grid::CellGrid, Result};

/// Build a grid with live cells at the given (x, y) coordinates.
fn with_cells(rows: usize, cols: usize, cells: &[(isize, isize)]) -> Result<CellGrid> {
    let mut grid = CellGrid::new(rows, cols)?;
    for &(x, y) in cells {
        grid.fill(x, y);
    }
    Ok(grid)
}

/// Move every live cell by (dx, dy), wrapping.
fn shifted(grid: &CellGrid, dx: isize, dy: isize) -> Result<CellGrid> {
    let mut out = CellGrid::new(grid.rows(), grid.cols())?;
    for (x, y) in grid.alive_cells() {
        out.fill(x as isize + dx, y as isize + dy);
    }
    Ok(out)
}

#[test]
fn test_empty_grid_stays_empty() -> Result<()> {
    for (rows, cols) in [(1, 1), (2, 3), (10, 10), (17, 4)] {
        let grid = CellGrid::new(rows, cols)?;
        assert!(grid.step().is_dead(), "{rows}x{cols}");
    }
    Ok(())
}

#[test]
fn test_block_is_still() -> Result<()> {
    let grid = CellGrid::from_pattern(
        6,
        6,
        indoc! {"
            ______
            ______
            __XX__
            __XX__
        "},
    )?;
    for y in 2..4 {
        for x in 2..4 {
            assert_eq!(grid.alive_neighbours(x, y), 3);
        }
    }
    assert_eq!(grid.step(), grid);
    assert_eq!(grid.step().step(), grid);
    Ok(())
}

#[test]
fn test_blinker_oscillates() -> Result<()> {
    let horizontal = CellGrid::from_pattern(
        5,
        5,
        indoc! {"
            _____
            _____
            _XXX_
        "},
    )?;
    let vertical = CellGrid::from_pattern(
        5,
        5,
        indoc! {"
            _____
            __X__
            __X__
            __X__
        "},
    )?;
    let next = horizontal.step();
    assert_eq!(next, vertical);
    assert_eq!(next.step(), horizontal);
    Ok(())
}

#[test]
fn test_blinker_at_edge() -> Result<()> {
    // Along the top edge the vertical phase wraps to the bottom row.
    let horizontal = with_cells(5, 5, &[(1, 0), (2, 0), (3, 0)])?;
    let vertical = with_cells(5, 5, &[(2, 4), (2, 0), (2, 1)])?;
    assert_eq!(horizontal.step(), vertical);
    assert_eq!(vertical.step(), horizontal);

    // Straddling the left and right edges.
    let horizontal = with_cells(5, 5, &[(4, 2), (0, 2), (1, 2)])?;
    let vertical = with_cells(5, 5, &[(0, 1), (0, 2), (0, 3)])?;
    assert_eq!(horizontal.step(), vertical);
    assert_eq!(vertical.step(), horizontal);
    Ok(())
}

#[test]
fn test_isolated_cell_dies() -> Result<()> {
    let grid = with_cells(5, 5, &[(2, 2)])?;
    assert_eq!(grid.alive_neighbours(2, 2), 0);
    assert!(grid.step().is_dead());
    Ok(())
}

#[test]
fn test_overcrowded_cell_dies() -> Result<()> {
    let grid = with_cells(5, 5, &[(2, 2), (1, 1), (3, 1), (1, 3), (3, 3)])?;
    assert_eq!(grid.alive_neighbours(2, 2), 4);
    assert!(!grid.step().get(2, 2));
    Ok(())
}

#[test]
fn test_reproduction() -> Result<()> {
    let three = with_cells(6, 6, &[(1, 1), (2, 1), (1, 2)])?;
    assert_eq!(three.alive_neighbours(2, 2), 3);
    assert!(three.step().get(2, 2));

    let two = with_cells(6, 6, &[(1, 1), (2, 1)])?;
    assert_eq!(two.alive_neighbours(1, 2), 2);
    assert!(!two.step().get(1, 2));

    let four = with_cells(6, 6, &[(1, 1), (3, 1), (1, 3), (3, 3)])?;
    assert_eq!(four.alive_neighbours(2, 2), 4);
    assert!(!four.step().get(2, 2));
    Ok(())
}

#[test]
fn test_step_does_not_mutate_input() -> Result<()> {
    let grid = with_cells(5, 5, &[(1, 2), (2, 2), (3, 2)])?;
    let before = grid.clone();
    let next = grid.step();
    assert_eq!(grid, before);
    assert_ne!(next, grid);
    Ok(())
}

#[test]
fn test_step_into_overwrites_buffer() -> Result<()> {
    let grid = with_cells(5, 5, &[(1, 2), (2, 2), (3, 2)])?;
    let mut buffer = with_cells(5, 5, &[(0, 0), (4, 4), (0, 4)])?;
    grid.step_into(&mut buffer)?;
    assert_eq!(buffer, grid.step());
    Ok(())
}

#[test]
fn test_glider_travels_around_torus() -> Result<()> {
    let glider = CellGrid::from_pattern(
        8,
        8,
        indoc! {"
            _X______
            __X_____
            XXX_____
        "},
    )?;
    let mut grid = glider.clone();
    for _ in 0..4 {
        grid = grid.step();
    }
    assert_eq!(grid, shifted(&glider, 1, 1)?);
    assert_eq!(grid.population(), 5);

    for _ in 4..32 {
        grid = grid.step();
    }
    assert_eq!(grid, glider);
    Ok(())
}
