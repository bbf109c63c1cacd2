//! SpatialMap trait compliance test helpers.
//!
//! These functions verify that a SpatialMap implementation satisfies the
//! invariants required by the trait contract. Reused across both strategy
//! test modules. Every helper visits all cells, so keep maps small.

use crate::boundary;
use crate::error::MapError;
use crate::map::SpatialMap;
use obstruct_core::{Cell, Direction};

/// Step from `origin` in `dir` until leaving the grid or hitting an
/// obstructed cell, and return the line index reached.
fn walk(map: &dyn SpatialMap, origin: Cell, dir: Direction) -> i32 {
    let (dx, dy) = dir.step();
    let mut cell = origin;
    loop {
        cell = Cell::new(cell.x + dx, cell.y + dy);
        if !cell.in_bounds(map.size()) || map.cell_obstructed(cell.x, cell.y) {
            return if dir.is_vertical() { cell.y } else { cell.x };
        }
    }
}

fn grid_cells(size: u32) -> impl Iterator<Item = Cell> {
    let n = size as i32;
    (0..n).flat_map(move |y| (0..n).map(move |x| Cell::new(x, y)))
}

/// Assert `cell_obstructed(x, y)` iff some stored rectangle contains the
/// cell, and that `obstacles_covering` agrees.
pub fn assert_containment(map: &dyn SpatialMap) {
    for cell in grid_cells(map.size()) {
        let expected = map.obstacles().iter().any(|r| r.contains(cell));
        assert_eq!(
            map.cell_obstructed(cell.x, cell.y),
            expected,
            "cell_obstructed{cell} disagrees with obstacle list"
        );
        assert_eq!(
            !map.obstacles_covering(cell.x, cell.y).is_empty(),
            expected,
            "obstacles_covering{cell} disagrees with obstacle list"
        );
    }
}

/// Assert that `nearest_lines` matches a cell-by-cell walk from every cell,
/// obstructed origins included.
pub fn assert_nearest_lines_match_walk(map: &dyn SpatialMap) {
    for origin in grid_cells(map.size()) {
        let lines = map.nearest_lines(origin);
        for (dir, &line) in lines.iter() {
            let walked = walk(map, origin, dir);
            assert_eq!(
                line, walked,
                "nearest_lines({origin}).{dir} = {line}, walk reached {walked}"
            );
        }
    }
}

/// Assert that every reported line lies strictly on the correct side of
/// the origin and no further than one past the map edge.
pub fn assert_nearest_lines_bounded(map: &dyn SpatialMap) {
    let n = map.size() as i32;
    for origin in grid_cells(map.size()) {
        let lines = map.nearest_lines(origin);
        assert!((-1..origin.y).contains(&lines.up), "up out of range at {origin}");
        assert!((-1..origin.x).contains(&lines.left), "left out of range at {origin}");
        assert!(
            (origin.y + 1..=n).contains(&lines.down),
            "down out of range at {origin}"
        );
        assert!(
            (origin.x + 1..=n).contains(&lines.right),
            "right out of range at {origin}"
        );
    }
}

/// Assert the placement state machine: failures never change the robot,
/// successes move it, and queries after a success are idempotent and
/// consistent with `nearest_lines`.
pub fn assert_placement_contract(map: &mut dyn SpatialMap) {
    let n = map.size() as i32;
    if map.robot().is_none() {
        assert_eq!(
            map.nearest_obstructions(),
            Err(MapError::RobotNotPositioned),
            "query before placement must fail"
        );
    }
    for y in -1..=n {
        for x in -1..=n {
            let before = map.robot();
            let cell = Cell::new(x, y);
            let result = map.position_robot(x, y);
            if !cell.in_bounds(map.size()) {
                assert!(
                    matches!(result, Err(MapError::RobotOutOfBounds { .. })),
                    "placement at {cell} should be out of bounds, got {result:?}"
                );
                assert_eq!(map.robot(), before, "failed placement moved the robot");
            } else if map.cell_obstructed(x, y) {
                assert_eq!(result, Err(MapError::Obstructed { cell }));
                assert_eq!(map.robot(), before, "failed placement moved the robot");
            } else {
                assert_eq!(result, Ok(()), "placement at free cell {cell} failed");
                assert_eq!(map.robot(), Some(cell));
                let first = map.nearest_obstructions().expect("robot is positioned");
                let second = map.nearest_obstructions().expect("robot is positioned");
                assert_eq!(first, second, "nearest_obstructions is not idempotent");
                let lines = map.nearest_lines(cell);
                assert_eq!(first, boundary::boundary_points(cell, lines));
                assert_eq!(
                    map.nearest_obstructed_cells(),
                    Ok(boundary::obstructed_cells(cell, lines))
                );
            }
        }
    }
}

/// Run all compliance checks on a map.
pub fn run_full_compliance(map: &mut dyn SpatialMap) {
    assert_containment(map);
    assert_nearest_lines_match_walk(map);
    assert_nearest_lines_bounded(map);
    assert_placement_contract(map);
}
