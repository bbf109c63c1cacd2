//! Cardinal directions and per-direction results.

use crate::cell::Point;
use std::fmt;

/// One of the four cardinal directions on the grid.
///
/// `Up` decreases the row index, `Left` decreases the column index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards column 0.
    Left,
    /// Towards row `n - 1`.
    Down,
    /// Towards column `n - 1`.
    Right,
}

impl Direction {
    /// All directions in reporting order.
    pub const ALL: [Self; 4] = [Self::Up, Self::Left, Self::Down, Self::Right];

    /// Unit step `(dx, dy)` for this direction.
    pub fn step(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Left => (-1, 0),
            Self::Down => (0, 1),
            Self::Right => (1, 0),
        }
    }

    /// Returns `true` for `Up` and `Down`.
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "up",
            Self::Left => "left",
            Self::Down => "down",
            Self::Right => "right",
        };
        f.write_str(name)
    }
}

/// One value per cardinal direction.
///
/// Used for every stage of a nearest-obstruction query: raw line indices
/// (`Nearest<i32>`), obstructed cells (`Nearest<Cell>`) and boundary points
/// (`Nearest<Point>`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Nearest<T> {
    /// Value looking towards row 0.
    pub up: T,
    /// Value looking towards column 0.
    pub left: T,
    /// Value looking towards the last row.
    pub down: T,
    /// Value looking towards the last column.
    pub right: T,
}

impl<T> Nearest<T> {
    /// The value for `dir`.
    pub fn get(&self, dir: Direction) -> &T {
        match dir {
            Direction::Up => &self.up,
            Direction::Left => &self.left,
            Direction::Down => &self.down,
            Direction::Right => &self.right,
        }
    }

    /// Apply `f` to every value, passing the direction along.
    pub fn map<U>(self, mut f: impl FnMut(Direction, T) -> U) -> Nearest<U> {
        Nearest {
            up: f(Direction::Up, self.up),
            left: f(Direction::Left, self.left),
            down: f(Direction::Down, self.down),
            right: f(Direction::Right, self.right),
        }
    }

    /// Iterate over `(direction, value)` pairs in reporting order.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, &T)> + '_ {
        Direction::ALL.into_iter().map(move |dir| (dir, self.get(dir)))
    }
}

impl Nearest<Point> {
    /// Every point multiplied by `factor`, e.g. a physical cell size.
    pub fn scaled(self, factor: f64) -> Self {
        self.map(|_, p| p.scaled(factor))
    }
}
