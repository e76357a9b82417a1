use std::fmt;
use std::str::FromStr;

use im::Vector;
use itertools::Itertools;
use tracing::trace;

use crate::error::ParseMoveError;
use crate::parser;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const fn new(x: i64, y: i64) -> Point {
        Point { x, y }
    }

    pub fn origin() -> Point {
        Point::default()
    }

    pub fn right(self, n: i64) -> Point {
        Point::new(self.x + n, self.y)
    }

    pub fn left(self, n: i64) -> Point {
        Point::new(self.x - n, self.y)
    }

    pub fn up(self, n: i64) -> Point {
        Point::new(self.x, self.y + n)
    }

    pub fn down(self, n: i64) -> Point {
        Point::new(self.x, self.y - n)
    }

    pub fn offset(self, direction: Direction, n: i64) -> Point {
        use Direction::*;

        match direction {
            Right => self.right(n),
            Up => self.up(n),
            Down => self.down(n),
            Left => self.left(n),
        }
    }

    /// True if the points overlap or are adjacent, diagonals included.
    pub fn touches(self, other: Point) -> bool {
        (self.x - other.x).abs() <= 1 && (self.y - other.y).abs() <= 1
    }
}

/// Where `p1` ends up after the knot ahead of it has moved to `p0`.
///
/// A knot that still touches its predecessor stays put. Otherwise it moves one
/// unit toward the predecessor along each axis where they differ, which is a
/// straight step when they share a row or column and a diagonal step when
/// they don't.
pub fn close_points(p0: Point, p1: Point) -> Point {
    if p0.touches(p1) {
        return p1;
    }

    // Only ever one space per axis.
    Point {
        x: p1.x + (p0.x - p1.x).clamp(-1, 1),
        y: p1.y + (p0.y - p1.y).clamp(-1, 1),
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Direction {
    Right,
    Up,
    Down,
    Left,
}

impl fmt::Display for Direction {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.write_str(match self {
            Direction::Right => "R",
            Direction::Up => "U",
            Direction::Down => "D",
            Direction::Left => "L",
        })
    }
}

impl FromStr for Direction {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Direction, ParseMoveError> {
        parser::parse_complete(parser::direction, s)
            .ok_or_else(|| ParseMoveError::Direction(s.to_owned()))
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Move {
    pub direction: Direction,
    pub count: u64,
}

impl fmt::Display for Move {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{} {}", self.direction, self.count)
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Move, ParseMoveError> {
        parser::a_move(s)
    }
}

/// A chain of knots, head first. Ropes are values: moving one produces a new
/// rope that shares storage with the old one where it can.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Rope {
    knots: Vector<Point>,
}

impl Rope {
    /// A rope of `knots` knots, all piled up on the origin.
    pub fn new(knots: usize) -> Rope {
        Rope::from_knots(std::iter::repeat(Point::origin()).take(knots))
    }

    pub fn from_knots<I>(knots: I) -> Rope
    where
        I: IntoIterator<Item = Point>,
    {
        let knots: Vector<Point> = knots.into_iter().collect();
        assert!(knots.len() >= 2, "a rope needs a head and a tail");
        Rope { knots }
    }

    pub fn len(&self) -> usize {
        self.knots.len()
    }

    pub fn head(&self) -> Point {
        self.knots[0]
    }

    pub fn tail(&self) -> Point {
        self.knots[self.knots.len() - 1]
    }

    pub fn knots(&self) -> impl Iterator<Item = Point> + '_ {
        self.knots.iter().copied()
    }

    /// True when every knot touches the one ahead of it.
    pub fn is_settled(&self) -> bool {
        self.knots.iter().tuple_windows().all(|(a, b)| a.touches(*b))
    }

    /// Puts the head at `head` and lets every other knot follow, in order, the
    /// already-moved knot ahead of it.
    pub fn pull(&self, head: Point) -> Rope {
        let mut knots = Vector::new();
        knots.push_back(head);

        let mut prev = head;
        for &knot in self.knots.iter().skip(1) {
            prev = close_points(prev, knot);
            knots.push_back(prev);
        }

        Rope { knots }
    }

    /// Moves the head a single grid unit.
    pub fn step(&self, direction: Direction) -> Rope {
        let next = self.pull(self.head().offset(direction, 1));
        debug_assert!(!self.is_settled() || next.is_settled());
        next
    }
}

/// Replays moves one unit step at a time, yielding the rope after each step.
pub struct Simulation<I>
where
    I: Iterator<Item = Move>,
{
    rope: Rope,
    moves: I,
    pending: Option<Move>,
}

impl<I> Simulation<I>
where
    I: Iterator<Item = Move>,
{
    pub fn new(rope: Rope, moves: I) -> Simulation<I> {
        Simulation {
            rope,
            moves,
            pending: None,
        }
    }

    pub fn rope(&self) -> &Rope {
        &self.rope
    }
}

impl<I> Iterator for Simulation<I>
where
    I: Iterator<Item = Move>,
{
    type Item = Rope;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.pending {
                Some(Move { direction, count }) if count > 0 => {
                    self.pending = Some(Move {
                        direction,
                        count: count - 1,
                    });
                    self.rope = self.rope.step(direction);
                    return Some(self.rope.clone());
                }
                _ => {
                    let next = self.moves.next()?;
                    trace!(%next, head = ?self.rope.head(), "replaying move");
                    self.pending = Some(next);
                }
            }
        }
    }
}
