pub mod error;
pub mod parser;
pub mod rope;

use std::collections::HashSet;
use std::path::Path;

use tracing::debug;

pub use error::{Error, ParseMoveError};
pub use rope::{close_points, Direction, Move, Point, Rope, Simulation};

/// Reads and parses a move list. The file is closed before parsing starts.
pub fn read_moves<P>(path: P) -> Result<Vec<Move>, Error>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let input = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_owned(),
        source,
    })?;

    let moves = parser::move_list(&input)?;
    debug!(path = %path.display(), moves = moves.len(), "parsed move list");

    Ok(moves)
}

/// Number of distinct positions the tail of a `knots`-long rope occupies,
/// counting the origin it starts on.
pub fn tail_positions_visited(moves: &[Move], knots: usize) -> usize {
    let rope = Rope::new(knots);
    let mut visited: HashSet<Point> = HashSet::default();
    visited.insert(rope.tail());

    let mut steps = 0usize;
    for rope in Simulation::new(rope, moves.iter().copied()) {
        visited.insert(rope.tail());
        steps += 1;
    }

    debug!(knots, steps, visited = visited.len(), "simulation finished");
    visited.len()
}

pub fn part_one(moves: &[Move]) -> usize {
    tail_positions_visited(moves, 2)
}

pub fn part_two(moves: &[Move]) -> usize {
    tail_positions_visited(moves, 10)
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct Answers {
    pub part_one: usize,
    pub part_two: usize,
}

/// Answers the caller expects, if any. Unset parts aren't checked.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct Expected {
    pub part_one: Option<usize>,
    pub part_two: Option<usize>,
}

impl Answers {
    pub fn verify(&self, expected: &Expected) -> Result<(), Error> {
        let checks = [
            ("part one", expected.part_one, self.part_one),
            ("part two", expected.part_two, self.part_two),
        ];

        for (part, expected, actual) in checks {
            match expected {
                Some(expected) if expected != actual => {
                    return Err(Error::Mismatch {
                        part,
                        expected,
                        actual,
                    })
                }
                _ => {}
            }
        }

        Ok(())
    }
}

pub fn solve(moves: &[Move]) -> Answers {
    Answers {
        part_one: part_one(moves),
        part_two: part_two(moves),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    use tempfile::NamedTempFile;

    const EXAMPLE: &str = "\
        R 4\n\
        U 4\n\
        L 3\n\
        D 1\n\
        R 4\n\
        D 1\n\
        L 5\n\
        R 2\n\
    ";

    const LARGER_EXAMPLE: &str = "\
        R 5\n\
        U 8\n\
        L 8\n\
        D 3\n\
        R 17\n\
        D 10\n\
        L 25\n\
        U 20\n\
    ";

    fn input_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_example() {
        let moves = parser::move_list(EXAMPLE).unwrap();

        assert_eq!(
            solve(&moves),
            Answers {
                part_one: 13,
                part_two: 1
            }
        );
    }

    #[test]
    fn test_larger_example() {
        let moves = parser::move_list(LARGER_EXAMPLE).unwrap();

        assert_eq!(part_two(&moves), 36);
    }

    #[test]
    fn test_right_then_up() {
        let moves = parser::move_list("R 4\nU 4\n").unwrap();

        assert_eq!(tail_positions_visited(&moves, 2), 7);
    }

    #[test]
    fn test_long_rope_short_run() {
        let moves = parser::move_list("R 5\n").unwrap();

        assert_eq!(tail_positions_visited(&moves, 10), 1);
    }

    #[test]
    fn test_no_moves() {
        assert_eq!(solve(&[]), Answers { part_one: 1, part_two: 1 });
    }

    #[test]
    fn test_verify() {
        let answers = Answers {
            part_one: 13,
            part_two: 1,
        };

        assert!(answers.verify(&Expected::default()).is_ok());
        assert!(answers
            .verify(&Expected {
                part_one: Some(13),
                part_two: Some(1)
            })
            .is_ok());

        match answers.verify(&Expected {
            part_one: None,
            part_two: Some(2),
        }) {
            Err(Error::Mismatch {
                part,
                expected,
                actual,
            }) => {
                assert_eq!(part, "part two");
                assert_eq!(expected, 2);
                assert_eq!(actual, 1);
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn test_read_moves() {
        let file = input_file(EXAMPLE);
        let moves = read_moves(file.path()).unwrap();

        assert_eq!(moves.len(), 8);
        assert_eq!(part_one(&moves), 13);
    }

    #[test]
    fn test_read_moves_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        match read_moves(&path) {
            Err(Error::Io { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn test_read_moves_bad_line() {
        let file = input_file("R 4\nQ 2\nU 1\n");

        match read_moves(file.path()) {
            Err(Error::Parse { line, source }) => {
                assert_eq!(line, 2);
                assert_eq!(source, ParseMoveError::Direction("Q".into()));
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    // Regression check against the author's personal puzzle input, which isn't
    // committed. Run with DAY09_INPUT=path/to/input cargo test -- --ignored
    #[test]
    #[ignore = "needs the puzzle input in DAY09_INPUT"]
    fn test_puzzle_input() {
        let path = std::env::var("DAY09_INPUT").unwrap();
        let moves = read_moves(path).unwrap();

        assert_eq!(
            solve(&moves),
            Answers {
                part_one: 6464,
                part_two: 2604
            }
        );
    }
}
