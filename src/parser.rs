use std::str::FromStr;

use nom::branch::alt;
use nom::bytes::complete::{is_not, tag};
use nom::character::complete::{digit1, space0, space1};
use nom::combinator::{all_consuming, map_res};
use nom::sequence::{delimited, separated_pair};
use nom::{Finish, IResult, Parser};

use crate::error::{Error, ParseMoveError};
use crate::rope::{Direction, Move};

pub fn base10_numeric<N>(input: &str) -> IResult<&str, N>
where
    N: FromStr,
{
    map_res(digit1, |s| N::from_str(s)).parse(input)
}

/// Runs `parser` over `input`, succeeding only if nothing is left over.
pub fn parse_complete<'i, O, P>(parser: P, input: &'i str) -> Option<O>
where
    P: Parser<&'i str, O, nom::error::Error<&'i str>>,
{
    all_consuming(parser)
        .parse(input)
        .finish()
        .ok()
        .map(|(_rest, o)| o)
}

pub fn direction(input: &str) -> IResult<&str, Direction> {
    alt((
        tag("R").map(|_| Direction::Right),
        tag("U").map(|_| Direction::Up),
        tag("D").map(|_| Direction::Down),
        tag("L").map(|_| Direction::Left),
    ))
    .parse(input)
}

fn token(input: &str) -> IResult<&str, &str> {
    is_not(" \t\r\n").parse(input)
}

// Split into the two raw tokens first so a failure can say which half was bad.
fn move_tokens(input: &str) -> IResult<&str, (&str, &str)> {
    all_consuming(delimited(
        space0,
        separated_pair(token, space1, token),
        space0,
    ))
    .parse(input)
}

pub fn a_move(line: &str) -> Result<Move, ParseMoveError> {
    let line = line.trim_end_matches('\r');
    let (_, (raw_direction, raw_count)) = move_tokens(line)
        .finish()
        .map_err(|_| ParseMoveError::Malformed(line.to_owned()))?;

    let direction = parse_complete(direction, raw_direction)
        .ok_or_else(|| ParseMoveError::Direction(raw_direction.to_owned()))?;
    let count = parse_complete(base10_numeric::<u64>, raw_count)
        .ok_or_else(|| ParseMoveError::Count(raw_count.to_owned()))?;

    Ok(Move { direction, count })
}

/// Parses one move per line. Trailing whitespace at the end of the input is
/// ignored; any other line that doesn't parse is an error.
pub fn move_list(input: &str) -> Result<Vec<Move>, Error> {
    input
        .trim_end()
        .lines()
        .enumerate()
        .map(|(i, line)| {
            a_move(line).map_err(|source| Error::Parse { line: i + 1, source })
        })
        .collect()
}
