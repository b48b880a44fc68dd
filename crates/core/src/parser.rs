//! Edge-list parser for the friendship file format
//!
//! The format is a stream of whitespace separated integers: an edge count
//! `E` followed by `E` pairs of person IDs. Line breaks carry no meaning,
//! they are only tracked so errors can point at the offending line.
//!
//! ```text
//! 3
//! 1 2
//! 2 3
//! 4 5
//! ```

use tracing::debug;

use crate::error::MalformedData;
use crate::graph::PersonId;

/// One undirected friendship as read from the source.
pub type Friendship = (PersonId, PersonId);

/// Upper bound on up-front allocation, so a huge declared count in a
/// short file does not reserve memory it will never use.
const PREALLOC_LIMIT: usize = 1 << 16;

/// Parse an edge list into its friendship pairs, in file order.
///
/// Tokens following the last declared pair are ignored.
///
/// # Errors
///
/// Returns [`MalformedData`] when the edge count is missing, a token is not
/// a non-negative integer, or fewer than the declared number of pairs are
/// present.
pub fn parse_edge_list(text: &str) -> Result<Vec<Friendship>, MalformedData> {
    let mut tokens = text
        .lines()
        .enumerate()
        .flat_map(|(idx, line)| line.split_whitespace().map(move |token| (idx + 1, token)));

    let (line, token) = tokens.next().ok_or(MalformedData::MissingEdgeCount)?;
    let declared: usize = parse_integer(token, line)?;

    let mut pairs = Vec::with_capacity(declared.min(PREALLOC_LIMIT));
    while pairs.len() < declared {
        let a = next_person(&mut tokens, declared, pairs.len())?;
        let b = next_person(&mut tokens, declared, pairs.len())?;
        pairs.push((a, b));
    }

    let trailing = tokens.count();
    if trailing > 0 {
        debug!(trailing, "ignoring tokens after the last friendship pair");
    }

    Ok(pairs)
}

fn next_person<'a>(
    tokens: &mut impl Iterator<Item = (usize, &'a str)>,
    declared: usize,
    read: usize,
) -> Result<PersonId, MalformedData> {
    let (line, token) = tokens
        .next()
        .ok_or(MalformedData::Truncated { declared, read })?;
    parse_integer(token, line)
}

fn parse_integer<T: std::str::FromStr>(token: &str, line: usize) -> Result<T, MalformedData> {
    token.parse().map_err(|_| MalformedData::InvalidInteger {
        token: token.to_string(),
        line,
    })
}
