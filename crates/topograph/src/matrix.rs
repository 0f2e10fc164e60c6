//! Adjacency-matrix wire format.
//!
//! ```text
//! <N>
//! <N chars of '0'/'1'>\n     (row 0)
//! ...
//! <N chars of '0'/'1'>\n     (row N-1)
//! ```
//!
//! A `'1'` at row `i`, column `j` denotes the edge `(i, j)`.

use crate::error::{Error, Result};
use crate::graph::{Graph, VertexId};
use crate::util;

/// Parses an adjacency-matrix description into a [`Graph`].
///
/// The header is read permissively (leading digits after optional whitespace and sign;
/// anything else counts as 0). Rows are strict: each must be exactly `N` matrix characters
/// plus one newline, with no content left over after row `N - 1`. Any violation reports the
/// constraint it broke and discards the partially built graph.
pub fn parse(input: &str) -> Result<Graph> {
    let mut lines = input.split_inclusive('\n');
    let header = lines.next().ok_or(Error::NotEnoughRows)?;
    let n = leading_int(header);

    let mut g = Graph::new(n);
    for i in 0..n {
        let row = lines
            .next()
            .filter(|row| row.len() > 1)
            .ok_or(Error::NotEnoughRows)?;
        if row.len() != n + 1 {
            return Err(Error::ColumnMismatch);
        }
        for (j, byte) in row.as_bytes()[..n].iter().enumerate() {
            if *byte == b'1' {
                g.add_edge(i, j);
            }
        }
    }
    if lines.next().is_some() {
        return Err(Error::TooManyRows);
    }
    Ok(g)
}

/// Serializes `g` back to the matrix format.
///
/// The format cannot express parallel edges; any multiplicity collapses to a single `'1'`.
pub fn to_matrix(g: &Graph) -> String {
    let n = g.vertex_count();
    let mut out = String::with_capacity(n * (n + 1) + 8);
    out.push_str(&n.to_string());
    out.push('\n');
    for i in 0..n {
        let mut targets: Vec<VertexId> = g.out_neighbors(i).collect();
        targets.sort_unstable();
        for j in 0..n {
            let bit = if util::binary_search(&targets, j).is_some() {
                '1'
            } else {
                '0'
            };
            out.push(bit);
        }
        out.push('\n');
    }
    out
}

// atoi-style header parse: leading whitespace, optional sign, leading digits. Non-numeric
// content (or a negative count) yields 0.
fn leading_int(s: &str) -> usize {
    let t = s.trim_start();
    let (negative, t) = match t.as_bytes().first().copied() {
        Some(b'-') => (true, &t[1..]),
        Some(b'+') => (false, &t[1..]),
        _ => (false, t),
    };
    let digits = t.len() - t.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if negative || digits == 0 {
        return 0;
    }
    t[..digits].parse().unwrap_or(0)
}
