//! Batch splitting for hand-written SQL Server scripts.
//!
//! Two lexical passes, no SQL parsing:
//!
//! 1. Lines consisting solely of `GO` (any case, surrounding whitespace
//!    allowed) separate batches and are dropped.
//! 2. Inside each resulting piece, the first `CREATE PROCEDURE` /
//!    `ALTER PROCEDURE` clause that does not open the piece starts a new
//!    batch, since the server requires a procedure definition to be the
//!    first statement of its batch.
//!
//! Separators or procedure clauses inside string literals and comments are
//! not recognised as such and may produce an extra batch boundary.

use std::sync::LazyLock;

use regex::Regex;

/// First procedure-definition clause in a piece.
static PROCEDURE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:CREATE|ALTER)\s+PROCEDURE\b").expect("valid regex"));

/// Split `script` into trimmed, non-empty batches in source order.
pub fn split_batches(script: &str) -> Vec<String> {
    let mut batches = Vec::new();

    for piece in separator_pieces(script) {
        match PROCEDURE_RE.find(piece) {
            Some(m) if m.start() > 0 => {
                let before = piece[..m.start()].trim();
                if !before.is_empty() {
                    batches.push(before.to_string());
                }
                batches.push(piece[m.start()..].trim().to_string());
            }
            _ => batches.push(piece.to_string()),
        }
    }

    batches
}

/// Whether `line` is a batch separator.
pub fn is_separator(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case("GO")
}

/// Pieces of `script` between separator lines, trimmed, empties dropped.
fn separator_pieces(script: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut offset = 0;

    for line in script.split_inclusive('\n') {
        if is_separator(line) {
            pieces.push(&script[start..offset]);
            start = offset + line.len();
        }
        offset += line.len();
    }
    pieces.push(&script[start..]);

    pieces
        .into_iter()
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .collect()
}
