//! # Move-String Notation
//!
//! Converts between the compact textual move encoding and board addresses.
//!
//! ## Board Layout
//!
//! The board is a 15×15 grid. Columns are lettered `a`..`o` left to right
//! (column index 0–14), rows are numbered `1`..`15`. A cell also has a
//! single integer form in `[1, 225]`:
//!
//! - `value = col * 15 + row`
//!
//! so `a1 = 1`, `a15 = 15`, `b1 = 16`, `o15 = 225`. The mapping between
//! `(col, row)` and `value` is a bijection over the board.
//!
//! ## Grammar
//!
//! A move string is a left-to-right concatenation of tokens, one per stone,
//! with nothing between them:
//!
//! - **token** := `<letter><digit-run>`
//! - **letter** := `'a'..='o'`
//! - **digit-run** := the maximal run of consecutive ASCII digits; must be
//!   non-empty and must not start with `'0'`
//!
//! The digit run is parsed as a whole and then range-checked: `"b1111"` is
//! one token with row 1111 (rejected), never `"b11"` followed by `"11"`.
//! Valid rows are `1..=15`.
//!
//! ## Examples
//!
//! ```
//! use renju_canonical::notation::decode_all;
//!
//! let seq = decode_all("a1b15c7").unwrap();
//! assert_eq!(seq.len(), 3);
//! assert_eq!(seq[1].value(), 30); // b15: col 1, row 15
//! ```

use thiserror::Error;

/// Side length of the board.
pub const BOARD_SIZE: u8 = 15;

/// Number of cells on the board.
pub const CELL_COUNT: u8 = BOARD_SIZE * BOARD_SIZE;

/// Why a move string failed to parse.
///
/// All causes are detected synchronously while scanning the string; offsets
/// are byte offsets into the original input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The input was empty or contained only whitespace.
    #[error("move string is empty or blank")]
    EmptyInput,
    /// A token started with a character outside `'a'..='o'`.
    #[error("column letter {found:?} at offset {offset} is outside 'a'..='o'")]
    ColumnOutOfRange { offset: usize, found: char },
    /// A column letter was not followed by a usable digit run (no digits at
    /// all, or a leading zero).
    #[error("missing or invalid digit run at offset {offset}")]
    InvalidDigitRun { offset: usize },
    /// The digit run parsed to a row outside `1..=15`.
    #[error("row value {row} at offset {offset} is outside 1..=15")]
    RowOutOfRange { offset: usize, row: u32 },
}

/// One cell of the 15×15 board.
///
/// `col` is `0..=14` (letters `a`..`o`), `row` is `1..=15`. Ordering is by
/// integer [`value`](Address::value), which canonicalization relies on when
/// sorting stone lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address {
    col: u8,
    row: u8,
}

impl Address {
    /// Build an address from a column index and row number.
    ///
    /// Domain membership is a precondition; the parser is the only producer
    /// of addresses from untrusted data and guarantees it.
    pub fn new(col: u8, row: u8) -> Self {
        debug_assert!(col < BOARD_SIZE, "column index {} out of range", col);
        debug_assert!((1..=BOARD_SIZE).contains(&row), "row {} out of range", row);
        Address { col, row }
    }

    /// Column index, `0..=14`.
    pub fn col(self) -> u8 {
        self.col
    }

    /// Row number, `1..=15`.
    pub fn row(self) -> u8 {
        self.row
    }

    /// Integer form of the address: `col * 15 + row`, in `1..=225`.
    pub fn value(self) -> u8 {
        self.col * BOARD_SIZE + self.row
    }

    /// Inverse of [`value`](Address::value).
    ///
    /// Returns `None` for 0 or anything above 225.
    pub fn from_value(value: u8) -> Option<Self> {
        if value == 0 || value > CELL_COUNT {
            return None;
        }
        // Rows are 1-based, so the split is off the 0-based value - 1.
        let col = (value - 1) / BOARD_SIZE;
        let row = value - col * BOARD_SIZE;
        Some(Address { col, row })
    }

    /// Textual token for this address, e.g. `"h8"`.
    pub fn token(self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", (b'a' + self.col) as char, self.row)
    }
}

impl PartialOrd for Address {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Address {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value().cmp(&other.value())
    }
}

/// Parse a move string into its ordered address sequence.
///
/// The whole string must be consumed by the token grammar; the first
/// violation aborts the parse with the matching [`FormatError`].
///
/// # Examples
///
/// ```
/// use renju_canonical::notation::{decode_all, FormatError};
///
/// assert!(decode_all("h8i9i7").is_ok());
/// assert_eq!(decode_all(""), Err(FormatError::EmptyInput));
/// assert_eq!(
///     decode_all("b16"),
///     Err(FormatError::RowOutOfRange { offset: 1, row: 16 })
/// );
/// ```
pub fn decode_all(moves: &str) -> Result<Vec<Address>, FormatError> {
    if moves.trim().is_empty() {
        return Err(FormatError::EmptyInput);
    }

    let bytes = moves.as_bytes();
    let mut sequence = Vec::with_capacity(moves.len() / 2);
    let mut i = 0;

    while i < bytes.len() {
        let letter = bytes[i];
        if !(b'a'..=b'o').contains(&letter) {
            // `i` sits on a char boundary: every previously consumed byte
            // was an ASCII letter or digit.
            let found = moves[i..].chars().next().unwrap_or('\u{fffd}');
            return Err(FormatError::ColumnOutOfRange { offset: i, found });
        }
        let col = letter - b'a';

        let digit_start = i + 1;
        let mut end = digit_start;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        let run = &moves[digit_start..end];
        if run.is_empty() || run.starts_with('0') {
            return Err(FormatError::InvalidDigitRun { offset: digit_start });
        }

        // A run long enough to overflow u32 is out of range regardless, so
        // saturate instead of carrying the exact value.
        let row = run.parse::<u32>().unwrap_or(u32::MAX);
        if row == 0 || row > u32::from(BOARD_SIZE) {
            return Err(FormatError::RowOutOfRange {
                offset: digit_start,
                row,
            });
        }

        sequence.push(Address::new(col, row as u8));
        i = end;
    }

    Ok(sequence)
}

/// Check a move string against the token grammar.
///
/// Request-validation layers call this before accepting user-submitted
/// board text; it accepts exactly the strings [`decode_all`] accepts.
pub fn is_valid_move_string(moves: &str) -> bool {
    decode_all(moves).is_ok()
}

/// Re-encode an address sequence as a move string.
pub fn encode_all(sequence: &[Address]) -> String {
    let mut out = String::with_capacity(sequence.len() * 3);
    for addr in sequence {
        out.push((b'a' + addr.col) as char);
        out.push_str(&addr.row.to_string());
    }
    out
}
