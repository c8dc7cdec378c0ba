//! # Renju Canonical Keys
//!
//! Canonicalization of 15×15 Gomoku/Renju move strings for puzzle
//! deduplication.
//!
//! A puzzle position arrives as a compact move string such as `"h8i9i7"`:
//! one token per stone, in play order, black moving first. Two strings that
//! differ only by a rotation or mirroring of the physical board describe the
//! same puzzle, so uniqueness is enforced on a derived key rather than on
//! the raw text. This crate computes that key:
//!
//! 1. **Validate** the move string against the token grammar (`notation`)
//! 2. **Transform** every stone through all 8 board symmetries (`symmetry`)
//! 3. **Select** the lexicographically smallest sorted stone lists and
//!    serialize them into an opaque string key (`canonical`)
//!
//! All functions are pure: no I/O, no shared state, safe to call from any
//! number of threads. Malformed input is reported as [`FormatError`], never
//! a panic.
//!
//! ## Example
//!
//! ```
//! use renju_canonical::{canonical_key, is_valid_move_string};
//!
//! assert!(is_valid_move_string("h8i9i7"));
//!
//! // A position and its 180° rotation share one key.
//! let a = canonical_key("h8i9i7h7").unwrap();
//! let b = canonical_key("h8g7g9h9").unwrap();
//! assert_eq!(a, b);
//! ```

pub mod canonical;
pub mod notation;
pub mod symmetry;

#[cfg(test)]
mod symmetry_tests;

// Re-export the operations collaborators actually call, plus their types.
pub use canonical::{canonical_key, canonical_parts, CanonicalParts};
pub use notation::{decode_all, is_valid_move_string, Address, FormatError};
pub use symmetry::Symmetry;
