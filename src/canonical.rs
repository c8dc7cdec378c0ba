//! # Canonical Key Builder
//!
//! Derives the symmetry-reduced deduplication key for a move string.
//!
//! ## Algorithm
//!
//! 1. Decode the move string into its ordered address sequence.
//! 2. Keep one black and one white stone list per symmetry element (8 of
//!    each). A move belongs to black when black has placed no more stones
//!    than white so far — strict alternation starting with black — and its
//!    image under symmetry *j* goes into the *j*-th list of that color.
//! 3. Sort all 16 lists ascending. Sorting makes the key insensitive to the
//!    order moves were entered in.
//! 4. Pick the lexicographically smallest black list and the smallest white
//!    list, each over its own 8 candidates.
//! 5. Serialize: each address value `v` becomes the character `v + 32`,
//!    black segment first, then white.
//!
//! ## Independent Per-Color Selection
//!
//! Step 4 chooses the black and white minima **independently**, so the two
//! winning lists may come from different symmetry elements and the combined
//! "canonical position" may not be any single rigid transform of the input
//! board. This is a known inconsistency, kept deliberately: every stored
//! key was computed this way, and changing the selection rule would orphan
//! them. [`canonical_parts`] exposes both winning transforms so the
//! asymmetry is at least observable.

use smallvec::SmallVec;

use crate::notation::{decode_all, FormatError};
use crate::symmetry::{images, Symmetry};

/// Sorted stone values for one color under one symmetry. Inline capacity
/// covers typical puzzle lengths without touching the heap.
type StoneList = SmallVec<[u8; 24]>;

/// Values every key character is offset by, so that address 1 maps just
/// past the ASCII space.
const KEY_CHAR_OFFSET: u32 = 32;

/// A canonical key together with the symmetry elements that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalParts {
    /// The opaque deduplication key, black segment then white segment.
    pub key: String,
    /// Symmetry whose black list won the lexicographic minimum.
    pub black_symmetry: Symmetry,
    /// Symmetry whose white list won; may differ from `black_symmetry`.
    pub white_symmetry: Symmetry,
}

/// Compute the canonical deduplication key for a move string.
///
/// The key is deterministic and invariant under reorderings of same-colored
/// moves; positions related by a board symmetry collapse to one key (see
/// the module docs for the per-color selection caveat). The only failure
/// mode is a malformed move string.
///
/// # Examples
///
/// ```
/// use renju_canonical::canonical_key;
///
/// // A lone black stone in the corner maps to address 1, character '!'.
/// assert_eq!(canonical_key("a1").unwrap(), "!");
///
/// // Same stones entered in a different (parity-preserving) order.
/// let a = canonical_key("a1b2c3").unwrap();
/// let b = canonical_key("c3b2a1").unwrap();
/// assert_eq!(a, b);
/// ```
pub fn canonical_key(moves: &str) -> Result<String, FormatError> {
    canonical_parts(moves).map(|parts| parts.key)
}

/// Like [`canonical_key`], but also reports which symmetry element won the
/// minimum for each color.
pub fn canonical_parts(moves: &str) -> Result<CanonicalParts, FormatError> {
    let sequence = decode_all(moves)?;

    let mut black: [StoneList; 8] = Default::default();
    let mut white: [StoneList; 8] = Default::default();
    let mut black_count = 0usize;
    let mut white_count = 0usize;

    for addr in sequence {
        let is_black = black_count <= white_count;
        if is_black {
            black_count += 1;
        } else {
            white_count += 1;
        }

        let lists = if is_black { &mut black } else { &mut white };
        for (list, image) in lists.iter_mut().zip(images(addr)) {
            list.push(image.value());
        }
    }

    for list in black.iter_mut().chain(white.iter_mut()) {
        list.sort_unstable();
    }

    let (black_index, black_min) = smallest(&black);
    let (white_index, white_min) = smallest(&white);

    let mut key = String::with_capacity(black_min.len() + white_min.len());
    for &value in black_min.iter().chain(white_min.iter()) {
        key.push(key_char(value));
    }

    Ok(CanonicalParts {
        key,
        black_symmetry: Symmetry::ALL[black_index],
        white_symmetry: Symmetry::ALL[white_index],
    })
}

/// Index and contents of the lexicographically smallest list. Ties resolve
/// to the lowest index, which keeps the result deterministic.
fn smallest(lists: &[StoneList; 8]) -> (usize, &StoneList) {
    let mut best = 0;
    for i in 1..lists.len() {
        if lists[i] < lists[best] {
            best = i;
        }
    }
    (best, &lists[best])
}

/// Map an address value to its key character.
fn key_char(value: u8) -> char {
    // Values stay in 33..=257, far below the surrogate range.
    char::from_u32(u32::from(value) + KEY_CHAR_OFFSET)
        .expect("offset address values are always valid chars")
}
