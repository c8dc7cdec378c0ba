//! # Board Symmetry Group
//!
//! The 8 rigid transforms of the 15×15 board (the dihedral group of the
//! square): 4 rotations plus the 4 rotations of a reflection.
//!
//! ## Coordinate Formulas
//!
//! Working on `(col, row)` with col ∈ `0..=14`, row ∈ `1..=15`:
//!
//! - **Rotate 90°**: `(col, row) → (row - 1, 15 - col)`. Applying it four
//!   times is the identity.
//! - **Reflect** (flip across the horizontal mid-line, column unchanged):
//!   `(col, row) → (col, 16 - row)`. Applying it twice is the identity.
//!
//! ## Transform Notation
//!
//! - `R{angle}`: pure rotation (R0 is the identity)
//! - `MR{angle}`: mirror, then rotate
//!
//! Every `MR` element is its own inverse (each is a reflection across some
//! axis of the square); rotations invert to the complementary angle.
//!
//! ## Enumeration Order
//!
//! [`Symmetry::ALL`] lists the group as R0, R90, R180, R270, M, MR90,
//! MR180, MR270. Canonicalization takes a minimum over all 8 images, so
//! nothing downstream depends on this order beyond tie-breaking (the first
//! minimal entry wins).

use crate::notation::{Address, BOARD_SIZE};

/// One element of the board's 8-element symmetry group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symmetry {
    /// Identity.
    R0,
    /// Rotate 90°.
    R90,
    /// Rotate 180°.
    R180,
    /// Rotate 270°.
    R270,
    /// Reflect across the horizontal mid-line.
    M,
    /// Reflect, then rotate 90°.
    MR90,
    /// Reflect, then rotate 180°.
    MR180,
    /// Reflect, then rotate 270°.
    MR270,
}

/// Rotate an address 90° in the board's fixed rotational direction.
pub fn rotate90(addr: Address) -> Address {
    Address::new(addr.row() - 1, BOARD_SIZE - addr.col())
}

/// Reflect an address across the horizontal mid-line (column unchanged).
pub fn reflect(addr: Address) -> Address {
    Address::new(addr.col(), BOARD_SIZE + 1 - addr.row())
}

impl Symmetry {
    /// The full group in its documented enumeration order.
    pub const ALL: [Symmetry; 8] = [
        Symmetry::R0,
        Symmetry::R90,
        Symmetry::R180,
        Symmetry::R270,
        Symmetry::M,
        Symmetry::MR90,
        Symmetry::MR180,
        Symmetry::MR270,
    ];

    /// Image of an address under this transform.
    pub fn apply(self, addr: Address) -> Address {
        match self {
            Symmetry::R0 => addr,
            Symmetry::R90 => rotate90(addr),
            Symmetry::R180 => rotate90(rotate90(addr)),
            Symmetry::R270 => rotate90(rotate90(rotate90(addr))),
            Symmetry::M => reflect(addr),
            Symmetry::MR90 => rotate90(reflect(addr)),
            Symmetry::MR180 => rotate90(rotate90(reflect(addr))),
            Symmetry::MR270 => rotate90(rotate90(rotate90(reflect(addr)))),
        }
    }

    /// The transform that undoes this one.
    pub fn inverse(self) -> Symmetry {
        match self {
            Symmetry::R0 => Symmetry::R0,
            Symmetry::R90 => Symmetry::R270,
            Symmetry::R180 => Symmetry::R180,
            Symmetry::R270 => Symmetry::R90,
            // Reflections are involutions.
            other => other,
        }
    }
}

impl std::fmt::Display for Symmetry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Symmetry::R0 => "R0",
            Symmetry::R90 => "R90",
            Symmetry::R180 => "R180",
            Symmetry::R270 => "R270",
            Symmetry::M => "MR0",
            Symmetry::MR90 => "MR90",
            Symmetry::MR180 => "MR180",
            Symmetry::MR270 => "MR270",
        };
        f.write_str(name)
    }
}

/// The 8 images of an address, indexed to match [`Symmetry::ALL`].
pub fn images(addr: Address) -> [Address; 8] {
    let r0 = addr;
    let r1 = rotate90(r0);
    let r2 = rotate90(r1);
    let r3 = rotate90(r2);
    let m0 = reflect(r0);
    let m1 = rotate90(m0);
    let m2 = rotate90(m1);
    let m3 = rotate90(m2);
    [r0, r1, r2, r3, m0, m1, m2, m3]
}
