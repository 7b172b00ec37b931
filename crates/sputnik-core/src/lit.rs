//! Literal and variable encoding.
//!
//! Literals use the usual solver encoding: variable `v` becomes `2*v`
//! when positive and `2*v + 1` when negative, so negating a literal is a
//! single bit flip and recovering its variable is a shift. DIMACS
//! conversions live here as well; they are used by the parser and by the
//! textual export.

use std::fmt;

/// A 0-based variable index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Var(u32);

impl Var {
    /// Creates a variable from its 0-based index.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the positive literal of this variable.
    #[must_use]
    pub const fn lit(self) -> Lit {
        Lit(self.0 * 2)
    }

    /// Returns the 0-based index, usable for model lookups.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A literal: a variable together with a polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Lit(u32);

impl Lit {
    /// Converts a nonzero DIMACS integer to a literal. The magnitude
    /// minus one is the variable index; the sign selects the polarity.
    ///
    /// The caller is responsible for range-checking the variable against
    /// the problem's declared count; the parser does so.
    #[must_use]
    pub const fn from_dimacs(i: i32) -> Self {
        if i < 0 {
            Self((2 * (-i - 1) + 1) as u32)
        } else {
            Self((2 * (i - 1)) as u32)
        }
    }

    /// Converts back to the signed DIMACS integer.
    #[must_use]
    pub const fn to_dimacs(self) -> i32 {
        let v = (self.0 / 2) as i32 + 1;
        if self.0 & 1 == 1 {
            -v
        } else {
            v
        }
    }

    /// Flips the polarity.
    #[must_use]
    pub const fn negation(self) -> Self {
        Self(self.0 ^ 1)
    }

    /// Returns the underlying variable.
    #[must_use]
    pub const fn var(self) -> Var {
        Var(self.0 >> 1)
    }

    /// Whether the literal asserts its variable true.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 & 1 == 0
    }

    /// Index into per-literal tables such as the occurrence lists.
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Lit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_dimacs())
    }
}
