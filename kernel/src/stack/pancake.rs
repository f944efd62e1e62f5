//! `Pancake`: a single disc symbol.
//!
//! Discs are numbered `1..=STACK_SIZE`, larger numbers being wider discs.
//! The value `0` is reserved for [`Pancake::ZERO`], which the heuristic
//! reports for a solved stack. It never appears inside a [`StackState`].
//!
//! Symbols are compared numerically. The heuristic is summed with move
//! costs in A*, so a symbol's order and its numeric weight always agree.
//!
//! [`StackState`]: crate::stack::state::StackState

use std::fmt;

use crate::stack::state::STACK_SIZE;

/// A disc symbol, or the zero symbol.
///
/// Derives `Ord` so that states compare lexicographically over their discs.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pancake(u8);

impl Pancake {
    /// Zero symbol: heuristic value of the goal state.
    pub const ZERO: Self = Self(0);

    /// Construct a disc symbol. Returns `None` outside `1..=STACK_SIZE`.
    #[must_use]
    pub fn new(value: u8) -> Option<Self> {
        if value == 0 || usize::from(value) > STACK_SIZE {
            return None;
        }
        Some(Self(value))
    }

    /// Parse a single digit character (`'1'..='4'`).
    #[must_use]
    pub fn from_digit(c: char) -> Option<Self> {
        let value = c.to_digit(10)?;
        u8::try_from(value).ok().and_then(Self::new)
    }

    /// Raw symbol value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// True for [`Pancake::ZERO`].
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Numeric weight used when the symbol takes part in a score.
    #[must_use]
    pub fn weight(self) -> u32 {
        u32::from(self.0)
    }

    /// Goal symbol at `index`. Only called with positions of a stack array.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) const fn from_index(index: usize) -> Self {
        Self((STACK_SIZE - index) as u8)
    }
}

impl fmt::Debug for Pancake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pancake({})", self.0)
    }
}

impl fmt::Display for Pancake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
