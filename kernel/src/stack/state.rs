//! `StackState`: one permutation of the pancake stack.
//!
//! Position 0 is the top of the stack. A state is always a permutation of
//! the discs `1..=STACK_SIZE`; construction rejects anything else, so every
//! other operation can assume that invariant.
//!
//! # Ordering
//!
//! States derive `Ord` over their symbol sequence, which is exactly the
//! lexicographic order used for tie-breaking by every search procedure.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::stack::pancake::Pancake;

/// Number of discs in every stack.
pub const STACK_SIZE: usize = 4;

/// Number of distinct flip moves per state (`flip(0)..=flip(STACK_SIZE - 2)`).
pub const FLIP_COUNT: usize = STACK_SIZE - 1;

/// Errors raised by state construction and flip application.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    /// Input is not a permutation of the disc symbols.
    #[error("invalid stack state: {detail}")]
    InvalidState { detail: String },
    /// Flip index outside `0..FLIP_COUNT`.
    #[error("invalid flip index {index}: expected 0..{count}", count = FLIP_COUNT)]
    InvalidMove { index: usize },
}

/// A stack permutation, top to bottom.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StackState([Pancake; STACK_SIZE]);

impl StackState {
    /// Build a state from raw symbol values.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::InvalidState`] if `symbols` does not hold exactly
    /// `STACK_SIZE` values forming a permutation of `1..=STACK_SIZE`.
    pub fn new(symbols: &[u8]) -> Result<Self, StateError> {
        if symbols.len() != STACK_SIZE {
            return Err(StateError::InvalidState {
                detail: format!("expected {STACK_SIZE} discs, got {}", symbols.len()),
            });
        }

        let mut discs = [Pancake::ZERO; STACK_SIZE];
        let mut seen = [false; STACK_SIZE];
        for (slot, &value) in discs.iter_mut().zip(symbols) {
            let disc = Pancake::new(value).ok_or_else(|| StateError::InvalidState {
                detail: format!("disc {value} outside 1..={STACK_SIZE}"),
            })?;
            let index = usize::from(disc.value()) - 1;
            if seen[index] {
                return Err(StateError::InvalidState {
                    detail: format!("disc {value} appears more than once"),
                });
            }
            seen[index] = true;
            *slot = disc;
        }
        Ok(Self(discs))
    }

    /// The solved stack: discs in strictly descending order.
    #[must_use]
    pub fn goal() -> Self {
        let mut discs = [Pancake::ZERO; STACK_SIZE];
        for (index, slot) in discs.iter_mut().enumerate() {
            *slot = Pancake::from_index(index);
        }
        Self(discs)
    }

    /// The discs, top to bottom.
    #[must_use]
    pub const fn discs(&self) -> &[Pancake; STACK_SIZE] {
        &self.0
    }

    /// Reverse the suffix starting at `index`, leaving the prefix in place.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::InvalidMove`] unless `index < FLIP_COUNT`.
    pub fn flip(&self, index: usize) -> Result<Self, StateError> {
        if index >= FLIP_COUNT {
            return Err(StateError::InvalidMove { index });
        }
        Ok(self.flipped(index))
    }

    /// Unchecked flip for indices already known to be in range.
    pub(crate) fn flipped(&self, index: usize) -> Self {
        let mut discs = self.0;
        discs[index..].reverse();
        Self(discs)
    }

    /// Lowest position at which `self` and `other` differ.
    #[must_use]
    pub fn first_difference(&self, other: &Self) -> Option<usize> {
        self.0.iter().zip(other.0.iter()).position(|(a, b)| a != b)
    }

    /// Cost of moving from `self` to `child`.
    ///
    /// The cost is `STACK_SIZE - i` where `i` is the first differing
    /// position among the first `FLIP_COUNT` positions. For a child produced
    /// by `flip(k)` this is `STACK_SIZE - k`. Returns 0 if the first
    /// `FLIP_COUNT` positions agree (never the case for a real flip).
    #[must_use]
    pub fn move_cost(&self, child: &Self) -> u32 {
        self.0[..FLIP_COUNT]
            .iter()
            .zip(child.0[..FLIP_COUNT].iter())
            .position(|(a, b)| a != b)
            .map_or(0, position_cost)
    }

    /// Goal symbol at the first position that does not match the goal,
    /// or [`Pancake::ZERO`] for the goal itself.
    #[must_use]
    pub fn heuristic(&self) -> Pancake {
        self.0
            .iter()
            .enumerate()
            .find(|&(index, &disc)| disc != Pancake::from_index(index))
            .map_or(Pancake::ZERO, |(index, _)| Pancake::from_index(index))
    }

    /// True iff this is the descending goal stack.
    #[must_use]
    pub fn is_goal(&self) -> bool {
        self.0
            .iter()
            .enumerate()
            .all(|(index, &disc)| disc == Pancake::from_index(index))
    }

    /// Children in flip-index order: `flip(0)`, `flip(1)`, ..., `flip(FLIP_COUNT - 1)`.
    #[must_use]
    pub fn children(&self) -> [Self; FLIP_COUNT] {
        std::array::from_fn(|index| self.flipped(index))
    }

    /// Symbol bytes, top to bottom. Used for hashing.
    #[must_use]
    pub fn identity_bytes(&self) -> [u8; STACK_SIZE] {
        self.0.map(Pancake::value)
    }

    /// Every valid state, in ascending order.
    #[must_use]
    pub fn all() -> Vec<Self> {
        let mut states = Vec::new();
        let mut symbols = [1u8; STACK_SIZE];
        loop {
            if let Ok(state) = Self::new(&symbols) {
                states.push(state);
            }
            // Odometer over 1..=STACK_SIZE per position, last position fastest.
            let Some(position) = symbols
                .iter()
                .rposition(|&value| usize::from(value) < STACK_SIZE)
            else {
                return states;
            };
            symbols[position] += 1;
            symbols[position + 1..].fill(1);
        }
    }
}

/// Cost of a flip whose first changed position is `index`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn position_cost(index: usize) -> u32 {
    (STACK_SIZE - index) as u32
}

impl FromStr for StackState {
    type Err = StateError;

    /// Parse a digit string such as `"2143"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols = s
            .chars()
            .map(|c| {
                c.to_digit(10)
                    .and_then(|d| u8::try_from(d).ok())
                    .ok_or_else(|| StateError::InvalidState {
                        detail: format!("'{c}' is not a digit"),
                    })
            })
            .collect::<Result<Vec<u8>, _>>()?;
        Self::new(&symbols)
    }
}

impl fmt::Display for StackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for disc in &self.0 {
            write!(f, "{disc}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for StackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StackState({self})")
    }
}
