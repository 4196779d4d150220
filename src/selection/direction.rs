//! Gradient directions and the cycling helpers behind the Next/Random buttons.
//!
//! The eight directions have a fixed order. `next_direction` walks that order
//! circularly; `random_direction` picks a uniformly random entry.

use serde::{Deserialize, Serialize};
use std::collections::hash_map::RandomState;
use std::fmt;
use std::hash::{BuildHasher, Hasher};

/// One of the eight compass-style gradient orientations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Direction {
    #[default]
    LeftToRight,
    RightToLeft,
    TopToBottom,
    BottomToTop,
    TopLeftToBottomRight,
    BottomRightToTopLeft,
    TopRightToBottomLeft,
    BottomLeftToTopRight,
}

/// All directions in cycling order.
pub const DIRECTIONS: [Direction; 8] = [
    Direction::LeftToRight,
    Direction::RightToLeft,
    Direction::TopToBottom,
    Direction::BottomToTop,
    Direction::TopLeftToBottomRight,
    Direction::BottomRightToTopLeft,
    Direction::TopRightToBottomLeft,
    Direction::BottomLeftToTopRight,
];

impl Direction {
    /// Short arrow label, e.g. `TL→BR`.
    pub fn label(self) -> &'static str {
        match self {
            Direction::LeftToRight => "L→R",
            Direction::RightToLeft => "R→L",
            Direction::TopToBottom => "T→B",
            Direction::BottomToTop => "B→T",
            Direction::TopLeftToBottomRight => "TL→BR",
            Direction::BottomRightToTopLeft => "BR→TL",
            Direction::TopRightToBottomLeft => "TR→BL",
            Direction::BottomLeftToTopRight => "BL→TR",
        }
    }

    /// Readable phrase used inside the prompt sentence.
    pub fn phrase(self) -> &'static str {
        match self {
            Direction::LeftToRight => "left-to-right",
            Direction::RightToLeft => "right-to-left",
            Direction::TopToBottom => "top-to-bottom",
            Direction::BottomToTop => "bottom-to-top",
            Direction::TopLeftToBottomRight => "top-left to bottom-right",
            Direction::BottomRightToTopLeft => "bottom-right to top-left",
            Direction::TopRightToBottomLeft => "top-right to bottom-left",
            Direction::BottomLeftToTopRight => "bottom-left to top-right",
        }
    }

    /// Position in [`DIRECTIONS`].
    pub fn index(self) -> usize {
        DIRECTIONS
            .iter()
            .position(|d| *d == self)
            .unwrap_or_default()
    }

    /// Direction at `index`, wrapping modulo the direction count.
    pub fn from_index(index: usize) -> Self {
        DIRECTIONS[index % DIRECTIONS.len()]
    }

    /// The following direction, wrapping from the last back to the first.
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// A uniformly random direction.
    pub fn random() -> Self {
        Self::from_index(random_index())
    }

    /// Parse a direction from its arrow label, an ASCII arrow (`TL->BR`), or
    /// its readable phrase. Case-insensitive.
    pub fn parse(s: &str) -> Option<Self> {
        let wanted = s.trim().replace("->", "→").to_uppercase();
        if wanted.is_empty() {
            return None;
        }
        DIRECTIONS.iter().copied().find(|d| {
            d.label() == wanted || d.phrase().to_uppercase() == wanted
        })
    }

    /// Parse leniently: anything unrecognized becomes the first direction.
    pub fn lenient(s: &str) -> Self {
        Self::parse(s).unwrap_or_else(|| {
            log::warn!(
                "unrecognized gradient direction '{}', using {}",
                s,
                Direction::default()
            );
            Direction::default()
        })
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for Direction {
    fn from(s: String) -> Self {
        Direction::lenient(&s)
    }
}

impl From<Direction> for String {
    fn from(d: Direction) -> Self {
        d.label().to_string()
    }
}

/// Return the direction after `current` in the fixed order, wrapping around.
pub fn next_direction(current: Direction) -> Direction {
    current.next()
}

/// Return a uniformly random direction.
pub fn random_direction() -> Direction {
    Direction::random()
}

// 2^64 is a multiple of 8, so the modulo keeps the distribution uniform.
fn random_index() -> usize {
    let hash = RandomState::new().build_hasher().finish();
    (hash % DIRECTIONS.len() as u64) as usize
}
