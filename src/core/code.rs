//! Peg colors and fixed-length peg sequences
//!
//! A `Code` is used for both the hidden answer and every guess. Colors are
//! identified to the player by the digits `1`-`6`.

use rand::Rng;
use rand::prelude::IndexedRandom;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of pegs in an answer or guess
pub const NUM_PEGS: usize = 4;

/// Number of distinct peg colors
pub const NUM_COLORS: usize = 6;

/// Error type for guesses that cannot be scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("Guess must have exactly {expected} pegs, got {actual}")]
    WrongLength { expected: usize, actual: usize },
    #[error("'{0}' is not a color (use 1-6)")]
    UnknownColor(char),
}

/// A single peg color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
    Magenta,
    Cyan,
}

impl Color {
    /// Every color, in digit order (`1` is red, `6` is cyan)
    pub const ALL: [Self; NUM_COLORS] = [
        Self::Red,
        Self::Blue,
        Self::Green,
        Self::Yellow,
        Self::Magenta,
        Self::Cyan,
    ];

    /// Zero-based index into `Color::ALL`
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The digit the player types for this color
    #[inline]
    #[must_use]
    pub const fn digit(self) -> char {
        (b'1' + self as u8) as char
    }

    /// Look up a color by its typed digit
    ///
    /// # Errors
    /// Returns `GuessError::UnknownColor` for anything outside `'1'..='6'`.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Color;
    ///
    /// assert_eq!(Color::from_digit('1').unwrap(), Color::Red);
    /// assert_eq!(Color::from_digit('6').unwrap(), Color::Cyan);
    /// assert!(Color::from_digit('7').is_err());
    /// ```
    pub fn from_digit(digit: char) -> Result<Self, GuessError> {
        match digit {
            '1'..='6' => Ok(Self::ALL[digit as usize - '1' as usize]),
            other => Err(GuessError::UnknownColor(other)),
        }
    }

    /// Lowercase color name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.digit())
    }
}

/// An ordered sequence of exactly `NUM_PEGS` colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code([Color; NUM_PEGS]);

impl Code {
    #[inline]
    #[must_use]
    pub const fn new(pegs: [Color; NUM_PEGS]) -> Self {
        Self(pegs)
    }

    /// Build a code from a slice of colors
    ///
    /// # Errors
    /// Returns `GuessError::WrongLength` unless the slice has `NUM_PEGS` entries.
    pub fn from_slice(pegs: &[Color]) -> Result<Self, GuessError> {
        let pegs: [Color; NUM_PEGS] = pegs.try_into().map_err(|_| GuessError::WrongLength {
            expected: NUM_PEGS,
            actual: pegs.len(),
        })?;
        Ok(Self(pegs))
    }

    /// Draw every peg independently and uniformly from the six colors
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut pegs = [Color::Red; NUM_PEGS];
        for peg in &mut pegs {
            // ALL is non-empty, so choose always yields a color
            if let Some(&color) = Color::ALL.choose(rng) {
                *peg = color;
            }
        }
        Self(pegs)
    }

    #[inline]
    #[must_use]
    pub const fn pegs(&self) -> &[Color; NUM_PEGS] {
        &self.0
    }

    /// Per-color peg counts, indexed by `Color::index`
    #[must_use]
    pub fn color_counts(&self) -> [u8; NUM_COLORS] {
        let mut counts = [0u8; NUM_COLORS];
        for peg in &self.0 {
            counts[peg.index()] += 1;
        }
        counts
    }

    /// Iterate over every possible code (6^4 = 1296 of them)
    pub fn all() -> impl Iterator<Item = Self> {
        (0..NUM_COLORS.pow(NUM_PEGS as u32)).map(|mut n| {
            let mut pegs = [Color::Red; NUM_PEGS];
            for peg in pegs.iter_mut().rev() {
                *peg = Color::ALL[n % NUM_COLORS];
                n /= NUM_COLORS;
            }
            Self(pegs)
        })
    }
}

impl FromStr for Code {
    type Err = GuessError;

    /// Parse player input such as `"1234"` or `" 1 2 3 4 "`
    ///
    /// All whitespace is discarded first, then exactly `NUM_PEGS` digits in
    /// `1..=6` must remain.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();

        if digits.len() != NUM_PEGS {
            return Err(GuessError::WrongLength {
                expected: NUM_PEGS,
                actual: digits.len(),
            });
        }

        let colors = digits
            .into_iter()
            .map(Color::from_digit)
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_slice(&colors)
    }
}

impl fmt::Display for Code {
    /// Digits joined by single spaces, e.g. `1 2 3 4`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, peg) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{peg}")?;
        }
        Ok(())
    }
}
