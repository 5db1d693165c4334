use std::fmt;

/// Single-letter identifier of a knight, derived from its color.
///
/// Doubles as the board glyph, so it is always stored upper-case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnightId(pub char);

impl KnightId {
    /// Derives the identifier from a color name ("Red" -> `R`).
    pub fn from_color(color: &str) -> Option<Self> {
        color
            .chars()
            .next()
            .filter(char::is_ascii_alphabetic)
            .map(|glyph| Self(glyph.to_ascii_uppercase()))
    }

    #[inline]
    pub const fn glyph(self) -> char {
        self.0
    }
}

impl fmt::Display for KnightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Single-letter identifier of an item, derived from the first letter of its name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemId(pub char);

impl ItemId {
    pub const AXE: Self = Self('A');
    pub const DAGGER: Self = Self('D');
    pub const HELMET: Self = Self('H');
    pub const MAGIC_STAFF: Self = Self('M');

    /// Derives the identifier from an item name ("Axe" -> `A`).
    pub fn from_name(name: &str) -> Option<Self> {
        name.chars()
            .next()
            .filter(char::is_ascii_alphabetic)
            .map(|glyph| Self(glyph.to_ascii_uppercase()))
    }

    #[inline]
    pub const fn glyph(self) -> char {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Grid coordinate. Row 0 is the northern edge, column 0 the western edge.
///
/// Coordinates are signed so that a step off the board can be represented
/// before it is rejected by the boundary check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Returns the position shifted by the given row/column delta.
    #[must_use]
    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }

    /// `[row, col]` pair as used by the export format.
    pub const fn to_pair(self) -> [i32; 2] {
        [self.row, self.col]
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
