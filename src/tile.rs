//! Square tiles with four labelled edges.
//!
//! A tile is written as four edge labels in canonical order (top, right,
//! bottom, left) separated by spaces, optionally followed by an orientation
//! digit: `"A a B b 3"`. The letter case of a label is its polarity.

use std::fmt;
use std::str::FromStr;

use crate::error::TileError;
use crate::geometry::{Connection, NUM_SIDES};

/// Length of a definition without the orientation digit.
const DEFINITION_LEN: usize = 2 * NUM_SIDES - 1;

/// Length of a definition carrying an orientation digit.
const DEFINITION_WITH_ORIENTATION_LEN: usize = DEFINITION_LEN + 2;

/// One edge label; the case of the letter is its polarity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge(char);

impl Edge {
    /// Wraps an alphabetic ASCII label.
    pub fn new(label: char) -> Option<Self> {
        label.is_ascii_alphabetic().then_some(Self(label))
    }

    pub const fn label(self) -> char {
        self.0
    }

    /// Two edges fit together when they carry the same letter in opposite case.
    ///
    /// `A` fits `a`, but `A` never fits `A`.
    #[inline]
    pub fn matches(self, other: Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0) && self.0 != other.0
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A tile: four fixed edges plus a mutable number of clockwise quarter turns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Tile {
    sides: [Edge; NUM_SIDES],
    orientation: usize,
}

impl Tile {
    pub const fn new(sides: [Edge; NUM_SIDES], orientation: usize) -> Self {
        Self {
            sides,
            orientation: orientation % NUM_SIDES,
        }
    }

    /// Edges in canonical, unrotated order.
    pub const fn sides(&self) -> [Edge; NUM_SIDES] {
        self.sides
    }

    pub const fn orientation(&self) -> usize {
        self.orientation
    }

    /// Sets the number of clockwise quarter turns, wrapping values above 3.
    pub fn set_orientation(&mut self, orientation: usize) {
        self.orientation = orientation % NUM_SIDES;
    }

    /// Edges as seen from outside, indexed top, right, bottom, left.
    #[inline]
    pub fn oriented_edges(&self) -> [Edge; NUM_SIDES] {
        let mut oriented = self.sides;
        oriented.rotate_right(self.orientation);
        oriented
    }

    /// Whether `other`, sitting at `direction` from this tile, touches it
    /// with a matching edge.
    #[inline]
    pub fn is_matched(&self, other: &Self, direction: Connection) -> bool {
        let mine = self.oriented_edges()[direction.edge()];
        let theirs = other.oriented_edges()[direction.facing_edge()];
        mine.matches(theirs)
    }

    /// Three-line drawing of the oriented tile:
    ///
    /// ```text
    ///   top
    /// left   right
    ///   bottom
    /// ```
    pub fn display_str(&self) -> String {
        let [top, right, bottom, left] = self.oriented_edges();
        format!("  {top}\n{left}   {right}\n  {bottom}\n")
    }
}

impl FromStr for Tile {
    type Err = TileError;

    fn from_str(definition: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = definition.chars().collect();
        if chars.len() != DEFINITION_LEN && chars.len() != DEFINITION_WITH_ORIENTATION_LEN {
            return Err(TileError::WrongLength {
                definition: definition.to_string(),
                length: chars.len(),
            });
        }

        // separators sit at every odd position
        for position in (1..chars.len()).step_by(2) {
            if chars[position] != ' ' {
                return Err(TileError::MissingSeparator {
                    definition: definition.to_string(),
                    position,
                });
            }
        }

        let mut sides = [Edge('?'); NUM_SIDES];
        for (side, edge) in sides.iter_mut().enumerate() {
            let position = 2 * side;
            let found = chars[position];
            *edge = Edge::new(found).ok_or_else(|| TileError::InvalidLabel {
                definition: definition.to_string(),
                position,
                found,
            })?;
        }

        let orientation = match chars.get(DEFINITION_WITH_ORIENTATION_LEN - 1) {
            None => 0,
            Some(&digit) => match digit.to_digit(10) {
                Some(turns) if (turns as usize) < NUM_SIDES => turns as usize,
                _ => {
                    return Err(TileError::InvalidOrientation {
                        definition: definition.to_string(),
                        found: digit,
                    })
                }
            },
        };

        Ok(Self::new(sides, orientation))
    }
}

/// Writes the canonical sides followed by the orientation: `A a B b 3`.
impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for side in self.sides {
            write!(f, "{side} ")?;
        }
        write!(f, "{}", self.orientation)
    }
}
