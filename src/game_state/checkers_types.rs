//! Core value types shared by the rules engine and the search.

use std::fmt;

/// Board edge length.
pub const BOARD_SIZE: u8 = 8;

/// One of the two players, named by board geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Starts on rows 0-2 and advances toward increasing rows.
    Top,
    /// Starts on rows 5-7, advances toward decreasing rows, and moves first.
    Bottom,
}

impl Side {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Side::Top => 0,
            Side::Bottom => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::Top => Side::Bottom,
            Side::Bottom => Side::Top,
        }
    }

    /// Row delta of a forward step.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Side::Top => 1,
            Side::Bottom => -1,
        }
    }

    /// Row on which a man of this side is crowned.
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Side::Top => BOARD_SIZE - 1,
            Side::Bottom => 0,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Top => write!(f, "Top"),
            Side::Bottom => write!(f, "Bottom"),
        }
    }
}

/// Elemental tag carried by every piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Fire,
    Water,
    Earth,
    Air,
}

impl Element {
    /// Fixed ordering; evaluation and random setup both index into it.
    pub const ALL: [Element; 4] = [Element::Fire, Element::Water, Element::Earth, Element::Air];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Element::Fire => 0,
            Element::Water => 1,
            Element::Earth => 2,
            Element::Air => 3,
        }
    }

    /// The single element this one dominates.
    #[inline]
    pub const fn beats(self) -> Element {
        match self {
            Element::Fire => Element::Air,
            Element::Water => Element::Fire,
            Element::Earth => Element::Water,
            Element::Air => Element::Earth,
        }
    }

    #[inline]
    pub const fn letter(self) -> char {
        match self {
            Element::Fire => 'f',
            Element::Water => 'w',
            Element::Earth => 'e',
            Element::Air => 'a',
        }
    }

    pub fn from_letter(ch: char) -> Option<Element> {
        match ch.to_ascii_lowercase() {
            'f' => Some(Element::Fire),
            'w' => Some(Element::Water),
            'e' => Some(Element::Earth),
            'a' => Some(Element::Air),
            _ => None,
        }
    }
}

/// Grid coordinate, row 0 at the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub const fn in_bounds(row: i16, col: i16) -> bool {
        row >= 0 && row < BOARD_SIZE as i16 && col >= 0 && col < BOARD_SIZE as i16
    }

    /// Step by `(dr, dc)`, or `None` when the result leaves the grid.
    #[inline]
    pub fn offset(self, dr: i8, dc: i8) -> Option<Position> {
        let row = self.row as i16 + dr as i16;
        let col = self.col as i16 + dc as i16;
        if Self::in_bounds(row, col) {
            Some(Position::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Only dark squares ever hold pieces.
    #[inline]
    pub const fn is_dark(self) -> bool {
        (self.row + self.col) % 2 == 1
    }
}

/// A single checker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub row: u8,
    pub col: u8,
    pub side: Side,
    pub element: Element,
    pub is_king: bool,
}

impl Piece {
    #[inline]
    pub const fn new(row: u8, col: u8, side: Side, element: Element) -> Self {
        Self {
            row,
            col,
            side,
            element,
            is_king: false,
        }
    }

    #[inline]
    pub const fn position(&self) -> Position {
        Position::new(self.row, self.col)
    }

    #[inline]
    pub fn make_king(&mut self) {
        self.is_king = true;
    }
}

/// Contents of one grid slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Piece),
}

impl Cell {
    #[inline]
    pub fn piece(&self) -> Option<&Piece> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(piece) => Some(piece),
        }
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}
