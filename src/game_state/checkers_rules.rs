//! Canonical setup and search constants.

/// Rows that start filled with Top pieces.
pub const TOP_START_ROWS: std::ops::Range<u8> = 0..3;

/// Rows that start filled with Bottom pieces.
pub const BOTTOM_START_ROWS: std::ops::Range<u8> = 5..8;

/// Search depth, in plies, used by the automated player.
pub const DEFAULT_SEARCH_DEPTH: u8 = 3;

/// Material value of an uncrowned piece.
pub const MAN_VALUE: f64 = 1.0;

/// Material value of a king.
pub const KING_VALUE: f64 = 2.0;

/// Per-index weight of the element ordering in the static evaluation.
pub const ELEMENT_INDEX_WEIGHT: f64 = 0.1;
