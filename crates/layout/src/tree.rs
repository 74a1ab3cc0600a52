//! Finalized layout tree: the values a build pass hands to callers.
//!
//! Everything here is plain immutable data. The running sums the packer works
//! with never appear on these types; see `packer` for the accumulators.

/// Inclusive range of item indices covered by a stack or row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexRange {
    pub from: usize,
    pub to: usize,
}

impl IndexRange {
    pub fn new(from: usize, to: usize) -> Self {
        debug_assert!(from <= to);
        Self { from, to }
    }

    /// Number of items covered. Ranges are never empty.
    pub fn len(&self) -> usize {
        self.to - self.from + 1
    }

    pub fn contains(&self, index: usize) -> bool {
        self.from <= index && index <= self.to
    }
}

/// One item placed in the layout with final pixel geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    /// Index of the source item this tile renders.
    pub index: usize,
    pub width: i32,
    pub height: i32,
}

/// A vertical band of tiles sharing one width within a row.
///
/// All tiles have the stack's width; their heights plus the margins between
/// them total the stack's height exactly (the last tile absorbs the rounding
/// remainder).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack {
    pub tiles: Vec<Tile>,
    pub width: i32,
    pub height: i32,
    pub range: IndexRange,
}

/// A horizontal band of stacks spanning the target width.
///
/// Stack widths plus the margins between them total the row's width exactly
/// (the last stack absorbs the rounding remainder).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub stacks: Vec<Stack>,
    pub width: i32,
    pub height: i32,
    pub range: IndexRange,
}

impl Row {
    /// Tiles of all stacks in placement order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.stacks.iter().flat_map(|stack| stack.tiles.iter())
    }

    pub fn tile_count(&self) -> usize {
        self.stacks.iter().map(|stack| stack.tiles.len()).sum()
    }
}
