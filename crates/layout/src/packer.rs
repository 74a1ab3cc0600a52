//! Streaming accumulators for the packing pass.
//!
//! All sums are kept in the original's `1000`-scaled form: `1000 / ratio` is
//! a tile's height if its stack were 1000 px wide, and `1_000_000 / h1000` is
//! a stack's width if the row were 1000 px tall. The scaling keeps the
//! closure heuristics in round numbers and drops out at finalization.
//!
//! These types are private to the build pass; the finalized tree in [`tree`]
//! carries none of them.
//!
//! [`tree`]: crate::tree

use crate::config::BuildParams;

/// An item admitted to the open stack.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TileSeed {
    pub index: usize,
    /// Aspect ratio after clamping to the configured bounds.
    pub ratio: f64,
    /// Per-item preferred-area override, resolved at admission time
    /// (scored mode only).
    pub preferred_area: Option<f64>,
}

impl TileSeed {
    /// `1000 / ratio`: the tile's height in a 1000 px wide stack.
    pub fn inv1000(&self) -> f64 {
        1000.0 / self.ratio
    }
}

/// The open stack: seeds plus the running sums the closure test needs.
#[derive(Debug)]
pub(crate) struct StackAcc {
    pub from: usize,
    pub seeds: Vec<TileSeed>,
    /// Σ `1000 / ratio` over the seeds.
    pub h1000: f64,
    /// Minimum `1000 / ratio` seen, i.e. the shortest projected tile.
    pub min1000: f64,
}

impl StackAcc {
    pub fn new(from: usize) -> Self {
        Self {
            from,
            seeds: Vec::new(),
            h1000: 0.0,
            min1000: f64::INFINITY,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.seeds.is_empty()
    }

    pub fn push(&mut self, seed: TileSeed) {
        self.h1000 += seed.inv1000();
        self.min1000 = self.min1000.min(seed.inv1000());
        self.seeds.push(seed);
    }

    /// Whether admitting `seed` would violate a floor, so the stack must
    /// close first and `seed` starts the next stack.
    ///
    /// `row_height` is the prospective row height the projections are made
    /// against: the commit cap in fixed mode, the candidate height in scored
    /// mode.
    pub fn must_close_before(&self, seed: TileSeed, row_height: f64, params: &BuildParams) -> bool {
        if self.seeds.is_empty() {
            return false;
        }
        if params.no_stacks {
            return true;
        }

        let h1000 = self.h1000 + seed.inv1000();
        let min1000 = self.min1000.min(seed.inv1000());

        // Projected onto the row height: the stack's width, and the height of
        // its shortest tile.
        1000.0 * row_height / h1000 < params.min_stack_width
            || min1000 * row_height / h1000 < params.min_tile_height
    }
}

/// The open row: closed stacks plus the width sum driving the commit test.
#[derive(Debug)]
pub(crate) struct RowAcc {
    pub from: usize,
    pub stacks: Vec<StackAcc>,
    /// Σ `1_000_000 / stack.h1000` over the closed stacks.
    pub w1000: f64,
}

impl RowAcc {
    pub fn new(from: usize) -> Self {
        Self {
            from,
            stacks: Vec::new(),
            w1000: 0.0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }

    pub fn close_stack(&mut self, stack: StackAcc) {
        debug_assert!(!stack.is_empty());
        self.w1000 += 1_000_000.0 / stack.h1000;
        self.stacks.push(stack);
    }

    /// Row height at which the closed stacks would span the target width,
    /// rounded to whole pixels.
    pub fn projected_height(&self, params: &BuildParams) -> f64 {
        let gaps = (self.stacks.len() as i32 - 1) * params.margin;
        (1000.0 * f64::from(params.target_width - gaps) / self.w1000).round()
    }

    /// Index of the last admitted item.
    pub fn last_index(&self) -> usize {
        self.stacks
            .last()
            .and_then(|stack| stack.seeds.last())
            .map(|seed| seed.index)
            .expect("row has at least one closed stack")
    }
}
