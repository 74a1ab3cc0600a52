//! Layout engine and state: the streaming build pass.

use log::{debug, trace};
use mosaic_traits::TileSource;

use crate::config::{BuildParams, LayoutOptions};
use crate::finalize::finalize_row;
use crate::optimizer::HeightSearch;
use crate::packer::{RowAcc, StackAcc, TileSeed};
use crate::resolver::resolve_ratio;
use crate::tree::Row;

/// Outcome of a build pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildOutcome {
    /// Every item the source reported is laid out.
    Complete,
    /// The pass stopped at `next_index`: no size could be resolved for that
    /// item and no default size is configured. Not an error; the state is
    /// valid and covers every item before `next_index`. Build again once the
    /// source can resolve it.
    AwaitingData { next_index: usize },
}

/// Immutable layout configuration: a target width plus resolved options.
///
/// The engine owns no rows; it packs into a [`LayoutState`] passed to
/// [`build`](LayoutEngine::build), so a completed state stays readable while
/// a replacement build runs against a clone.
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    params: BuildParams,
}

/// Ordered sequence of finalized rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutState {
    rows: Vec<Row>,
}

impl LayoutState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index one past the last item currently laid out.
    pub fn next_index(&self) -> usize {
        self.rows.last().map_or(0, |row| row.range.to + 1)
    }

    pub fn tile_count(&self) -> usize {
        self.rows.iter().map(Row::tile_count).sum()
    }
}

impl LayoutEngine {
    pub fn new(target_width: i32, options: &LayoutOptions) -> Self {
        Self {
            params: BuildParams::resolve(target_width, options),
        }
    }

    pub fn target_width(&self) -> i32 {
        self.params.target_width
    }

    /// Gap between adjacent rows, stacks and tiles, as normalized for builds.
    pub fn margin(&self) -> i32 {
        self.params.margin
    }

    /// Incrementally (re)build `state` against `source`.
    ///
    /// Rows at or after `from_row` (clamped to the current row count) are
    /// discarded and re-packed starting at the first item they covered;
    /// earlier rows are reused untouched. With `from_row = None` the call is
    /// a no-op when the layout already reaches the last item, and otherwise
    /// resumes from the last (possibly partial) row.
    ///
    /// The pass runs to completion or to the first unresolvable item; see
    /// [`BuildOutcome`].
    pub fn build<S>(
        &self,
        source: &S,
        state: &mut LayoutState,
        from_row: Option<usize>,
    ) -> BuildOutcome
    where
        S: TileSource + ?Sized,
    {
        let params = &self.params;
        let count = source.count();

        let from_row = match from_row {
            Some(row) => row.min(state.rows.len()),
            None => {
                if state.next_index() >= count {
                    return BuildOutcome::Complete;
                }
                state.rows.len().saturating_sub(1)
            }
        };

        let resume = if from_row < state.rows.len() {
            state.rows[from_row].range.from
        } else {
            state.next_index()
        };
        state.rows.truncate(from_row);

        debug!(
            "build: {count} items, resuming at item {resume} with {} rows kept",
            state.rows.len()
        );

        let scored = params.scored();
        let mut start = resume;
        loop {
            let mut search = HeightSearch::new(params);
            let mut row = RowAcc::new(start);
            let mut stack = StackAcc::new(start);
            let mut stopped_at = None;
            let mut i = start;

            while i < count {
                let Some(ratio) = resolve_ratio(source, i, params) else {
                    stopped_at = Some(i);
                    break;
                };
                let seed = TileSeed {
                    index: i,
                    ratio,
                    preferred_area: if scored {
                        source.preferred_area(i)
                    } else {
                        None
                    },
                };
                let row_height = if scored {
                    search.candidate_height(params)
                } else {
                    params.max_row_height
                };

                if stack.must_close_before(seed, row_height, params) {
                    row.close_stack(std::mem::replace(&mut stack, StackAcc::new(i)));

                    let height = row.projected_height(params);
                    if height <= row_height {
                        let (candidate, score) = finalize_row(&row, height, height as i32, params);
                        if scored {
                            trace!(
                                "candidate: items {}..={} height {} score {score:.0}",
                                candidate.range.from, candidate.range.to, candidate.height
                            );
                            match search.offer(candidate, score) {
                                Some(best) => {
                                    i = best.range.to + 1;
                                    Self::commit(state, best);
                                }
                                // Rewind and re-pack at the next candidate
                                // height.
                                None => i = row.from,
                            }
                            row = RowAcc::new(i);
                            stack = StackAcc::new(i);
                            // Item i is resolved afresh next iteration.
                            continue;
                        }
                        Self::commit(state, candidate);
                        row = RowAcc::new(i);
                    }
                }

                stack.push(seed);
                i += 1;
            }

            // Stream over for this scan: exhausted, or stopped at an
            // unresolvable item.
            if let Some(best) = search.take_best() {
                // A candidate search was pending; commit its winner and
                // re-pack whatever follows it.
                start = best.range.to + 1;
                Self::commit(state, best);
                continue;
            }

            if !stack.is_empty() {
                row.close_stack(stack);
            }
            if !row.is_empty() {
                // Best-effort trailing row: too few items to reach the commit
                // threshold, so it spans the target width at its natural
                // height, capped at max_row_height.
                let natural = row.projected_height(params);
                let height = if natural <= params.max_row_height {
                    natural as i32
                } else {
                    params.max_row_height.round() as i32
                };
                let (trailing, _) = finalize_row(&row, natural, height, params);
                Self::commit(state, trailing);
            }

            return match stopped_at {
                Some(next_index) => BuildOutcome::AwaitingData { next_index },
                None => BuildOutcome::Complete,
            };
        }
    }

    /// Rebuild from scratch, discarding every row.
    pub fn rebuild<S>(&self, source: &S, state: &mut LayoutState) -> BuildOutcome
    where
        S: TileSource + ?Sized,
    {
        self.build(source, state, Some(0))
    }

    fn commit(state: &mut LayoutState, row: Row) {
        debug!(
            "row {}: items {}..={}, {} stacks, {}x{} px",
            state.rows.len(),
            row.range.from,
            row.range.to,
            row.stacks.len(),
            row.width,
            row.height
        );
        state.rows.push(row);
    }
}
