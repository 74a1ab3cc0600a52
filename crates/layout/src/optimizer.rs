//! Candidate row-height search for the preferred-area mode.

use crate::config::BuildParams;
use crate::tree::Row;

/// Bounded local search over candidate row heights.
///
/// Candidates are `optimize_steps` heights linearly spaced over
/// `[min_row_height, max_row_height]`. The build loop re-packs the same item
/// range once per candidate, using the candidate height as the stacking
/// threshold, and offers each finalized row here; the lowest mean squared
/// area deviation wins. This trades global optimality for a constant number
/// of candidates per row.
#[derive(Debug)]
pub(crate) struct HeightSearch {
    steps: u32,
    step: u32,
    best: Option<(Row, f64)>,
}

impl HeightSearch {
    pub fn new(params: &BuildParams) -> Self {
        Self {
            steps: params.optimize_steps,
            step: 0,
            best: None,
        }
    }

    /// Row height packed against for the current candidate.
    pub fn candidate_height(&self, params: &BuildParams) -> f64 {
        params.min_row_height
            + f64::from(self.step) * (params.max_row_height - params.min_row_height)
                / f64::from(self.steps - 1)
    }

    /// Record a finalized candidate and advance to the next step. Once every
    /// candidate has been evaluated, yields the winner and resets for the
    /// next row. Ties keep the earlier (shorter) candidate.
    pub fn offer(&mut self, row: Row, score: f64) -> Option<Row> {
        match &self.best {
            Some((_, best_score)) if *best_score <= score => {}
            _ => self.best = Some((row, score)),
        }

        self.step += 1;
        if self.step >= self.steps {
            self.step = 0;
            let (row, _) = self.best.take().expect("offered at least one candidate");
            Some(row)
        } else {
            None
        }
    }

    /// Winner so far, surrendered when the stream ends mid-search.
    pub fn take_best(&mut self) -> Option<Row> {
        self.step = 0;
        self.best.take().map(|(row, _)| row)
    }
}
