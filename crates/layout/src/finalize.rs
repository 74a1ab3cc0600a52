//! Integer geometry finalization with remainder absorption.

use crate::config::BuildParams;
use crate::packer::RowAcc;
use crate::tree::{IndexRange, Row, Stack, Tile};

/// Convert an accumulated row into final integer geometry and score it.
///
/// `width_basis` is the height the stack widths are distributed against and
/// `row_height` the height the row is committed at. For a normally committed
/// row the two agree. The trailing best-effort row of a pass can be capped at
/// `max_row_height` while its widths keep the natural (taller) distribution,
/// so the row still spans the target width with evenly proportioned stacks;
/// tile heights are then scaled down into the capped budget.
///
/// Remainder absorption is the exactness mechanism: the last stack of the row
/// absorbs the width budget left by earlier rounding, and the last tile of
/// each stack absorbs the height budget, so group totals match their targets
/// exactly regardless of rounding drift.
///
/// The score is the mean squared deviation of tile area from the preferred
/// area (0.0 when the scored mode is off).
pub(crate) fn finalize_row(
    acc: &RowAcc,
    width_basis: f64,
    row_height: i32,
    params: &BuildParams,
) -> (Row, f64) {
    debug_assert!(!acc.is_empty());

    let margin = params.margin;
    let height_scale = f64::from(row_height) / width_basis;

    let mut stacks = Vec::with_capacity(acc.stacks.len());
    let mut width_used = 0;
    let mut score_sum = 0.0;
    let mut tile_count = 0usize;

    let last_stack = acc.stacks.len() - 1;
    for (j, stack_acc) in acc.stacks.iter().enumerate() {
        let tiles_len = stack_acc.seeds.len();
        let inner_gaps = (tiles_len as i32 - 1) * margin;

        let stack_width = if j == last_stack {
            params.target_width - width_used
        } else {
            (1000.0 * (width_basis - f64::from(inner_gaps)) / stack_acc.h1000).round() as i32
        };

        let mut tiles = Vec::with_capacity(tiles_len);
        let mut height_used = 0;
        for (k, seed) in stack_acc.seeds.iter().enumerate() {
            let height = if k == tiles_len - 1 {
                row_height - height_used
            } else {
                let natural = f64::from(stack_width) / seed.ratio;
                (natural * height_scale).round() as i32
            };
            if k < tiles_len - 1 {
                height_used += height + margin;
            }

            if let Some(area) = params.preferred_area {
                let preferred = seed.preferred_area.unwrap_or(area);
                let diff = f64::from(stack_width) * f64::from(height) - preferred;
                score_sum += diff * diff;
            }

            tiles.push(Tile {
                index: seed.index,
                width: stack_width,
                height,
            });
        }
        tile_count += tiles_len;
        width_used += stack_width + margin;

        let range = IndexRange::new(
            stack_acc.from,
            stack_acc.seeds.last().expect("stack is non-empty").index,
        );
        stacks.push(Stack {
            tiles,
            width: stack_width,
            height: row_height,
            range,
        });
    }

    let gaps = (stacks.len() as i32 - 1) * margin;
    let row_width = stacks.iter().map(|stack| stack.width).sum::<i32>() + gaps;
    let range = IndexRange::new(acc.from, acc.last_index());

    let row = Row {
        stacks,
        width: row_width,
        height: row_height,
        range,
    };
    let score = score_sum / tile_count as f64;
    (row, score)
}
