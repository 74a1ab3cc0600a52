pub mod fixtures;

use mosaic::{LayoutEngine, LayoutOptions, LayoutState, TileSource};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Build a fresh layout over `source`.
pub fn build_layout<S: TileSource>(
    source: &S,
    width: i32,
    options: &LayoutOptions,
) -> (LayoutEngine, LayoutState) {
    let engine = LayoutEngine::new(width, options);
    let mut state = LayoutState::new();
    engine.build(source, &mut state, None);
    (engine, state)
}

/// Assert the structural invariants every finalized layout satisfies: rows
/// span the target width exactly, stacks fill their height budget exactly,
/// tiles share their stack's width, and index ranges partition the covered
/// items contiguously.
pub fn assert_layout_invariants(state: &LayoutState, engine: &LayoutEngine) {
    let margin = engine.margin();
    let mut expected_from = match state.rows().first() {
        Some(row) => row.range.from,
        None => return,
    };

    for row in state.rows() {
        assert_eq!(row.range.from, expected_from, "row ranges are contiguous");

        let gaps = (row.stacks.len() as i32 - 1) * margin;
        let stack_widths: i32 = row.stacks.iter().map(|s| s.width).sum();
        assert_eq!(stack_widths + gaps, row.width, "stacks span the row");
        assert_eq!(row.width, engine.target_width(), "rows span the target");

        let mut stack_from = row.range.from;
        for stack in &row.stacks {
            assert_eq!(stack.range.from, stack_from, "stack ranges are contiguous");
            assert!(!stack.tiles.is_empty(), "stacks are never empty");
            assert_eq!(stack.height, row.height, "stacks fill the row height");

            let inner_gaps = (stack.tiles.len() as i32 - 1) * margin;
            let tile_heights: i32 = stack.tiles.iter().map(|t| t.height).sum();
            assert_eq!(tile_heights + inner_gaps, stack.height, "tiles fill the stack");

            for (offset, tile) in stack.tiles.iter().enumerate() {
                assert_eq!(tile.index, stack.range.from + offset, "tile order is item order");
                assert_eq!(tile.width, stack.width, "tiles share the stack width");
            }
            stack_from = stack.range.to + 1;
        }
        assert_eq!(stack_from, row.range.to + 1, "stacks cover the row range");
        expected_from = row.range.to + 1;
    }
}
