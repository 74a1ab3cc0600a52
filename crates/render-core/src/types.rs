use mosaic_layout::Row;
use mosaic_types::Rect;

/// Position of a tile within the layout tree, by index at each level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TilePath {
    pub row: usize,
    pub stack: usize,
    pub tile: usize,
}

/// A tile with its absolute pixel position resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionedTile {
    /// Index of the source item this tile renders.
    pub index: usize,
    pub rect: Rect,
    pub path: TilePath,
}

/// Flatten `rows` into absolutely positioned tiles.
///
/// Positions accumulate top-to-bottom over rows (`height + margin`), left to
/// right over a row's stacks (`width + margin`) and top-to-bottom again over
/// a stack's tiles (`height + margin`), in tree order.
pub fn positioned_tiles(rows: &[Row], margin: i32) -> Vec<PositionedTile> {
    let mut tiles = Vec::with_capacity(rows.iter().map(Row::tile_count).sum());

    let mut row_top = 0;
    for (r, row) in rows.iter().enumerate() {
        let mut stack_left = 0;
        for (s, stack) in row.stacks.iter().enumerate() {
            let mut tile_top = row_top;
            for (t, tile) in stack.tiles.iter().enumerate() {
                tiles.push(PositionedTile {
                    index: tile.index,
                    rect: Rect::new(stack_left, tile_top, tile.width, tile.height),
                    path: TilePath {
                        row: r,
                        stack: s,
                        tile: t,
                    },
                });
                tile_top += tile.height + margin;
            }
            stack_left += stack.width + margin;
        }
        row_top += row.height + margin;
    }

    tiles
}

/// Total pixel height of `rows` when rendered, margins between rows included.
pub fn content_height(rows: &[Row], margin: i32) -> i32 {
    let heights: i32 = rows.iter().map(|row| row.height).sum();
    let gaps = (rows.len() as i32 - 1).max(0) * margin;
    heights + gaps
}
