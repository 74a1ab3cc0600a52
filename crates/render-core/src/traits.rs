use mosaic_layout::Row;

use crate::error::RenderError;
use crate::types::{PositionedTile, positioned_tiles};

/// A renderer visited with every tile of a finalized layout, in tree order.
///
/// Implementations turn each positioned tile into whatever the output medium
/// needs: markup, draw calls, scene-graph nodes. Geometry is final by the
/// time the visits start.
pub trait TileRenderer {
    fn render_tile(&mut self, tile: &PositionedTile) -> Result<(), RenderError>;
}

impl<F> TileRenderer for F
where
    F: FnMut(&PositionedTile) -> Result<(), RenderError>,
{
    fn render_tile(&mut self, tile: &PositionedTile) -> Result<(), RenderError> {
        self(tile)
    }
}

/// Drive `renderer` over every tile of `rows`, stopping at the first error.
pub fn render_tree<R>(rows: &[Row], margin: i32, renderer: &mut R) -> Result<(), RenderError>
where
    R: TileRenderer + ?Sized,
{
    for tile in positioned_tiles(rows, margin) {
        renderer.render_tile(&tile)?;
    }
    Ok(())
}
