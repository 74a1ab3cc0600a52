//! Reference HTML renderer: absolutely positioned tiles in a relative
//! container.

use std::io::Write;

use mosaic_layout::Row;

use crate::error::RenderError;
use crate::types::{PositionedTile, content_height, positioned_tiles};

/// Writes the layout as absolutely positioned `<div>` elements inside a
/// `position: relative` container, the markup shape browser galleries use.
///
/// By default each tile is an empty `div` carrying its item index in a
/// `data-index` attribute; [`render_with`](HtmlRenderer::render_with) lets
/// callers emit the tile body themselves (an `<img>`, a background style, ...).
pub struct HtmlRenderer<W: Write> {
    out: W,
}

impl<W: Write> HtmlRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn render(&mut self, rows: &[Row], margin: i32) -> Result<(), RenderError> {
        self.render_with(rows, margin, |_| None)
    }

    /// Render with a per-tile body hook. Returning `None` leaves the tile
    /// element empty.
    pub fn render_with<F>(
        &mut self,
        rows: &[Row],
        margin: i32,
        mut tile_body: F,
    ) -> Result<(), RenderError>
    where
        F: FnMut(&PositionedTile) -> Option<String>,
    {
        writeln!(
            self.out,
            "<div class=\"mosaic\" style=\"position: relative; height: {}px\">",
            content_height(rows, margin)
        )?;
        for tile in positioned_tiles(rows, margin) {
            let rect = tile.rect;
            write!(
                self.out,
                "  <div class=\"mosaic-tile\" data-index=\"{}\" style=\"position: absolute; \
                 left: {}px; top: {}px; width: {}px; height: {}px\">",
                tile.index, rect.x, rect.y, rect.width, rect.height
            )?;
            if let Some(body) = tile_body(&tile) {
                self.out.write_all(body.as_bytes())?;
            }
            writeln!(self.out, "</div>")?;
        }
        writeln!(self.out, "</div>")?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
