//! mosaic: justified tiled layout.
//!
//! Packs an ordered stream of items with intrinsic aspect ratios into rows
//! (and optional vertical sub-stacks) that exactly fill a fixed target
//! width, the way photo galleries justify their grids. The packing core
//! lives in [`mosaic_layout`]; this crate re-exports the public surface and
//! adds the [`Layout`] convenience wrapper that owns an engine/state pair.
//!
//! ```
//! use mosaic::{Layout, LayoutOptions, Size};
//!
//! let photos = vec![
//!     Size::new(4000.0, 3000.0),
//!     Size::new(3000.0, 4000.0),
//!     Size::new(4000.0, 3000.0),
//!     Size::new(1600.0, 900.0),
//! ];
//!
//! let mut layout = Layout::new(960, LayoutOptions::default());
//! layout.rebuild(&photos);
//!
//! for row in layout.rows() {
//!     assert!(!row.stacks.is_empty());
//! }
//! ```

pub use mosaic_layout::{
    BuildOutcome, IndexRange, LayoutEngine, LayoutOptions, LayoutState, Row, Stack, Tile,
};
pub use mosaic_render_core::{
    HtmlRenderer, PositionedTile, RenderError, TilePath, TileRenderer, content_height,
    positioned_tiles, render_tree,
};
pub use mosaic_traits::TileSource;
pub use mosaic_types::{Rect, Size};

/// An engine/state pair for the common case of one layout per data source.
///
/// [`LayoutEngine`] and [`LayoutState`] stay available separately for callers
/// that want to share one configuration across states or read a completed
/// state while preparing a rebuild.
#[derive(Debug, Clone)]
pub struct Layout {
    engine: LayoutEngine,
    state: LayoutState,
}

impl Layout {
    pub fn new(target_width: i32, options: LayoutOptions) -> Self {
        Self {
            engine: LayoutEngine::new(target_width, &options),
            state: LayoutState::new(),
        }
    }

    /// See [`LayoutEngine::build`].
    pub fn build<S>(&mut self, source: &S, from_row: Option<usize>) -> BuildOutcome
    where
        S: TileSource + ?Sized,
    {
        self.engine.build(source, &mut self.state, from_row)
    }

    /// Rebuild from scratch.
    pub fn rebuild<S>(&mut self, source: &S) -> BuildOutcome
    where
        S: TileSource + ?Sized,
    {
        self.engine.rebuild(source, &mut self.state)
    }

    pub fn rows(&self) -> &[Row] {
        self.state.rows()
    }

    pub fn engine(&self) -> &LayoutEngine {
        &self.engine
    }

    pub fn state(&self) -> &LayoutState {
        &self.state
    }

    /// Tiles of the current state with absolute positions resolved.
    pub fn positioned_tiles(&self) -> Vec<PositionedTile> {
        positioned_tiles(self.state.rows(), self.engine.margin())
    }
}
