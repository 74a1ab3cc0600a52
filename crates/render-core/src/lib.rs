//! Rendering abstractions over finalized layout trees.
//!
//! The layout core guarantees that by the time rendering starts, geometry is
//! final and immutable, and that absolute positions follow from accumulating
//! `width`/`height` plus the margin along row → stack → tile order. This
//! crate implements that accumulation once ([`positioned_tiles`],
//! [`render_tree`]) and defines the [`TileRenderer`] capability actual
//! renderers implement. [`HtmlRenderer`] is the reference implementation.

pub mod error;
pub mod html;
pub mod traits;
pub mod types;

pub use error::RenderError;
pub use html::HtmlRenderer;
pub use traits::{TileRenderer, render_tree};
pub use types::{PositionedTile, TilePath, content_height, positioned_tiles};
