//! Justified tiled-layout core.
//!
//! Packs an ordered stream of aspect-ratio'd items into rows that exactly
//! fill a fixed target width. Within a row, consecutive narrow items may be
//! grouped into vertical stacks so portrait material does not force the whole
//! row tall. The packer is a greedy streaming heuristic: stacks close when
//! width/height floors would be violated, rows commit when their prospective
//! height drops under the cap, and an optional bounded search re-packs each
//! row at several candidate heights to chase a preferred tile area.
//!
//! The engine is incremental: [`LayoutEngine::build`] truncates the row
//! sequence at a given row and re-packs only from there, so growing data
//! sources re-solve just the tail.

pub mod config;
pub mod engine;
pub mod tree;

mod finalize;
mod optimizer;
mod packer;
mod resolver;

pub use config::LayoutOptions;
pub use engine::{BuildOutcome, LayoutEngine, LayoutState};
pub use tree::{IndexRange, Row, Stack, Tile};
