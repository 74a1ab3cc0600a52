pub mod geometry;

pub use geometry::{Rect, Size};
