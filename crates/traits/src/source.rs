//! Data-source capability consumed by the layout engine.

use mosaic_types::Size;

/// Supplies the ordered item stream to the packer.
///
/// Items are read by index, sequentially increasing within one scan. The
/// height optimizer re-reads the same index range once per candidate row
/// height, so `item_size` should be cheap (or memoized by the implementor).
///
/// The two provided hooks mirror per-item configuration callbacks: a source
/// that knows better than `width / height` can override [`aspect_ratio`],
/// and a source can steer the scored mode per item via [`preferred_area`].
///
/// [`aspect_ratio`]: TileSource::aspect_ratio
/// [`preferred_area`]: TileSource::preferred_area
pub trait TileSource {
    /// Number of items currently available.
    fn count(&self) -> usize;

    /// Intrinsic size of item `index`, or `None` when not (yet) known.
    fn item_size(&self, index: usize) -> Option<Size>;

    /// Directly supplies the aspect ratio for item `index`, bypassing
    /// [`item_size`](TileSource::item_size) resolution. The result is still
    /// clamped to the configured ratio bounds.
    fn aspect_ratio(&self, index: usize) -> Option<f64> {
        let _ = index;
        None
    }

    /// Per-item preferred tile area in px², overriding the global
    /// `preferred_area` option for this item when the scored mode is active.
    fn preferred_area(&self, index: usize) -> Option<f64> {
        let _ = index;
        None
    }
}

impl TileSource for [Size] {
    fn count(&self) -> usize {
        self.len()
    }

    fn item_size(&self, index: usize) -> Option<Size> {
        self.get(index).copied()
    }
}

impl TileSource for Vec<Size> {
    fn count(&self) -> usize {
        self.len()
    }

    fn item_size(&self, index: usize) -> Option<Size> {
        self.get(index).copied()
    }
}

impl TileSource for [Option<Size>] {
    fn count(&self) -> usize {
        self.len()
    }

    fn item_size(&self, index: usize) -> Option<Size> {
        self.get(index).copied().flatten()
    }
}

impl TileSource for Vec<Option<Size>> {
    fn count(&self) -> usize {
        self.len()
    }

    fn item_size(&self, index: usize) -> Option<Size> {
        self.get(index).copied().flatten()
    }
}

impl<S: TileSource + ?Sized> TileSource for &S {
    fn count(&self) -> usize {
        (**self).count()
    }

    fn item_size(&self, index: usize) -> Option<Size> {
        (**self).item_size(index)
    }

    fn aspect_ratio(&self, index: usize) -> Option<f64> {
        (**self).aspect_ratio(index)
    }

    fn preferred_area(&self, index: usize) -> Option<f64> {
        (**self).preferred_area(index)
    }
}
