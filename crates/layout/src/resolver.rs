//! Aspect-ratio resolution against the data source.

use mosaic_traits::TileSource;

use crate::config::BuildParams;

/// Resolve the clamped aspect ratio for item `index`.
///
/// Resolution order: the source's own `aspect_ratio` hook, then the item's
/// intrinsic size, then the configured default size. `None` means the item is
/// unresolvable and the build pass must stop before it. The clamp is applied
/// exactly once; every later packing and geometry decision reuses the clamped
/// value.
pub(crate) fn resolve_ratio<S>(source: &S, index: usize, params: &BuildParams) -> Option<f64>
where
    S: TileSource + ?Sized,
{
    let ratio = match source.aspect_ratio(index) {
        Some(ratio) => ratio,
        None => source
            .item_size(index)
            .and_then(|size| size.aspect_ratio())
            .or_else(|| params.default_size.and_then(|size| size.aspect_ratio()))?,
    };

    if !ratio.is_finite() || ratio <= 0.0 {
        return None;
    }

    Some(ratio.clamp(params.min_ratio, params.max_ratio))
}
