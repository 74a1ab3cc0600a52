use mosaic_types::Size;
use serde::{Deserialize, Serialize};

/// User-facing layout options.
///
/// Every field has a workable default, and invalid values are normalized at
/// the start of a build pass rather than rejected: `optimize_steps` is raised
/// to the minimum of 3, a negative `margin` becomes 0, and inverted ratio
/// bounds are reordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutOptions {
    /// Target tile area in px². Setting this switches the engine into the
    /// scored mode: instead of committing a row at the first height under
    /// `max_row_height`, several candidate heights are packed and the one
    /// whose tiles deviate least from this area (mean squared) is kept.
    pub preferred_area: Option<f64>,

    /// Number of candidate row heights sampled per row in scored mode.
    /// Values below 3 are raised to 3.
    pub optimize_steps: u32,

    /// Lower bound of the candidate height ladder (scored mode only).
    /// Unset: `sqrt(preferred_area / 2)`.
    pub min_row_height: Option<f64>,

    /// Row commit threshold: a row is closed once its prospective height
    /// drops to this or below. Unset: `sqrt(preferred_area * 2)` in scored
    /// mode, otherwise 180.
    pub max_row_height: Option<f64>,

    /// Floor for the projected width of a stack; an item that would squeeze
    /// its stack narrower starts a new stack instead. Unset:
    /// `sqrt(preferred_area / 2)` in scored mode, otherwise 100.
    pub min_stack_width: Option<f64>,

    /// Floor for the projected height of the shortest tile in a stack.
    /// Unset: `sqrt(preferred_area * 2) / 3` in scored mode, otherwise 70.
    pub min_tile_height: Option<f64>,

    /// Upper clamp for resolved aspect ratios.
    pub max_ratio: f64,

    /// Lower clamp for resolved aspect ratios.
    pub min_ratio: f64,

    /// Gap in px between adjacent rows, stacks and tiles. Zero is legal.
    pub margin: i32,

    /// Force one tile per stack, giving a pure justified-row layout.
    pub no_stacks: bool,

    /// Fallback size for items whose source reports none. Without it, an
    /// unsized item ends the build pass.
    pub default_size: Option<Size>,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            preferred_area: None,
            optimize_steps: 3,
            min_row_height: None,
            max_row_height: None,
            min_stack_width: None,
            min_tile_height: None,
            max_ratio: 4.0,
            min_ratio: 0.333,
            margin: 2,
            no_stacks: false,
            default_size: None,
        }
    }
}

/// Options resolved against a target width for one build pass.
#[derive(Debug, Clone)]
pub(crate) struct BuildParams {
    pub target_width: i32,
    pub preferred_area: Option<f64>,
    pub optimize_steps: u32,
    pub min_row_height: f64,
    pub max_row_height: f64,
    pub min_stack_width: f64,
    pub min_tile_height: f64,
    pub max_ratio: f64,
    pub min_ratio: f64,
    pub margin: i32,
    pub no_stacks: bool,
    pub default_size: Option<Size>,
}

impl BuildParams {
    pub fn resolve(target_width: i32, options: &LayoutOptions) -> Self {
        let preferred_area = options.preferred_area.filter(|area| *area > 0.0);

        let (min_row_height, max_row_height, min_stack_width, min_tile_height) =
            match preferred_area {
                Some(area) => (
                    options.min_row_height.unwrap_or_else(|| (area / 2.0).sqrt()),
                    options.max_row_height.unwrap_or_else(|| (area * 2.0).sqrt()),
                    options.min_stack_width.unwrap_or_else(|| (area / 2.0).sqrt()),
                    options
                        .min_tile_height
                        .unwrap_or_else(|| (area * 2.0).sqrt() / 3.0),
                ),
                None => (
                    0.0,
                    options.max_row_height.unwrap_or(180.0),
                    options.min_stack_width.unwrap_or(100.0),
                    options.min_tile_height.unwrap_or(70.0),
                ),
            };

        let (min_ratio, max_ratio) = if options.min_ratio <= options.max_ratio {
            (options.min_ratio, options.max_ratio)
        } else {
            (options.max_ratio, options.min_ratio)
        };

        Self {
            target_width,
            preferred_area,
            optimize_steps: options.optimize_steps.max(3),
            min_row_height,
            max_row_height,
            min_stack_width,
            min_tile_height,
            max_ratio,
            min_ratio,
            margin: options.margin.max(0),
            no_stacks: options.no_stacks,
            default_size: options.default_size,
        }
    }

    pub fn scored(&self) -> bool {
        self.preferred_area.is_some()
    }
}
