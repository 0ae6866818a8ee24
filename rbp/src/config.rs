use serde::{Deserialize, Serialize};

use plankfit::io::svg::SvgDrawOptions;
use plankfit::placement::DEFAULT_CANDIDATE_BUDGET;

/// Configuration for the RBP binary
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct RBPConfig {
    /// Total budget of candidate positions per run
    #[serde(default = "default_candidate_budget")]
    pub candidate_budget: usize,
    /// Overrides the `coord_scale` of the instance file if set
    pub coord_scale: Option<f64>,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

fn default_candidate_budget() -> usize {
    DEFAULT_CANDIDATE_BUDGET
}

impl Default for RBPConfig {
    fn default() -> Self {
        Self {
            candidate_budget: DEFAULT_CANDIDATE_BUDGET,
            coord_scale: None,
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}
