//! Pipeline-wide configuration.

use std::time::Duration;

use figurine_estimate::EstimateConfig;
use figurine_pedestal::PedestalParams;

/// Settings for a pipeline run and the background worker.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Pedestal sizing parameters.
    pub pedestal: PedestalParams,
    /// Print settings and pricing.
    pub estimate: EstimateConfig,
    /// Quiet period the worker waits before running a job, so rapid
    /// edits (a user typing an engraving) coalesce into one recompute.
    pub debounce: Duration,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            pedestal: PedestalParams::default(),
            estimate: EstimateConfig::default(),
            debounce: Duration::from_millis(350),
        }
    }
}

impl PipelineConfig {
    /// Set the debounce window.
    #[must_use]
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }
}
