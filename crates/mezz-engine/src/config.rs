//! Engine settings.

use serde::{Deserialize, Serialize};

/// Tunable engine settings with production defaults.
///
/// # Example
///
/// ```rust
/// use mezz_engine::EngineConfig;
///
/// let config = EngineConfig::new()
///     .with_node_log_depth(3)
///     .with_wa_fallback_shares(2_000_000.0);
/// assert_eq!(config.node_log_depth, 3);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Node logs are emitted for every `(t, i)` with `t ≤ min(N, depth)`.
    ///
    /// Diagnostic output, not a stable interface.
    pub node_log_depth: usize,

    /// Shares outstanding substituted when a weighted-average reset event
    /// omits `shares_outstanding_before`. A documented approximation; the
    /// substitution is also surfaced as a validation warning and a log
    /// line.
    pub wa_fallback_shares: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            node_log_depth: 5,
            wa_fallback_shares: 1_000_000.0,
        }
    }
}

impl EngineConfig {
    /// Creates a configuration with the defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the node-log sampling depth.
    #[must_use]
    pub fn with_node_log_depth(mut self, depth: usize) -> Self {
        self.node_log_depth = depth;
        self
    }

    /// Sets the weighted-average shares-outstanding fallback.
    #[must_use]
    pub fn with_wa_fallback_shares(mut self, shares: f64) -> Self {
        self.wa_fallback_shares = shares;
        self
    }
}
