//! Cloud provider selection

use serde::{Deserialize, Serialize};

/// Cloud provider configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudConfig {
    /// Provider used when `--cloud` is not given (e.g. "aws")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
}
