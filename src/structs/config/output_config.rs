use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default = "ConfigHelper::default_show_code_preview")]
    pub show_code_preview: bool,

    #[serde(default = "ConfigHelper::default_preview_chars")]
    pub preview_chars: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            show_code_preview: ConfigHelper::default_show_code_preview(),
            preview_chars: ConfigHelper::default_preview_chars(),
        }
    }
}
