//! Editor plugin toggles.
//!
//! Mirrors the studio's plugin list: the structure tool (content navigation),
//! the vision tool (query console), and code input (code-block editing).
//! All three ship enabled.

use serde::{Deserialize, Serialize};

const fn default_enabled() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PluginsConfig {
    #[serde(default = "default_enabled")]
    pub structure_tool: bool,

    #[serde(default = "default_enabled")]
    pub vision_tool: bool,

    /// Required for the code-block member of section content.
    #[serde(default = "default_enabled")]
    pub code_input: bool,
}

impl PluginsConfig {
    /// Names of enabled plugins, in registration order.
    #[must_use]
    pub fn enabled(&self) -> Vec<&'static str> {
        let mut plugins = Vec::new();
        if self.structure_tool {
            plugins.push("structureTool");
        }
        if self.vision_tool {
            plugins.push("visionTool");
        }
        if self.code_input {
            plugins.push("codeInput");
        }
        plugins
    }
}

impl Default for PluginsConfig {
    fn default() -> Self {
        Self {
            structure_tool: true,
            vision_tool: true,
            code_input: true,
        }
    }
}
