use std::path::Path;

use serde::Deserialize;

use crate::error::InstallError;

/// Parsed `plugin.toml` describing one installable skill plugin.
///
/// Each installer binary embeds its manifest with `include_str!`, so the
/// two installers share all logic and differ only in this data.
#[derive(Debug, Clone, Deserialize)]
pub struct PluginManifest {
    /// Plugin name, also the directory name under `plugins/`.
    pub name: String,
    /// Skill directory name copied under `<cli-home>/skills/`.
    pub skill: String,
    #[serde(default)]
    pub description: Option<String>,
    /// File extensions marked executable (mode 755) after copy.
    #[serde(default = "default_executable_extensions")]
    pub executable_extensions: Vec<String>,
    /// When set, the installer probes for python3 and reports on it.
    #[serde(default)]
    pub requires_python: bool,
    #[serde(default)]
    pub components: Vec<ComponentDef>,
    #[serde(default)]
    pub quick_start: Vec<String>,
    #[serde(default)]
    pub setup: Vec<String>,
    #[serde(default)]
    pub usage: Vec<String>,
}

/// One bundled asset called out in the success banner.
#[derive(Debug, Clone, Deserialize)]
pub struct ComponentDef {
    pub path: String,
    #[serde(default)]
    pub description: Option<String>,
}

fn default_executable_extensions() -> Vec<String> {
    vec!["sh".to_string()]
}

impl PluginManifest {
    pub fn parse(raw: &str) -> Result<Self, InstallError> {
        Ok(toml::from_str(raw)?)
    }

    /// Whether a copied file should be marked executable at the destination.
    pub fn is_executable_name(&self, file_name: &Path) -> bool {
        file_name
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.executable_extensions.iter().any(|e| e == ext))
    }
}
