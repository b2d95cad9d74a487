use std::path::Path;

use crate::install::detect::CliKind;
use crate::manifest::PluginManifest;

const RULE: &str =
    "================================================================================";

pub fn start_banner(manifest: &PluginManifest) -> String {
    format!("\nInstalling {} plugin...\n", manifest.name)
}

pub fn detected_line(clis: &[CliKind]) -> String {
    let names: Vec<&str> = clis.iter().map(|cli| cli.command()).collect();
    format!("Detected CLIs: {}", names.join(", "))
}

pub fn installing_line(cli: CliKind) -> String {
    format!("\nInstalling to {cli}...")
}

pub fn installed_line(target: &Path) -> String {
    format!("   Installed skill to: {}", target.display())
}

/// Printed before exiting when neither supported CLI resolves.
pub fn no_cli_guidance() -> String {
    [
        "Warning: No supported CLI found (claude or codex)",
        "   Please install Claude Code first: npm install -g @anthropic/claude-code",
    ]
    .join("\n")
}

/// Final multi-line summary.
///
/// `python_present` is `None` for plugins that do not bundle Python scripts;
/// `Some(false)` appends the missing-interpreter warning.
pub fn success_banner(manifest: &PluginManifest, python_present: Option<bool>) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(RULE);
    out.push_str(&format!("\n  {} installed successfully!\n", manifest.name));
    out.push_str(RULE);
    out.push('\n');

    if !manifest.components.is_empty() {
        out.push_str("\n  Components:\n");
        for component in &manifest.components {
            match &component.description {
                Some(desc) => out.push_str(&format!("    - {:<18} - {desc}\n", component.path)),
                None => out.push_str(&format!("    - {}\n", component.path)),
            }
        }
    }

    push_numbered(&mut out, "Setup", &manifest.setup);
    push_plain(&mut out, "Usage", &manifest.usage);
    push_numbered(&mut out, "Quick Start", &manifest.quick_start);

    if python_present == Some(false) {
        out.push_str("\n  Warning: Python 3 not found. Please install Python 3.10+\n");
    }

    out.push('\n');
    out.push_str(RULE);
    out.push('\n');
    out
}

fn push_numbered(out: &mut String, title: &str, lines: &[String]) {
    if lines.is_empty() {
        return;
    }
    out.push_str(&format!("\n  {title}:\n"));
    for (i, line) in lines.iter().enumerate() {
        out.push_str(&format!("    {}. {line}\n", i + 1));
    }
}

fn push_plain(out: &mut String, title: &str, lines: &[String]) {
    if lines.is_empty() {
        return;
    }
    out.push_str(&format!("\n  {title}:\n"));
    for line in lines {
        out.push_str(&format!("    {line}\n"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest(extra: &str) -> PluginManifest {
        PluginManifest::parse(&format!("name = \"demo\"\nskill = \"demo\"\n{extra}"))
            .unwrap()
    }

    #[test]
    fn detected_line_joins_cli_names() {
        assert_eq!(
            detected_line(&[CliKind::Claude, CliKind::Codex]),
            "Detected CLIs: claude, codex"
        );
    }

    #[test]
    fn guidance_names_the_primary_cli_installer() {
        let guidance = no_cli_guidance();
        assert!(guidance.contains("No supported CLI found"));
        assert!(guidance.contains("npm install -g @anthropic/claude-code"));
    }

    #[test]
    fn success_banner_names_the_plugin() {
        let banner = success_banner(&manifest(""), None);
        assert!(banner.contains("demo installed successfully!"));
        assert!(!banner.contains("Warning: Python 3 not found"));
        // Empty sections are omitted entirely.
        assert!(!banner.contains("Components:"));
        assert!(!banner.contains("Setup:"));
    }

    #[test]
    fn success_banner_lists_components_and_steps() {
        let banner = success_banner(
            &manifest(
                "quick_start = [\"Start claude in any project directory\"]\n\
                 [[components]]\npath = \"SKILL.md\"\ndescription = \"Skill documentation\"\n",
            ),
            None,
        );
        assert!(banner.contains("- SKILL.md"));
        assert!(banner.contains("Skill documentation"));
        assert!(banner.contains("1. Start claude in any project directory"));
    }

    #[test]
    fn success_banner_warns_when_python_missing() {
        let banner = success_banner(&manifest(""), Some(false));
        assert!(banner.contains("Warning: Python 3 not found"));

        let banner = success_banner(&manifest(""), Some(true));
        assert!(!banner.contains("Warning: Python 3 not found"));
    }
}
