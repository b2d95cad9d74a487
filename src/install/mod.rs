pub mod copy;
pub mod detect;
pub mod report;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;

pub use detect::{CliKind, detect_clis};

use crate::error::InstallError;
use crate::host::{HostEnv, SystemEnv};
use crate::manifest::PluginManifest;

/// Result of one successful per-CLI install.
#[derive(Debug)]
pub struct InstallOutcome {
    pub cli: CliKind,
    pub skill_dir: PathBuf,
    pub files_copied: usize,
}

#[derive(Debug)]
pub struct InstallReport {
    pub outcomes: Vec<InstallOutcome>,
    /// `None` when the plugin bundles no Python scripts.
    pub python_present: Option<bool>,
}

/// Orchestrates detect → resolve → copy for one plugin.
pub struct Installer<'a> {
    manifest: &'a PluginManifest,
    env: &'a dyn HostEnv,
}

impl<'a> Installer<'a> {
    pub fn new(manifest: &'a PluginManifest, env: &'a dyn HostEnv) -> Self {
        Self { manifest, env }
    }

    /// Install the skill tree at `source` into every detected CLI home.
    ///
    /// Fatal preconditions (no CLI detected, missing source) return before
    /// anything is written.
    pub fn run(&self, source: &Path) -> Result<InstallReport, InstallError> {
        let clis = detect_clis(self.env);
        if clis.is_empty() {
            return Err(InstallError::NoCliDetected);
        }
        println!("{}", report::detected_line(&clis));

        if !source.is_dir() {
            return Err(InstallError::MissingSkillSource {
                path: source.to_path_buf(),
            });
        }

        let mut outcomes = Vec::with_capacity(clis.len());
        for cli in clis {
            println!("{}", report::installing_line(cli));

            let skills_dir = cli.home_dir(self.env)?.join("skills");
            fs::create_dir_all(&skills_dir)
                .map_err(|e| InstallError::io("creating directory", &skills_dir, e))?;

            let skill_dir = skills_dir.join(&self.manifest.skill);
            let files_copied = copy::copy_tree(source, &skill_dir, self.manifest)?;
            tracing::info!(cli = %cli, files = files_copied, target = %skill_dir.display(), "installed skill");

            println!("{}", report::installed_line(&skill_dir));
            outcomes.push(InstallOutcome {
                cli,
                skill_dir,
                files_copied,
            });
        }

        let python_present = self
            .manifest
            .requires_python
            .then(|| self.env.has_python3());
        if python_present == Some(false) {
            tracing::warn!("python3 not found on PATH");
        }

        Ok(InstallReport {
            outcomes,
            python_present,
        })
    }
}

/// Bundled skill tree for `manifest`.
///
/// Prefers `<exe-dir>/../skills/<skill>` (the layout of a packaged plugin),
/// falling back to the repo's `plugins/<name>/skills/<skill>` so the
/// installers also work under `cargo run`.
pub fn bundled_skill_dir(manifest: &PluginManifest) -> PathBuf {
    if let Ok(exe) = std::env::current_exe()
        && let Some(dir) = exe.parent()
    {
        let candidate = dir.join("..").join("skills").join(&manifest.skill);
        if candidate.is_dir() {
            return candidate;
        }
    }

    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("plugins")
        .join(&manifest.name)
        .join("skills")
        .join(&manifest.skill)
}

/// Shared entry point for the installer binaries.
///
/// Exit code contract: 0 on success, 1 on any fatal error.
pub fn run_installer(manifest_toml: &str) -> ExitCode {
    init_logging();

    match try_install(manifest_toml) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if matches!(
                err.downcast_ref::<InstallError>(),
                Some(InstallError::NoCliDetected)
            ) {
                println!("{}", report::no_cli_guidance());
            } else {
                eprintln!("Error: {err:#}");
            }
            ExitCode::FAILURE
        }
    }
}

fn try_install(manifest_toml: &str) -> anyhow::Result<()> {
    let manifest = PluginManifest::parse(manifest_toml)
        .context("reading embedded plugin manifest")?;

    print!("{}", report::start_banner(&manifest));

    let source = bundled_skill_dir(&manifest);
    let outcome = Installer::new(&manifest, &SystemEnv).run(&source)?;

    print!("{}", report::success_banner(&manifest, outcome.python_present));
    Ok(())
}

fn init_logging() {
    use tracing_subscriber::EnvFilter;

    // Diagnostics go to stderr; stdout is reserved for the report itself.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("skillpack=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
