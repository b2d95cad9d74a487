use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Host environment probes used by the installer.
///
/// Kept behind a trait so tests can substitute a fake host instead of
/// touching the real PATH or home directory.
pub trait HostEnv {
    /// The invoking user's home directory, if one can be determined.
    fn home_dir(&self) -> Option<PathBuf>;

    /// Whether `name` resolves to an executable on the command search path.
    fn has_command(&self, name: &str) -> bool;

    /// Whether a working Python 3 interpreter is available.
    fn has_python3(&self) -> bool {
        self.has_command("python3")
    }
}

/// The real host: PATH lookups and platform home-directory resolution.
#[derive(Debug, Default)]
pub struct SystemEnv;

impl HostEnv for SystemEnv {
    fn home_dir(&self) -> Option<PathBuf> {
        directories::BaseDirs::new()
            .map(|d| d.home_dir().to_path_buf())
            .or_else(|| std::env::var_os("USERPROFILE").map(PathBuf::from))
    }

    fn has_command(&self, name: &str) -> bool {
        which::which(name).is_ok()
    }

    fn has_python3(&self) -> bool {
        // Actually run a version check rather than trusting the PATH entry.
        Command::new("python3")
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }
}

/// Deterministic host for unit tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct FakeEnv {
    pub home: Option<PathBuf>,
    pub commands: Vec<String>,
}

#[cfg(test)]
impl FakeEnv {
    pub fn new(home: impl Into<PathBuf>, commands: &[&str]) -> Self {
        Self {
            home: Some(home.into()),
            commands: commands.iter().map(|c| c.to_string()).collect(),
        }
    }
}

#[cfg(test)]
impl HostEnv for FakeEnv {
    fn home_dir(&self) -> Option<PathBuf> {
        self.home.clone()
    }

    fn has_command(&self, name: &str) -> bool {
        self.commands.iter().any(|c| c == name)
    }
}
