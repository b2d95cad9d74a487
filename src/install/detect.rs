use std::path::PathBuf;

use crate::error::InstallError;
use crate::host::HostEnv;

/// Supported assistant CLIs, in detection order.
pub const SUPPORTED_CLIS: [CliKind; 2] = [CliKind::Claude, CliKind::Codex];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CliKind {
    Claude,
    Codex,
}

impl CliKind {
    /// Executable name probed on the command search path.
    pub fn command(self) -> &'static str {
        match self {
            CliKind::Claude => "claude",
            CliKind::Codex => "codex",
        }
    }

    /// Configuration root for this CLI: `~/.claude` or `~/.codex`.
    pub fn home_dir(self, env: &dyn HostEnv) -> Result<PathBuf, InstallError> {
        let home = env.home_dir().ok_or(InstallError::NoHomeDir)?;
        Ok(home.join(format!(".{}", self.command())))
    }
}

impl std::fmt::Display for CliKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.command())
    }
}

/// Probe the host for each supported CLI, preserving enumeration order.
///
/// A CLI that does not resolve is simply absent from the result; one failed
/// probe never aborts detection of the rest.
pub fn detect_clis(env: &dyn HostEnv) -> Vec<CliKind> {
    SUPPORTED_CLIS
        .iter()
        .copied()
        .filter(|cli| env.has_command(cli.command()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::FakeEnv;

    #[test]
    fn detects_only_present_clis() {
        let env = FakeEnv::new("/home/tester", &["claude"]);
        assert_eq!(detect_clis(&env), vec![CliKind::Claude]);

        let env = FakeEnv::new("/home/tester", &["codex"]);
        assert_eq!(detect_clis(&env), vec![CliKind::Codex]);
    }

    #[test]
    fn detection_preserves_enumeration_order() {
        // PATH hit order must not matter; claude always comes first.
        let env = FakeEnv::new("/home/tester", &["codex", "claude"]);
        assert_eq!(detect_clis(&env), vec![CliKind::Claude, CliKind::Codex]);
    }

    #[test]
    fn empty_when_no_cli_present() {
        let env = FakeEnv::new("/home/tester", &["python3", "git"]);
        assert!(detect_clis(&env).is_empty());
    }

    #[test]
    fn cli_home_is_dot_directory_under_user_home() {
        let env = FakeEnv::new("/home/tester", &[]);
        assert_eq!(
            CliKind::Claude.home_dir(&env).unwrap(),
            PathBuf::from("/home/tester/.claude")
        );
        assert_eq!(
            CliKind::Codex.home_dir(&env).unwrap(),
            PathBuf::from("/home/tester/.codex")
        );
    }

    #[test]
    fn cli_home_fails_without_user_home() {
        let env = FakeEnv::default();
        assert!(matches!(
            CliKind::Claude.home_dir(&env),
            Err(InstallError::NoHomeDir)
        ));
    }
}
