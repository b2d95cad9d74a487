use std::process::ExitCode;

fn main() -> ExitCode {
    skillpack::run_installer(include_str!("../../plugins/domain-research/plugin.toml"))
}
