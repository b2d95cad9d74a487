pub mod error;
pub mod host;
pub mod install;
pub mod manifest;

pub use error::InstallError;
pub use install::{Installer, run_installer};
pub use manifest::PluginManifest;
