use std::fs;
use std::path::Path;

use crate::error::InstallError;
use crate::manifest::PluginManifest;

/// Recursively mirror `src` into `dest`, creating directories as needed.
///
/// Existing destination files are overwritten; files already present at the
/// destination but absent from the source are left alone (the copy is
/// additive, not synchronizing). Files whose extension is listed in the
/// manifest are marked executable after copy. Returns the number of files
/// copied.
pub fn copy_tree(
    src: &Path,
    dest: &Path,
    manifest: &PluginManifest,
) -> Result<usize, InstallError> {
    fs::create_dir_all(dest).map_err(|e| InstallError::io("creating directory", dest, e))?;

    let entries =
        fs::read_dir(src).map_err(|e| InstallError::io("reading directory", src, e))?;

    let mut copied = 0;
    for entry in entries {
        let entry = entry.map_err(|e| InstallError::io("reading directory", src, e))?;
        let src_path = entry.path();
        let dest_path = dest.join(entry.file_name());

        let file_type = entry
            .file_type()
            .map_err(|e| InstallError::io("inspecting", &src_path, e))?;

        if file_type.is_dir() {
            copied += copy_tree(&src_path, &dest_path, manifest)?;
        } else {
            fs::copy(&src_path, &dest_path)
                .map_err(|e| InstallError::io("copying", &src_path, e))?;
            copied += 1;

            if manifest.is_executable_name(&src_path) {
                mark_executable(&dest_path)?;
            }
        }
    }

    Ok(copied)
}

#[cfg(unix)]
fn mark_executable(path: &Path) -> Result<(), InstallError> {
    use std::os::unix::fs::PermissionsExt;

    let perms = fs::Permissions::from_mode(0o755);
    fs::set_permissions(path, perms)
        .map_err(|e| InstallError::io("setting permissions on", path, e))
}

#[cfg(not(unix))]
fn mark_executable(_path: &Path) -> Result<(), InstallError> {
    // Windows has no execute bit; nothing to fix up.
    Ok(())
}
