use std::{env, fs, io, path::Path, path::PathBuf};

use directories::BaseDirs;

use crate::db::REDB_FILE;

/// Resolve and create the application data directory.
///
/// `--data-dir` overrides the OS data directory; `--ephemeral` places the
/// directory under the OS temporary directory (or under the custom
/// directory when both are given).
pub fn setup_data_dir(
    app_name: &str,
    custom_dir: Option<PathBuf>,
    ephemeral: bool,
) -> io::Result<PathBuf> {
    let data_dir = match (custom_dir, ephemeral) {
        (Some(base), true) => base.join("ephemeral"),
        (Some(base), false) => base,
        (None, true) => env::temp_dir().join(app_name),
        (None, false) => BaseDirs::new()
            .map(|base_dirs| base_dirs.data_dir().join(app_name))
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "Base directories not found"))?,
    };

    fs::create_dir_all(&data_dir)?;
    Ok(data_dir)
}

/// Delete the registration database file in `data_dir`, if present.
pub fn reset_db(data_dir: &Path) -> io::Result<()> {
    let db_file = data_dir.join(REDB_FILE);
    if db_file.exists() {
        fs::remove_file(db_file)?;
    }
    Ok(())
}
