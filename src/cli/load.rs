use std::path::PathBuf;

use crate::error::{CgpaError, Result};
use crate::settings::{shellexpand_path, SettingsFile};

pub fn run(file: &SettingsFile, path: &str) -> Result<()> {
    let resolved = PathBuf::from(shellexpand_path(path));
    let mut settings = file.load();
    let store_path = resolved.join(&settings.store_file);

    if !store_path.exists() {
        return Err(CgpaError::Settings(format!(
            "No results file found at {}\nRun `cgpa init --data-dir {}` to start a new one.",
            store_path.display(),
            resolved.display()
        )));
    }

    settings.data_dir = resolved.to_string_lossy().to_string();
    file.save(&settings)?;

    println!("Switched to {}", resolved.display());
    Ok(())
}
