use std::path::PathBuf;

use dialoguer::Input;

use crate::error::Result;
use crate::settings::{shellexpand_path, SettingsFile};

pub fn run(file: &SettingsFile, data_dir: Option<String>) -> Result<()> {
    let mut settings = file.load();

    if let Some(dir) = data_dir {
        settings.data_dir = shellexpand_path(&dir);
    } else if !file.exists() {
        // First run: confirm the data directory
        let chosen: String = Input::new()
            .with_prompt("Data directory")
            .default(settings.data_dir.clone())
            .interact_text()?;
        settings.data_dir = shellexpand_path(chosen.trim());
    }

    let resolved = PathBuf::from(&settings.data_dir);
    std::fs::create_dir_all(&resolved)?;
    file.save(&settings)?;
    log::info!("settings saved with data dir {}", resolved.display());

    println!("Initialized cgpa at {}", resolved.display());
    println!("Results file: {}", settings.store_path().display());
    Ok(())
}
