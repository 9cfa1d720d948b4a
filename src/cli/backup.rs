use std::path::{Path, PathBuf};

use crate::error::{CgpaError, Result};
use crate::fmt::format_bytes;
use crate::store::RecordStore;

pub fn run(store: &RecordStore, output: Option<String>) -> Result<()> {
    if !store.exists() {
        return Err(CgpaError::Other(format!(
            "Nothing to back up: {} does not exist",
            store.path().display()
        )));
    }

    let dest_path = match output {
        Some(p) => PathBuf::from(p),
        None => {
            let data_dir = store.path().parent().unwrap_or(Path::new("."));
            let backups_dir = data_dir.join("backups");
            std::fs::create_dir_all(&backups_dir)?;
            let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
            backups_dir.join(format!("results-{stamp}.csv"))
        }
    };

    std::fs::copy(store.path(), &dest_path)?;

    let size = std::fs::metadata(&dest_path)?.len();
    println!("Backup saved to {}", dest_path.display());
    println!("Size: {}", format_bytes(size));
    Ok(())
}
