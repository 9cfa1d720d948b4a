use std::collections::HashSet;

use crate::error::Result;
use crate::fmt::format_bytes;
use crate::settings::{Settings, SettingsFile};
use crate::store::RecordStore;

pub fn run(file: &SettingsFile, settings: &Settings, store: &RecordStore) -> Result<()> {
    println!(
        "Settings:   {}",
        if file.exists() { "saved" } else { "(defaults)" }
    );
    println!("Data dir:   {}", settings.data_dir);
    println!("Results:    {}", store.path().display());

    if !store.exists() {
        println!();
        println!("No results yet. Run `cgpa` to add a semester.");
        return Ok(());
    }

    let size = std::fs::metadata(store.path())?.len();
    println!("File size:  {}", format_bytes(size));

    let mut rows = store.read_all()?;
    let mut count = 0usize;
    let mut students = HashSet::new();
    let mut semesters = HashSet::new();
    for row in rows.by_ref() {
        let row = row?;
        count += 1;
        semesters.insert((row.matric.clone(), row.semester));
        students.insert(row.matric);
    }

    println!();
    println!("Rows:       {count}");
    println!("Students:   {}", students.len());
    println!("Semesters:  {}", semesters.len());
    if rows.skipped() > 0 {
        println!("Malformed:  {}", rows.skipped());
    }
    Ok(())
}
