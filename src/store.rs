use std::fs::{File, OpenOptions};
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::error::{CgpaError, Result};
use crate::models::{PersistedRow, SemesterRecord, HEADER};

/// Append-only CSV results file. Opened per operation and closed on drop.
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True when the file exists and holds at least a header.
    pub fn exists(&self) -> bool {
        std::fs::metadata(&self.path)
            .map(|m| m.len() > 0)
            .unwrap_or(false)
    }

    /// Write one row per course. The header goes in only when the file is new or empty.
    pub fn append(&self, record: &SemesterRecord) -> Result<usize> {
        if record.courses.is_empty() {
            return Err(CgpaError::EmptySemester);
        }

        let fresh = !self.exists();
        if fresh {
            if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
        } else {
            self.check_header()?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        if !fresh {
            if let Some(repair) = self.unterminated_tail()? {
                warn!("closing off a truncated row at the end of {}", self.path.display());
                file.write_all(repair)?;
            }
        }
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        if fresh {
            wtr.write_record(HEADER)?;
            info!("created results file at {}", self.path.display());
        }

        let mut written = 0usize;
        for row in record.rows() {
            wtr.serialize(&row)?;
            written += 1;
        }
        wtr.flush()?;

        debug!(
            "appended {written} rows for {} ({})",
            record.matric, record.semester
        );
        Ok(written)
    }

    /// Lazily scan every stored row in append order.
    ///
    /// A missing or empty file yields no rows rather than an error.
    pub fn read_all(&self) -> Result<Rows> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Rows::empty()),
            Err(e) => return Err(e.into()),
        };
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(BufReader::new(file));

        let headers = rdr.headers()?;
        if headers.is_empty() {
            return Ok(Rows::empty());
        }
        if !is_results_header(headers) {
            return Err(CgpaError::UnrecognizedStore(self.path.clone()));
        }

        Ok(Rows {
            inner: Some(rdr.into_deserialize()),
            skipped: 0,
        })
    }

    /// Bytes needed to end a row cut short by an earlier crash, so the
    /// fragment reads back as one malformed record instead of absorbing the
    /// rows appended after it. Quotes inside fields are doubled by the writer,
    /// so an odd quote count means the file stops inside a quoted field.
    fn unterminated_tail(&self) -> Result<Option<&'static [u8]>> {
        let content = std::fs::read(&self.path)?;
        let open_quote = content.iter().filter(|&&b| b == b'"').count() % 2 == 1;
        if open_quote {
            Ok(Some(b"\"\n"))
        } else if content.last().is_some_and(|&b| b != b'\n') {
            Ok(Some(b"\n"))
        } else {
            Ok(None)
        }
    }

    fn check_header(&self) -> Result<()> {
        let file = File::open(&self.path)?;
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(BufReader::new(file));
        if is_results_header(rdr.headers()?) {
            Ok(())
        } else {
            Err(CgpaError::UnrecognizedStore(self.path.clone()))
        }
    }
}

fn is_results_header(headers: &csv::StringRecord) -> bool {
    headers.iter().map(str::trim).eq(HEADER.iter().copied())
}

/// Rows from a full scan. Malformed rows (a truncated tail, a hand edit) are
/// skipped with a warning; I/O failures are yielded as errors.
pub struct Rows {
    inner: Option<csv::DeserializeRecordsIntoIter<BufReader<File>, PersistedRow>>,
    skipped: usize,
}

impl Rows {
    fn empty() -> Self {
        Self {
            inner: None,
            skipped: 0,
        }
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl Iterator for Rows {
    type Item = Result<PersistedRow>;

    fn next(&mut self) -> Option<Self::Item> {
        let inner = self.inner.as_mut()?;
        loop {
            match inner.next()? {
                Ok(row) => return Some(Ok(row)),
                Err(e) if is_malformed(&e) => {
                    let line = e.position().map(|p| p.line()).unwrap_or(0);
                    warn!("skipping malformed results row at line {line}: {e}");
                    self.skipped += 1;
                }
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}

fn is_malformed(err: &csv::Error) -> bool {
    matches!(
        err.kind(),
        csv::ErrorKind::UnequalLengths { .. }
            | csv::ErrorKind::Deserialize { .. }
            | csv::ErrorKind::Utf8 { .. }
    )
}
