use std::{
    fs::{File, OpenOptions},
    io::{BufRead, BufReader, Write},
    path::{Path, PathBuf},
};

use parking_lot::{Mutex, RwLock};
use tracing::{info, warn};

use crate::{
    calculation::{CalculationRecord, NewCalculation},
    error::HistoryError,
    history_store::{HistoryStore, newest_first},
};

/// History persisted as one JSON record per line.
///
/// Existing records are loaded when the store is opened; new records are
/// appended to the file and kept in memory for listing. The file and the
/// in-memory list always hold records in the same order.
pub struct FileHistoryStore {
    path: PathBuf,
    records: RwLock<Vec<CalculationRecord>>,
    file: Mutex<File>,
}

impl FileHistoryStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, HistoryError> {
        let path = path.as_ref().to_path_buf();
        let open_error = |source| HistoryError::Open {
            path: path.clone(),
            source,
        };

        let records = if path.exists() {
            let file = File::open(&path).map_err(open_error)?;
            read_records(&path, BufReader::new(file))?
        } else {
            Vec::new()
        };

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(open_error)?;

        info!(path = %path.display(), records = records.len(), "opened history file");

        Ok(FileHistoryStore {
            records: RwLock::new(records),
            file: Mutex::new(file),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn read_records(path: &Path, reader: impl BufRead) -> Result<Vec<CalculationRecord>, HistoryError> {
    let mut records = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<CalculationRecord>(&line) {
            Ok(record) => records.push(record),
            Err(error) => warn!(
                path = %path.display(),
                line = index + 1,
                %error,
                "skipping malformed history record"
            ),
        }
    }

    Ok(records)
}

impl HistoryStore for FileHistoryStore {
    fn append(&self, calculation: NewCalculation) -> Result<CalculationRecord, HistoryError> {
        let record = CalculationRecord::new(calculation);
        let mut line = serde_json::to_vec(&record)?;
        line.push(b'\n');

        let mut records = self.records.write();
        append_line(&mut self.file.lock(), &line)?;
        records.push(record.clone());

        Ok(record)
    }

    fn list(&self, limit: usize, offset: usize) -> Result<Vec<CalculationRecord>, HistoryError> {
        Ok(newest_first(&self.records.read(), limit, offset))
    }

    fn count(&self) -> Result<usize, HistoryError> {
        Ok(self.records.read().len())
    }

    fn flush(&self) -> Result<(), HistoryError> {
        let mut file = self.file.lock();
        file.flush()?;
        file.sync_all()?;
        Ok(())
    }
}

/// Writes a whole line or nothing: a failed write is truncated away so the
/// next record starts on a fresh line.
fn append_line(file: &mut File, line: &[u8]) -> Result<(), HistoryError> {
    let len = file.metadata()?.len();

    if let Err(error) = file.write_all(line) {
        warn!(%error, "history write failed, discarding partial line");
        file.set_len(len)?;
        return Err(error.into());
    }

    Ok(())
}
