use std::fs::File;
use std::io;
use std::path::Path;

use csv::ReaderBuilder;

use crate::error::MiningError;

/// Reads transactions from comma-separated input, one record per line, no
/// header. Pulled to exhaustion exactly once; mining materializes the records
/// anyway, so `records` hands back the whole batch.
pub struct CsvRecordSource<R: io::Read> {
    reader: csv::Reader<R>,
}

impl CsvRecordSource<File> {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, MiningError> {
        let file = File::open(path.as_ref()).map_err(|e| {
            MiningError::Input(format!("cannot open {}: {}", path.as_ref().display(), e))
        })?;
        Ok(Self::from_reader(file))
    }
}

impl CsvRecordSource<io::Stdin> {
    pub fn stdin() -> Self {
        Self::from_reader(io::stdin())
    }
}

impl<R: io::Read> CsvRecordSource<R> {
    pub fn from_reader(reader: R) -> Self {
        // Records are plain label lists of varying length.
        let reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);
        CsvRecordSource { reader }
    }

    pub fn records(self) -> Result<Vec<Vec<String>>, MiningError> {
        let mut records = Vec::new();
        for record in self.reader.into_records() {
            let record =
                record.map_err(|e| MiningError::Input(format!("malformed record: {}", e)))?;
            records.push(record.iter().map(str::to_string).collect());
        }
        Ok(records)
    }
}
