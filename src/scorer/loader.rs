use crate::error::{BombeError, BombeResult};
use crate::scorer::TrigramModel;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

impl TrigramModel {
    /// Load a corpus of `<3 letters> <integer frequency>` lines. A missing
    /// resource or any malformed line is fatal; there is nothing useful to
    /// do with a partial language model.
    pub fn from_path<P: AsRef<Path>>(path: P) -> BombeResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            BombeError::Corpus(format!(
                "could not open trigram corpus at '{}': {}",
                path.display(),
                e
            ))
        })?;
        let model = Self::from_reader(file)?;
        debug!("loaded {} trigrams from {}", model.len(), path.display());
        Ok(model)
    }

    pub fn from_reader<R: Read>(reader: R) -> BombeResult<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(b' ')
            .has_headers(false)
            .from_reader(reader);

        let mut counts = Vec::new();
        for (row, record) in rdr.records().enumerate() {
            let record = record?;
            if record.len() != 2 {
                return Err(BombeError::Corpus(format!(
                    "line {}: expected '<trigram> <count>', got {} fields",
                    row + 1,
                    record.len()
                )));
            }
            let gram = record[0].trim().as_bytes();
            let &[a, b, c] = gram else {
                return Err(BombeError::Corpus(format!(
                    "line {}: '{}' is not a 3-letter sequence",
                    row + 1,
                    &record[0]
                )));
            };
            if !gram.iter().all(u8::is_ascii_uppercase) {
                return Err(BombeError::Corpus(format!(
                    "line {}: '{}' contains non-alphabet symbols",
                    row + 1,
                    &record[0]
                )));
            }
            let freq: u64 = record[1].trim().parse().map_err(|_| {
                BombeError::Corpus(format!(
                    "line {}: '{}' is not an integer frequency",
                    row + 1,
                    &record[1]
                ))
            })?;
            counts.push(([a, b, c], freq));
        }

        Self::from_counts(counts)
    }
}
