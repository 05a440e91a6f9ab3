// crates/infra/src/persistence/file_reader.rs
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use line_filter_ports::LineSource;
use line_filter_shared_kernel::{InputError, InputResult};

/// Opens input files from the local filesystem with buffered reading.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileLineSource;

impl LineSource for FileLineSource {
    fn open(&self, path: &Path) -> InputResult<Box<dyn BufRead>> {
        let file = File::open(path).map_err(|source| InputError::from_io(path, source))?;
        Ok(Box::new(BufReader::new(file)))
    }
}
