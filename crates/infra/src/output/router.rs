// crates/infra/src/output/router.rs
use std::{
    fs::{self, File, OpenOptions},
    io::{self, BufWriter, Write},
    mem,
    path::{Path, PathBuf},
};

use line_filter_domain::{OpenMode, OutputSettings};
use line_filter_ports::{DiagnosticSink, OutputSink};
use line_filter_shared_kernel::{ClassifiedLine, OutputError, OutputResult, ValueType};
use log::{debug, trace};

use crate::platform::LINE_ENDING;

/// Opens the stream backing one category file.
pub trait ChannelOpener {
    type Writer: Write;

    fn open(&self, path: &Path, mode: OpenMode) -> io::Result<Self::Writer>;
}

/// Buffered local files, truncated or appended per [`OpenMode`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FileOpener;

impl ChannelOpener for FileOpener {
    type Writer = BufWriter<File>;

    fn open(&self, path: &Path, mode: OpenMode) -> io::Result<Self::Writer> {
        let mut options = OpenOptions::new();
        match mode {
            OpenMode::Overwrite => options.write(true).create(true).truncate(true),
            OpenMode::Append => options.append(true).create(true),
        };
        let file = options.open(path)?;
        debug!("opened {} ({mode:?})", path.display());
        Ok(BufWriter::new(file))
    }
}

/// State of one category's output file.
#[derive(Debug)]
enum Channel<W> {
    /// Nothing written yet; opened on first use.
    Idle,
    Active(W),
    /// Failed once; never retried for the rest of the run.
    Disabled(OutputError),
}

impl<W> Default for Channel<W> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<W> Channel<W> {
    fn take_writer(&mut self) -> Option<W> {
        match mem::take(self) {
            Self::Active(writer) => Some(writer),
            other => {
                *self = other;
                None
            }
        }
    }
}

/// Routes classified lines into `{prefix}{integers|floats|strings}.txt`.
///
/// The output directory is prepared on the first write and any problem with
/// it is fatal. A failure on one category file only disables that category.
pub struct OutputRouter<'a, O: ChannelOpener = FileOpener> {
    settings: OutputSettings,
    dir_ready: bool,
    channels: [Channel<O::Writer>; 3],
    opener: O,
    diagnostics: &'a dyn DiagnosticSink,
}

impl<'a> OutputRouter<'a> {
    pub fn new(settings: OutputSettings, diagnostics: &'a dyn DiagnosticSink) -> Self {
        Self::with_opener(settings, FileOpener, diagnostics)
    }
}

impl<'a, O: ChannelOpener> OutputRouter<'a, O> {
    pub fn with_opener(settings: OutputSettings, opener: O, diagnostics: &'a dyn DiagnosticSink) -> Self {
        Self { settings, dir_ready: false, channels: Default::default(), opener, diagnostics }
    }

    /// Resolved path of the file for `value_type`.
    pub fn output_path(&self, value_type: ValueType) -> PathBuf {
        self.settings.file_path(value_type.file_stem())
    }

    pub fn is_disabled(&self, value_type: ValueType) -> bool {
        matches!(self.channels[value_type.index()], Channel::Disabled(_))
    }

    /// Reason the category was disabled, if it was.
    pub fn disabled_reason(&self, value_type: ValueType) -> Option<&OutputError> {
        match &self.channels[value_type.index()] {
            Channel::Disabled(reason) => Some(reason),
            _ => None,
        }
    }

    fn ensure_out_dir(&mut self) -> OutputResult<()> {
        if self.dir_ready {
            return Ok(());
        }

        let dir = &self.settings.out_dir;
        fs::create_dir_all(dir).map_err(|source| OutputError::from_dir_io(dir, source))?;
        if !dir.is_dir() {
            return Err(OutputError::DirectoryUnusable {
                path: dir.clone(),
                source: io::Error::new(io::ErrorKind::NotADirectory, "output path is not a directory"),
            });
        }
        // Probe writability with a throwaway file; it is removed on drop.
        tempfile::Builder::new()
            .prefix(".line_filter-probe")
            .tempfile_in(dir)
            .map_err(|source| OutputError::from_dir_io(dir, source))?;

        debug!("output directory ready: {}", dir.display());
        self.dir_ready = true;
        Ok(())
    }

    fn write_line(&mut self, value_type: ValueType, text: &str) -> io::Result<()> {
        let idx = value_type.index();
        if matches!(self.channels[idx], Channel::Idle) {
            let path = self.output_path(value_type);
            self.channels[idx] = Channel::Active(self.opener.open(&path, self.settings.open_mode)?);
        }
        if let Channel::Active(writer) = &mut self.channels[idx] {
            writer.write_all(text.as_bytes())?;
            writer.write_all(LINE_ENDING.as_bytes())?;
        }
        Ok(())
    }

    fn disable(&mut self, value_type: ValueType, source: io::Error) {
        let reason = OutputError::Channel { value_type, path: self.output_path(value_type), source };
        self.diagnostics
            .emit(&format!("{reason}. Further values of this type will be skipped."));

        let channel = &mut self.channels[value_type.index()];
        // Close errors are swallowed here.
        if let Some(mut writer) = channel.take_writer() {
            let _ = writer.flush();
        }
        *channel = Channel::Disabled(reason);
    }
}

impl<O: ChannelOpener> OutputSink for OutputRouter<'_, O> {
    fn write(&mut self, line: ClassifiedLine<'_>) -> OutputResult<bool> {
        self.ensure_out_dir()?;

        let value_type = line.value_type;
        if self.is_disabled(value_type) {
            trace!("suppressed {value_type} line");
            return Ok(false);
        }

        match self.write_line(value_type, line.output_text()) {
            Ok(()) => Ok(true),
            Err(source) => {
                self.disable(value_type, source);
                Ok(false)
            }
        }
    }

    fn close(&mut self) -> OutputResult<()> {
        let mut failures = Vec::new();

        for value_type in ValueType::ALL {
            let Some(mut writer) = self.channels[value_type.index()].take_writer() else {
                continue;
            };
            if let Err(source) = writer.flush() {
                failures.push(OutputError::Channel { value_type, path: self.output_path(value_type), source });
            }
        }

        let mut failures = failures.into_iter();
        match failures.next() {
            None => Ok(()),
            Some(first) => Err(OutputError::Close { first: Box::new(first), suppressed: failures.collect() }),
        }
    }
}
