use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::data::DataDirectory;

/// Size-based trimming of the log file, applied once at startup
#[derive(Debug, Clone, Copy)]
struct LogRotation {
    /// Trim once the file grows past this many bytes
    max_size: u64,
    /// Bytes of the newest entries kept after trimming
    keep_size: u64,
}

impl Default for LogRotation {
    fn default() -> Self {
        Self {
            max_size: 5 * 1024 * 1024,
            keep_size: 1024 * 1024,
        }
    }
}

impl LogRotation {
    /// Returns whether the file was trimmed.
    fn apply(&self, path: &Path) -> io::Result<bool> {
        let len = match fs::metadata(path) {
            Ok(metadata) => metadata.len(),
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
            Err(e) => return Err(e),
        };
        if len <= self.max_size {
            return Ok(false);
        }

        let mut tail = Vec::new();
        {
            let mut file = File::open(path)?;
            file.seek(SeekFrom::Start(len.saturating_sub(self.keep_size)))?;
            file.read_to_end(&mut tail)?;
        }

        // Start at a line boundary
        let first_line = tail
            .iter()
            .position(|&b| b == b'\n')
            .map_or(0, |i| i + 1);

        let mut file = File::create(path)?;
        writeln!(file, "[loansim] log trimmed to the newest {} bytes", self.keep_size)?;
        file.write_all(&tail[first_line..])?;
        Ok(true)
    }
}

/// Hands out writers that share one open log file
#[derive(Clone)]
struct SharedLogFile(Arc<Mutex<File>>);

impl SharedLogFile {
    fn lock(&self) -> io::Result<std::sync::MutexGuard<'_, File>> {
        self.0
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))
    }
}

impl Write for SharedLogFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.lock()?.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.lock()?.flush()
    }
}

impl<'a> MakeWriter<'a> for SharedLogFile {
    type Writer = SharedLogFile;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Filter used when `RUST_LOG` is unset
fn default_filter(level: &str) -> String {
    format!("loansim={level},loansim_core=warn")
}

/// Send `tracing` output to the data directory's log file.
///
/// The file is trimmed to its newest 1 MB once it passes 5 MB. `RUST_LOG`
/// takes precedence over `level`.
pub fn init_logging(data_dir: &DataDirectory, level: &str) -> color_eyre::Result<()> {
    data_dir.init()?;
    let log_path = data_dir.log_path();

    if let Err(e) = LogRotation::default().apply(&log_path) {
        eprintln!("Warning: could not trim {}: {}", log_path.display(), e);
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(SharedLogFile(Arc::new(Mutex::new(file))))
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()?;

    tracing::info!(log_path = %log_path.display(), "Logging initialized");
    Ok(())
}
