//! Where printed text goes.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Sink for the printer. Fragments arrive in source order.
pub trait Emitter {
    fn emit(&mut self, text: &str);
}

/// Collects the printed source in memory.
#[derive(Default)]
pub struct StringEmitter {
    buffer: String,
}

impl StringEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        StringEmitter {
            buffer: String::with_capacity(capacity),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn output(self) -> String {
        self.buffer
    }
}

impl Emitter for StringEmitter {
    fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
    }
}

/// Streams a rewritten file to disk.
///
/// [`Emitter::emit`] cannot fail, so the first I/O error is held until
/// [`FileEmitter::finish`] and everything after it is dropped.
pub struct FileEmitter {
    writer: BufWriter<File>,
    failed: Option<io::Error>,
}

impl FileEmitter {
    /// Truncate or create `path`.
    pub fn new<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        Ok(FileEmitter {
            writer: BufWriter::new(File::create(path)?),
            failed: None,
        })
    }

    /// Flush, reporting the first write error.
    pub fn finish(mut self) -> io::Result<()> {
        match self.failed.take() {
            Some(err) => Err(err),
            None => self.writer.flush(),
        }
    }
}

impl Emitter for FileEmitter {
    fn emit(&mut self, text: &str) {
        if self.failed.is_none() {
            self.failed = self.writer.write_all(text.as_bytes()).err();
        }
    }
}
