//! NDJSON (Newline Delimited JSON) output

use crate::etl::Loader;

use eyre::{Context, Result};
use serde::Serialize;
use std::io::Write;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq)]
enum Target {
    File(PathBuf),
    Stdout,
}

/// Write records as NDJSON to a file or stdout
pub struct NdjsonWriter<T> {
    target: Target,
    _phantom: PhantomData<fn(T)>,
}

impl<T: Serialize> NdjsonWriter<T> {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            target: Target::File(path.as_ref().to_path_buf()),
            _phantom: PhantomData,
        }
    }

    pub fn stdout() -> Self {
        Self {
            target: Target::Stdout,
            _phantom: PhantomData,
        }
    }

    /// `-` selects stdout, anything else is a file path
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "-" => Self::stdout(),
            path => Self::new(path),
        }
    }

    pub fn is_stdout(&self) -> bool {
        self.target == Target::Stdout
    }

    fn render(items: &[T]) -> Result<String> {
        let mut out = String::new();
        for item in items {
            out.push_str(&serde_json::to_string(item)?);
            out.push('\n');
        }
        Ok(out)
    }

    /// Write records as NDJSON, replacing any existing file
    pub fn write(&self, items: &[T]) -> Result<()> {
        let content = Self::render(items)?;

        match &self.target {
            Target::File(path) => {
                if let Some(parent) = path.parent()
                    && !parent.as_os_str().is_empty()
                {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(path, content)
                    .with_context(|| format!("Failed to write NDJSON file: {}", path.display()))?;
            }
            Target::Stdout => {
                let mut stdout = std::io::stdout().lock();
                stdout
                    .write_all(content.as_bytes())
                    .and_then(|_| stdout.flush())
                    .with_context(|| "Failed to write NDJSON to stdout")?;
            }
        }

        Ok(())
    }
}

impl<T: Serialize + Send> Loader for NdjsonWriter<T> {
    type Item = T;

    async fn load(&self, items: Vec<Self::Item>) -> Result<usize> {
        self.write(&items)?;
        Ok(items.len())
    }
}
