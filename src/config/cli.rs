use crate::core::Storage;
use crate::utils::error::{FilterError, Result};
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs::{self, File, OpenOptions};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, BufWriter};

/// Files on the local filesystem. Relative paths resolve against the working
/// directory.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    async fn read_lines(&self, path: &Path, lines: &mut Vec<String>) -> Result<usize> {
        let file = File::open(path).await.map_err(|source| match source.kind() {
            ErrorKind::NotFound => FilterError::InputNotFound {
                path: path.to_path_buf(),
            },
            _ => FilterError::InputError {
                path: path.to_path_buf(),
                source,
            },
        })?;

        let mut reader = BufReader::new(file);
        let mut buf = Vec::new();
        let mut count = 0;

        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .await
                .map_err(|source| FilterError::InputError {
                    path: path.to_path_buf(),
                    source,
                })?;
            if read == 0 {
                break;
            }

            let mut chunk = buf.as_slice();
            if let Some(rest) = chunk.strip_suffix(b"\n") {
                chunk = rest;
            }
            if let Some(rest) = chunk.strip_suffix(b"\r") {
                chunk = rest;
            }

            // a lone `\r` ends a line too
            for piece in chunk.split(|&b| b == b'\r') {
                lines.push(String::from_utf8_lossy(piece).into_owned());
                count += 1;
            }
        }

        Ok(count)
    }

    async fn write_lines(&self, path: &Path, lines: &[&str], append: bool) -> Result<()> {
        let output_error = |source| FilterError::OutputError {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await.map_err(output_error)?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .append(append)
            .truncate(!append)
            .open(path)
            .await
            .map_err(output_error)?;

        let mut writer = BufWriter::new(file);
        for line in lines {
            writer.write_all(line.as_bytes()).await.map_err(output_error)?;
            writer.write_all(b"\n").await.map_err(output_error)?;
        }
        writer.flush().await.map_err(output_error)?;

        Ok(())
    }
}
