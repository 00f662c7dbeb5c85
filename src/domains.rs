use anyhow::Context;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader, Lines};
use crate::Result;

/// Lazy reader over a domain list file.
///
/// Yields one trimmed domain per non-empty line, in file order. The file
/// handle is held until the reader is dropped.
pub struct DomainList {
    lines: Lines<BufReader<File>>,
}

impl DomainList {
    /// Open a domain list file. Failing to open it is fatal for the caller.
    pub async fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .await
            .with_context(|| format!("failed to open domain list {}", path.display()))?;

        Ok(DomainList {
            lines: BufReader::new(file).lines(),
        })
    }

    /// Next domain from the file, skipping lines that are empty after
    /// trimming leading/trailing whitespace. Returns `None` at end of file.
    pub async fn next_domain(&mut self) -> Result<Option<String>> {
        while let Some(line) = self.lines.next_line().await? {
            let domain = line.trim();
            if !domain.is_empty() {
                return Ok(Some(domain.to_string()));
            }
        }
        Ok(None)
    }
}
