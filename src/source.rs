//! Input sources read whole into memory.

use std::fmt;
use std::path::PathBuf;

use tokio::io::AsyncReadExt;

/// Where a map comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl Source {
    /// Sources for the given paths, or stdin alone when there are none.
    pub fn from_paths(paths: Vec<PathBuf>) -> Vec<Source> {
        if paths.is_empty() {
            vec![Source::Stdin]
        } else {
            paths.into_iter().map(Source::File).collect()
        }
    }

    pub fn label(&self) -> String {
        match self {
            Source::Stdin => "stdin".to_string(),
            Source::File(path) => path.display().to_string(),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Reads the complete content of `source`.
pub async fn read_source(source: &Source) -> std::io::Result<Vec<u8>> {
    match source {
        Source::Stdin => {
            let mut buf = Vec::new();
            tokio::io::stdin().read_to_end(&mut buf).await?;
            Ok(buf)
        }
        Source::File(path) => tokio::fs::read(path).await,
    }
}
