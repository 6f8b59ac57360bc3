use std::{
    fmt,
    path::{Path, PathBuf},
};

use common::error::{AppError, RecordError};
use futures::{stream, Stream};
use tokio::{
    fs::File,
    io::{AsyncBufReadExt, BufReader},
};

const PREVIEW_CHARS: usize = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DumpKind {
    Authors,
    Works,
}

impl fmt::Display for DumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DumpKind::Authors => write!(f, "authors"),
            DumpKind::Works => write!(f, "works"),
        }
    }
}

/// One raw line of a dump file, without its line terminator.
#[derive(Debug, Clone)]
pub struct DumpLine {
    pub number: usize,
    bytes: Vec<u8>,
}

impl DumpLine {
    pub fn new(number: usize, bytes: Vec<u8>) -> Self {
        Self { number, bytes }
    }

    pub fn text(&self) -> Result<&str, RecordError> {
        Ok(std::str::from_utf8(&self.bytes)?)
    }

    pub fn is_blank(&self) -> bool {
        self.bytes.iter().all(u8::is_ascii_whitespace)
    }

    /// Short single-line excerpt for log output.
    pub fn preview(&self) -> String {
        String::from_utf8_lossy(&self.bytes)
            .chars()
            .take(PREVIEW_CHARS)
            .collect::<String>()
            .replace('\t', " ")
    }
}

/// Forward-only reader over a line-delimited dump file. Lines are read as raw
/// bytes so a single badly encoded line does not end the pass.
pub struct DumpReader {
    path: PathBuf,
    reader: BufReader<File>,
    lines_read: usize,
}

impl DumpReader {
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).await?;

        Ok(Self {
            path,
            reader: BufReader::new(file),
            lines_read: 0,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn next_line(&mut self) -> Result<Option<DumpLine>, AppError> {
        let mut bytes = Vec::new();
        if self.reader.read_until(b'\n', &mut bytes).await? == 0 {
            return Ok(None);
        }

        while matches!(bytes.last(), Some(b'\n' | b'\r')) {
            bytes.pop();
        }

        self.lines_read += 1;
        Ok(Some(DumpLine::new(self.lines_read, bytes)))
    }

    /// Converts the reader into a stream of lines. A read error is yielded
    /// once and ends the stream.
    pub fn into_stream(self) -> impl Stream<Item = Result<DumpLine, AppError>> {
        stream::unfold(Some(self), |state| async move {
            let mut reader = state?;
            match reader.next_line().await {
                Ok(Some(line)) => Some((Ok(line), Some(reader))),
                Ok(None) => None,
                Err(err) => Some((Err(err), None)),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;
    use std::io::Write;

    fn dump_file(contents: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents).expect("write dump");
        file
    }

    #[tokio::test]
    async fn reads_lines_with_numbers_and_strips_terminators() {
        let file = dump_file(b"first\r\nsecond\n\nlast");
        let mut reader = DumpReader::open(file.path()).await.expect("open dump");

        let mut lines = Vec::new();
        while let Some(line) = reader.next_line().await.expect("read line") {
            lines.push((line.number, line.text().expect("utf8").to_string()));
        }

        assert_eq!(
            lines,
            vec![
                (1, "first".to_string()),
                (2, "second".to_string()),
                (3, String::new()),
                (4, "last".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn invalid_utf8_line_does_not_stop_reading() {
        let file = dump_file(b"ok\n\xff\xfe\nafter\n");
        let reader = DumpReader::open(file.path()).await.expect("open dump");

        let lines: Vec<DumpLine> = reader
            .into_stream()
            .map(|line| line.expect("read line"))
            .collect()
            .await;

        assert_eq!(lines.len(), 3);
        assert!(matches!(lines[1].text(), Err(RecordError::InvalidUtf8(_))));
        assert_eq!(lines[2].text().expect("utf8"), "after");
    }

    #[tokio::test]
    async fn opening_missing_file_fails() {
        let dir = tempfile::tempdir().expect("temp dir");

        let result = DumpReader::open(dir.path().join("missing.txt")).await;

        assert!(matches!(result, Err(AppError::Io(_))));
    }

    #[test]
    fn blank_and_preview() {
        let blank = DumpLine::new(1, b"  \t ".to_vec());
        let long = DumpLine::new(2, "x\ty".repeat(100).into_bytes());

        assert!(blank.is_blank());
        assert!(!long.is_blank());
        assert_eq!(long.preview().chars().count(), PREVIEW_CHARS);
        assert!(!long.preview().contains('\t'));
    }
}
