//! Splits a raw text buffer into logical lines.
//!
//! `\r\n`, `\n` and a lone `\r` each end one line. Blank lines in the middle
//! of the input survive as empty slices; a run of terminators that reaches
//! the end of the input produces no lines at all.

/// Borrowing iterator over the logical lines of a buffer.
#[derive(Debug, Clone)]
pub struct LineSplitter<'a> {
    rest: &'a str,
}

impl<'a> LineSplitter<'a> {
    pub fn new(buffer: &'a str) -> Self {
        Self { rest: buffer }
    }
}

impl<'a> Iterator for LineSplitter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.trim_start_matches(['\r', '\n']).is_empty() {
            self.rest = "";
            return None;
        }

        let Some(end) = self.rest.find(['\r', '\n']) else {
            let line = self.rest;
            self.rest = "";
            return Some(line);
        };

        let line = &self.rest[..end];
        let bytes = self.rest.as_bytes();
        let skip = if bytes[end] == b'\r' && bytes.get(end + 1) == Some(&b'\n') {
            2
        } else {
            1
        };
        self.rest = &self.rest[end + skip..];
        Some(line)
    }
}

/// Collects every line of `buffer`. Empty input yields no lines.
pub fn split_lines(buffer: &str) -> Vec<&str> {
    LineSplitter::new(buffer).collect()
}
