// crates/usecase/src/lines.rs
use std::{
    collections::VecDeque,
    io::{self, BufRead},
    str,
};

/// Lines of `reader`, terminated by `\n`, `\r\n` or a lone `\r`.
///
/// Terminators are not part of the yielded text. A final line without a
/// terminator is still yielded; an empty trailing segment is not.
pub fn text_lines<R: BufRead>(reader: R) -> TextLines<R> {
    TextLines { reader, buf: Vec::new(), pending: VecDeque::new() }
}

pub struct TextLines<R> {
    reader: R,
    buf: Vec<u8>,
    pending: VecDeque<String>,
}

impl<R: BufRead> Iterator for TextLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(line) = self.pending.pop_front() {
            return Some(Ok(line));
        }

        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                let mut chunk = self.buf.as_slice();
                if let Some(rest) = chunk.strip_suffix(b"\n") {
                    chunk = rest;
                }
                if let Some(rest) = chunk.strip_suffix(b"\r") {
                    chunk = rest;
                }
                let text = match str::from_utf8(chunk) {
                    Ok(text) => text,
                    Err(err) => return Some(Err(io::Error::new(io::ErrorKind::InvalidData, err))),
                };
                self.pending.extend(text.split('\r').map(str::to_owned));
                self.pending.pop_front().map(Ok)
            }
            Err(err) => Some(Err(err)),
        }
    }
}
