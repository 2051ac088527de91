/*
MIT License
Copyright (c) 2021 Germán Molina
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:
The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.
THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

use tracing::warn;

/// One `key = value` line of a configuration file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Entry<'a> {
    /// The line in which the entry was found (counted from 1)
    pub line: usize,

    /// The key, trimmed (case is preserved)
    pub key: &'a str,

    /// The value, trimmed
    pub value: &'a str,
}

/// Scans `key = value` text.
///
/// Blank lines and lines starting with `#` are skipped. Lines
/// without an `=` are reported and skipped. Everything after the
/// first `=` belongs to the value.
pub(crate) struct ConfigScanner<'a> {
    /// The line being read (counted from 1)
    line: usize,

    source: &'a str,

    current_index: usize,

    start_index: usize,

    finished: bool,
}

impl<'a> ConfigScanner<'a> {
    /// Creates a new [`ConfigScanner`]
    pub(crate) fn new(source: &'a str) -> Self {
        Self {
            finished: source.is_empty(),
            source,
            line: 1,
            current_index: 0,
            start_index: 0,
        }
    }

    /// Advances one byte in the `source`. If it reaches the end,
    /// it marks the [`ConfigScanner`] as finished.
    fn advance(&mut self) {
        if self.finished {
            return;
        }
        self.current_index += 1;
        if self.current_index >= self.source.len() {
            self.finished = true;
        }
    }

    /// Gets the `char` at the `current_index`. Returns `\0` if
    /// finished.
    fn peek(&self) -> char {
        if self.finished {
            return '\0';
        }
        self.source.as_bytes()[self.current_index] as char
    }

    /// Skips white spaces, empty lines and comments
    fn skip_white_space(&mut self) {
        loop {
            match self.peek() {
                ' ' | '\r' | '\t' => self.advance(),
                '\n' => {
                    self.line += 1;
                    self.advance();
                }
                '#' => {
                    while self.peek() != '\n' && !self.finished {
                        self.advance();
                    }
                }
                _ => return,
            }
        }
    }

    /// Consumes the rest of the line, without the `\n`, and
    /// returns it.
    fn rest_of_line(&mut self) -> &'a str {
        while self.peek() != '\n' && !self.finished {
            self.advance();
        }
        &self.source[self.start_index..self.current_index]
    }

    /// Updates the start index; i.e., sets the `start_index` to the `current_index`
    fn update_start_index(&mut self) {
        self.start_index = self.current_index;
    }

    /// Scans the whole source
    pub(crate) fn entries(&mut self) -> Vec<Entry<'a>> {
        let mut ret = Vec::new();
        loop {
            self.skip_white_space();
            self.update_start_index();
            if self.finished {
                break;
            }

            let line = self.line;
            let text = self.rest_of_line();
            match text.split_once('=') {
                Some((key, value)) => {
                    let key = key.trim();
                    if key.is_empty() {
                        warn!("Line {}: no key before '='... ignoring it", line);
                        continue;
                    }
                    ret.push(Entry {
                        line,
                        key,
                        value: value.trim(),
                    })
                }
                None => warn!("Line {}: expected 'key = value' but found '{}'", line, text.trim()),
            }
        }
        ret
    }
}
