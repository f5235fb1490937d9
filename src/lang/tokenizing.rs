use crate::{
    lang::source_buffer::{SourceBuffer, SourceLocation},
    runtime::error::{self, ErrorKind, ScriptError},
};

/// Check if the given character separates words.
fn is_whitespace(next: &char) -> bool {
    *next == ' ' || *next == '\t' || *next == '\r' || *next == '\n'
}

/// Splits a piece of source text into words on demand.  Words never get tokenized ahead of time
/// because the words being executed may consume raw input themselves, for example a string
/// literal or a comment.
pub struct Lexer {
    buffer: SourceBuffer,
}

impl Lexer {
    /// Create a lexer over the given text.  The path is only used to tag locations.
    pub fn new(path: &str, source: &str) -> Lexer {
        Lexer {
            buffer: SourceBuffer::new(path, source),
        }
    }

    /// Where the cursor currently is.
    pub fn location(&self) -> &SourceLocation {
        self.buffer.location()
    }

    /// Skip over whitespace in the text.  Stopping only at either the end of the buffer or the
    /// next non-whitespace character.
    fn skip_whitespace(&mut self) {
        while let Some(next) = self.buffer.peek_next()
            && is_whitespace(&next)
        {
            let _ = self.buffer.next_char();
        }
    }

    /// Get the next whitespace delimited word along with the location it started at.  The single
    /// whitespace character following the word is consumed as well.
    ///
    /// Returns None once only whitespace remains.
    pub fn next_word(&mut self) -> Option<(SourceLocation, String)> {
        self.skip_whitespace();

        if self.buffer.is_at_end() {
            return None;
        }

        let location = self.buffer.location().clone();
        let mut text = String::new();

        while let Some(next) = self.buffer.next_char() {
            if is_whitespace(&next) {
                break;
            }

            text.push(next);
        }

        Some((location, text))
    }

    /// Collect the raw characters from the cursor up to, but not including, the delimiter.  The
    /// delimiter itself is consumed.
    ///
    /// Fails if the text ends before the delimiter is found.
    pub fn next_chars_up_to(&mut self, delimiter: char) -> error::Result<String> {
        let location = self.buffer.location().clone();
        let mut text = String::new();

        loop {
            match self.buffer.next_char() {
                Some(next) if next == delimiter => return Ok(text),
                Some(next) => text.push(next),
                None => {
                    return ScriptError::new_as_result(
                        Some(location),
                        ErrorKind::UnexpectedEndOfInput,
                        None,
                    );
                }
            }
        }
    }
}
