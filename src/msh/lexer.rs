use super::Error;
use super::ErrorKind;
use std::io;
use std::num;
use std::str;

/// a token separator
fn is_separator(b: u8) -> bool {
    b == b' ' || b == b'\t' || b == b'\r' || b == b'\n'
}

/// Splits a reader into whitespace-separated tokens, keeping track of the
/// current line for error messages.
pub(crate) struct Lexer<R> {
    input: R,
    token: Vec<u8>,
    lineno: usize,
}

impl<R: io::BufRead> Lexer<R> {
    pub fn new(input: R) -> Self {
        Lexer {
            input,
            token: Vec::new(),
            lineno: 1,
        }
    }

    pub fn lineno(&self) -> usize {
        self.lineno
    }

    pub fn error(&self, kind: ErrorKind) -> Error {
        Error::new(kind, self.lineno)
    }

    /// BufRead::consume all separators found at the begining of the reader.
    ///
    /// Returns false if the end of input has been reached.
    fn skip_separators(&mut self) -> io::Result<bool> {
        loop {
            let buf = self.input.fill_buf()?;
            let n = buf.len();
            if n == 0 {
                return Ok(false);
            }

            let mut newlines = 0;
            let num_separators = buf
                .iter()
                .take_while(|&&b| is_separator(b))
                .inspect(|&&b| {
                    if b == b'\n' {
                        newlines += 1;
                    }
                })
                .count();
            self.lineno += newlines;
            self.input.consume(num_separators);
            if num_separators < n {
                // Reached a non-separator byte.
                return Ok(true);
            }
        }
    }

    /// Like BufRead::read_until, except it reads til a separator byte.
    fn read_token(&mut self) -> io::Result<()> {
        loop {
            let buf = self.input.fill_buf()?;
            let n = buf.len();
            if n == 0 {
                // This token is the last.
                return Ok(());
            }

            let token_size = buf.iter().position(|&b| is_separator(b)).unwrap_or(n);
            self.token.extend_from_slice(&buf[..token_size]);
            self.input.consume(token_size);
            if token_size < n {
                // Reached a separator.
                return Ok(());
            }
        }
    }

    /// Loads the next token, returns false on end of input.
    fn advance(&mut self) -> Result<bool, Error> {
        self.token.clear();
        let res = match self.skip_separators() {
            Ok(true) => self.read_token().map(|()| true),
            other => other,
        };
        res.map_err(|err| Error::new(ErrorKind::Io(err), self.lineno))
    }

    /// Consumes tokens up to and including `marker`.
    ///
    /// Returns false if the end of input is reached before `marker` is found.
    pub fn skip_to(&mut self, marker: &str) -> Result<bool, Error> {
        while self.advance()? {
            if self.token == marker.as_bytes() {
                return Ok(true);
            }
        }
        Ok(false)
    }

    pub fn token(&mut self) -> Result<&str, Error> {
        if !self.advance()? {
            return Err(self.error(ErrorKind::TruncatedStream));
        }
        let lineno = self.lineno;
        str::from_utf8(&self.token).map_err(|_| Error::new(ErrorKind::InvalidUtf8, lineno))
    }

    fn parse<T, F>(&mut self, wrap: F) -> Result<T, Error>
    where
        T: str::FromStr,
        F: FnOnce(T::Err) -> ErrorKind,
    {
        let value = self.token()?.parse::<T>();
        value.map_err(|err| self.error(wrap(err)))
    }

    pub fn int<T>(&mut self) -> Result<T, Error>
    where
        T: str::FromStr<Err = num::ParseIntError>,
    {
        self.parse(ErrorKind::BadInteger)
    }

    pub fn float(&mut self) -> Result<f64, Error> {
        self.parse(ErrorKind::BadFloat)
    }
}
