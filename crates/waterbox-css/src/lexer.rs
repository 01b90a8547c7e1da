use crate::error::ParseError;

// ── Token ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Hex digits following `#`, without the `#`.
    Hash(String),
    Ident(String),
    Number(f32),
    Percent(f32),
    /// Number with a unit suffix, e.g. `120deg`. The unit is lowercased.
    Dimension(f32, String),
    // Punctuation
    LParen,
    RParen,
    Comma,
    Slash,
    // Sentinel
    Eof,
}

/// A token together with the 1-based column it starts at.
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned {
    pub token: Token,
    pub col: usize,
}

// ── Lexer ─────────────────────────────────────────────────────────────────

pub struct Lexer<'s> {
    src: &'s str,
    pos: usize,
}

impl<'s> Lexer<'s> {
    pub fn new(src: &'s str) -> Self {
        Self { src, pos: 0 }
    }

    pub fn tokenize(mut self) -> Result<Vec<Spanned>, ParseError> {
        let mut tokens = Vec::new();
        loop {
            self.skip_whitespace();
            let col = self.col();
            let token = self.next_token()?;
            let eof = token == Token::Eof;
            tokens.push(Spanned { token, col });
            if eof {
                break;
            }
        }
        Ok(tokens)
    }

    fn col(&self) -> usize {
        self.src[..self.pos].chars().count() + 1
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        let mut chars = self.src[self.pos..].chars();
        chars.next();
        chars.next()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.src[self.pos..].chars().next()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.advance();
        }
    }

    fn next_token(&mut self) -> Result<Token, ParseError> {
        let ch = match self.peek() {
            None => return Ok(Token::Eof),
            Some(c) => c,
        };

        match ch {
            '(' => { self.advance(); Ok(Token::LParen) }
            ')' => { self.advance(); Ok(Token::RParen) }
            ',' => { self.advance(); Ok(Token::Comma) }
            '/' => { self.advance(); Ok(Token::Slash) }
            '#' => self.lex_hash(),
            c if c.is_ascii_digit() || c == '.' => self.lex_numeric(),
            '-' | '+' if matches!(self.peek_second(), Some(d) if d.is_ascii_digit() || d == '.') => {
                self.lex_numeric()
            }
            c if c.is_ascii_alphabetic() || c == '-' || c == '_' => self.lex_ident(),
            other => Err(ParseError::new(format!("unexpected character {:?}", other), self.col())),
        }
    }

    fn lex_hash(&mut self) -> Result<Token, ParseError> {
        let col = self.col();
        self.advance(); // consume `#`
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_alphanumeric()) {
            self.advance();
        }
        let digits = &self.src[start..self.pos];
        if digits.is_empty() {
            return Err(ParseError::new("expected hex digits after `#`", col));
        }
        Ok(Token::Hash(digits.to_string()))
    }

    fn lex_numeric(&mut self) -> Result<Token, ParseError> {
        let col = self.col();
        let start = self.pos;
        if matches!(self.peek(), Some('-') | Some('+')) {
            self.advance();
        }
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.advance();
        }
        if self.peek() == Some('.') {
            self.advance();
            while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                self.advance();
            }
        }
        let text = &self.src[start..self.pos];
        let value = text
            .parse::<f32>()
            .map_err(|_| ParseError::new(format!("invalid number {:?}", text), col))?;

        if self.peek() == Some('%') {
            self.advance();
            return Ok(Token::Percent(value));
        }
        if matches!(self.peek(), Some(c) if c.is_ascii_alphabetic()) {
            let unit_start = self.pos;
            while matches!(self.peek(), Some(c) if c.is_ascii_alphabetic()) {
                self.advance();
            }
            let unit = self.src[unit_start..self.pos].to_ascii_lowercase();
            return Ok(Token::Dimension(value, unit));
        }
        Ok(Token::Number(value))
    }

    fn lex_ident(&mut self) -> Result<Token, ParseError> {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_alphanumeric() || c == '-' || c == '_') {
            self.advance();
        }
        Ok(Token::Ident(self.src[start..self.pos].to_ascii_lowercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(src: &str) -> Vec<Token> {
        Lexer::new(src).tokenize().unwrap().into_iter().map(|s| s.token).collect()
    }

    #[test]
    fn function_with_units() {
        assert_eq!(
            tokens("hsla(120deg, 50%, .5)"),
            vec![
                Token::Ident("hsla".into()),
                Token::LParen,
                Token::Dimension(120.0, "deg".into()),
                Token::Comma,
                Token::Percent(50.0),
                Token::Comma,
                Token::Number(0.5),
                Token::RParen,
                Token::Eof,
            ]
        );
    }

    #[test]
    fn idents_are_lowercased() {
        assert_eq!(tokens("RGB"), vec![Token::Ident("rgb".into()), Token::Eof]);
    }

    #[test]
    fn negative_number() {
        assert_eq!(tokens("-30"), vec![Token::Number(-30.0), Token::Eof]);
    }

    #[test]
    fn columns_are_one_based() {
        let spans = Lexer::new("  #fff").tokenize().unwrap();
        assert_eq!(spans[0].col, 3);
    }

    #[test]
    fn rejects_stray_characters() {
        let err = Lexer::new("rgb(1;2;3)").tokenize().unwrap_err();
        assert_eq!(err.col, 6);
    }
}
