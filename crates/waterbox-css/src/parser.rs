use crate::error::ParseError;
use crate::hsl::hsl_to_rgb;
use crate::lexer::{Lexer, Spanned, Token};
use crate::{named, Rgba};

/// Parses a CSS color string.
///
/// Accepted forms: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `rgb()`/`rgba()`,
/// `hsl()`/`hsla()` (legacy comma syntax or modern space syntax with an
/// optional `/ alpha`), `transparent` and a small set of named colors.
pub fn parse_color(src: &str) -> Result<Rgba, ParseError> {
    let tokens = Lexer::new(src).tokenize()?;
    let mut parser = Parser { tokens, pos: 0 };
    let color = parser.color()?;
    parser.expect_eof()?;
    Ok(color)
}

// ── Component ─────────────────────────────────────────────────────────────

/// A single numeric argument of a color function.
#[derive(Debug, Copy, Clone, PartialEq)]
enum Component {
    Number(f32),
    Percent(f32),
    Degrees(f32),
}

// ── Parser ────────────────────────────────────────────────────────────────

struct Parser {
    tokens: Vec<Spanned>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> &Spanned {
        // The lexer always terminates the stream with `Eof`.
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn next(&mut self) -> Spanned {
        let tok = self.peek().clone();
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
        tok
    }

    fn expect_eof(&mut self) -> Result<(), ParseError> {
        let tok = self.next();
        match tok.token {
            Token::Eof => Ok(()),
            other => Err(ParseError::new(format!("unexpected trailing {:?}", other), tok.col)),
        }
    }

    fn color(&mut self) -> Result<Rgba, ParseError> {
        let tok = self.next();
        match tok.token {
            Token::Hash(digits) => hex(&digits, tok.col),
            Token::Ident(name) => {
                if self.peek().token == Token::LParen {
                    self.next();
                    self.function(&name, tok.col)
                } else {
                    named::lookup(&name)
                        .ok_or_else(|| ParseError::new(format!("unknown color name {:?}", name), tok.col))
                }
            }
            Token::Eof => Err(ParseError::new("empty color", tok.col)),
            other => Err(ParseError::new(format!("expected a color, found {:?}", other), tok.col)),
        }
    }

    /// Collects function arguments up to `)`.
    ///
    /// Returns the components and whether the last one was introduced by `/`.
    fn arguments(&mut self) -> Result<(Vec<Component>, bool), ParseError> {
        let mut components = Vec::new();
        let mut slash_alpha = false;
        loop {
            let tok = self.next();
            match tok.token {
                Token::RParen => break,
                Token::Comma => continue,
                Token::Slash => {
                    if slash_alpha {
                        return Err(ParseError::new("more than one `/` in color function", tok.col));
                    }
                    slash_alpha = true;
                }
                Token::Number(v) => components.push(Component::Number(v)),
                Token::Percent(v) => components.push(Component::Percent(v)),
                Token::Dimension(v, unit) => components.push(Component::Degrees(angle(v, &unit, tok.col)?)),
                Token::Eof => return Err(ParseError::new("unterminated color function", tok.col)),
                other => {
                    return Err(ParseError::new(format!("unexpected {:?} in color function", other), tok.col));
                }
            }
        }
        Ok((components, slash_alpha))
    }

    fn function(&mut self, name: &str, col: usize) -> Result<Rgba, ParseError> {
        let (args, slash_alpha) = self.arguments()?;
        if slash_alpha && args.len() != 4 {
            return Err(ParseError::new("`/` must precede exactly one alpha value", col));
        }
        let alpha = match args.len() {
            3 => 1.0,
            4 => alpha_value(args[3], col)?,
            n => {
                return Err(ParseError::new(
                    format!("{}() expects 3 or 4 arguments, got {}", name, n),
                    col,
                ));
            }
        };

        match name {
            "rgb" | "rgba" => {
                let r = rgb_channel(args[0], col)?;
                let g = rgb_channel(args[1], col)?;
                let b = rgb_channel(args[2], col)?;
                Ok(Rgba::new(r, g, b, unit_to_u8(alpha)))
            }
            "hsl" | "hsla" => {
                let h = match args[0] {
                    Component::Number(v) | Component::Degrees(v) => v,
                    Component::Percent(_) => return Err(ParseError::new("hue cannot be a percentage", col)),
                };
                let s = fraction(args[1], col)?;
                let l = fraction(args[2], col)?;
                let (r, g, b) = hsl_to_rgb(h, s, l);
                Ok(Rgba::new(unit_to_u8(r), unit_to_u8(g), unit_to_u8(b), unit_to_u8(alpha)))
            }
            other => Err(ParseError::new(format!("unknown color function {:?}", other), col)),
        }
    }
}

// ── helpers ───────────────────────────────────────────────────────────────

fn hex(digits: &str, col: usize) -> Result<Rgba, ParseError> {
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ParseError::new(format!("invalid hex color #{}", digits), col));
    }
    // Only ASCII hex digits remain, so byte slicing and radix parsing are safe.
    let nibble = |i: usize| u8::from_str_radix(&digits[i..i + 1], 16).unwrap_or(0) * 17;
    let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).unwrap_or(0);

    match digits.len() {
        3 => Ok(Rgba::new(nibble(0), nibble(1), nibble(2), 255)),
        4 => Ok(Rgba::new(nibble(0), nibble(1), nibble(2), nibble(3))),
        6 => Ok(Rgba::new(byte(0), byte(2), byte(4), 255)),
        8 => Ok(Rgba::new(byte(0), byte(2), byte(4), byte(6))),
        n => Err(ParseError::new(
            format!("hex color must have 3, 4, 6 or 8 digits, got {}", n),
            col,
        )),
    }
}

fn angle(value: f32, unit: &str, col: usize) -> Result<f32, ParseError> {
    match unit {
        "deg" => Ok(value),
        "turn" => Ok(value * 360.0),
        "rad" => Ok(value.to_degrees()),
        "grad" => Ok(value * 0.9),
        other => Err(ParseError::new(format!("unsupported unit {:?}", other), col)),
    }
}

fn rgb_channel(c: Component, col: usize) -> Result<u8, ParseError> {
    match c {
        Component::Number(v) => Ok(v.round().clamp(0.0, 255.0) as u8),
        Component::Percent(p) => Ok((p * 2.55).round().clamp(0.0, 255.0) as u8),
        Component::Degrees(_) => Err(ParseError::new("rgb channel cannot be an angle", col)),
    }
}

/// Saturation/lightness: percentages, or bare numbers read as percentages.
fn fraction(c: Component, col: usize) -> Result<f32, ParseError> {
    match c {
        Component::Percent(p) | Component::Number(p) => Ok((p / 100.0).clamp(0.0, 1.0)),
        Component::Degrees(_) => Err(ParseError::new("saturation/lightness cannot be an angle", col)),
    }
}

fn alpha_value(c: Component, col: usize) -> Result<f32, ParseError> {
    match c {
        Component::Number(v) => Ok(v.clamp(0.0, 1.0)),
        Component::Percent(p) => Ok((p / 100.0).clamp(0.0, 1.0)),
        Component::Degrees(_) => Err(ParseError::new("alpha cannot be an angle", col)),
    }
}

#[inline]
fn unit_to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}
