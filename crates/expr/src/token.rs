use std::{iter::Peekable, str::CharIndices};

use crate::ParseError;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
}

/// A token and the character offset where it starts.
pub(crate) type Spanned = (usize, Token);

/// Splits expression text into tokens.
pub(crate) struct Tokenizer<'a> {
    chars: Peekable<CharIndices<'a>>,
    source: &'a str,
}

impl<'a> Tokenizer<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Self {
            chars: source.char_indices().peekable(),
            source,
        }
    }

    fn number(&mut self, start: usize) -> Result<Spanned, ParseError> {
        let mut end = start;
        let mut seen_dot = false;

        while let Some(&(i, c)) = self.chars.peek() {
            if c.is_ascii_digit() || (c == '.' && !seen_dot) {
                seen_dot |= c == '.';
                end = i + c.len_utf8();
                self.chars.next();
            } else {
                break;
            }
        }

        // An exponent only counts when digits follow, so `2e` stays `2·e`.
        if let Some(&(i, 'e' | 'E')) = self.chars.peek() {
            let rest = &self.source[i + 1..];
            let digits_at = usize::from(rest.starts_with(['+', '-']));
            if rest[digits_at..].starts_with(|c: char| c.is_ascii_digit()) {
                self.chars.next();
                if digits_at == 1 {
                    self.chars.next();
                }
                end = i + 1 + digits_at;
                while let Some(&(j, c)) = self.chars.peek() {
                    if !c.is_ascii_digit() {
                        break;
                    }
                    end = j + 1;
                    self.chars.next();
                }
            }
        }

        let text = &self.source[start..end];
        text.parse::<f64>()
            .map(|value| (start, Token::Number(value)))
            .map_err(|_| ParseError::InvalidNumber {
                text: text.to_string(),
                pos: self.char_pos(start),
            })
    }

    fn ident(&mut self, start: usize) -> Spanned {
        let mut end = start;
        while let Some(&(i, c)) = self.chars.peek() {
            if c.is_ascii_alphanumeric() || c == '_' {
                end = i + 1;
                self.chars.next();
            } else {
                break;
            }
        }
        (start, Token::Ident(self.source[start..end].to_string()))
    }

    /// Converts a byte offset into a character offset.
    fn char_pos(&self, byte: usize) -> usize {
        self.source[..byte].chars().count()
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<Spanned, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.chars.next_if(|&(_, c)| c.is_whitespace()).is_some() {}

        let &(start, c) = self.chars.peek()?;
        if c.is_ascii_digit() || c == '.' {
            return Some(self.number(start).map(|(_, token)| (self.char_pos(start), token)));
        }
        if c.is_ascii_alphabetic() || c == '_' {
            let (_, token) = self.ident(start);
            return Some(Ok((self.char_pos(start), token)));
        }

        self.chars.next();
        let token = match c {
            '+' => Token::Plus,
            '-' => Token::Minus,
            '/' => Token::Slash,
            '^' => Token::Caret,
            '(' => Token::LParen,
            ')' => Token::RParen,
            '*' => {
                if self.chars.next_if(|&(_, c)| c == '*').is_some() {
                    Token::Caret
                } else {
                    Token::Star
                }
            }
            ch => {
                return Some(Err(ParseError::UnexpectedChar {
                    ch,
                    pos: self.char_pos(start),
                }));
            }
        };
        Some(Ok((self.char_pos(start), token)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(source: &str) -> Vec<Token> {
        Tokenizer::new(source)
            .map(|t| t.map(|(_, token)| token))
            .collect::<Result<_, _>>()
            .expect("valid tokens")
    }

    #[test]
    fn splits_operators_and_operands() {
        assert_eq!(
            tokens("2*x**3 - sin(x)"),
            vec![
                Token::Number(2.0),
                Token::Star,
                Token::Ident("x".into()),
                Token::Caret,
                Token::Number(3.0),
                Token::Minus,
                Token::Ident("sin".into()),
                Token::LParen,
                Token::Ident("x".into()),
                Token::RParen,
            ]
        );
    }

    #[test]
    fn reads_number_forms() {
        assert_eq!(tokens(".5"), vec![Token::Number(0.5)]);
        assert_eq!(tokens("1e-3"), vec![Token::Number(1e-3)]);
        assert_eq!(tokens("2.5E+2"), vec![Token::Number(250.0)]);
    }

    #[test]
    fn trailing_e_is_an_identifier() {
        assert_eq!(
            tokens("2e"),
            vec![Token::Number(2.0), Token::Ident("e".into())]
        );
        assert_eq!(
            tokens("3ex"),
            vec![Token::Number(3.0), Token::Ident("ex".into())]
        );
    }

    #[test]
    fn reports_positions() {
        let spans: Vec<usize> = Tokenizer::new("x +  10")
            .map(|t| t.expect("valid").0)
            .collect();
        assert_eq!(spans, vec![0, 2, 5]);
    }

    #[test]
    fn rejects_unknown_characters() {
        let err = Tokenizer::new("x # 2")
            .collect::<Result<Vec<_>, _>>()
            .unwrap_err();
        assert_eq!(err, ParseError::UnexpectedChar { ch: '#', pos: 2 });
    }

    #[test]
    fn rejects_lone_dot() {
        let err = Tokenizer::new(".")
            .collect::<Result<Vec<_>, _>>()
            .unwrap_err();
        assert!(matches!(err, ParseError::InvalidNumber { .. }));
    }
}
