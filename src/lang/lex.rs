use super::token::*;
use crate::mach::Opcode;
use tracing::trace;

/// Scan all of `s`, ending with the EOF token.
pub fn lex(s: &str) -> Vec<Token> {
    Lexer::new(s).collect()
}

fn is_rooster_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}

fn is_rooster_newline(c: char) -> bool {
    c == '\n' || c == '\r'
}

fn is_rooster_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// ## Rooster assembly lexer
///
/// Produces tokens one at a time from the source text. Every token that
/// will occupy a program word gets the next operand index; a label
/// definition gets the index of whatever operand follows it.
///
/// A NUL character is treated as the end of input.
///
/// As an [`Iterator`] the lexer yields every token up to and including
/// the first EOF and then stops. [`Lexer::next_token`] keeps returning
/// EOF once the input is exhausted.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    line: usize,
    index: usize,
    done: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer {
            source,
            chars: source.char_indices().peekable(),
            line: 1,
            index: 0,
            done: false,
        }
    }

    /// Current 1-based line.
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn next_token(&mut self) -> Token {
        self.whitespace();
        // NUL ends the input like the real end does, and is never consumed.
        let (start, ch) = match self.chars.peek() {
            Some(&(_, '\0')) | None => return Token::new(TokenKind::Eof, "", self.line, None),
            Some(&pk) => pk,
        };
        if ch == '#' {
            return self.comment(start);
        }
        if is_rooster_newline(ch) {
            self.chars.next();
            let token = Token::new(TokenKind::Eol, "", self.line, None);
            self.line += 1;
            return token;
        }
        if ch.is_ascii_uppercase() {
            return self.instruction(start);
        }
        if ch.is_ascii_lowercase() {
            return self.label(start);
        }
        if ch.is_ascii_digit() {
            return self.number(start);
        }
        self.illegal(start, ch)
    }

    fn whitespace(&mut self) {
        while self
            .chars
            .next_if(|&(_, c)| is_rooster_whitespace(c))
            .is_some()
        {}
    }

    /// Consume while `pred` holds and return the end offset of the run.
    fn run_while(&mut self, start: usize, pred: impl Fn(char) -> bool) -> usize {
        let mut end = start;
        while let Some((pos, c)) = self.chars.next_if(|&(_, c)| pred(c)) {
            end = pos + c.len_utf8();
        }
        end
    }

    fn next_index(&mut self) -> usize {
        let index = self.index;
        self.index += 1;
        index
    }

    fn comment(&mut self, start: usize) -> Token {
        let end = self.run_while(start, |c| c != '\n' && c != '\0');
        Token::new(TokenKind::Comment, &self.source[start..end], self.line, None)
    }

    fn instruction(&mut self, start: usize) -> Token {
        let end = self.run_while(start, |c| c.is_ascii_uppercase());
        let literal = &self.source[start..end];
        let kind = match Opcode::from_mnemonic(literal) {
            Some(op) => TokenKind::Instruction(op),
            None => TokenKind::UnknownInstruction,
        };
        let index = self.next_index();
        Token::new(kind, literal, self.line, Some(index))
    }

    fn label(&mut self, start: usize) -> Token {
        let mut end = self.run_while(start, is_rooster_letter);
        if let Some((pos, c)) = self.chars.next_if(|&(_, c)| c == ':') {
            end = pos + c.len_utf8();
            // A definition takes no slot of its own; it points at the
            // operand that comes next.
            let index = self.index;
            return Token::new(
                TokenKind::Label,
                &self.source[start..end],
                self.line,
                Some(index),
            );
        }
        let index = self.next_index();
        Token::new(
            TokenKind::LabelName,
            &self.source[start..end],
            self.line,
            Some(index),
        )
    }

    fn number(&mut self, start: usize) -> Token {
        let end = self.run_while(start, |c| c.is_ascii_digit());
        let index = self.next_index();
        Token::new(
            TokenKind::Int,
            &self.source[start..end],
            self.line,
            Some(index),
        )
    }

    fn illegal(&mut self, start: usize, ch: char) -> Token {
        self.chars.next();
        let index = self.next_index();
        trace!(line = self.line, index, ?ch, "illegal character");
        Token::new(
            TokenKind::Illegal,
            &self.source[start..start + ch.len_utf8()],
            self.line,
            Some(index),
        )
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let token = self.next_token();
        if token.kind == TokenKind::Eof {
            self.done = true;
        }
        Some(token)
    }
}

impl<'a> std::iter::FusedIterator for Lexer<'a> {}
