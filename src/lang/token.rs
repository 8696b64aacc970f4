use crate::mach::{Opcode, Word};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    /// Uppercase run that names a machine instruction.
    Instruction(Opcode),
    /// Uppercase run with no matching mnemonic.
    UnknownInstruction,
    /// Label definition, `name:`.
    Label,
    /// Label reference used as an operand, `name`.
    LabelName,
    Int,
    Comment,
    Eol,
    Eof,
    Illegal,
}

impl TokenKind {
    /// Kinds that occupy a slot in the assembled program and so consume
    /// an operand index.
    pub fn is_operand(&self) -> bool {
        use TokenKind::*;
        match self {
            Instruction(_) | UnknownInstruction | LabelName | Int | Illegal => true,
            Label | Comment | Eol | Eof => false,
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use TokenKind::*;
        match self {
            Instruction(op) => write!(f, "{}", op),
            UnknownInstruction => write!(f, "INSTRUCTION"),
            Label => write!(f, "LABEL"),
            LabelName => write!(f, "LABEL_NAME"),
            Int => write!(f, "INT"),
            Comment => write!(f, "COMMENT"),
            Eol => write!(f, "EOL"),
            Eof => write!(f, "EOF"),
            Illegal => write!(f, "ILLEGAL"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    /// 1-based source line.
    pub line: usize,
    /// Operand index. A label carries the index of the operand that
    /// follows it.
    pub index: Option<usize>,
}

impl Token {
    pub fn new(kind: TokenKind, literal: &str, line: usize, index: Option<usize>) -> Token {
        Token {
            kind,
            literal: literal.to_string(),
            line,
            index,
        }
    }

    pub fn opcode(&self) -> Option<Opcode> {
        match self.kind {
            TokenKind::Instruction(op) => Some(op),
            _ => None,
        }
    }

    /// Name of a label definition or reference, without the colon.
    pub fn label(&self) -> Option<&str> {
        match self.kind {
            TokenKind::Label => Some(self.literal.trim_end_matches(':')),
            TokenKind::LabelName => Some(&self.literal),
            _ => None,
        }
    }

    /// Value of an integer literal. `None` if it is not one or does not fit.
    pub fn int_value(&self) -> Option<Word> {
        match self.kind {
            TokenKind::Int => self.literal.parse().ok(),
            _ => None,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.literal)
    }
}
