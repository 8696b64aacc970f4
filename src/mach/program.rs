use super::{Address, Opcode, ParseError, Word};
use std::convert::TryFrom;
use std::str::FromStr;

/// ## Bytecode program
///
/// A flat sequence of words: opcodes interleaved with their operands.
/// There is no header or length prefix. Jump operands are absolute
/// indexes into this sequence.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    words: Vec<Word>,
}

/// Build a [`Program`] from opcode names and integer operands.
/// Bare identifiers are read as opcodes, so wrap variables and negative
/// numbers in parentheses: `program![Iconst, (x), Iconst, (-1)]`.
///
/// ```
/// use rooster::program;
/// let p = program![Iconst, 42, Print, Halt];
/// assert_eq!(p.words(), &[1, 42, 14, 15]);
/// ```
#[macro_export]
macro_rules! program {
    (@word $word:ident) => {
        $crate::mach::Word::from($crate::mach::Opcode::$word)
    };
    (@word $word:tt) => {
        $word
    };
    ($($word:tt),* $(,)?) => {
        $crate::mach::Program::from(vec![$($crate::program!(@word $word)),*])
    };
}

impl Program {
    pub fn new() -> Program {
        Program { words: vec![] }
    }
    pub fn len(&self) -> usize {
        self.words.len()
    }
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
    pub fn get(&self, addr: Address) -> Option<Word> {
        self.words.get(addr).copied()
    }
    pub fn words(&self) -> &[Word] {
        &self.words
    }
    pub fn push(&mut self, word: impl Into<Word>) {
        self.words.push(word.into())
    }
}

impl From<Vec<Word>> for Program {
    fn from(words: Vec<Word>) -> Self {
        Program { words }
    }
}

impl From<&[Word]> for Program {
    fn from(words: &[Word]) -> Self {
        Program {
            words: words.to_vec(),
        }
    }
}

impl FromStr for Program {
    type Err = ParseError;

    /// Reads a listing of integers and mnemonics separated by whitespace
    /// or commas. `#` starts a comment. Labels are not resolved here.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut program = Program::new();
        for (index, line) in s.lines().enumerate() {
            let code = match line.find('#') {
                Some(pos) => &line[..pos],
                None => line,
            };
            for word in code
                .split(|c: char| c.is_whitespace() || c == ',')
                .filter(|w| !w.is_empty())
            {
                if let Some(op) = Opcode::from_mnemonic(word) {
                    program.push(op);
                } else if let Ok(n) = word.parse::<Word>() {
                    program.push(n);
                } else {
                    return Err(ParseError {
                        line: index + 1,
                        word: word.to_string(),
                    });
                }
            }
        }
        Ok(program)
    }
}

impl std::fmt::Display for Program {
    /// Disassembly listing, one instruction per line.
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut addr = 0;
        while addr < self.words.len() {
            let word = self.words[addr];
            match Opcode::try_from(word) {
                Ok(op) => {
                    write!(f, "{:04} {}", addr, op)?;
                    for n in 1..=op.arity() {
                        match self.words.get(addr + n) {
                            Some(operand) => write!(f, " {}", operand)?,
                            None => write!(f, " ?")?,
                        }
                    }
                    writeln!(f)?;
                    addr += 1 + op.arity();
                }
                Err(word) => {
                    writeln!(f, "{:04} .word {}", addr, word)?;
                    addr += 1;
                }
            }
        }
        Ok(())
    }
}
