use super::Word;
use std::collections::HashMap;
use std::convert::TryFrom;

thread_local!(
    static MNEMONIC_TO_OPCODE: HashMap<&'static str, Opcode> = Opcode::ALL
        .iter()
        .map(|op| (op.mnemonic(), *op))
        .collect();
);

/// ## Virtual machine instruction set
///
/// The Rooster machine has no registers.
/// Every operation is performed on the operand stack.
///
/// For example: `a = 3 * b` compiles to `[ICONST 3, GLOAD b, IMUL, GSTORE a]`
///
/// Binary operations pop the top of the stack first. That value is the
/// left hand side: `ICONST 2, ICONST 4, ISUB` leaves `2`.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i64)]
pub enum Opcode {
    // *** Stack manipulation
    /// Push the literal operand.
    Iconst = 1,

    // *** Expression operations
    Iadd = 2,
    Isub = 3,
    Imul = 4,
    /// Push 1 if top < beneath, else 0.
    Ilt = 5,
    /// Push 1 if top == beneath, else 0.
    Ieq = 6,

    // *** Branch control
    /// Unconditional branch to the operand address.
    Jmp = 7,
    /// Pop and branch if not zero.
    Jmpt = 8,
    /// Pop and branch if zero.
    Jmpf = 9,

    // *** Storage
    Gload = 10,
    Gstore = 11,
    /// Push a copy of operand stack slot `addr`, counted from the bottom.
    Load = 12,
    Store = 13,

    // *** Statements
    /// Pop and write to the output sink.
    Print = 14,
    Halt = 15,
}

impl Opcode {
    pub const ALL: [Opcode; 15] = [
        Opcode::Iconst,
        Opcode::Iadd,
        Opcode::Isub,
        Opcode::Imul,
        Opcode::Ilt,
        Opcode::Ieq,
        Opcode::Jmp,
        Opcode::Jmpt,
        Opcode::Jmpf,
        Opcode::Gload,
        Opcode::Gstore,
        Opcode::Load,
        Opcode::Store,
        Opcode::Print,
        Opcode::Halt,
    ];

    /// Look up an instruction by its assembly mnemonic. Case-sensitive.
    pub fn from_mnemonic(s: &str) -> Option<Opcode> {
        MNEMONIC_TO_OPCODE.with(|table| table.get(s).copied())
    }

    pub fn mnemonic(&self) -> &'static str {
        use Opcode::*;
        match self {
            Iconst => "ICONST",
            Iadd => "IADD",
            Isub => "ISUB",
            Imul => "IMUL",
            Ilt => "ILT",
            Ieq => "IEQ",
            Jmp => "JMP",
            Jmpt => "JMPT",
            Jmpf => "JMPF",
            Gload => "GLOAD",
            Gstore => "GSTORE",
            Load => "LOAD",
            Store => "STORE",
            Print => "PRINT",
            Halt => "HALT",
        }
    }

    /// Number of operand words following the opcode in a program.
    pub fn arity(&self) -> usize {
        use Opcode::*;
        match self {
            Iconst | Jmp | Jmpt | Jmpf | Gload | Gstore | Load | Store => 1,
            Iadd | Isub | Imul | Ilt | Ieq | Print | Halt => 0,
        }
    }
}

impl From<Opcode> for Word {
    fn from(op: Opcode) -> Word {
        op as Word
    }
}

impl TryFrom<Word> for Opcode {
    type Error = Word;
    fn try_from(word: Word) -> Result<Self, Self::Error> {
        Opcode::ALL
            .iter()
            .find(|op| **op as Word == word)
            .copied()
            .ok_or(word)
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.mnemonic())
    }
}
