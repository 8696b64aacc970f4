use super::{Address, Word};

/// Fatal runtime conditions. Each one ends the run and carries the
/// address of the instruction that raised it.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("STACK UNDERFLOW AT {address}")]
    StackUnderflow { address: Address },

    #[error("UNKNOWN OPCODE {word} AT {address}")]
    UnknownOpcode { address: Address, word: Word },

    #[error("ADDRESS OUT OF RANGE {target} AT {address}")]
    AddressOutOfRange { address: Address, target: Word },

    #[error("MISSING OPERAND AT {address}")]
    TruncatedProgram { address: Address },

    #[error("OUTPUT FAILED AT {address}: {source}")]
    Output {
        address: Address,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Address of the opcode that failed.
    pub fn address(&self) -> Address {
        use Error::*;
        match self {
            StackUnderflow { address }
            | UnknownOpcode { address, .. }
            | AddressOutOfRange { address, .. }
            | TruncatedProgram { address }
            | Output { address, .. } => *address,
        }
    }
}

/// Failure to read a plain-text program listing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("INVALID WORD '{word}' IN LINE {line}")]
pub struct ParseError {
    pub line: usize,
    pub word: String,
}

pub type Result<T> = std::result::Result<T, Error>;
