/*!
## Rust Machine Module

This Rust module is the stack machine that executes Rooster bytecode.

*/

/// Index into a [`Program`] or into the variable store.
pub type Address = usize;
/// One program word: an opcode or an operand.
pub type Word = i64;

mod error;
mod opcode;
mod program;
mod runtime;
mod stack;

pub use error::Error;
pub use error::ParseError;
pub use error::Result;
pub use opcode::Opcode;
pub use program::Program;
pub use runtime::Runtime;
pub use runtime::State;
pub use stack::Stack;
pub use stack::Underflow;

#[cfg(test)]
mod tests;
