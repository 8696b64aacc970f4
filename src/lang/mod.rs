/*!
# Rust Language Module

This Rust module provides lexical analysis of Rooster assembly.

Turning tokens into a program, including resolving labels to
addresses, is left to a separate compiler stage.

*/

mod lex;
mod token;

pub use lex::lex;
pub use lex::Lexer;
pub use token::Token;
pub use token::TokenKind;

#[cfg(test)]
mod tests;
