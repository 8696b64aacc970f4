//! # Rooster
//!
//! A tiny stack machine and the lexer for its assembly language.
//!
//! Source text looks like this:
//! ```text
//! # count down from three
//!     ICONST 3
//!     GSTORE 0
//! loop:
//!     GLOAD 0
//!     PRINT
//!     ...
//!     JMPT loop
//!     HALT
//! ```
//!
//! [`lang`] turns that text into tokens. A compiler stage, not part of
//! this crate, resolves labels and emits a flat list of integers which
//! [`mach`] executes:
//! ```
//! use rooster::mach::Runtime;
//! use rooster::program;
//!
//! let mut runtime = Runtime::with_output(program![Iconst, 2, Iconst, 4, Isub, Print, Halt], Vec::<u8>::new());
//! runtime.run().unwrap();
//! assert_eq!(runtime.output(), b"2\n");
//! ```

pub mod lang;
pub mod mach;
