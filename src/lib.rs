//! # DAFSA Compiler
//!
//! Compiles an unordered, tagged word list into a compact byte-addressed
//! Deterministic Acyclic Finite-State Automaton (DAFSA). The output replaces
//! a perfect-hash table as a memory-efficient lookup structure.
//!
//! * `dafsa` builds and encodes the automaton itself (the core pipeline).
//! * `parser` reads `word, tag` lines (optionally wrapped in `%%` sentinels)
//!   into the `(word, tag)` pairs the core expects.
//! * `format` renders an encoded byte array either as raw bytes or as a
//!   textual C-style array literal.
//!
//! ## Buffer Example
//!
//! ```rs
//! use dafsa_compiler::dafsa;
//! let words = [(b"aa".to_vec(), 1u8), (b"a".to_vec(), 2u8)];
//! let compiled = dafsa::compile(&words).expect("compilation failed");
//! eprintln!("compiled {} words into {} bytes", words.len(), compiled.len());
//! ```

pub mod dafsa;
pub mod format;
pub mod parser;

/// DAFSA compiler errors
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("the word list must not be empty")]
    EmptyInput,
    #[error("word bytes must be printable 7-bit ASCII, found byte {0:#04x}")]
    BadCharacter(u8),
    #[error("tag must be one hex digit in 0-9, A-F, found {0:?}")]
    BadTag(String),
    #[error("expected \"word, <hex digit>\", found {0:?}")]
    BadInputLine(String),
    #[error("offset between nodes exceeds the 21-bit encoding (distance {0})")]
    OffsetOverflow(usize),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
