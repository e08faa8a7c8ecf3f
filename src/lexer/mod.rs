//! Lexical analysis for the parser.
//!
//! This module turns source text into tokens on demand. It handles:
//!
//! - Recognition of keywords, identifiers, integers and operators via regex patterns
//! - Token position tracking for error reporting
//! - Whitespace skipping and `ILLEGAL` tokens for unknown characters
//! - The `TokenSource` contract the parser pulls tokens through

pub mod lexer;
pub mod source;
pub mod tokens;
