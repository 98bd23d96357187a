//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct, dispatch, and end-of-stream handling
//! - `comment` - Whitespace and `{ ... }` comment skipping
//! - `identifier` - Identifier and keyword lexing
//! - `number` - Integer literal lexing
//! - `operator` - Operator and punctuation lexing

mod comment;
mod core;
mod identifier;
mod number;
mod operator;

pub use core::Lexer;
