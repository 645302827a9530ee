//! Main module for yaappu library functionality
//!
//! The pipeline runs leaf-first:
//! 1. **Alphabet**: static codepoint classification ([`alphabet`])
//! 2. **Agaram swap**: the self-inverse re-encoding ([`agaram`])
//! 3. **Lexing**: normalized text to located letter tokens ([`lexer`])
//! 4. **Parsing**: the asai / cheer / adi grammar ([`parser`])
//! 5. **Formats**: renderings of the finished tree ([`formats`])

pub mod agaram;
pub mod alphabet;
pub mod ast;
pub mod formats;
pub mod lexer;
pub mod parser;
pub mod processor;
pub mod testing;
