//! Quote command grammar.
//!
//! Commands are plain text lines such as `quote uwu "hello there"`.

pub mod parsing;

pub use parsing::{Command, parse_command};
