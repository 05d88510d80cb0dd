//! Syntax tree traversal and symbol extraction.

pub mod collector;
pub mod symbols;

pub use collector::{collect, collect_pruned, walk, Flow, FromNode, Node};
pub use symbols::{collect_symbols, Symbol, SymbolKind};
