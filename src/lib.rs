//! A parser for a small line-numbered BASIC, built from parser combinators.

pub mod formatting;
pub mod language;
pub mod parsing;
pub mod problem;
