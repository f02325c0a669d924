//! Shared configuration for the card catalog engine and its offline tooling.

pub mod catalog;
pub mod category;
pub mod hero;
pub mod path;
pub mod showcase;
