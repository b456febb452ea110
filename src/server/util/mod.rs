//! Small parsing and normalization helpers shared by controllers and models.

pub mod parse;
pub mod text;
