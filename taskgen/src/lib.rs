//! Natural-language task generation backed by the Gemini `generateContent` API.
//!
//! The crate also owns the value types every task record is built from, so the
//! UI and storage layers share one definition of a valid date and color.

mod client;
pub mod domain;
mod generator;
mod prompt;
mod response;

pub use client::*;
pub use domain::*;
pub use generator::*;
pub use prompt::{build_instruction, response_schema};
pub use response::parse_drafts;
