//! scrap2rst Core
//!
//! This crate provides core types and error definitions shared by the
//! scrap2rst converter crates.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`LineState`] - The structural role assigned to each source line
//! - [`ConversionMode`] - The code-block tracking mode threaded through a run
//! - [`LineHistory`] - Append-only record of line states with one-line lookbehind
//! - [`PageUrl`] - Derivation of API and reference base URLs from a page URL
//! - [`Scrap2RstError`] - Error types

pub mod enums;
pub mod error;
pub mod page;
pub mod state;

pub use enums::{ConversionMode, LineState};
pub use error::{Result, Scrap2RstError};
pub use page::PageUrl;
pub use state::LineHistory;
