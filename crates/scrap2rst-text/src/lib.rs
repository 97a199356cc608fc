//! scrap2rst Text
//!
//! Text measurement utilities for the scrap2rst converter.
//!
//! # Overview
//!
//! - [`width`] - East-Asian-width-aware measurement and `=` borders
//! - [`indent`] - Character-based leading whitespace handling
//!
//! # Example
//!
//! ```
//! use scrap2rst_text::{border, measure};
//!
//! assert_eq!(measure("title"), 5);
//! assert_eq!(measure("日本語"), 6);
//! assert_eq!(border("日本"), "====");
//! ```

pub mod indent;
pub mod width;

pub use indent::{leading_whitespace, split_indent, strip_indent};
pub use width::{border, char_width, measure};
