//! scrap2rst Syntax
//!
//! Resolves the `LANG` tag of a `code:LANG` marker to the language name
//! written after an RST `.. code::` directive.
//!
//! A tag is usually a file name (`code:setup.py`) or a bare language name
//! (`code:python`). Resolution order:
//!
//! 1. A recognized file-extension suffix maps through the extension table.
//! 2. A tag that exactly matches a known language name is used as-is.
//! 3. Anything else is used verbatim and reported as unknown.
//!
//! # Example
//!
//! ```
//! use scrap2rst_syntax::LanguageTable;
//!
//! let table = LanguageTable::new();
//! assert_eq!(table.resolve("setup.py").name, "python");
//! assert_eq!(table.resolve("bash").name, "bash");
//! assert!(!table.resolve("brainfuck").known);
//! ```

mod languages;

pub use languages::{Language, LanguageTable, EXTENSIONS, LANGUAGE_NAMES};
