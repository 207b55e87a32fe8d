//! Validation-based checks for transition declarations.
//!
//! The default table build keeps the last declaration for a repeated
//! `(event, source)` pair and silently accepts declarations without
//! sources. This module backs the strict alternative: it uses Stillwater's
//! `Validation` type to report every problem in one pass instead of
//! stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use switchyard::builder::Declaration;
//! use switchyard::validation::validate_declarations;
//!
//! let declarations = vec![
//!     Declaration::new("open", ["closed"], "opened"),
//!     Declaration::new("open", ["closed"], "ajar"),
//! ];
//!
//! assert!(validate_declarations(&declarations).is_failure());
//! ```

pub mod issues;
pub mod rules;

pub use issues::DeclarationIssue;
pub use rules::{validate_declarations, DeclarationValidation};
