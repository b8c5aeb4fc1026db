//! Dotted numeric versions and half-open version ranges
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌──────────────┐
//! │  Tokenizer  │────▶│   Version   │◀────│ VersionRange │
//! │ (validate)  │     │ (order/fmt) │     │ (enumerate)  │
//! └─────────────┘     └─────────────┘     └──────────────┘
//! ```
//!
//! # Modules
//!
//! - [`tokenizer`]: Grammar validation and component conversion
//! - [`dotted`]: The `Version` value type and its total order
//! - [`range`]: `VersionRange` membership and odometer-style enumeration
//! - [`error`]: Error type raised while parsing version strings

pub mod dotted;
pub mod error;
pub mod range;
pub mod tokenizer;

pub use dotted::{IntoVersion, Version};
pub use error::VersionError;
pub use range::{VersionRange, Versions};
