//! An immutable optional value with combinators and JSON support.
//!
//! ```
//! use opt::{Opt, join};
//!
//! let total = join(Opt::some(4), Opt::some(8), |a, b| a + b);
//! assert_eq!(total.unwrap_or(0), 12);
//! ```

pub mod combinators;
pub mod json;
pub mod opt;

pub use combinators::{coalesce, equal, from_maybe, from_ptr, join, map};
pub use json::{from_json, to_json};
pub use opt::Opt;
