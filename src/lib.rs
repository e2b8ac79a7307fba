//! Conversion between `0x` EIP-55 checksummed addresses and their `XKO`-prefixed
//! X Layer counterparts.
//!
//! ```
//! use xko_address::address::{is_alternate_form, to_alternate_form, to_standard_form};
//!
//! let raw = "70586beeb7b7aa2e7966df9c8493c6cbfd75c625";
//! assert_eq!(to_standard_form(raw).unwrap(), "0x70586BeEB7b7Aa2e7966DF9c8493C6CbFd75C625");
//! assert_eq!(to_alternate_form(raw).unwrap(), "XKO70586BeEB7b7Aa2e7966DF9c8493C6CbFd75C625");
//! assert!(is_alternate_form("xko70586beeb7b7aa2e7966df9c8493c6cbfd75c625"));
//! ```

pub mod address;
pub mod env;
pub mod error;
pub mod trace;

pub use address::{is_alternate_form, to_alternate_form, to_standard_form};
