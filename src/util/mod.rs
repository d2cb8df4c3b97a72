//! Utility functions for common operations.
//!
//! - **Domain derivation**: turning an article URL into its display domain
//! - **Host checks**: recognizing local development hosts
//!
//! # Examples
//!
//! ```
//! use newsboard::util::{derive_domain, is_local_host};
//!
//! assert_eq!(derive_domain("https://www.example.org/a").as_deref(), Some("example.org"));
//! assert!(is_local_host("127.0.0.1"));
//! ```

mod domain;

pub use domain::{derive_domain, is_local_host};
