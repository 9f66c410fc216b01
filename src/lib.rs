//! Oxipuny: Punycode/Bootstring (RFC 3492) encoding/decoding in Rust.
//!
//! The crate provides:
//! - The core Punycode codec over raw code points (`punycode`)
//! - String-level convenience APIs (`text`)
//! - The reference tool's `u+HEX` token protocol (`io`)
//! - An optional CLI (`cli` feature)
//!
//! # Quick Start
//!
//! ```
//! use oxipuny::punycode::{decode, encode};
//!
//! let code_points: Vec<u32> = "bücher".chars().map(u32::from).collect();
//! let ascii = encode(&code_points, None, usize::MAX).unwrap();
//! assert_eq!(ascii, b"bcher-kva");
//!
//! let decoded = decode::<u32>(&ascii, usize::MAX).unwrap();
//! assert_eq!(decoded.code_points, code_points);
//! ```
//!
//! The codec treats code points as opaque unsigned integers and is generic
//! over their width; see [`punycode::CodePoint`].  Capacity limits and the
//! three failure conditions ([`punycode::CodecError`]) follow the reference
//! implementation exactly.

pub mod io;
pub mod punycode;
pub mod text;

#[cfg(feature = "cli")]
pub mod cli;
