// Punycode codec (RFC 3492).
//
// This module implements Bootstring with the Punycode parameters, matching
// the arithmetic of Adam Costello's punycode-sample.c exactly, including its
// overflow trigger points and caller-capacity semantics.
//
// # Modules
//
// - `params`  — Bootstring parameters and their validity conditions
// - `digits`  — base-36 digit codec and basic/case helpers
// - `bias`    — adaptive bias recurrence and per-position thresholds
// - `scalar`  — integer width abstraction (u16/u32/u64/u128)
// - `encoder` — code points (+ case flags) to ASCII
// - `decoder` — ASCII to code points (+ case flags)
// - `error`   — shared failure conditions

pub mod bias;
pub mod decoder;
pub mod digits;
pub mod encoder;
pub mod error;
pub mod params;
pub mod scalar;

// Re-export key items for convenience.
pub use decoder::{Decoded, decode};
pub use encoder::encode;
pub use error::CodecError;
pub use scalar::CodePoint;
