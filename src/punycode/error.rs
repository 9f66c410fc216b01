// Shared failure conditions (the reference's `enum punycode_status`).

use thiserror::Error;

/// Failure conditions shared by encode and decode.
///
/// All three abort the whole call with nothing partial to salvage; recovery
/// (more capacity, a wider [`CodePoint`](super::CodePoint)) is the caller's
/// move.  Encoding never returns [`BadInput`](CodecError::BadInput), since
/// every sequence of unsigned integers is encodable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Input is structurally invalid for decoding: a non-basic byte in the
    /// literal prefix, a non-digit where a digit was required, or a digit
    /// sequence cut off by the end of input.
    #[error("input is invalid")]
    BadInput,
    /// Output would exceed the capacity the caller provided.
    #[error("output would exceed the space provided")]
    BigOutput,
    /// An intermediate value would exceed the chosen integer width.  Not a
    /// malformed input: rerun with a wider scalar type.
    #[error("wider integers needed to process input")]
    Overflow,
}
