// Punycode decoder (RFC 3492, Section 6.2).
//
// Inverts every arithmetic step of the encoder, including the modular
// recovery of insertion indices from the running total i.  The in-place
// memmove insertion of the reference becomes `Vec::insert`; everything else
// follows punycode-sample.c line for line, with the wraparound guards
// expressed as checked arithmetic.

use super::bias;
use super::digits;
use super::error::CodecError;
use super::params::{BASE, INITIAL_BIAS, INITIAL_N};
use super::scalar::CodePoint;

/// Result of a successful decode.
///
/// `case_flags` parallels `code_points`: `true` asks the caller to render
/// that code point uppercase.  For basic points the flag merely restates the
/// case they already carry, so applying it is harmless.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded<C> {
    pub code_points: Vec<C>,
    pub case_flags: Vec<bool>,
}

/// Decode a Punycode ASCII string back into code points and case flags.
///
/// Everything before the *last* delimiter is copied verbatim as basic code
/// points (a non-basic byte there is [`CodecError::BadInput`]); the rest is
/// consumed as digit runs, each run inserting exactly one code point.  The
/// output therefore never holds more points than the input has bytes.
///
/// `max_out` caps the output length in code points, checked before every
/// insertion.  Truncated digit runs and non-digit bytes are `BadInput`;
/// arithmetic exceeding the scalar width is [`CodecError::Overflow`].
pub fn decode<C: CodePoint>(input: &[u8], max_out: usize) -> Result<Decoded<C>, CodecError> {
    let base = C::from_u32(BASE);
    let mut n = C::from_u32(INITIAL_N);
    let mut i = C::ZERO;
    let mut bias = C::from_u32(INITIAL_BIAS);

    // The output count feeds the modular arithmetic below, so it can never
    // exceed the scalar width no matter how much room the caller offers.
    let max_out = max_out.min(C::MAX.to_usize());

    // b = index of the last delimiter, 0 if there is none.  Delimiters
    // before it are ordinary basic characters of the literal prefix.
    let mut b = 0;
    for (j, &byte) in input.iter().enumerate() {
        if digits::is_delimiter(byte) {
            b = j;
        }
    }
    if b > max_out {
        return Err(CodecError::BigOutput);
    }

    let mut output: Vec<C> = Vec::with_capacity(input.len().min(max_out));
    let mut flags: Vec<bool> = Vec::with_capacity(input.len().min(max_out));

    for &byte in &input[..b] {
        if !digits::is_basic(u32::from(byte)) {
            return Err(CodecError::BadInput);
        }
        flags.push(digits::is_flagged(byte));
        output.push(C::from_u32(u32::from(byte)));
    }

    // Start just past the last delimiter if any basic points were copied,
    // at the beginning otherwise.
    let mut cursor = if b > 0 { b + 1 } else { 0 };

    while cursor < input.len() {
        // Decode one generalized variable-length integer.  It accumulates
        // directly into i (simplest for the overflow checks); the delta is
        // recovered as i - old_i afterwards.
        let old_i = i;
        let mut w = C::ONE;
        let mut k = base;
        loop {
            let Some(&byte) = input.get(cursor) else {
                return Err(CodecError::BadInput);
            };
            cursor += 1;

            let digit = digits::decode_digit(byte);
            if digit >= BASE {
                return Err(CodecError::BadInput);
            }
            let digit = C::from_u32(digit);
            i = digit
                .checked_mul(w)
                .and_then(|dw| i.checked_add(dw))
                .ok_or(CodecError::Overflow)?;

            let t = bias::threshold(k, bias);
            if digit < t {
                break;
            }
            w = w.checked_mul(base - t).ok_or(CodecError::Overflow)?;
            k = k + base;
        }

        let count = C::from_usize(output.len() + 1).ok_or(CodecError::Overflow)?;
        bias = bias::adapt(i - old_i, count, old_i == C::ZERO);

        // i was meant to wrap from count to 0, bumping n each time around;
        // undo that to recover the code point and its insertion index.
        n = n.checked_add(i / count).ok_or(CodecError::Overflow)?;
        i = i % count;

        if output.len() >= max_out {
            return Err(CodecError::BigOutput);
        }

        // Insert n at position i; the case of the digit run's terminating
        // byte is the case flag.
        let at = i.to_usize();
        flags.insert(at, digits::is_flagged(input[cursor - 1]));
        output.insert(at, n);
        i = i + C::ONE;
    }

    Ok(Decoded {
        code_points: output,
        case_flags: flags,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
