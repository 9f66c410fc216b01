// Punycode encoder (RFC 3492, Section 6.3).
//
// Arithmetic mirrors punycode-sample.c exactly, with one translation: where
// the C code detects overflow by unsigned wraparound ("if ++delta == 0") or
// by pre-division guards, this uses checked arithmetic with the same trigger
// points.  For unsigned integers `a * b <= c` and `a <= c / b` are the same
// statement, so the guards are equivalent term for term.

use super::bias;
use super::digits;
use super::error::CodecError;
use super::params::{BASE, DELIMITER, INITIAL_BIAS, INITIAL_N};
use super::scalar::CodePoint;

/// Encode a code point sequence as Punycode ASCII.
///
/// `case_flags`, when given, must parallel `input`; each flag requests
/// uppercase (`true`) or lowercase rendering for its code point.  Flags apply
/// directly to basic points and ride the final digit's letter case for
/// encoded ones.  Without flags, basic points pass through untouched.
///
/// `max_out` caps the output length in ASCII bytes; the encoder fails with
/// [`CodecError::BigOutput`] before any write that would exceed it.  An input
/// longer than the scalar width can count fails with [`CodecError::Overflow`],
/// as does any delta that outgrows the width.  `BadInput` never occurs: any
/// unsigned integer sequence is valid encoder input, and no Unicode range
/// validation happens here.
///
/// # Panics
///
/// Panics if `case_flags` is present with a length different from `input`'s.
pub fn encode<C: CodePoint>(
    input: &[C],
    case_flags: Option<&[bool]>,
    max_out: usize,
) -> Result<Vec<u8>, CodecError> {
    if let Some(flags) = case_flags {
        assert_eq!(
            flags.len(),
            input.len(),
            "case flag slice must parallel the input"
        );
    }

    // Input length feeds the delta arithmetic below, so it must be
    // representable in the scalar width (the reference's size_t guard).
    if C::from_usize(input.len()).is_none() {
        return Err(CodecError::Overflow);
    }

    let base = C::from_u32(BASE);
    let initial_n = C::from_u32(INITIAL_N);
    let mut output = Vec::with_capacity(input.len().min(max_out));

    // Literal basic prefix, in original order.  Each write keeps one slot in
    // reserve so the delimiter always fits afterwards.
    for (j, &cp) in input.iter().enumerate() {
        if cp < initial_n {
            if output.len() + 2 > max_out {
                return Err(CodecError::BigOutput);
            }
            let byte = cp.to_u32() as u8;
            output.push(match case_flags {
                Some(flags) => digits::encode_basic(byte, flags[j]),
                None => byte,
            });
        }
    }

    let basic_count = output.len();
    let mut handled = basic_count;
    if basic_count > 0 {
        output.push(DELIMITER);
    }

    let mut n = initial_n;
    let mut delta = C::ZERO;
    let mut bias = C::from_u32(INITIAL_BIAS);

    while handled < input.len() {
        // All non-basic code points below n are done.  The next rank to
        // encode is the smallest value >= n anywhere in the input; C::MAX
        // doubles as the scan sentinel.
        let mut m = C::MAX;
        for &cp in input {
            if cp >= n && cp < m {
                m = cp;
            }
        }

        // Advance the decoder's <n, i> state to <m, 0>.
        let h1 = C::from_usize(handled + 1).ok_or(CodecError::Overflow)?;
        delta = (m - n)
            .checked_mul(h1)
            .and_then(|step| delta.checked_add(step))
            .ok_or(CodecError::Overflow)?;
        n = m;

        for (j, &cp) in input.iter().enumerate() {
            if cp < n {
                delta = delta.checked_add(C::ONE).ok_or(CodecError::Overflow)?;
            }
            if cp == n {
                // Emit delta as a generalized variable-length integer: one
                // digit per position until the remainder drops below the
                // position's threshold.
                let mut q = delta;
                let mut k = base;
                loop {
                    if output.len() >= max_out {
                        return Err(CodecError::BigOutput);
                    }
                    let t = bias::threshold(k, bias);
                    if q < t {
                        break;
                    }
                    let digit = t + (q - t) % (base - t);
                    output.push(digits::encode_digit(digit.to_u32(), false));
                    q = (q - t) / (base - t);
                    k = k + base;
                }

                // The terminating digit carries this code point's case flag.
                let uppercase = case_flags.is_some_and(|flags| flags[j]);
                output.push(digits::encode_digit(q.to_u32(), uppercase));

                let num_points = C::from_usize(handled + 1).ok_or(CodecError::Overflow)?;
                bias = bias::adapt(delta, num_points, handled == basic_count);
                delta = C::ZERO;
                handled += 1;
            }
        }

        // Advance past the code point just handled.  delta was reset during
        // the pass and then counted at most the remaining input positions, so
        // the plain increment cannot wrap.  n == C::MAX only when the pass
        // just handled every remaining point, so stopping here coincides with
        // the loop condition.
        delta = delta + C::ONE;
        let Some(next) = n.checked_add(C::ONE) else {
            break;
        };
        n = next;
    }

    Ok(output)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
