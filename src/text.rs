// String-level convenience wrappers over the core codec.
//
// The core works on opaque unsigned integers and caller-supplied capacities;
// these helpers work on `&str`, impose no capacity, and are where Unicode
// scalar-value validity is enforced: a decoded value that is not a `char`
// is reported as bad input here, not in the codec.

use crate::punycode::{self, CodecError};

/// Encode a string as Punycode ASCII.
///
/// Case information travels in the characters themselves (no flags), so the
/// output's literal prefix preserves the input's case exactly.
///
/// ```
/// assert_eq!(oxipuny::text::encode_str("bücher").unwrap(), "bcher-kva");
/// ```
pub fn encode_str(input: &str) -> Result<String, CodecError> {
    let code_points: Vec<u32> = input.chars().map(u32::from).collect();
    let bytes = punycode::encode(&code_points, None, usize::MAX)?;
    // Encoder output is ASCII by construction.
    Ok(bytes.iter().map(|&b| char::from(b)).collect())
}

/// Decode a Punycode ASCII string.
///
/// The input must itself be ASCII.  Decoded values outside the Unicode
/// scalar range (possible, since the codec validates nothing) are rejected
/// as [`CodecError::BadInput`].  Case flags are dropped: basic characters
/// already carry their case, and this interface has nowhere to hang a hint
/// for the rest.
///
/// ```
/// assert_eq!(oxipuny::text::decode_str("bcher-kva").unwrap(), "bücher");
/// ```
pub fn decode_str(input: &str) -> Result<String, CodecError> {
    if !input.is_ascii() {
        return Err(CodecError::BadInput);
    }
    let decoded = punycode::decode::<u32>(input.as_bytes(), usize::MAX)?;
    decoded
        .code_points
        .into_iter()
        .map(|cp| char::from_u32(cp).ok_or(CodecError::BadInput))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_mixed_scripts() {
        for s in ["bücher", "Hello-Another-Way", "中文", "", "abc", "-> $1.00 <-"] {
            let encoded = encode_str(s).unwrap();
            assert!(encoded.is_ascii());
            assert_eq!(decode_str(&encoded).unwrap(), s, "via {encoded:?}");
        }
    }

    #[test]
    fn astral_plane_chars() {
        // Encoded from scalar values, not UTF-16 units.
        let s = "x😉";
        assert_eq!(decode_str(&encode_str(s).unwrap()).unwrap(), s);
    }

    #[test]
    fn non_ascii_decode_input_rejected() {
        assert_eq!(decode_str("bücher"), Err(CodecError::BadInput));
    }

    #[test]
    fn surrogate_range_output_rejected() {
        // U+D800 is not a scalar value; the codec emits it, this layer balks.
        let encoded = crate::punycode::encode(&[0xD800u32], None, usize::MAX).unwrap();
        let encoded: String = encoded.iter().map(|&b| char::from(b)).collect();
        assert_eq!(decode_str(&encoded), Err(CodecError::BadInput));
    }
}
