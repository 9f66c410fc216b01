// End-to-end codec behavior that spans encoder and decoder: failure
// classification, delimiter handling, and the scalar width boundary.

use oxipuny::punycode::{CodecError, decode, encode};

fn cps(s: &str) -> Vec<u32> {
    s.chars().map(u32::from).collect()
}

#[test]
fn status_classification() {
    // BadInput: only decode produces it.
    assert_eq!(
        decode::<u32>(b"\xC3\xBC-", usize::MAX).unwrap_err(),
        CodecError::BadInput
    );
    // Truncated digit run: both bytes are continuation digits.
    assert_eq!(
        decode::<u32>(b"zz", usize::MAX).unwrap_err(),
        CodecError::BadInput
    );

    // BigOutput: both directions, capacity zero.
    assert_eq!(
        encode::<u32>(&cps("a"), None, 0).unwrap_err(),
        CodecError::BigOutput
    );
    assert_eq!(
        decode::<u32>(b"tda", 0).unwrap_err(),
        CodecError::BigOutput
    );

    // Overflow: a u16 build rejects what u32 handles.
    let input = cps("aü€汉");
    let encoded = encode(&input, None, usize::MAX).unwrap();
    let narrow: Vec<u16> = input.iter().map(|&c| c as u16).collect();
    assert_eq!(
        encode::<u16>(&narrow, None, usize::MAX).unwrap_err(),
        CodecError::Overflow
    );
    assert_eq!(
        decode::<u16>(&encoded, usize::MAX).unwrap_err(),
        CodecError::Overflow
    );
}

#[test]
fn widths_agree_on_shared_domain() {
    // Values small enough for u16 arithmetic decode identically at every
    // width (the Overflow status means "width too narrow", never "different
    // answer").
    let encoded = encode(&cps("abcß"), None, usize::MAX).unwrap();
    let d16 = decode::<u16>(&encoded, usize::MAX).unwrap();
    let d32 = decode::<u32>(&encoded, usize::MAX).unwrap();
    let d64 = decode::<u64>(&encoded, usize::MAX).unwrap();

    let as32: Vec<u32> = d16.code_points.iter().map(|&c| u32::from(c)).collect();
    assert_eq!(as32, d32.code_points);
    let from64: Vec<u32> = d64.code_points.iter().map(|&c| c as u32).collect();
    assert_eq!(from64, d32.code_points);
    assert_eq!(d16.case_flags, d32.case_flags);
}

#[test]
fn last_delimiter_is_authoritative() {
    // Hyphens in the literal prefix are ordinary basic characters; only the
    // final one separates prefix from digits.
    let input = cps("one-two-ü");
    let encoded = encode(&input, None, usize::MAX).unwrap();
    let text = String::from_utf8(encoded.clone()).unwrap();
    assert!(text.starts_with("one-two-"));
    assert!(text.matches('-').count() >= 3);

    let decoded = decode::<u32>(&encoded, usize::MAX).unwrap();
    assert_eq!(decoded.code_points, input);
}

#[test]
fn delimiter_only_strings() {
    // "--" is the encoding of "-": prefix "-" plus the separating delimiter.
    let encoded = encode(&cps("-"), None, usize::MAX).unwrap();
    assert_eq!(encoded, b"--");
    assert_eq!(decode::<u32>(b"--", usize::MAX).unwrap().code_points, cps("-"));

    // A lone delimiter leaves an empty prefix and no digits to read.
    assert_eq!(decode::<u32>(b"-", usize::MAX).unwrap_err(), CodecError::BadInput);
}

#[test]
fn case_flags_roundtrip_through_both_directions() {
    // Flags that agree with the basic letters' own case round-trip the code
    // points untouched; the non-basic flag rides the final digit.
    let input = cps("Dübel");
    let flags = [true, true, false, false, false];
    let encoded = encode(&input, Some(&flags), usize::MAX).unwrap();
    let decoded = decode::<u32>(&encoded, usize::MAX).unwrap();

    assert_eq!(decoded.code_points, input);
    assert_eq!(decoded.case_flags, flags);
}

#[test]
fn flags_case_normalize_basic_letters() {
    // A flag that contradicts a basic letter's case wins: the decoded code
    // point is the case-forced one.
    let encoded = encode(&cps("a"), Some(&[true]), usize::MAX).unwrap();
    assert_eq!(encoded, b"A-");
    let decoded = decode::<u32>(&encoded, usize::MAX).unwrap();
    assert_eq!(decoded.code_points, cps("A"));
    assert_eq!(decoded.case_flags, [true]);
}

#[test]
fn decoder_insertion_order_is_value_then_position() {
    // Two copies of the same non-basic point interleaved with a higher one:
    // the decoder must rebuild the original order via insertions alone.
    let input = vec![0x4E2Du32, 0x62, 0x4E2D, 0x8A9E];
    let encoded = encode(&input, None, usize::MAX).unwrap();
    let decoded = decode::<u32>(&encoded, usize::MAX).unwrap();
    assert_eq!(decoded.code_points, input);
}
