#![no_main]
use libfuzzer_sys::fuzz_target;
use oxipuny::punycode::{decode, encode};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // First byte is a control: flags on or off.
    let with_flags = data[0] & 1 != 0;
    let payload = &data[1..];

    // Build code points from 3-byte groups (covers basic, BMP and astral);
    // the top bit of each group doubles as its case flag.
    let mut cps = Vec::new();
    let mut flags = Vec::new();
    for chunk in payload.chunks_exact(3) {
        let cp = u32::from(chunk[0]) << 16 | u32::from(chunk[1]) << 8 | u32::from(chunk[2]);
        cps.push(cp);
        flags.push(chunk[0] & 0x80 != 0);
    }

    let case_flags = with_flags.then_some(flags.as_slice());
    let Ok(encoded) = encode(&cps, case_flags, usize::MAX) else {
        return;
    };

    // Whatever encodes must decode back to the same point sequence, up to
    // case-forcing of basic points when flags were supplied.
    let decoded = decode::<u32>(&encoded, usize::MAX).unwrap();
    assert_eq!(decoded.code_points.len(), cps.len());
    for (j, (&got, &want)) in decoded.code_points.iter().zip(&cps).enumerate() {
        if want >= 0x80 {
            assert_eq!(got, want, "non-basic point {j}");
            if with_flags {
                assert_eq!(decoded.case_flags[j], flags[j], "flag {j}");
            }
        } else {
            assert_eq!(
                (got as u8).to_ascii_lowercase(),
                (want as u8).to_ascii_lowercase(),
                "basic point {j}"
            );
        }
    }
});
