#![no_main]
use libfuzzer_sys::fuzz_target;
use oxipuny::io;

fuzz_target!(|data: &[u8]| {
    // Token parser over arbitrary (possibly non-UTF-8) input.
    let mut reader = data;
    let _ = io::read_code_points(&mut reader);

    if let Ok(text) = str::from_utf8(data) {
        for token in text.split_whitespace() {
            if let Ok((cp, flag)) = io::parse_token(token) {
                // Anything that parses must format back to a parseable token
                // with the same meaning.
                assert_eq!(io::parse_token(&io::format_token(cp, flag)).unwrap(), (cp, flag));
            }
        }
    }

    let _ = io::printable_str(data);
});
