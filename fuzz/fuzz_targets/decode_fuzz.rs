#![no_main]
use libfuzzer_sys::fuzz_target;
use oxipuny::punycode::decode;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes against the decoder at several widths and capacities.
    // The decoder must never panic — only return errors.
    let _ = decode::<u32>(data, usize::MAX);
    let _ = decode::<u16>(data, usize::MAX);
    let _ = decode::<u64>(data, usize::MAX);
    let _ = decode::<u32>(data, data.len() / 2);
    let _ = decode::<u32>(data, 0);
});
