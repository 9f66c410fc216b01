// Token protocol of the reference tool.
//
// Code points travel as whitespace-separated `u+HEX` tokens; the case of the
// `u` is the per-code-point case flag.  Punycode strings travel as single
// newline-terminated lines restricted to printable ASCII.  This is plain I/O
// glue: the codec itself never sees any of it.

use std::io::{self, Read, Write};

use log::debug;

use crate::punycode::CodecError;

/// Lowest printable ASCII byte accepted on the wire (space).
const PRINTABLE_MIN: u8 = 0x20;
/// Highest printable ASCII byte accepted on the wire ('~').
const PRINTABLE_MAX: u8 = 0x7E;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Error type for the token protocol.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// A token that is not `u+HEX` / `U+HEX`, or whose value does not fit.
    #[error("invalid code point token `{0}`")]
    BadToken(String),
    /// A Punycode line containing bytes outside printable ASCII.
    #[error("Punycode string contains non-printable characters")]
    Unprintable,
    #[error(transparent)]
    Codec(#[from] CodecError),
}

// ---------------------------------------------------------------------------
// Tokens
// ---------------------------------------------------------------------------

/// Parse one `u+HEX` token into a code point and its case flag.
///
/// `u+` means unflagged, `U+` flagged; the hex part must be non-empty and
/// fit a `u32`.
pub fn parse_token(token: &str) -> Result<(u32, bool), ProtocolError> {
    let bad = || ProtocolError::BadToken(token.to_string());
    let flag = match token.as_bytes() {
        [b'u', b'+', rest @ ..] if !rest.is_empty() => false,
        [b'U', b'+', rest @ ..] if !rest.is_empty() => true,
        _ => return Err(bad()),
    };
    let value = u32::from_str_radix(&token[2..], 16).map_err(|_| bad())?;
    Ok((value, flag))
}

/// Format a code point and flag as a token, `%s+%04X` style: at least four
/// uppercase hex digits, as the reference tool prints them.
pub fn format_token(cp: u32, flag: bool) -> String {
    format!("{}+{cp:04X}", if flag { 'U' } else { 'u' })
}

/// Read whitespace-separated tokens until end of input.
///
/// Returns parallel code point and flag vectors.
pub fn read_code_points<R: Read>(reader: &mut R) -> Result<(Vec<u32>, Vec<bool>), ProtocolError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let mut code_points = Vec::new();
    let mut flags = Vec::new();
    for token in text.split_whitespace() {
        let (cp, flag) = parse_token(token)?;
        code_points.push(cp);
        flags.push(flag);
    }
    debug!("read {} code point tokens", code_points.len());
    Ok((code_points, flags))
}

/// Write one token per line, as the reference tool's decode mode does.
pub fn write_code_points<W: Write>(
    writer: &mut W,
    code_points: &[u32],
    flags: &[bool],
) -> io::Result<()> {
    for (&cp, &flag) in code_points.iter().zip(flags) {
        writeln!(writer, "{}", format_token(cp, flag))?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Punycode lines
// ---------------------------------------------------------------------------

/// View an encoded byte string as printable ASCII text.
///
/// The reference tool converts through a printable-characters table and
/// rejects everything outside it; basic code points below space or above
/// '~' cannot be represented on a text line.
pub fn printable_str(bytes: &[u8]) -> Result<&str, ProtocolError> {
    if bytes
        .iter()
        .all(|&b| (PRINTABLE_MIN..=PRINTABLE_MAX).contains(&b))
    {
        // All bytes are printable ASCII, hence valid UTF-8.
        str::from_utf8(bytes).map_err(|_| ProtocolError::Unprintable)
    } else {
        Err(ProtocolError::Unprintable)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
