// Command-line front end for the Punycode codec.
//
// Speaks the reference tool's line protocol: encode mode reads
// whitespace-separated `u+HEX` tokens until end of input and writes one
// Punycode line; decode mode reads one Punycode line and writes one token
// per code point.  The case of the `u` carries the case flag.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use log::debug;

use crate::io::{self as proto, ProtocolError};
use crate::punycode;

// ---------------------------------------------------------------------------
// Clap CLI definition
// ---------------------------------------------------------------------------

/// Punycode (RFC 3492) encoder/decoder.
#[derive(Parser, Debug)]
#[command(
    name = "oxipuny",
    version,
    about = "Punycode/Bootstring encoder/decoder",
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Cmd,

    /// Force overwrite existing output files.
    #[arg(short = 'f', long, global = true)]
    force: bool,

    /// Quiet mode (suppress non-error output).
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Verbose mode (print codec statistics to stderr).
    #[arg(short = 'v', long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Read u+HEX code point tokens, write a Punycode string.
    Encode(IoArgs),
    /// Read a Punycode string, write u+HEX code point tokens.
    Decode(IoArgs),
}

#[derive(clap::Args, Debug)]
struct IoArgs {
    /// Input file (stdin if omitted).
    input: Option<PathBuf>,

    /// Output file (stdout if omitted).
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Cap the output length: ASCII characters for encode, code points for
    /// decode.  Unlimited by default; the reference tool compiled in 256.
    #[arg(long, value_name = "N")]
    max_length: Option<usize>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn open_input(path: Option<&PathBuf>) -> io::Result<Box<dyn BufRead>> {
    Ok(match path {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    })
}

fn open_output(path: Option<&PathBuf>) -> io::Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout().lock()),
    })
}

/// Refuse to clobber an existing output file unless -f was given.
fn refuse_overwrite(path: Option<&PathBuf>, force: bool) -> bool {
    if let Some(path) = path {
        if path.exists() && !force {
            eprintln!(
                "oxipuny: output file exists, use -f to overwrite: {}",
                path.display()
            );
            return true;
        }
    }
    false
}

fn report(err: &ProtocolError) -> i32 {
    eprintln!("oxipuny: {err}");
    1
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_encode(args: &IoArgs, cli: &Cli) -> i32 {
    if refuse_overwrite(args.output.as_ref(), cli.force) {
        return 1;
    }

    let run = || -> Result<(usize, usize), ProtocolError> {
        let mut reader = open_input(args.input.as_ref())?;
        let (code_points, flags) = proto::read_code_points(&mut reader)?;

        let max_out = args.max_length.unwrap_or(usize::MAX);
        let encoded = punycode::encode(&code_points, Some(&flags), max_out)?;
        let line = proto::printable_str(&encoded)?;
        debug!("encoded {} code points", code_points.len());

        let mut writer = open_output(args.output.as_ref())?;
        writeln!(writer, "{line}")?;
        Ok((code_points.len(), encoded.len()))
    };

    match run() {
        Ok((points, chars)) => {
            if cli.verbose && !cli.quiet {
                eprintln!("oxipuny: encode: {points} code points, {chars} characters");
            }
            0
        }
        Err(err) => report(&err),
    }
}

fn cmd_decode(args: &IoArgs, cli: &Cli) -> i32 {
    if refuse_overwrite(args.output.as_ref(), cli.force) {
        return 1;
    }

    let run = || -> Result<(usize, usize), ProtocolError> {
        let mut reader = open_input(args.input.as_ref())?;
        let mut line = String::new();
        reader.read_line(&mut line)?;
        let line = line.trim_end_matches(['\n', '\r']);
        // The wire only carries printable ASCII.
        proto::printable_str(line.as_bytes())?;

        let max_out = args.max_length.unwrap_or(usize::MAX);
        let decoded = punycode::decode::<u32>(line.as_bytes(), max_out)?;
        debug!("decoded {} code points", decoded.code_points.len());

        let mut writer = open_output(args.output.as_ref())?;
        proto::write_code_points(&mut writer, &decoded.code_points, &decoded.case_flags)?;
        Ok((line.len(), decoded.code_points.len()))
    };

    match run() {
        Ok((chars, points)) => {
            if cli.verbose && !cli.quiet {
                eprintln!("oxipuny: decode: {chars} characters, {points} code points");
            }
            0
        }
        Err(err) => report(&err),
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Main CLI entry point.  Parses arguments via clap, dispatches commands.
pub fn run() -> ! {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let cli = Cli::parse();
    let exit_code = match &cli.command {
        Cmd::Encode(args) => cmd_encode(args, &cli),
        Cmd::Decode(args) => cmd_decode(args, &cli),
    };

    process::exit(exit_code);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
