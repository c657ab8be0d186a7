//! Command-line CRC-32 checksummer built on the streaming computer.
//!
//! Prints the CRC-32 and size of each input, the same values a ZIP entry
//! records in its headers.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example crc32sum -- file1 file2
//! ```
//!
//! Copy the input while checksumming it, and check it against a known CRC:
//! ```sh
//! cargo run --example crc32sum -- input.bin --copy-to backup.bin --expect cbf43926
//! ```
//!
//! Read from standard input with `-`; `-v` logs every chunk to stderr.

use clap::Parser;
use soapberry_crc::{ChecksumOptions, Crc32Computer, DEFAULT_CHUNK_SIZE};
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{Level, debug};

/// Compute CRC-32 (IEEE / PKZip) checksums of files
#[derive(Parser, Debug)]
#[command(name = "crc32sum", version)]
struct Args {
    /// Input file(s), or `-` for standard input
    #[arg(value_name = "INPUT", required = true)]
    input: Vec<PathBuf>,

    /// Read buffer size in bytes
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    chunk_size: usize,

    /// Copy the input to this file while checksumming (single input only)
    #[arg(long, value_name = "FILE")]
    copy_to: Option<PathBuf>,

    /// Expected CRC in hex; exit with an error on mismatch
    #[arg(long, value_name = "HEX", value_parser = parse_hex)]
    expect: Option<u32>,

    /// Log each chunk and result
    #[arg(short, long)]
    verbose: bool,
}

fn parse_hex(s: &str) -> Result<u32, String> {
    let digits = s.trim_start_matches("0x").trim_start_matches("0X");
    u32::from_str_radix(digits, 16).map_err(|e| format!("invalid CRC '{s}': {e}"))
}

fn open(path: &Path) -> io::Result<Box<dyn Read>> {
    if path.as_os_str() == "-" {
        Ok(Box::new(io::stdin().lock()))
    } else {
        Ok(Box::new(File::open(path)?))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::TRACE } else { Level::INFO })
        .with_writer(io::stderr)
        .init();

    if args.copy_to.is_some() && args.input.len() > 1 {
        return Err("--copy-to accepts a single input".into());
    }

    let options = ChecksumOptions::new().with_chunk_size(args.chunk_size);
    let mut computer = Crc32Computer::with_options(options)?;

    let mut mismatched = false;
    for path in &args.input {
        let mut input = open(path)?;
        let crc = match &args.copy_to {
            Some(target) => {
                let mut out = BufWriter::new(File::create(target)?);
                let crc = computer.compute_and_copy(&mut input, Some(&mut out))?;
                out.flush()?;
                crc
            },
            None => computer.compute(&mut input)?,
        };
        debug!(path = %path.display(), crc, bytes = computer.total_bytes_read(), "done");

        println!(
            "{crc:08x}  {:>12}  {}",
            computer.total_bytes_read(),
            path.display()
        );

        if let Some(expected) = args.expect {
            if expected != crc {
                eprintln!("{}: expected {expected:08x}, got {crc:08x}", path.display());
                mismatched = true;
            }
        }
    }

    if mismatched {
        return Err("checksum mismatch".into());
    }
    Ok(())
}
