//! Command-line front end for the CRC-32/FCS engine.
//!
//! This binary is intentionally small and dependency-free: it decodes
//! operator input (hex or ASCII) at the boundary, hands well-formed bytes
//! to the engine, and prints the returned results. It replaces the
//! interactive menu of the original tool with explicit subcommands.

use std::{env, process::ExitCode};

use ethfcs::{Crc32, Kernel, hex};

const USAGE: &str = "\
ethfcs - Ethernet CRC-32 frame check sequence tool

USAGE:
  ethfcs checksum (--hex DATA | --ascii TEXT) [--bitwise]
  ethfcs verify --hex DATA --fcs FCS
  ethfcs demo
  ethfcs help

COMMANDS:
  checksum   Compute the CRC-32 and FCS of the given data
  verify     Validate received data against its claimed FCS
  demo       Run a fixed demonstration (compute, validate, corrupt)

OPTIONS:
  --hex DATA     Data as hexadecimal digits (even length, e.g. 48454C4C4F)
  --ascii TEXT   Data as ASCII text
  --fcs FCS      Received FCS as hex, optional 0x prefix (e.g. 0x8CD7CDBA)
  --bitwise      Use the bit-at-a-time kernel instead of the lookup table
";

enum Source {
  Hex(String),
  Ascii(String),
}

fn next_value(it: &mut env::Args, flag: &str) -> Result<String, String> {
  it.next().ok_or_else(|| format!("{flag} requires a value"))
}

fn decode_source(source: &Source) -> Result<Vec<u8>, String> {
  match source {
    Source::Hex(text) => hex::decode_hex(text.trim()).map_err(|e| format!("bad hex data: {e}")),
    Source::Ascii(text) => hex::decode_ascii(text).map_err(|e| format!("bad ASCII data: {e}")),
  }
}

fn print_data(data: &[u8]) {
  println!("data (hex):   {}", hex::encode_hex(data));
  println!(
    "data (ascii): {}",
    data
      .iter()
      .map(|&b| if (0x20..0x7F).contains(&b) { b as char } else { '.' })
      .collect::<String>()
  );
  println!("length:       {} bytes", data.len());
}

fn cmd_checksum(it: &mut env::Args) -> Result<ExitCode, String> {
  let mut source = None;
  let mut kernel = Kernel::Table;

  while let Some(arg) = it.next() {
    match arg.as_str() {
      "--hex" => source = Some(Source::Hex(next_value(it, "--hex")?)),
      "--ascii" => source = Some(Source::Ascii(next_value(it, "--ascii")?)),
      "--bitwise" => kernel = Kernel::Bitwise,
      other => return Err(format!("unknown argument: {other}")),
    }
  }

  let source = source.ok_or("checksum needs --hex or --ascii")?;
  let data = decode_source(&source)?;

  let engine = Crc32::new();
  let crc = engine.compute(&data, kernel);
  let fcs = !crc;

  print_data(&data);
  println!("kernel:       {}", kernel.name());
  println!("crc-32:       0x{crc:08X} ({crc})");
  println!("fcs:          0x{fcs:08X} ({fcs})");
  Ok(ExitCode::SUCCESS)
}

fn cmd_verify(it: &mut env::Args) -> Result<ExitCode, String> {
  let mut data_text = None;
  let mut fcs_text = None;

  while let Some(arg) = it.next() {
    match arg.as_str() {
      "--hex" => data_text = Some(next_value(it, "--hex")?),
      "--fcs" => fcs_text = Some(next_value(it, "--fcs")?),
      other => return Err(format!("unknown argument: {other}")),
    }
  }

  let data_text = data_text.ok_or("verify needs --hex")?;
  let fcs_text = fcs_text.ok_or("verify needs --fcs")?;

  let data = hex::decode_hex(data_text.trim()).map_err(|e| format!("bad hex data: {e}"))?;
  let received = hex::parse_fcs(fcs_text.trim()).map_err(|e| format!("bad FCS: {e}"))?;

  let engine = Crc32::new();
  let check = engine.frame_check(&data);
  let status = engine.validate(&data, received);

  print_data(&data);
  println!("computed crc: 0x{:08X}", check.crc);
  println!("computed fcs: 0x{:08X}", check.fcs);
  println!("received fcs: 0x{received:08X}");
  println!("status:       {status}");

  Ok(if status.is_intact() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

fn cmd_demo() -> ExitCode {
  let engine = Crc32::new();
  let data = b"HELLO";

  let check = engine.frame_check(data);
  println!("== transmitter ==");
  print_data(data);
  println!("crc-32:       0x{:08X}", check.crc);
  println!("fcs:          0x{:08X}", check.fcs);

  println!();
  println!("== receiver, clean channel ==");
  println!("status:       {}", engine.validate(data, check.fcs));

  let mut corrupted = *data;
  corrupted[2] ^= 0x01;
  println!();
  println!("== receiver, one bit flipped in transit ==");
  print_data(&corrupted);
  println!("status:       {}", engine.validate(&corrupted, check.fcs));

  ExitCode::SUCCESS
}

fn run() -> Result<ExitCode, String> {
  let mut args = env::args();
  let _ = args.next(); // program name

  match args.next().as_deref() {
    Some("checksum") => cmd_checksum(&mut args),
    Some("verify") => cmd_verify(&mut args),
    Some("demo") => Ok(cmd_demo()),
    Some("help") | Some("--help") | Some("-h") | None => {
      print!("{USAGE}");
      Ok(ExitCode::SUCCESS)
    }
    Some(other) => Err(format!("unknown command: {other}")),
  }
}

fn main() -> ExitCode {
  match run() {
    Ok(code) => code,
    Err(message) => {
      eprintln!("error: {message}");
      eprintln!("run `ethfcs help` for usage");
      ExitCode::from(2)
    }
  }
}
