//! Interactive prompts for the values not supplied on the command line.
//!
//! Thin I/O wrappers around stdin/stdout; the report pipeline itself never
//! reads from the terminal. Each prompt has an injectable-stream core so
//! the parsing can be tested without a terminal.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::OutputTarget;

/// Ask for the path to the input log file.
pub fn ask_log_path() -> io::Result<PathBuf> {
    let stdin = io::stdin();
    ask_log_path_from(&mut stdin.lock(), &mut io::stdout())
}

/// Ask whether to print to the console or save to a file.
///
/// Re-prompts until the answer is `1` or `2`.
pub fn ask_output_target() -> io::Result<OutputTarget> {
    let stdin = io::stdin();
    ask_output_target_from(&mut stdin.lock(), &mut io::stdout())
}

/// Ask for the report file name; `.txt` is appended by the caller.
pub fn ask_file_name() -> io::Result<String> {
    let stdin = io::stdin();
    ask_file_name_from(&mut stdin.lock(), &mut io::stdout())
}

// ── Stream-injectable cores ────────────────────────────────────────────────────

fn ask_log_path_from(input: &mut impl BufRead, output: &mut impl Write) -> io::Result<PathBuf> {
    write!(output, "Enter path to log file: ")?;
    output.flush()?;
    Ok(PathBuf::from(read_trimmed_line(input)?))
}

fn ask_output_target_from(
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<OutputTarget> {
    loop {
        writeln!(output, "[1] Print to console\n[2] Save to file")?;
        output.flush()?;
        match parse_target(&read_trimmed_line(input)?) {
            Some(target) => return Ok(target),
            None => writeln!(output, "Please answer 1 or 2.")?,
        }
    }
}

fn ask_file_name_from(input: &mut impl BufRead, output: &mut impl Write) -> io::Result<String> {
    write!(output, "Enter file name: ")?;
    output.flush()?;
    read_trimmed_line(input)
}

fn parse_target(answer: &str) -> Option<OutputTarget> {
    match answer {
        "1" => Some(OutputTarget::Console),
        "2" => Some(OutputTarget::File),
        _ => None,
    }
}

fn read_trimmed_line(input: &mut impl BufRead) -> io::Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

// ── Tests ──────────────────────────────────────────────────────────────────────
