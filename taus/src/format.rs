use clap::ValueEnum;
use std::io::{self, Write};
use tausrandom::to_unit_f64;

/// Output format for generated words
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Unsigned decimal (default)
    Dec,
    /// Zero-padded hexadecimal, e.g. `0x0dd3a345`
    Hex,
    /// Uniform float in [0, 1): word * 2^-32
    Unit,
    /// Raw little-endian bytes, no separators
    Raw,
}

/// Format a single word as text. `Raw` has no text form and falls back to decimal.
pub fn format_word(word: u32, format: OutputFormat) -> String {
    match format {
        OutputFormat::Dec | OutputFormat::Raw => word.to_string(),
        OutputFormat::Hex => format!("0x{:08x}", word),
        OutputFormat::Unit => to_unit_f64(word).to_string(),
    }
}

/// Write words one per line (raw: back-to-back little-endian bytes).
pub fn write_column<W: Write>(out: &mut W, words: &[u32], format: OutputFormat) -> io::Result<()> {
    if format == OutputFormat::Raw {
        return write_raw(out, words);
    }
    for &word in words {
        writeln!(out, "{}", format_word(word, format))?;
    }
    Ok(())
}

/// Write words as one space-separated row (raw: back-to-back bytes).
pub fn write_row<W: Write>(out: &mut W, words: &[u32], format: OutputFormat) -> io::Result<()> {
    if format == OutputFormat::Raw {
        return write_raw(out, words);
    }
    let row: Vec<String> = words.iter().map(|&w| format_word(w, format)).collect();
    writeln!(out, "{}", row.join(" "))
}

fn write_raw<W: Write>(out: &mut W, words: &[u32]) -> io::Result<()> {
    for &word in words {
        out.write_all(&word.to_le_bytes())?;
    }
    Ok(())
}
