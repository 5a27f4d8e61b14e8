//! Rendering of analysis results
//!
//! Human output is a labelled block, one field per line.

use anyhow::Result;
use colored::Colorize;
use ipclass_core::{AnalysisResult, IpClassError, SubnetMask};
use serde::Serialize;
use std::io::Write;

use crate::OutputFormat;

/// Text shown for any rejected address.
pub const INVALID_ADDRESS: &str = "Invalid IP Address.";

#[derive(Serialize)]
struct PrefixResult {
    mask: String,
    #[serde(rename = "prefixLength")]
    prefix_len: u8,
}

#[derive(Serialize)]
struct ErrorResult<'a> {
    input: &'a str,
    error: String,
}

pub fn write_analysis<W: Write>(
    out: &mut W,
    result: &AnalysisResult,
    format: &OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Human => write_human(out, result)?,
        OutputFormat::Json => write_json(out, result, true)?,
        OutputFormat::JsonCompact => write_json(out, result, false)?,
        OutputFormat::Csv => write_csv(out, result)?,
    }
    Ok(())
}

pub fn write_prefix<W: Write>(
    out: &mut W,
    mask: &SubnetMask,
    prefix_len: u8,
    format: &OutputFormat,
) -> Result<()> {
    let result = PrefixResult {
        mask: mask.to_string(),
        prefix_len,
    };
    match format {
        OutputFormat::Human => {
            writeln!(out, "{:>18}: {}", "Subnet".bold(), result.mask)?;
            writeln!(
                out,
                "{:>18}: {}",
                "Prefix Length".bold(),
                format!("/{}", prefix_len).green()
            )?;
        }
        OutputFormat::Json => write_json(out, &result, true)?,
        OutputFormat::JsonCompact => write_json(out, &result, false)?,
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(out);
            wtr.write_record(["mask", "prefixLength"])?;
            wtr.write_record([result.mask, prefix_len.to_string()])?;
            wtr.flush()?;
        }
    }
    Ok(())
}

/// Report a rejected input. Human output uses the fixed form message.
pub fn write_error<W: Write>(
    out: &mut W,
    input: &str,
    error: &IpClassError,
    format: &OutputFormat,
) -> Result<()> {
    let message = match error {
        IpClassError::InvalidAddress(_) => INVALID_ADDRESS.to_string(),
        other => other.to_string(),
    };
    match format {
        OutputFormat::Human => writeln!(out, "{}", message.red())?,
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(out);
            wtr.write_record(["input", "error"])?;
            wtr.write_record([input, message.as_str()])?;
            wtr.flush()?;
        }
        OutputFormat::Json | OutputFormat::JsonCompact => {
            let pretty = matches!(format, OutputFormat::Json);
            write_json(out, &ErrorResult { input, error: message }, pretty)?
        }
    }
    Ok(())
}

fn write_human<W: Write>(out: &mut W, result: &AnalysisResult) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "IPv4 Classful Analysis".bold().cyan())?;
    writeln!(out, "{}", "─".repeat(60).dimmed())?;
    writeln!(out, "{:>18}: {}", "IP Address".bold(), result.address)?;
    writeln!(out, "{:>18}: {}", "Class".bold(), result.class)?;
    writeln!(out, "{:>18}: {}", "Subnet".bold(), result.mask)?;
    writeln!(
        out,
        "{:>18}: {}",
        "IP Range (CIDR)".bold(),
        result.cidr_range.green()
    )?;
    writeln!(
        out,
        "{:>18}: {}",
        "Broadcast Address".bold(),
        result.broadcast_text()
    )?;
    writeln!(out, "{:>18}: {}", "Binary Equivalent".bold(), result.binary)?;
    writeln!(out)?;
    Ok(())
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T, pretty: bool) -> Result<()> {
    if pretty {
        writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    } else {
        writeln!(out, "{}", serde_json::to_string(value)?)?;
    }
    Ok(())
}

fn write_csv<W: Write>(out: &mut W, result: &AnalysisResult) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record([
        "ip",
        "class",
        "subnet",
        "ipRange",
        "prefixLength",
        "broadcast",
        "binary",
    ])?;
    wtr.write_record([
        result.address.to_string(),
        result.class.to_string(),
        result.mask.to_string(),
        result.cidr_range.clone(),
        result.prefix_len.to_string(),
        result.broadcast_text(),
        result.binary.clone(),
    ])?;
    wtr.flush()?;
    Ok(())
}
