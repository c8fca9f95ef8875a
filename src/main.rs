//! Line filter: exchange order payloads on stdin, ExecutionReport field values on stdout.
//!
//! Each input line is one JSON value: an object is a legacy order record, an array an order
//! payload. `INPUT_FORMAT` (`auto`, `legacy`, `order`) forces one interpretation. Each
//! output line is the JSON report. Bad lines are logged and skipped.

use fix_translate::{order_from_legacy, order_from_raw, report_from_order, LegacyOrder, Order, TranslateError};
use log::{info, warn};
use serde_json::Value;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum InputFormat {
    Auto,
    Legacy,
    Order,
}

impl FromStr for InputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("auto") {
            Ok(InputFormat::Auto)
        } else if s.eq_ignore_ascii_case("legacy") {
            Ok(InputFormat::Legacy)
        } else if s.eq_ignore_ascii_case("order") {
            Ok(InputFormat::Order)
        } else {
            Err(format!("unknown input format {:?}", s))
        }
    }
}

fn line_error(e: impl std::fmt::Display) -> String {
    e.to_string()
}

fn decode_line(line: &str, format: InputFormat) -> Result<Order, String> {
    let value: Value = serde_json::from_str(line).map_err(line_error)?;
    let legacy = match format {
        InputFormat::Legacy => true,
        InputFormat::Order => false,
        InputFormat::Auto => value.is_object(),
    };
    if legacy {
        let record: LegacyOrder = serde_json::from_value(value).map_err(line_error)?;
        order_from_legacy(&record).map_err(|e| TranslateError::from(e).to_string())
    } else {
        order_from_raw(&value).map_err(|e| TranslateError::from(e).to_string())
    }
}

fn convert_line(line: &str, format: InputFormat) -> Result<String, String> {
    let order = decode_line(line, format)?;
    let report = report_from_order(&order, None).map_err(line_error)?;
    serde_json::to_string(&report).map_err(line_error)
}

/// Converts every line of `input` into `out`. Returns (converted, skipped).
///
/// Bad input lines are skipped. The first write error ends the run.
fn run(input: impl BufRead, mut out: impl Write, format: InputFormat) -> (usize, usize) {
    let (mut ok, mut failed) = (0usize, 0usize);
    for (n, line) in input.lines().enumerate() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                warn!("stdin read error: {}", e);
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        let json = match convert_line(&line, format) {
            Ok(json) => json,
            Err(e) => {
                failed += 1;
                warn!("line {} skipped: {}", n + 1, e);
                continue;
            }
        };
        if let Err(e) = writeln!(out, "{}", json) {
            warn!("stdout write error at line {}: {}", n + 1, e);
            return (ok, failed);
        }
        ok += 1;
    }
    if let Err(e) = out.flush() {
        warn!("stdout flush error: {}", e);
    }
    (ok, failed)
}

fn main() {
    let _ = env_logger::try_init();
    let format = std::env::var("INPUT_FORMAT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(InputFormat::Auto);
    info!("reading order payloads from stdin format={:?}", format);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let (ok, failed) = run(stdin.lock(), stdout.lock(), format);
    info!("done converted={} skipped={}", ok, failed);
}
