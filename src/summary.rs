//! Per-station statistics over a measurements file.
//!
//! The reference consumer for generated files: accumulates min/mean/max per
//! station and renders the classic `{A=min/mean/max, B=…}` summary line.

use anyhow::{Context, Result};
use memchr::memchr;
use std::collections::HashMap;
use std::fmt;
use std::io::{self, Write};

/// Running statistics for one station's readings.
#[derive(Debug, Clone, Copy)]
pub struct Stats {
    pub min: f64,
    pub max: f64,
    sum: f64,
    count: u64,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            sum: 0.0,
            count: 0,
        }
    }
}

impl Stats {
    fn record(&mut self, value: f64) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
        self.sum += value;
        self.count += 1;
    }

    pub fn mean(&self) -> f64 {
        self.sum / self.count as f64
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}/{:.1}/{:.1}", self.min, self.mean(), self.max)
    }
}

/// Parse a measurements buffer into per-station [`Stats`], sorted by name.
///
/// Lines are `<name>;<reading>`; a trailing `\r` is tolerated and empty
/// lines are skipped. Anything else malformed is a fatal error carrying the
/// 1-based line number.
pub fn summarize(buf: &[u8]) -> Result<Vec<(String, Stats)>> {
    let mut stations: HashMap<&str, Stats> = HashMap::new();

    let mut pos = 0;
    let mut lineno = 0u64;
    while pos < buf.len() {
        let end = memchr(b'\n', &buf[pos..]).map_or(buf.len(), |i| pos + i);
        let mut line = &buf[pos..end];
        pos = end + 1;
        lineno += 1;

        if line.last() == Some(&b'\r') {
            line = &line[..line.len() - 1];
        }
        if line.is_empty() {
            continue;
        }

        let sep = memchr(b';', line)
            .with_context(|| format!("line {lineno}: missing ';' separator"))?;
        let name = std::str::from_utf8(&line[..sep])
            .with_context(|| format!("line {lineno}: station name is not valid UTF-8"))?;
        let reading = std::str::from_utf8(&line[sep + 1..])
            .ok()
            .and_then(|s| s.parse::<f64>().ok())
            .with_context(|| format!("line {lineno}: unparseable reading"))?;

        stations.entry(name).or_default().record(reading);
    }

    let mut rows: Vec<(String, Stats)> = stations
        .into_iter()
        .map(|(name, stats)| (name.to_string(), stats))
        .collect();
    rows.sort_unstable_by(|a, b| a.0.cmp(&b.0));
    Ok(rows)
}

/// Render the summary line: `{A=min/mean/max, B=…}` plus a newline.
pub fn write_summary<W: Write>(out: &mut W, rows: &[(String, Stats)]) -> io::Result<()> {
    out.write_all(b"{")?;
    for (i, (name, stats)) in rows.iter().enumerate() {
        if i != 0 {
            out.write_all(b", ")?;
        }
        write!(out, "{name}={stats}")?;
    }
    out.write_all(b"}\n")
}
