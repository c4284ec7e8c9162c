//! Record sampling and streaming output.

use anyhow::{Context, Result};
use rand::Rng;
use std::fs::File;
use std::io::{self, BufWriter, ErrorKind, Write};
use std::path::Path;

use crate::names::NameList;

/// Closed sampling interval for readings, degrees Celsius.
pub const READING_MIN: f64 = -75.0;
pub const READING_MAX: f64 = 55.0;

/// What [`create_measurements`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The output file was created and fully written.
    Written,
    /// The output path already existed; nothing was touched.
    SkippedExisting,
}

/// Write `total` records to `out`, one `<name>;<reading>` line each.
///
/// Names are drawn uniformly with replacement; readings uniformly from
/// [`READING_MIN`]..=[`READING_MAX`], rendered with one fractional digit and
/// a period decimal separator.
pub fn write_records<W, R>(out: &mut W, names: &NameList, total: u64, rng: &mut R) -> io::Result<()>
where
    W: Write,
    R: Rng + ?Sized,
{
    let names = names.as_slice();
    for _ in 0..total {
        let name = &names[rng.random_range(0..names.len())];
        let reading = rng.random_range(READING_MIN..=READING_MAX);
        writeln!(out, "{name};{reading:.1}")?;
    }
    Ok(())
}

/// Generate `total` records drawn from the names in `input` into a new file
/// at `output`.
///
/// If `output` already exists this is a no-op returning
/// [`Outcome::SkippedExisting`] — prior runs are never clobbered. The guard
/// runs before `input` is read; input problems (missing file, empty name
/// list) fail before the output file is created. A write failure mid-stream
/// leaves the partial file in place.
pub fn create_measurements<R>(
    input: &Path,
    output: &Path,
    total: u64,
    rng: &mut R,
) -> Result<Outcome>
where
    R: Rng + ?Sized,
{
    if output.exists() {
        return Ok(Outcome::SkippedExisting);
    }

    let names = NameList::load(input)?;

    // create_new is exclusive: a file appearing between the guard above and
    // this open still isn't clobbered.
    let file = match File::create_new(output) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(Outcome::SkippedExisting),
        Err(e) => {
            return Err(e)
                .with_context(|| format!("failed to create output file: {}", output.display()));
        }
    };

    let mut out = BufWriter::with_capacity(128 * 1024, file);
    write_records(&mut out, &names, total, rng)
        .with_context(|| format!("failed to write records to {}", output.display()))?;
    out.flush()
        .with_context(|| format!("failed to flush {}", output.display()))?;

    Ok(Outcome::Written)
}
