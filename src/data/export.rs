use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{bail, Context, Result};

use super::model::ObservationRecord;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Write records to a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row, one record per line, ISO dates
/// * `.json` – `[{ "company_name": ..., "date": "2023-01-01", ... }, ...]`
pub fn write_records<'a, I>(path: &Path, records: I) -> Result<()>
where
    I: IntoIterator<Item = &'a ObservationRecord>,
{
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => write_csv(path, records),
        "json" => write_json(path, records),
        other => bail!("Unsupported export extension: .{other}"),
    }
}

fn write_csv<'a>(path: &Path, records: impl IntoIterator<Item = &'a ObservationRecord>) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating CSV file {}", path.display()))?;
    for (i, rec) in records.into_iter().enumerate() {
        writer
            .serialize(rec)
            .with_context(|| format!("writing CSV row {i}"))?;
    }
    writer.flush().context("flushing CSV file")?;
    Ok(())
}

fn write_json<'a>(path: &Path, records: impl IntoIterator<Item = &'a ObservationRecord>) -> Result<()> {
    let rows: Vec<&ObservationRecord> = records.into_iter().collect();
    let file = File::create(path)
        .with_context(|| format!("creating JSON file {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), &rows).context("writing JSON")?;
    Ok(())
}
