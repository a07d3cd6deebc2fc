#[cfg(any(feature = "with-serde", feature = "with-csv"))]
use anyhow::Context;
use anyhow::{Result, bail};

use crate::args::Cli;
use mailgate_lib::ValidationReport;

pub fn write_reports(rows: &[ValidationReport], cli: &Cli) -> Result<()> {
    match cli.format.as_str() {
        "human" => write_human(rows),
        "json" => write_json(rows, cli),
        "ndjson" => write_ndjson(rows, cli),
        "csv" => write_csv(rows, cli),
        other => bail!("unknown --format '{other}', use: human|json|ndjson|csv"),
    }
}

pub fn any_invalid(rows: &[ValidationReport]) -> bool {
    rows.iter().any(|row| !row.ok)
}

fn write_human(rows: &[ValidationReport]) -> Result<()> {
    for row in rows {
        println!("{}", human_line(row));
    }
    Ok(())
}

pub(crate) fn human_line(row: &ValidationReport) -> String {
    let mut line = match (&row.accepted_by, &row.reason) {
        (Some(by), _) => format!("[OK]    {} ({})", row.original, by.as_str()),
        (None, Some(why)) => format!("[INVALID] {} :: {why}", row.original),
        (None, None) => format!("[INVALID] {}", row.original),
    };
    if let Some(ascii) = &row.ascii_domain {
        line.push_str(&format!("\n        idn: {ascii}"));
    }
    line
}

#[cfg(feature = "with-serde")]
fn write_json(rows: &[ValidationReport], cli: &Cli) -> Result<()> {
    let s = serde_json::to_string_pretty(rows)?;
    if let Some(path) = &cli.out {
        write_all_atomically(path, s.as_bytes())?;
    } else {
        println!("{s}");
    }
    Ok(())
}

#[cfg(not(feature = "with-serde"))]
fn write_json(_: &[ValidationReport], _: &Cli) -> Result<()> {
    bail!("format=json nécessite la feature 'with-serde'")
}

#[cfg(feature = "with-serde")]
fn write_ndjson(rows: &[ValidationReport], cli: &Cli) -> Result<()> {
    if let Some(path) = &cli.out {
        let mut buf = Vec::new();
        for row in rows {
            let line = serde_json::to_string(row)?;
            buf.extend_from_slice(line.as_bytes());
            buf.push(b'\n');
        }
        write_all_atomically(path, &buf)?;
    } else {
        for row in rows {
            println!("{}", serde_json::to_string(row)?);
        }
    }
    Ok(())
}

#[cfg(not(feature = "with-serde"))]
fn write_ndjson(_: &[ValidationReport], _: &Cli) -> Result<()> {
    bail!("format=ndjson nécessite la feature 'with-serde'")
}

#[cfg(feature = "with-csv")]
fn write_csv(rows: &[ValidationReport], cli: &Cli) -> Result<()> {
    if let Some(path) = &cli.out {
        let mut wtr = csv::Writer::from_writer(Vec::new());
        wtr.write_record(CSV_HEADER)?;
        for row in rows {
            wtr.write_record(csv_record(row))?;
        }
        let data = wtr.into_inner()?;
        write_all_atomically(path, &data)?;
    } else {
        let mut wtr = csv::Writer::from_writer(std::io::stdout());
        wtr.write_record(CSV_HEADER)?;
        for row in rows {
            wtr.write_record(csv_record(row))?;
        }
        wtr.flush()?;
    }
    Ok(())
}

#[cfg(not(feature = "with-csv"))]
fn write_csv(_: &[ValidationReport], _: &Cli) -> Result<()> {
    bail!("format=csv nécessite la feature 'with-csv'")
}

#[cfg(feature = "with-csv")]
const CSV_HEADER: [&str; 5] = ["original", "valid", "accepted_by", "reason", "ascii_domain"];

#[cfg(feature = "with-csv")]
fn csv_record(row: &ValidationReport) -> [String; 5] {
    [
        row.original.clone(),
        row.ok.to_string(),
        row.accepted_by
            .map(|by| by.as_str().to_string())
            .unwrap_or_default(),
        row.reason.as_ref().map(ToString::to_string).unwrap_or_default(),
        row.ascii_domain.clone().unwrap_or_default(),
    ]
}

#[cfg(any(feature = "with-serde", feature = "with-csv"))]
fn write_all_atomically(path: &str, bytes: &[u8]) -> Result<()> {
    use std::io::Write;

    let tmp = format!("{path}.tmp");
    {
        let mut f = std::fs::File::create(&tmp).with_context(|| format!("create {tmp}"))?;
        f.write_all(bytes)?;
        f.sync_all()?;
    }
    std::fs::rename(&tmp, path).with_context(|| format!("rename {tmp} -> {path}"))?;
    Ok(())
}
