// LogTally - core/export.rs
//
// Table, CSV and JSON rendering of level counts.
// Core layer: writes to any Write trait object.

use crate::core::model::LevelCounts;
use crate::util::constants;
use crate::util::error::ExportError;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Two-column aligned text table.
    #[default]
    Table,
    /// JSON object of level -> count.
    Json,
    /// `level,count` CSV with a header row.
    Csv,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(format!(
                "unknown format \"{other}\", expected table, json or csv"
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Table => "table",
            Self::Json => "json",
            Self::Csv => "csv",
        })
    }
}

/// Layout of the text table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableStyle {
    /// Width the level column is left-aligned to.
    pub level_width: usize,
    pub level_header: String,
    pub count_header: String,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            level_width: constants::DEFAULT_LEVEL_WIDTH,
            level_header: constants::DEFAULT_LEVEL_HEADER.to_string(),
            count_header: constants::DEFAULT_COUNT_HEADER.to_string(),
        }
    }
}

/// Render counts as a header row, a separator row and one row per level.
///
/// The separator is `level_width + 1` dashes, `|`, then one dash per
/// character of the count header.
///
/// Rows follow the first-seen order held by `counts`. Every line ends with
/// a newline.
pub fn render_table(counts: &LevelCounts, style: &TableStyle) -> String {
    let width = style.level_width;
    let mut out = String::new();

    out.push_str(&format!(
        "{:<width$} | {}\n",
        style.level_header, style.count_header
    ));
    out.push_str(&format!(
        "{}|{}\n",
        "-".repeat(width + 1),
        "-".repeat(style.count_header.chars().count())
    ));
    for (level, count) in counts.iter() {
        out.push_str(&format!("{level:<width$} | {count}\n"));
    }
    out
}

/// Write the table rendering to `writer`.
pub fn export_table<W: Write>(
    counts: &LevelCounts,
    style: &TableStyle,
    mut writer: W,
) -> Result<usize, ExportError> {
    writer
        .write_all(render_table(counts, style).as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|source| ExportError::Io { source })?;
    Ok(counts.len())
}

/// Export counts as CSV: `level,count` header, then one row per level.
pub fn export_csv<W: Write>(counts: &LevelCounts, writer: W) -> Result<usize, ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["level", "count"])
        .map_err(|source| ExportError::Csv { source })?;

    let mut rows = 0;
    for (level, count) in counts.iter() {
        csv_writer
            .write_record([level, count.to_string().as_str()])
            .map_err(|source| ExportError::Csv { source })?;
        rows += 1;
    }

    csv_writer
        .flush()
        .map_err(|source| ExportError::Io { source })?;

    Ok(rows)
}

/// Export counts as a pretty-printed JSON object, keys in first-seen order.
pub fn export_json<W: Write>(counts: &LevelCounts, mut writer: W) -> Result<usize, ExportError> {
    serde_json::to_writer_pretty(&mut writer, counts)
        .map_err(|source| ExportError::Json { source })?;
    writeln!(writer).map_err(|source| ExportError::Io { source })?;
    Ok(counts.len())
}

/// Write `counts` in the requested format.
pub fn export<W: Write>(
    counts: &LevelCounts,
    format: OutputFormat,
    style: &TableStyle,
    writer: W,
) -> Result<usize, ExportError> {
    match format {
        OutputFormat::Table => export_table(counts, style, writer),
        OutputFormat::Json => export_json(counts, writer),
        OutputFormat::Csv => export_csv(counts, writer),
    }
}
