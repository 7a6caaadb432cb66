//! CSV reader configuration and orchestration.

use std::fs::File;
use std::path::Path;

use hydrostat_series::{HalfYearRecord, StationSeries};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::error::IoError;
use crate::rows::{DailyRow, HalfYearRow};
use crate::validate::{ValidationCollector, validate_single_station};

// ---------------------------------------------------------------------------
// ReaderConfig
// ---------------------------------------------------------------------------

/// Configuration for reading gauge tables from CSV.
///
/// By default every row is accepted regardless of station, malformed rows
/// are dropped with a warning and the delimiter is a comma.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Keep only rows of this station.
    station_id: Option<u32>,
    /// Fail on the first file with malformed rows instead of dropping them.
    strict: bool,
    delimiter: u8,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            station_id: None,
            strict: false,
            delimiter: b',',
        }
    }
}

impl ReaderConfig {
    /// Select one station from a multi-station file.
    pub fn with_station_id(mut self, id: u32) -> Self {
        self.station_id = Some(id);
        self
    }

    /// Reject files with malformed rows.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn station_id(&self) -> Option<u32> {
        self.station_id
    }

    pub fn strict(&self) -> bool {
        self.strict
    }

    /// Validate that the configuration is internally consistent.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] if the delimiter is a quote, a line
    /// break or not ASCII.
    pub fn validate(&self) -> Result<(), IoError> {
        if !self.delimiter.is_ascii() || matches!(self.delimiter, b'"' | b'\n' | b'\r') {
            return Err(IoError::Validation {
                count: 1,
                details: format!("unusable delimiter byte {:#04x}", self.delimiter),
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// A row that was dropped while reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MalformedRecord {
    /// 1-based line in the file, when known.
    pub line: Option<u64>,
    pub reason: String,
}

/// Daily series read from CSV.
#[derive(Debug, Clone)]
pub struct LoadedSeries {
    pub series: StationSeries,
    pub malformed: Vec<MalformedRecord>,
}

/// Half-year records read from CSV, ascending by year.
#[derive(Debug, Clone)]
pub struct LoadedHalfYears {
    pub records: Vec<HalfYearRecord>,
    pub malformed: Vec<MalformedRecord>,
}

// ---------------------------------------------------------------------------
// Readers
// ---------------------------------------------------------------------------

/// Read a daily gauge table (`station_id,year,month,day,H,Q,T`).
///
/// Rows are sorted chronologically; a repeated date keeps the first row and
/// reports the others as malformed. Missing `H`/`Q`/`T` columns read as
/// `NaN` throughout.
///
/// # Errors
///
/// - [`IoError::FileNotFound`] if `path` does not exist.
/// - [`IoError::Validation`] for an invalid config, several stations without
///   a station filter, or malformed rows in strict mode.
/// - [`IoError::Csv`] if the header cannot be read.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn read_daily_csv(path: &Path, config: &ReaderConfig) -> Result<LoadedSeries, IoError> {
    config.validate()?;
    let mut rdr = open(path, config)?;
    let (rows, mut malformed) = read_rows(&mut rdr, DailyRow::into_record)?;
    let mut records = select_station(rows, config, |r| r.station_id)?;

    records.sort_by_key(|(_, r)| r.date_key());
    records.dedup_by(|(line, later), (_, kept)| {
        let duplicate = later.date_key() == kept.date_key();
        if duplicate {
            let (y, m, d) = later.date_key();
            malformed.push(MalformedRecord {
                line: *line,
                reason: format!("duplicate date {y}-{m:02}-{d:02}"),
            });
        }
        duplicate
    });

    finish_malformed(path, &mut malformed, config.strict)?;
    let series = StationSeries::new(records.into_iter().map(|(_, r)| r).collect())?;
    info!(
        station_id = series.station_id(),
        records = series.len(),
        dropped = malformed.len(),
        "daily series read"
    );
    Ok(LoadedSeries { series, malformed })
}

/// Read half-year summary records.
///
/// # Errors
///
/// Same conditions as [`read_daily_csv`]; a repeated year is malformed.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn read_half_year_csv(path: &Path, config: &ReaderConfig) -> Result<LoadedHalfYears, IoError> {
    config.validate()?;
    let mut rdr = open(path, config)?;
    let (rows, mut malformed) = read_rows(&mut rdr, HalfYearRow::into_record)?;
    let mut records = select_station(rows, config, |r| r.station_id)?;

    records.sort_by_key(|(_, r)| r.year);
    records.dedup_by(|(line, later), (_, kept)| {
        let duplicate = later.year == kept.year;
        if duplicate {
            malformed.push(MalformedRecord {
                line: *line,
                reason: format!("duplicate year {}", later.year),
            });
        }
        duplicate
    });

    finish_malformed(path, &mut malformed, config.strict)?;
    let records: Vec<HalfYearRecord> = records.into_iter().map(|(_, r)| r).collect();
    info!(records = records.len(), dropped = malformed.len(), "half-year records read");
    Ok(LoadedHalfYears { records, malformed })
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn open(path: &Path, config: &ReaderConfig) -> Result<csv::Reader<File>, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .trim(csv::Trim::All)
        .from_path(path)?)
}

type Rows<T> = (Vec<(Option<u64>, T)>, Vec<MalformedRecord>);

/// Deserializes and converts every row, keeping line numbers.
fn read_rows<R, T>(
    rdr: &mut csv::Reader<File>,
    convert: impl Fn(R) -> Result<T, String>,
) -> Result<Rows<T>, IoError>
where
    R: DeserializeOwned,
{
    let headers = rdr.headers()?.clone();
    let mut rows = Vec::new();
    let mut malformed = Vec::new();
    for result in rdr.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                malformed.push(MalformedRecord {
                    line: e.position().map(|p| p.line()),
                    reason: e.to_string(),
                });
                continue;
            }
        };
        let line = record.position().map(|p| p.line());
        match record
            .deserialize::<R>(Some(&headers))
            .map_err(|e| e.to_string())
            .and_then(&convert)
        {
            Ok(value) => rows.push((line, value)),
            Err(reason) => malformed.push(MalformedRecord { line, reason }),
        }
    }
    debug!(rows = rows.len(), malformed = malformed.len(), "csv rows parsed");
    Ok((rows, malformed))
}

fn select_station<T>(
    rows: Vec<(Option<u64>, T)>,
    config: &ReaderConfig,
    station_of: impl Fn(&T) -> u32,
) -> Result<Vec<(Option<u64>, T)>, IoError> {
    match config.station_id {
        Some(id) => {
            let total = rows.len();
            let kept: Vec<_> = rows.into_iter().filter(|(_, r)| station_of(r) == id).collect();
            debug!(station_id = id, kept = kept.len(), skipped = total - kept.len(), "station filter applied");
            Ok(kept)
        }
        None => {
            validate_single_station(rows.iter().map(|(_, r)| station_of(r))).finish()?;
            Ok(rows)
        }
    }
}

/// Warns about dropped rows, or fails in strict mode.
fn finish_malformed(
    path: &Path,
    malformed: &mut [MalformedRecord],
    strict: bool,
) -> Result<(), IoError> {
    malformed.sort_by_key(|m| m.line);
    if strict {
        let mut c = ValidationCollector::new();
        for m in malformed.iter() {
            c.push(describe(m));
        }
        return c.finish();
    }
    for m in malformed.iter() {
        warn!(path = %path.display(), line = m.line, reason = %m.reason, "dropping malformed record");
    }
    Ok(())
}

fn describe(m: &MalformedRecord) -> String {
    match m.line {
        Some(line) => format!("line {line}: {}", m.reason),
        None => m.reason.clone(),
    }
}
