//! Raw CSV rows and their conversion into the data model.

use hydrostat_series::{DailyRecord, HalfYearRecord};
use serde::{Deserialize, Deserializer};

fn nan() -> f64 {
    f64::NAN
}

/// Empty fields and the usual missing-value spellings become `NaN`.
fn missing_as_nan<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let field = Option::<String>::deserialize(deserializer)?;
    match field.as_deref().map(str::trim) {
        None | Some("" | "NA" | "NaN" | "nan" | "-") => Ok(f64::NAN),
        Some(s) => s
            .parse::<f64>()
            .map_err(|e| serde::de::Error::custom(format!("invalid number {s:?}: {e}"))),
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct DailyRow {
    station_id: u32,
    year: i32,
    month: u8,
    day: u8,
    #[serde(rename = "H", default = "nan", deserialize_with = "missing_as_nan")]
    h: f64,
    #[serde(rename = "Q", default = "nan", deserialize_with = "missing_as_nan")]
    q: f64,
    #[serde(rename = "T", default = "nan", deserialize_with = "missing_as_nan")]
    t: f64,
}

impl DailyRow {
    pub(crate) fn into_record(self) -> Result<DailyRecord, String> {
        if !(1..=12).contains(&self.month) {
            return Err(format!("month {} out of range", self.month));
        }
        if !(1..=31).contains(&self.day) {
            return Err(format!("day {} out of range", self.day));
        }
        Ok(DailyRecord::new(
            self.station_id,
            self.year,
            self.month,
            self.day,
            self.h,
            self.q,
            self.t,
        ))
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct HalfYearRow {
    station_id: u32,
    year: i32,
    #[serde(default = "nan", deserialize_with = "missing_as_nan")]
    winter_min: f64,
    #[serde(default = "nan", deserialize_with = "missing_as_nan")]
    winter_mean: f64,
    #[serde(default = "nan", deserialize_with = "missing_as_nan")]
    winter_max: f64,
    #[serde(default = "nan", deserialize_with = "missing_as_nan")]
    summer_min: f64,
    #[serde(default = "nan", deserialize_with = "missing_as_nan")]
    summer_mean: f64,
    #[serde(default = "nan", deserialize_with = "missing_as_nan")]
    summer_max: f64,
    #[serde(default = "nan", deserialize_with = "missing_as_nan")]
    year_mean: f64,
}

impl HalfYearRow {
    pub(crate) fn into_record(self) -> Result<HalfYearRecord, String> {
        for (name, lo, hi) in [
            ("winter", self.winter_min, self.winter_max),
            ("summer", self.summer_min, self.summer_max),
        ] {
            if lo > hi {
                return Err(format!("{name} minimum {lo} exceeds maximum {hi}"));
            }
        }
        Ok(HalfYearRecord {
            station_id: self.station_id,
            year: self.year,
            winter_min: self.winter_min,
            winter_mean: self.winter_mean,
            winter_max: self.winter_max,
            summer_min: self.summer_min,
            summer_mean: self.summer_mean,
            summer_max: self.summer_max,
            year_mean: self.year_mean,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn daily(line: &str) -> Result<DailyRecord, String> {
        let data = format!("station_id,year,month,day,H,Q,T\n{line}\n");
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(data.as_bytes());
        let row: DailyRow = rdr
            .deserialize()
            .next()
            .unwrap()
            .map_err(|e| e.to_string())?;
        row.into_record()
    }

    #[test]
    fn empty_and_nan_fields_are_missing() {
        let r = daily("5,2001,3,4,,NaN,7.5").unwrap();
        assert!(r.h.is_nan());
        assert!(r.q.is_nan());
        assert_eq!(r.t, 7.5);
    }

    #[test]
    fn bad_number_is_rejected() {
        let err = daily("5,2001,3,4,12a,1.0,1.0").unwrap_err();
        assert!(err.contains("invalid number"), "{err}");
    }

    #[test]
    fn month_range_checked() {
        assert_eq!(daily("5,2001,13,4,1,1,1").unwrap_err(), "month 13 out of range");
        assert_eq!(daily("5,2001,1,0,1,1,1").unwrap_err(), "day 0 out of range");
    }

    #[test]
    fn half_year_min_above_max_rejected() {
        let data = "station_id,year,winter_min,winter_mean,winter_max,summer_min,summer_mean,summer_max,year_mean\n\
                    5,2001,9,5,4,1,2,3,2\n";
        let mut rdr = csv::Reader::from_reader(data.as_bytes());
        let row: HalfYearRow = rdr.deserialize().next().unwrap().unwrap();
        assert_eq!(row.into_record().unwrap_err(), "winter minimum 9 exceeds maximum 4");
    }
}
