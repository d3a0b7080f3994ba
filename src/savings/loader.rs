//! Load habit savings from CSV exports
//!
//! Expected columns: `Name,DailyCost,Saved,Relapsed,Active`. `Relapsed` and
//! `Active` may be left blank.

use csv::Reader;
use log::info;
use std::path::Path;

use super::HabitSavings;
use crate::error::{Error, Result};

/// Raw CSV row
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "DailyCost")]
    daily_cost: f64,
    #[serde(rename = "Saved")]
    saved: f64,
    #[serde(rename = "Relapsed", default)]
    relapsed: Option<f64>,
    #[serde(rename = "Active", default)]
    active: Option<String>,
}

impl CsvRow {
    fn into_habit(self, line: u64) -> Result<HabitSavings> {
        let active = match self.active.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(v) if v.eq_ignore_ascii_case("true") || v == "1" || v.eq_ignore_ascii_case("yes") => true,
            Some(v) if v.eq_ignore_ascii_case("false") || v == "0" || v.eq_ignore_ascii_case("no") => false,
            Some(other) => {
                return Err(Error::InvalidRecord {
                    line,
                    reason: format!("unknown Active value: {}", other),
                })
            }
        };

        if self.name.trim().is_empty() {
            return Err(Error::InvalidRecord {
                line,
                reason: "empty habit name".to_string(),
            });
        }

        Ok(HabitSavings {
            name: self.name,
            daily_cost: self.daily_cost,
            saved_amount: self.saved,
            relapse_amount: self.relapsed.unwrap_or(0.0),
            active,
        })
    }
}

/// Load all habits from a CSV file
pub fn load_habits<P: AsRef<Path>>(path: P) -> Result<Vec<HabitSavings>> {
    let path = path.as_ref();
    let habits = read_habits(Reader::from_path(path)?)?;
    info!("loaded {} habits from {}", habits.len(), path.display());
    Ok(habits)
}

/// Load habits from any reader (e.g., string buffer)
pub fn load_habits_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<HabitSavings>> {
    read_habits(Reader::from_reader(reader))
}

fn read_habits<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<HabitSavings>> {
    let headers = reader.headers()?.clone();
    let mut habits = Vec::new();

    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let row: CsvRow = record.deserialize(Some(&headers))?;
        habits.push(row.into_habit(line)?);
    }

    Ok(habits)
}
