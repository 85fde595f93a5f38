//! Descriptive statistics over a `TripTable`.
//!
//! Every mode and value count breaks ties by first appearance in table
//! order. Null cells are skipped.

use chrono::Month;
use polars::prelude::*;

use crate::error::{BikeshareError, Result};
use crate::loader::TripTable;
use crate::schema::*;

// ── Counting primitives ─────────────────────────────────────────────────────

/// Distinct `keys` combinations with their row count in `derived::COUNT`,
/// most frequent first.
///
/// Rows with a null key are dropped. Groups keep first-appearance order and
/// the sort is stable, so ties resolve to the combination seen first.
pub fn value_counts(lf: LazyFrame, keys: &[&str]) -> Result<DataFrame> {
    let Some(first) = keys.first() else {
        return Err(BikeshareError::InvalidData(
            "value_counts needs at least one key column".to_string(),
        ));
    };

    let keep = keys[1..]
        .iter()
        .fold(col(*first).is_not_null(), |acc, k| {
            acc.and(col(*k).is_not_null())
        });

    let counts = lf
        .filter(keep)
        .group_by_stable(keys.iter().map(|k| col(*k)).collect::<Vec<_>>())
        .agg([col(*first)
            .count()
            .cast(DataType::UInt64)
            .alias(derived::COUNT)])
        .sort(
            [derived::COUNT],
            SortMultipleOptions::default()
                .with_order_descending(true)
                .with_maintain_order(true),
        )
        .collect()?;

    Ok(counts)
}

/// Most frequent string in `column`.
fn mode_str(df: &DataFrame, column: &str) -> Result<Option<String>> {
    let counts = value_counts(df.clone().lazy(), &[column])?;
    if counts.height() == 0 {
        return Ok(None);
    }
    Ok(counts.column(column)?.str()?.get(0).map(str::to_string))
}

/// Most frequent integer in `column`.
fn mode_i32(df: &DataFrame, column: &str) -> Result<Option<i32>> {
    let counts = value_counts(df.clone().lazy(), &[column])?;
    if counts.height() == 0 {
        return Ok(None);
    }
    Ok(counts.column(column)?.i32()?.get(0))
}

/// Every distinct string in `column` with its count, most frequent first.
fn string_counts(df: &DataFrame, column: &str) -> Result<Vec<(String, usize)>> {
    let counts = value_counts(df.clone().lazy(), &[column])?;
    let values = counts.column(column)?.str()?;
    let totals = counts.column(derived::COUNT)?.u64()?;

    Ok(values
        .into_iter()
        .zip(totals.into_iter())
        .filter_map(|(v, n)| Some((v?.to_string(), n? as usize)))
        .collect())
}

// ── Duration breakdown ──────────────────────────────────────────────────────

/// Hours, minutes and seconds of a duration given in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hms<T> {
    pub hours: T,
    pub minutes: T,
    pub seconds: T,
}

impl Hms<i64> {
    pub fn from_whole(total: i64) -> Self {
        Self {
            hours: total.div_euclid(3600),
            minutes: total.rem_euclid(3600) / 60,
            seconds: total.rem_euclid(60),
        }
    }
}

impl Hms<f64> {
    pub fn from_fractional(total: f64) -> Self {
        Self {
            hours: total.div_euclid(3600.0),
            minutes: total.rem_euclid(3600.0).div_euclid(60.0),
            seconds: total.rem_euclid(60.0),
        }
    }

    /// Drop the fractional part of every component.
    pub fn truncate(self) -> Hms<i64> {
        Hms {
            hours: self.hours as i64,
            minutes: self.minutes as i64,
            seconds: self.seconds as i64,
        }
    }
}

/// Total trip time in the representation the duration column carries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TotalDuration {
    Whole(Hms<i64>),
    Fractional(Hms<f64>),
}

// ── Statistics ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct TimeStats {
    pub month: Option<Month>,
    pub day_of_week: Option<String>,
    pub hour: Option<i32>,
}

/// Popular travel times. Adds the derived `hour` column to the table.
pub fn time_stats(table: &mut TripTable) -> Result<TimeStats> {
    table.add_hour()?;
    let df = table.frame();

    let month = mode_i32(df, derived::MONTH)?
        .and_then(|m| u8::try_from(m).ok())
        .and_then(|m| Month::try_from(m).ok());
    let day_of_week = mode_str(df, derived::DAY_OF_WEEK)?;
    let hour = mode_i32(df, derived::HOUR)?;

    Ok(TimeStats {
        month,
        day_of_week,
        hour,
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct PopularTrip {
    pub start: String,
    pub end: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StationStats {
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    pub trip: Option<PopularTrip>,
}

pub fn station_stats(table: &TripTable) -> Result<StationStats> {
    let df = table.frame();

    let start_station = mode_str(df, trip::START_STATION)?;
    let end_station = mode_str(df, trip::END_STATION)?;

    let pairs = value_counts(
        df.clone().lazy(),
        &[trip::START_STATION, trip::END_STATION],
    )?;
    let trip = if pairs.height() == 0 {
        None
    } else {
        let start = pairs.column(trip::START_STATION)?.str()?.get(0);
        let end = pairs.column(trip::END_STATION)?.str()?.get(0);
        let count = pairs.column(derived::COUNT)?.u64()?.get(0);
        match (start, end, count) {
            (Some(start), Some(end), Some(count)) => Some(PopularTrip {
                start: start.to_string(),
                end: end.to_string(),
                count: count as usize,
            }),
            _ => None,
        }
    };

    Ok(StationStats {
        start_station,
        end_station,
        trip,
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct DurationStats {
    pub total: TotalDuration,
    pub mean: Option<Hms<i64>>,
}

pub fn duration_stats(table: &TripTable) -> Result<DurationStats> {
    let durations = table
        .frame()
        .column(trip::TRIP_DURATION)?
        .as_materialized_series();

    let sum = durations.sum_reduce()?;
    let total = match durations.dtype() {
        DataType::Int64 => {
            TotalDuration::Whole(Hms::from_whole(sum.value().try_extract::<i64>().unwrap_or(0)))
        }
        DataType::Float64 => TotalDuration::Fractional(Hms::from_fractional(
            sum.value().try_extract::<f64>().unwrap_or(0.0),
        )),
        other => {
            return Err(BikeshareError::InvalidData(format!(
                "'{}' has unexpected dtype {other}",
                trip::TRIP_DURATION
            )))
        }
    };

    let mean = durations
        .mean_reduce()
        .value()
        .try_extract::<f64>()
        .ok()
        .filter(|m| m.is_finite())
        .map(|m| Hms::from_fractional(m).truncate());

    Ok(DurationStats { total, mean })
}

#[derive(Debug, Clone, PartialEq)]
pub struct BirthYears {
    pub earliest: Option<i64>,
    pub latest: Option<i64>,
    pub most_common: Option<i64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserStats {
    pub user_types: Vec<(String, usize)>,
    /// `None` when the dataset has no gender column.
    pub genders: Option<Vec<(String, usize)>>,
    /// `None` when the dataset has no birth year column.
    pub birth_years: Option<BirthYears>,
}

pub fn user_stats(table: &TripTable) -> Result<UserStats> {
    let df = table.frame();

    let user_types = string_counts(df, trip::USER_TYPE)?;

    let genders = if table.has_column(demographics::GENDER) {
        Some(string_counts(df, demographics::GENDER)?)
    } else {
        None
    };

    let birth_years = if table.has_column(demographics::BIRTH_YEAR) {
        Some(birth_years(df)?)
    } else {
        None
    };

    Ok(UserStats {
        user_types,
        genders,
        birth_years,
    })
}

fn birth_years(df: &DataFrame) -> Result<BirthYears> {
    let years = df
        .column(demographics::BIRTH_YEAR)?
        .as_materialized_series();
    let earliest = years
        .min_reduce()?
        .value()
        .try_extract::<f64>()
        .ok()
        .map(|y| y as i64);
    let latest = years
        .max_reduce()?
        .value()
        .try_extract::<f64>()
        .ok()
        .map(|y| y as i64);

    let whole_years = df
        .clone()
        .lazy()
        .select([col(demographics::BIRTH_YEAR).cast(DataType::Int64)]);
    let counts = value_counts(whole_years, &[demographics::BIRTH_YEAR])?;
    let most_common = if counts.height() == 0 {
        None
    } else {
        counts.column(demographics::BIRTH_YEAR)?.i64()?.get(0)
    };

    Ok(BirthYears {
        earliest,
        latest,
        most_common,
    })
}
