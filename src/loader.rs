use std::path::Path;

use polars::datatypes::TimeUnit;
use polars::prelude::*;

use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{BikeshareError, Result};
use crate::filters::{DayFilter, FilterCriteria, MonthFilter};
use crate::schema::*;

/// The filtered trips for one session iteration.
///
/// Wraps a polars `DataFrame` holding the source columns plus the derived
/// `month` and `day_of_week` columns. Row order follows the source file.
#[derive(Debug, Clone)]
pub struct TripTable {
    df: DataFrame,
}

impl TripTable {
    pub fn from_frame(df: DataFrame) -> Self {
        Self { df }
    }

    pub fn frame(&self) -> &DataFrame {
        &self.df
    }

    pub fn height(&self) -> usize {
        self.df.height()
    }

    pub fn is_empty(&self) -> bool {
        self.df.height() == 0
    }

    /// Schema-level presence check for optional columns.
    pub fn has_column(&self, name: &str) -> bool {
        self.df.column(name).is_ok()
    }

    /// Add the derived `hour` column (0-23) of the start timestamp.
    pub fn add_hour(&mut self) -> Result<()> {
        if self.has_column(derived::HOUR) {
            return Ok(());
        }
        self.df = self
            .df
            .clone()
            .lazy()
            .with_column(
                col(trip::START_TIME)
                    .dt()
                    .hour()
                    .cast(DataType::Int32)
                    .alias(derived::HOUR),
            )
            .collect()?;
        Ok(())
    }
}

// ── Loading ─────────────────────────────────────────────────────────────────

/// Load the trip log for the chosen city and apply the month/day filters.
pub fn load_data(config: &Config, criteria: &FilterCriteria) -> Result<TripTable> {
    let path = config.city_file(criteria.city);
    debug!(city = %criteria.city, path = %path.display(), "resolved trip log");
    load_trip_log(&path, criteria.month, criteria.day)
}

/// Load one trip log file, derive calendar columns, then filter.
pub fn load_trip_log(path: &Path, month: MonthFilter, day: DayFilter) -> Result<TripTable> {
    let raw = read_csv_as_strings(path)?;
    require_columns(&raw, &trip::REQUIRED)?;
    let source_rows = raw.height();

    let has_birth_year = raw.column(demographics::BIRTH_YEAR).is_ok();

    let mut lazy = raw.lazy().with_columns([
        col(trip::START_TIME)
            .str()
            .strip_chars(lit(" \t\r\n"))
            .str()
            .to_datetime(
                Some(TimeUnit::Microseconds),
                None,
                StrptimeOptions {
                    format: Some(TIMESTAMP_FORMAT.into()),
                    strict: true,
                    ..Default::default()
                },
                lit("raise"),
            ),
        col(trip::TRIP_DURATION)
            .str()
            .strip_chars(lit(" \t\r\n"))
            .cast(DataType::Float64),
    ]);

    if has_birth_year {
        lazy = lazy.with_column(
            col(demographics::BIRTH_YEAR)
                .str()
                .strip_chars(lit(" \t\r\n"))
                .cast(DataType::Float64),
        );
    }

    lazy = lazy.with_columns([
        col(trip::START_TIME)
            .dt()
            .month()
            .cast(DataType::Int32)
            .alias(derived::MONTH),
        col(trip::START_TIME)
            .dt()
            .strftime("%A")
            .alias(derived::DAY_OF_WEEK),
    ]);

    if let Some(number) = month.number() {
        lazy = lazy.filter(col(derived::MONTH).eq(lit(number as i32)));
    }
    if let Some(name) = day.name() {
        lazy = lazy.filter(col(derived::DAY_OF_WEEK).eq(lit(name)));
    }

    let df = normalize_duration(lazy.collect()?)?;

    debug!(source_rows, filtered_rows = df.height(), %month, %day, "trip log loaded");
    if df.height() == 0 {
        warn!(path = %path.display(), "no trips match the selected filters");
    }

    Ok(TripTable::from_frame(df))
}

/// Read a CSV file with all columns as String dtype, trimming header names.
fn read_csv_as_strings(path: &Path) -> Result<DataFrame> {
    let data_file_err = |source| BikeshareError::DataFile {
        path: path.to_path_buf(),
        source,
    };

    let mut df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0)) // all columns as String
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(data_file_err)?
        .finish()
        .map_err(data_file_err)?;

    let trimmed: Vec<String> = df
        .get_column_names_str()
        .iter()
        .map(|c| c.trim().to_string())
        .collect();
    df.set_column_names(trimmed.as_slice())?;

    Ok(df)
}

fn require_columns(df: &DataFrame, required: &[&str]) -> Result<()> {
    for &col_name in required {
        if df.column(col_name).is_err() {
            return Err(BikeshareError::MissingColumn(col_name.to_string()));
        }
    }
    Ok(())
}

/// Store durations as Int64 when every value is a whole number of seconds.
fn normalize_duration(df: DataFrame) -> Result<DataFrame> {
    let whole = df
        .column(trip::TRIP_DURATION)?
        .f64()?
        .into_iter()
        .flatten()
        .all(|v| v.fract() == 0.0);

    if !whole {
        return Ok(df);
    }

    let df = df
        .lazy()
        .with_column(col(trip::TRIP_DURATION).cast(DataType::Int64))
        .collect()?;
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::City;
    use crate::test_utils::{write_city_files, CHICAGO_ROWS, WASHINGTON_ROWS};
    use chrono::{Month, Weekday};
    use tempfile::tempdir;

    fn load(city: City, month: MonthFilter, day: DayFilter) -> TripTable {
        let dir = tempdir().unwrap();
        write_city_files(dir.path());
        let config = Config::new(dir.path());
        load_data(&config, &FilterCriteria::new(city, month, day)).unwrap()
    }

    #[test]
    fn test_unfiltered_keeps_every_row() {
        for (city, rows) in [
            (City::Chicago, CHICAGO_ROWS),
            (City::NewYork, CHICAGO_ROWS),
            (City::Washington, WASHINGTON_ROWS),
        ] {
            let table = load(city, MonthFilter::All, DayFilter::All);
            assert_eq!(table.height(), rows, "{city}");
        }
    }

    #[test]
    fn test_derived_columns_present() {
        let table = load(City::Chicago, MonthFilter::All, DayFilter::All);
        assert!(table.has_column(derived::MONTH));
        assert!(table.has_column(derived::DAY_OF_WEEK));

        let days = table.frame().column(derived::DAY_OF_WEEK).unwrap().str().unwrap();
        assert_eq!(days.get(0), Some("Sunday"));
        let months = table.frame().column(derived::MONTH).unwrap().i32().unwrap();
        assert_eq!(months.get(0), Some(1));
    }

    #[test]
    fn test_month_filter() {
        let table = load(
            City::Chicago,
            MonthFilter::Only(Month::January),
            DayFilter::All,
        );
        assert_eq!(table.height(), 4);
        let months = table.frame().column(derived::MONTH).unwrap().i32().unwrap();
        assert!(months.into_iter().all(|m| m == Some(1)));
    }

    #[test]
    fn test_day_filter() {
        let table = load(City::Chicago, MonthFilter::All, DayFilter::Only(Weekday::Mon));
        assert_eq!(table.height(), 3);

        let parsed = DayFilter::parse_day("MONDAY").unwrap();
        let again = load(City::Chicago, MonthFilter::All, parsed);
        assert_eq!(again.height(), 3);
    }

    #[test]
    fn test_month_and_day_filter() {
        let table = load(
            City::Chicago,
            MonthFilter::Only(Month::January),
            DayFilter::Only(Weekday::Mon),
        );
        assert_eq!(table.height(), 2);
    }

    #[test]
    fn test_filter_can_empty_table() {
        let table = load(
            City::Chicago,
            MonthFilter::Only(Month::April),
            DayFilter::All,
        );
        assert!(table.is_empty());
    }

    #[test]
    fn test_duration_dtype_follows_data() {
        let chicago = load(City::Chicago, MonthFilter::All, DayFilter::All);
        assert_eq!(
            chicago.frame().column(trip::TRIP_DURATION).unwrap().dtype(),
            &DataType::Int64
        );
        let washington = load(City::Washington, MonthFilter::All, DayFilter::All);
        assert_eq!(
            washington.frame().column(trip::TRIP_DURATION).unwrap().dtype(),
            &DataType::Float64
        );
    }

    #[test]
    fn test_optional_columns_detected() {
        let chicago = load(City::Chicago, MonthFilter::All, DayFilter::All);
        assert!(chicago.has_column(demographics::GENDER));
        let washington = load(City::Washington, MonthFilter::All, DayFilter::All);
        assert!(!washington.has_column(demographics::GENDER));
        assert!(!washington.has_column(demographics::BIRTH_YEAR));
    }

    #[test]
    fn test_add_hour() {
        let mut table = load(City::Chicago, MonthFilter::All, DayFilter::All);
        table.add_hour().unwrap();
        let hours = table.frame().column(derived::HOUR).unwrap().i32().unwrap();
        assert_eq!(hours.get(0), Some(9));
    }

    #[test]
    fn test_missing_file_is_data_file_error() {
        let dir = tempdir().unwrap();
        let config = Config::new(dir.path());
        let err = load_data(&config, &FilterCriteria::unfiltered(City::Chicago)).unwrap_err();
        assert!(matches!(err, BikeshareError::DataFile { .. }));
    }

    #[test]
    fn test_malformed_start_time_is_fatal() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad_time.csv");
        std::fs::write(
            &path,
            "Start Time,Trip Duration,Start Station,End Station,User Type\n\
             2017/01/01 9:00,10,Canal St,Clark St,Subscriber\n",
        )
        .unwrap();
        let err = load_trip_log(&path, MonthFilter::All, DayFilter::All).unwrap_err();
        assert!(matches!(err, BikeshareError::Polars(_)));
    }

    #[test]
    fn test_missing_required_column() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.csv");
        std::fs::write(&path, "Start Time,Trip Duration\n2017-01-01 00:00:00,10\n").unwrap();
        let err = load_trip_log(&path, MonthFilter::All, DayFilter::All).unwrap_err();
        assert!(matches!(err, BikeshareError::MissingColumn(c) if c == trip::START_STATION));
    }
}
