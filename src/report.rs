//! Console reporters, one per statistics category.
//!
//! Each reporter prints a heading, its statistics, the elapsed time and a
//! separator line.

use std::fmt;
use std::io::Write;
use std::time::Instant;

use crate::console::SEPARATOR_WIDTH;
use crate::error::Result;
use crate::loader::TripTable;
use crate::stats::{self, Hms, TotalDuration};

const NO_TRIPS: &str = "No trips match the selected filters.";

impl fmt::Display for Hms<i64> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} hours, {} minutes and {} seconds",
            self.hours, self.minutes, self.seconds
        )
    }
}

impl fmt::Display for Hms<f64> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} hours, {} minutes and {:.2} seconds",
            self.hours, self.minutes, self.seconds
        )
    }
}

impl fmt::Display for TotalDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TotalDuration::Whole(hms) => fmt::Display::fmt(hms, f),
            TotalDuration::Fractional(hms) => fmt::Display::fmt(hms, f),
        }
    }
}

/// Most frequent month, weekday and start hour.
pub fn time_report<W: Write>(table: &mut TripTable, out: &mut W) -> Result<()> {
    writeln!(out, "\nCalculating The Most Frequent Times of Travel...\n")?;
    let started = Instant::now();

    if table.is_empty() {
        writeln!(out, "{NO_TRIPS}")?;
    } else {
        let stats = stats::time_stats(table)?;
        if let Some(month) = stats.month {
            writeln!(out, "Most common month: {}", month.name())?;
        }
        if let Some(day) = stats.day_of_week {
            writeln!(out, "Most common day of week: {day}")?;
        }
        if let Some(hour) = stats.hour {
            writeln!(out, "Most frequent start hour: {hour}")?;
        }
    }

    finish(out, started)
}

/// Most popular start station, end station and trip.
pub fn station_report<W: Write>(table: &TripTable, out: &mut W) -> Result<()> {
    writeln!(out, "\nCalculating The Most Popular Stations and Trip...\n")?;
    let started = Instant::now();

    if table.is_empty() {
        writeln!(out, "{NO_TRIPS}")?;
    } else {
        let stats = stats::station_stats(table)?;
        if let Some(station) = stats.start_station {
            writeln!(out, "Most commonly used start station: {station}")?;
        }
        if let Some(station) = stats.end_station {
            writeln!(out, "Most commonly used end station: {station}")?;
        }
        if let Some(trip) = stats.trip {
            writeln!(
                out,
                "\nMost frequent combination of start station and end station trip:\n {} -> {} ({} trips)",
                trip.start, trip.end, trip.count
            )?;
        }
    }

    finish(out, started)
}

/// Total and mean trip duration.
pub fn duration_report<W: Write>(table: &TripTable, out: &mut W) -> Result<()> {
    writeln!(out, "\nCalculating Trip Duration...\n")?;
    let started = Instant::now();

    if table.is_empty() {
        writeln!(out, "{NO_TRIPS}")?;
    } else {
        let stats = stats::duration_stats(table)?;
        writeln!(out, "Total travel time: {}", stats.total)?;
        if let Some(mean) = stats.mean {
            writeln!(out, "Mean travel time: {mean}")?;
        }
    }

    finish(out, started)
}

/// User types, and gender / birth year where the dataset has them.
pub fn user_report<W: Write>(table: &TripTable, out: &mut W) -> Result<()> {
    writeln!(out, "\nCalculating User Stats...\n")?;
    let started = Instant::now();

    if table.is_empty() {
        writeln!(out, "{NO_TRIPS}")?;
        return finish(out, started);
    }

    let stats = stats::user_stats(table)?;

    writeln!(out, "Counts of user type:")?;
    write_counts(out, &stats.user_types)?;

    match &stats.genders {
        Some(genders) => {
            writeln!(out, "\nCounts of gender:")?;
            write_counts(out, genders)?;
        }
        None => writeln!(out, "\nNo gender data to share.")?,
    }

    match &stats.birth_years {
        Some(years) => {
            writeln!(out)?;
            if let Some(year) = years.earliest {
                writeln!(out, "Earliest year of birth: {year}")?;
            }
            if let Some(year) = years.latest {
                writeln!(out, "Most recent year of birth: {year}")?;
            }
            if let Some(year) = years.most_common {
                writeln!(out, "Most common year of birth: {year}")?;
            }
        }
        None => writeln!(out, "\nNo birth year data to share.")?,
    }

    finish(out, started)
}

fn write_counts<W: Write>(out: &mut W, counts: &[(String, usize)]) -> Result<()> {
    for (value, count) in counts {
        writeln!(out, "{value}: {count}")?;
    }
    Ok(())
}

fn finish<W: Write>(out: &mut W, started: Instant) -> Result<()> {
    writeln!(
        out,
        "\nThis took {} seconds.",
        started.elapsed().as_secs_f64()
    )?;
    writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))?;
    Ok(())
}
