//! Filter criteria and their closed vocabularies.

use std::fmt;

use chrono::{Month, Weekday};

/// Cities with a backing trip log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Chicago,
    NewYork,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYork, City::Washington];

    /// Lowercase name, as typed at the prompt.
    pub fn name(self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYork => "new york",
            City::Washington => "washington",
        }
    }

    /// Exact, case-insensitive match against the city names.
    pub fn parse(input: &str) -> Option<City> {
        let wanted = input.trim().to_lowercase();
        City::ALL.into_iter().find(|c| c.name() == wanted)
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = match self {
            City::Chicago => "Chicago",
            City::NewYork => "New York",
            City::Washington => "Washington",
        };
        f.write_str(title)
    }
}

/// Months covered by the datasets.
pub const FILTER_MONTHS: [Month; 6] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
];

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Full English weekday name, e.g. "Monday".
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    Only(Month),
}

impl MonthFilter {
    /// Parse one of "january".."june". Abbreviations are rejected.
    pub fn parse_month(input: &str) -> Option<MonthFilter> {
        let wanted = input.trim().to_lowercase();
        FILTER_MONTHS
            .into_iter()
            .find(|m| m.name().to_lowercase() == wanted)
            .map(MonthFilter::Only)
    }

    /// 1-indexed calendar month, `None` for `All`.
    pub fn number(self) -> Option<u32> {
        match self {
            MonthFilter::All => None,
            MonthFilter::Only(m) => Some(m.number_from_month()),
        }
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthFilter::All => f.write_str("all"),
            MonthFilter::Only(m) => f.write_str(m.name()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Only(Weekday),
}

impl DayFilter {
    /// Parse one of "monday".."sunday". Abbreviations are rejected.
    pub fn parse_day(input: &str) -> Option<DayFilter> {
        let wanted = input.trim().to_lowercase();
        WEEKDAYS
            .into_iter()
            .find(|day| weekday_name(*day).to_lowercase() == wanted)
            .map(DayFilter::Only)
    }

    /// Title-cased weekday name, `None` for `All`.
    pub fn name(self) -> Option<&'static str> {
        match self {
            DayFilter::All => None,
            DayFilter::Only(day) => Some(weekday_name(day)),
        }
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name().unwrap_or("all"))
    }
}

/// One session's choices. Always valid by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterCriteria {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl FilterCriteria {
    pub fn new(city: City, month: MonthFilter, day: DayFilter) -> Self {
        Self { city, month, day }
    }

    pub fn unfiltered(city: City) -> Self {
        Self::new(city, MonthFilter::All, DayFilter::All)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_parse_is_case_insensitive() {
        assert_eq!(City::parse("chicago"), Some(City::Chicago));
        assert_eq!(City::parse("New York"), Some(City::NewYork));
        assert_eq!(City::parse("WASHINGTON"), Some(City::Washington));
    }

    #[test]
    fn test_city_parse_rejects_near_misses() {
        assert_eq!(City::parse("Chicago!"), None);
        assert_eq!(City::parse(""), None);
        assert_eq!(City::parse("newyork"), None);
    }

    #[test]
    fn test_month_vocabulary_stops_at_june() {
        assert_eq!(
            MonthFilter::parse_month("March"),
            Some(MonthFilter::Only(Month::March))
        );
        assert_eq!(MonthFilter::parse_month("july"), None);
        assert_eq!(MonthFilter::parse_month("jan"), None);
        assert_eq!(MonthFilter::Only(Month::June).number(), Some(6));
        assert_eq!(MonthFilter::All.number(), None);
    }

    #[test]
    fn test_day_parse_and_title_case() {
        let day = DayFilter::parse_day("sUnDaY").unwrap();
        assert_eq!(day, DayFilter::Only(Weekday::Sun));
        assert_eq!(day.name(), Some("Sunday"));
        assert_eq!(DayFilter::parse_day("sun"), None);
        assert_eq!(DayFilter::All.to_string(), "all");
    }

    #[test]
    fn test_every_weekday_has_a_name() {
        for day in WEEKDAYS {
            assert!(!weekday_name(day).is_empty());
            assert_eq!(
                DayFilter::parse_day(weekday_name(day)),
                Some(DayFilter::Only(day))
            );
        }
    }
}
