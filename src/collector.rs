//! Interactive collection of filter criteria.
//!
//! Every prompt repeats until the answer is in its vocabulary. There is no
//! retry cap; only end of input stops the loop.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::console::Console;
use crate::error::Result;
use crate::filters::{City, DayFilter, FilterCriteria, MonthFilter};

const CITY_PROMPT: &str = "Which city would you like to analyze, Chicago, New York or Washington? ";
const MONTH_FILTER_PROMPT: &str = "Would you like to filter by month? Enter yes or no. ";
const MONTH_PROMPT: &str = "Which month? January, February, March, April, May or June? ";
const DAY_FILTER_PROMPT: &str = "Would you like to filter by day of the week? Enter yes or no. ";
const DAY_PROMPT: &str =
    "What day? Monday, Tuesday, Wednesday, Thursday, Friday, Saturday or Sunday? ";

/// Ask for city, month and day. Never returns an invalid choice.
pub fn collect_filters<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<FilterCriteria> {
    console.say("Hello! Let's explore some US bikeshare data!")?;

    let city = ask_until(console, CITY_PROMPT, City::parse)?;
    let month = ask_optional(
        console,
        MONTH_FILTER_PROMPT,
        MONTH_PROMPT,
        MonthFilter::All,
        MonthFilter::parse_month,
    )?;
    let day = ask_optional(
        console,
        DAY_FILTER_PROMPT,
        DAY_PROMPT,
        DayFilter::All,
        DayFilter::parse_day,
    )?;

    console.separator()?;

    let criteria = FilterCriteria::new(city, month, day);
    debug!(%city, %month, %day, "filters collected");
    Ok(criteria)
}

/// Re-prompt until `parse` accepts the answer.
fn ask_until<R, W, T>(
    console: &mut Console<R, W>,
    prompt: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<T>
where
    R: BufRead,
    W: Write,
{
    loop {
        let answer = console.ask(prompt)?;
        match parse(&answer) {
            Some(value) => return Ok(value),
            None => console.invalid_input()?,
        }
    }
}

/// Yes/no gate in front of a vocabulary prompt. "no" yields `all`.
fn ask_optional<R, W, T>(
    console: &mut Console<R, W>,
    gate_prompt: &str,
    value_prompt: &str,
    all: T,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<T>
where
    R: BufRead,
    W: Write,
{
    loop {
        match console.ask(gate_prompt)?.as_str() {
            "no" => return Ok(all),
            "yes" => return ask_until(console, value_prompt, parse),
            _ => console.invalid_input()?,
        }
    }
}
