use std::io::{BufRead, Write};

use tracing::info;

use crate::collector::collect_filters;
use crate::config::Config;
use crate::console::Console;
use crate::error::Result;
use crate::loader::load_data;
use crate::pager::page_rows;
use crate::report::{duration_report, station_report, time_report, user_report};

const RESTART_PROMPT: &str = "\nWould you like to restart? Enter yes or no.\n";

/// Run sessions until the user declines to restart.
///
/// Each iteration collects filters, loads a fresh table, prints the four
/// reports in order and offers the pager. Nothing is cached between
/// iterations. Returns the number of completed iterations.
pub fn run<R: BufRead, W: Write>(config: &Config, console: &mut Console<R, W>) -> Result<usize> {
    let mut iterations = 0;
    loop {
        let criteria = collect_filters(console)?;
        info!(
            iteration = iterations + 1,
            city = %criteria.city,
            month = %criteria.month,
            day = %criteria.day,
            "starting session"
        );

        let mut table = load_data(config, &criteria)?;

        time_report(&mut table, console.output())?;
        station_report(&table, console.output())?;
        duration_report(&table, console.output())?;
        user_report(&table, console.output())?;
        page_rows(&table, console)?;

        iterations += 1;
        if console.ask(RESTART_PROMPT)? != "yes" {
            break;
        }
    }
    Ok(iterations)
}
