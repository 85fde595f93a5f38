//! Raw row pager: shows the table five rows at a time on request.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::console::Console;
use crate::error::Result;
use crate::loader::TripTable;

pub const WINDOW: usize = 5;

const VIEW_PROMPT: &str = "\nWould you like to see the first 5 rows of the raw data? Yes or No? ";
const MORE_PROMPT: &str =
    "\nWould you like to see 5 more rows? Press \"Enter key\" for Yes or input No? ";

/// Page through `table`. Returns the number of windows printed.
///
/// Only an initial "yes" starts paging. Every window is followed by the
/// continue question; paging stops on "no" or once the rows are exhausted.
pub fn page_rows<R: BufRead, W: Write>(
    table: &TripTable,
    console: &mut Console<R, W>,
) -> Result<usize> {
    if console.ask(VIEW_PROMPT)? != "yes" {
        return Ok(0);
    }

    let mut offset = 0;
    let mut windows = 0;
    loop {
        let window = table.frame().slice(offset as i64, WINDOW);
        console.say(&window)?;
        offset += WINDOW;
        windows += 1;

        let answer = console.ask(MORE_PROMPT)?;
        if answer == "no" || offset >= table.height() {
            console.say("\nEnd of raw data")?;
            break;
        }
    }

    debug!(windows, rows = table.height(), "raw rows paged");
    Ok(windows)
}
