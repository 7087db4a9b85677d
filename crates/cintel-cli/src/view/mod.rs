//! Terminal presentation of an analysis report.

mod detail;
mod export;
mod methodology;
mod state;
mod table;

#[cfg(test)]
pub(crate) mod fixtures;

pub(crate) use detail::{find_creator, DetailView};
pub(crate) use export::{to_csv, to_json};
pub(crate) use methodology::METHODOLOGY;
pub(crate) use state::{Dashboard, Stage, ViewState};
pub(crate) use table::{filter_creators, render_table};

/// Summary block printed above the table. The model's summary is shown as is.
#[must_use]
pub(crate) fn render_summary(summary: &str, shown: usize, total: usize) -> String {
    let counts = if shown == total {
        format!("{total} creators analyzed")
    } else {
        format!("{shown} of {total} creators shown")
    };
    format!("Roster Intelligence Summary ({counts})\n{summary}")
}
