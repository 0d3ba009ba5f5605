//! Command implementations for the `campaign` binary
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod author;
mod maps;
mod reroot;
mod show;

pub use author::Author;
pub use maps::Maps;
pub use reroot::Reroot;
pub use show::Show;

use campaign::{BranchFailure, LinkReport, SaveReport};
use console::style;

fn print_link_report(report: &LinkReport) {
    println!(
        "{} {} doors: {} new maps, {} reused, {} finish lines",
        style("Linked").bold().green(),
        report.prompted,
        report.linked,
        report.reused,
        report.terminal
    );
    print_failures(&report.failures);
}

fn print_save_report(report: &SaveReport) {
    println!(
        "{} {} maps, {} doors",
        style("Saved").bold().green(),
        report.maps,
        report.doors
    );
    if report.unresolved > 0 {
        println!(
            "  {}",
            style(format!(
                "{} unresolved doors were written as finish lines",
                report.unresolved
            ))
            .yellow()
        );
    }
}

fn print_failures(failures: &[BranchFailure]) {
    if failures.is_empty() {
        return;
    }
    println!("{}", style("Skipped branches:").bold().yellow());
    for failure in failures {
        let at = failure
            .position
            .map(|position| format!(" door {position}"))
            .unwrap_or_default();
        println!(
            "  {}{}: {}",
            failure.map,
            at,
            style(&failure.error).red()
        );
    }
}
