//! Output module

mod needless;

use stylint_core::Report;

pub use needless::format_needless_disables;

/// Writes the report's output to stdout, followed by the needless disables
/// when they were requested.
pub fn print_report(report: &Report) {
    if !report.output.is_empty() {
        print!("{}", report.output);
        if !report.output.ends_with('\n') {
            println!();
        }
    }

    if let Some(needless) = &report.needless_disables {
        print!("{}", format_needless_disables(needless));
    }
}
