mod dates;
mod error;
mod fees;
mod io;
mod types;
mod utils;

use std::path::Path;

use tracing::{debug, info};

pub use dates::{add_date_range, date_range, reformat_dates};
pub use error::{FeesError, Result};

use fees::create_report;
use io::{read_returns, write_fees_csv};

/// Computes late fees per patron from the return log at `infile` and writes
/// a summary report to `outfile`. The input is fully read and closed before
/// the output is opened.
pub fn fees_report(infile: &Path, outfile: &Path) -> Result<()> {
    let records = read_returns(infile)?;
    debug!(rows = records.len(), "parsed return log");

    let report = create_report(Box::new(records.into_iter()));

    info!(
        patrons = report.0.len(),
        outfile = %outfile.display(),
        "writing fee report"
    );
    write_fees_csv(outfile, report)?;
    Ok(())
}
