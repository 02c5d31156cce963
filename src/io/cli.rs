//! Command-line interface for the tiling count report

use crate::counting::aggregate::count_all;
use crate::counting::brute::BruteEnumerator;
use crate::counting::recurrence::RecurrenceCounter;
use crate::io::configuration::{DEFAULT_BRUTE_LIMIT, DEFAULT_COLUMNS, DEFAULT_THRESHOLD};
use crate::io::error::{Result, invalid_parameter};
use crate::io::progress::ProgressManager;
use crate::io::report::{ColumnReport, ThresholdAnswer};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "strip-tilings")]
#[command(
    author,
    version,
    about = "Count domino tilings of 2xN grids and cross-check them by enumeration"
)]
/// Command-line arguments for the tiling count report
pub struct Cli {
    /// Largest grid column count to report
    #[arg(short, long, default_value_t = DEFAULT_COLUMNS)]
    pub columns: usize,

    /// Largest column count cross-checked by brute-force enumeration
    #[arg(short, long, default_value_t = DEFAULT_BRUTE_LIMIT)]
    pub brute_limit: usize,

    /// Tiling count the final answer compares against
    #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: u64,

    /// Fail on the first disagreement between the two engines
    #[arg(short, long)]
    pub strict: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Runs the recurrence over every column count and compares it with enumeration
pub struct ReportRunner {
    cli: Cli,
    counter: RecurrenceCounter,
    brute: BruteEnumerator,
    progress_manager: ProgressManager,
}

impl ReportRunner {
    /// Create a runner for the given CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if no columns are requested or the brute-force limit
    /// is above what enumeration supports
    pub fn new(cli: Cli) -> Result<Self> {
        if cli.columns == 0 {
            return Err(invalid_parameter(
                "columns",
                &cli.columns,
                &"at least one column is required",
            ));
        }

        let brute = BruteEnumerator::with_limit(cli.brute_limit)?;
        let progress_manager = if cli.should_show_progress() {
            ProgressManager::new(cli.columns)
        } else {
            ProgressManager::hidden(cli.columns)
        };

        Ok(Self {
            cli,
            counter: RecurrenceCounter::new(),
            brute,
            progress_manager,
        })
    }

    /// Report every column count from one up to the configured maximum
    ///
    /// Each finished report is handed to `on_report` before the next length is
    /// counted. Returns the answer for the largest column count.
    ///
    /// # Errors
    ///
    /// Returns an error in strict mode when the engines disagree, or if
    /// enumeration fails
    pub fn run<F>(&mut self, mut on_report: F) -> Result<ThresholdAnswer>
    where
        F: FnMut(&ColumnReport),
    {
        for columns in 1..=self.cli.columns {
            let brute = (columns <= self.brute.limit()).then_some(&mut self.brute);
            let report = ColumnReport::build(columns, &mut self.counter, brute)?;
            tracing::info!(
                columns,
                total = %report.total,
                brute_total = ?report.brute_total,
                "counted tilings"
            );

            self.progress_manager.suspend(|| on_report(&report));
            self.progress_manager.complete_column(columns);

            if let Some(mismatch) = report.first_mismatch() {
                tracing::warn!(%mismatch, "engines disagree");
                if self.cli.strict {
                    self.progress_manager.finish();
                    return Err(mismatch);
                }
            }
        }

        self.progress_manager.finish();
        let stats = self.counter.stats();
        tracing::debug!(
            states = self.counter.resolved_states(),
            hits = stats.hits,
            misses = stats.misses,
            "recurrence memo usage"
        );

        Ok(ThresholdAnswer {
            columns: self.cli.columns,
            total: count_all(&mut self.counter, self.cli.columns),
            threshold: self.cli.threshold,
        })
    }
}
