use synt_core::{
    DateRange, MovementAnalysis, SessionTable, SyntError, SyntReport, analyze, prepare, summarize,
};

use crate::Synt;

impl Synt {
    /// Retrieve history for `range` and run the full analysis.
    ///
    /// The daily table is prepared to the configured frequency, summarized,
    /// and analyzed with the configured step and thresholds. A series too
    /// short for one interval still yields a report; check
    /// [`SyntReport::outcome`].
    ///
    /// # Errors
    /// Propagates retrieval errors from [`Synt::fetch_sessions`] (notably
    /// `NotFound` when no source has data for the range).
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "synt::run", skip(self), fields(frequency = %self.cfg.frequency, step = self.cfg.step))
    )]
    pub async fn run(&self, range: DateRange) -> Result<SyntReport, SyntError> {
        let raw = self.fetch_sessions(range).await?;
        self.report_for(range, &raw)
    }

    /// Build a report from an already retrieved daily table.
    ///
    /// # Errors
    /// Returns `EmptyInput` if `raw` holds no sessions.
    pub fn report_for(&self, range: DateRange, raw: &SessionTable) -> Result<SyntReport, SyntError> {
        let prepared = prepare(raw, self.cfg.frequency)?;
        let summary = summarize(&prepared)?;
        let analysis = analyze(&prepared, self.cfg.step, &self.cfg.thresholds)?;
        Ok(SyntReport {
            range,
            frequency: self.cfg.frequency,
            prepared,
            summary,
            analysis,
        })
    }

    /// Run the movement analysis alone on a prepared table with the
    /// configured step and thresholds.
    ///
    /// # Errors
    /// Returns `EmptyTable` if `table` holds no sessions.
    pub fn analyze_table(&self, table: &SessionTable) -> Result<MovementAnalysis, SyntError> {
        analyze(table, self.cfg.step, &self.cfg.thresholds)
    }
}
