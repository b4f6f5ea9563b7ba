use std::sync::Arc;
use std::time::Duration;

use synt_core::{Frequency, HistorySource, SyntConfig, SyntError, ThresholdSet};

/// Orchestrator that retrieves daily history and runs the movement analysis.
pub struct Synt {
    pub(crate) sources: Vec<Arc<dyn HistorySource>>,
    pub(crate) cfg: SyntConfig,
}

/// Builder for constructing a `Synt` orchestrator with custom configuration.
pub struct SyntBuilder {
    sources: Vec<Arc<dyn HistorySource>>,
    cfg: SyntConfig,
}

impl Default for SyntBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntBuilder {
    /// Create a new builder with the default configuration.
    ///
    /// Starts with no sources; register at least one via [`Self::with_source`].
    /// Defaults: daily frequency, a step of 5 sessions, the MOVM1..MOVM4
    /// thresholds and a 5s per-source timeout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sources: vec![],
            cfg: SyntConfig::default(),
        }
    }

    /// Register a history source.
    ///
    /// Sources are tried in registration order; the first one returning a
    /// non-empty history wins.
    #[must_use]
    pub fn with_source(mut self, source: Arc<dyn HistorySource>) -> Self {
        self.sources.push(source);
        self
    }

    /// Replace the whole configuration, e.g. one loaded from JSON.
    #[must_use]
    pub fn config(mut self, cfg: SyntConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Cadence the retrieved series is prepared to before analysis.
    #[must_use]
    pub const fn frequency(mut self, frequency: Frequency) -> Self {
        self.cfg.frequency = frequency;
        self
    }

    /// Number of sessions per analysis interval.
    #[must_use]
    pub const fn step(mut self, step: usize) -> Self {
        self.cfg.step = step;
        self
    }

    /// Movement thresholds, evaluated in declaration order.
    #[must_use]
    pub fn thresholds(mut self, thresholds: ThresholdSet) -> Self {
        self.cfg.thresholds = thresholds;
        self
    }

    /// Timeout applied to each individual source call.
    #[must_use]
    pub const fn source_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.source_timeout = timeout;
        self
    }

    /// Deadline for the whole retrieval across all sources.
    ///
    /// When exceeded, retrieval fails with `RequestTimeout`.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.request_timeout = Some(timeout);
        self
    }

    /// Build the `Synt` orchestrator.
    ///
    /// # Errors
    /// - `InvalidArg` if no sources have been registered via [`Self::with_source`]
    ///   or a timeout is zero.
    /// - `InvalidStep` if the step is zero.
    pub fn build(self) -> Result<Synt, SyntError> {
        self.cfg.validate()?;
        if self.cfg.request_timeout.is_some_and(|d| d.is_zero()) {
            return Err(SyntError::InvalidArg(
                "request timeout must be greater than zero".into(),
            ));
        }
        if self.sources.is_empty() {
            return Err(SyntError::InvalidArg(
                "no sources registered; add at least one via with_source(...)".to_string(),
            ));
        }
        Ok(Synt {
            sources: self.sources,
            cfg: self.cfg,
        })
    }
}

/// Attach the source name to errors that do not already carry one.
pub fn tag_err(source_name: &str, e: SyntError) -> SyntError {
    match e {
        e @ (SyntError::NotFound { .. }
        | SyntError::SourceTimeout { .. }
        | SyntError::Source { .. }
        | SyntError::RequestTimeout { .. }
        | SyntError::AllSourcesTimedOut { .. }
        | SyntError::AllSourcesFailed(_)) => e,
        other => SyntError::source_failure(source_name, other.to_string()),
    }
}

impl Synt {
    /// Start building a new `Synt` instance.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use synt::{Frequency, Synt};
    ///
    /// let synt = Synt::builder()
    ///     .with_source(Arc::new(PrimarySource::new()))
    ///     .with_source(Arc::new(BackupSource::new()))
    ///     .frequency(Frequency::Weekly)
    ///     .step(3)
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> SyntBuilder {
        SyntBuilder::new()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &SyntConfig {
        &self.cfg
    }

    /// Names of the registered sources in fallback order.
    #[must_use]
    pub fn source_names(&self) -> Vec<&'static str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    /// Wrap a source future with a timeout and standardized timeout error mapping.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "synt::core::source_call_with_timeout",
            skip(fut),
            fields(
                source = source_name,
                capability = capability,
                timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            ),
        )
    )]
    pub(crate) async fn source_call_with_timeout<T, Fut>(
        source_name: &'static str,
        capability: &'static str,
        timeout: Duration,
        fut: Fut,
    ) -> Result<T, SyntError>
    where
        Fut: core::future::Future<Output = Result<T, SyntError>>,
    {
        (tokio::time::timeout(timeout, fut).await)
            .unwrap_or_else(|_| Err(SyntError::source_timeout(source_name, capability)))
    }
}
