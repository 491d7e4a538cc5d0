use std::sync::Arc;

use chrono::TimeDelta;
use seamline_core::{Clock, SystemClock, TimeSeries};
use seamline_types::{SeamlineConfig, SeamlineError, SplitStrategy};

/// Completeness segmenter bound to an ingestion delay and a clock.
///
/// Cheap to clone; clones share the clock.
#[derive(Clone)]
pub struct Seamline {
    clock: Arc<dyn Clock>,
    cfg: SeamlineConfig,
    delay_seconds: i64,
}

/// Builder for constructing a [`Seamline`] with custom configuration.
pub struct SeamlineBuilder {
    clock: Option<Arc<dyn Clock>>,
    cfg: SeamlineConfig,
}

impl Default for SeamlineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SeamlineBuilder {
    /// Create a new builder with defaults.
    ///
    /// Defaults: no ingestion delay (marking disabled), stitched segmentation,
    /// and the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self {
            clock: None,
            cfg: SeamlineConfig::default(),
        }
    }

    /// Replace the whole configuration. Later modifiers still override
    /// individual fields.
    #[must_use]
    pub fn config(mut self, cfg: SeamlineConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Set the ingestion delay in seconds.
    ///
    /// Buckets ending within this window of "now" are flagged incomplete.
    /// Zero disables marking entirely.
    #[must_use]
    pub const fn ingestion_delay_secs(mut self, secs: u64) -> Self {
        self.cfg.ingestion_delay_secs = secs;
        self
    }

    /// Select how [`Seamline::segments`] cuts a series.
    #[must_use]
    pub const fn split_strategy(mut self, strategy: SplitStrategy) -> Self {
        self.cfg.split_strategy = strategy;
        self
    }

    /// Use `clock` as the source of "now" instead of the system clock.
    #[must_use]
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Build the [`Seamline`] instance.
    ///
    /// # Errors
    /// Returns `Err(SeamlineError::InvalidArg)` if the ingestion delay does not
    /// fit a signed millisecond duration.
    pub fn build(self) -> Result<Seamline, SeamlineError> {
        let secs = self.cfg.ingestion_delay_secs;
        let delay_seconds = i64::try_from(secs)
            .ok()
            .filter(|s| TimeDelta::try_seconds(*s).is_some())
            .ok_or_else(|| {
                SeamlineError::invalid_arg(format!("ingestion delay out of range: {secs}s"))
            })?;

        Ok(Seamline {
            clock: self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
            cfg: self.cfg,
            delay_seconds,
        })
    }
}

impl Seamline {
    /// Start building a new `Seamline` instance.
    ///
    /// ```rust
    /// use seamline::{Seamline, SplitStrategy};
    ///
    /// let seamline = Seamline::builder()
    ///     .ingestion_delay_secs(90)
    ///     .split_strategy(SplitStrategy::Binary)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(seamline.config().ingestion_delay_secs, 90);
    /// ```
    #[must_use]
    pub fn builder() -> SeamlineBuilder {
        SeamlineBuilder::new()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &SeamlineConfig {
        &self.cfg
    }

    /// Flag buckets inside the ingestion-delay window.
    ///
    /// # Errors
    /// Propagates argument errors from [`seamline_core::mark_delayed_data`].
    pub fn mark(&self, series: TimeSeries) -> Result<TimeSeries, SeamlineError> {
        seamline_core::mark_delayed_data(series, self.delay_seconds, &self.clock)
    }

    /// Mark `series`, then cut it into stitched completeness runs.
    ///
    /// # Errors
    /// Propagates argument errors from [`seamline_core::mark_delayed_data`].
    pub fn segment(&self, series: TimeSeries) -> Result<Vec<(TimeSeries, bool)>, SeamlineError> {
        let marked = self.mark(series)?;
        Ok(seamline_core::segment_by_completeness(marked))
    }

    /// Mark `series`, then split it into `(complete, incomplete)` parts.
    ///
    /// Assumes completeness is monotonic; see
    /// [`seamline_core::split_by_completeness`].
    ///
    /// # Errors
    /// Propagates argument errors from [`seamline_core::mark_delayed_data`].
    pub fn split(
        &self,
        series: TimeSeries,
    ) -> Result<(Option<TimeSeries>, Option<TimeSeries>), SeamlineError> {
        seamline_core::split_by_completeness(series, self.delay_seconds, &self.clock)
    }

    /// Mark and cut `series` according to the configured [`SplitStrategy`].
    ///
    /// Both strategies return runs in time order paired with their
    /// `incomplete` flag; `Binary` yields at most one complete run followed by
    /// at most one incomplete run.
    ///
    /// # Errors
    /// Propagates argument errors from [`seamline_core::mark_delayed_data`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "seamline::segments",
            skip(self, series),
            fields(
                points = series.values.len(),
                strategy = ?self.cfg.split_strategy,
                delay_seconds = self.delay_seconds,
            ),
        )
    )]
    pub fn segments(&self, series: TimeSeries) -> Result<Vec<(TimeSeries, bool)>, SeamlineError> {
        match self.cfg.split_strategy {
            SplitStrategy::Binary => {
                let (complete, incomplete) = self.split(series)?;
                Ok(complete
                    .map(|s| (s, false))
                    .into_iter()
                    .chain(incomplete.map(|s| (s, true)))
                    .collect())
            }
            _ => self.segment(series),
        }
    }
}
