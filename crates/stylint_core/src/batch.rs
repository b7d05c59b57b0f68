//! Concurrent batch linting.
//!
//! Every input is linted concurrently on the calling task. Syntax errors are
//! downgraded to errored records; any other error rejects the whole batch.
//! Results always come back in input order.

use futures_util::stream::{self, FuturesUnordered, Stream, StreamExt, TryStreamExt};
use tracing::{Instrument, debug, debug_span, warn};

use crate::LinterError;
use crate::engine::LintEngine;
use crate::input::LintInput;
use crate::result::ResultRecord;

/// Drives a [`LintEngine`] over a list of inputs.
#[derive(Debug, Clone, Default)]
pub struct BatchExecutor {
    max_concurrency: Option<usize>,
}

impl BatchExecutor {
    /// Creates an executor with unbounded concurrency.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bounds the number of inputs in flight. `None` or `Some(0)` is unbounded.
    pub fn with_max_concurrency(mut self, limit: Option<usize>) -> Self {
        self.max_concurrency = limit.filter(|n| *n > 0);
        self
    }

    /// Lints every input and returns one record per input, in input order.
    ///
    /// The first non-recoverable error to complete is returned as is, however
    /// many earlier inputs are still in flight; those are dropped.
    pub async fn run<E: LintEngine>(
        &self,
        inputs: &[LintInput],
        engine: &E,
    ) -> Result<Vec<ResultRecord>, LinterError> {
        debug!(
            "Linting {} inputs (max concurrency: {:?})",
            inputs.len(),
            self.max_concurrency
        );

        let lints = inputs.iter().enumerate().map(|(index, input)| async move {
            lint_one(engine, input).await.map(|record| (index, record))
        });

        match self.max_concurrency {
            Some(limit) => {
                let completed = stream::iter(lints).buffer_unordered(limit);
                collect_in_order(completed, inputs.len()).await
            }
            None => {
                let completed: FuturesUnordered<_> = lints.collect();
                collect_in_order(completed, inputs.len()).await
            }
        }
    }
}

/// Drains records as they complete, failing on the first error in time.
/// Each record lands in its input's slot.
async fn collect_in_order<S>(completed: S, len: usize) -> Result<Vec<ResultRecord>, LinterError>
where
    S: Stream<Item = Result<(usize, ResultRecord), LinterError>>,
{
    let mut completed = std::pin::pin!(completed);
    let mut slots: Vec<Option<ResultRecord>> = std::iter::repeat_with(|| None).take(len).collect();

    while let Some((index, record)) = completed.try_next().await? {
        slots[index] = Some(record);
    }

    slots
        .into_iter()
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| LinterError::Internal("Batch finished with a missing record".to_string()))
}

async fn lint_one<E: LintEngine>(
    engine: &E,
    input: &LintInput,
) -> Result<ResultRecord, LinterError> {
    let source = input.display_name();
    let span = debug_span!("lint", source = %source);

    async {
        match engine.lint(input).await {
            Ok(outcome) => Ok(ResultRecord::from_outcome(outcome)),
            Err(LinterError::Syntax(error)) => {
                debug!("Reporting syntax error: {}", error);
                Ok(ResultRecord::from_syntax_error(error))
            }
            Err(error) => {
                warn!("Failed to lint {}: {}", source, error);
                Err(error)
            }
        }
    }
    .instrument(span)
    .await
}
