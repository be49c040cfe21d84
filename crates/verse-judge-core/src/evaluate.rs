//! End-to-end evaluation of a loaded input set

use tracing::info;

use crate::batch::{BatchOrchestrator, CheckpointSink};
use crate::config::RunConfig;
use crate::error::Result;
use crate::judge::Judge;
use crate::pacing::Pacer;
use crate::records::TranslationItem;
use crate::report::EvaluationReport;
use crate::scoring::ScoringClient;
use crate::stats::summarize;

/// Score `items` under `config` and assemble the final report.
///
/// The report is not written; callers decide where it goes.
pub fn evaluate<J, P, S>(
    config: &RunConfig,
    items: &[TranslationItem],
    judge: J,
    pacer: P,
    sink: S,
) -> Result<EvaluationReport>
where
    J: Judge,
    P: Pacer,
    S: CheckpointSink,
{
    info!(
        model = %config.judge.model,
        items = items.len(),
        rubrics = config.metrics.len(),
        batch_size = config.batch_size,
        "starting evaluation"
    );

    let scorer = ScoringClient::new(judge, pacer, &config.pacing);
    let mut orchestrator = BatchOrchestrator::new(scorer, sink, &config.pacing);
    let results = orchestrator.run(
        items,
        &config.metrics,
        config.batch_size,
        config.max_retries,
    )?;

    let statistics = summarize(&results, &config.metrics);

    Ok(EvaluationReport {
        results,
        statistics,
        config: config.report_view(),
    })
}
