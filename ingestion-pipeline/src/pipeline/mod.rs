mod config;
mod report;

pub use config::{LoaderConfig, LoaderTuning};
pub use report::{LineOutcome, LoadReport, PassReport};

use std::{path::Path, pin::pin, sync::Arc, time::Instant};

use common::error::AppError;
use futures::StreamExt;
use tracing::{debug, error, info, instrument, warn};

use crate::{
    dump::{DumpKind, DumpLine, DumpReader},
    mapping::{map_author, map_work},
    record::parse_record_line,
    resolver::resolve_author_names,
    store::CatalogStore,
};

/// Loads an author dump and a works dump into a [`CatalogStore`].
///
/// Every line is handled on its own: a line that cannot be parsed, mapped or
/// written is logged and skipped, and the load carries on with the next one.
pub struct DumpLoader {
    store: Arc<dyn CatalogStore>,
    config: LoaderConfig,
}

impl DumpLoader {
    pub fn new(store: Arc<dyn CatalogStore>, config: LoaderConfig) -> Self {
        Self { store, config }
    }

    /// Runs the author pass to completion, then the works pass, so works can
    /// resolve the names of authors loaded in this run.
    pub async fn run(&self) -> LoadReport {
        let started = Instant::now();

        let authors = self.load_authors().await;
        let works = self.load_works().await;

        let report = LoadReport { authors, works };
        info!(
            loaded = report.total_loaded(),
            skipped = report.total_skipped(),
            elapsed_ms = started.elapsed().as_millis(),
            "dump load finished"
        );
        report
    }

    #[instrument(skip_all, fields(path = %self.config.author_dump.display()))]
    pub async fn load_authors(&self) -> PassReport {
        self.run_pass(DumpKind::Authors, &self.config.author_dump).await
    }

    #[instrument(skip_all, fields(path = %self.config.works_dump.display()))]
    pub async fn load_works(&self) -> PassReport {
        self.run_pass(DumpKind::Works, &self.config.works_dump).await
    }

    async fn run_pass(&self, kind: DumpKind, path: &Path) -> PassReport {
        let mut report = PassReport::new(kind);

        let reader = match DumpReader::open(path).await {
            Ok(reader) => reader,
            Err(err) => {
                error!(dump = %kind, path = %path.display(), error = %err, "cannot open dump");
                report.read_error = Some(err.to_string());
                return report;
            }
        };
        info!(dump = %kind, path = %reader.path().display(), "dump pass started");

        let tuning = &self.config.tuning;
        let outcomes = reader
            .into_stream()
            .map(move |line| async move {
                match line {
                    Ok(line) => Ok(self.handle_line(kind, &line).await),
                    Err(err) => Err(err),
                }
            })
            .buffer_unordered(tuning.line_concurrency.max(1));
        let mut outcomes = pin!(outcomes);

        while let Some(outcome) = outcomes.next().await {
            match outcome {
                Ok(outcome) => report.record(outcome),
                Err(err) => {
                    error!(
                        dump = %kind,
                        after_line = report.lines_read,
                        error = %err,
                        "dump read failed; ending pass"
                    );
                    report.read_error = Some(err.to_string());
                }
            }

            if tuning.progress_log_interval > 0
                && report.lines_read > 0
                && report.lines_read % tuning.progress_log_interval == 0
            {
                info!(
                    dump = %kind,
                    lines = report.lines_read,
                    loaded = report.loaded,
                    skipped = report.skipped,
                    "dump pass progress"
                );
            }
        }

        info!(
            dump = %kind,
            lines = report.lines_read,
            loaded = report.loaded,
            skipped = report.skipped,
            blank = report.blank,
            complete = report.is_complete(),
            "dump pass finished"
        );
        report
    }

    async fn handle_line(&self, kind: DumpKind, line: &DumpLine) -> LineOutcome {
        if line.is_blank() {
            return LineOutcome::Blank;
        }

        match self.ingest_line(kind, line).await {
            Ok(()) => LineOutcome::Loaded,
            Err(err) => {
                warn!(
                    dump = %kind,
                    line = line.number,
                    error = %err,
                    preview = %line.preview(),
                    "skipping dump line"
                );
                LineOutcome::Skipped
            }
        }
    }

    async fn ingest_line(&self, kind: DumpKind, line: &DumpLine) -> Result<(), AppError> {
        let record = parse_record_line(line.text()?)?;

        match kind {
            DumpKind::Authors => {
                let author = map_author(&record)?;
                debug!(author_id = %author.id, name = %author.name, "saving author");
                self.store.upsert_author(author).await
            }
            DumpKind::Works => {
                let mut book = map_work(&record)?;
                if !book.author_ids.is_empty() {
                    let names = resolve_author_names(self.store.as_ref(), &book.author_ids).await?;
                    book = book.with_author_names(names);
                }
                debug!(book_id = %book.id, authors = book.author_ids.len(), "saving book");
                self.store.upsert_book(book).await
            }
        }
    }
}
