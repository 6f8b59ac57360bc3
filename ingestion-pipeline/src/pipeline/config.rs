use std::path::PathBuf;

use common::utils::config::AppConfig;

#[derive(Debug, Clone)]
pub struct LoaderTuning {
    /// Lines of one dump processed at the same time. Passes never overlap.
    pub line_concurrency: usize,
    /// Emit a progress line every this many lines; zero disables it.
    pub progress_log_interval: usize,
}

impl Default for LoaderTuning {
    fn default() -> Self {
        Self {
            line_concurrency: 1,
            progress_log_interval: 10_000,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoaderConfig {
    pub author_dump: PathBuf,
    pub works_dump: PathBuf,
    pub tuning: LoaderTuning,
}

impl LoaderConfig {
    pub fn new(author_dump: impl Into<PathBuf>, works_dump: impl Into<PathBuf>) -> Self {
        Self {
            author_dump: author_dump.into(),
            works_dump: works_dump.into(),
            tuning: LoaderTuning::default(),
        }
    }

    #[must_use]
    pub fn with_tuning(mut self, tuning: LoaderTuning) -> Self {
        self.tuning = tuning;
        self
    }
}

impl From<&AppConfig> for LoaderConfig {
    fn from(config: &AppConfig) -> Self {
        Self::new(&config.author_dump_path, &config.works_dump_path).with_tuning(LoaderTuning {
            line_concurrency: config.ingest_line_concurrency,
            progress_log_interval: config.progress_log_interval,
        })
    }
}
