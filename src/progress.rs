//! Progress feedback for multi-document runs.
//!
//! Bars are drawn on stderr with `indicatif` and stay hidden when:
//!
//! - `--quiet` is given or `ANEW_QUIET` is set,
//! - stderr is not a terminal (CI, pipes, redirected output).
//!
//! ```rust,no_run
//! use anew_sentiment::progress::{ProgressConfig, ProgressManager, TEMPLATE_DOCUMENTS};
//!
//! let manager = ProgressManager::new(ProgressConfig::from_env(false));
//! let bar = manager.create_bar(3, TEMPLATE_DOCUMENTS);
//! bar.set_message("Scoring documents");
//! for _ in 0..3 {
//!     bar.inc(1);
//! }
//! bar.finish_with_message("Scoring complete");
//! ```

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::io::IsTerminal;
use std::sync::Arc;
use std::time::Duration;

pub const QUIET_ENV_VAR: &str = "ANEW_QUIET";

pub const TEMPLATE_DOCUMENTS: &str = "📄 {msg} {pos}/{len} documents ({percent}%) - {eta}";
pub const TEMPLATE_SPINNER: &str = "{spinner} {msg}";

#[derive(Debug, Clone, Default)]
pub struct ProgressConfig {
    pub quiet_mode: bool,
}

impl ProgressConfig {
    pub fn from_env(quiet: bool) -> Self {
        let env_quiet = std::env::var(QUIET_ENV_VAR).is_ok();
        Self {
            quiet_mode: quiet || env_quiet,
        }
    }

    pub fn should_show_progress(&self) -> bool {
        if self.quiet_mode {
            return false;
        }
        std::io::stderr().is_terminal()
    }
}

#[derive(Clone)]
pub struct ProgressManager {
    multi: Arc<MultiProgress>,
    config: ProgressConfig,
}

impl ProgressManager {
    pub fn new(config: ProgressConfig) -> Self {
        Self {
            multi: Arc::new(MultiProgress::new()),
            config,
        }
    }

    /// Returns a hidden bar if progress should not be shown.
    pub fn create_bar(&self, len: u64, template: &str) -> ProgressBar {
        if !self.config.should_show_progress() {
            return ProgressBar::hidden();
        }

        let style = ProgressStyle::default_bar()
            .template(template)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░  ");
        let pb = self.multi.add(ProgressBar::new(len));
        pb.set_style(style);
        pb
    }

    /// Returns a hidden spinner if progress should not be shown.
    pub fn create_spinner(&self, msg: &str) -> ProgressBar {
        if !self.config.should_show_progress() {
            return ProgressBar::hidden();
        }

        let style = ProgressStyle::default_spinner()
            .template(TEMPLATE_SPINNER)
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");
        let pb = self.multi.add(ProgressBar::new_spinner());
        pb.set_style(style);
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }
}
