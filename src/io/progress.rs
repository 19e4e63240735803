//! Per-phase progress bars for boundary carving and coloring

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PHASE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "{{prefix:>10}} [{{elapsed_precise}}] [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Hands out progress bars for each worker phase
///
/// Bars are shared by reference with every worker of a phase; when
/// disabled, hidden bars are returned so workers need no special casing.
#[derive(Debug, Clone, Copy)]
pub struct ProgressManager {
    enabled: bool,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ProgressManager {
    /// Create a manager that draws bars only when `enabled`
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Manager that never draws
    pub const fn hidden() -> Self {
        Self::new(false)
    }

    /// Whether bars are drawn
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Start a bar for a phase of `len` work items
    pub fn start_phase(&self, label: &'static str, len: usize) -> ProgressBar {
        if !self.enabled {
            return ProgressBar::hidden();
        }
        let bar = ProgressBar::new(len as u64);
        bar.set_style(PHASE_STYLE.clone());
        bar.set_prefix(label);
        bar
    }

    /// Finish a phase bar and remove it from the terminal
    pub fn finish_phase(bar: &ProgressBar) {
        bar.finish_and_clear();
    }
}
