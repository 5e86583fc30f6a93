//! Shared region label.

use arc_swap::ArcSwapOption;
use std::sync::Arc;

/// Process-wide region label, written once and read by every status request.
///
/// Cloning shares the same cell. Reads are lock-free snapshots, so a reader
/// sees either no label or the complete one.
#[derive(Clone, Default)]
pub struct RegionState {
    label: Arc<ArcSwapOption<String>>,
}

impl RegionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the label if none has been stored yet.
    ///
    /// Empty labels are ignored. Returns `true` when this call stored it.
    pub fn set(&self, label: impl Into<String>) -> bool {
        let label = label.into();
        if label.is_empty() {
            return false;
        }
        let previous = self
            .label
            .compare_and_swap(&None::<Arc<String>>, Some(Arc::new(label)));
        previous.is_none()
    }

    /// Current label, if resolved.
    pub fn get(&self) -> Option<Arc<String>> {
        self.label.load_full()
    }
}

impl std::fmt::Debug for RegionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegionState")
            .field("label", &self.get())
            .finish()
    }
}
