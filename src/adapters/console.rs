use crate::domain::model::{FactItem, PresentationState};
use crate::domain::ports::DisplaySurface;
use std::sync::atomic::{AtomicUsize, Ordering};

/// 終端機輸出：進度寫入日誌，狀態與事實寫到標準輸出
#[derive(Debug, Default)]
pub struct ConsoleDisplay {
    displayed: AtomicUsize,
}

impl ConsoleDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn displayed_count(&self) -> usize {
        self.displayed.load(Ordering::Relaxed)
    }
}

impl DisplaySurface for ConsoleDisplay {
    fn show_progress(&self, show: bool) {
        if show {
            tracing::debug!("⏳ Loading...");
        } else {
            tracing::debug!("✅ Loading finished");
        }
    }

    fn show_state(&self, state: PresentationState) {
        match state {
            PresentationState::Success => tracing::debug!("State: success"),
            PresentationState::Error(message) => println!("❌ {}", message),
        }
    }

    fn show_list(&self, items: Vec<FactItem>) {
        for item in &items {
            println!("🔢 {}: {}", item.id, item.text);
        }
        self.displayed.fetch_add(items.len(), Ordering::Relaxed);
    }
}
