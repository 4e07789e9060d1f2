use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Mounted flag shared by a page and its in-flight requests.
///
/// Each mount starts a new generation. A request remembers the generation it
/// started in, and its result is discarded unless the page is still mounted
/// in that same generation.
#[derive(Debug, Clone)]
pub struct PageLifecycle {
    mounted: Arc<AtomicBool>,
    generation: Arc<AtomicU64>,
}

impl Default for PageLifecycle {
    fn default() -> Self {
        Self {
            mounted: Arc::new(AtomicBool::new(true)),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }
}

impl PageLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Controllers mount through their own `mount`, which also releases any
    /// busy flag left by a request from an earlier generation
    pub(crate) fn mount(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.mounted.store(true, Ordering::SeqCst);
    }

    pub fn unmount(&self) {
        self.mounted.store(false, Ordering::SeqCst);
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::SeqCst)
    }

    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Whether a request started in `generation` may still update the page
    pub fn is_current(&self, generation: u64) -> bool {
        self.is_mounted() && self.generation() == generation
    }
}
