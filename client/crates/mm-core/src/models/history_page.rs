use crate::MoodEntry;
use crate::pagination::total_pages;

use serde::{Deserialize, Serialize};

/// One page of `/auth/history`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryPage {
    pub data: Vec<MoodEntry>,
    pub total_entries: u64,
    pub limit: u32,
}

impl HistoryPage {
    pub fn total_pages(&self) -> u32 {
        total_pages(self.total_entries, self.limit)
    }
}
