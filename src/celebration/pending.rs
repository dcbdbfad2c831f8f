//! Pending celebrations in display order
//!
//! Kept as two sequences read back-to-back: the legendary block and
//! everything else. Each block is FIFO, so a legendary arrival overtakes all
//! lower tiers but never another legendary, and lower tiers never reorder
//! among themselves.

use std::collections::VecDeque;

use crate::QueuedCelebration;

use super::policy::TierTable;

#[derive(Debug, Default)]
pub(crate) struct PendingQueue {
    legendary: VecDeque<QueuedCelebration>,
    rest: VecDeque<QueuedCelebration>,
}

impl PendingQueue {
    pub fn push(&mut self, item: QueuedCelebration) {
        if item.tier().is_legendary() {
            self.legendary.push_back(item);
        } else {
            self.rest.push_back(item);
        }
    }

    pub fn pop_front(&mut self) -> Option<QueuedCelebration> {
        self.legendary
            .pop_front()
            .or_else(|| self.rest.pop_front())
    }

    pub fn len(&self) -> usize {
        self.legendary.len() + self.rest.len()
    }

    pub fn is_empty(&self) -> bool {
        self.legendary.is_empty() && self.rest.is_empty()
    }

    /// Number of pending items that will actually occupy the display slot
    pub fn visible_len(&self, table: &TierTable) -> usize {
        self.iter()
            .filter(|item| table.policy_for(item.tier()).renders_visually)
            .count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &QueuedCelebration> {
        self.legendary.iter().chain(self.rest.iter())
    }
}
