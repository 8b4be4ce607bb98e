//! Tally containers produced by the aggregation functions.

use crate::model::task::TaskStatus;
use serde::Serialize;
use std::collections::HashMap;

/// Task count for every `TaskStatus`.
///
/// All four statuses are always present; absent ones read as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    counts: [usize; 4],
}

impl StatusCounts {
    pub fn get(&self, status: TaskStatus) -> usize {
        self.counts[slot(status)]
    }

    pub(crate) fn increment(&mut self, status: TaskStatus) {
        self.counts[slot(status)] += 1;
    }

    /// Sum over all buckets.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// `(status, count)` pairs in `TaskStatus::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = (TaskStatus, usize)> + '_ {
        TaskStatus::ALL
            .into_iter()
            .map(move |status| (status, self.get(status)))
    }
}

fn slot(status: TaskStatus) -> usize {
    match status {
        TaskStatus::Upcoming => 0,
        TaskStatus::InProgress => 1,
        TaskStatus::Overdue => 2,
        TaskStatus::Completed => 3,
    }
}

/// Task count per exact assignee string, in first-appearance order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssigneeCounts {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl AssigneeCounts {
    pub(crate) fn increment(&mut self, assignee: &str) {
        match self.index.get(assignee) {
            Some(&position) => self.entries[position].1 += 1,
            None => {
                self.index.insert(assignee.to_string(), self.entries.len());
                self.entries.push((assignee.to_string(), 1));
            }
        }
    }

    /// Count for `assignee`, zero when never seen.
    pub fn get(&self, assignee: &str) -> usize {
        self.index
            .get(assignee)
            .map_or(0, |&position| self.entries[position].1)
    }

    /// Number of distinct assignees.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.entries
            .iter()
            .map(|(assignee, count)| (assignee.as_str(), *count))
    }
}

/// Headline numbers for the dashboard stat cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProjectStats {
    pub total_tasks: usize,
    pub completed_tasks: usize,
    /// Every loaded project counts; there is no archived state.
    pub active_project_count: usize,
    pub overdue_tasks: usize,
}
