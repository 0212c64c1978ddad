//! Named wall-clock timers

use std::time::{Duration, Instant};

use dashmap::DashMap;

/// Snapshot of one timer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeEntry {
    pub id: String,
    /// Accumulated time across laps, including the running one
    pub elapsed: Duration,
    pub running: bool,
}

#[derive(Debug, Default)]
struct TimerState {
    started_at: Option<Instant>,
    total: Duration,
}

/// Concurrent registry of named timers
///
/// `start` on an already running timer restarts its current lap and keeps
/// the time accumulated by earlier laps. `stop` without a matching start
/// is a no-op.
#[derive(Debug, Default)]
pub struct Stopwatch {
    timers: DashMap<String, TimerState>,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) a timer
    pub fn start(&self, id: impl Into<String>) {
        let mut state = self.timers.entry(id.into()).or_default();
        state.started_at = Some(Instant::now());
    }

    /// Stop a timer and fold the lap into its total
    pub fn stop(&self, id: &str) {
        if let Some(mut state) = self.timers.get_mut(id) {
            if let Some(started_at) = state.started_at.take() {
                state.total += started_at.elapsed();
            }
        }
    }

    /// Snapshot of every timer, sorted by id
    pub fn times(&self) -> Vec<TimeEntry> {
        let mut entries: Vec<TimeEntry> = self
            .timers
            .iter()
            .map(|entry| {
                let state = entry.value();
                let lap = state.started_at.map_or(Duration::ZERO, |s| s.elapsed());
                TimeEntry {
                    id: entry.key().clone(),
                    elapsed: state.total + lap,
                    running: state.started_at.is_some(),
                }
            })
            .collect();
        entries.sort_by(|a, b| a.id.cmp(&b.id));
        entries
    }
}
