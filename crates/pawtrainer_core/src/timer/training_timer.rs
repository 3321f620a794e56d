//! Runtime-driven countdown timers.
//!
//! # Invariants
//! - Each running timer owns exactly one decrement task.
//! - `start` and `stop` abort the previous task before touching state, and
//!   a task only decrements while its generation is current, so a restart
//!   can never double-decrement.
//! - Completion notifies through `notify_best_effort` and ends the task.
//!
//! `start` spawns onto the ambient tokio runtime and must be called from
//! within one.

use crate::config::TimerPreset;
use crate::feedback::{notify_best_effort, Notifier, SESSION_COMPLETE_MESSAGE};
use crate::timer::countdown::{Countdown, TickOutcome, TimerPhase};
use log::{debug, info};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};

const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Shared timer cell observed through a watch channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerSnapshot {
    pub countdown: Countdown,
    generation: u64,
}

impl TimerSnapshot {
    pub fn phase(&self) -> TimerPhase {
        self.countdown.phase()
    }

    pub fn remaining_secs(&self) -> u32 {
        self.countdown.remaining_secs()
    }
}

/// One labelled countdown ticking once per second while running.
pub struct TrainingTimer {
    label: String,
    cell: Arc<watch::Sender<TimerSnapshot>>,
    notifier: Arc<dyn Notifier>,
    task: Option<JoinHandle<()>>,
}

impl TrainingTimer {
    pub fn new(label: impl Into<String>, total_secs: u32, notifier: Arc<dyn Notifier>) -> Self {
        let (sender, _) = watch::channel(TimerSnapshot {
            countdown: Countdown::new(total_secs),
            generation: 0,
        });
        Self {
            label: label.into(),
            cell: Arc::new(sender),
            notifier,
            task: None,
        }
    }

    pub fn from_preset(preset: &TimerPreset, notifier: Arc<dyn Notifier>) -> Self {
        Self::new(preset.label(), preset.total_secs(), notifier)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        self.cell.borrow().clone()
    }

    pub fn phase(&self) -> TimerPhase {
        self.cell.borrow().phase()
    }

    pub fn remaining_secs(&self) -> u32 {
        self.cell.borrow().remaining_secs()
    }

    /// Receiver that observes every tick, stop and restart.
    pub fn subscribe(&self) -> watch::Receiver<TimerSnapshot> {
        self.cell.subscribe()
    }

    /// Resets to the full duration and begins the per-second decrement.
    pub fn start(&mut self) {
        self.cancel_task();

        let mut outcome = TickOutcome::Ignored;
        let mut generation = 0;
        self.cell.send_modify(|snapshot| {
            snapshot.generation += 1;
            generation = snapshot.generation;
            outcome = snapshot.countdown.start();
        });
        info!(
            "event=timer_start module=timer label={} total_secs={}",
            self.label,
            self.snapshot().countdown.total_secs()
        );

        if outcome == TickOutcome::Completed {
            self.complete();
            return;
        }

        let cell = Arc::clone(&self.cell);
        let notifier = Arc::clone(&self.notifier);
        let label = self.label.clone();
        let first_tick = Instant::now() + TICK_PERIOD;
        self.task = Some(tokio::spawn(async move {
            let mut ticker = interval_at(first_tick, TICK_PERIOD);
            loop {
                ticker.tick().await;
                let mut outcome = TickOutcome::Ignored;
                cell.send_if_modified(|snapshot| {
                    if snapshot.generation != generation {
                        return false;
                    }
                    outcome = snapshot.countdown.tick();
                    outcome != TickOutcome::Ignored
                });
                match outcome {
                    TickOutcome::Counting => {}
                    TickOutcome::Completed => {
                        info!("event=timer_complete module=timer label={label}");
                        notify_best_effort(notifier.as_ref(), SESSION_COMPLETE_MESSAGE);
                        break;
                    }
                    TickOutcome::Ignored => break,
                }
            }
        }));
    }

    /// Cancels the decrement and keeps the remaining time.
    pub fn stop(&mut self) {
        self.cancel_task();
        self.cell.send_modify(|snapshot| {
            snapshot.generation += 1;
            snapshot.countdown.stop();
        });
        debug!(
            "event=timer_stop module=timer label={} remaining_secs={}",
            self.label,
            self.remaining_secs()
        );
    }

    fn complete(&self) {
        info!("event=timer_complete module=timer label={}", self.label);
        notify_best_effort(self.notifier.as_ref(), SESSION_COMPLETE_MESSAGE);
    }

    fn cancel_task(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for TrainingTimer {
    fn drop(&mut self) {
        self.cancel_task();
    }
}

/// The configured set of independent timers.
pub struct TimerBank {
    timers: Vec<TrainingTimer>,
}

impl TimerBank {
    pub fn from_presets(presets: &[TimerPreset], notifier: Arc<dyn Notifier>) -> Self {
        let timers = presets
            .iter()
            .map(|preset| TrainingTimer::from_preset(preset, Arc::clone(&notifier)))
            .collect();
        Self { timers }
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TrainingTimer> {
        self.timers.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut TrainingTimer> {
        self.timers.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrainingTimer> {
        self.timers.iter()
    }
}
