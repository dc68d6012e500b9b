//! Countdown timer component

use crate::format::format_time;
use quiz_core::DisplaySink;
use serde::{Deserialize, Serialize};

/// Timer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    /// Countdown duration in seconds
    pub duration_secs: f64,
    /// Name of the completion event
    pub emit: String,
    /// Event name that restarts the timer (None = no event wiring)
    pub on: Option<String>,
    /// Start running at creation
    pub autostart: bool,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            duration_secs: 30.0,
            emit: "timerend".to_string(),
            on: None,
            autostart: false,
        }
    }
}

impl TimerConfig {
    /// Set the duration
    pub fn with_duration_secs(mut self, secs: f64) -> Self {
        self.duration_secs = secs;
        self
    }

    /// Set the completion event name
    pub fn with_emit(mut self, emit: impl Into<String>) -> Self {
        self.emit = emit.into();
        self
    }

    /// Restart on the given event name
    pub fn with_restart_on(mut self, event: impl Into<String>) -> Self {
        self.on = Some(event.into());
        self
    }

    /// Start running at creation
    pub fn with_autostart(mut self) -> Self {
        self.autostart = true;
        self
    }
}

/// Completion event emitted when the countdown expires
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerEvent {
    /// Configured event name
    pub name: String,
}

/// Timer lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    /// Not running
    Stopped,
    /// Running, end time not yet fixed
    RunningPending,
    /// Running with a fixed end time
    RunningActive,
}

/// Countdown timer driven by the host's per-frame tick.
///
/// The end time is computed lazily on the first tick after the timer
/// becomes running (0 means "not yet computed"), so a restart measures
/// its duration from the next tick rather than from the restart call.
/// Completion events are queued and drained by the host.
#[derive(Debug)]
pub struct CountdownTimer {
    config: TimerConfig,
    running: bool,
    end_time: f64,
    last_update: f64,
    events: Vec<TimerEvent>,
}

impl CountdownTimer {
    /// Create a timer from its configuration
    pub fn new(config: TimerConfig) -> Self {
        let running = config.autostart;
        Self {
            config,
            running,
            end_time: 0.0,
            last_update: 0.0,
            events: Vec::new(),
        }
    }

    /// The timer configuration
    pub fn config(&self) -> &TimerConfig {
        &self.config
    }

    /// Whether the timer is running
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> TimerPhase {
        match (self.running, self.end_time) {
            (false, _) => TimerPhase::Stopped,
            (true, t) if t == 0.0 => TimerPhase::RunningPending,
            (true, _) => TimerPhase::RunningActive,
        }
    }

    /// The fixed end time, 0 when not yet computed
    pub fn end_time(&self) -> f64 {
        self.end_time
    }

    /// Start the countdown. Keeps an already-fixed end time: resuming a
    /// stopped-then-started timer that never expired does not extend it.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stop the countdown and clear the end time
    pub fn stop(&mut self) {
        self.running = false;
        self.end_time = 0.0;
    }

    /// Restart: keep running but clear the end time so the next tick
    /// fixes a fresh one
    pub fn restart(&mut self) {
        self.running = true;
        self.end_time = 0.0;
    }

    /// Restart when `event` matches the configured `on` name
    pub fn handle_event(&mut self, event: &str) {
        if self.config.on.as_deref() == Some(event) {
            log::debug!("Timer restarted by '{}' event", event);
            self.restart();
        }
    }

    /// Advance the timer.
    ///
    /// No-op while stopped. Fixes the end time on the first running
    /// tick, refreshes the label at most once per second, and on expiry
    /// queues the completion event, stops, and forces the label to
    /// `00:00`.
    pub fn tick(&mut self, time: f64, _delta: f64, mut label: Option<&mut dyn DisplaySink>) {
        if !self.running {
            return;
        }

        if self.end_time == 0.0 {
            self.end_time = time + self.config.duration_secs * 1000.0;
            self.last_update = time;
        }

        if let Some(sink) = label.as_mut() {
            if time - self.last_update > 1000.0 {
                sink.display(&format_time(self.end_time - time));
                self.last_update = time;
            }
        }

        if time > self.end_time {
            self.events.push(TimerEvent {
                name: self.config.emit.clone(),
            });
            self.stop();
            if let Some(sink) = label {
                sink.display("00:00");
            }
        }
    }

    /// Drain queued completion events
    pub fn drain_events(&mut self) -> Vec<TimerEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Default for CountdownTimer {
    fn default() -> Self {
        Self::new(TimerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timer(duration_secs: f64) -> CountdownTimer {
        CountdownTimer::new(TimerConfig::default().with_duration_secs(duration_secs))
    }

    #[test]
    fn test_stopped_tick_is_noop() {
        let mut t = timer(30.0);
        t.tick(1000.0, 16.0, None);

        assert_eq!(t.phase(), TimerPhase::Stopped);
        assert_eq!(t.end_time(), 0.0);
        assert!(t.drain_events().is_empty());
    }

    #[test]
    fn test_autostart() {
        let t = CountdownTimer::new(TimerConfig::default().with_autostart());
        assert_eq!(t.phase(), TimerPhase::RunningPending);
    }

    #[test]
    fn test_first_tick_fixes_end_time() {
        let mut t = timer(30.0);
        t.start();
        assert_eq!(t.phase(), TimerPhase::RunningPending);

        t.tick(5000.0, 0.0, None);
        assert_eq!(t.phase(), TimerPhase::RunningActive);
        assert_eq!(t.end_time(), 35_000.0);
    }

    #[test]
    fn test_completion_fires_once() {
        let mut t = timer(1.0);
        t.start();
        t.tick(0.0, 0.0, None);

        t.tick(1500.0, 16.0, None);
        assert_eq!(t.phase(), TimerPhase::Stopped);
        let events = t.drain_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name, "timerend");

        // ticking a stopped timer emits nothing further
        t.tick(2000.0, 16.0, None);
        assert!(t.drain_events().is_empty());
    }

    #[test]
    fn test_completion_forces_label_to_zero() {
        let mut t = timer(1.0);
        let mut label = String::new();
        t.start();
        t.tick(0.0, 0.0, Some(&mut label));
        t.tick(1500.0, 16.0, Some(&mut label));

        assert_eq!(label, "00:00");
    }

    #[test]
    fn test_label_updates_are_throttled() {
        let mut t = timer(30.0);
        let mut label = String::new();
        t.start();
        t.tick(0.0, 0.0, Some(&mut label));
        assert_eq!(label, "");

        // under a second since last update: no refresh
        t.tick(900.0, 16.0, Some(&mut label));
        assert_eq!(label, "");

        t.tick(1100.0, 16.0, Some(&mut label));
        assert_eq!(label, "00:29");

        // throttle interval restarts from the refresh
        t.tick(2000.0, 16.0, Some(&mut label));
        assert_eq!(label, "00:29");
    }

    #[test]
    fn test_restart_recomputes_end_time() {
        let mut t = timer(30.0);
        t.start();
        t.tick(0.0, 0.0, None);
        assert_eq!(t.end_time(), 30_000.0);

        t.restart();
        assert_eq!(t.phase(), TimerPhase::RunningPending);

        // fresh end time measured from this tick, not the original start
        t.tick(10_000.0, 16.0, None);
        assert_eq!(t.end_time(), 40_000.0);
    }

    #[test]
    fn test_start_does_not_reset_active_end_time() {
        let mut t = timer(30.0);
        t.start();
        t.tick(0.0, 0.0, None);

        t.start();
        assert_eq!(t.end_time(), 30_000.0);
    }

    #[test]
    fn test_stop_clears_end_time() {
        let mut t = timer(30.0);
        t.start();
        t.tick(0.0, 0.0, None);
        t.stop();

        assert_eq!(t.phase(), TimerPhase::Stopped);
        assert_eq!(t.end_time(), 0.0);
    }

    #[test]
    fn test_handle_event_restarts() {
        let mut t = CountdownTimer::new(
            TimerConfig::default()
                .with_duration_secs(5.0)
                .with_restart_on("newquestion"),
        );

        t.handle_event("click");
        assert_eq!(t.phase(), TimerPhase::Stopped);

        t.handle_event("newquestion");
        assert_eq!(t.phase(), TimerPhase::RunningPending);

        // restart while active clears the fixed end time
        t.tick(1000.0, 0.0, None);
        assert_eq!(t.phase(), TimerPhase::RunningActive);
        t.handle_event("newquestion");
        assert_eq!(t.phase(), TimerPhase::RunningPending);
    }
}
