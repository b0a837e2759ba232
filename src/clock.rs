// src/clock.rs

//! Turn clock actor that enqueues `Tick` events at a fixed rate.
//!
//! The clock runs on its own thread and never touches engine state: every
//! firing is a message on the engine's queue. Each clock is stamped with a
//! generation number so the engine can discard ticks that were already queued
//! when the clock was stopped or replaced.

use crate::engine::{EngineEvent, EngineSender};
use crate::error::EngineError;
use log::*;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Handle to a running turn clock thread.
pub struct TurnClock {
    generation: u64,
    interval: Duration,
    cancel_tx: Option<Sender<()>>,
    thread_handle: Option<JoinHandle<()>>,
}

impl TurnClock {
    /// Spawns a clock that sends `EngineEvent::Tick { generation }` every
    /// `interval`, on a fixed-rate schedule starting one interval from now.
    pub fn spawn(
        engine_tx: EngineSender,
        interval: Duration,
        generation: u64,
    ) -> Result<Self, EngineError> {
        let (cancel_tx, cancel_rx) = mpsc::channel::<()>();

        let thread_handle = thread::Builder::new()
            .name("turn-clock".to_string())
            .spawn(move || {
                info!(
                    "TurnClock: Started (generation {}, interval {:?})",
                    generation, interval
                );
                let start = Instant::now();
                let mut fired: u32 = 0;
                loop {
                    let deadline = start + interval * (fired + 1);
                    let wait = deadline.saturating_duration_since(Instant::now());
                    match cancel_rx.recv_timeout(wait) {
                        Err(RecvTimeoutError::Timeout) => {}
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                    fired = fired.saturating_add(1);
                    if engine_tx.send(EngineEvent::Tick { generation }).is_err() {
                        info!("TurnClock: Engine channel closed, exiting");
                        break;
                    }
                }
                debug!("TurnClock: Thread exiting (generation {})", generation);
            })
            .map_err(EngineError::ClockSpawn)?;

        Ok(Self {
            generation,
            interval,
            cancel_tx: Some(cancel_tx),
            thread_handle: Some(thread_handle),
        })
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Stops the clock and waits for its thread. The thread wakes on the
    /// cancel signal immediately, so this does not wait out the interval.
    pub fn stop(&mut self) {
        if let Some(cancel_tx) = self.cancel_tx.take() {
            let _ = cancel_tx.send(());
        }
        if let Some(handle) = self.thread_handle.take() {
            if let Err(e) = handle.join() {
                error!("TurnClock thread panicked: {:?}", e);
            }
        }
    }
}

impl Drop for TurnClock {
    fn drop(&mut self) {
        debug!("TurnClock dropped (generation {})", self.generation);
        self.stop();
    }
}

/// The engine-side view of the turn clock: which generation is live and how
/// many turns it has delivered.
#[derive(Default)]
pub struct ClockState {
    active: Option<TurnClock>,
    next_generation: u64,
    tick_count: u64,
}

impl ClockState {
    /// Cancels any running clock and, for a positive interval, starts a new
    /// one. The tick count carries on across clocks; it only ever grows.
    pub fn configure(&mut self, interval_ms: i64, engine_tx: &EngineSender) -> Result<(), EngineError> {
        self.stop();
        if interval_ms <= 0 {
            debug!("TurnClock: interval {} ms disables the clock", interval_ms);
            return Ok(());
        }
        self.next_generation += 1;
        let clock = TurnClock::spawn(
            engine_tx.clone(),
            Duration::from_millis(interval_ms as u64),
            self.next_generation,
        )?;
        self.active = Some(clock);
        Ok(())
    }

    /// Cancels the running clock, if any. Idempotent.
    pub fn stop(&mut self) {
        if let Some(mut clock) = self.active.take() {
            info!("TurnClock: Stopping generation {}", clock.generation());
            clock.stop();
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.active.is_some()
    }

    pub fn interval(&self) -> Option<Duration> {
        self.active.as_ref().map(TurnClock::interval)
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// True if a tick stamped with `generation` belongs to the live clock.
    pub fn accepts(&self, generation: u64) -> bool {
        self.active
            .as_ref()
            .is_some_and(|clock| clock.generation() == generation)
    }

    /// Advances the counter and returns the new tick number.
    pub fn advance(&mut self) -> u64 {
        self.tick_count += 1;
        self.tick_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn wait_tick(rx: &mpsc::Receiver<EngineEvent>) -> Option<u64> {
        match rx.recv_timeout(Duration::from_secs(2)) {
            Ok(EngineEvent::Tick { generation }) => Some(generation),
            _ => None,
        }
    }

    #[test]
    fn clock_sends_ticks_with_its_generation() {
        let (tx, rx) = mpsc::channel();
        let mut clock = TurnClock::spawn(tx, Duration::from_millis(5), 7).unwrap();
        for _ in 0..3 {
            assert_eq!(wait_tick(&rx), Some(7));
        }
        clock.stop();
    }

    #[test]
    fn stop_is_prompt_and_final() {
        let (tx, rx) = mpsc::channel();
        let mut clock = TurnClock::spawn(tx, Duration::from_secs(60), 1).unwrap();
        let started = Instant::now();
        clock.stop();
        assert!(started.elapsed() < Duration::from_secs(5));
        // Thread has exited and dropped its sender.
        assert!(matches!(
            rx.recv_timeout(Duration::from_millis(50)),
            Err(RecvTimeoutError::Disconnected)
        ));
    }

    #[test]
    fn non_positive_interval_disables() {
        let (tx, _rx) = mpsc::channel();
        let mut state = ClockState::default();
        state.configure(0, &tx).unwrap();
        assert!(!state.is_enabled());
        state.configure(-5, &tx).unwrap();
        assert!(!state.is_enabled());
    }

    #[test]
    fn reconfigure_replaces_generation() {
        let (tx, _rx) = mpsc::channel();
        let mut state = ClockState::default();
        state.configure(1_000, &tx).unwrap();
        assert!(state.accepts(1));
        state.configure(1_000, &tx).unwrap();
        assert!(!state.accepts(1));
        assert!(state.accepts(2));
        assert_eq!(state.interval(), Some(Duration::from_millis(1_000)));
        state.stop();
        state.stop();
        assert!(!state.accepts(2));
    }

    #[test]
    fn tick_count_continues_across_clocks() {
        let (tx, _rx) = mpsc::channel();
        let mut state = ClockState::default();
        state.configure(1_000, &tx).unwrap();
        assert_eq!(state.advance(), 1);
        assert_eq!(state.advance(), 2);
        state.configure(500, &tx).unwrap();
        assert_eq!(state.tick_count(), 2);
        assert_eq!(state.advance(), 3);
        state.stop();
        assert_eq!(state.tick_count(), 3);
    }
}
