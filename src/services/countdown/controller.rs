//! Owns the target exam date across the dashboard's lifetime: loads it from
//! the store at construction, drives the 1-second recomputation tick, and
//! mediates edits coming from the target-date dialog.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use chrono::{Local, NaiveDate, NaiveDateTime};
use thiserror::Error;

use super::engine::remaining_until;
use super::models::{parse_persisted_target, serialize_target, RemainingTime, TARGET_DATE_KEY};
use super::store::TargetDateStore;
use super::ticker::Ticker;

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Why a `save` call was rejected. Returned to the editing surface, which
/// owns user-visible feedback.
#[derive(Debug, Error)]
pub enum SaveError {
    /// No date was supplied. The dialog pre-constrains the lower bound
    /// (no dates before today); the controller only re-checks presence.
    #[error("no target date was provided")]
    EmptyDate,
    /// The store write failed; the in-memory target date was left unchanged.
    #[error("failed to persist target date: {0}")]
    Persistence(anyhow::Error),
}

type Observer = Box<dyn Fn(RemainingTime) + Send>;

struct ControllerState<S: TargetDateStore> {
    store: S,
    target: Option<NaiveDate>,
    remaining: RemainingTime,
    observers: Vec<Observer>,
}

impl<S: TargetDateStore> ControllerState<S> {
    fn recompute_and_publish(&mut self, now: NaiveDateTime) {
        self.remaining = remaining_until(self.target, now);
        for observer in &self.observers {
            observer(self.remaining);
        }
    }

    fn save_at(&mut self, date: Option<NaiveDate>, now: NaiveDateTime) -> Result<(), SaveError> {
        let date = date.ok_or(SaveError::EmptyDate)?;

        // Persist before touching in-memory state; a failed write must not
        // leave the two disagreeing.
        self.store
            .set(TARGET_DATE_KEY, &serialize_target(date))
            .map_err(SaveError::Persistence)?;

        self.target = Some(date);
        self.recompute_and_publish(now);
        Ok(())
    }
}

pub struct CountdownController<S: TargetDateStore> {
    state: Arc<Mutex<ControllerState<S>>>,
    ticker: Option<Ticker>,
}

impl<S: TargetDateStore> CountdownController<S> {
    /// Load the persisted target date and compute the initial breakdown.
    /// Absent or malformed persisted data degrades to the unset state.
    pub fn new(store: S) -> Self {
        Self::new_at(store, Local::now().naive_local())
    }

    pub fn new_at(store: S, now: NaiveDateTime) -> Self {
        let target = match store.get(TARGET_DATE_KEY) {
            Ok(Some(raw)) => {
                let parsed = parse_persisted_target(&raw);
                if parsed.is_none() {
                    log::warn!("Ignoring unparseable persisted target date: {raw:?}");
                }
                parsed
            }
            Ok(None) => None,
            Err(err) => {
                log::warn!("Failed to load persisted target date: {err:?}");
                None
            }
        };

        let remaining = remaining_until(target, now);
        Self {
            state: Arc::new(Mutex::new(ControllerState {
                store,
                target,
                remaining,
                observers: Vec::new(),
            })),
            ticker: None,
        }
    }

    pub fn target(&self) -> Option<NaiveDate> {
        self.state.lock().map(|state| state.target).unwrap_or(None)
    }

    /// The most recently computed breakdown.
    pub fn remaining(&self) -> RemainingTime {
        self.state
            .lock()
            .map(|state| state.remaining)
            .unwrap_or(RemainingTime::ZERO)
    }

    /// Register an observer that receives every freshly computed breakdown.
    pub fn subscribe<F>(&self, observer: F)
    where
        F: Fn(RemainingTime) + Send + 'static,
    {
        if let Ok(mut state) = self.state.lock() {
            state.observers.push(Box::new(observer));
        }
    }

    /// Validate, persist, and apply a new target date, publishing the fresh
    /// breakdown immediately rather than waiting for the next tick.
    pub fn save(&self, date: Option<NaiveDate>) -> Result<(), SaveError> {
        self.save_at(date, Local::now().naive_local())
    }

    pub fn save_at(&self, date: Option<NaiveDate>, now: NaiveDateTime) -> Result<(), SaveError> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| SaveError::Persistence(anyhow::anyhow!("controller state poisoned")))?;
        state.save_at(date, now)
    }

    /// Recompute and publish once. The ticker calls this every second; tests
    /// call `tick_at` with a pinned instant.
    pub fn tick(&self) {
        self.tick_at(Local::now().naive_local());
    }

    pub fn tick_at(&self, now: NaiveDateTime) {
        if let Ok(mut state) = self.state.lock() {
            state.recompute_and_publish(now);
        }
    }
}

impl<S: TargetDateStore + Send + 'static> CountdownController<S> {
    /// Begin the recurring 1-second tick. Runs even while no target is set,
    /// so a later `save` shows up on the very next tick. Idempotent: calling
    /// `start` while already ticking does nothing.
    pub fn start(&mut self) {
        if self.ticker.is_some() {
            return;
        }
        let state = Arc::clone(&self.state);
        self.ticker = Some(Ticker::spawn(TICK_PERIOD, move || {
            if let Ok(mut state) = state.lock() {
                state.recompute_and_publish(Local::now().naive_local());
            }
        }));
        log::debug!("Countdown tick started");
    }

    /// Halt the tick and release the worker. Safe to call repeatedly and
    /// when never started.
    pub fn stop(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.stop();
            log::debug!("Countdown tick stopped");
        }
    }
}

// The ticker holds a clone of the state, not of the controller, so dropping
// the controller is enough to end the periodic task.
impl<S: TargetDateStore> Drop for CountdownController<S> {
    fn drop(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.stop();
        }
    }
}
