#![allow(dead_code)]

use keyswitch::{DispatchError, Registration, pair};
use std::sync::{Arc, Mutex};

// ============================================================================
// Classifiers
// ============================================================================

pub fn band(n: i32) -> &'static str {
    if n < 3 {
        "low"
    } else if n < 7 {
        "mid"
    } else {
        "high"
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Reading {
    Celsius(f64),
    Fahrenheit(f64),
    Missing,
}

pub fn reading_kind(reading: &Reading) -> &'static str {
    match reading {
        Reading::Celsius(_) => "celsius",
        Reading::Fahrenheit(_) => "fahrenheit",
        Reading::Missing => "missing",
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// Handlers that record which one ran into a shared vector.
pub struct Tracker {
    pub ran: Arc<Mutex<Vec<usize>>>,
}

impl Tracker {
    pub fn new() -> Self {
        Self {
            ran: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn handler(&self, id: usize) -> impl FnOnce() -> usize + 'static {
        let ran = self.ran.clone();
        move || {
            ran.lock().unwrap().push(id);
            id
        }
    }

    pub fn ran(&self) -> Vec<usize> {
        self.ran.lock().unwrap().clone()
    }
}

pub fn band_registrations(tracker: &Tracker) -> Vec<Registration<'static, &'static str, usize>> {
    vec![
        pair("low", tracker.handler(0)),
        pair("mid", tracker.handler(1)),
        pair("high", tracker.handler(2)),
    ]
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, PartialEq)]
pub enum AppError {
    Dispatch(DispatchError<String>),
    Parse(String),
    Handler(&'static str),
}

impl From<DispatchError<String>> for AppError {
    fn from(err: DispatchError<String>) -> Self {
        AppError::Dispatch(err)
    }
}
