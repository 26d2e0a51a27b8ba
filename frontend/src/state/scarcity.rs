//! "Spots left" counter.
//!
//! Both the background decay and a completed registration go through
//! `ScarcityCounter::decrement`, so the two paths can't race each other.

use crate::utils::storage::{KeyValueStore, SPOTS_LEFT_KEY};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecrementSource {
    /// A registration went through; always counts down to zero
    Registration,
    /// Random background decay; stops at the floor
    Decay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScarcityCounter {
    value: u32,
    floor: u32,
}

impl ScarcityCounter {
    #[cfg(test)]
    pub fn new(value: u32, floor: u32) -> Self {
        Self { value, floor }
    }

    /// Reads `spots_left`, falling back to `default` when missing or malformed.
    pub fn load(store: &dyn KeyValueStore, default: u32, floor: u32) -> Self {
        let value = match store.get(SPOTS_LEFT_KEY) {
            Some(raw) => match raw.trim().parse::<i64>().map(|n| u32::try_from(n.max(0))) {
                Ok(Ok(n)) => n,
                Ok(Err(_)) | Err(_) => {
                    log::warn!("ignoring malformed {} value {:?}", SPOTS_LEFT_KEY, raw);
                    default
                }
            },
            None => default,
        };
        Self { value, floor }
    }

    pub fn persist(&self, store: &dyn KeyValueStore) {
        if let Err(e) = store.set(SPOTS_LEFT_KEY, &self.value.to_string()) {
            log::warn!("could not persist spots left: {}", e);
        }
    }

    /// Returns whether the value changed.
    pub fn decrement(&mut self, source: DecrementSource) -> bool {
        let limit = match source {
            DecrementSource::Registration => 0,
            DecrementSource::Decay => self.floor,
        };
        if self.value <= limit {
            return false;
        }
        self.value -= 1;
        true
    }

    pub fn value(&self) -> u32 {
        self.value
    }
}
