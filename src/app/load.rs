//! Single-flight guard for loads.
//!
//! The load trigger is disabled while a request is in flight. The gate holds
//! a [`LoadTicket`] for that request; the completion handler takes the ticket
//! out before it looks at the response, so the trigger is re-enabled on every
//! exit path, whether decoding succeeds or fails.

use std::time::Instant;

/// Proof that a load is in flight.
///
/// Dropping the ticket marks the end of the load.
#[derive(Debug)]
pub struct LoadTicket {
    load_id: u64,
    started: Instant,
}

impl LoadTicket {
    #[must_use]
    pub const fn load_id(&self) -> u64 {
        self.load_id
    }
}

impl Drop for LoadTicket {
    fn drop(&mut self) {
        tracing::debug!(
            load_id = self.load_id,
            elapsed_ms = self.started.elapsed().as_millis(),
            "load gate released"
        );
    }
}

/// Tracks whether a load is in flight and numbers loads.
#[derive(Debug, Default)]
pub struct LoadGate {
    last_id: u64,
    in_flight: Option<LoadTicket>,
}

impl LoadGate {
    /// Returns `true` while a load is in flight.
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Identifier the next acquired load will carry.
    #[must_use]
    pub const fn next_id(&self) -> u64 {
        self.last_id + 1
    }

    /// Marks a load as in flight and returns its identifier.
    ///
    /// Returns `None` without changing anything if a load is already in flight.
    pub fn acquire(&mut self) -> Option<u64> {
        if self.is_busy() {
            return None;
        }

        self.last_id = self.next_id();
        self.in_flight = Some(LoadTicket {
            load_id: self.last_id,
            started: Instant::now(),
        });
        tracing::debug!(load_id = self.last_id, "load gate acquired");
        Some(self.last_id)
    }

    /// Takes the ticket of the in-flight load if it carries `load_id`.
    ///
    /// A response for any other load leaves the gate untouched.
    pub fn release(&mut self, load_id: u64) -> Option<LoadTicket> {
        if self.in_flight.as_ref().map(LoadTicket::load_id) == Some(load_id) {
            self.in_flight.take()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_one_load_in_flight() {
        let mut gate = LoadGate::default();
        assert_eq!(gate.acquire(), Some(1));
        assert!(gate.is_busy());
        assert_eq!(gate.acquire(), None);
    }

    #[test]
    fn release_requires_matching_id() {
        let mut gate = LoadGate::default();
        let id = gate.acquire().unwrap();

        assert!(gate.release(id + 1).is_none());
        assert!(gate.is_busy());

        let ticket = gate.release(id).unwrap();
        assert_eq!(ticket.load_id(), id);
        assert!(!gate.is_busy());
    }

    #[test]
    fn ids_increase_across_loads() {
        let mut gate = LoadGate::default();
        let first = gate.acquire().unwrap();
        drop(gate.release(first));
        assert_eq!(gate.next_id(), first + 1);
        assert_eq!(gate.acquire(), Some(first + 1));
    }
}
