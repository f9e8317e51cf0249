//! Cancellable deferred work.
//!
//! Simulated latency is modelled as a payload parked until a deadline. The
//! owner drains due payloads on each tick; cancelling a handle removes the
//! payload so it can never be applied late.

use slotmap::{new_key_type, SlotMap};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

new_key_type! { pub struct TaskHandle; }

#[derive(Debug)]
struct Pending<T> {
    payload: T,
    deadline: Instant,
    seq: u64,
}

#[derive(Debug)]
pub struct DeferredQueue<T> {
    tasks: SlotMap<TaskHandle, Pending<T>>,
    order: BTreeMap<(Instant, u64), TaskHandle>,
    next_seq: u64,
}

impl<T> Default for DeferredQueue<T> {
    fn default() -> Self {
        Self {
            tasks: SlotMap::with_key(),
            order: BTreeMap::new(),
            next_seq: 0,
        }
    }
}

impl<T> DeferredQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, now: Instant, delay: Duration, payload: T) -> TaskHandle {
        let deadline = now.checked_add(delay).unwrap_or(now);
        let seq = self.next_seq;
        self.next_seq = self.next_seq.saturating_add(1);

        let handle = self.tasks.insert(Pending {
            payload,
            deadline,
            seq,
        });
        self.order.insert((deadline, seq), handle);
        handle
    }

    /// Hands back the payload, or `None` when the task already fired or was
    /// cancelled before.
    pub fn cancel(&mut self, handle: TaskHandle) -> Option<T> {
        let pending = self.tasks.remove(handle)?;
        self.order.remove(&(pending.deadline, pending.seq));
        Some(pending.payload)
    }

    pub fn is_pending(&self, handle: TaskHandle) -> bool {
        self.tasks.contains_key(handle)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.order.keys().next().map(|&(deadline, _)| deadline)
    }

    /// Removes every task due at `now`, earliest deadline first. Equal
    /// deadlines come out in scheduling order.
    pub fn take_due(&mut self, now: Instant) -> Vec<(TaskHandle, T)> {
        let mut due = Vec::new();
        while let Some(entry) = self.order.first_entry() {
            if entry.key().0 > now {
                break;
            }
            let handle = entry.remove();
            if let Some(pending) = self.tasks.remove(handle) {
                due.push((handle, pending.payload));
            }
        }
        due
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/deferred.rs"]
mod tests;
