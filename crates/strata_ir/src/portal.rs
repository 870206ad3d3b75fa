//! Patch portal - fan-out of patches between components
//!
//! Every component owns one [`PatchGate`] made by a shared [`PatchPortal`].
//! A patch pushed through a gate is delivered to every *other* live gate;
//! each gate drains its own queue with non-blocking [`PatchGate::pop`].
//!
//! ```text
//! gate A ──push──┐
//!                ├──► queue B ──pop──► component B
//!                └──► queue C ──pop──► component C
//! ```

use std::sync::{Arc, Weak};

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use parking_lot::Mutex;

use crate::patch::PatchPtr;

/// Configuration for the patch portal
#[derive(Debug, Clone)]
pub struct PatchPortalConfig {
    /// Patches a gate may hold before new ones are dropped
    pub gate_capacity: usize,
    /// Whether to log dropped patches
    pub log_dropped: bool,
}

impl Default for PatchPortalConfig {
    fn default() -> Self {
        Self {
            gate_capacity: 4096,
            log_dropped: true,
        }
    }
}

/// Statistics about portal usage
#[derive(Debug, Clone, Default)]
pub struct PatchPortalStats {
    /// Gates made so far
    pub gates_made: u64,
    /// Patches pushed through any gate
    pub patches_pushed: u64,
    /// Deliveries into gate queues
    pub patches_delivered: u64,
    /// Deliveries dropped because a queue was full
    pub patches_dropped: u64,
}

struct GateQueue {
    sender: Sender<PatchPtr>,
    receiver: Receiver<PatchPtr>,
}

struct Links {
    config: PatchPortalConfig,
    gates: Mutex<Vec<Weak<GateQueue>>>,
    stats: Mutex<PatchPortalStats>,
}

impl Links {
    fn broadcast(&self, from: &Arc<GateQueue>, patch: &PatchPtr) {
        let mut delivered = 0;
        let mut dropped = 0;

        let mut gates = self.gates.lock();
        gates.retain(|gate| gate.strong_count() > 0);
        for gate in gates.iter().filter_map(Weak::upgrade) {
            if Arc::ptr_eq(&gate, from) {
                continue;
            }
            match gate.sender.try_send(Arc::clone(patch)) {
                Ok(()) => delivered += 1,
                Err(TrySendError::Full(_)) | Err(TrySendError::Disconnected(_)) => dropped += 1,
            }
        }
        drop(gates);

        if dropped > 0 && self.config.log_dropped {
            log::warn!("Dropped patch for {} gate(s): queue full", dropped);
        }

        let mut stats = self.stats.lock();
        stats.patches_pushed += 1;
        stats.patches_delivered += delivered;
        stats.patches_dropped += dropped;
    }
}

/// Factory of linked gates
pub struct PatchPortal {
    links: Arc<Links>,
}

impl PatchPortal {
    /// Create a new portal
    pub fn new(config: PatchPortalConfig) -> Self {
        Self {
            links: Arc::new(Links {
                config,
                gates: Mutex::new(Vec::new()),
                stats: Mutex::new(PatchPortalStats::default()),
            }),
        }
    }

    /// Make a gate linked with every other gate of this portal
    pub fn make_gate(&self) -> PatchGate {
        log::debug!("Making new patch gate");
        let (sender, receiver) = bounded(self.links.config.gate_capacity);
        let queue = Arc::new(GateQueue { sender, receiver });

        self.links.gates.lock().push(Arc::downgrade(&queue));
        self.links.stats.lock().gates_made += 1;

        PatchGate {
            queue,
            links: Arc::clone(&self.links),
        }
    }

    /// Number of gates still alive
    pub fn live_gates(&self) -> usize {
        self.links
            .gates
            .lock()
            .iter()
            .filter(|gate| gate.strong_count() > 0)
            .count()
    }

    /// Get current statistics
    pub fn stats(&self) -> PatchPortalStats {
        self.links.stats.lock().clone()
    }
}

impl Default for PatchPortal {
    fn default() -> Self {
        Self::new(PatchPortalConfig::default())
    }
}

/// One component's end of a [`PatchPortal`]
pub struct PatchGate {
    queue: Arc<GateQueue>,
    links: Arc<Links>,
}

impl PatchGate {
    /// Hand `patch` to every other live gate
    pub fn push(&self, patch: PatchPtr) {
        self.links.broadcast(&self.queue, &patch);
    }

    /// Next patch delivered to this gate, if any; never blocks
    pub fn pop(&self) -> Option<PatchPtr> {
        self.queue.receiver.try_recv().ok()
    }

    /// Iterate over everything delivered so far
    pub fn drain(&self) -> impl Iterator<Item = PatchPtr> + '_ {
        self.queue.receiver.try_iter()
    }

    /// Number of patches waiting in this gate
    pub fn pending(&self) -> usize {
        self.queue.receiver.len()
    }
}

impl Drop for PatchGate {
    fn drop(&mut self) {
        log::debug!("Patch gate destroyed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_core::Property;

    fn patch(value: i32) -> PatchPtr {
        let mut tree = Property::None;
        tree.set("value", value).unwrap();
        Arc::new(tree)
    }

    #[test]
    fn test_push_skips_sender() {
        let portal = PatchPortal::default();
        let a = portal.make_gate();
        let b = portal.make_gate();

        a.push(patch(1));
        assert!(a.pop().is_none());
        assert_eq!(b.pop().unwrap().get("value").unwrap(), &Property::from(1));
        assert!(b.pop().is_none());
    }

    #[test]
    fn test_late_gate_is_linked() {
        let portal = PatchPortal::default();
        let a = portal.make_gate();
        let b = portal.make_gate();
        let c = portal.make_gate();

        c.push(patch(2));
        assert_eq!(a.pending(), 1);
        assert_eq!(b.pending(), 1);

        a.push(patch(3));
        assert_eq!(c.pending(), 1);
        assert_eq!(b.drain().count(), 2);
    }

    #[test]
    fn test_patches_are_shared_not_copied() {
        let portal = PatchPortal::default();
        let a = portal.make_gate();
        let b = portal.make_gate();

        let sent = patch(4);
        a.push(Arc::clone(&sent));
        let received = b.pop().unwrap();
        assert!(Arc::ptr_eq(&sent, &received));
    }

    #[test]
    fn test_dropped_gate_unlinks() {
        let portal = PatchPortal::default();
        let a = portal.make_gate();
        {
            let _b = portal.make_gate();
            assert_eq!(portal.live_gates(), 2);
        }
        assert_eq!(portal.live_gates(), 1);

        a.push(patch(5));
        let stats = portal.stats();
        assert_eq!(stats.gates_made, 2);
        assert_eq!(stats.patches_pushed, 1);
        assert_eq!(stats.patches_delivered, 0);
    }

    #[test]
    fn test_full_queue_drops() {
        let portal = PatchPortal::new(PatchPortalConfig {
            gate_capacity: 1,
            log_dropped: false,
        });
        let a = portal.make_gate();
        let b = portal.make_gate();

        a.push(patch(6));
        a.push(patch(7));
        assert_eq!(b.pending(), 1);
        assert_eq!(b.pop().unwrap().get("value").unwrap(), &Property::from(6));
        assert_eq!(portal.stats().patches_dropped, 1);
    }
}
