//! Shared readiness flag

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::traits::ReadinessCheck;

/// Readiness flag shared between whoever sets up the ledger client and the
/// gateways reading it. Clones observe the same state.
#[derive(Debug, Clone, Default)]
pub struct ReadyFlag {
    ready: Arc<AtomicBool>,
}

impl ReadyFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ready() -> Self {
        let flag = Self::new();
        flag.mark_ready();
        flag
    }

    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
        tracing::debug!("ledger client marked ready");
    }

    pub fn mark_not_ready(&self) {
        self.ready.store(false, Ordering::Release);
        tracing::debug!("ledger client marked not ready");
    }
}

impl ReadinessCheck for ReadyFlag {
    fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_starts_not_ready() {
        assert!(!ReadyFlag::new().is_ready());
        assert!(ReadyFlag::ready().is_ready());
    }

    #[test]
    fn test_clones_share_state() {
        let flag = ReadyFlag::new();
        let observer = flag.clone();

        flag.mark_ready();
        assert!(observer.is_ready());

        observer.mark_not_ready();
        assert!(!flag.is_ready());
    }
}
