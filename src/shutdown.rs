use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use signal_hook::consts::{SIGINT, SIGTERM};

/// Lightweight handle for checking shutdown state
#[derive(Clone, Default)]
pub struct ShutdownHandle {
    shutdown: Arc<AtomicBool>,
}

impl ShutdownHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the flag when SIGTERM or SIGINT arrives.
    pub fn register_signals(&self) -> io::Result<()> {
        signal_hook::flag::register(SIGTERM, Arc::clone(&self.shutdown))?;
        signal_hook::flag::register(SIGINT, Arc::clone(&self.shutdown))?;
        Ok(())
    }

    pub fn is_shutting_down(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigterm_sets_the_shared_flag() {
        let handle = ShutdownHandle::new();
        let clone = handle.clone();
        handle.register_signals().unwrap();
        assert!(!clone.is_shutting_down());

        signal_hook::low_level::raise(SIGTERM).unwrap();
        assert!(clone.is_shutting_down());
    }
}
