use std::sync::Arc;

use tokio::sync::watch;

/// Shared "controls enabled" flag of a collage view.
///
/// The flag is `true` while no collage is being built. Presentation layers
/// can [`subscribe`](Controls::subscribe) to follow it; the workflow flips
/// it through [`try_disable`](Controls::try_disable).
#[derive(Debug, Clone)]
pub struct Controls {
    enabled: Arc<watch::Sender<bool>>,
}

impl Controls {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(true);
        Self {
            enabled: Arc::new(tx),
        }
    }

    pub fn is_enabled(&self) -> bool {
        *self.enabled.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.enabled.subscribe()
    }

    /// Disables the controls if they are enabled.
    ///
    /// Returns `None` when another run already holds them. The returned
    /// guard enables the controls again when dropped.
    pub fn try_disable(&self) -> Option<ControlsGuard> {
        let acquired = self.enabled.send_if_modified(|enabled| {
            let was_enabled = *enabled;
            *enabled = false;
            was_enabled
        });

        acquired.then(|| ControlsGuard {
            enabled: Arc::clone(&self.enabled),
        })
    }
}

impl Default for Controls {
    fn default() -> Self {
        Self::new()
    }
}

/// Keeps the controls disabled for as long as it lives.
#[derive(Debug)]
pub struct ControlsGuard {
    enabled: Arc<watch::Sender<bool>>,
}

impl Drop for ControlsGuard {
    fn drop(&mut self) {
        self.enabled.send_replace(true);
    }
}
