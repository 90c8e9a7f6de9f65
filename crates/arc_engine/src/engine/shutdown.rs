//! Shutdown sequence
//!
//! Releases in reverse order of acquisition: window (with its context)
//! first, then the windowing subsystem.

use super::bootstrap::Session;
use crate::platform::WindowSystem;

/// Which release steps ran
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShutdownReport {
    /// A window existed and was destroyed
    pub window_released: bool,
    /// The subsystem was terminated
    pub subsystem_released: bool,
}

impl<S: WindowSystem> Session<S> {
    /// Destroy the window, if any, then terminate the subsystem
    pub fn shutdown(mut self) -> ShutdownReport {
        self.release()
    }

    fn release(&mut self) -> ShutdownReport {
        let mut report = ShutdownReport::default();

        if let Some(window) = self.window.take() {
            if let Some(system) = self.system.as_mut() {
                system.destroy_window(window.into_inner());
                report.window_released = true;
            }
        }

        if let Some(system) = self.system.take() {
            system.terminate();
            report.subsystem_released = true;
        }

        log::info!(
            "Shutdown complete (window released: {}, subsystem released: {})",
            report.window_released,
            report.subsystem_released
        );
        report
    }
}

impl<S: WindowSystem> Drop for Session<S> {
    fn drop(&mut self) {
        if self.system.is_some() {
            log::debug!("Session dropped before shutdown, releasing resources");
            self.release();
        }
    }
}
