//! Default frame: clear to a fixed color

use super::GraphicsApi;
use crate::core::config::ClearColor;

/// Clears the whole color buffer and draws nothing else
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClearPass {
    color: ClearColor,
}

impl ClearPass {
    /// Create a pass clearing to `color`
    pub const fn new(color: ClearColor) -> Self {
        Self { color }
    }

    /// Issue this frame's commands
    pub fn record<G: GraphicsApi>(&self, gfx: &mut G) {
        gfx.clear_color(self.color);
        gfx.clear();
    }
}

impl Default for ClearPass {
    fn default() -> Self {
        Self::new(ClearColor::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::testing::{calls, new_log, Call, RecordingGraphics};

    #[test]
    fn test_record_sets_color_then_clears() {
        let log = new_log();
        let mut gfx = RecordingGraphics::new(&log);
        let pass = ClearPass::new(ClearColor::new(0.3, 0.2, 0.1, 1.0));

        pass.record(&mut gfx);

        assert_eq!(
            calls(&log),
            vec![Call::ClearColor(ClearColor::new(0.3, 0.2, 0.1, 1.0)), Call::Clear]
        );
    }
}
