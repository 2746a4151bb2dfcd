//! Mobile navigation drawer state machine.
//!
//! DESIGN
//! ======
//! The drawer's open/closed state is an explicit enum with event-driven
//! transition methods rather than a CSS class read back from the DOM, so
//! every trigger (toggle tap, overlay tap, viewport resize, swipe) is
//! testable without a rendered document. The component projects this state
//! onto the sidebar/overlay classes, the toggle glyph, and the body
//! scroll lock.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Viewport width above which the drawer is always forced closed.
pub const DESKTOP_BREAKPOINT_PX: f64 = 768.0;

/// Minimum leftward touch displacement that closes an open drawer. The
/// boundary is strict: a displacement of exactly this many pixels is
/// ignored.
pub const SWIPE_CLOSE_PX: f64 = 100.0;

/// Duration of the haptic pulse fired on a toggle tap, when available.
pub const HAPTIC_PULSE_MS: u32 = 50;

/// The drawer has no intermediate states.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DrawerState {
    #[default]
    Closed,
    Open,
}

/// Drawer state plus the in-flight horizontal touch gesture.
///
/// In the full Leptos implementation this lives in an `RwSignal` provided
/// via context. One instance exists per page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavState {
    pub drawer: DrawerState,
    touch_start_x: Option<f64>,
}

impl NavState {
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.drawer == DrawerState::Open
    }

    /// Flip the drawer state. Returns the state after the flip.
    pub fn toggle(&mut self) -> DrawerState {
        self.drawer = match self.drawer {
            DrawerState::Closed => DrawerState::Open,
            DrawerState::Open => DrawerState::Closed,
        };
        self.drawer
    }

    /// Explicit close, from the overlay tap or a completed swipe.
    pub fn close(&mut self) {
        self.drawer = DrawerState::Closed;
    }

    /// Viewport resize: any width above the breakpoint forces the drawer
    /// closed, regardless of prior state. Idempotent.
    pub fn handle_resize(&mut self, width_px: f64) {
        if width_px > DESKTOP_BREAKPOINT_PX {
            self.close();
        }
    }

    /// Record the starting X coordinate of a touch gesture.
    pub fn touch_start(&mut self, x: f64) {
        self.touch_start_x = Some(x);
    }

    /// Complete a touch gesture at `x`. A leftward displacement strictly
    /// greater than [`SWIPE_CLOSE_PX`] while the drawer is open closes it;
    /// every other gesture is ignored. Returns whether the drawer closed.
    pub fn touch_end(&mut self, x: f64) -> bool {
        let Some(start_x) = self.touch_start_x.take() else {
            return false;
        };
        if !self.is_open() {
            return false;
        }
        if x - start_x < -SWIPE_CLOSE_PX {
            self.close();
            return true;
        }
        false
    }

    /// Glyph shown on the toggle button for the current state.
    #[must_use]
    pub fn toggle_glyph(&self) -> &'static str {
        match self.drawer {
            DrawerState::Closed => "\u{2630}",
            DrawerState::Open => "\u{2715}",
        }
    }
}
