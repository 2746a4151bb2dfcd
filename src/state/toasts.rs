//! Transient notification (toast) state machine.
//!
//! DESIGN
//! ======
//! Each toast walks a fixed lifecycle: create, enter delay, visible hold,
//! leave fade, removal. The phases are explicit state here rather than a
//! bare timer chain, so a toast can be dismissed early and the remaining
//! timer steps of its original chain become no-ops instead of racing the
//! removal. There is no cap, no de-duplication, and no queue: N rapid
//! toasts animate independently.

#[cfg(test)]
#[path = "toasts_test.rs"]
mod toasts_test;

/// Delay before a freshly created toast starts its entrance transition.
pub const ENTER_DELAY_MS: u64 = 100;
/// How long a toast stays fully visible.
pub const VISIBLE_MS: u64 = 3000;
/// Duration of the leave transition before the toast is removed.
pub const LEAVE_MS: u64 = 300;

/// Toast severity, mapped to a CSS modifier class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
    Warning,
}

impl Severity {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Info => "toast--info",
            Self::Success => "toast--success",
            Self::Error => "toast--error",
            Self::Warning => "toast--warning",
        }
    }
}

/// Lifecycle phase of a live toast. Removal is not a phase: a removed toast
/// no longer exists in the state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastPhase {
    Entering,
    Visible,
    Leaving,
}

impl ToastPhase {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Entering => "toast--entering",
            Self::Visible => "toast--visible",
            Self::Leaving => "toast--leaving",
        }
    }
}

/// One live toast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    pub phase: ToastPhase,
}

/// All live toasts, in creation order.
///
/// In the full Leptos implementation this lives in an `RwSignal` provided
/// via context; the timer tasks that drive phases live in the component.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// Create a toast in the `Entering` phase and return its id.
    pub fn push(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            message: message.into(),
            severity,
            phase: ToastPhase::Entering,
        });
        id
    }

    /// Advance toast `id` out of phase `from` into the next phase. Returns
    /// `false` when the toast is gone or no longer in `from` (it was
    /// dismissed early), which tells the caller's timer chain to stop.
    pub fn advance(&mut self, id: u64, from: ToastPhase) -> bool {
        let next = match from {
            ToastPhase::Entering => ToastPhase::Visible,
            ToastPhase::Visible => ToastPhase::Leaving,
            ToastPhase::Leaving => return false,
        };
        let Some(toast) = self.toasts.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        if toast.phase != from {
            return false;
        }
        toast.phase = next;
        true
    }

    /// Start an early dismissal: jump straight to `Leaving` from any live
    /// phase. Returns `false` if the toast is gone or already leaving.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let Some(toast) = self.toasts.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        if toast.phase == ToastPhase::Leaving {
            return false;
        }
        toast.phase = ToastPhase::Leaving;
        true
    }

    /// Detach toast `id`. Idempotent: removing a toast that is already gone
    /// is a no-op, so a stale timer chain racing a dismissal is harmless.
    pub fn remove(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    #[must_use]
    pub fn contains(&self, id: u64) -> bool {
        self.toasts.iter().any(|t| t.id == id)
    }
}
