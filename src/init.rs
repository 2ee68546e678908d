use std::time::Duration;

use serde::Serialize;

/// How long the view stays uninitialized after mounting.
pub const SETTLE_DELAY: Duration = Duration::from_millis(100);

/// Row cap for the month view's all-day area while the layout settles.
pub const SETTLING_ALL_DAY_MAX_ROWS: u32 = 5;

/// Startup phase of the calendar view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", rename_all = "lowercase")]
pub enum InitPhase {
    Uninitialized {
        #[serde(skip)]
        elapsed: Duration,
    },
    Ready,
}

impl Default for InitPhase {
    fn default() -> Self {
        InitPhase::Uninitialized { elapsed: Duration::ZERO }
    }
}

impl InitPhase {
    /// Advance the phase by `delta`; becomes Ready once the settle delay has passed.
    pub fn tick(self, delta: Duration) -> Self {
        match self {
            InitPhase::Uninitialized { elapsed } => {
                let elapsed = elapsed.saturating_add(delta);
                if elapsed >= SETTLE_DELAY {
                    InitPhase::Ready
                } else {
                    InitPhase::Uninitialized { elapsed }
                }
            }
            InitPhase::Ready => InitPhase::Ready,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, InitPhase::Ready)
    }

    pub fn overrides(&self) -> RenderOverrides {
        match self {
            InitPhase::Uninitialized { .. } => RenderOverrides {
                popup_enabled: Some(false),
                all_day_max_rows: Some(SETTLING_ALL_DAY_MAX_ROWS),
            },
            InitPhase::Ready => RenderOverrides::default(),
        }
    }
}

/// Renderer options pinned while the view settles. `None` leaves the
/// renderer's own default in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderOverrides {
    pub popup_enabled: Option<bool>,
    pub all_day_max_rows: Option<u32>,
}
