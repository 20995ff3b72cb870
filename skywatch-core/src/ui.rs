//! Visibility state for the three presentation regions: loader, error
//! banner, result panel.
//!
//! Hiding is always deferred until a fade-out interval elapses and is purely
//! cosmetic; it never touches data state.

/// Ticks a region spends appearing before it settles as visible.
pub const APPEAR_TICKS: u32 = 1;

/// Ticks a fade-out takes before the display flag clears.
pub const FADE_OUT_TICKS: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Hidden,
    Appearing,
    Visible,
    Disappearing,
}

/// One independently toggled region: a display flag plus a deferred
/// transition.
#[derive(Debug, Clone, Copy)]
pub struct Region {
    phase: Phase,
    ticks_remaining: u32,
}

impl Region {
    pub const fn hidden() -> Self {
        Self {
            phase: Phase::Hidden,
            ticks_remaining: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Display flag: anything but fully hidden counts as displayed.
    pub fn is_displayed(&self) -> bool {
        self.phase != Phase::Hidden
    }

    pub fn show(&mut self) {
        if matches!(self.phase, Phase::Appearing | Phase::Visible) {
            return;
        }
        self.phase = Phase::Appearing;
        self.ticks_remaining = APPEAR_TICKS;
    }

    /// Start the fade-out. The flag clears only after the interval elapses.
    pub fn hide(&mut self) {
        if matches!(self.phase, Phase::Hidden | Phase::Disappearing) {
            return;
        }
        self.phase = Phase::Disappearing;
        self.ticks_remaining = FADE_OUT_TICKS;
    }

    pub fn tick(&mut self) {
        if self.ticks_remaining == 0 {
            return;
        }
        self.ticks_remaining -= 1;
        if self.ticks_remaining == 0 {
            self.phase = match self.phase {
                Phase::Appearing => Phase::Visible,
                Phase::Disappearing => Phase::Hidden,
                settled => settled,
            };
        }
    }
}

/// The three mutually aware regions plus the banner contents.
#[derive(Debug, Clone)]
pub struct UiState {
    loader: Region,
    error: Region,
    result: Region,
    error_message: Option<String>,
    error_sticky: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            loader: Region::hidden(),
            error: Region::hidden(),
            result: Region::hidden(),
            error_message: None,
            error_sticky: false,
        }
    }

    pub fn loader(&self) -> &Region {
        &self.loader
    }

    pub fn error_banner(&self) -> &Region {
        &self.error
    }

    pub fn result(&self) -> &Region {
        &self.result
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn error_is_sticky(&self) -> bool {
        self.error_sticky
    }

    /// Showing the loader always follows clearing the error banner.
    pub fn show_loader(&mut self) {
        self.clear_error();
        self.loader.show();
    }

    pub fn hide_loader(&mut self) {
        self.loader.hide();
    }

    /// A non-sticky error hides the result panel; a sticky one leaves a
    /// visible result alone.
    pub fn show_error(&mut self, message: String, sticky: bool) {
        self.error_message = Some(message);
        self.error_sticky = sticky;
        self.error.show();
        if !sticky && self.result.is_displayed() {
            self.result.hide();
        }
    }

    /// Start the banner fade-out. The last message stays until replaced.
    pub fn clear_error(&mut self) {
        self.error.hide();
    }

    pub fn show_result(&mut self) {
        self.result.show();
    }

    pub fn hide_result(&mut self) {
        self.result.hide();
    }

    pub fn tick(&mut self) {
        self.loader.tick();
        self.error.tick();
        self.result.tick();
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
