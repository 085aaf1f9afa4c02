//! Loading bar and fade-out overlay.
//!
//! The bar follows load progress. Once the first load completes, the bar
//! ends after [`BAR_END_DELAY`] and the overlay fades out over
//! [`FADE_DURATION`] starting [`FADE_DELAY`] after that.

/// Seconds from completion until the bar ends.
pub const BAR_END_DELAY: f32 = 0.5;
/// Seconds from the bar ending until the overlay starts fading.
pub const FADE_DELAY: f32 = 1.0;
pub const FADE_DURATION: f32 = 5.0;

/// What the UI should currently display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadingView {
    /// Horizontal scale of the progress bar in `[0, 1]`.
    pub bar_scale: f32,
    /// The bar has finished and should switch to its ended style.
    pub ended: bool,
    /// Opacity of the full-screen overlay.
    pub overlay_alpha: f32,
}

impl Default for LoadingView {
    fn default() -> Self {
        Self {
            bar_scale: 0.0,
            ended: false,
            overlay_alpha: 1.0,
        }
    }
}

/// Receives loading screen updates.
pub trait LoadingSink {
    fn update_loading(&mut self, view: LoadingView);
}

/// `power1.out`: quadratic ease-out.
#[inline]
#[must_use]
pub fn ease_out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

#[derive(Debug, Clone, Default)]
pub struct LoadingScreen {
    view: LoadingView,
    /// Seconds since completion, once it has happened.
    since_complete: Option<f32>,
}

impl LoadingScreen {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn view(&self) -> LoadingView {
        self.view
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.since_complete.is_some()
    }

    /// True once the overlay is fully transparent.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.since_complete
            .is_some_and(|t| t >= BAR_END_DELAY + FADE_DELAY + FADE_DURATION)
    }

    /// Updates the bar. Ignored after the first completion.
    pub fn set_progress(&mut self, ratio: f32) {
        if self.since_complete.is_none() {
            self.view.bar_scale = ratio.clamp(0.0, 1.0);
        }
    }

    /// Starts the end-of-load timeline. Only the first call counts.
    pub fn complete(&mut self) {
        if self.since_complete.is_none() {
            self.since_complete = Some(0.0);
        }
    }

    /// Advances the timeline and returns the new view.
    pub fn advance(&mut self, dt: f32) -> LoadingView {
        let Some(elapsed) = self.since_complete.as_mut() else {
            return self.view;
        };
        *elapsed += dt;
        let elapsed = *elapsed;

        if elapsed >= BAR_END_DELAY {
            self.view.ended = true;
            self.view.bar_scale = 0.0;

            let fade = (elapsed - BAR_END_DELAY - FADE_DELAY) / FADE_DURATION;
            self.view.overlay_alpha = 1.0 - ease_out_quad(fade);
        }
        self.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_hits_endpoints() {
        assert!(ease_out_quad(0.0).abs() < 1e-6);
        assert!((ease_out_quad(1.0) - 1.0).abs() < 1e-6);
        assert!((ease_out_quad(0.5) - 0.75).abs() < 1e-6);
        assert!((ease_out_quad(-3.0)).abs() < 1e-6);
    }
}
