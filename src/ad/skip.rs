//! Skip button countdown state
//!
//! Driven entirely by the tracker's `skip-countdown` ticks: a
//! non-skippable ad never emits them, so the button never appears.

/// CSS class of the skip button element
pub const SKIP_BUTTON_CLASS: &str = "vast-skip-button";
/// Marker class appended once the ad becomes skippable
pub const SKIP_ENABLED_CLASS: &str = "enabled";
/// Button label in the skippable state
pub const SKIP_READY_LABEL: &str = "Skip";

/// The skip button element, as the embedding should render it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkipButton {
    pub label: String,
    pub css_class: String,
}

impl SkipButton {
    fn new() -> Self {
        Self {
            label: String::new(),
            css_class: SKIP_BUTTON_CLASS.to_string(),
        }
    }

    /// Whether the enabled marker class is present
    pub fn is_enabled(&self) -> bool {
        self.css_class
            .split_whitespace()
            .any(|class| class == SKIP_ENABLED_CLASS)
    }
}

/// Owns the single optional skip button and its countdown state
///
/// At most one button exists per ad session; it is created lazily on the
/// first countdown tick and reused until teardown.
#[derive(Debug, Default)]
pub struct SkipController {
    button: Option<SkipButton>,
}

impl SkipController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn button(&self) -> Option<&SkipButton> {
        self.button.as_ref()
    }

    /// Create the button if none exists; no-op while one is referenced
    pub fn create_button(&mut self) {
        if self.button.is_none() {
            self.button = Some(SkipButton::new());
        }
    }

    /// Handle a `skip-countdown` tick from the tracker
    ///
    /// Rounds `time_left` to the nearest integer. Positive values show the
    /// countdown label; zero or less enables the button and switches the
    /// label to "Skip" (once).
    pub fn countdown(&mut self, time_left: f64) {
        let remaining = time_left.round() as i64;
        self.create_button();
        let Some(button) = self.button.as_mut() else {
            return;
        };
        if remaining > 0 {
            button.label = format!("Skip in {remaining}...");
        } else if button.label != SKIP_READY_LABEL {
            button.css_class.push(' ');
            button.css_class.push_str(SKIP_ENABLED_CLASS);
            button.label = SKIP_READY_LABEL.to_string();
        }
    }

    /// Whether the skippable state has been reached
    pub fn is_skippable(&self) -> bool {
        self.button
            .as_ref()
            .is_some_and(|button| button.label == SKIP_READY_LABEL)
    }

    /// Remove the button; no-op if none exists
    pub fn tear_down(&mut self) {
        self.button = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counting_state_shows_rounded_time_left() {
        let mut skip = SkipController::new();
        skip.countdown(5.34);

        let button = skip.button().expect("button created on first tick");
        assert_eq!(button.label, "Skip in 5...");
        assert!(!button.is_enabled());
        assert!(!skip.is_skippable());
    }

    #[test]
    fn zero_enables_and_relabels() {
        let mut skip = SkipController::new();
        skip.countdown(0.0);

        let button = skip.button().expect("button created");
        assert_eq!(button.label, "Skip");
        assert!(button.is_enabled());
        assert!(skip.is_skippable());
    }

    #[test]
    fn enabled_class_is_appended_once() {
        let mut skip = SkipController::new();
        skip.countdown(0.2);
        skip.countdown(0.0);
        skip.countdown(-1.0);

        let button = skip.button().expect("button created");
        assert_eq!(button.css_class, "vast-skip-button enabled");
    }

    #[test]
    fn create_button_is_idempotent() {
        let mut skip = SkipController::new();
        skip.create_button();
        skip.countdown(3.0);
        skip.create_button();

        // a second creation call must not reset the label
        assert_eq!(skip.button().expect("button").label, "Skip in 3...");
    }

    #[test]
    fn tear_down_clears_the_reference() {
        let mut skip = SkipController::new();
        skip.countdown(0.0);
        skip.tear_down();
        assert!(skip.button().is_none());
        assert!(!skip.is_skippable());

        // no-op without a button
        skip.tear_down();
    }

    #[test]
    fn rounding_crosses_to_skippable_below_half_second() {
        let mut skip = SkipController::new();
        skip.countdown(0.4);
        assert!(skip.is_skippable());

        let mut skip = SkipController::new();
        skip.countdown(0.6);
        assert!(!skip.is_skippable());
    }
}
