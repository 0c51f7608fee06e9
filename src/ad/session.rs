//! Per-pre-roll session state
//!
//! One [`AdSession`] lives per pre-roll attempt; a new `contentupdate`
//! re-enters it wholesale. The JS-style listener bus is replaced by flags
//! registered and cleared atomically, plus a generation counter, so no
//! listener can outlive its session.

use crate::ad::client::AdTracker;
use crate::ad::model::{Creative, SourceDescriptor};
use crate::ad::skip::{SkipButton, SkipController};

/// CSS class of the click-blocker overlay
pub const BLOCKER_CLASS: &str = "vast-blocker";
/// Inert anchor used when no click-through template exists
pub const INERT_CLICK_THROUGH: &str = "#";

/// Full-surface overlay intercepting clicks on the video
///
/// Mounted ahead of the control bar at pre-roll start and left in place
/// at teardown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickBlocker {
    /// Click-through destination, or `"#"` when the ad has none
    pub href: String,
    pub css_class: String,
}

impl ClickBlocker {
    pub fn new(click_through: Option<String>) -> Self {
        Self {
            href: click_through.unwrap_or_else(|| INERT_CLICK_THROUGH.to_string()),
            css_class: BLOCKER_CLASS.to_string(),
        }
    }
}

/// Outcome of a click on the blocker overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Player was paused; playback resumed and navigation is suppressed
    ResumedPlayback,
    /// Click tracked and `adclick` emitted; navigation may proceed
    ClickThrough,
}

/// State for one pre-roll attempt
pub struct AdSession {
    pub(crate) sources: Vec<SourceDescriptor>,
    pub(crate) tracker: Option<Box<dyn AdTracker>>,
    pub(crate) companion: Option<Creative>,
    /// Error-tracking templates of the selected ad, for ERRORCODE 405
    pub(crate) error_url_templates: Vec<String>,
    /// Pre-ad native-controls visibility, restored at teardown
    pub(crate) show_controls: bool,
    pub(crate) blocker: Option<ClickBlocker>,
    /// Set once per session; gates `complete()` on `ended`
    pub(crate) error_occurred: bool,
    pub(crate) skip: SkipController,

    // Listener-set flags. Attached as a bundle when an ad is selected,
    // cleared as a bundle at teardown.
    pub(crate) ad_listeners_attached: bool,
    pub(crate) countdown_subscribed: bool,
    pub(crate) spinner_pending: bool,
    pub(crate) ended_teardown_armed: bool,

    /// Bumped on every fetch attempt; anything scoped to an earlier
    /// generation is inert
    pub(crate) generation: u64,
}

impl Default for AdSession {
    fn default() -> Self {
        Self {
            sources: Vec::new(),
            tracker: None,
            companion: None,
            error_url_templates: Vec::new(),
            show_controls: false,
            blocker: None,
            error_occurred: false,
            skip: SkipController::new(),
            ad_listeners_attached: false,
            countdown_subscribed: false,
            spinner_pending: false,
            ended_teardown_armed: false,
            generation: 0,
        }
    }
}

impl AdSession {
    pub fn sources(&self) -> &[SourceDescriptor] {
        &self.sources
    }

    /// Companion creative of the selected ad, if any
    pub fn companion(&self) -> Option<&Creative> {
        self.companion.as_ref()
    }

    pub fn blocker(&self) -> Option<&ClickBlocker> {
        self.blocker.as_ref()
    }

    pub fn skip_button(&self) -> Option<&SkipButton> {
        self.skip.button()
    }

    pub fn has_tracker(&self) -> bool {
        self.tracker.is_some()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Start a fresh fetch attempt: drop the prior session's ad state and
    /// listener set in one step, and bump the generation
    pub(crate) fn begin_attempt(&mut self) {
        self.generation += 1;
        self.sources.clear();
        self.tracker = None;
        self.companion = None;
        self.error_url_templates.clear();
        self.error_occurred = false;
        self.ad_listeners_attached = false;
        self.countdown_subscribed = false;
        self.spinner_pending = false;
        self.ended_teardown_armed = false;
    }

    /// Bind a tracker and attach the ad-lifecycle listener set
    pub(crate) fn attach_ad_listeners(
        &mut self,
        tracker: Box<dyn AdTracker>,
        error_url_templates: Vec<String>,
    ) {
        self.tracker = Some(tracker);
        self.error_url_templates = error_url_templates;
        self.error_occurred = false;
        self.ad_listeners_attached = true;
    }

    pub(crate) fn detach_ad_listeners(&mut self) {
        self.ad_listeners_attached = false;
    }
}

impl std::fmt::Debug for AdSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdSession")
            .field("sources", &self.sources.len())
            .field("has_tracker", &self.tracker.is_some())
            .field("has_companion", &self.companion.is_some())
            .field("error_occurred", &self.error_occurred)
            .field("ad_listeners_attached", &self.ad_listeners_attached)
            .field("countdown_subscribed", &self.countdown_subscribed)
            .field("generation", &self.generation)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocker_defaults_to_inert_anchor() {
        let blocker = ClickBlocker::new(None);
        assert_eq!(blocker.href, "#");
        assert_eq!(blocker.css_class, "vast-blocker");
    }

    #[test]
    fn blocker_carries_click_through() {
        let blocker = ClickBlocker::new(Some("http://advertiser.test/landing".into()));
        assert_eq!(blocker.href, "http://advertiser.test/landing");
    }

    #[test]
    fn begin_attempt_resets_state_and_bumps_generation() {
        let mut session = AdSession::default();
        session.error_occurred = true;
        session.ad_listeners_attached = true;
        session.countdown_subscribed = true;
        session.companion = Some(Creative::companion());

        session.begin_attempt();
        assert_eq!(session.generation(), 1);
        assert!(!session.error_occurred);
        assert!(!session.ad_listeners_attached);
        assert!(!session.countdown_subscribed);
        assert!(session.companion().is_none());
        assert!(!session.has_tracker());
    }
}
