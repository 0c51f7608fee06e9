use crate::ad::model::SourceDescriptor;
use crate::ad::session::ClickBlocker;

/// Host player lifecycle events consumed by the plugin
///
/// The host delivers these through [`crate::VastPlugin::on_player_event`];
/// there is no callback bus. Which events the plugin reacts to depends on
/// the current session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerEvent {
    /// The content source changed; the ads extension emits this when a new
    /// video is loaded.
    ContentUpdate,
    /// The host is ready for pre-roll playback.
    ReadyForPreroll,
    CanPlay,
    TimeUpdate,
    Play,
    Pause,
    Error,
    Ended,
}

/// Events the plugin emits back to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdEvent {
    /// No playable ad was found; content should start.
    AdTimeout,
    /// An ad was selected and sources are ready.
    AdsReady,
    AdSkipped,
    AdClick,
}

/// Disposition for a UI click handled by the plugin
///
/// `StopPropagation` tells the embedding to stop the platform event from
/// propagating (or suppress its default action where that is unavailable).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventFlow {
    Continue,
    StopPropagation,
}

/// Host video player seam
///
/// The surface the plugin needs from the player framework: state
/// accessors, playback control, linear ad mode from the ads extension,
/// and the two DOM-effect hooks it relies on (blocker mount, loading
/// spinner). Implementations wrap whatever player the embedding uses.
pub trait PlayerHost {
    /// Whether the ads extension (linear ad mode provider) is present
    fn has_ads_extension(&self) -> bool;

    fn start_linear_ad_mode(&mut self);
    fn end_linear_ad_mode(&mut self);

    /// Duration of the current source in seconds, `None` until known
    fn duration(&self) -> Option<f64>;
    /// Current playback position in seconds
    fn current_time(&self) -> f64;
    fn paused(&self) -> bool;
    fn play(&mut self);

    /// Current native-controls visibility
    fn controls(&self) -> bool;
    fn set_controls(&mut self, on: bool);
    fn set_autoplay(&mut self, on: bool);

    /// Replace the player's source list
    fn set_sources(&mut self, sources: &[SourceDescriptor]);

    /// Technology preference order declared by the host, e.g.
    /// `["html5", "flash"]`
    fn tech_order(&self) -> Vec<String>;

    /// Mount the click blocker over the video surface, ahead of the
    /// control bar in stacking order
    fn insert_blocker(&mut self, blocker: &ClickBlocker);

    /// Hide the loading indicator; idempotent
    fn hide_loading_spinner(&mut self);

    /// Emit a plugin event on the host's event bus
    fn trigger(&mut self, event: AdEvent);
}
