//! External VAST client/tracker library seam
//!
//! The client owns VAST fetching, XML parsing, and tracking-pixel HTTP.
//! The plugin only decides *when* to call it.

use crate::ad::model::{Creative, VastAd, VastResponse};

/// VAST error code: no suitable creative found for an ad
pub const ERROR_NO_SUITABLE_CREATIVE: u32 = 403;
/// VAST error code: media file could not be played
pub const ERROR_MEDIA_PLAYBACK: u32 = 405;

/// Macro substitutions for tracking/click-through URL templates
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UrlMacros {
    /// `ERRORCODE` macro
    pub error_code: Option<u32>,
    /// `CACHEBUSTER` macro — fresh random integer per resolution
    pub cachebuster: Option<u64>,
    /// `CONTENTPLAYHEAD` macro — tracker-formatted progress string
    pub content_playhead: Option<String>,
}

impl UrlMacros {
    pub fn error(code: u32) -> Self {
        Self {
            error_code: Some(code),
            ..Self::default()
        }
    }

    pub fn click_through(cachebuster: u64, content_playhead: String) -> Self {
        Self {
            cachebuster: Some(cachebuster),
            content_playhead: Some(content_playhead),
            ..Self::default()
        }
    }
}

/// VAST-compliant progress/event tracker bound to one ad/creative
///
/// Constructed by the client when a linear creative is selected, fed by
/// the plugin from player lifecycle events. The tracker fires its own
/// quartile pixels and emits `skip-countdown` ticks, which the embedding
/// forwards to [`crate::VastPlugin::skip_countdown`].
pub trait AdTracker {
    /// The creative began loading
    fn load(&mut self);
    /// Report current playback position in seconds
    fn set_progress(&mut self, time: f64);
    fn set_paused(&mut self, paused: bool);
    /// The creative played to completion
    fn complete(&mut self);

    /// Asset duration, once known
    fn asset_duration(&self) -> Option<f64>;
    fn set_asset_duration(&mut self, duration: f64);

    fn click_through_url_template(&self) -> Option<String>;
    fn click_tracking_url_template(&self) -> Option<String>;
    /// Fire the given tracking URLs with the tracker's own macro state
    fn track_urls(&mut self, urls: &[String]);

    /// Playback progress formatted for the `CONTENTPLAYHEAD` macro
    fn progress_formatted(&self) -> String;
}

/// External VAST client library
pub trait VastClient {
    /// Fetch and parse a VAST response. `None` when the request failed or
    /// produced nothing usable; the plugin treats that as an absent
    /// response and times out the pre-roll.
    fn get(&mut self, url: &str) -> Option<VastResponse>;

    /// Construct a tracker bound to the given ad and creative
    fn create_tracker(&self, ad: &VastAd, creative: &Creative) -> Box<dyn AdTracker>;

    /// Fire tracking URL templates with macro substitutions
    fn track(&self, url_templates: &[String], macros: &UrlMacros);

    /// Resolve URL templates into concrete URLs with macro substitutions
    fn resolve_url_templates(&self, url_templates: &[String], macros: &UrlMacros) -> Vec<String>;
}
