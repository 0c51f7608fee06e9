//! Plugin bootstrap and the pre-roll state machine
//!
//! [`VastPlugin::register`] validates preconditions and wires up the
//! session; the host then feeds lifecycle events into
//! [`VastPlugin::on_player_event`] and forwards tracker `skip-countdown`
//! ticks into [`VastPlugin::skip_countdown`].

use crate::ad::client::{
    AdTracker, ERROR_MEDIA_PLAYBACK, ERROR_NO_SUITABLE_CREATIVE, UrlMacros, VastClient,
};
use crate::ad::model::CreativeType;
use crate::ad::session::{AdSession, ClickBlocker, ClickOutcome};
use crate::ad::source::select_sources;
use crate::config::PluginOptions;
use crate::error::{Result, VastPluginError};
use crate::metrics;
use crate::player::{AdEvent, EventFlow, PlayerEvent, PlayerHost};
use crate::tech::TechRegistry;
use rand::Rng;
use tracing::{debug, info, warn};
use url::Url;

/// Upper bound (exclusive) for the CACHEBUSTER macro value
const CACHEBUSTER_RANGE: u64 = 10_000_000_000;

/// The activated plugin: one per player instance
///
/// Owns the host handle, the external VAST client, the tech registry and
/// the single live [`AdSession`]. All session and skip-controller
/// operations are public methods so embeddings and tests can invoke them
/// directly.
pub struct VastPlugin<H: PlayerHost, C: VastClient> {
    host: H,
    client: C,
    techs: TechRegistry,
    options: PluginOptions,
    session: AdSession,
}

impl<H: PlayerHost, C: VastClient> VastPlugin<H, C> {
    /// Activate the plugin on a host player
    ///
    /// Preconditions: the host must expose an ads extension (logged and
    /// refused otherwise) and the options must carry an ad tag URL
    /// (`adtimeout` is emitted and activation refused otherwise). The
    /// embedding is expected to route `contentupdate` and
    /// `readyforpreroll` to [`Self::on_player_event`].
    pub fn register(
        mut host: H,
        client: C,
        techs: TechRegistry,
        options: PluginOptions,
    ) -> Result<Self> {
        if !host.has_ads_extension() {
            warn!("VAST pre-roll requires the host ads extension; not registering");
            return Err(VastPluginError::MissingAdsExtension);
        }
        let Some(url) = options.url.as_deref() else {
            // No ad tag configured: let content start right away
            host.trigger(AdEvent::AdTimeout);
            metrics::record_ad_timeout();
            return Err(VastPluginError::MissingAdUrl);
        };
        if Url::parse(url).is_err() {
            debug!(url, "configured ad tag does not parse as an absolute URL");
        }
        info!(url, skip = options.skip, "VAST pre-roll plugin registered");

        Ok(Self {
            host,
            client,
            techs,
            options,
            session: AdSession::default(),
        })
    }

    /// Dispatch a host player lifecycle event
    pub fn on_player_event(&mut self, event: PlayerEvent) {
        match event {
            PlayerEvent::ContentUpdate => {
                if let Some(url) = self.options.url.clone() {
                    self.get_content(&url);
                }
            }
            PlayerEvent::ReadyForPreroll => self.preroll(),
            PlayerEvent::CanPlay => {
                if self.session.ad_listeners_attached
                    && let Some(tracker) = self.session.tracker.as_mut()
                {
                    tracker.load();
                }
            }
            PlayerEvent::TimeUpdate => {
                if self.session.ad_listeners_attached {
                    let duration = self.host.duration();
                    let position = self.host.current_time();
                    if let Some(tracker) = self.session.tracker.as_mut() {
                        if tracker.asset_duration().is_none()
                            && let Some(duration) = duration
                        {
                            tracker.set_asset_duration(duration);
                        }
                        tracker.set_progress(position);
                    }
                }
                if self.session.spinner_pending {
                    self.session.spinner_pending = false;
                    self.hide_loading_spinner();
                }
            }
            PlayerEvent::Play => {
                if self.session.ad_listeners_attached
                    && let Some(tracker) = self.session.tracker.as_mut()
                {
                    tracker.set_paused(false);
                }
            }
            PlayerEvent::Pause => {
                if self.session.ad_listeners_attached
                    && let Some(tracker) = self.session.tracker.as_mut()
                {
                    tracker.set_paused(true);
                }
            }
            PlayerEvent::Error => {
                if self.session.ad_listeners_attached {
                    // Inform the ad server we couldn't play the media file
                    self.client.track(
                        &self.session.error_url_templates,
                        &UrlMacros::error(ERROR_MEDIA_PLAYBACK),
                    );
                    self.session.error_occurred = true;
                    warn!("playback error during ad; forcing ended");
                    self.on_player_event(PlayerEvent::Ended);
                }
            }
            PlayerEvent::Ended => {
                // One-shot from ad selection: detach the lifecycle set and
                // report completion unless an error cut the ad short.
                if self.session.ad_listeners_attached {
                    self.session.detach_ad_listeners();
                    if !self.session.error_occurred
                        && let Some(tracker) = self.session.tracker.as_mut()
                    {
                        tracker.complete();
                        metrics::record_ad_completed();
                    }
                }
                // One-shot from preroll: tear the session down.
                if self.session.ended_teardown_armed {
                    self.session.ended_teardown_armed = false;
                    self.tear_down();
                }
            }
        }
    }

    /// Fetch ad data and select a linear creative
    ///
    /// Scans ads in response order. The first ad whose linear creative
    /// yields a non-empty source list gets a tracker and `adsready`; an ad
    /// with no suitable creative is reported with ERRORCODE 403 and
    /// skipped. A linear creative whose media files are all unplayable
    /// aborts the whole scan with `adtimeout`.
    pub fn get_content(&mut self, url: &str) {
        self.session.begin_attempt();
        info!(url, generation = self.session.generation, "requesting VAST response");

        let Some(response) = self.client.get(url) else {
            metrics::record_vast_request("error");
            self.ad_timeout();
            return;
        };

        let tech_order = self.host.tech_order();
        for ad in &response.ads {
            self.session.companion = None;
            let mut found_linear = false;
            let mut found_companion = false;

            for creative in &ad.creatives {
                match creative.creative_type {
                    CreativeType::Linear if !found_linear => {
                        if creative.media_files.is_empty() {
                            continue;
                        }
                        let sources =
                            select_sources(&creative.media_files, &tech_order, &self.techs);
                        if sources.is_empty() {
                            warn!(ad = %ad.id, "no media file playable by any supported tech");
                            metrics::record_vast_request("empty");
                            self.ad_timeout();
                            return;
                        }
                        let tracker = self.client.create_tracker(ad, creative);
                        self.session.sources = sources;
                        self.session
                            .attach_ad_listeners(tracker, ad.error_url_templates.clone());
                        found_linear = true;
                    }
                    CreativeType::Companion if !found_companion => {
                        self.session.companion = Some(creative.clone());
                        found_companion = true;
                    }
                    _ => {}
                }
            }

            if self.session.has_tracker() {
                info!(ad = %ad.id, sources = self.session.sources.len(), "linear creative selected");
                metrics::record_vast_request("success");
                self.host.trigger(AdEvent::AdsReady);
                break;
            }
            // Inform the ad server we found no suitable creative for this ad
            warn!(ad = %ad.id, "no linear creative; reporting error {ERROR_NO_SUITABLE_CREATIVE}");
            self.client.track(
                &ad.error_url_templates,
                &UrlMacros::error(ERROR_NO_SUITABLE_CREATIVE),
            );
        }

        if !self.session.has_tracker() {
            metrics::record_vast_request("empty");
            self.ad_timeout();
        }
    }

    /// Start pre-roll playback of the selected ad
    ///
    /// Enters linear ad mode, hides native controls, forces autoplay,
    /// swaps the player source to the selected ad sources, mounts the
    /// click blocker and arms the spinner/teardown one-shots. Without a
    /// selected ad this is a logged no-op.
    pub fn preroll(&mut self) {
        if !self.session.has_tracker() {
            warn!("readyforpreroll before an ad was selected; ignoring");
            return;
        }

        self.host.start_linear_ad_mode();
        self.session.show_controls = self.host.controls();
        if self.session.show_controls {
            self.host.set_controls(false);
        }
        self.host.set_autoplay(true);
        let sources = self.session.sources.clone();
        self.host.set_sources(&sources);

        let blocker = ClickBlocker::new(self.resolve_click_through());
        self.host.insert_blocker(&blocker);
        self.session.blocker = Some(blocker);

        // Subscribe the skip controller to tracker countdown ticks and arm
        // the two one-shots.
        self.session.countdown_subscribed = true;
        self.session.spinner_pending = true;
        self.session.ended_teardown_armed = true;
    }

    /// Resolve the tracker's click-through template, if any
    fn resolve_click_through(&mut self) -> Option<String> {
        let tracker: &dyn AdTracker = self.session.tracker.as_deref()?;
        let template = tracker.click_through_url_template()?;
        let macros = UrlMacros::click_through(
            rand::thread_rng().gen_range(0..CACHEBUSTER_RANGE),
            tracker.progress_formatted(),
        );
        self.client
            .resolve_url_templates(&[template], &macros)
            .into_iter()
            .next()
    }

    /// End the ad session and hand control back to content playback
    ///
    /// Unsubscribes the countdown, destroys the skip button, drops the
    /// whole listener set, exits linear ad mode and restores controls to
    /// their pre-ad visibility.
    pub fn tear_down(&mut self) {
        self.session.countdown_subscribed = false;
        self.session.skip.tear_down();
        self.session.ended_teardown_armed = false;
        self.session.spinner_pending = false;
        self.session.detach_ad_listeners();
        self.host.end_linear_ad_mode();
        if self.session.show_controls {
            self.host.set_controls(true);
        }
    }

    /// Forwarded `skip-countdown` tick from the tracker
    ///
    /// Ignored while no session is subscribed (before `preroll`, after
    /// teardown, or against a stale generation).
    pub fn skip_countdown(&mut self, time_left: f64) {
        if !self.session.countdown_subscribed {
            return;
        }
        self.session.skip.countdown(time_left);
    }

    /// Click on the skip button
    ///
    /// No-op until the skippable state is reached. A valid skip emits
    /// `adskipped`, tears the session down and stops the click from
    /// propagating.
    pub fn skip_ad(&mut self) -> EventFlow {
        if !self.session.skip.is_skippable() {
            return EventFlow::Continue;
        }
        metrics::record_ad_skipped();
        self.host.trigger(AdEvent::AdSkipped);
        self.tear_down();
        EventFlow::StopPropagation
    }

    /// Click on the blocker overlay
    ///
    /// Paused player: resume and suppress navigation. Otherwise fire any
    /// click trackers, emit `adclick` and let navigation proceed.
    pub fn blocker_click(&mut self) -> ClickOutcome {
        if self.host.paused() {
            self.host.play();
            return ClickOutcome::ResumedPlayback;
        }
        if let Some(tracker) = self.session.tracker.as_mut()
            && let Some(template) = tracker.click_tracking_url_template()
        {
            tracker.track_urls(&[template]);
        }
        metrics::record_ad_click();
        self.host.trigger(AdEvent::AdClick);
        ClickOutcome::ClickThrough
    }

    /// Hide the host's loading indicator; idempotent
    pub fn hide_loading_spinner(&mut self) {
        self.host.hide_loading_spinner();
    }

    fn ad_timeout(&mut self) {
        metrics::record_ad_timeout();
        self.host.trigger(AdEvent::AdTimeout);
    }

    /// Current ad session, mostly for assertions and page-side rendering
    /// (companion creative, skip button, blocker)
    pub fn session(&self) -> &AdSession {
        &self.session
    }

    pub fn options(&self) -> &PluginOptions {
        &self.options
    }
}

impl<H: PlayerHost, C: VastClient> std::fmt::Debug for VastPlugin<H, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VastPlugin")
            .field("options", &self.options)
            .field("techs", &self.techs)
            .field("session", &self.session)
            .finish()
    }
}
