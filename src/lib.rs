//! vast-preroll — VAST pre-roll ad plugin core
//!
//! Orchestrates pre-roll ad playback for a host video player: fetches a
//! VAST response through an external client, selects playable media files
//! in the host's tech preference order, drives the ad tracker through the
//! playback lifecycle, and renders a skip button from tracker countdown
//! events.
//!
//! The host player framework and the VAST client/tracker library are
//! external collaborators reached through the [`player::PlayerHost`] and
//! [`ad::client::VastClient`] traits. The pre-roll state machine itself
//! lives here.

pub mod ad;
pub mod config;
pub mod error;
pub mod metrics;
pub mod player;
pub mod plugin;
pub mod tech;

pub use config::PluginOptions;
pub use error::{Result, VastPluginError};
pub use plugin::VastPlugin;
