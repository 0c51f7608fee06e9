use metrics::counter;

// ── Metric names ────────────────────────────────────────────────────────

/// VAST fetch attempts by result (success, empty, error)
pub const VAST_REQUESTS: &str = "vast_preroll_requests_total";
/// Pre-rolls abandoned with an `adtimeout`
pub const AD_TIMEOUTS: &str = "vast_preroll_timeouts_total";
/// Ads skipped through the skip button
pub const AD_SKIPS: &str = "vast_preroll_skips_total";
/// Click-throughs on the ad surface
pub const AD_CLICKS: &str = "vast_preroll_clicks_total";
/// Ads that played to completion
pub const AD_COMPLETIONS: &str = "vast_preroll_completions_total";

// ── Recording helpers ───────────────────────────────────────────────────
//
// Counters go through the `metrics` facade; the embedding installs its own
// recorder/exporter.

/// Record a VAST fetch result
pub fn record_vast_request(result: &str) {
    counter!(VAST_REQUESTS, "result" => result.to_string()).increment(1);
}

/// Record an `adtimeout` emission
pub fn record_ad_timeout() {
    counter!(AD_TIMEOUTS).increment(1);
}

/// Record a skipped ad
pub fn record_ad_skipped() {
    counter!(AD_SKIPS).increment(1);
}

/// Record an ad click-through
pub fn record_ad_click() {
    counter!(AD_CLICKS).increment(1);
}

/// Record an ad that played to completion
pub fn record_ad_completed() {
    counter!(AD_COMPLETIONS).increment(1);
}
