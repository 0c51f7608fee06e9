pub mod client;
pub mod model;
pub mod session;
pub mod skip;
pub mod source;

pub use client::{AdTracker, UrlMacros, VastClient};
pub use model::{Creative, CreativeType, MediaFileDescriptor, SourceDescriptor, VastAd, VastResponse};
pub use session::{AdSession, ClickBlocker, ClickOutcome};
pub use skip::SkipController;
pub use source::select_sources;
