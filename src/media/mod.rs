//! Media module: records, engagement filtering, key resolution and variant selection.

pub mod filter;
pub mod item;
pub mod resolver;
pub mod variant;

pub use filter::{EngagementFilter, DEFAULT_LIKES_THRESHOLD};
pub use item::{MediaKind, MediaRecord, Variant};
pub use resolver::resolve;
pub use variant::select_best_url;
