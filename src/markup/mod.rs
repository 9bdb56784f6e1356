//! Markup-aware pipeline
//!
//! Everything here preserves tag structure: truncation closes what it
//! leaves open, excerpt/highlight never rewrite tag syntax, and the
//! autolinkers obfuscate the addresses they wrap. Length is always
//! visible length (tag syntax free, entity references counted as one).

pub mod autolink;
pub mod entity;
pub mod excerpt;
pub mod highlight;
pub mod obfuscate;
pub mod tag_stack;
pub mod truncate;

pub use autolink::{auto_link, auto_link_emails, auto_link_urls};
pub use excerpt::excerpt;
pub use highlight::highlight;
pub use obfuscate::obfuscate_email;
pub use tag_stack::{OpenTagStack, TagKind, classify};
pub use truncate::limit;
