// src/extractors/mod.rs
pub mod excerpt;
pub mod fields;
pub mod roster;
pub mod section;

// Re-export key extraction types for convenience
pub use excerpt::{parse, ExcerptParser, ExcerptRecord};
pub use fields::{extract_business_address, extract_company_name};
pub use roster::{parse_roster, RosterLine};
pub use section::{locate, locate_prokura, SectionLocator};
