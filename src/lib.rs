// src/lib.rs
//! Field extraction for German commercial-register excerpts.
//!
//! [`extractors::parse`] turns excerpt text into an [`ExcerptRecord`];
//! [`naming::build_folder_name`] derives the artifact folder identifier.
pub mod extractors;
pub mod names;
pub mod naming;
pub mod search;
pub mod source;
pub mod storage;
pub mod utils;

pub use extractors::{ExcerptParser, ExcerptRecord};
pub use names::{DecomposedName, NameDecomposer, RegisterNameDecomposer};
pub use naming::{build_folder_name, crop, sanitize};
pub use utils::{AppError, ExtractorConfig};
