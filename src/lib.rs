//! RWAI Arena content catalog.
//!
//! The bilingual (en/zh) catalog behind the arena listing and blueprint
//! detail pages: typed records validated at load time, a filter/sort view
//! over arena records, radar-chart geometry for the four-pillar metrics,
//! and a locale-aware markdown document loader.

pub mod catalog;
pub mod config;
pub mod content;
pub mod locale;
pub mod logging;
pub mod query;
pub mod radar;
