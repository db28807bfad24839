//! Core entry point for the hearing_brief crate.

pub mod assets;
pub mod brief;
pub mod canvas;
pub mod charts;
pub mod chrome;
pub mod content;
pub mod dataset;
pub mod error;
pub mod icons;
pub mod metrics;
pub mod model;
pub mod page1;
pub mod page2;
pub mod stats;

pub use brief::{brief_filename, render_brief, Brief};
pub use error::BriefError;
