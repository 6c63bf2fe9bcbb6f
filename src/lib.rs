//! Market Scout: nearby-business lookup and market analysis over
//! OpenStreetMap data.
//!
//! The core is [`pipeline::Pipeline`]: a free-text place is geocoded, the
//! surrounding area is searched for features matching a category, and the
//! named results are returned as a [`pipeline::QueryOutcome`].

pub mod analysis;
pub mod config;
pub mod location;
pub mod logging;
pub mod pipeline;
pub mod report;
pub mod search;
pub mod server;

pub use config::Config;
pub use pipeline::{Pipeline, QueryOutcome};
