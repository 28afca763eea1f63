pub mod aggregate;
pub mod config;
pub mod domain;
pub mod error;
pub mod keywords;
pub mod logging;
pub mod normalize;
pub mod report;
pub mod schema;
pub mod source;
pub mod web;

pub mod observability;
