//! CLI library components for dcat-convert.

pub mod logging;
pub mod pipeline;
