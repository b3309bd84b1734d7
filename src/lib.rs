pub mod classify;
pub mod config;
pub mod feed;
pub mod legend;
pub mod logging;
pub mod marker;
pub mod pipeline;
pub mod surface;
