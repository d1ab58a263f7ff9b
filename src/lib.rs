pub mod app;
pub mod catalog;
pub mod error;
pub mod host;
pub mod install;
pub mod logging;
pub mod model;
pub mod platform;
pub mod remote;
pub mod render;
pub mod store;
