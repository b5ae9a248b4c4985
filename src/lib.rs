pub mod app;
pub mod chrome;
pub mod components;
pub mod logging;
pub mod store;
pub mod themes;
