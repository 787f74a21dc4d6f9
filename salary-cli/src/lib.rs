pub mod app;
pub mod batch;
pub mod cli;
pub mod logging;
pub mod parse;
pub mod render;
pub mod session;
