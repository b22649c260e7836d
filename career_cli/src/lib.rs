/// Career Advisor terminal client
///
/// Library half of the `career-advisor` binary: application state, screens,
/// components and the background advisor worker.
pub mod app;
pub mod components;
pub mod config;
pub mod keymap;
pub mod logging;
pub mod screens;
pub mod ui;
pub mod worker;
