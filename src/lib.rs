//! AppletKit composes independently built applets into one tabbed host.
//!
//! - [`applet`]: the contract every applet implements.
//! - [`state`]: the keyed registry applets share state through.
//! - [`applets`]: the bundled example applets and their interface module.
//! - [`navigation`]: the example tab set and its selection key.
//! - [`host`] and [`kit`]: destination registry and the composition root.
//! - [`view`]: declarative trees returned by applets; [`ui`] paints them.

pub mod app;
pub mod applet;
pub mod applets;
pub mod config;
pub mod host;
pub mod kit;
pub mod logging;
pub mod navigation;
pub mod state;
pub mod ui;
pub mod view;
