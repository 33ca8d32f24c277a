//! egui views for the GeoField desktop client.
//!
//! One module per screen, all driven from [`app::GeoFieldApp`]'s
//! caller-owned state: views render, report an action, and the app applies
//! it. No view holds global state of its own.

pub mod actions;
pub mod admin;
pub mod analysis;
pub mod app;
pub mod auth;
pub mod dashboard;
pub mod form;
pub mod table;

pub use app::GeoFieldApp;
