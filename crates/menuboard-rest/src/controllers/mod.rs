//! HTTP controllers.

pub mod health_controller;
pub mod menu_controller;
