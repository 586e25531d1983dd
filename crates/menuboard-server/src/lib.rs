//! # Menuboard Server
//!
//! Startup utilities shared by the server binary.

pub mod startup;

pub use startup::{print_banner, print_startup_info};
