//! Interactive layer of a personal portfolio page.
//!
//! The portable modules hold the state and decisions behind each behavior and
//! build on any target; `wasm` wires them to the browser.

pub mod camera;
pub mod config;
pub mod contact;
pub mod error;
pub mod filter;
pub mod modal;
pub mod particles;
pub mod viewport;

// Only compile browser wiring when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use config::PageConfig;
pub use error::{PageError, Result};
