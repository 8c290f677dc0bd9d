//! Infrastructure layer for the Zellij sandbox environment.
//!
//! Utilities that depend on where the plugin runs rather than on what it
//! does; currently just filesystem placement under the sandbox's `/host`
//! mount.

pub mod paths;

pub use paths::data_dir;
