//! Shared test utilities for the image-ledger workspace.
//!
//! This crate provides standardised fixtures for tests that need a scratch
//! directory of images. It is a dev-dependency only and never published.
//!
//! # Modules
//!
//! - [`images`]: [`TestImageDir`] builder for image directory scenarios

pub mod images;

pub use images::TestImageDir;
