// SPDX-License-Identifier: MPL-2.0
//! `comiced` is a comic book archive (CBZ) reader built with the Iced GUI
//! framework.
//!
//! Pages are extracted from the archive concurrently and presented in
//! natural-sort order regardless of arrival order, with rotation, flip,
//! fit-mode, and reading-direction controls persisted across sessions.

#![doc(html_root_url = "https://docs.rs/comiced/0.1.0")]

pub mod app;
pub mod archive;
pub mod config;
pub mod error;
pub mod media;
pub mod navigation;
pub mod registry;
pub mod transform;
