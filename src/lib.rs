// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is a small thumbnail gallery built with the Iced GUI framework.
//!
//! It scans a folder for images, renders them as a grid, and opens a modal
//! zoom dialog when a thumbnail is clicked. It also demonstrates
//! internationalization with Fluent and user preference management.

pub mod app;
pub mod config;
pub mod error;
pub mod gallery_scanner;
pub mod i18n;
pub mod media;
pub mod ui;
pub mod zoom;
