// SPDX-License-Identifier: MPL-2.0
//! `iced_toaster` shows short-lived text notifications ("toasts") one at a
//! time, in request order, over an Iced window.
//!
//! The scheduling core in [`toast`] is independent of any GUI: it drives a
//! [`toast::ContainerHost`] through attach, fade in, fade out and detach. The
//! [`ui`] module provides the Iced host and widget, and [`app`] a small demo.

#![doc(html_root_url = "https://docs.rs/iced_toaster/0.1.0")]

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod paths;
#[doc(hidden)]
pub mod test_utils;
pub mod toast;
pub mod ui;
