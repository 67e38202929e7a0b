//! Pageframe - a Header / Main / Footer application shell.
//!
//! The root component [`components::App`] renders a fragment of three sibling
//! regions in a fixed order. The regions themselves live in
//! [`components::layout`]; the region vocabulary, configuration and outline
//! checks come from `pageframe_core`.
//!
//! # Platform Support
//!
//! - **Web (WASM)**: `--features web`, the default platform for `dx serve`
//! - **Desktop**: `--features desktop`
//!
//! # Examples
//!
//! ```ignore
//! use pageframe::components::App;
//!
//! dioxus::launch(App);
//! ```

#![forbid(unsafe_code)]

pub mod components;
