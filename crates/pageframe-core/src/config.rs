//! Production configuration constants.
//!
//! These values are shared by the front-end components and the launcher so the
//! window chrome, the header title and the stylesheet class names stay in sync.
//!
//! # Usage
//!
//! ```
//! use pageframe_core::config::{APP_TITLE, CLASS_PREFIX};
//!
//! assert!(!APP_TITLE.is_empty());
//! assert_eq!(CLASS_PREFIX, "pf");
//! ```

// =============================================================================
// Branding
// =============================================================================

/// Application title, shown in the header region and the desktop window title.
pub const APP_TITLE: &str = "Pageframe";

/// Prefix of every CSS class emitted by the shell (`pf-header`, `pf-main`, ...).
///
/// Must match the selectors in `crates/pageframe/assets/pageframe.css`.
pub const CLASS_PREFIX: &str = "pf";

// =============================================================================
// Desktop Window
// =============================================================================

/// Initial desktop window width in logical pixels.
pub const WINDOW_WIDTH: f64 = 1200.0;

/// Initial desktop window height in logical pixels.
pub const WINDOW_HEIGHT: f64 = 900.0;

/// Smallest width the desktop window may be resized to.
pub const MIN_WINDOW_WIDTH: f64 = 800.0;

/// Smallest height the desktop window may be resized to.
pub const MIN_WINDOW_HEIGHT: f64 = 600.0;
