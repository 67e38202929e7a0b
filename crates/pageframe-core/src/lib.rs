//! Pageframe core - framework-independent model of the application shell.
//!
//! The front-end crate renders three sibling regions in a fixed order. This
//! crate names those regions and knows how to check rendered markup against
//! that composition contract, without depending on any UI framework.
//!
//! # Modules
//!
//! - [`layout`]: the [`Region`](layout::Region) vocabulary and rendered-outline inspection
//! - [`config`]: compile-time configuration constants
//! - [`error`]: error types for outline inspection
//!
//! # Examples
//!
//! ```
//! use pageframe_core::layout::{verify_markup, Region};
//!
//! let outline = verify_markup("<header>H</header><main>M</main><footer>F</footer>").unwrap();
//! assert_eq!(outline.regions(), Region::ALL.to_vec());
//! assert_eq!(outline.markers(), "HMF");
//! ```

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod layout;

pub use error::LayoutError;
pub use layout::{verify_markup, Outline, Region};
