//! Layout regions: Header, Main, Footer
//!
//! Each component renders exactly one top-level element whose tag and class
//! come from [`pageframe_core::Region`].

mod footer;
mod header;
mod main_area;

pub use footer::Footer;
pub use header::Header;
pub use main_area::Main;
