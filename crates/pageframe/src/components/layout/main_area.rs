use dioxus::prelude::*;
use pageframe_core::Region;

/// Main content region.
///
/// Named `main_area` on disk since `main.rs` is the binary entry point.
#[component]
pub fn Main() -> Element {
    rsx! {
        main { class: Region::Main.class(),
            section { class: "pf-main-content",
                p { class: "pf-main-placeholder", "Content goes here." }
            }
        }
    }
}
