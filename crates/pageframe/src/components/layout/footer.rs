use dioxus::prelude::*;
use pageframe_core::Region;

/// Footer region
#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: Region::Footer.class(),
            span { class: "pf-footer-text",
                "Built with Dioxus • Header, main and footer in one frame."
            }
        }
    }
}
