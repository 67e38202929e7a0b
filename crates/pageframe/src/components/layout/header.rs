use dioxus::prelude::*;
use pageframe_core::config::APP_TITLE;
use pageframe_core::Region;

/// Global header with the application title
#[component]
pub fn Header() -> Element {
    rsx! {
        header { class: Region::Header.class(),
            div { class: "pf-header-brand",
                span { class: "pf-header-title", "{APP_TITLE}" }
            }
        }
    }
}
