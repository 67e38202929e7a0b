//! UI components for the Pageframe shell.
//!
//! - [`App`]: root component, composes the three layout regions
//! - [`layout`]: [`Header`], [`Main`], [`Footer`]
//!
//! `App` takes no props, reads no context and holds no state. It is re-run
//! wholesale on every render pass and always yields the same three children.

pub mod layout;

pub use layout::{Footer, Header, Main};

use dioxus::prelude::*;

/// Root component: header, main and footer as a fragment, in that order.
#[component]
pub fn App() -> Element {
    rsx! {
        Header {}
        Main {}
        Footer {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pageframe_core::config::APP_TITLE;
    use pageframe_core::{verify_markup, LayoutError, Outline, Region};

    fn render(component: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(component);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_app_renders_header_main_footer() {
        let html = render(App);
        let outline = verify_markup(&html).expect("app should satisfy the composition");

        assert_eq!(outline.regions(), Region::ALL.to_vec());

        // Markers come from each region's root tag only, so this is the H/M/F
        // stub scenario run on the real composer: collaborator content is opaque
        assert!(outline.entries().iter().all(|entry| !entry.text.is_empty()));
        assert_eq!(outline.markers(), "HMF");
    }

    #[test]
    fn test_app_has_no_wrapping_element() {
        let html = render(App);

        assert!(html.starts_with("<header"), "unexpected prefix: {html}");
        assert!(html.ends_with("</footer>"), "unexpected suffix: {html}");
        for region in Region::ALL {
            let open = format!("<{}", region.tag());
            assert_eq!(html.matches(&open).count(), 1, "{region} rendered more than once");
        }
    }

    #[test]
    fn test_app_render_is_idempotent() {
        let first = render(App);
        let second = render(App);
        assert_eq!(first, second);

        let first = Outline::parse(&first).unwrap();
        let second = Outline::parse(&second).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_regions_carry_their_classes() {
        let html = render(App);
        for region in Region::ALL {
            let open = format!("<{} class=\"{}\"", region.tag(), region.class());
            assert!(html.contains(&open), "missing {open} in {html}");
        }
    }

    #[test]
    fn test_header_shows_app_title() {
        let outline = Outline::parse(&render(App)).unwrap();
        assert_eq!(outline.text(Region::Header), Some(APP_TITLE));
    }

    #[test]
    fn test_each_region_renders_alone() {
        let cases: [(fn() -> Element, Region); 3] = [
            (Header, Region::Header),
            (Main, Region::Main),
            (Footer, Region::Footer),
        ];

        for (component, region) in cases {
            let outline = Outline::parse(&render(component)).unwrap();
            assert_eq!(outline.regions(), vec![region]);
        }
    }

    #[test]
    fn test_single_region_is_not_a_full_shell() {
        let outline = Outline::parse(&render(Header)).unwrap();
        assert_eq!(
            outline.verify(),
            Err(LayoutError::MissingRegion(Region::Main))
        );
    }
}
