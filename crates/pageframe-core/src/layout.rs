//! Region vocabulary and rendered-outline inspection.
//!
//! The shell is a fragment of exactly three sibling regions, always in the
//! order header, main, footer. [`Region`] names them and carries the element
//! tag, CSS class and stub marker each one renders with. [`Outline`] reads the
//! top level of rendered HTML back into regions so the composition can be
//! checked against [`Region::ALL`].

use std::fmt;

use scraper::node::Node;
use scraper::{ElementRef, Html};
use tracing::debug;

use crate::error::LayoutError;

/// One of the three sibling areas of the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Header,
    Main,
    Footer,
}

impl Region {
    /// Fixed composition order of the shell.
    pub const ALL: [Region; 3] = [Region::Header, Region::Main, Region::Footer];

    /// Semantic HTML element the region renders as.
    pub const fn tag(self) -> &'static str {
        match self {
            Region::Header => "header",
            Region::Main => "main",
            Region::Footer => "footer",
        }
    }

    /// CSS class of the region's root element.
    ///
    /// Always `CLASS_PREFIX` followed by `-` and the tag.
    pub const fn class(self) -> &'static str {
        match self {
            Region::Header => "pf-header",
            Region::Main => "pf-main",
            Region::Footer => "pf-footer",
        }
    }

    /// One-letter marker used when a region is stubbed out.
    pub const fn marker(self) -> char {
        match self {
            Region::Header => 'H',
            Region::Main => 'M',
            Region::Footer => 'F',
        }
    }

    /// Looks up a region by element tag (ASCII case-insensitive).
    pub fn from_tag(tag: &str) -> Option<Region> {
        Region::ALL
            .into_iter()
            .find(|region| region.tag().eq_ignore_ascii_case(tag))
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A top-level region found in rendered markup, with its whitespace-normalized text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineEntry {
    pub region: Region,
    pub text: String,
}

/// Ordered list of the top-level regions of a rendered fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outline {
    entries: Vec<OutlineEntry>,
}

impl Outline {
    /// Parses an HTML fragment and records its top-level regions in order.
    ///
    /// Whitespace-only text and comments between regions are ignored. Any
    /// other top-level element (including a wrapping `<div>`) or non-blank
    /// text is an error.
    pub fn parse(markup: &str) -> Result<Self, LayoutError> {
        let fragment = Html::parse_fragment(markup);
        let mut entries = Vec::new();

        for child in fragment.root_element().children() {
            match child.value() {
                Node::Element(element) => {
                    let tag = element.name();
                    let region = Region::from_tag(tag)
                        .ok_or_else(|| LayoutError::UnexpectedElement(tag.to_string()))?;
                    let text = ElementRef::wrap(child)
                        .map(|el| {
                            el.text()
                                .flat_map(str::split_whitespace)
                                .collect::<Vec<_>>()
                                .join(" ")
                        })
                        .unwrap_or_default();
                    entries.push(OutlineEntry { region, text });
                }
                Node::Text(text) => {
                    let trimmed = text.trim();
                    if !trimmed.is_empty() {
                        return Err(LayoutError::StrayText(trimmed.to_string()));
                    }
                }
                _ => {}
            }
        }

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[OutlineEntry] {
        &self.entries
    }

    pub fn regions(&self) -> Vec<Region> {
        self.entries.iter().map(|entry| entry.region).collect()
    }

    /// Stub markers of the regions in order, e.g. `"HMF"`.
    pub fn markers(&self) -> String {
        self.entries
            .iter()
            .map(|entry| entry.region.marker())
            .collect()
    }

    /// Text content of the first entry for `region`.
    pub fn text(&self, region: Region) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.region == region)
            .map(|entry| entry.text.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Checks that the outline is exactly [`Region::ALL`], in order.
    pub fn verify(&self) -> Result<(), LayoutError> {
        let result = self.check_composition();
        if let Err(e) = &result {
            debug!("Outline {:?} violates composition: {}", self.markers(), e);
        }
        result
    }

    fn check_composition(&self) -> Result<(), LayoutError> {
        for (position, entry) in self.entries.iter().enumerate() {
            if self.entries[..position]
                .iter()
                .any(|seen| seen.region == entry.region)
            {
                return Err(LayoutError::DuplicateRegion(entry.region));
            }

            // Every region is distinct so far, so at most three positions get here
            let expected = Region::ALL[position];
            if entry.region != expected {
                return Err(LayoutError::OutOfOrder {
                    position,
                    expected,
                    found: entry.region,
                });
            }
        }

        match Region::ALL.get(self.entries.len()) {
            Some(missing) => Err(LayoutError::MissingRegion(*missing)),
            None => Ok(()),
        }
    }
}

/// Parses `markup` and verifies the three-region composition in one step.
pub fn verify_markup(markup: &str) -> Result<Outline, LayoutError> {
    let outline = Outline::parse(markup)?;
    outline.verify()?;
    Ok(outline)
}
