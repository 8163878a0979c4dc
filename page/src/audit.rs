//! Structural audit of a rendered page.
//!
//! Reads HTML back (ours or a file someone edited by hand) and reports what
//! the page actually shows: how many cards of each kind, the literal price,
//! date and call-to-action strings, and any `href="#x"` without a matching
//! `id`. [`Expectations`] holds what a correct page shows; every count and
//! literal that differs is reported as a problem.
//!
//! ```rust
//! use tcg_page::{audit::{audit_document, Expectations}, render_default_page, AssetMode};
//!
//! let html = render_default_page(&AssetMode::Placeholder);
//! let audit = audit_document(&html);
//! assert!(audit.problems(&Expectations::default()).is_empty());
//! ```

use std::collections::BTreeSet;

use regex::Regex;
use serde::Serialize;

use crate::types::PageContent;

/// What was found in a document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DocumentAudit {
    /// Header navigation links
    pub nav_links: usize,
    /// Hero button labels, in document order
    pub hero_actions: Vec<String>,
    /// Feature cards
    pub features: usize,
    /// Pack price strings, in document order
    pub pack_prices: Vec<String>,
    /// Release date strings, in document order
    pub release_dates: Vec<String>,
    /// Release call-to-action labels, in document order
    pub release_actions: Vec<String>,
    /// Company information columns
    pub info_columns: usize,
    /// Footer links
    pub footer_links: usize,
    /// `<img>` tags
    pub images: usize,
    /// Placeholder boxes
    pub placeholders: usize,
    /// Unresolved image slots
    pub empty_slots: usize,
    /// In-page hrefs whose target id doesn't exist, sorted
    pub dangling_anchors: Vec<String>,
}

/// What a correct page shows.
///
/// Literal strings are compared position by position, so they pin both the
/// text and its order (cheapest pack first, earliest release first).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expectations {
    /// Header navigation links
    pub nav_links: usize,
    /// Hero button labels, in order
    pub hero_actions: Vec<String>,
    /// Feature cards
    pub features: usize,
    /// Pack prices, in order
    pub pack_prices: Vec<String>,
    /// Release dates, in order
    pub release_dates: Vec<String>,
    /// Release call-to-action labels, in order
    pub release_actions: Vec<String>,
    /// Company information columns
    pub info_columns: usize,
    /// Footer links
    pub footer_links: usize,
}

impl Expectations {
    /// What rendering `content` should produce.
    pub fn from_content(content: &PageContent) -> Self {
        Self {
            nav_links: content.nav_links.len(),
            hero_actions: content.hero.actions.iter().map(|a| a.label.clone()).collect(),
            features: content.features.len(),
            pack_prices: content.packs.iter().map(|p| p.price.clone()).collect(),
            release_dates: content
                .releases
                .iter()
                .map(|r| r.release_date.clone())
                .collect(),
            release_actions: content
                .releases
                .iter()
                .map(|r| r.call_to_action.clone())
                .collect(),
            info_columns: content.info_columns.len(),
            footer_links: content.footer_links.len(),
        }
    }
}

impl Default for Expectations {
    fn default() -> Self {
        Self::from_content(&PageContent::default())
    }
}

impl DocumentAudit {
    /// Human-readable violations, empty when the document matches.
    pub fn problems(&self, expected: &Expectations) -> Vec<String> {
        let counts = [
            ("nav links", self.nav_links, expected.nav_links),
            ("hero actions", self.hero_actions.len(), expected.hero_actions.len()),
            ("feature cards", self.features, expected.features),
            ("packs", self.pack_prices.len(), expected.pack_prices.len()),
            (
                "upcoming releases",
                self.release_dates.len(),
                expected.release_dates.len(),
            ),
            ("info columns", self.info_columns, expected.info_columns),
            ("footer links", self.footer_links, expected.footer_links),
        ];

        let mut problems: Vec<String> = counts
            .into_iter()
            .filter(|(_, found, want)| found != want)
            .map(|(what, found, want)| format!("expected {} {}, found {}", want, what, found))
            .collect();

        let literals = [
            ("hero action", &self.hero_actions, &expected.hero_actions),
            ("pack price", &self.pack_prices, &expected.pack_prices),
            ("release date", &self.release_dates, &expected.release_dates),
            ("release action", &self.release_actions, &expected.release_actions),
        ];
        for (what, found, want) in literals {
            problems.extend(literal_mismatches(what, found, want));
        }

        problems.extend(
            self.dangling_anchors
                .iter()
                .map(|anchor| format!("dangling anchor #{}", anchor)),
        );
        problems
    }
}

/// Positions present in both lists whose text differs.
fn literal_mismatches(what: &str, found: &[String], want: &[String]) -> Vec<String> {
    want.iter()
        .zip(found)
        .enumerate()
        .filter(|(_, (want, found))| want != found)
        .map(|(i, (want, found))| {
            format!("{} {}: expected {:?}, found {:?}", what, i + 1, want, found)
        })
        .collect()
}

/// Scan `html` and report its structure.
pub fn audit_document(html: &str) -> DocumentAudit {
    let mut audit = DocumentAudit::default();

    let (Some(style_re), Some(tag_re), Some(attr_re)) = (
        Regex::new(r#"<style[^>]*>[\s\S]*?</style>"#).ok(),
        Regex::new(r#"<([a-zA-Z][a-zA-Z0-9]*)\b([^>]*)>([^<]*)"#).ok(),
        Regex::new(r#"([a-zA-Z][a-zA-Z0-9-]*)="([^"]*)""#).ok(),
    ) else {
        return audit;
    };

    // CSS selectors would otherwise read like markup
    let markup = style_re.replace_all(html, "");

    let mut ids = BTreeSet::new();
    let mut hrefs = BTreeSet::new();

    for tag in tag_re.captures_iter(&markup) {
        let name = tag[1].to_ascii_lowercase();
        let text = unescape(tag[3].trim());

        let mut classes = String::new();
        for attr in attr_re.captures_iter(&tag[2]) {
            match &attr[1] {
                "class" => classes = attr[2].to_string(),
                "id" => {
                    ids.insert(attr[2].to_string());
                }
                "href" => {
                    if let Some(target) = attr[2].strip_prefix('#').filter(|t| !t.is_empty()) {
                        hrefs.insert(target.to_string());
                    }
                }
                _ => {}
            }
        }

        if name == "img" {
            audit.images += 1;
        }

        for class in classes.split_whitespace() {
            match class {
                "nav-link" => audit.nav_links += 1,
                "hero-cta" => audit.hero_actions.push(text.clone()),
                "feature-card" => audit.features += 1,
                "pack-price" => audit.pack_prices.push(text.clone()),
                "release-date" => audit.release_dates.push(text.clone()),
                "release-cta" => audit.release_actions.push(text.clone()),
                "info-column" => audit.info_columns += 1,
                "footer-link" => audit.footer_links += 1,
                "asset-placeholder" => audit.placeholders += 1,
                "asset-empty" => audit.empty_slots += 1,
                _ => {}
            }
        }
    }

    audit.dangling_anchors = hrefs.difference(&ids).cloned().collect();
    audit
}

fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#x27;", "'")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const HAND_WRITTEN: &str = r##"<!DOCTYPE html>
<html><head><style>.nav-link { color: red; } a[href="#ghost"] {}</style></head>
<body>
  <nav><a href="#shop" class="nav-link">Shop</a><a href="#nowhere" class="nav-link">Nowhere</a></nav>
  <section id="shop">
    <div class="pack-card"><p class="pack-price">$9.99</p></div>
    <div class="pack-card"><p class="pack-price">Fish &amp; Chips</p></div>
  </section>
  <img src="logo.png" alt="logo" />
</body></html>"##;

    #[test]
    fn counts_hand_written_markup() {
        let audit = audit_document(HAND_WRITTEN);
        assert_eq!(audit.nav_links, 2);
        assert_eq!(audit.pack_prices, vec!["$9.99", "Fish & Chips"]);
        assert_eq!(audit.images, 1);
    }

    #[test]
    fn reports_dangling_anchors_but_ignores_css() {
        let audit = audit_document(HAND_WRITTEN);
        assert_eq!(audit.dangling_anchors, vec!["nowhere".to_string()]);
    }

    #[test]
    fn problems_name_each_violation() {
        let audit = audit_document(HAND_WRITTEN);
        let problems = audit.problems(&Expectations::default());

        assert!(problems.contains(&"expected 3 nav links, found 2".to_string()));
        assert!(problems.contains(&"expected 3 packs, found 2".to_string()));
        assert!(problems.contains(
            &r#"pack price 2: expected "$24.99", found "Fish & Chips""#.to_string()
        ));
        assert!(problems.contains(&"dangling anchor #nowhere".to_string()));
    }

    #[test]
    fn tampered_literals_are_problems() {
        let html = crate::render_default_page(&crate::AssetMode::Placeholder)
            .replace("$9.99", "$99.99")
            .replace("Pre-order", "Buy Now")
            .replace("March 15, 2026", "June 1, 2027")
            .replace("Watch Trailer", "Watch Movie");

        let problems = audit_document(&html).problems(&Expectations::default());
        assert_eq!(
            problems,
            vec![
                r#"hero action 2: expected "Watch Trailer", found "Watch Movie""#.to_string(),
                r#"pack price 1: expected "$9.99", found "$99.99""#.to_string(),
                r#"release date 1: expected "March 15, 2026", found "June 1, 2027""#.to_string(),
                r#"release action 1: expected "Pre-order", found "Buy Now""#.to_string(),
            ]
        );
    }

    #[test]
    fn swapped_prices_break_the_order() {
        let html = crate::render_default_page(&crate::AssetMode::Placeholder)
            .replace("$9.99", "@@")
            .replace("$49.99", "$9.99")
            .replace("@@", "$49.99");

        let problems = audit_document(&html).problems(&Expectations::default());
        assert_eq!(problems.len(), 2, "{:?}", problems);
        assert!(problems[0].starts_with("pack price 1:"));
        assert!(problems[1].starts_with("pack price 3:"));
    }

    #[test]
    fn expectations_follow_content() {
        let mut content = PageContent::default();
        content.packs[0].price = "$4.99".into();

        let expected = Expectations::from_content(&content);
        assert_eq!(expected.pack_prices, vec!["$4.99", "$24.99", "$49.99"]);
        assert_eq!(expected.info_columns, 4);
        assert_eq!(Expectations::default().hero_actions, vec!["Start Playing", "Watch Trailer"]);
    }

    #[test]
    fn empty_document_fails_every_count() {
        let problems = audit_document("").problems(&Expectations::default());
        assert_eq!(problems.len(), 7);
    }
}
