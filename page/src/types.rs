//! Display records for the landing page.
//!
//! Every record is a literal of the design. They're designed to be:
//!
//! - **Serializable** - Dump the content as JSON via serde
//! - **Clone-friendly** - Components take owned copies, no borrowing issues
//! - **Canonical by default** - `PageContent::default()` is the page as designed
//!
//! # Example
//!
//! ```rust
//! use tcg_page::types::PageContent;
//!
//! let content = PageContent::default();
//! assert_eq!(content.packs.len(), 3);
//! assert_eq!(content.packs[0].price, "$9.99");
//! ```

use serde::{Deserialize, Serialize};

use crate::assets::{AssetName, ImageRef};

/// Header navigation link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    /// Link text
    pub label: String,
    /// In-document target, including the leading `#`
    pub anchor: String,
}

/// Footer link. Same shape as [`NavLink`], kept separate so the two rows can diverge.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterLink {
    /// Link text
    pub label: String,
    /// In-document target, including the leading `#`
    pub anchor: String,
}

/// Call-to-action buttons in the hero banner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroAction {
    /// Button text
    pub label: String,
    /// Primary actions are filled, secondary ones are outlined
    pub primary: bool,
}

/// Hero banner copy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    /// Headline, one entry per rendered line
    pub title_lines: Vec<String>,
    /// Subtitle lines under the headline
    pub tagline_lines: Vec<String>,
    /// Buttons, in display order
    pub actions: Vec<HeroAction>,
    /// Banner illustration
    pub image: ImageRef,
}

/// One card of the "Game Features" grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureCard {
    /// Glyph shown in the round badge
    pub icon: String,
    /// Card heading
    pub title: String,
    /// Body lines
    pub description: Vec<String>,
}

/// A purchasable card pack.
///
/// `price` is display text only. Nothing parses or converts it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductPack {
    /// Pack art
    pub image: ImageRef,
    /// Pack name
    pub title: String,
    /// Price as shown, e.g. `$9.99`
    pub price: String,
}

/// An announced expansion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingRelease {
    /// Expansion thumbnail
    pub image: ImageRef,
    /// Expansion name
    pub title: String,
    /// Date as shown, e.g. `March 15, 2026`
    pub release_date: String,
    /// Body lines
    pub description: Vec<String>,
    /// Text of the card's link
    pub call_to_action: String,
}

/// Email signup shown under the Newsletter column.
///
/// The subscribe button is inert. Submission belongs to a mailing service
/// that is not part of this page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsletterSignup {
    /// Placeholder of the email input
    pub placeholder: String,
    /// Text of the subscribe button
    pub button_label: String,
}

/// A column of the company information grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoColumn {
    /// Column heading
    pub heading: String,
    /// Body lines, empty for the newsletter column
    pub body_lines: Vec<String>,
    /// Email signup under the body, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signup: Option<NewsletterSignup>,
}

/// Everything the page displays, in render order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContent {
    /// `<title>` of the document
    pub title: String,
    /// Header logo
    pub logo: ImageRef,
    /// Header navigation, left to right
    pub nav_links: Vec<NavLink>,
    /// Hero banner
    pub hero: Hero,
    /// Heading of the features grid
    pub features_heading: String,
    /// Feature cards
    pub features: Vec<FeatureCard>,
    /// Heading of the pack showcase
    pub packs_heading: String,
    /// Packs, cheapest first
    pub packs: Vec<ProductPack>,
    /// Heading of the releases grid
    pub releases_heading: String,
    /// Releases, earliest first
    pub releases: Vec<UpcomingRelease>,
    /// Company information grid
    pub info_columns: Vec<InfoColumn>,
    /// Footer copyright line
    pub copyright: String,
    /// Footer legal links
    pub footer_links: Vec<FooterLink>,
}

fn lines(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|line| (*line).to_string()).collect()
}

fn nav(label: &str, anchor: &str) -> NavLink {
    NavLink {
        label: label.into(),
        anchor: anchor.into(),
    }
}

fn footer(label: &str, anchor: &str) -> FooterLink {
    FooterLink {
        label: label.into(),
        anchor: anchor.into(),
    }
}

fn feature(icon: &str, title: &str, description: &[&str]) -> FeatureCard {
    FeatureCard {
        icon: icon.into(),
        title: title.into(),
        description: lines(description),
    }
}

fn pack(image: AssetName, title: &str, price: &str) -> ProductPack {
    ProductPack {
        image: ImageRef::new(image),
        title: title.into(),
        price: price.into(),
    }
}

fn release(
    image: AssetName,
    title: &str,
    release_date: &str,
    description: &[&str],
    call_to_action: &str,
) -> UpcomingRelease {
    UpcomingRelease {
        image: ImageRef::new(image),
        title: title.into(),
        release_date: release_date.into(),
        description: lines(description),
        call_to_action: call_to_action.into(),
    }
}

fn column(heading: &str, body_lines: &[&str]) -> InfoColumn {
    InfoColumn {
        heading: heading.into(),
        body_lines: lines(body_lines),
        signup: None,
    }
}

impl Default for PageContent {
    fn default() -> Self {
        Self {
            title: "TCG Studios - Epic Card Battles".into(),
            logo: ImageRef::new(AssetName::Logo),
            nav_links: vec![
                nav("Shop", "#shop"),
                nav("About", "#about"),
                nav("Login", "#login"),
            ],
            hero: Hero {
                title_lines: lines(&["Epic Card Battles", "Await"]),
                tagline_lines: lines(&[
                    "Build your deck, master the game,",
                    "and dominate the battlefield.",
                ]),
                actions: vec![
                    HeroAction {
                        label: "Start Playing".into(),
                        primary: true,
                    },
                    HeroAction {
                        label: "Watch Trailer".into(),
                        primary: false,
                    },
                ],
                image: ImageRef::new(AssetName::Hero),
            },
            features_heading: "Game Features".into(),
            features: vec![
                feature(
                    "⚔",
                    "Strategic Combat",
                    &["Master complex mechanics", "and outsmart opponents"],
                ),
                feature(
                    "🎨",
                    "Stunning Art",
                    &["Collect beautifully designed", "cards and rare editions"],
                ),
                feature("🌐", "Global Ranked", &["Compete with players", "worldwide"]),
            ],
            packs_heading: "Available Now".into(),
            packs: vec![
                pack(AssetName::PackStarter, "Starter Pack", "$9.99"),
                pack(AssetName::PackLegends, "Legends Pack", "$24.99"),
                pack(AssetName::PackPremium, "Premium Pack", "$49.99"),
            ],
            releases_heading: "Upcoming Releases".into(),
            releases: vec![
                release(
                    AssetName::ExpansionShadowRealm,
                    "Shadow Realm",
                    "March 15, 2026",
                    &["New dark-themed expansion", "with 150+ cards"],
                    "Pre-order",
                ),
                release(
                    AssetName::ExpansionCrystalWarriors,
                    "Crystal Warriors",
                    "April 22, 2026",
                    &["Legendary heroes return", "with powerful abilities"],
                    "Notify Me",
                ),
                release(
                    AssetName::ExpansionCyberAge,
                    "Cyber Age",
                    "May 10, 2026",
                    &["Futuristic tech-themed", "cards and mechanics"],
                    "Coming Soon",
                ),
            ],
            info_columns: vec![
                column(
                    "About Us",
                    &[
                        "Leading TCG publisher",
                        "since 2020. Creating",
                        "epic card experiences.",
                    ],
                ),
                column(
                    "Community",
                    &["Join 500K+ players", "Discord • Reddit", "Twitter • Forums"],
                ),
                column("Support", &["Help Center", "Game Rules", "Contact Us"]),
                InfoColumn {
                    heading: "Newsletter".into(),
                    body_lines: Vec::new(),
                    signup: Some(NewsletterSignup {
                        placeholder: "your@email.com".into(),
                        button_label: "Subscribe".into(),
                    }),
                },
            ],
            copyright: "© 2026 TCG Studios. All rights reserved.".into(),
            footer_links: vec![
                footer("Privacy Policy", "#privacy"),
                footer("Terms", "#terms"),
                footer("Legal", "#legal"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_content_has_designed_counts() {
        let content = PageContent::default();
        assert_eq!(content.nav_links.len(), 3);
        assert_eq!(content.features.len(), 3);
        assert_eq!(content.packs.len(), 3);
        assert_eq!(content.releases.len(), 3);
        assert_eq!(content.info_columns.len(), 4);
        assert_eq!(content.footer_links.len(), 3);
    }

    #[test]
    fn pack_prices_are_literal() {
        let content = PageContent::default();
        let prices: Vec<&str> = content.packs.iter().map(|p| p.price.as_str()).collect();
        assert_eq!(prices, vec!["$9.99", "$24.99", "$49.99"]);
    }

    #[test]
    fn only_newsletter_has_signup() {
        let content = PageContent::default();
        let with_signup: Vec<&str> = content
            .info_columns
            .iter()
            .filter(|c| c.signup.is_some())
            .map(|c| c.heading.as_str())
            .collect();
        assert_eq!(with_signup, vec!["Newsletter"]);
    }

    #[test]
    fn content_serializes_with_kebab_asset_names() {
        let json = serde_json::to_value(PageContent::default()).unwrap();
        assert_eq!(json["packs"][1]["image"]["asset"], "pack-legends");
        assert_eq!(
            json["packs"][1]["image"]["alt"],
            "Legends Pack - Premium card pack with legendary cards"
        );
        assert_eq!(json["releases"][2]["call_to_action"], "Coming Soon");
        assert!(json["info_columns"][0].get("signup").is_none());
    }
}
