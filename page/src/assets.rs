//! Image slots and how they are filled.
//!
//! The page references eight images by logical name. An [`AssetMode`]
//! decides what each slot shows: a labeled placeholder box, or an `<img>`
//! pointing at whatever URL the [`AssetManifest`] holds for that name.
//! A name with no manifest entry leaves its slot empty; rendering never fails
//! because of a missing image.
//!
//! Records on the page refer to their image through an [`ImageRef`], which
//! pairs the slot name with the alt text of the record being shown.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Logical names of every image the page uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssetName {
    /// Studio logo in the header
    Logo,
    /// Hero banner illustration
    Hero,
    /// Starter pack art
    PackStarter,
    /// Legends pack art
    PackLegends,
    /// Premium pack art
    PackPremium,
    /// Shadow Realm expansion thumbnail
    ExpansionShadowRealm,
    /// Crystal Warriors expansion thumbnail
    ExpansionCrystalWarriors,
    /// Cyber Age expansion thumbnail
    ExpansionCyberAge,
}

/// Error for asset names that don't exist on the page.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssetError {
    /// The name matches none of [`AssetName::ALL`]
    #[error("unknown asset name `{0}` (expected one of: {names})", names = AssetName::ALL.map(AssetName::as_str).join(", "))]
    UnknownAsset(String),
}

impl AssetName {
    /// All slots, in document order.
    pub const ALL: [AssetName; 8] = [
        AssetName::Logo,
        AssetName::Hero,
        AssetName::PackStarter,
        AssetName::PackLegends,
        AssetName::PackPremium,
        AssetName::ExpansionShadowRealm,
        AssetName::ExpansionCrystalWarriors,
        AssetName::ExpansionCyberAge,
    ];

    /// Kebab-case name, as used in config files and `data-asset` attributes.
    pub fn as_str(self) -> &'static str {
        match self {
            AssetName::Logo => "logo",
            AssetName::Hero => "hero",
            AssetName::PackStarter => "pack-starter",
            AssetName::PackLegends => "pack-legends",
            AssetName::PackPremium => "pack-premium",
            AssetName::ExpansionShadowRealm => "expansion-shadow-realm",
            AssetName::ExpansionCrystalWarriors => "expansion-crystal-warriors",
            AssetName::ExpansionCyberAge => "expansion-cyber-age",
        }
    }

    /// File name the asset pipeline publishes this image under.
    pub fn file_name(self) -> &'static str {
        match self {
            AssetName::Logo => "logo.png",
            AssetName::Hero => "hero-card-animation.webp",
            AssetName::PackStarter => "pack-starter.webp",
            AssetName::PackLegends => "pack-legends.webp",
            AssetName::PackPremium => "pack-premium.webp",
            AssetName::ExpansionShadowRealm => "expansion-shadow-realm.webp",
            AssetName::ExpansionCrystalWarriors => "expansion-crystal-warriors.webp",
            AssetName::ExpansionCyberAge => "expansion-cyber-age.webp",
        }
    }

    /// Alt text the designed page uses for this slot. Default for [`ImageRef::new`].
    pub fn alt_text(self) -> &'static str {
        match self {
            AssetName::Logo => "TCG Logo",
            AssetName::Hero => "Hero card animation showcasing trading cards",
            AssetName::PackStarter => "Starter Pack - Basic card pack for beginners",
            AssetName::PackLegends => "Legends Pack - Premium card pack with legendary cards",
            AssetName::PackPremium => "Premium Pack - Exclusive card pack with rare cards",
            AssetName::ExpansionShadowRealm => "Shadow Realm expansion thumbnail",
            AssetName::ExpansionCrystalWarriors => "Crystal Warriors expansion thumbnail",
            AssetName::ExpansionCyberAge => "Cyber Age expansion thumbnail",
        }
    }

    /// Above-the-fold images load eagerly, the rest lazily.
    pub fn lazy(self) -> bool {
        !matches!(self, AssetName::Logo | AssetName::Hero)
    }
}

impl fmt::Display for AssetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetName {
    type Err = AssetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AssetName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| AssetError::UnknownAsset(s.to_string()))
    }
}

/// An image as referenced by a display record.
///
/// The alt text belongs to the record, so a renamed pack describes its own
/// art rather than the slot's designed default.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    /// Slot the image is resolved through
    pub asset: AssetName,
    /// `alt` of the `<img>`, and the label of its placeholder box
    pub alt: String,
}

impl ImageRef {
    /// Reference with the slot's designed alt text.
    pub fn new(asset: AssetName) -> Self {
        Self {
            asset,
            alt: asset.alt_text().to_string(),
        }
    }

    /// Reference with custom alt text.
    pub fn with_alt(asset: AssetName, alt: impl Into<String>) -> Self {
        Self {
            asset,
            alt: alt.into(),
        }
    }
}

/// Resolved image URLs keyed by logical name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetManifest {
    entries: BTreeMap<AssetName, String>,
}

impl AssetManifest {
    /// Every slot pointing at `{base}/{file_name}`.
    ///
    /// An empty base gives page-relative file names; `"/"` is the site root.
    ///
    /// ```rust
    /// use tcg_page::assets::{AssetManifest, AssetName};
    ///
    /// let manifest = AssetManifest::with_base("/static/");
    /// assert_eq!(manifest.get(AssetName::Logo), Some("/static/logo.png"));
    ///
    /// let root = AssetManifest::with_base("/");
    /// assert_eq!(root.get(AssetName::Logo), Some("/logo.png"));
    /// ```
    pub fn with_base(base: &str) -> Self {
        let trimmed = base.trim_end_matches('/');
        let entries = AssetName::ALL
            .into_iter()
            .map(|name| {
                let url = if base.is_empty() {
                    name.file_name().to_string()
                } else {
                    format!("{}/{}", trimmed, name.file_name())
                };
                (name, url)
            })
            .collect();
        Self { entries }
    }

    /// URL of `name`, if the manifest has one.
    pub fn get(&self, name: AssetName) -> Option<&str> {
        self.entries.get(&name).map(String::as_str)
    }

    /// Point `name` at `url`, replacing any previous entry.
    pub fn insert(&mut self, name: AssetName, url: impl Into<String>) {
        self.entries.insert(name, url.into());
    }

    /// Drop `name`; its slot renders empty from then on.
    pub fn remove(&mut self, name: AssetName) -> Option<String> {
        self.entries.remove(&name)
    }

    /// Number of resolved slots.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when no slot resolves.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in [`AssetName`] order.
    pub fn iter(&self) -> impl Iterator<Item = (AssetName, &str)> {
        self.entries.iter().map(|(name, url)| (*name, url.as_str()))
    }
}

/// What image slots display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssetMode {
    /// Dashed boxes labeled with the record's alt text. No `<img>` at all.
    Placeholder,
    /// Real images from the manifest. Missing entries render as empty slots.
    Resolved(AssetManifest),
}

impl Default for AssetMode {
    fn default() -> Self {
        AssetMode::Resolved(AssetManifest::with_base("assets"))
    }
}

/// What a single slot ends up showing once the mode is applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SlotContent {
    /// Labeled dashed box
    Placeholder,
    /// A real image
    Image {
        /// URL from the manifest
        src: String,
        /// Whether the browser may defer loading it
        lazy: bool,
    },
    /// Unresolved image, rendered as an empty box
    Empty,
}

impl AssetMode {
    /// What the slot `name` shows under this mode.
    pub fn slot(&self, name: AssetName) -> SlotContent {
        match self {
            AssetMode::Placeholder => SlotContent::Placeholder,
            AssetMode::Resolved(manifest) => match manifest.get(name) {
                Some(src) => SlotContent::Image {
                    src: src.to_string(),
                    lazy: name.lazy(),
                },
                None => SlotContent::Empty,
            },
        }
    }
}
