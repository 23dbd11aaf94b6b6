//! Donation centers and their declared needs profiles.
//!
//! Centers are long-lived reference data maintained by an administrative
//! collaborator; the engine only reads them. Wildcard needs (`"all"` types,
//! `unisex`, `all-season`) are resolved once inside the `accepts_*` checks so
//! callers never special-case them.

use geo::Coord;
use serde::{Deserialize, Serialize};

use crate::{RecipientCategory, Season};

/// Sentinel entry in [`NeedsProfile::types`] meaning "accepts every type".
pub const ACCEPTS_ALL_TYPES: &str = "all";

/// Kind of organisation operating a donation center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CenterKind {
    /// Children's home.
    Orphanage,
    /// Elder-care residence.
    OldAgeHome,
    /// Homeless shelter.
    Shelter,
    /// Non-governmental organisation.
    Ngo,
}

impl CenterKind {
    /// Human-readable label with article, used in generated rationales.
    ///
    /// # Examples
    /// ```
    /// use givewear_core::CenterKind;
    ///
    /// assert_eq!(CenterKind::Orphanage.human_label(), "a children's home");
    /// ```
    #[must_use]
    pub const fn human_label(self) -> &'static str {
        match self {
            Self::Orphanage => "a children's home",
            Self::OldAgeHome => "an elderly care facility",
            Self::Shelter => "a homeless shelter",
            Self::Ngo => "a community organization",
        }
    }
}

/// Urgency of a center's needs.
///
/// `Urgent` appears only in newer center records and ranks with `High` for
/// scoring purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    /// No particular urgency.
    #[default]
    Low,
    /// Moderate need.
    Medium,
    /// Pressing need.
    High,
    /// Critical shortage.
    Urgent,
}

impl Priority {
    /// Whether the rationale should phrase urgency for this level.
    #[must_use]
    pub const fn is_urgent(self) -> bool {
        matches!(self, Self::High | Self::Urgent)
    }
}

/// A center's declared acceptance criteria.
///
/// Missing arrays deserialise to empty vectors and match nothing on that
/// dimension; scoring stays total over malformed records.
///
/// # Examples
/// ```
/// use givewear_core::{NeedsProfile, Priority, RecipientCategory, Season};
///
/// let needs = NeedsProfile::default()
///     .with_type("t-shirt")
///     .with_gender(RecipientCategory::Unisex)
///     .with_season(Season::AllSeason)
///     .with_priority(Priority::High);
///
/// assert!(needs.accepts_type("t-shirt"));
/// assert!(needs.accepts_gender(RecipientCategory::Men));
/// assert!(needs.accepts_season(Season::Winter));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NeedsProfile {
    /// Accepted clothing types; may contain [`ACCEPTS_ALL_TYPES`].
    #[serde(default)]
    pub types: Vec<String>,
    /// Accepted recipient categories; `unisex` accepts everyone.
    #[serde(default)]
    pub genders: Vec<RecipientCategory>,
    /// Accepted seasons; `all-season` accepts every season.
    #[serde(default)]
    pub seasons: Vec<Season>,
    /// Urgency of the center's needs.
    #[serde(default)]
    pub priority: Priority,
}

impl NeedsProfile {
    /// Add an accepted type, consuming `self` for chaining.
    #[must_use]
    pub fn with_type(mut self, item_type: impl Into<String>) -> Self {
        self.types.push(item_type.into());
        self
    }

    /// Add an accepted recipient category, consuming `self` for chaining.
    #[must_use]
    pub fn with_gender(mut self, gender: RecipientCategory) -> Self {
        self.genders.push(gender);
        self
    }

    /// Add an accepted season, consuming `self` for chaining.
    #[must_use]
    pub fn with_season(mut self, season: Season) -> Self {
        self.seasons.push(season);
        self
    }

    /// Set the priority, consuming `self` for chaining.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Whether the profile accepts the given clothing type.
    ///
    /// The comparison is case-insensitive and the [`ACCEPTS_ALL_TYPES`]
    /// sentinel matches every type.
    #[must_use]
    pub fn accepts_type(&self, item_type: &str) -> bool {
        self.types
            .iter()
            .any(|t| t == ACCEPTS_ALL_TYPES || t.eq_ignore_ascii_case(item_type))
    }

    /// Whether the profile accepts the given recipient category.
    #[must_use]
    pub fn accepts_gender(&self, gender: RecipientCategory) -> bool {
        self.genders
            .iter()
            .any(|g| *g == RecipientCategory::Unisex || *g == gender)
    }

    /// Whether the profile accepts the given season.
    #[must_use]
    pub fn accepts_season(&self, season: Season) -> bool {
        self.seasons
            .iter()
            .any(|s| *s == Season::AllSeason || *s == season)
    }
}

/// One candidate donation-accepting organisation.
///
/// Coordinates follow the workspace convention of `x = longitude` and
/// `y = latitude`; when absent, distance annotation is skipped for the
/// center and it sorts after centers with a known distance on score ties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationCenter {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Display address.
    pub address: String,
    /// Kind of organisation.
    pub kind: CenterKind,
    /// Optional WGS84 position (`x = longitude`, `y = latitude`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coord<f64>>,
    /// Declared needs profile.
    pub needs: NeedsProfile,
    /// Whether the center currently accepts donations.
    pub is_active: bool,
}

impl DonationCenter {
    /// Build an active center with an empty needs profile.
    ///
    /// # Examples
    /// ```
    /// use givewear_core::{CenterKind, DonationCenter};
    ///
    /// let center = DonationCenter::new("c1", "Hope House", CenterKind::Shelter);
    /// assert!(center.is_active);
    /// assert!(center.coordinates.is_none());
    /// ```
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: CenterKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            address: String::new(),
            kind,
            coordinates: None,
            needs: NeedsProfile::default(),
            is_active: true,
        }
    }

    /// Set the display address, consuming `self` for chaining.
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Set the position, consuming `self` for chaining.
    #[must_use]
    pub const fn with_coordinates(mut self, coordinates: Coord<f64>) -> Self {
        self.coordinates = Some(coordinates);
        self
    }

    /// Replace the needs profile, consuming `self` for chaining.
    #[must_use]
    pub fn with_needs(mut self, needs: NeedsProfile) -> Self {
        self.needs = needs;
        self
    }

    /// Mark the center inactive, consuming `self` for chaining.
    #[must_use]
    pub const fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }
}
