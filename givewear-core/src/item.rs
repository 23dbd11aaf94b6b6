//! Donated clothing items and their normalisation from raw form input.
//!
//! Forms collect free-text fields; [`ItemDraft::normalise`] is the single
//! boundary where that raw shape becomes a validated [`ClothingItem`].
//! Downstream components never see the raw form shape.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Smallest accepted quantity after normalisation.
pub const MIN_QUANTITY: u32 = 1;
/// Largest accepted quantity after normalisation.
pub const MAX_QUANTITY: u32 = 50;

/// Who a donated garment is suitable for.
///
/// `Unisex` doubles as a wildcard inside a center's needs profile: a center
/// that accepts `unisex` accepts every recipient category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecipientCategory {
    /// Men's clothing.
    Men,
    /// Women's clothing.
    Women,
    /// Children's clothing.
    Children,
    /// Suitable for anyone.
    Unisex,
}

impl RecipientCategory {
    /// Return the category as a lowercase `&str`.
    ///
    /// # Examples
    /// ```
    /// use givewear_core::RecipientCategory;
    ///
    /// assert_eq!(RecipientCategory::Children.as_str(), "children");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Men => "men",
            Self::Women => "women",
            Self::Children => "children",
            Self::Unisex => "unisex",
        }
    }

    /// Possessive form used by the rationale generator.
    ///
    /// # Examples
    /// ```
    /// use givewear_core::RecipientCategory;
    ///
    /// assert_eq!(RecipientCategory::Children.possessive(), "children's");
    /// ```
    #[must_use]
    pub const fn possessive(self) -> &'static str {
        match self {
            Self::Men => "men's",
            Self::Women => "women's",
            Self::Children => "children's",
            Self::Unisex => "unisex",
        }
    }
}

impl std::fmt::Display for RecipientCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RecipientCategory {
    type Err = ItemValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "men" => Ok(Self::Men),
            "women" => Ok(Self::Women),
            "children" => Ok(Self::Children),
            "unisex" => Ok(Self::Unisex),
            other => Err(ItemValidationError::UnknownRecipient(other.to_owned())),
        }
    }
}

/// Season a garment is intended for.
///
/// `AllSeason` doubles as a wildcard inside a center's needs profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Season {
    /// Warm-weather clothing.
    Summer,
    /// Cold-weather clothing.
    Winter,
    /// Wearable year-round.
    AllSeason,
}

impl Season {
    /// Return the season as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Summer => "summer",
            Self::Winter => "winter",
            Self::AllSeason => "all-season",
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Season {
    type Err = ItemValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "summer" => Ok(Self::Summer),
            "winter" => Ok(Self::Winter),
            "all-season" => Ok(Self::AllSeason),
            other => Err(ItemValidationError::UnknownSeason(other.to_owned())),
        }
    }
}

/// Condition of a donated garment, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Condition {
    /// Unworn, possibly with tags.
    New,
    /// Worn once or twice, no visible wear.
    LikeNew,
    /// Light wear, fully usable.
    Good,
    /// Noticeable wear.
    Fair,
}

impl Condition {
    /// Return the condition as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::LikeNew => "like-new",
            Self::Good => "good",
            Self::Fair => "fair",
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Condition {
    type Err = ItemValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "new" => Ok(Self::New),
            "like-new" => Ok(Self::LikeNew),
            "good" => Ok(Self::Good),
            "fair" => Ok(Self::Fair),
            other => Err(ItemValidationError::UnknownCondition(other.to_owned())),
        }
    }
}

/// Errors raised while normalising an [`ItemDraft`].
///
/// Invalid enum values are reported to the form layer rather than silently
/// coerced; coercion would corrupt scoring semantics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ItemValidationError {
    /// The clothing type was empty after trimming.
    #[error("clothing type must not be empty")]
    EmptyType,
    /// The recipient category was not one of the known values.
    #[error("unknown recipient category '{0}'")]
    UnknownRecipient(String),
    /// The season was not one of the known values.
    #[error("unknown season '{0}'")]
    UnknownSeason(String),
    /// The condition was not one of the known values.
    #[error("unknown condition '{0}'")]
    UnknownCondition(String),
}

/// A validated donated item, the canonical shape the scorer consumes.
///
/// Quantity is always in [`MIN_QUANTITY`]`..=`[`MAX_QUANTITY`] and acts as a
/// multiplier on the item's scoring contribution, never as an independent
/// dimension. Items carry no identity; the engine is stateless over them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClothingItem {
    /// Free-form type tag, e.g. `"t-shirt"`. The vocabulary is advisory;
    /// unknown tags are accepted as opaque strings.
    #[serde(rename = "type")]
    pub item_type: String,
    /// Who the item suits.
    #[serde(rename = "recipientCategory")]
    pub recipient: RecipientCategory,
    /// Season the item is intended for.
    pub season: Season,
    /// Quality of the garment.
    pub condition: Condition,
    /// Number of identical garments, clamped to `1..=50`.
    pub quantity: u32,
}

impl ClothingItem {
    /// Build an item directly from validated parts, clamping quantity.
    ///
    /// # Examples
    /// ```
    /// use givewear_core::{ClothingItem, Condition, RecipientCategory, Season};
    ///
    /// let item = ClothingItem::new(
    ///     "t-shirt",
    ///     RecipientCategory::Children,
    ///     Season::Summer,
    ///     Condition::Good,
    ///     120,
    /// );
    /// assert_eq!(item.quantity, 50);
    /// ```
    #[must_use]
    pub fn new(
        item_type: impl Into<String>,
        recipient: RecipientCategory,
        season: Season,
        condition: Condition,
        quantity: u32,
    ) -> Self {
        Self {
            item_type: item_type.into(),
            recipient,
            season,
            condition,
            quantity: quantity.clamp(MIN_QUANTITY, MAX_QUANTITY),
        }
    }
}

/// Raw form input for one donated item, before validation.
///
/// Two near-duplicate form variants feed the engine; both serialise to this
/// shape and are unified by [`ItemDraft::normalise`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDraft {
    /// Raw clothing type text.
    #[serde(rename = "type")]
    pub item_type: String,
    /// Raw recipient category text.
    #[serde(rename = "recipientCategory")]
    pub recipient: String,
    /// Raw season text.
    pub season: String,
    /// Raw condition text.
    pub condition: String,
    /// Raw quantity; `None` or non-positive values default to 1.
    #[serde(default)]
    pub quantity: Option<i64>,
}

impl ItemDraft {
    /// Validate the draft and produce a canonical [`ClothingItem`].
    ///
    /// The type tag is trimmed and lowercased but otherwise accepted as-is.
    /// Quantity is clamped into `1..=50`, with missing or non-positive input
    /// defaulting to 1.
    ///
    /// # Errors
    /// Returns [`ItemValidationError`] when the type is empty or an enum
    /// field holds an unrecognised value.
    ///
    /// # Examples
    /// ```
    /// use givewear_core::{ItemDraft, RecipientCategory};
    ///
    /// let draft = ItemDraft {
    ///     item_type: " T-Shirt ".into(),
    ///     recipient: "children".into(),
    ///     season: "summer".into(),
    ///     condition: "good".into(),
    ///     quantity: Some(5),
    /// };
    /// let item = draft.normalise()?;
    /// assert_eq!(item.item_type, "t-shirt");
    /// assert_eq!(item.recipient, RecipientCategory::Children);
    /// # Ok::<(), givewear_core::ItemValidationError>(())
    /// ```
    pub fn normalise(&self) -> Result<ClothingItem, ItemValidationError> {
        let item_type = self.item_type.trim().to_lowercase();
        if item_type.is_empty() {
            return Err(ItemValidationError::EmptyType);
        }
        let quantity = match self.quantity {
            Some(raw) if raw > 0 => {
                u32::try_from(raw.min(i64::from(MAX_QUANTITY))).unwrap_or(MAX_QUANTITY)
            }
            _ => MIN_QUANTITY,
        };
        Ok(ClothingItem::new(
            item_type,
            self.recipient.parse()?,
            self.season.parse()?,
            self.condition.parse()?,
            quantity,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn draft(quantity: Option<i64>) -> ItemDraft {
        ItemDraft {
            item_type: "jacket".into(),
            recipient: "women".into(),
            season: "winter".into(),
            condition: "like-new".into(),
            quantity,
        }
    }

    #[rstest]
    #[case(None, 1)]
    #[case(Some(0), 1)]
    #[case(Some(-3), 1)]
    #[case(Some(1), 1)]
    #[case(Some(50), 50)]
    #[case(Some(51), 50)]
    #[case(Some(i64::MAX), 50)]
    fn quantity_is_clamped(#[case] raw: Option<i64>, #[case] expected: u32) {
        let item = draft(raw).normalise().unwrap();
        assert_eq!(item.quantity, expected);
    }

    #[rstest]
    fn type_is_trimmed_and_lowercased() {
        let mut input = draft(Some(1));
        input.item_type = "  Warm Coat ".into();
        let item = input.normalise().unwrap();
        assert_eq!(item.item_type, "warm coat");
    }

    #[rstest]
    fn empty_type_is_rejected() {
        let mut input = draft(Some(1));
        input.item_type = "   ".into();
        assert_eq!(
            input.normalise().unwrap_err(),
            ItemValidationError::EmptyType
        );
    }

    #[rstest]
    fn unknown_recipient_is_reported_not_coerced() {
        let mut input = draft(Some(1));
        input.recipient = "toddlers".into();
        assert_eq!(
            input.normalise().unwrap_err(),
            ItemValidationError::UnknownRecipient("toddlers".into())
        );
    }

    #[rstest]
    #[case("Summer", Season::Summer)]
    #[case("ALL-SEASON", Season::AllSeason)]
    fn season_parsing_is_case_insensitive(#[case] raw: &str, #[case] expected: Season) {
        let mut input = draft(Some(1));
        input.season = raw.into();
        assert_eq!(input.normalise().unwrap().season, expected);
    }

    #[rstest]
    fn wire_field_names_match_the_form_contract() {
        let item = ClothingItem::new(
            "t-shirt",
            RecipientCategory::Children,
            Season::Summer,
            Condition::Good,
            5,
        );
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "t-shirt");
        assert_eq!(json["recipientCategory"], "children");
        assert_eq!(json["season"], "summer");
        assert_eq!(json["condition"], "good");
        assert_eq!(json["quantity"], 5);
    }
}
