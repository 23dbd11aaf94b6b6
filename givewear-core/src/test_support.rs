//! Shared fixtures for exercising the matching engine in tests.
//!
//! These helpers build representative items and centers so behaviour tests
//! across the workspace agree on one vocabulary.

use geo::Coord;

use crate::{
    ACCEPTS_ALL_TYPES, CenterKind, CenterStore, ClothingItem, Condition, DonationCenter,
    NeedsProfile, Priority, RecipientCategory, Season, StoreError,
};

/// A children's summer t-shirt in good condition.
#[must_use]
pub fn tshirt(quantity: u32) -> ClothingItem {
    ClothingItem::new(
        "t-shirt",
        RecipientCategory::Children,
        Season::Summer,
        Condition::Good,
        quantity,
    )
}

/// A new women's winter coat.
#[must_use]
pub fn winter_coat(quantity: u32) -> ClothingItem {
    ClothingItem::new(
        "coat",
        RecipientCategory::Women,
        Season::Winter,
        Condition::New,
        quantity,
    )
}

/// A high-priority children's home needing t-shirts and uniforms.
#[must_use]
pub fn orphanage(id: &str) -> DonationCenter {
    DonationCenter::new(id, "Sunrise Children's Home", CenterKind::Orphanage)
        .with_address("12 Hill Road")
        .with_needs(
            NeedsProfile::default()
                .with_type("uniform")
                .with_type("t-shirt")
                .with_gender(RecipientCategory::Children)
                .with_season(Season::Summer)
                .with_season(Season::AllSeason)
                .with_priority(Priority::High),
        )
}

/// A shelter whose needs profile is all wildcards.
#[must_use]
pub fn open_shelter(id: &str) -> DonationCenter {
    DonationCenter::new(id, "Haven Shelter", CenterKind::Shelter).with_needs(
        NeedsProfile::default()
            .with_type(ACCEPTS_ALL_TYPES)
            .with_gender(RecipientCategory::Unisex)
            .with_season(Season::AllSeason),
    )
}

/// An elder-care home needing women's winter clothing.
#[must_use]
pub fn care_home(id: &str) -> DonationCenter {
    DonationCenter::new(id, "Evergreen Residence", CenterKind::OldAgeHome).with_needs(
        NeedsProfile::default()
            .with_type("coat")
            .with_type("sweater")
            .with_gender(RecipientCategory::Women)
            .with_gender(RecipientCategory::Men)
            .with_season(Season::Winter)
            .with_priority(Priority::Medium),
    )
}

/// Place a center at the given position, `x = longitude`, `y = latitude`.
#[must_use]
pub fn at(center: DonationCenter, longitude: f64, latitude: f64) -> DonationCenter {
    center.with_coordinates(Coord {
        x: longitude,
        y: latitude,
    })
}

/// A [`CenterStore`] that always fails with the configured error.
#[derive(Debug, Clone)]
pub struct FailingCenterStore(
    /// Error returned by every call.
    pub StoreError,
);

impl CenterStore for FailingCenterStore {
    fn active_centers(&self) -> Result<Vec<DonationCenter>, StoreError> {
        Err(self.0.clone())
    }
}
