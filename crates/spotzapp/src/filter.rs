//! # Filter Composition
//!
//! Each filter dimension is either inactive (empty set, `None`, `false`,
//! [`VisitedFilter::Any`]) or active; the combined predicate is the AND of
//! the active ones. An inactive dimension always passes, so the default
//! filter matches everything.
//!
//! [`apply_filters`] is pure and order-preserving: it never mutates the
//! catalog and keeps catalog order, which is what makes the picker's pool
//! reproducible for a given catalog + criteria.

use crate::model::{Place, PriceTier, VenueKind};

/// Visited-status dimension. `Any` is the inactive state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitedFilter {
    Any,
    VisitedOnly,
    NotVisitedOnly,
}

impl Default for VisitedFilter {
    fn default() -> Self {
        VisitedFilter::Any
    }
}

/// Active criteria for listing and picking. `Default` matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaceFilter {
    /// Match any of these cuisines; empty means any cuisine.
    pub cuisines: Vec<String>,
    /// Match any of these price tiers; empty means any price.
    pub prices: Vec<PriceTier>,
    /// Match any of these neighborhoods; empty means anywhere.
    pub locations: Vec<String>,
    /// Restrict to one venue kind; `None` means both.
    pub kind: Option<VenueKind>,
    pub favorites_only: bool,
    pub visited: VisitedFilter,
}

impl PlaceFilter {
    pub fn matches(&self, place: &Place) -> bool {
        if !self.cuisines.is_empty() && !self.cuisines.contains(&place.cuisine) {
            return false;
        }
        if !self.prices.is_empty() {
            match place.price {
                Some(price) if self.prices.contains(&price) => {}
                _ => return false,
            }
        }
        if !self.locations.is_empty() && !self.locations.contains(&place.location) {
            return false;
        }
        if let Some(kind) = self.kind {
            if place.kind != kind {
                return false;
            }
        }
        if self.favorites_only && !place.favorite {
            return false;
        }
        match self.visited {
            VisitedFilter::Any => {}
            VisitedFilter::VisitedOnly => {
                if !place.visited {
                    return false;
                }
            }
            VisitedFilter::NotVisitedOnly => {
                if place.visited {
                    return false;
                }
            }
        }
        true
    }
}

/// The filtered pool, in catalog order.
pub fn apply_filters<'a>(places: &'a [Place], filter: &PlaceFilter) -> Vec<&'a Place> {
    places.iter().filter(|p| filter.matches(p)).collect()
}
