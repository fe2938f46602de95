//! # Domain Model: Places, Notes, and Record Normalization
//!
//! This module defines the core data structures for spotz: [`Place`], [`Note`],
//! and the loosely-typed [`RawRecord`] / [`RawNote`] pair that record stores
//! exchange. It also implements [`normalize`], the single point where stored
//! records become fully-populated `Place` values.
//!
//! ## The Problem
//!
//! The catalog file has grown fields release over release. The original schema
//! stored only `name`, `cuisine`, `price`, `location`, and `reviews`; photos,
//! favorite/visited flags, the venue `type`, addresses, and ids all arrived
//! later. Old files are still loaded today, so every field added after the
//! first release must default cleanly when absent.
//!
//! ## Normalization Rules
//!
//! `normalize` is called exactly once per record, at the store boundary:
//!
//! 1. **Required**: a record without a non-empty `name` is malformed, as is an
//!    `id` that is present but not a valid UUID. Everything else defaults.
//! 2. **Defaults**: `type` → restaurant, flags → false, missing lists → empty,
//!    missing strings → empty, unknown `price` symbols → absent.
//! 3. **Coherence**: a `visited_date` on a record that is not `visited` is
//!    cleared (the flag wins). Notes with blank comments are dropped; note
//!    ratings outside 1–5 are dropped to absent; blank reviewers become
//!    [`DEFAULT_REVIEWER`].
//! 4. **Idempotence**: normalizing a `Place` round-tripped through
//!    [`Place::to_raw`] yields an equal `Place`. `normalize` never consults
//!    the clock and performs no I/O.
//!
//! ## Dates
//!
//! Dates are stored as plain strings: note and visited dates use
//! [`DATE_FORMAT`], the creation stamp uses [`TIMESTAMP_FORMAT`]. The command
//! layer owns the clock; nothing in this module does.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Result, SpotzError};

/// Reviewer name used when a note is added without one.
pub const DEFAULT_REVIEWER: &str = "Anonymous";

/// Format for note dates and visited dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format for the immutable creation stamp.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Price bracket, rendered as `$` through `$$$$`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PriceTier {
    Budget,
    Moderate,
    Upscale,
    TopShelf,
}

impl PriceTier {
    pub const ALL: [PriceTier; 4] = [
        PriceTier::Budget,
        PriceTier::Moderate,
        PriceTier::Upscale,
        PriceTier::TopShelf,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            PriceTier::Budget => "$",
            PriceTier::Moderate => "$$",
            PriceTier::Upscale => "$$$",
            PriceTier::TopShelf => "$$$$",
        }
    }

    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "$" => Some(PriceTier::Budget),
            "$$" => Some(PriceTier::Moderate),
            "$$$" => Some(PriceTier::Upscale),
            "$$$$" => Some(PriceTier::TopShelf),
            _ => None,
        }
    }
}

impl fmt::Display for PriceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for PriceTier {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        PriceTier::from_symbol(s.trim())
            .ok_or_else(|| format!("unknown price tier '{}' (use $ through $$$$)", s))
    }
}

/// What kind of venue a [`Place`] is. Stored under the wire name `type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VenueKind {
    Restaurant,
    CocktailBar,
}

impl VenueKind {
    pub fn wire_name(&self) -> &'static str {
        match self {
            VenueKind::Restaurant => "restaurant",
            VenueKind::CocktailBar => "cocktail_bar",
        }
    }

    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "restaurant" => Some(VenueKind::Restaurant),
            "cocktail_bar" => Some(VenueKind::CocktailBar),
            _ => None,
        }
    }
}

impl Default for VenueKind {
    fn default() -> Self {
        VenueKind::Restaurant
    }
}

impl fmt::Display for VenueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VenueKind::Restaurant => write!(f, "restaurant"),
            VenueKind::CocktailBar => write!(f, "cocktail bar"),
        }
    }
}

/// A free-text annotation on a [`Place`]. Append-only from the user's view;
/// the comment is never empty once persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub rating: Option<u8>,
    pub comment: String,
    pub reviewer: String,
    pub date: String,
}

/// One venue in the catalog.
///
/// `id` is `None` only before the first successful persist; the record store
/// assigns it on insert. `photos` holds blob URLs in insertion order (the
/// first one doubles as the thumbnail), and `reviews` is chronological.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Place {
    pub id: Option<Uuid>,
    pub name: String,
    pub cuisine: String,
    pub price: Option<PriceTier>,
    pub location: String,
    pub address: String,
    pub kind: VenueKind,
    pub favorite: bool,
    pub visited: bool,
    pub visited_date: Option<String>,
    pub photos: Vec<String>,
    pub reviews: Vec<Note>,
    pub added_date: String,
}

impl Place {
    /// The wire form of this place, ready for a record-store upsert.
    pub fn to_raw(&self) -> RawRecord {
        RawRecord {
            id: self.id.map(|id| id.to_string()),
            name: Some(self.name.clone()),
            cuisine: Some(self.cuisine.clone()),
            price: self.price.map(|p| p.symbol().to_string()),
            location: Some(self.location.clone()),
            address: Some(self.address.clone()),
            kind: Some(self.kind.wire_name().to_string()),
            favorite: Some(self.favorite),
            visited: Some(self.visited),
            visited_date: self.visited_date.clone(),
            photos: Some(self.photos.clone()),
            reviews: Some(self.reviews.iter().map(RawNote::from_note).collect()),
            added_date: Some(self.added_date.clone()),
        }
    }
}

/// Wire form of a [`Note`]. Every field is optional so that records written
/// by any historical release still deserialize.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawNote {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl RawNote {
    fn from_note(note: &Note) -> Self {
        RawNote {
            rating: note.rating,
            comment: Some(note.comment.clone()),
            reviewer: Some(note.reviewer.clone()),
            date: Some(note.date.clone()),
        }
    }
}

/// Wire form of a [`Place`], as exchanged with a record store. Anything may
/// be missing; [`normalize`] decides what that means.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visited: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visited_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photos: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviews: Option<Vec<RawNote>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added_date: Option<String>,
}

/// Convert a stored record into a fully-populated [`Place`].
///
/// Errors with [`SpotzError::MalformedRecord`] only when the record has no
/// usable `name`, or carries an `id` that is not a valid UUID. Every other
/// gap gets its fixed default.
pub fn normalize(raw: RawRecord) -> Result<Place> {
    let name = raw.name.as_deref().map(str::trim).unwrap_or("");
    if name.is_empty() {
        return Err(SpotzError::MalformedRecord(
            "record has no name".to_string(),
        ));
    }

    let id = match raw.id {
        None => None,
        Some(s) => Some(Uuid::parse_str(s.trim()).map_err(|_| {
            SpotzError::MalformedRecord(format!("'{}' has an invalid id: '{}'", name, s))
        })?),
    };

    let visited = raw.visited.unwrap_or(false);
    // Flag wins: a date on an unvisited place is stale data from an old write.
    let visited_date = if visited {
        raw.visited_date.filter(|d| !d.trim().is_empty())
    } else {
        None
    };

    let reviews = raw
        .reviews
        .unwrap_or_default()
        .into_iter()
        .filter_map(normalize_note)
        .collect();

    Ok(Place {
        id,
        name: name.to_string(),
        cuisine: raw.cuisine.unwrap_or_default(),
        price: raw.price.as_deref().map(str::trim).and_then(PriceTier::from_symbol),
        location: raw.location.unwrap_or_default(),
        address: raw.address.unwrap_or_default(),
        kind: raw
            .kind
            .as_deref()
            .and_then(VenueKind::from_wire)
            .unwrap_or_default(),
        favorite: raw.favorite.unwrap_or(false),
        visited,
        visited_date,
        photos: raw.photos.unwrap_or_default(),
        reviews,
        added_date: raw.added_date.unwrap_or_default(),
    })
}

// Notes with nothing to say are dropped rather than failing the record.
fn normalize_note(raw: RawNote) -> Option<Note> {
    let comment = raw.comment.map(|c| c.trim().to_string())?;
    if comment.is_empty() {
        return None;
    }
    Some(Note {
        rating: raw.rating.filter(|r| (1..=5).contains(r)),
        comment,
        reviewer: raw
            .reviewer
            .filter(|r| !r.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_REVIEWER.to_string()),
        date: raw.date.unwrap_or_default(),
    })
}
