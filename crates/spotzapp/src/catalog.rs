//! # Catalog
//!
//! In-memory working list of [`Place`]s layered over a [`RecordStore`] and a
//! [`BlobStore`]. The remote record store is the source of truth: every
//! mutation round-trips through it first, and the working list only changes
//! after the store reports success. A failed write leaves the list exactly
//! as it was.
//!
//! [`Catalog::reload`] replaces the list wholesale with whatever the store
//! holds, normalizing each record and skipping the ones too broken to
//! repair. Concurrent external edits are not merged; last load wins.

use uuid::Uuid;

use crate::error::Result;
use crate::model::{normalize, Place, PriceTier};
use crate::store::{BlobStore, RecordStore};

/// Outcome of a reload: how many records made it in, and the reasons for
/// the ones that did not.
#[derive(Debug, Clone, Default)]
pub struct RefreshReport {
    pub loaded: usize,
    pub skipped: Vec<String>,
}

pub struct Catalog<R: RecordStore, B: BlobStore> {
    records: R,
    blobs: B,
    places: Vec<Place>,
}

impl<R: RecordStore, B: BlobStore> Catalog<R, B> {
    /// Wrap the given stores. The working list starts empty; call
    /// [`Catalog::reload`] to populate it.
    pub fn new(records: R, blobs: B) -> Self {
        Catalog {
            records,
            blobs,
            places: Vec::new(),
        }
    }

    pub fn places(&self) -> &[Place] {
        &self.places
    }

    pub fn blobs(&self) -> &B {
        &self.blobs
    }

    pub fn get(&self, id: &Uuid) -> Option<&Place> {
        self.places.iter().find(|p| p.id.as_ref() == Some(id))
    }

    fn position(&self, id: &Uuid) -> Option<usize> {
        self.places.iter().position(|p| p.id.as_ref() == Some(id))
    }

    /// Drop the working list and rebuild it from the record store.
    ///
    /// Records that fail normalization are skipped one by one; a single
    /// malformed entry never aborts the load.
    pub fn reload(&mut self) -> Result<RefreshReport> {
        let raws = self.records.list_all()?;
        let mut loaded = Vec::with_capacity(raws.len());
        let mut skipped = Vec::new();
        for raw in raws {
            match normalize(raw) {
                Ok(place) => loaded.push(place),
                Err(err) => skipped.push(err.to_string()),
            }
        }
        self.places = loaded;
        Ok(RefreshReport {
            loaded: self.places.len(),
            skipped,
        })
    }

    /// Write `place` through to the record store, then commit the stored
    /// version to the working list. New places (no id yet) come back with
    /// the id the store assigned.
    pub fn save(&mut self, place: &Place) -> Result<Place> {
        let stored = self.records.upsert(place.to_raw())?;
        let saved = normalize(stored)?;
        match saved.id.and_then(|id| self.position(&id)) {
            Some(i) => self.places[i] = saved.clone(),
            None => self.places.push(saved.clone()),
        }
        Ok(saved)
    }

    /// Delete from the record store, then from the working list.
    pub fn remove(&mut self, id: &Uuid) -> Result<()> {
        self.records.delete_by_id(id)?;
        self.places.retain(|p| p.id.as_ref() != Some(id));
        Ok(())
    }

    /// Case-insensitive name collision check against the working list,
    /// optionally ignoring one place (the one being renamed).
    pub fn is_name_taken(&self, name: &str, exclude: Option<&Uuid>) -> bool {
        let target = name.trim().to_lowercase();
        self.places.iter().any(|p| {
            if let (Some(id), Some(skip)) = (p.id.as_ref(), exclude) {
                if id == skip {
                    return false;
                }
            }
            p.name.to_lowercase() == target
        })
    }

    /// Every cuisine currently in the catalog, sorted, without blanks.
    pub fn distinct_cuisines(&self) -> Vec<String> {
        let mut out: Vec<String> = self
            .places
            .iter()
            .map(|p| p.cuisine.clone())
            .filter(|c| !c.is_empty())
            .collect();
        out.sort();
        out.dedup();
        out
    }

    /// Every neighborhood currently in the catalog, sorted, without blanks.
    pub fn distinct_locations(&self) -> Vec<String> {
        let mut out: Vec<String> = self
            .places
            .iter()
            .map(|p| p.location.clone())
            .filter(|l| !l.is_empty())
            .collect();
        out.sort();
        out.dedup();
        out
    }

    /// Every price tier currently assigned, cheapest first.
    pub fn distinct_prices(&self) -> Vec<PriceTier> {
        let mut out: Vec<PriceTier> = self.places.iter().filter_map(|p| p.price).collect();
        out.sort();
        out.dedup();
        out
    }
}
