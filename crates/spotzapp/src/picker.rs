//! # Random Pick Engine
//!
//! Draws uniformly from the filtered pool and remembers the last pick by id
//! rather than by reference. A remembered pick is only surfaced while it
//! still exists in the catalog and still matches the active criteria;
//! otherwise [`Picker::current`] reports nothing and the next
//! [`Picker::pick`] draws fresh from the current pool.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

use crate::error::{Result, SpotzError};
use crate::filter::{apply_filters, PlaceFilter};
use crate::model::Place;

pub struct Picker {
    rng: StdRng,
    criteria: PlaceFilter,
    last_pick: Option<Uuid>,
}

impl Picker {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Use a caller-supplied generator. Tests seed this for repeatability.
    pub fn with_rng(rng: StdRng) -> Self {
        Picker {
            rng,
            criteria: PlaceFilter::default(),
            last_pick: None,
        }
    }

    pub fn criteria(&self) -> &PlaceFilter {
        &self.criteria
    }

    /// Replace the active criteria. The last pick is kept; whether it is
    /// still shown is decided at read time by [`Picker::current`].
    pub fn set_criteria(&mut self, criteria: PlaceFilter) {
        self.criteria = criteria;
    }

    /// Draw uniformly from the places matching the active criteria.
    ///
    /// An empty pool clears the remembered pick and returns
    /// [`SpotzError::EmptyPool`]. Repeats are allowed: picking again rolls
    /// over the full current pool, previous winner included. Picks are
    /// remembered by id, so a legacy place that never got one is returned
    /// like any other but not remembered; [`Picker::current`] reports
    /// nothing after such a draw.
    pub fn pick<'a>(&mut self, places: &'a [Place]) -> Result<&'a Place> {
        let pool = apply_filters(places, &self.criteria);
        if pool.is_empty() {
            self.last_pick = None;
            return Err(SpotzError::EmptyPool);
        }
        let picked = pool[self.rng.random_range(0..pool.len())];
        self.last_pick = picked.id;
        Ok(picked)
    }

    /// The remembered pick, if it still belongs to the current pool.
    ///
    /// Returns `None` when nothing was picked yet, when the place has been
    /// deleted, or when edits to the catalog or criteria pushed it out of
    /// the pool. Stale picks are never surfaced.
    pub fn current<'a>(&self, places: &'a [Place]) -> Option<&'a Place> {
        let last = self.last_pick?;
        apply_filters(places, &self.criteria)
            .into_iter()
            .find(|p| p.id == Some(last))
    }

    /// Forget the remembered pick.
    pub fn clear(&mut self) {
        self.last_pick = None;
    }
}

impl Default for Picker {
    fn default() -> Self {
        Picker::new()
    }
}
