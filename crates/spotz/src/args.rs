use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use spotzapp::filter::{PlaceFilter, VisitedFilter};
use spotzapp::model::{PriceTier, VenueKind};

#[derive(Parser, Debug)]
#[command(name = "spotz")]
#[command(about = "Where to eat (or drink) tonight: a personal venue catalog", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (defaults to the OS data dir, or $SPOTZ_DATA_DIR)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

/// Filter flags shared by `list` and `pick`. Leaving a flag off leaves
/// that dimension wide open.
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Only these cuisines (repeatable)
    #[arg(short, long, value_name = "CUISINE")]
    pub cuisine: Vec<String>,

    /// Only these price tiers: $, $$, $$$ or $$$$ (repeatable)
    #[arg(short, long, value_name = "TIER")]
    pub price: Vec<PriceTier>,

    /// Only these neighborhoods (repeatable)
    #[arg(short, long, value_name = "AREA")]
    pub location: Vec<String>,

    /// Only cocktail bars
    #[arg(long, conflicts_with = "restaurant")]
    pub bar: bool,

    /// Only restaurants
    #[arg(long)]
    pub restaurant: bool,

    /// Only favorites
    #[arg(short, long)]
    pub favorites: bool,

    /// Only places already visited
    #[arg(long, conflicts_with = "not_visited")]
    pub visited: bool,

    /// Only places not yet visited
    #[arg(long)]
    pub not_visited: bool,
}

impl FilterArgs {
    pub fn to_filter(&self) -> PlaceFilter {
        let kind = if self.bar {
            Some(VenueKind::CocktailBar)
        } else if self.restaurant {
            Some(VenueKind::Restaurant)
        } else {
            None
        };
        let visited = if self.visited {
            VisitedFilter::VisitedOnly
        } else if self.not_visited {
            VisitedFilter::NotVisitedOnly
        } else {
            VisitedFilter::Any
        };
        PlaceFilter {
            cuisines: self.cuisine.clone(),
            prices: self.price.clone(),
            locations: self.location.clone(),
            kind,
            favorites_only: self.favorites,
            visited,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new place
    #[command(alias = "new")]
    Add {
        /// Name of the place (must be unique)
        name: String,

        /// Cuisine (e.g. Italian, Tacos)
        #[arg(short, long, default_value = "")]
        cuisine: String,

        /// Price tier: $, $$, $$$ or $$$$
        #[arg(short, long)]
        price: Option<PriceTier>,

        /// Neighborhood
        #[arg(short, long, default_value = "")]
        location: String,

        /// Street address
        #[arg(short, long)]
        address: String,

        /// It's a cocktail bar, not a restaurant
        #[arg(long)]
        bar: bool,

        /// Mark as already visited
        #[arg(long)]
        visited: bool,

        /// Photo file to attach (repeatable)
        #[arg(long = "photo", value_name = "FILE")]
        photos: Vec<PathBuf>,
    },

    /// List places
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Show one place in full
    Show {
        /// Index from `list`
        index: usize,
    },

    /// Edit a place
    #[command(alias = "e")]
    Edit {
        /// Index from `list`
        index: usize,

        /// New name
        #[arg(short, long)]
        name: Option<String>,

        /// New cuisine
        #[arg(short, long)]
        cuisine: Option<String>,

        /// New price tier: $, $$, $$$ or $$$$
        #[arg(short, long)]
        price: Option<PriceTier>,

        /// New neighborhood
        #[arg(short, long)]
        location: Option<String>,

        /// New street address
        #[arg(short, long)]
        address: Option<String>,

        /// Reclassify as a cocktail bar
        #[arg(long, conflicts_with = "restaurant")]
        bar: bool,

        /// Reclassify as a restaurant
        #[arg(long)]
        restaurant: bool,

        /// Photo file to attach (repeatable)
        #[arg(long = "add-photo", value_name = "FILE")]
        add_photos: Vec<PathBuf>,

        /// Photo to remove, by its position in `show` (repeatable)
        #[arg(long = "remove-photo", value_name = "N")]
        remove_photos: Vec<usize>,
    },

    /// Delete a place and its photos
    #[command(alias = "rm")]
    Delete {
        /// Index from `list`
        index: usize,
    },

    /// Toggle favorite
    Fav {
        /// Index from `list`
        index: usize,
    },

    /// Toggle visited (stamps or clears the visit date)
    Visited {
        /// Index from `list`
        index: usize,
    },

    /// Add a review note
    Note {
        /// Index from `list`
        index: usize,

        /// The note text
        comment: String,

        /// Who is reviewing (defaults to the configured reviewer)
        #[arg(short, long)]
        reviewer: Option<String>,

        /// Rating from 1 to 5
        #[arg(short = 'R', long)]
        rating: Option<u8>,
    },

    /// Remove a review note
    Rmnote {
        /// Index from `list`
        index: usize,

        /// Note position as shown by `show`
        note: usize,
    },

    /// Pick a place at random from the matching pool
    #[command(alias = "roll")]
    Pick {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Reload the record file, reporting records that fail to load
    Refresh,
}
