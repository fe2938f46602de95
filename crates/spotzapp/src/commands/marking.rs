//! Flip the favorite and visited flags.

use uuid::Uuid;

use crate::catalog::Catalog;
use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{BlobStore, RecordStore};

pub fn toggle_favorite<R: RecordStore, B: BlobStore>(
    catalog: &mut Catalog<R, B>,
    id: &Uuid,
) -> Result<CmdResult> {
    let mut place = helpers::resolve(catalog, id)?;
    place.favorite = !place.favorite;
    let saved = catalog.save(&place)?;

    let mut result = CmdResult::new();
    let verb = if saved.favorite { "Marked" } else { "Unmarked" };
    result.add_message(CmdMessage::success(format!(
        "{} favorite: {}",
        verb, saved.name
    )));
    Ok(result.with_affected_places(vec![saved]))
}

/// Flip the visited flag, keeping the visit date in step: turning it on
/// stamps today's date unless one is already recorded, turning it off
/// clears the date.
pub fn toggle_visited<R: RecordStore, B: BlobStore>(
    catalog: &mut Catalog<R, B>,
    id: &Uuid,
) -> Result<CmdResult> {
    let mut place = helpers::resolve(catalog, id)?;
    place.visited = !place.visited;
    if place.visited {
        if place.visited_date.is_none() {
            place.visited_date = Some(helpers::today());
        }
    } else {
        place.visited_date = None;
    }
    let saved = catalog.save(&place)?;

    let mut result = CmdResult::new();
    let label = if saved.visited {
        "Marked visited"
    } else {
        "Marked not visited"
    };
    result.add_message(CmdMessage::success(format!("{}: {}", label, saved.name)));
    Ok(result.with_affected_places(vec![saved]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create::{self, NewPlace};
    use crate::error::SpotzError;
    use crate::model::VenueKind;
    use crate::store::memory::{MemBlobStore, MemRecordStore};

    fn catalog_with_one() -> (Catalog<MemRecordStore, MemBlobStore>, Uuid) {
        let mut catalog = Catalog::new(MemRecordStore::new(), MemBlobStore::new());
        catalog.reload().unwrap();
        let result = create::run(
            &mut catalog,
            NewPlace {
                name: "Velvet Hour".to_string(),
                cuisine: String::new(),
                price: None,
                location: "Wicker Park".to_string(),
                address: "1520 N Damen Ave".to_string(),
                kind: VenueKind::CocktailBar,
                visited: false,
            },
            &[],
        )
        .unwrap();
        (catalog, result.affected_places[0].id.unwrap())
    }

    #[test]
    fn favorite_toggles_back_and_forth() {
        let (mut catalog, id) = catalog_with_one();

        let on = toggle_favorite(&mut catalog, &id).unwrap();
        assert!(on.affected_places[0].favorite);
        assert!(on.messages[0].content.starts_with("Marked favorite"));

        let off = toggle_favorite(&mut catalog, &id).unwrap();
        assert!(!off.affected_places[0].favorite);
        assert!(off.messages[0].content.starts_with("Unmarked favorite"));
    }

    #[test]
    fn visiting_stamps_today_and_unvisiting_clears_it() {
        let (mut catalog, id) = catalog_with_one();

        let on = toggle_visited(&mut catalog, &id).unwrap();
        let place = &on.affected_places[0];
        assert!(place.visited);
        assert_eq!(place.visited_date.as_deref(), Some(helpers::today().as_str()));

        let off = toggle_visited(&mut catalog, &id).unwrap();
        let place = &off.affected_places[0];
        assert!(!place.visited);
        assert!(place.visited_date.is_none());
    }

    #[test]
    fn toggles_persist_through_reload() {
        let (mut catalog, id) = catalog_with_one();
        toggle_favorite(&mut catalog, &id).unwrap();
        toggle_visited(&mut catalog, &id).unwrap();

        catalog.reload().unwrap();
        let place = catalog.get(&id).unwrap();
        assert!(place.favorite);
        assert!(place.visited);
        assert!(place.visited_date.is_some());
    }

    #[test]
    fn unknown_id_is_not_found() {
        let (mut catalog, _) = catalog_with_one();
        match toggle_favorite(&mut catalog, &Uuid::new_v4()) {
            Err(SpotzError::NotFound(_)) => {}
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }
}
