use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use spotzapp::api::{CmdMessage, MessageLevel, NewPlace, PlaceUpdate, SpotzApi};
use spotzapp::config::SpotzConfig;
use spotzapp::error::{Result, SpotzError};
use spotzapp::media::PhotoFile;
use spotzapp::model::{Note, Place, VenueKind};
use spotzapp::store::dir_blobs::DirBlobStore;
use spotzapp::store::json_records::JsonRecordStore;
use std::path::PathBuf;

mod args;
use args::{Cli, Commands, FilterArgs};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: SpotzApi<JsonRecordStore, DirBlobStore>,
    default_reviewer: String,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add {
            name,
            cuisine,
            price,
            location,
            address,
            bar,
            visited,
            photos,
        }) => {
            let fields = NewPlace {
                name,
                cuisine,
                price,
                location,
                address,
                kind: if bar {
                    VenueKind::CocktailBar
                } else {
                    VenueKind::Restaurant
                },
                visited,
            };
            handle_add(&mut ctx, fields, &photos)
        }
        Some(Commands::List { filters }) => handle_list(&ctx, &filters),
        Some(Commands::Show { index }) => handle_show(&ctx, index),
        Some(Commands::Edit {
            index,
            name,
            cuisine,
            price,
            location,
            address,
            bar,
            restaurant,
            add_photos,
            remove_photos,
        }) => {
            let kind = if bar {
                Some(VenueKind::CocktailBar)
            } else if restaurant {
                Some(VenueKind::Restaurant)
            } else {
                None
            };
            let update = PlaceUpdate {
                name,
                cuisine,
                price,
                location,
                address,
                kind,
            };
            handle_edit(&mut ctx, index, update, &add_photos, &remove_photos)
        }
        Some(Commands::Delete { index }) => handle_delete(&mut ctx, index),
        Some(Commands::Fav { index }) => handle_fav(&mut ctx, index),
        Some(Commands::Visited { index }) => handle_visited(&mut ctx, index),
        Some(Commands::Note {
            index,
            comment,
            reviewer,
            rating,
        }) => handle_note(&mut ctx, index, &comment, reviewer, rating),
        Some(Commands::Rmnote { index, note }) => handle_rmnote(&mut ctx, index, note),
        Some(Commands::Pick { filters }) => handle_pick(&mut ctx, &filters),
        Some(Commands::Refresh) => handle_refresh(&mut ctx),
        None => handle_list(&ctx, &FilterArgs::default()),
    }
}

fn resolve_data_dir(cli: &Cli) -> PathBuf {
    if let Some(dir) = &cli.data_dir {
        return dir.clone();
    }
    if let Ok(dir) = std::env::var("SPOTZ_DATA_DIR") {
        return PathBuf::from(dir);
    }
    ProjectDirs::from("com", "spotz", "spotz")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".spotz"))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let dir = resolve_data_dir(cli);
    let config = SpotzConfig::load(&dir)?;
    let records = JsonRecordStore::new(config.records_path(&dir));
    let blobs = DirBlobStore::new(config.photos_root(&dir));
    let mut api = SpotzApi::new(records, blobs);

    // Every command starts from a fresh load. Only the load warnings
    // (skipped records) are worth printing here.
    let loaded = api.refresh()?;
    for message in &loaded.messages {
        if message.level == MessageLevel::Warning {
            eprintln!("{}", message.content.yellow());
        }
    }

    Ok(AppContext {
        api,
        default_reviewer: config.default_reviewer,
    })
}

fn handle_add(ctx: &mut AppContext, fields: NewPlace, photo_paths: &[PathBuf]) -> Result<()> {
    let files = read_photo_files(photo_paths)?;
    let result = ctx.api.create_place(fields, &files)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, filters: &FilterArgs) -> Result<()> {
    let result = ctx.api.list_places(&filters.to_filter())?;
    print_places(&result.listed_places);
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &AppContext, index: usize) -> Result<()> {
    let places = ctx.api.places();
    if index == 0 || index > places.len() {
        return Err(SpotzError::Validation(format!(
            "no place at index {}",
            index
        )));
    }
    print_full_place(index, &places[index - 1]);
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    index: usize,
    update: PlaceUpdate,
    add_photos: &[PathBuf],
    remove_photos: &[usize],
) -> Result<()> {
    let id = ctx.api.resolve_index(index)?;

    let place = &ctx.api.places()[index - 1];
    let mut remove_urls = Vec::new();
    for &pos in remove_photos {
        let url = pos
            .checked_sub(1)
            .and_then(|i| place.photos.get(i))
            .cloned()
            .ok_or_else(|| {
                SpotzError::Validation(format!("{} has no photo at position {}", place.name, pos))
            })?;
        remove_urls.push(url);
    }

    let files = read_photo_files(add_photos)?;
    let result = ctx.api.update_place(&id, update, &files, &remove_urls)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, index: usize) -> Result<()> {
    let id = ctx.api.resolve_index(index)?;
    let result = ctx.api.delete_place(&id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_fav(ctx: &mut AppContext, index: usize) -> Result<()> {
    let id = ctx.api.resolve_index(index)?;
    let result = ctx.api.toggle_favorite(&id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_visited(ctx: &mut AppContext, index: usize) -> Result<()> {
    let id = ctx.api.resolve_index(index)?;
    let result = ctx.api.toggle_visited(&id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_note(
    ctx: &mut AppContext,
    index: usize,
    comment: &str,
    reviewer: Option<String>,
    rating: Option<u8>,
) -> Result<()> {
    let id = ctx.api.resolve_index(index)?;
    let reviewer = reviewer.unwrap_or_else(|| ctx.default_reviewer.clone());
    let result = ctx.api.add_note(&id, comment, Some(&reviewer), rating)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_rmnote(ctx: &mut AppContext, index: usize, note: usize) -> Result<()> {
    let id = ctx.api.resolve_index(index)?;
    let zero_based = note.checked_sub(1).ok_or_else(|| {
        SpotzError::Validation("note positions start at 1".to_string())
    })?;
    let result = ctx.api.remove_note(&id, zero_based)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_pick(ctx: &mut AppContext, filters: &FilterArgs) -> Result<()> {
    let result = ctx.api.pick(Some(filters.to_filter()))?;
    print_messages(&result.messages);
    if let Some(place) = result.affected_places.first() {
        println!();
        print_pick(place);
    }
    Ok(())
}

fn handle_refresh(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.refresh()?;
    print_messages(&result.messages);
    Ok(())
}

fn read_photo_files(paths: &[PathBuf]) -> Result<Vec<PhotoFile>> {
    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("photo")
            .to_string();
        files.push(PhotoFile::new(file_name, bytes));
    }
    Ok(files)
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const FAV_MARKER: &str = "♥";
const VISITED_MARKER: &str = "✓";

fn detail_line(place: &Place) -> String {
    let mut parts = Vec::new();
    if place.kind == VenueKind::CocktailBar {
        parts.push("bar".to_string());
    }
    if !place.cuisine.is_empty() {
        parts.push(place.cuisine.clone());
    }
    if let Some(price) = place.price {
        parts.push(price.symbol().to_string());
    }
    if !place.location.is_empty() {
        parts.push(place.location.clone());
    }
    parts.join("  ")
}

fn print_places(places: &[Place]) {
    if places.is_empty() {
        println!("No places found.");
        return;
    }
    for (i, place) in places.iter().enumerate() {
        let idx = format!("{:>3}. ", i + 1);
        let fav = if place.favorite {
            format!(" {}", FAV_MARKER).red().to_string()
        } else {
            String::new()
        };
        let vis = if place.visited {
            format!(" {}", VISITED_MARKER).green().to_string()
        } else {
            String::new()
        };
        let details = detail_line(place);
        if details.is_empty() {
            println!("{}{}{}{}", idx, place.name.bold(), fav, vis);
        } else {
            println!(
                "{}{}{}{}  {}",
                idx,
                place.name.bold(),
                fav,
                vis,
                details.dimmed()
            );
        }
    }
}

fn format_note(note: &Note) -> String {
    let mut s = String::new();
    if let Some(rating) = note.rating {
        s.push_str(&format!("{}/5 ", rating));
    }
    s.push_str(&note.comment);
    s.push_str(&format!(" [{}, {}]", note.reviewer, note.date));
    s
}

fn print_full_place(index: usize, place: &Place) {
    let kind_tag = match place.kind {
        VenueKind::CocktailBar => " (cocktail bar)",
        VenueKind::Restaurant => "",
    };
    println!(
        "{} {}{}",
        format!("{}.", index).yellow(),
        place.name.bold(),
        kind_tag
    );
    println!("--------------------------------");
    if !place.cuisine.is_empty() {
        println!("  Cuisine:   {}", place.cuisine);
    }
    if let Some(price) = place.price {
        println!("  Price:     {}", price.symbol());
    }
    if !place.location.is_empty() {
        println!("  Location:  {}", place.location);
    }
    println!("  Address:   {}", place.address);
    if !place.added_date.is_empty() {
        println!("  Added:     {}", place.added_date.dimmed());
    }
    println!("  Favorite:  {}", if place.favorite { "yes" } else { "no" });
    match (place.visited, place.visited_date.as_deref()) {
        (true, Some(date)) => println!("  Visited:   {}", date),
        (true, None) => println!("  Visited:   yes"),
        (false, _) => println!("  Visited:   no"),
    }
    if !place.photos.is_empty() {
        println!("  Photos:");
        for (i, url) in place.photos.iter().enumerate() {
            if i == 0 {
                println!("    {}. {} {}", i + 1, url, "(thumbnail)".dimmed());
            } else {
                println!("    {}. {}", i + 1, url);
            }
        }
    }
    if !place.reviews.is_empty() {
        println!("  Notes:");
        for (i, note) in place.reviews.iter().enumerate() {
            println!("    {}. {}", i + 1, format_note(note));
        }
    }
}

fn print_pick(place: &Place) {
    let kind_tag = match place.kind {
        VenueKind::CocktailBar => " (cocktail bar)",
        VenueKind::Restaurant => "",
    };
    println!("  {}{}", place.name.bold(), kind_tag);
    let details = detail_line(place);
    if !details.is_empty() {
        println!("  {}", details);
    }
    if !place.address.is_empty() {
        println!("  {}", place.address.dimmed());
    }
    // Last three notes, oldest of the three first.
    let start = place.reviews.len().saturating_sub(3);
    let recent = &place.reviews[start..];
    if !recent.is_empty() {
        println!();
        for note in recent {
            println!("  {}", format_note(note).dimmed());
        }
    }
}
