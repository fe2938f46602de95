#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn spotz_cmd(data: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("spotz"));
    cmd.env("SPOTZ_DATA_DIR", data.path().as_os_str());
    cmd
}

#[test]
fn test_add_list_show_workflow() {
    let data = TempDir::new().unwrap();

    // 1. Add a restaurant
    spotz_cmd(&data)
        .args([
            "add",
            "Monteverde",
            "-c",
            "Italian",
            "-p",
            "$$",
            "-l",
            "West Loop",
            "-a",
            "1020 W Madison St",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Place added: Monteverde"));

    // 2. Add a cocktail bar, already visited
    spotz_cmd(&data)
        .args([
            "add",
            "Lost Lake",
            "--bar",
            "-l",
            "Logan Square",
            "-a",
            "3154 W Diversey Ave",
            "--visited",
        ])
        .assert()
        .success();

    // 3. Duplicate names are rejected case-insensitively
    spotz_cmd(&data)
        .args(["add", "MONTEVERDE", "-a", "somewhere else"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    // 4. Both show up in the listing
    spotz_cmd(&data)
        .args(["ls"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Monteverde")
                .and(predicate::str::contains("Lost Lake"))
                .and(predicate::str::contains("2 of 2 places")),
        );

    // 5. Filters narrow it down
    spotz_cmd(&data)
        .args(["list", "--bar"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Lost Lake")
                .and(predicate::str::contains("Monteverde").not()),
        );

    // 6. Show prints the full card
    spotz_cmd(&data)
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Address:   1020 W Madison St")
                .and(predicate::str::contains("Visited:   no")),
        );
}

#[test]
fn test_visits_and_notes() {
    let data = TempDir::new().unwrap();
    spotz_cmd(&data)
        .args(["add", "Avec", "-c", "Mediterranean", "-a", "615 W Randolph St"])
        .assert()
        .success();

    spotz_cmd(&data)
        .args(["visited", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Marked visited: Avec"));

    spotz_cmd(&data)
        .args(["note", "1", "Get the bacon dates", "-r", "Ana", "-R", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note added to Avec"));

    // No reviewer falls back to the configured default
    spotz_cmd(&data)
        .args(["note", "1", "Crowded after 7"])
        .assert()
        .success();

    spotz_cmd(&data)
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("5/5 Get the bacon dates [Ana,")
                .and(predicate::str::contains("Crowded after 7 [Anonymous,")),
        );

    spotz_cmd(&data)
        .args(["rmnote", "1", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note removed from Avec"));

    spotz_cmd(&data)
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Get the bacon dates").not());
}

#[test]
fn test_edit_then_delete() {
    let data = TempDir::new().unwrap();
    spotz_cmd(&data)
        .args(["add", "Oriole", "-c", "Tasting menu", "-a", "661 W Walnut St"])
        .assert()
        .success();

    spotz_cmd(&data)
        .args(["edit", "1", "-n", "Oriole Chicago", "-p", "$$"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Place updated: Oriole Chicago"));

    spotz_cmd(&data)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Oriole Chicago").and(predicate::str::contains("$$")));

    spotz_cmd(&data)
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Place deleted: Oriole Chicago"));

    spotz_cmd(&data)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No places found."));
}

#[test]
fn test_photo_lifecycle() {
    let data = TempDir::new().unwrap();
    let shot = data.path().join("front.jpg");
    fs::write(&shot, [0xFF, 0xD8, 0xFF]).unwrap();

    spotz_cmd(&data)
        .args([
            "add",
            "Kasama",
            "-c",
            "Filipino",
            "-a",
            "1001 N Winchester Ave",
            "--photo",
        ])
        .arg(&shot)
        .assert()
        .success();

    // The bytes were copied under the data dir
    let photos_dir = data.path().join("photos");
    assert_eq!(fs::read_dir(&photos_dir).unwrap().count(), 1);

    spotz_cmd(&data)
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(thumbnail)"));

    spotz_cmd(&data)
        .args(["edit", "1", "--remove-photo", "1"])
        .assert()
        .success();
    assert_eq!(fs::read_dir(&photos_dir).unwrap().count(), 0);

    spotz_cmd(&data)
        .args(["edit", "1", "--remove-photo", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("has no photo at position 1"));
}

#[test]
fn test_pick_with_filters() {
    let data = TempDir::new().unwrap();
    spotz_cmd(&data)
        .args(["add", "Girl & the Goat", "-c", "American", "-a", "809 W Randolph St"])
        .assert()
        .success();
    spotz_cmd(&data)
        .args(["add", "Velvet Hour", "--bar", "-a", "1520 N Damen Ave"])
        .assert()
        .success();

    // Only the bar matches, so the draw is deterministic
    for _ in 0..3 {
        spotz_cmd(&data)
            .args(["pick", "--bar"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Tonight's pick: Velvet Hour"));
    }

    spotz_cmd(&data)
        .args(["pick", "-c", "Sushi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No places match the current filters"));
}

#[test]
fn test_out_of_range_index_is_rejected() {
    let data = TempDir::new().unwrap();

    spotz_cmd(&data)
        .args(["show", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no place at index 3"));

    spotz_cmd(&data).args(["fav", "1"]).assert().failure();
}
