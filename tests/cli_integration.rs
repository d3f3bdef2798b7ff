use assert_cmd::Command;
use predicates::prelude::*;

fn garb(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("garb").unwrap();
    cmd.env("GARB_HOME", home);
    cmd
}

#[test]
fn add_list_suggest_stats_round_trip() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();

    garb(home)
        .args(["add", "Blue Shirt", "--category", "tops", "--color", "Blue"])
        .assert()
        .success()
        .stdout(predicates::str::contains("first upload"));

    garb(home)
        .args(["add", "Dark Jeans", "--category", "bottoms"])
        .assert()
        .success()
        .stdout(predicates::str::contains("added to your wardrobe"));

    garb(home)
        .args(["add", "Sneakers", "--category", "shoes"])
        .assert()
        .success();

    garb(home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Blue Shirt"))
        .stdout(predicates::str::contains("Sneakers"));

    garb(home)
        .args(["list", "--category", "bottoms"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Dark Jeans"))
        .stdout(predicates::str::contains("Blue Shirt").not());

    // Empty stdin line skips the save prompt.
    garb(home)
        .args(["suggest", "work", "meeting", "today", "--no-wait"])
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("Professional"))
        .stdout(predicates::str::contains("Blue Shirt"));

    garb(home)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicates::str::contains("Closet: 3"))
        .stdout(predicates::str::contains(home.to_str().unwrap()));
}

#[test]
fn add_help_lists_category_examples() {
    let temp_dir = tempfile::tempdir().unwrap();

    garb(temp_dir.path())
        .args(["add", "--help"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Shirts, Blouses, T-shirts"))
        .stdout(predicates::str::contains("outerwear (Jackets, Coats, Blazers)"));
}

#[test]
fn save_then_remove_outfit() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();

    for (name, category) in [
        ("Shirt", "tops"),
        ("Jeans", "bottoms"),
        ("Boots", "shoes"),
    ] {
        garb(home)
            .args(["add", name, "--category", category])
            .assert()
            .success();
    }

    garb(home)
        .args(["suggest", "dinner", "date", "--no-wait"])
        .write_stdin("1\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("Evening Out"))
        .stdout(predicates::str::contains("Outfit saved"));

    garb(home)
        .arg("outfits")
        .assert()
        .success()
        .stdout(predicates::str::contains("Today"));
}

#[test]
fn suggest_needs_three_items() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();

    garb(home)
        .args(["add", "--category", "tops"])
        .assert()
        .success();

    garb(home)
        .args(["suggest", "anything", "--no-wait"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Upload a few clothing items"));
}

#[test]
fn unknown_category_fails_with_message() {
    let temp_dir = tempfile::tempdir().unwrap();

    garb(temp_dir.path())
        .args(["add", "--category", "hats"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Unknown category"));
}
