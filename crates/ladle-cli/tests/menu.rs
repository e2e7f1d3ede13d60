//! End-to-end tests driving the interactive binary over scripted stdin

use assert_cmd::Command;
use predicates::prelude::*;

fn ladle(db: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("ladle").expect("binary builds");
    cmd.env("LADLE_DB", db);
    cmd
}

#[test]
fn create_list_search_delete_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("recipes.db");

    // Create pasta (2 ingredients, 15 min -> Intermediate), list it,
    // search for sauce, delete it with confirmation, list again, exit.
    let script = "1\npasta\n2\npasta\nsauce\n15\n\
                  2\n\
                  3\n2\n\
                  5\n1\ny\n\
                  2\n\
                  6\n";

    ladle(&db)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Recipe has been added to the database!"))
        .stdout(predicate::str::contains("Name: Pasta"))
        .stdout(predicate::str::contains("Difficulty: Intermediate"))
        .stdout(predicate::str::contains("Recipe deleted."))
        .stdout(predicate::str::contains(
            "There are currently no recipes in the database.",
        ))
        .stdout(predicate::str::contains("Exiting Recipes."));
}

#[test]
fn recipes_persist_across_runs() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("recipes.db");

    ladle(&db)
        .write_stdin("1\nstew\n2\nbeef\ncarrot\n90\n6\n")
        .assert()
        .success();

    ladle(&db)
        .write_stdin("2\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Name: Stew"))
        .stdout(predicate::str::contains("Difficulty: Intermediate"));
}

#[test]
fn invalid_menu_selection_returns_to_menu() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("recipes.db");

    ladle(&db)
        .write_stdin("9\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Invalid entry, please type a number between 1 and 6.",
        ))
        .stdout(predicate::str::contains("Exiting Recipes."));
}

#[test]
fn rejected_create_persists_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("recipes.db");

    ladle(&db)
        .write_stdin("1\npasta 2000\n2\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "There are currently no recipes in the database.",
        ));
}

#[test]
fn unusable_database_path_is_fatal() {
    // /dev/null exists and is not a directory, so the parent of this
    // path cannot be created.
    let mut cmd = Command::cargo_bin("ladle").expect("binary builds");
    cmd.env("LADLE_DB", "/dev/null/recipes.db")
        .write_stdin("6\n")
        .assert()
        .failure();
}
