use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cli(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("depensier_cli").expect("binary builds");
    cmd.env("DEPENSIER_HOME", temp.path());
    cmd
}

#[test]
fn records_then_lists_and_totals() {
    let temp = TempDir::new().expect("temp dir");
    cli(&temp)
        .write_stdin("Dépense: Taxi - 1500 FCFA\nListe\nTotal\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dépense enregistrée avec succès !"))
        .stdout(predicate::str::contains("1. "))
        .stdout(predicate::str::contains("Taxi - 1500 FCFA (Autre)"))
        .stdout(predicate::str::contains(
            "Le montant total des dépenses est de **1500 FCFA**.",
        ));
}

#[test]
fn state_survives_across_invocations() {
    let temp = TempDir::new().expect("temp dir");
    cli(&temp)
        .write_stdin("dépense: Marché - 3200 - Courses\n")
        .assert()
        .success();
    cli(&temp)
        .write_stdin("liste\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Marché - 3200 FCFA (Courses)"));
}

#[test]
fn unknown_commands_reply_with_guidance() {
    let temp = TempDir::new().expect("temp dir");
    cli(&temp)
        .write_stdin("lisre\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Commande non reconnue."))
        .stdout(predicate::str::contains("Vouliez-vous dire 'liste' ?"));
}
