use std::fs;
use std::path::Path;

use assert_cmd::Command;
use kvitto_core::testing::{FixtureFont, Placed, receipt_pdf};
use predicates::prelude::*;
use tempfile::TempDir;

fn write_pdf(path: &Path, font: FixtureFont, pages: &[Vec<Placed<'_>>]) {
    fs::write(path, receipt_pdf(font, pages).unwrap()).unwrap();
}

/// Two-page receipt. The first item's total is pushed onto its own row.
fn write_receipt(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("receipt.pdf");
    write_pdf(
        &path,
        FixtureFont::WinAnsi,
        &[
            vec![
                (10, 800, "ICA Nära Testbutik"),
                (10, 780, "LF Lätt CF 13%"),
                (120, 780, "7318690075677"),
                (200, 780, "16.50"),
                (250, 780, "1 st"),
                (300, 760, "16.50"),
            ],
            vec![
                (10, 800, "Bananer"),
                (120, 800, "7350000000019"),
                (200, 800, "9.95"),
                (250, 800, "0.482 kg"),
                (300, 800, "4.80"),
                (10, 780, "SUMMA"),
                (300, 780, "21.30"),
            ],
        ],
    );
    path
}

fn kvitto(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("kvitto").unwrap();
    cmd.current_dir(dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join("config"))
        .env("HOME", dir.path());
    cmd
}

const EXPECTED_TABLE: &str = concat!(
    " |    Description|     ArticleID| Price| UnitWeight| Unit| Total price|\n",
    " |               |              |      |           |     |            |\n",
    " | LF Lätt CF 13%| 7318690075677| 16.50|      1.000|   st|       16.50|\n",
    " |        Bananer| 7350000000019|  9.95|      0.482|   kg|        4.80|\n",
);

#[test]
fn test_table_report() {
    let dir = TempDir::new().unwrap();
    let receipt = write_receipt(&dir);

    kvitto(&dir)
        .arg(&receipt)
        .assert()
        .success()
        .stdout(EXPECTED_TABLE);
}

#[test]
fn test_verbose_logs_receipt_total() {
    let dir = TempDir::new().unwrap();
    let receipt = write_receipt(&dir);

    kvitto(&dir)
        .arg("-v")
        .arg(&receipt)
        .assert()
        .success()
        .stdout(EXPECTED_TABLE)
        .stderr(predicate::str::contains("Found 2 products, receipt total 21.30"));
}

#[test]
fn test_default_input_name() {
    let dir = TempDir::new().unwrap();
    let receipt = write_receipt(&dir);
    fs::rename(&receipt, dir.path().join("ica_receipt.pdf")).unwrap();

    kvitto(&dir).assert().success().stdout(EXPECTED_TABLE);
}

#[test]
fn test_report_is_stable_across_runs() {
    let dir = TempDir::new().unwrap();
    let receipt = write_receipt(&dir);

    let first = kvitto(&dir).arg(&receipt).output().unwrap();
    let second = kvitto(&dir).arg(&receipt).output().unwrap();

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_receipt_in_cid_font() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cid.pdf");
    write_pdf(
        &path,
        FixtureFont::Identity,
        &[vec![
            (10, 800, "Mjölk"),
            (120, 800, "7310865004703"),
            (200, 800, "12.90"),
            (250, 800, "1 st"),
            (300, 800, "12.90"),
        ]],
    );

    kvitto(&dir)
        .arg(&path)
        .args(["--format", "csv"])
        .assert()
        .success()
        .stdout(concat!(
            "Description,ArticleID,Price,UnitWeight,Unit,Total price\n",
            "Mjölk,7310865004703,12.90,1.000,st,12.90\n",
        ));
}

#[test]
fn test_missing_file_fails() {
    let dir = TempDir::new().unwrap();

    kvitto(&dir)
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("ica_receipt.pdf"));
}

#[test]
fn test_unreadable_pdf_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.pdf");
    fs::write(&path, "this is not a pdf").unwrap();

    kvitto(&dir)
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open receipt"));
}

#[test]
fn test_pdf_without_products() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.pdf");
    write_pdf(&path, FixtureFont::WinAnsi, &[vec![(10, 800, "SUMMA"), (300, 800, "0.00")], vec![]]);

    kvitto(&dir)
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Description").and(predicate::str::contains("SUMMA").not()));
}

#[test]
fn test_csv_output() {
    let dir = TempDir::new().unwrap();
    let receipt = write_receipt(&dir);

    kvitto(&dir)
        .arg(&receipt)
        .args(["--format", "csv"])
        .assert()
        .success()
        .stdout(concat!(
            "Description,ArticleID,Price,UnitWeight,Unit,Total price\n",
            "LF Lätt CF 13%,7318690075677,16.50,1.000,st,16.50\n",
            "Bananer,7350000000019,9.95,0.482,kg,4.80\n",
        ));
}

#[test]
fn test_json_output_to_file() {
    let dir = TempDir::new().unwrap();
    let receipt = write_receipt(&dir);
    let out = dir.path().join("products.json");

    kvitto(&dir)
        .arg(&receipt)
        .args(["--format", "json", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 products written"));

    let products: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    let products = products.as_array().unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[0]["description"], "LF Lätt CF 13%");
    assert_eq!(products[0]["article_id"], 7318690075677u64);
    assert_eq!(products[1]["unit"], "kg");
}

#[test]
fn test_config_changes_unit_suffixes() {
    let dir = TempDir::new().unwrap();
    let receipt = write_receipt(&dir);
    let config = dir.path().join("custom.json");
    fs::write(&config, r#"{ "receipt": { "unit_suffixes": ["kg"] } }"#).unwrap();

    // without "st" the split first item is never rejoined
    kvitto(&dir)
        .arg(&receipt)
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Bananer").and(predicate::str::contains("LF Lätt").not()));
}

#[test]
fn test_broken_config_fails() {
    let dir = TempDir::new().unwrap();
    let receipt = write_receipt(&dir);
    let config = dir.path().join("custom.json");
    fs::write(&config, "{ nope").unwrap();

    kvitto(&dir)
        .arg(&receipt)
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}

#[test]
fn test_config_init_and_show() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("kvitto.json");

    kvitto(&dir)
        .args(["config", "init", "--output"])
        .arg(&path)
        .assert()
        .success();
    assert!(path.exists());

    kvitto(&dir)
        .args(["config", "init", "--output"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    kvitto(&dir)
        .args(["config", "show", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("unit_suffixes").and(predicate::str::contains("row_tolerance")));
}

#[test]
fn test_config_path() {
    let dir = TempDir::new().unwrap();

    kvitto(&dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("kvitto").and(predicate::str::contains("config.json")));
}
