use std::fs;

use carpentry::CarpentryError;
use carpentry::board::Board;
use carpentry::promotion::User;
use carpentry::settings::Settings;
use carpentry::tool::{DriverKind, PullerKind};
use tempfile::tempdir;

#[test]
fn missing_file_yields_stock_inventory() {
    let dir = tempdir().expect("temp dir");
    let settings = Settings::load_from(dir.path().join("carpentry.toml")).expect("defaults");
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.supply().count(), 10);
    assert_eq!(
        settings.boards,
        vec![
            Board::new(0, 3),
            Board::new(0, 1),
            Board::new(0, 6),
            Board::new(6, 0),
            Board::new(9, 0),
            Board::new(4, 0),
        ]
    );
    assert_eq!(settings.admin.name(), "Joshua");
    assert_eq!(settings.admin.level(), "Super");
}

#[test]
fn file_overrides_what_it_names() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("carpentry.toml");
    fs::write(
        &path,
        r#"
nail_supply = 2
driver = "claw-hammer"
log_filter = "carpentry=debug"

[[boards]]
nails_driven = 2

[[boards]]
nails_needed = 5

[admin]
level = "Junior"

[admin.user]
name = "Ada"
email = "ada@example.com"
"#,
    )
    .expect("write settings");

    let settings = Settings::load_from(&path).expect("load");
    assert_eq!(settings.nail_supply, 2);
    assert_eq!(settings.driver, DriverKind::ClawHammer);
    assert_eq!(settings.puller, PullerKind::Crowbar, "unnamed keys keep defaults");
    assert_eq!(settings.boards, vec![Board::rotted(2), Board::fresh(5)]);
    assert_eq!(settings.admin.email(), "ada@example.com");
    assert_eq!(settings.admin.level(), "Junior");
    assert_eq!(settings.log_filter, "carpentry=debug");
}

#[test]
fn malformed_value_is_a_config_error() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("carpentry.toml");
    fs::write(&path, "nail_supply = \"plenty\"\n").expect("write settings");
    let err = Settings::load_from(&path).unwrap_err();
    assert!(matches!(err, CarpentryError::Config(_)), "got {err:?}");
}

#[test]
fn admin_level_alone_keeps_stock_user() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("carpentry.toml");
    fs::write(&path, "[admin]\nlevel = \"Junior\"\n").expect("write settings");

    let settings = Settings::load_from(&path).expect("load");
    assert_eq!(settings.admin.level(), "Junior");
    assert_eq!(settings.admin.user(), &User::default());
    assert_eq!(settings.admin.name(), "Joshua");
    assert_eq!(settings.admin.email(), "jaguilar20@gmail.com");
}

#[test]
fn admin_user_name_alone_keeps_stock_email_and_level() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("carpentry.toml");
    fs::write(&path, "[admin.user]\nname = \"Ada\"\n").expect("write settings");

    let settings = Settings::load_from(&path).expect("load");
    assert_eq!(settings.admin.name(), "Ada");
    assert_eq!(settings.admin.email(), "jaguilar20@gmail.com");
    assert_eq!(settings.admin.level(), "Super");
    assert_eq!(settings.boards, Settings::default().boards);
}
