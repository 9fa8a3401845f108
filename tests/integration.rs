// SPDX-License-Identifier: MPL-2.0
use iced_gallery::config::{self, Config, SortOrder};
use iced_gallery::gallery_scanner::ImageList;
use iced_gallery::i18n::fluent::I18n;
use iced_gallery::zoom::{Anchors, Binder, Dialog, Slot};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

/// Stand-in for the modal component: records show calls instead of rendering.
#[derive(Default)]
struct CountingDialog {
    show_calls: usize,
}

impl Dialog for CountingDialog {
    fn show(&mut self) {
        self.show_calls += 1;
    }
}

fn write_fake_image(dir: &Path, name: &str) {
    fs::write(dir.join(name), b"fake image data").expect("failed to write test file");
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let mut initial_config = Config::default();
    initial_config.general.language = Some("en-US".to_string());
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let mut french_config = Config::default();
    french_config.general.language = Some("fr".to_string());
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_scan_then_bind_then_click_pipeline() {
    let dir = tempdir().expect("Failed to create temporary directory");
    write_fake_image(dir.path(), "b.jpg");
    write_fake_image(dir.path(), "a.jpg");
    write_fake_image(dir.path(), "notes.txt");

    let list = ImageList::scan_directory(dir.path(), SortOrder::Alphabetical)
        .expect("Failed to scan directory");
    assert_eq!(list.len(), 2, "only image files should be listed");

    let mut binder = Binder::new();
    binder.initialize(
        (0..list.len()).map(|key| (key, true)),
        Anchors::PRESENT,
    );
    assert_eq!(binder.bound_count(), 2);

    let mut dialog = CountingDialog::default();
    binder.on_image_click(0, &list.paths()[0], &mut dialog);
    binder.on_image_click(1, &list.paths()[1], &mut dialog);

    // Last click wins, one show per click.
    assert_eq!(dialog.show_calls, 2);
    assert_eq!(
        binder.slot().and_then(Slot::source),
        Some(list.paths()[1].as_path())
    );
    assert!(binder
        .slot()
        .and_then(Slot::source)
        .map(|p| p.ends_with("b.jpg"))
        .unwrap_or(false));
}

#[test]
fn test_missing_dialog_surface_disables_clicks_end_to_end() {
    let dir = tempdir().expect("Failed to create temporary directory");
    write_fake_image(dir.path(), "a.jpg");

    let list = ImageList::scan_directory(dir.path(), SortOrder::Alphabetical)
        .expect("Failed to scan directory");

    let mut binder = Binder::new();
    binder.initialize((0..list.len()).map(|key| (key, true)), Anchors::ABSENT);

    let mut dialog = CountingDialog::default();
    binder.on_image_click(0, &list.paths()[0], &mut dialog);

    assert_eq!(binder.bound_count(), 0);
    assert_eq!(dialog.show_calls, 0);
}

#[test]
fn test_files_added_after_scan_are_not_picked_up() {
    let dir = tempdir().expect("Failed to create temporary directory");
    write_fake_image(dir.path(), "a.jpg");

    let list = ImageList::scan_directory(dir.path(), SortOrder::Alphabetical)
        .expect("Failed to scan directory");
    let mut binder = Binder::new();
    binder.initialize((0..list.len()).map(|key| (key, true)), Anchors::PRESENT);

    // A file dropped in afterwards: the old scan result and the bindings
    // derived from it do not change.
    write_fake_image(dir.path(), "late.jpg");
    assert_eq!(list.len(), 1);
    assert_eq!(binder.bound_count(), 1);

    let mut dialog = CountingDialog::default();
    binder.on_image_click(1, Path::new("late.jpg"), &mut dialog);
    assert_eq!(dialog.show_calls, 0);
}
