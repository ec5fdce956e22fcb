// SPDX-License-Identifier: MPL-2.0
use sketchface::config::{self, Config};
use sketchface::generation::{build_prompt, Gender};
use sketchface::i18n::fluent::I18n;
use sketchface::media::preprocess;
use tempfile::tempdir;

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        language: Some("en-US".to_string()),
        ..Config::default()
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let french_config = Config {
        language: Some("fr".to_string()),
        ..Config::default()
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn endpoint_survives_a_config_round_trip() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let config = Config {
        endpoint: Some("http://faces.internal:8000/generate".to_string()),
        request_timeout_secs: Some(45),
        ..Config::default()
    };
    config::save_to_path(&config, &path).expect("Failed to save config");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(loaded.endpoint(), "http://faces.internal:8000/generate");
    assert_eq!(loaded.request_timeout().as_secs(), 45);
}

#[test]
fn sketch_on_disk_is_preprocessed_end_to_end() {
    use image_rs::{DynamicImage, ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("big-sketch.png");

    let img = RgbaImage::from_pixel(1600, 1200, Rgba([0, 0, 0, 255]));
    let mut bytes = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(img)
        .write_to(&mut bytes, ImageFormat::Png)
        .expect("encode png");
    std::fs::write(&path, bytes.into_inner()).expect("write sketch");

    let sketch = preprocess::prepare_sketch(&path).expect("preprocess");
    assert_eq!((sketch.width, sketch.height), (800, 600));
    assert_eq!(sketch.mime, "image/png");
    assert_eq!(sketch.file_name, "big-sketch.png");
}

#[test]
fn prompt_format_matches_the_service_contract() {
    assert_eq!(
        build_prompt("a smiling man", Gender::Male),
        "a smiling man (male)"
    );
}
