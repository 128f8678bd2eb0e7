// SPDX-License-Identifier: MPL-2.0
use iced::{Point, Size, Vector};
use iced_mosaic::app::sources::resolve_sources;
use iced_mosaic::config::{self, Config, GalleryConfig, GeneralConfig};
use iced_mosaic::gallery::{draw_order, image_at, Layout};
use iced_mosaic::i18n::fluent::I18n;
use iced_mosaic::media::{load_all, ImageData};
use iced_mosaic::ui::state::{ViewScale, ViewportState};
use iced_mosaic::ui::wall;
use image_rs::{Rgba, RgbaImage};
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    RgbaImage::from_pixel(width, height, Rgba([200, 120, 40, 255]))
        .save(&path)
        .expect("failed to write test PNG");
    path
}

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let english = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
        },
        gallery: GalleryConfig::default(),
    };
    config::save_to_path(&english, &config_path).expect("Failed to write initial config file");
    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    assert_eq!(I18n::new(None, &loaded).current_locale().to_string(), "en-US");

    let french = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
        },
        gallery: GalleryConfig::default(),
    };
    config::save_to_path(&french, &config_path).expect("Failed to write french config file");
    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(i18n.tr("detail-back"), "Retour");
}

#[test]
fn gallery_section_is_read_from_settings_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(
        dir.path().join("settings.toml"),
        "[gallery]\nimages = [\"a.png\", \"b.png\"]\nshuffle = true\nshuffle_seed = 3\ngap = 500.0\n",
    )
    .expect("Failed to write config");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(config.gallery.images.len(), 2);
    assert!(config.gallery.shuffle_enabled());
    assert_eq!(config.gallery.shuffle_seed, Some(3));
    assert!((config.gallery.gap_px() - config::MAX_IMAGE_GAP_PX).abs() < f32::EPSILON);
}

#[test]
fn broken_settings_fall_back_to_defaults_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "[gallery\nimages = 3").expect("write");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config, Config::default());
    assert_eq!(warning.as_deref(), Some(config::CONFIG_LOAD_WARNING_KEY));
}

#[test]
fn layout_and_hit_test_agree_under_pan_and_zoom() {
    // Three columns on a 900px wide viewport.
    let sizes = [
        Size::new(400.0, 300.0),
        Size::new(300.0, 600.0),
        Size::new(500.0, 500.0),
        Size::new(640.0, 480.0),
    ];
    let order = [0, 1, 2, 3];
    let layout = Layout::compute(&sizes, &order, 900.0, 5.0);
    assert_eq!(layout.columns(), 3);

    let viewport = ViewportState {
        offset: Vector::new(-40.0, 25.0),
        scale: ViewScale::new(1.5),
    };

    for placement in layout.placements() {
        let center = placement.bounds.center();
        let on_screen = viewport.to_screen(center);
        assert_eq!(image_at(&layout, &viewport, on_screen), Some(placement.index));
    }

    // The left outer margin is never part of a tile.
    let margin = viewport.to_screen(Point::new(2.0, 50.0));
    assert_eq!(image_at(&layout, &viewport, margin), None);
}

#[test]
fn seeded_order_is_stable_across_relayout() {
    let sizes: Vec<Size> = (1..=10).map(|n| Size::new(100.0, 40.0 * n as f32)).collect();
    let order = draw_order(sizes.len(), true, Some(2024));

    let narrow = Layout::compute(&sizes, &order, 500.0, 5.0);
    let wide = Layout::compute(&sizes, &order, 1500.0, 5.0);

    let narrow_indices: Vec<usize> = narrow.placements().iter().map(|p| p.index).collect();
    let wide_indices: Vec<usize> = wide.placements().iter().map(|p| p.index).collect();
    assert_eq!(narrow_indices, order);
    assert_eq!(wide_indices, order);
    assert_eq!(wide.columns(), 7);
}

#[tokio::test]
async fn directory_sources_load_and_fill_the_wall() {
    let dir = tempdir().expect("Failed to create temporary directory");
    write_png(dir.path(), "01.png", 40, 20);
    write_png(dir.path(), "02.png", 20, 40);
    write_png(dir.path(), "03.png", 30, 30);

    let sources =
        resolve_sources(&[dir.path().to_path_buf()], &[], None).expect("directory should scan");
    assert_eq!(sources.len(), 3);

    let images: Vec<ImageData> = load_all(sources).await.expect("all images load");
    assert_eq!(
        images.iter().map(|i| (i.width, i.height)).collect::<Vec<_>>(),
        vec![(40, 20), (20, 40), (30, 30)]
    );

    let mut state = wall::State::new(5.0, Size::new(1000.0, 700.0));
    state.set_images(images, vec![0, 1, 2]);
    assert_eq!(state.layout().columns(), 3);

    // Clicking the middle of the first tile opens it.
    let first = state.layout().placement_of(0).expect("first tile placed").bounds;
    let target = first.center();
    state.handle(wall::Message::PointerPressed(target));
    let effect = state.handle(wall::Message::PointerReleased(target));
    assert_eq!(effect, wall::Effect::OpenDetail(0));
}

#[tokio::test]
async fn one_broken_file_fails_the_whole_load() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let good = write_png(dir.path(), "good.png", 8, 8);
    let missing = dir.path().join("missing.png");

    let error = load_all(vec![good, missing.clone()])
        .await
        .expect_err("missing file must fail the load");
    assert!(error.to_string().contains("missing.png"));
}
