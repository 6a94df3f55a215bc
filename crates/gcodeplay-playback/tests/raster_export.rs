//! Raster surface rendering and PNG export tests.

use std::time::Duration;

use gcodeplay_core::{parse, samples, PlaybackSettings};
use gcodeplay_playback::{
    play, shared_surface, DrawingSurface, PlaybackError, RasterSurface, SessionState,
};
use image::GenericImageView;

const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

#[test]
fn test_export_before_any_drawing_is_recoverable() {
    let surface = RasterSurface::new();
    assert!(matches!(
        surface.export_image(),
        Err(PlaybackError::SurfaceNotReady)
    ));
}

#[test]
fn test_export_produces_decodable_png() {
    let mut surface = RasterSurface::new();
    surface.clear();
    surface.draw_grid();

    let bytes = surface.export_image().unwrap();
    assert_eq!(&bytes[..8], &PNG_MAGIC);

    let decoded = image::load_from_memory(&bytes).unwrap();
    assert_eq!(decoded.dimensions(), (500, 500));
}

#[tokio::test(start_paused = true)]
async fn test_square_playback_renders_strokes_and_markers() {
    let surface = shared_surface(RasterSurface::new());
    let settings = PlaybackSettings::with_delay(100).unwrap();

    let mut session = play(parse(samples::SQUARE), &settings, surface.clone());
    session.wait().await;
    assert_eq!(session.state(), SessionState::Complete);

    let bytes = surface.lock().export_image().unwrap();
    let decoded = image::load_from_memory(&bytes).unwrap();

    // Top edge of the square: white stroke along y = 250
    assert_eq!(decoded.get_pixel(275, 250).0, [0xff, 0xff, 0xff, 0xff]);
    // Final marker sits at the origin
    assert_eq!(decoded.get_pixel(250, 250).0, [0xff, 0x00, 0x00, 0xff]);
    // Grid survives playback
    assert_eq!(decoded.get_pixel(25, 13).0, [0x55, 0x55, 0x55, 0xff]);
}

#[tokio::test(start_paused = true)]
async fn test_export_after_reset_matches_clear_plus_grid() {
    let mut baseline = RasterSurface::new();
    baseline.clear();
    baseline.draw_grid();
    let baseline_bytes = baseline.export_image().unwrap();

    let surface = shared_surface(RasterSurface::new());
    let settings = PlaybackSettings::with_delay(100).unwrap();

    let mut session = play(parse(samples::STAR), &settings, surface.clone());
    tokio::time::sleep(Duration::from_millis(350)).await;
    session.reset();

    let bytes = surface.lock().export_image().unwrap();
    assert_eq!(bytes, baseline_bytes);
}

#[tokio::test(start_paused = true)]
async fn test_exported_image_round_trips_through_disk() {
    let surface = shared_surface(RasterSurface::new());
    let settings = PlaybackSettings::with_delay(100).unwrap();

    let mut session = play(parse(samples::STAR), &settings, surface.clone());
    session.wait().await;

    let bytes = surface.lock().export_image().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("star.png");
    std::fs::write(&path, &bytes).unwrap();

    let decoded = image::open(&path).unwrap();
    assert_eq!(decoded.dimensions(), (500, 500));
}
