//! End-to-end replay of the built-in samples.

use gcodeplay::{
    parse, shared_surface, PlaybackSettings, Player, RasterSurface, Sample, SessionState,
};

#[tokio::test(start_paused = true)]
async fn test_square_replay_writes_png() {
    let mut player = Player::new(shared_surface(RasterSurface::new()));
    let settings = PlaybackSettings::with_delay(100).unwrap();

    let session = player.play(parse(Sample::Square.text()), &settings);
    let id = session.id();
    player.wait().await;

    let session = player.session().unwrap();
    assert_eq!(session.id(), id);
    assert_eq!(session.state(), SessionState::Complete);
    assert_eq!(session.pen_position(), (250.0, 250.0));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("square.png");
    std::fs::write(&path, player.export_image().unwrap()).unwrap();
    assert!(path.metadata().unwrap().len() > 0);
}

#[tokio::test(start_paused = true)]
async fn test_star_replay_terminates_on_first_target() {
    let mut player = Player::new(shared_surface(RasterSurface::new()));
    let settings = PlaybackSettings::default();

    player.play(parse(Sample::Star.text()), &settings);
    player.wait().await;

    let session = player.session().unwrap();
    assert_eq!(session.state(), SessionState::Complete);
    assert_eq!(session.pen_position(), (250.0, 200.0));
}
