use sprig_core::Color;
use sprig_desktop::{FramePacer, StageConfig, StageError};
use std::time::{Duration, Instant};

#[test]
fn test_default_config() {
    let config = StageConfig::default();
    assert_eq!(config.title, "Container Display");
    assert_eq!(config.window_size, (800, 600));
    assert_eq!(config.background, Color::rgb(30, 30, 30));
    assert_eq!(config.frame_rate, 60);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_from_json_fills_defaults() {
    let config =
        StageConfig::from_json_str(r##"{ "window_size": [300, 300], "background": "#000000" }"##)
            .unwrap();
    assert_eq!(config.window_size, (300, 300));
    assert_eq!(config.background, Color::BLACK);
    assert_eq!(config.frame_rate, 60);
    assert_eq!(config.title, "Container Display");
}

#[test]
fn test_config_from_json_is_validated() {
    assert!(matches!(
        StageConfig::from_json_str(r#"{ "frame_rate": 0 }"#),
        Err(StageError::InvalidFrameRate)
    ));
    assert!(matches!(
        StageConfig::from_json_str(r#"{ "background": "mauve-ish" }"#),
        Err(StageError::Json(_))
    ));
    assert!(matches!(
        StageConfig::from_json_file("/definitely/not/here.json"),
        Err(StageError::Io(_))
    ));
}

#[test]
fn test_frame_pacer_budget() {
    let pacer = FramePacer::new(50);
    assert_eq!(pacer.budget(), Duration::from_millis(20));
    assert_eq!(pacer.remaining(Instant::now()), Duration::ZERO);
}

#[test]
fn test_frame_pacer_remaining() {
    let mut pacer = FramePacer::new(10);
    let start = Instant::now();
    pacer.mark(start);

    assert_eq!(
        pacer.remaining(start + Duration::from_millis(30)),
        Duration::from_millis(70)
    );
    assert_eq!(pacer.remaining(start + Duration::from_millis(250)), Duration::ZERO);
}

#[test]
fn test_frame_pacer_wait_sleeps_out_the_frame() {
    let mut pacer = FramePacer::new(100);
    pacer.wait();
    let before = Instant::now();
    pacer.wait();
    assert!(before.elapsed() >= Duration::from_millis(5));
}
