use super::*;
use crate::subtitle::segment::TimedWord;

fn inputs() -> TimelineInputs {
    TimelineInputs {
        audio_duration_sec: 9.0,
        visuals: (0..3)
            .map(|i| Asset::Image {
                source: format!("visual_{i}.jpg"),
                width: 1200,
                height: 800,
            })
            .collect(),
        subtitles: SubtitleSource::WordTimed(vec![
            TimedWord::new("Hello", 0.0, 1.0).unwrap(),
            TimedWord::new("world", 1.0, 2.0).unwrap(),
        ]),
        logo: Asset::Image {
            source: "logo.png".to_string(),
            width: 512,
            height: 512,
        },
        audio: Some(Asset::Audio {
            source: "voice.mp3".to_string(),
            duration_sec: 9.0,
        }),
    }
}

#[test]
fn builds_main_plus_outro() {
    let cfg = EngineConfig::default();
    let timeline = build_timeline(&inputs(), &cfg).unwrap();
    timeline.validate().unwrap();
    assert_eq!(timeline.entries.len(), 2);
    assert_eq!(timeline.entries[0].composition.name, "main");
    assert_eq!(timeline.entries[1].composition.name, "outro");
    assert_eq!(timeline.entries[1].offset_sec, 9.0);
    assert_eq!(timeline.total_duration_sec, 10.5);
}

#[test]
fn no_visuals_is_fatal_with_no_partial_result() {
    let mut bad = inputs();
    bad.visuals.clear();
    let err = build_timeline(&bad, &EngineConfig::default());
    assert!(matches!(err, Err(VreelError::EmptyInput(_))));
}

#[test]
fn zero_audio_duration_is_rejected() {
    let mut bad = inputs();
    bad.audio_duration_sec = 0.0;
    assert!(build_timeline(&bad, &EngineConfig::default()).is_err());
}

#[test]
fn visual_asset_as_soundtrack_is_rejected() {
    let mut bad = inputs();
    bad.audio = Some(Asset::Image {
        source: "oops.png".to_string(),
        width: 1,
        height: 1,
    });
    assert!(build_timeline(&bad, &EngineConfig::default()).is_err());
}

#[test]
fn invalid_config_is_rejected_before_any_work() {
    let cfg = EngineConfig {
        outro_duration_sec: 0.0,
        ..EngineConfig::default()
    };
    assert!(build_timeline(&inputs(), &cfg).is_err());
}
