use super::*;

fn logo() -> Asset {
    Asset::Image {
        source: "logo.png".to_string(),
        width: 512,
        height: 512,
    }
}

#[test]
fn outro_has_background_and_logo_layers() {
    let cfg = EngineConfig::default();
    let outro = build_outro(&logo(), &cfg).unwrap();
    assert_eq!(outro.duration_sec, cfg.outro_duration_sec);
    assert_eq!(outro.tracks.len(), 2);

    let background = &outro.tracks[0].clips[0];
    assert_eq!(background.start_sec, 0.0);
    assert_eq!(background.duration_sec, cfg.outro_duration_sec);
    assert!(matches!(background.content, ClipContent::Fill { .. }));

    let logo_clip = &outro.tracks[1].clips[0];
    assert_eq!(logo_clip.anchor, Anchor::Center);
    match &logo_clip.content {
        ClipContent::Image { width_frac, .. } => {
            assert_eq!(*width_frac, Some(cfg.outro_logo_width_frac));
        }
        other => panic!("expected image content, got {other:?}"),
    }
}

#[test]
fn logo_fades_in_over_the_first_half() {
    let cfg = EngineConfig::default();
    let outro = build_outro(&logo(), &cfg).unwrap();
    let opacity = &outro.tracks[1].clips[0].opacity;
    let half = 0.5 * cfg.outro_duration_sec;
    assert_eq!(opacity.sample(0.0), 0.0);
    assert!((opacity.sample(0.5 * half) - 0.5).abs() < 1e-12);
    assert_eq!(opacity.sample(half), 1.0);
    assert_eq!(opacity.sample(cfg.outro_duration_sec), 1.0);
}

#[test]
fn logo_zooms_linearly_over_the_full_duration() {
    let cfg = EngineConfig::default();
    let outro = build_outro(&logo(), &cfg).unwrap();
    let scale = &outro.tracks[1].clips[0].scale;
    assert_eq!(scale.sample(0.0), 1.0);
    let mid = scale.sample(0.5 * cfg.outro_duration_sec);
    assert!((mid - (1.0 + cfg.outro_zoom_factor) / 2.0).abs() < 1e-12);
    assert_eq!(scale.sample(cfg.outro_duration_sec), cfg.outro_zoom_factor);
}

#[test]
fn outro_is_deterministic() {
    let cfg = EngineConfig::default();
    assert_eq!(build_outro(&logo(), &cfg).unwrap(), build_outro(&logo(), &cfg).unwrap());
}

#[test]
fn non_visual_logo_is_rejected() {
    let audio = Asset::Audio {
        source: "voice.mp3".to_string(),
        duration_sec: 9.0,
    };
    assert!(build_outro(&audio, &EngineConfig::default()).is_err());
}
