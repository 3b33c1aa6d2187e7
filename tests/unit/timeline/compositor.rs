use super::*;
use crate::{
    foundation::core::Anchor,
    subtitle::highlight::{SubtitleSource, build_subtitle_clips},
    subtitle::segment::TimedWord,
    timeline::visual::build_visual_track,
};

fn logo() -> Asset {
    Asset::Image {
        source: "logo.png".to_string(),
        width: 512,
        height: 512,
    }
}

fn main_comp(cfg: &EngineConfig) -> Composition {
    let total = 9.0;
    let visuals = vec![Asset::Image {
        source: "visual_0.jpg".to_string(),
        width: 1200,
        height: 800,
    }];
    let visual_track = build_visual_track(&visuals, total).unwrap();
    let words = vec![TimedWord::new("Hello", 0.0, 1.0).unwrap()];
    let subtitles =
        build_subtitle_clips(&SubtitleSource::WordTimed(words), total, cfg).unwrap();
    let audio = Asset::Audio {
        source: "voice.mp3".to_string(),
        duration_sec: total,
    };
    compose_main(visual_track, subtitles, &logo(), Some(audio), total, cfg).unwrap()
}

#[test]
fn layer_order_is_visuals_watermark_subtitles() {
    let comp = main_comp(&EngineConfig::default());
    let names: Vec<&str> = comp.tracks.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["visuals", "watermark", "subtitles"]);
    let z: Vec<i32> = comp.tracks.iter().map(|t| t.z_base).collect();
    assert!(z.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(comp.tracks[2].z_base, SUBTITLE_Z_BASE);
}

#[test]
fn watermark_spans_whole_duration_with_configured_style() {
    let cfg = EngineConfig::default();
    let comp = main_comp(&cfg);
    let watermark = &comp.tracks[1].clips[0];
    assert_eq!(watermark.start_sec, 0.0);
    assert_eq!(watermark.duration_sec, comp.duration_sec);
    assert_eq!(watermark.anchor, cfg.watermark_anchor);
    assert_eq!(watermark.inset_px, cfg.watermark_margin_px);
    assert_eq!(watermark.opacity.sample(0.0), cfg.watermark_opacity);
    match &watermark.content {
        ClipContent::Image { width_frac, .. } => {
            assert_eq!(*width_frac, Some(cfg.watermark_scale));
        }
        other => panic!("expected image content, got {other:?}"),
    }
}

#[test]
fn audio_reference_travels_on_the_composition() {
    let comp = main_comp(&EngineConfig::default());
    assert!(matches!(comp.audio, Some(Asset::Audio { .. })));
}

#[test]
fn watermark_anchor_is_configurable() {
    let cfg = EngineConfig {
        watermark_anchor: Anchor::TopRight,
        ..EngineConfig::default()
    };
    let comp = main_comp(&cfg);
    assert_eq!(comp.tracks[1].clips[0].anchor, Anchor::TopRight);
}

#[test]
fn non_visual_logo_is_rejected() {
    let cfg = EngineConfig::default();
    let visuals = vec![Asset::Image {
        source: "visual_0.jpg".to_string(),
        width: 1200,
        height: 800,
    }];
    let visual_track = build_visual_track(&visuals, 9.0).unwrap();
    let bad_logo = Asset::Audio {
        source: "voice.mp3".to_string(),
        duration_sec: 9.0,
    };
    let result = compose_main(visual_track, Vec::new(), &bad_logo, None, 9.0, &cfg);
    assert!(result.is_err());
}
