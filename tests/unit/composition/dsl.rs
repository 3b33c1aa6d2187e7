use super::*;
use crate::foundation::core::Rgba8;

fn logo() -> Asset {
    Asset::Image {
        source: "logo.png".to_string(),
        width: 512,
        height: 512,
    }
}

#[test]
fn builders_create_expected_structure() {
    let watermark = ClipBuilder::new(
        "watermark",
        ClipContent::Image {
            asset: logo(),
            fit: crate::composition::model::Fit::Contain,
            width_frac: Some(0.1),
        },
        0.0,
        9.0,
    )
    .anchor(Anchor::TopLeft)
    .inset_px(20.0)
    .opacity(Anim::constant(0.35))
    .build()
    .unwrap();

    let comp = CompositionBuilder::new(
        "main",
        Resolution {
            width: 1080,
            height: 1920,
        },
        9.0,
    )
    .track(
        TrackBuilder::new("watermark")
            .z_base(10)
            .clip(watermark)
            .build()
            .unwrap(),
    )
    .audio(Asset::Audio {
        source: "voice.mp3".to_string(),
        duration_sec: 9.0,
    })
    .build()
    .unwrap();

    assert_eq!(comp.tracks.len(), 1);
    assert_eq!(comp.tracks[0].z_base, 10);
    assert!(comp.audio.is_some());
}

#[test]
fn clip_builder_rejects_zero_duration() {
    let result = ClipBuilder::new(
        "fill",
        ClipContent::Fill {
            color: Rgba8::BLACK,
        },
        0.0,
        0.0,
    )
    .build();
    assert!(matches!(result, Err(VreelError::InvalidComposition(_))));
}

#[test]
fn track_builder_rejects_blank_name() {
    assert!(TrackBuilder::new("  ").build().is_err());
}

#[test]
fn composition_builder_validates_nested_clips() {
    let too_long = ClipBuilder::new(
        "fill",
        ClipContent::Fill {
            color: Rgba8::BLACK,
        },
        0.0,
        5.0,
    )
    .build()
    .unwrap();

    let result = CompositionBuilder::new(
        "main",
        Resolution {
            width: 1080,
            height: 1920,
        },
        3.0,
    )
    .track(TrackBuilder::new("fills").clip(too_long).build().unwrap())
    .build();
    assert!(result.is_err());
}
