use super::*;

fn visuals(n: usize) -> Vec<Asset> {
    (0..n)
        .map(|i| Asset::Image {
            source: format!("visual_{i}.jpg"),
            width: 1200,
            height: 800,
        })
        .collect()
}

#[test]
fn nine_seconds_across_three_assets() {
    let track = build_visual_track(&visuals(3), 9.0).unwrap();
    assert_eq!(track.clips.len(), 3);
    assert_eq!(track.z_base, VISUAL_Z_BASE);
    for (i, clip) in track.clips.iter().enumerate() {
        assert_eq!(clip.start_sec, i as f64 * 3.0);
        assert_eq!(clip.duration_sec, 3.0);
        assert_eq!(clip.anchor, Anchor::Center);
        match &clip.content {
            ClipContent::Image {
                fit, width_frac, ..
            } => {
                assert_eq!(*fit, Fit::Cover);
                assert!(width_frac.is_none());
            }
            other => panic!("expected image content, got {other:?}"),
        }
    }
}

#[test]
fn tiling_has_no_gaps_or_overlap() {
    for n in [1usize, 2, 5, 7] {
        let total = 10.0;
        let track = build_visual_track(&visuals(n), total).unwrap();
        assert_eq!(track.clips.len(), n);
        let mut expected_start = 0.0;
        for clip in &track.clips {
            assert!((clip.start_sec - expected_start).abs() < 1e-9);
            expected_start = clip.end_sec();
        }
        let sum: f64 = track.clips.iter().map(|c| c.duration_sec).sum();
        assert!((sum - total).abs() < 1e-9);
    }
}

#[test]
fn empty_visuals_fail_with_empty_input() {
    let err = build_visual_track(&[], 9.0);
    assert!(matches!(err, Err(VreelError::EmptyInput(_))));
}

#[test]
fn audio_asset_in_visuals_is_rejected() {
    let mixed = vec![Asset::Audio {
        source: "voice.mp3".to_string(),
        duration_sec: 9.0,
    }];
    assert!(build_visual_track(&mixed, 9.0).is_err());
}

#[test]
fn non_positive_duration_is_invalid_composition() {
    let err = build_visual_track(&visuals(2), 0.0);
    assert!(matches!(err, Err(VreelError::InvalidComposition(_))));
}
