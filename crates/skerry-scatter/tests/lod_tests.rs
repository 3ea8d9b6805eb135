use skerry_scatter::lod::LodBands;

#[test]
fn cuts_build_contiguous_bands() {
    let bands = LodBands::from_cuts(&[0.0, 50.0, 100.0, 1000.0]);
    assert_eq!(bands.len(), 3);
    assert_eq!(bands.bands()[0].min_dist, 0.0);
    assert_eq!(bands.bands()[0].max_dist, 50.0);
    assert_eq!(bands.bands()[2].max_dist, 1000.0);
}

#[test]
fn select_is_half_open() {
    let bands = LodBands::from_cuts(&[0.0, 50.0, 100.0, 1000.0]);
    assert_eq!(bands.select(0.0), Some(0));
    assert_eq!(bands.select(49.99), Some(0));
    // A boundary distance belongs to exactly the farther tier.
    assert_eq!(bands.select(50.0), Some(1));
    assert_eq!(bands.select(99.99), Some(1));
    assert_eq!(bands.select(100.0), Some(2));
    assert_eq!(bands.select(999.99), Some(2));
}

#[test]
fn beyond_outermost_band_is_culled() {
    let bands = LodBands::from_cuts(&[0.0, 50.0, 100.0]);
    assert_eq!(bands.select(100.0), None);
    assert_eq!(bands.select(5000.0), None);
}

#[test]
fn every_distance_hits_at_most_one_band() {
    let bands = LodBands::from_cuts(&[0.0, 50.0, 100.0, 1000.0]);
    let mut d = 0.0f32;
    while d < 1200.0 {
        let hits = bands
            .bands()
            .iter()
            .filter(|b| b.contains(d))
            .count();
        assert!(hits <= 1, "distance {} hit {} bands", d, hits);
        d += 0.37;
    }
}

#[test]
fn non_ascending_cuts_truncate() {
    let bands = LodBands::from_cuts(&[0.0, 50.0, 50.0, 100.0]);
    assert_eq!(bands.len(), 1);
    let empty = LodBands::from_cuts(&[10.0]);
    assert!(empty.is_empty());
    assert_eq!(empty.select(5.0), None);
}
