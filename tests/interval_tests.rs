use gapfill::core::interval::{Interval, merge};

fn iv(start: u16, end: u16) -> Interval {
    Interval::new(start, end).expect("valid interval")
}

#[test]
fn test_new_rejects_inverted_bounds() {
    assert!(Interval::new(600, 540).is_err());
}

#[test]
fn test_new_rejects_out_of_range_end() {
    assert!(Interval::new(0, 1441).is_err());
    assert!(Interval::new(1441, 1441).is_err());
}

#[test]
fn test_new_accepts_full_day_and_empty() {
    assert_eq!(iv(0, 1440).len(), 1440);
    assert!(iv(540, 540).is_empty());
}

#[test]
fn test_display_renders_hhmm_range() {
    assert_eq!(iv(540, 1080).to_string(), "09:00-18:00");
    assert_eq!(iv(0, 1440).to_string(), "00:00-24:00");
}

#[test]
fn test_merge_output_is_sorted_and_disjoint() {
    let merged = merge(vec![iv(700, 750), iv(540, 600), iv(720, 780), iv(300, 400)]);

    for pair in merged.windows(2) {
        // strictly disjoint, not even touching
        assert!(pair[0].end() < pair[1].start());
    }
    assert_eq!(merged, vec![iv(300, 400), iv(540, 600), iv(700, 780)]);
}

#[test]
fn test_merge_preserves_total_covered_minutes() {
    let input = vec![iv(540, 600), iv(590, 660), iv(700, 750), iv(720, 780)];

    // union computed the dumb way, minute by minute
    let mut covered = [false; 1440];
    for span in &input {
        for m in span.start()..span.end() {
            covered[m as usize] = true;
        }
    }
    let expected: u16 = covered.iter().filter(|c| **c).count() as u16;

    let total: u16 = merge(input).iter().map(|s| s.len()).sum();
    assert_eq!(total, expected);
}

#[test]
fn test_merge_joins_touching_spans() {
    // back-to-back entries must not leave a zero-length seam
    let merged = merge(vec![iv(540, 600), iv(600, 660)]);
    assert_eq!(merged, vec![iv(540, 660)]);
}

#[test]
fn test_merge_drops_empty_spans() {
    let merged = merge(vec![iv(540, 540), iv(600, 660)]);
    assert_eq!(merged, vec![iv(600, 660)]);
}

#[test]
fn test_merge_handles_containment() {
    let merged = merge(vec![iv(540, 1080), iv(600, 660)]);
    assert_eq!(merged, vec![iv(540, 1080)]);
}

#[test]
fn test_clip_to_intersects() {
    assert_eq!(iv(500, 700).clip_to(iv(540, 1080)), Some(iv(540, 700)));
    assert_eq!(iv(0, 300).clip_to(iv(540, 1080)), None);
    // touching only → empty intersection
    assert_eq!(iv(0, 540).clip_to(iv(540, 1080)), None);
}
