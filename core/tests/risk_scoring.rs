//! Risk scorer tests: bounds, determinism, threshold bands, taxonomy.

use wttm_core::risk::compute_risk;
use wttm_core::sanitizer::Sample;
use wttm_core::threat::ThreatKind;

fn sample(ssid: &str, rssi: f64, channel: Option<i64>) -> Sample {
    Sample {
        position: "P1".into(),
        ssid: ssid.into(),
        rssi,
        channel,
    }
}

/// Spec'd scenario: 3 distinct SSIDs, "A" repeated, all channels distinct,
/// strongest at -55 dBm. Leakage (+30) and Evil Twin (+30) only.
#[test]
fn reference_batch_scores_sixty() {
    let batch = vec![
        sample("AAA", -55.0, Some(1)),
        sample("BBB", -80.0, Some(6)),
        sample("AAA", -55.0, Some(11)),
        sample("CCC", -90.0, Some(3)),
    ];
    let result = compute_risk(&batch);

    assert_eq!(result.risk_score, 60);
    let threats: Vec<&str> = result.threats.iter().map(|t| t.as_str()).collect();
    assert_eq!(threats, ["Evil Twin", "Leakage"]);
    assert_eq!(result.metrics.max_rssi, -55.0);
    assert_eq!(result.metrics.ssid_count, 3);
    assert_eq!(result.metrics.channel_overlap, 1);
    assert_eq!(result.metrics.ssid_repeats, 2);
}

/// Risk never exceeds 100 even when every rule fires.
#[test]
fn risk_capped_at_one_hundred() {
    // 9 distinct strong networks on one channel, plus a repeated SSID:
    // 30 + 20 + 20 + 30 = 100 before the cap.
    let mut batch: Vec<Sample> = (0..9)
        .map(|i| sample(&format!("Net{i}"), -50.0, Some(6)))
        .collect();
    batch.push(sample("Net0", -50.0, Some(6)));

    let result = compute_risk(&batch);
    assert_eq!(result.risk_score, 100);
    assert!(result.risk_score <= 100);
}

/// Permuting the batch changes neither score nor threats.
#[test]
fn score_is_order_independent() {
    let batch = vec![
        sample("AAA", -55.0, Some(1)),
        sample("BBB", -80.0, Some(6)),
        sample("AAA", -55.0, Some(11)),
        sample("CCC", -90.0, Some(3)),
    ];
    let mut reversed = batch.clone();
    reversed.reverse();

    let a = compute_risk(&batch);
    let b = compute_risk(&reversed);
    assert_eq!(a.risk_score, b.risk_score);
    assert_eq!(a.threats, b.threats);
    assert_eq!(a.metrics, b.metrics);
}

/// Scoring twice yields identical results — pure function.
#[test]
fn score_is_idempotent() {
    let batch = vec![sample("AAA", -70.0, Some(1)), sample("BBB", -72.0, Some(1))];
    assert_eq!(compute_risk(&batch), compute_risk(&batch));
}

/// The -75..-60 dBm band adds 15 risk without tagging Leakage.
#[test]
fn elevated_band_untagged() {
    let batch = vec![sample("AAA", -70.0, Some(1))];
    let result = compute_risk(&batch);
    assert_eq!(result.risk_score, 15);
    assert!(result.threats.is_empty());
}

/// Exactly two samples on one channel adds 10 without the overlap tag.
#[test]
fn channel_pair_untagged() {
    let batch = vec![
        sample("AAA", -90.0, Some(6)),
        sample("BBB", -90.0, Some(6)),
    ];
    let result = compute_risk(&batch);
    assert_eq!(result.metrics.channel_overlap, 2);
    assert_eq!(result.risk_score, 10);
    assert!(!result.threats.contains(&ThreatKind::ChannelOverlap));
}

/// Three samples on one channel tags Channel Overlap.
#[test]
fn channel_reuse_tags_overlap() {
    let batch = vec![
        sample("AAA", -90.0, Some(6)),
        sample("BBB", -90.0, Some(6)),
        sample("CCC", -90.0, Some(6)),
    ];
    let result = compute_risk(&batch);
    assert!(result.threats.contains(&ThreatKind::ChannelOverlap));
    assert_eq!(result.risk_score, 20);
}

/// Four distinct SSIDs adds 10; eight tags Congestion.
#[test]
fn ssid_count_bands() {
    let busy: Vec<Sample> = (0..4)
        .map(|i| sample(&format!("Net{i}"), -90.0, Some(i)))
        .collect();
    let result = compute_risk(&busy);
    assert_eq!(result.risk_score, 10);
    assert!(result.threats.is_empty());

    let congested: Vec<Sample> = (0..8)
        .map(|i| sample(&format!("Net{i}"), -90.0, Some(i)))
        .collect();
    let result = compute_risk(&congested);
    assert!(result.threats.contains(&ThreatKind::Congestion));
}

/// Channel-less samples are excluded from the reuse count.
#[test]
fn channelless_samples_excluded_from_overlap() {
    let batch = vec![
        sample("AAA", -90.0, None),
        sample("BBB", -90.0, None),
        sample("CCC", -90.0, None),
    ];
    let result = compute_risk(&batch);
    assert_eq!(result.metrics.channel_overlap, 0);
    assert!(!result.threats.contains(&ThreatKind::ChannelOverlap));
}

/// Threats stay inside the fixed taxonomy and iterate in display order.
#[test]
fn threats_sorted_and_bounded() {
    let mut batch: Vec<Sample> = (0..8)
        .map(|i| sample(&format!("Net{i}"), -50.0, Some(6)))
        .collect();
    batch.push(sample("Net0", -50.0, Some(6)));

    let result = compute_risk(&batch);
    let names: Vec<&str> = result.threats.iter().map(|t| t.as_str()).collect();
    assert_eq!(names, ["Channel Overlap", "Congestion", "Evil Twin", "Leakage"]);
}

/// A quiet location scores zero with an empty threat set.
#[test]
fn quiet_location_scores_zero() {
    let batch = vec![sample("FarAwayNet", -92.0, Some(1))];
    let result = compute_risk(&batch);
    assert_eq!(result.risk_score, 0);
    assert!(result.threats.is_empty());
}

/// An empty batch is a precondition violation.
#[test]
#[should_panic(expected = "empty batch")]
fn empty_batch_panics() {
    compute_risk(&[]);
}
