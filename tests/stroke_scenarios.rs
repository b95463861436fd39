//! End-to-end stroke scenarios for the stabilizer engine

use stroke_stabilizer::processing::filters::FilterState;
use stroke_stabilizer::{Algorithm, Axis, InputReport, StabilizerConfig, StrokeSession, ToolKey};

fn frame(x: i32, y: i32, pressure: i32, t: f64) -> Vec<InputReport> {
    vec![
        InputReport::axis(Axis::X, x, t),
        InputReport::axis(Axis::Y, y, t),
        InputReport::axis(Axis::Pressure, pressure, t),
        InputReport::frame_end(t),
    ]
}

fn position(batch: &[InputReport]) -> (i32, i32) {
    let find = |axis| {
        batch
            .iter()
            .find(|r| r.axis_kind() == Some(axis))
            .map(|r| r.value)
            .unwrap()
    };
    (find(Axis::X), find(Axis::Y))
}

fn tether_anchor(session: &StrokeSession) -> Option<(f64, f64)> {
    match session.filter_state() {
        FilterState::Tether(tether) => tether.anchor(),
        other => panic!("expected tether state, got {:?}", other),
    }
}

// ============================================================================
// TETHER
// ============================================================================

#[test]
fn test_tether_scenario_at_half_strength() {
    let config = StabilizerConfig::new(Algorithm::Tether, 0.5);
    assert!((config.params().tether_length - 550.0).abs() < 1e-9);
    let mut session = StrokeSession::new(config);

    let mut first = frame(0, 0, 1000, 0.000);
    session.process_batch(&mut first);
    assert_eq!(position(&first), (0, 0));
    assert_eq!(tether_anchor(&session), Some((0.0, 0.0)));

    let mut second = frame(5, 5, 1000, 0.005);
    session.process_batch(&mut second);
    assert_eq!(position(&second), (0, 0), "7.07 units is inside the dead zone");
    assert_eq!(tether_anchor(&session), Some((0.0, 0.0)));

    let mut third = frame(700, 700, 1000, 0.010);
    session.process_batch(&mut third);

    let (ax, ay) = tether_anchor(&session).unwrap();
    let remaining = ((700.0 - ax).powi(2) + (700.0 - ay).powi(2)).sqrt();
    assert!(
        (remaining - 550.0).abs() < 1e-9,
        "anchor should be 550 from the pen, got {}",
        remaining
    );
    assert!((ax - ay).abs() < 1e-9, "anchor should stay on the diagonal");

    // 982 - 550 = 432 units along the diagonal
    let travelled = (ax * ax + ay * ay).sqrt();
    let expected = (2.0f64).sqrt() * 700.0 - 550.0;
    assert!((travelled - expected).abs() < 1e-9);

    let expected_coord = (expected / 2.0f64.sqrt() + 0.5).floor() as i32;
    assert_eq!(position(&third), (expected_coord, expected_coord));
}

#[test]
fn test_tether_holds_still_inside_radius() {
    let mut session = StrokeSession::new(StabilizerConfig::new(Algorithm::Tether, 0.2));
    let radius = session.config().params().tether_length;

    session.process_batch(&mut frame(5000, 5000, 1000, 0.0));
    for i in 1..300 {
        let angle = i as f64 * 2.3;
        let r = (radius - 1.0) * ((i * 37 % 100) as f64 / 100.0);
        let x = 5000 + (r * angle.cos()) as i32;
        let y = 5000 + (r * angle.sin()) as i32;
        let mut batch = frame(x, y, 1000, i as f64 * 0.002);
        session.process_batch(&mut batch);
        assert_eq!(position(&batch), (5000, 5000), "moved at step {}", i);
    }
}

// ============================================================================
// CONTACT LOSS
// ============================================================================

#[test]
fn test_contact_loss_starts_clean_stroke() {
    let mut session = StrokeSession::new(StabilizerConfig::new(Algorithm::Tether, 0.5));
    session.process_batch(&mut frame(0, 0, 1000, 0.0));
    session.process_batch(&mut frame(2000, 0, 1000, 0.005));
    assert_eq!(tether_anchor(&session), Some((1450.0, 0.0)));

    // Lift: pressure drops below the contact threshold
    let mut lift = frame(2000, 0, 20, 0.010);
    session.process_batch(&mut lift);
    assert_eq!(lift[0].value, 2000, "reports before the lift are not patched");
    assert!(session.history().is_empty());
    assert_eq!(tether_anchor(&session), None);

    let mut touch = frame(-3000, 800, 1000, 0.500);
    session.process_batch(&mut touch);
    assert_eq!(position(&touch), (-3000, 800));
    assert_eq!(tether_anchor(&session), Some((-3000.0, 800.0)));
    assert_eq!(session.history().len(), 1);
}

#[test]
fn test_tool_release_between_frames_in_one_batch() {
    let mut session = StrokeSession::new(StabilizerConfig::new(Algorithm::WindowAverage, 1.0));
    let mut batch = Vec::new();
    for i in 0..10 {
        batch.extend(frame(i * 10, 0, 1000, i as f64 * 0.005));
    }
    batch.push(InputReport::key(ToolKey::Pen, 0, 0.05));
    batch.extend(frame(9000, 9000, 1000, 0.3));

    session.process_batch(&mut batch);

    let tail = &batch[batch.len() - 4..];
    assert_eq!(position(tail), (9000, 9000), "new stroke must not average with the old one");
    assert_eq!(session.history().len(), 1);
}

// ============================================================================
// CONVERGENCE
// ============================================================================

#[test]
fn test_constant_input_converges_for_every_algorithm() {
    for algorithm in [
        Algorithm::WindowAverage,
        Algorithm::WeightedAverage,
        Algorithm::AdaptiveLowPass,
        Algorithm::Tether,
    ] {
        let mut session = StrokeSession::new(StabilizerConfig::new(algorithm, 0.5));
        session.process_batch(&mut frame(0, 0, 1000, 0.0));

        let mut last = (0, 0);
        for i in 1..2000 {
            let mut batch = frame(1234, -567, 1000, i as f64 * 0.002);
            session.process_batch(&mut batch);
            last = position(&batch);
        }

        match algorithm {
            // The tether parks exactly one string length short of the pen
            Algorithm::Tether => {
                let dx = (1234 - last.0) as f64;
                let dy = (-567 - last.1) as f64;
                assert!(((dx * dx + dy * dy).sqrt() - 550.0).abs() < 1.0);
            }
            _ => assert_eq!(last, (1234, -567), "{} did not converge", algorithm),
        }
    }
}

#[test]
fn test_adaptive_low_pass_first_sample_is_raw() {
    let mut session = StrokeSession::new(StabilizerConfig::new(Algorithm::AdaptiveLowPass, 1.0));
    let mut batch = frame(4321, 1234, 1000, 3.0);
    session.process_batch(&mut batch);
    assert_eq!(position(&batch), (4321, 1234));
}

// ============================================================================
// PASS-THROUGH
// ============================================================================

#[test]
fn test_off_is_identity() {
    let mut session = StrokeSession::new(
        StabilizerConfig::new(Algorithm::Off, 1.0)
            .with_pressure_smoothing(true)
            .with_tilt_smoothing(true),
    );
    let mut batch = Vec::new();
    for i in 0..20 {
        batch.extend(frame(i * 37 % 11, i * 91 % 13, 40 + i, i as f64 * 0.001));
    }
    batch.push(InputReport::key(ToolKey::Pen, 0, 0.5));
    let original = batch.clone();

    session.process_batch(&mut batch);
    assert_eq!(batch, original);
}

#[test]
fn test_report_count_and_order_preserved() {
    let mut session = StrokeSession::new(StabilizerConfig::new(Algorithm::WeightedAverage, 0.8));
    let mut batch = Vec::new();
    for i in 0..30 {
        batch.extend(frame(i * 25, i * 5, 1000 + i, i as f64 * 0.003));
    }
    let original = batch.clone();

    session.process_batch(&mut batch);

    assert_eq!(batch.len(), original.len());
    for (out, raw) in batch.iter().zip(&original) {
        assert_eq!(out.kind, raw.kind);
        assert_eq!(out.timestamp, raw.timestamp);
        if out.axis_kind() == Some(Axis::Pressure) {
            assert_eq!(out.value, raw.value, "pressure smoothing is off");
        }
    }
}
