//! Serde round-trip and clock tests for the shared vocabulary.

use crate::commands::DriverCommand;
use crate::state::{ObservationSnapshot, VesselView};
use crate::types::{RiskRecord, SimClock, Waypoint};

#[test]
fn test_waypoint_serializes_as_two_element_array() {
    let wp = Waypoint::new(430_000.0, 5_555_000.0);
    let json = serde_json::to_string(&wp).unwrap();
    assert_eq!(json, "[430000.0,5555000.0]");

    let back: Waypoint = serde_json::from_str(&json).unwrap();
    assert_eq!(back, wp);
}

#[test]
fn test_waypoint_with_speed_serializes_as_three_element_array() {
    let wp = Waypoint::with_speed(100.0, 200.0, 8.5);
    let json = serde_json::to_string(&wp).unwrap();
    assert_eq!(json, "[100.0,200.0,8.5]");

    let back: Waypoint = serde_json::from_str(&json).unwrap();
    assert_eq!(back.speed_kn, Some(8.5));
}

#[test]
fn test_waypoint_rejects_short_arrays() {
    assert!(serde_json::from_str::<Waypoint>("[1.0]").is_err());
    assert!(serde_json::from_str::<Waypoint>("[]").is_err());
}

#[test]
fn test_driver_command_serde_tagged() {
    let commands = vec![
        DriverCommand::SetWaypoints {
            vessel_id: "ownship".into(),
            waypoints: vec![Waypoint::new(1.0, 2.0), Waypoint::with_speed(3.0, 4.0, 6.0)],
        },
        DriverCommand::SetSpeed {
            vessel_id: "target_1".into(),
            speed_mps: 4.2,
        },
        DriverCommand::SetCourse {
            vessel_id: "target_1".into(),
            course_deg: 270.0,
        },
    ];
    for cmd in &commands {
        let json = serde_json::to_string(cmd).unwrap();
        assert!(json.contains("\"type\""), "tagged representation: {json}");
        let back: DriverCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(json, serde_json::to_string(&back).unwrap());
    }
}

#[test]
fn test_snapshot_serde_roundtrip() {
    let mut snapshot = ObservationSnapshot {
        elapsed_time_s: 12.0,
        ..Default::default()
    };
    snapshot.vessels.insert(
        "ownship".into(),
        VesselView {
            position: [10.0, 20.0],
            course_deg: 45.0,
            speed_kn: 10.0,
            speed_mps: 5.14444,
            waypoints: vec![Waypoint::new(10.0, 20.0), Waypoint::new(500.0, 900.0)],
            risk: [(
                "target_1".to_string(),
                RiskRecord {
                    cpa_m: 120.0,
                    cpa_yds: 131.2332,
                    tcpa_s: 42.0,
                    range_m: 800.0,
                    range_yds: 874.888,
                    bearing_deg: 95.0,
                },
            )]
            .into(),
        },
    );

    let json = serde_json::to_string(&snapshot).unwrap();
    let back: ObservationSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(json, serde_json::to_string(&back).unwrap());
    assert_eq!(back.vessels["ownship"].risk["target_1"].tcpa_s, 42.0);
}

#[test]
fn test_snapshot_map_ordering_is_stable() {
    let mut snapshot = ObservationSnapshot::default();
    for id in ["charlie", "alpha", "bravo"] {
        snapshot.vessels.insert(id.into(), VesselView::default());
    }
    let json = serde_json::to_string(&snapshot).unwrap();
    let alpha = json.find("alpha").unwrap();
    let bravo = json.find("bravo").unwrap();
    let charlie = json.find("charlie").unwrap();
    assert!(alpha < bravo && bravo < charlie, "keys should be sorted");
}

#[test]
fn test_infinite_tcpa_serializes_as_null() {
    let record = RiskRecord {
        cpa_m: 500.0,
        cpa_yds: 546.805,
        tcpa_s: f64::INFINITY,
        range_m: 500.0,
        range_yds: 546.805,
        bearing_deg: 0.0,
    };
    let json = serde_json::to_string(&record).unwrap();
    assert!(json.contains("\"tcpa_s\":null"), "got {json}");
}

#[test]
fn test_sim_clock_advance() {
    let mut clock = SimClock::new(0.5);
    for _ in 0..10 {
        clock.advance();
    }
    assert_eq!(clock.tick, 10);
    assert!((clock.elapsed_secs - 5.0).abs() < 1e-12);
}

#[test]
fn test_sim_clock_seek() {
    let mut clock = SimClock::new(2.0);
    clock.seek(120.0);
    assert_eq!(clock.tick, 60);
    assert_eq!(clock.elapsed_secs, 120.0);

    // Seeking backwards is allowed; the clock holds whatever it is told.
    clock.seek(10.0);
    assert_eq!(clock.tick, 5);
    assert_eq!(clock.elapsed_secs, 10.0);
}
