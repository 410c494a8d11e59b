//! 압력 범위 표 생성/CSV 내보내기 테스트.
use saturated_steam_tables::steam::{
    build_range, build_range_with, Region4Curve, SteamError, CSV_HEADER,
};

#[test]
fn one_to_ten_bar_in_ten_points() {
    let table = build_range(1.0, 10.0, 10).expect("range");
    assert_eq!(table.len(), 10);
    assert_eq!(table.points[0].pressure_bar, 1.0);
    assert_eq!(table.points[9].pressure_bar, 10.0);
    for (i, p) in table.points.iter().enumerate() {
        assert!((p.pressure_bar - (1.0 + i as f64)).abs() < 1e-12);
    }
    for w in table.points.windows(2) {
        assert!(w[1].temperature_celsius >= w[0].temperature_celsius);
    }
}

#[test]
fn descending_range_keeps_order() {
    let table = build_range(10.0, 1.0, 4).unwrap();
    let pressures: Vec<f64> = table.points.iter().map(|p| p.pressure_bar).collect();
    assert_eq!(pressures, vec![10.0, 7.0, 4.0, 1.0]);
    for w in table.points.windows(2) {
        assert!(w[1].temperature_celsius < w[0].temperature_celsius);
    }
}

#[test]
fn equal_endpoints_repeat_the_same_point() {
    let table = build_range(5.0, 5.0, 3).unwrap();
    assert_eq!(table.len(), 3);
    let first = table.points[0];
    for p in &table.points {
        assert_eq!(p.pressure_bar, 5.0);
        assert_eq!(p.temperature_celsius, first.temperature_celsius);
    }
}

#[test]
fn single_point_is_the_start_pressure() {
    let table = build_range(2.0, 8.0, 1).unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(table.points[0].pressure_bar, 2.0);
}

#[test]
fn zero_points_is_degenerate() {
    assert_eq!(
        build_range(1.0, 10.0, 0),
        Err(SteamError::DegenerateRange { num_points: 0 })
    );
}

#[test]
fn one_bad_point_fails_the_whole_table() {
    // 0 bar 는 포화선 밖이므로 표 전체가 실패해야 한다.
    assert!(matches!(
        build_range(0.0, 10.0, 5),
        Err(SteamError::InvalidPressureDomain(p)) if p == 0.0
    ));
}

#[test]
fn csv_export_matches_table() {
    let table = build_range_with(&Region4Curve, 1.0, 3.0, 3).unwrap();
    let csv = table.to_csv_string().unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], CSV_HEADER.join(","));
    assert_eq!(lines.len(), 4);
    for (line, p) in lines[1..].iter().zip(&table.points) {
        let (pressure, temp) = line.split_once(',').expect("two columns");
        assert_eq!(pressure.parse::<f64>().unwrap(), p.pressure_bar);
        assert_eq!(temp.parse::<f64>().unwrap(), p.temperature_celsius);
    }
}

#[test]
fn plot_points_follow_table_order() {
    let table = build_range(1.0, 2.0, 2).unwrap();
    let pts = table.plot_points();
    assert_eq!(pts.len(), 2);
    assert_eq!(pts[0][0], 1.0);
    assert_eq!(pts[1][0], 2.0);
}
