//! 포화온도 기준점 회귀 테스트.
use saturated_steam_tables::conversion::convert_pressure;
use saturated_steam_tables::steam::{
    get_saturated_steam, get_saturated_steam_with, if97, lookup, Region4Curve, SaturationCurve,
    Seuif97Curve, SteamError,
};
use saturated_steam_tables::units::{PressureReading, PressureUnit};

fn assert_close(label: &str, actual: f64, expected: f64, abs_tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= abs_tol,
        "{label} expected {expected:.4} got {actual:.4} (diff {diff:.4}, tol {abs_tol})"
    );
}

#[test]
fn one_atmosphere_boils_at_100c() {
    let t = get_saturated_steam(0.101_325).expect("1 atm");
    assert_close("Tsat(1 atm)", t, 100.0, 0.5);
}

#[test]
fn one_megapascal() {
    let t = get_saturated_steam(1.0).expect("1 MPa");
    assert_close("Tsat(1 MPa)", t, 179.9, 0.5);
}

#[test]
fn ten_bar_from_unit_converter() {
    let p = convert_pressure(10.0, Some("bar")).unwrap();
    let t = get_saturated_steam(p).unwrap();
    assert_close("Tsat(10 bar)", t, 179.88, 0.05);
}

#[test]
fn zero_and_negative_pressure_are_domain_errors() {
    for p in [0.0, -0.1, -1e-9] {
        assert_eq!(get_saturated_steam(p), Err(SteamError::InvalidPressureDomain(p)));
    }
}

#[test]
fn beyond_critical_point_is_a_domain_error() {
    assert!(matches!(
        get_saturated_steam(25.0),
        Err(SteamError::InvalidPressureDomain(_))
    ));
    assert!(matches!(
        get_saturated_steam(f64::NAN),
        Err(SteamError::InvalidPressureDomain(_))
    ));
}

#[test]
fn domain_edges_are_accepted() {
    let low = get_saturated_steam_with(&Region4Curve, if97::P_TRIPLE_MPA).expect("triple point");
    assert_close("Tsat(triple)", low, 0.01, 0.05);
    let high =
        get_saturated_steam_with(&Region4Curve, if97::P_CRITICAL_MPA).expect("critical point");
    assert_close("Tsat(critical)", high, 373.946, 0.05);
}

#[test]
fn seuif97_and_region4_agree() {
    for p in [0.001, 0.01, 0.101_325, 0.5, 1.0, 5.0, 10.0, 20.0] {
        let a = Seuif97Curve.saturation_temperature_kelvin(p).unwrap();
        let b = Region4Curve.saturation_temperature_kelvin(p).unwrap();
        assert_close(&format!("p={p}"), a, b, 1e-3);
    }
}

#[test]
fn builtin_curve_can_be_injected() {
    let t = get_saturated_steam_with(&Region4Curve, 0.1).unwrap();
    assert_close("Tsat(0.1 MPa)", t, 372.755_919 - 273.15, 1e-5);
}

#[test]
fn lookup_keeps_the_input_reading() {
    let reading = PressureReading::new(14.7, PressureUnit::Psia);
    let res = lookup(reading, &Seuif97Curve).unwrap();
    assert_eq!(res.pressure_input, reading);
    assert_close("p MPa", res.pressure_mpa, 14.7 * 0.006_894_76, 1e-12);
    assert_close("Tsat(14.7 psia)", res.temperature_celsius, 100.0, 0.5);
}

#[test]
fn negative_reading_never_returns_a_temperature() {
    let reading = PressureReading::new(-3.0, PressureUnit::Bar);
    assert!(matches!(
        lookup(reading, &Seuif97Curve),
        Err(SteamError::InvalidPressureDomain(_))
    ));
}
