//! 압력 단위 환산표 회귀 테스트. 값 1 을 넣으면 표의 배율이 그대로 나와야 한다.
use saturated_steam_tables::conversion::{convert_pressure, ConversionError};
use saturated_steam_tables::units::PressureUnit;

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(f64::MIN_POSITIVE);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:e} got {actual:e} (diff {diff:e}, tol {rel_tol})"
    );
}

#[test]
fn unit_factor_table() {
    let table = [
        ("bar", 0.1),
        ("torr", 1.0 / 7501.0),
        ("mmHg", 1.0 / 7501.0),
        ("atm", 1.0 / 9.869),
        ("psia", 0.006_894_76),
        ("kg/cm2", 0.098_07),
        ("kg/cm2g", 0.1994),
        ("barg", 0.2013),
        ("pa", 1e-6),
    ];
    for (code, factor) in table {
        let mpa = convert_pressure(1.0, Some(code)).expect(code);
        assert_close(code, mpa, factor, 1e-12);
    }
}

#[test]
fn bar_is_exact() {
    assert_eq!(convert_pressure(1.0, Some("bar")), Ok(0.1));
}

#[test]
fn every_enum_unit_is_reachable_by_code() {
    for unit in PressureUnit::ALL {
        let mpa = convert_pressure(2.0, Some(unit.code())).unwrap();
        assert_close(unit.code(), mpa, 2.0 * unit.mpa_factor(), 1e-12);
    }
}

#[test]
fn kpa_is_rejected_instead_of_passed_through() {
    assert_eq!(
        convert_pressure(101.325, Some("kPa")),
        Err(ConversionError::UnsupportedUnit("kPa".to_string()))
    );
}

#[test]
fn magnitude_is_not_validated() {
    // 음수/0 은 환산 단계에서 거르지 않는다. 포화선 계산에서 거부된다.
    assert_eq!(convert_pressure(-5.0, None), Ok(-0.5));
    assert_eq!(convert_pressure(0.0, Some("psia")), Ok(0.0));
}

#[test]
fn gauge_units_are_plain_multipliers() {
    let barg = convert_pressure(10.0, Some("barg")).unwrap();
    assert_close("barg", barg, 2.013, 1e-12);
    let kgcm2g = convert_pressure(10.0, Some("kg/cm2g")).unwrap();
    assert_close("kg/cm2g", kgcm2g, 1.994, 1e-12);
}
