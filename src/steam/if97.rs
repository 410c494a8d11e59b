//! IAPWS-IF97 포화선(Region 4) 계산.
//! 기본 계산은 seuif97 크레이트로 위임하고, 동일한 식의 폐형식 구현을 교차 검증용으로 둔다.
//! 입력: 압력(MPa, 절대), 출력: 포화온도(K)

use seuif97::{px, OT};

use super::SteamError;
use crate::units::KELVIN_OFFSET;

/// 삼중점 압력(MPa). IF97 포화선 유효 범위의 하한.
pub const P_TRIPLE_MPA: f64 = 611.212_677e-6;
/// 임계 압력(MPa). IF97 포화선 유효 범위의 상한.
pub const P_CRITICAL_MPA: f64 = 22.064;

// ---------------- Region 4 역방향 식 T_s(p) ----------------
const R4_N: [f64; 10] = [
    0.116_705_214_527_67e4,
    -0.724_213_167_032_06e6,
    -0.170_738_469_400_92e2,
    0.120_208_247_024_70e5,
    -0.323_255_503_223_33e7,
    0.149_151_086_135_30e2,
    -0.482_326_573_615_91e4,
    0.405_113_405_420_57e6,
    -0.238_555_575_678_49,
    0.650_175_348_447_98e3,
];

/// 포화온도를 돌려주는 외부 물성 계산기.
pub trait SaturationCurve {
    /// 압력(MPa)에 대한 포화온도(K).
    fn saturation_temperature_kelvin(&self, p_mpa: f64) -> Result<f64, SteamError>;
}

/// seuif97 크레이트의 (p, x) 입력 함수를 사용하는 기본 계산기.
#[derive(Debug, Clone, Copy, Default)]
pub struct Seuif97Curve;

impl SaturationCurve for Seuif97Curve {
    fn saturation_temperature_kelvin(&self, p_mpa: f64) -> Result<f64, SteamError> {
        // seuif97 는 °C 를 돌려준다. 포화선 위라 건도는 무관하다.
        let t_c = px(p_mpa, 0.0, OT);
        checked_kelvin(p_mpa, t_c + KELVIN_OFFSET)
    }
}

/// IF97 Region 4 역방향 식(식 31)을 그대로 계산하는 내장 계산기.
#[derive(Debug, Clone, Copy, Default)]
pub struct Region4Curve;

impl SaturationCurve for Region4Curve {
    fn saturation_temperature_kelvin(&self, p_mpa: f64) -> Result<f64, SteamError> {
        checked_kelvin(p_mpa, region4_tsat_kelvin(p_mpa))
    }
}

/// 계산기가 돌려준 값이 유한한 양수인지 확인한다.
fn checked_kelvin(p_mpa: f64, t_k: f64) -> Result<f64, SteamError> {
    if t_k.is_finite() && t_k > 0.0 {
        Ok(t_k)
    } else {
        Err(SteamError::InvalidPressureDomain(p_mpa))
    }
}

/// 포화온도(K) - 입력 압력은 MPa. 범위 검사는 호출 측 책임.
pub fn region4_tsat_kelvin(p_mpa: f64) -> f64 {
    let beta = p_mpa.powf(0.25);
    let e = beta.powi(2) + R4_N[2] * beta + R4_N[5];
    let f = R4_N[0] * beta.powi(2) + R4_N[3] * beta + R4_N[6];
    let g = R4_N[1] * beta.powi(2) + R4_N[4] * beta + R4_N[7];
    let d = 2.0 * g / (-f - (f.powi(2) - 4.0 * e * g).sqrt());
    (R4_N[9] + d - ((R4_N[9] + d).powi(2) - 4.0 * (R4_N[8] + R4_N[9] * d)).sqrt()) / 2.0
}

/// 포화선 계산이 정의되는 압력인지 검사한다.
pub fn in_saturation_domain(p_mpa: f64) -> bool {
    p_mpa.is_finite() && (P_TRIPLE_MPA..=P_CRITICAL_MPA).contains(&p_mpa)
}
