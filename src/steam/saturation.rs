use serde::{Deserialize, Serialize};

use super::if97::{self, Region4Curve, SaturationCurve, Seuif97Curve};
use crate::units::{PressureReading, KELVIN_OFFSET};

/// 포화 증기 계산 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum SteamError {
    /// 포화선이 정의되지 않는 압력(MPa). 0 이하, 삼중점 미만, 임계점 초과 포함.
    InvalidPressureDomain(f64),
    /// 점 개수가 0 인 범위 요청
    DegenerateRange { num_points: usize },
}

impl std::fmt::Display for SteamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SteamError::InvalidPressureDomain(p) => write!(
                f,
                "pressure {p} MPa is outside the saturation range ({}..={} MPa)",
                if97::P_TRIPLE_MPA,
                if97::P_CRITICAL_MPA
            ),
            SteamError::DegenerateRange { num_points } => {
                write!(f, "range needs at least one point (got {num_points})")
            }
        }
    }
}

impl std::error::Error for SteamError {}

/// 사용할 포화선 계산기 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveKind {
    /// seuif97 크레이트 위임
    #[default]
    Seuif97,
    /// 내장 IF97 Region 4 식
    Region4,
}

impl CurveKind {
    pub fn curve(self) -> &'static dyn SaturationCurve {
        match self {
            CurveKind::Seuif97 => &Seuif97Curve,
            CurveKind::Region4 => &Region4Curve,
        }
    }
}

/// 압력 한 건에 대한 포화온도 결과. 저장하지 않고 화면/출력에만 쓴다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaturationResult {
    pub pressure_input: PressureReading,
    pub pressure_mpa: f64,
    pub temperature_celsius: f64,
}

impl SaturationResult {
    /// 두 줄짜리 결과 문구.
    pub fn readout(&self) -> String {
        format!(
            "Pressure: {} {}\nTemperature: {:.2} °C",
            self.pressure_input.magnitude, self.pressure_input.unit, self.temperature_celsius
        )
    }
}

/// 압력(MPa)에 대한 포화온도(°C)를 기본 계산기(seuif97)로 구한다.
pub fn get_saturated_steam(pressure_mpa: f64) -> Result<f64, SteamError> {
    get_saturated_steam_with(&Seuif97Curve, pressure_mpa)
}

/// 지정한 계산기로 포화온도(°C)를 구한다. 범위 밖 압력은 계산기에 넘기지 않는다.
pub fn get_saturated_steam_with(
    curve: &dyn SaturationCurve,
    pressure_mpa: f64,
) -> Result<f64, SteamError> {
    if !if97::in_saturation_domain(pressure_mpa) {
        return Err(SteamError::InvalidPressureDomain(pressure_mpa));
    }
    let t_k = curve.saturation_temperature_kelvin(pressure_mpa)?;
    log::debug!("Tsat({pressure_mpa} MPa) = {t_k} K");
    Ok(t_k - KELVIN_OFFSET)
}

/// 입력 압력을 MPa 로 환산해 포화온도를 구한다.
pub fn lookup(
    reading: PressureReading,
    curve: &dyn SaturationCurve,
) -> Result<SaturationResult, SteamError> {
    let pressure_mpa = reading.to_mpa();
    let temperature_celsius = get_saturated_steam_with(curve, pressure_mpa)?;
    Ok(SaturationResult {
        pressure_input: reading,
        pressure_mpa,
        temperature_celsius,
    })
}
