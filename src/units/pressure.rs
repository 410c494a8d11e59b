use serde::{Deserialize, Serialize};

/// 압력 단위. IF97 계산에 넘기기 위해 항상 MPa 로 환산한다.
///
/// 게이지 단위(`kg/cm2g`, `barg`)도 대기압 보정 없이 단순 배율로만 환산한다.
/// 게이지→절대 변환이 아니라는 점에 주의.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PressureUnit {
    #[default]
    #[serde(rename = "bar")]
    Bar,
    #[serde(rename = "torr")]
    Torr,
    #[serde(rename = "mmHg")]
    MmHg,
    #[serde(rename = "atm")]
    Atm,
    #[serde(rename = "psia")]
    Psia,
    #[serde(rename = "kg/cm2")]
    KgPerCm2,
    #[serde(rename = "kg/cm2g")]
    KgPerCm2G,
    #[serde(rename = "barg")]
    BarG,
    #[serde(rename = "pa")]
    Pascal,
}

const TORR_PER_MPA: f64 = 7501.0;
const ATM_PER_MPA: f64 = 9.869;

impl PressureUnit {
    /// 입력 폼 선택 순서와 동일한 전체 단위 목록.
    pub const ALL: [PressureUnit; 9] = [
        PressureUnit::Bar,
        PressureUnit::Torr,
        PressureUnit::MmHg,
        PressureUnit::Atm,
        PressureUnit::Psia,
        PressureUnit::KgPerCm2,
        PressureUnit::KgPerCm2G,
        PressureUnit::BarG,
        PressureUnit::Pascal,
    ];

    /// 화면/CSV/설정 파일에서 쓰는 단위 표기.
    pub fn code(self) -> &'static str {
        match self {
            PressureUnit::Bar => "bar",
            PressureUnit::Torr => "torr",
            PressureUnit::MmHg => "mmHg",
            PressureUnit::Atm => "atm",
            PressureUnit::Psia => "psia",
            PressureUnit::KgPerCm2 => "kg/cm2",
            PressureUnit::KgPerCm2G => "kg/cm2g",
            PressureUnit::BarG => "barg",
            PressureUnit::Pascal => "pa",
        }
    }

    /// 값 1 을 MPa 로 환산한 배율.
    pub fn mpa_factor(self) -> f64 {
        match self {
            PressureUnit::Bar => 0.1,
            PressureUnit::Torr | PressureUnit::MmHg => 1.0 / TORR_PER_MPA,
            PressureUnit::Atm => 1.0 / ATM_PER_MPA,
            PressureUnit::Psia => 0.006_894_76,
            PressureUnit::KgPerCm2 => 0.098_07,
            PressureUnit::KgPerCm2G => 0.1994,
            PressureUnit::BarG => 0.2013,
            PressureUnit::Pascal => 1e-6,
        }
    }
}

impl std::fmt::Display for PressureUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// 주어진 압력을 MPa 로 변환한다.
pub fn to_mpa(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        // 나눗셈 형태를 유지해야 bar 1 → 0.1 이 정확히 나온다.
        PressureUnit::Bar => value / 10.0,
        PressureUnit::Torr | PressureUnit::MmHg => value / TORR_PER_MPA,
        PressureUnit::Atm => value / ATM_PER_MPA,
        other => value * other.mpa_factor(),
    }
}

/// 사용자가 입력한 압력 한 건. 단위는 지원 목록 안의 값만 가질 수 있다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PressureReading {
    pub magnitude: f64,
    pub unit: PressureUnit,
}

impl PressureReading {
    pub fn new(magnitude: f64, unit: PressureUnit) -> Self {
        Self { magnitude, unit }
    }

    /// 같은 압력을 MPa 로 반환한다.
    pub fn to_mpa(&self) -> f64 {
        to_mpa(self.magnitude, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_unique() {
        for (i, a) in PressureUnit::ALL.iter().enumerate() {
            for b in &PressureUnit::ALL[i + 1..] {
                assert_ne!(a.code(), b.code());
            }
        }
    }

    #[test]
    fn division_units_match_factor() {
        for unit in [PressureUnit::Bar, PressureUnit::Torr, PressureUnit::MmHg, PressureUnit::Atm] {
            let diff = (to_mpa(3.0, unit) - 3.0 * unit.mpa_factor()).abs();
            assert!(diff < 1e-12, "{unit}: diff {diff}");
        }
    }

    #[test]
    fn gauge_units_have_no_offset() {
        assert_eq!(to_mpa(0.0, PressureUnit::BarG), 0.0);
        assert_eq!(to_mpa(0.0, PressureUnit::KgPerCm2G), 0.0);
    }

    #[test]
    fn reading_uses_its_unit() {
        let r = PressureReading::new(10.0, PressureUnit::Bar);
        assert!((r.to_mpa() - 1.0).abs() < 1e-12);
    }
}
