use crate::units::{to_mpa, PressureUnit};

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// 지원 목록에 없는 단위 문자열
    UnsupportedUnit(String),
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::UnsupportedUnit(u) => {
                let known: Vec<&str> = PressureUnit::ALL.iter().map(|u| u.code()).collect();
                write!(f, "unsupported pressure unit '{u}' (expected one of {})", known.join(", "))
            }
        }
    }
}

impl std::error::Error for ConversionError {}

/// 단위 문자열을 enum 으로 변환한다. 표기는 대소문자까지 정확히 일치해야 한다.
pub fn parse_pressure_unit(s: &str) -> Result<PressureUnit, ConversionError> {
    let code = s.trim();
    PressureUnit::ALL
        .iter()
        .copied()
        .find(|u| u.code() == code)
        .ok_or_else(|| ConversionError::UnsupportedUnit(code.to_string()))
}

impl std::str::FromStr for PressureUnit {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_pressure_unit(s)
    }
}

/// 문자열 단위로 주어진 압력을 MPa 로 환산한다. 단위를 생략하면 bar 로 본다.
///
/// 알 수 없는 단위는 값을 그대로 통과시키지 않고 `UnsupportedUnit` 으로 거부한다.
pub fn convert_pressure(magnitude: f64, unit: Option<&str>) -> Result<f64, ConversionError> {
    let unit = match unit {
        Some(s) => parse_pressure_unit(s)?,
        None => PressureUnit::Bar,
    };
    Ok(to_mpa(magnitude, unit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_canonical_code() {
        for unit in PressureUnit::ALL {
            assert_eq!(parse_pressure_unit(unit.code()), Ok(unit));
        }
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(parse_pressure_unit(" psia\n"), Ok(PressureUnit::Psia));
    }

    #[test]
    fn case_matters() {
        assert!(parse_pressure_unit("mmhg").is_err());
        assert!(parse_pressure_unit("PA").is_err());
    }

    #[test]
    fn missing_unit_means_bar() {
        assert_eq!(convert_pressure(1.0, None), Ok(0.1));
    }
}
