use serde::{Deserialize, Serialize};

/// 결과 표시용 온도 단위.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Kelvin,
    #[default]
    Celsius,
    Fahrenheit,
}

pub const KELVIN_OFFSET: f64 = 273.15;

impl TemperatureUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Kelvin => "K",
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }
}

/// 켈빈 값을 원하는 단위로 변환한다.
pub fn from_kelvin(value_k: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Kelvin => value_k,
        TemperatureUnit::Celsius => value_k - KELVIN_OFFSET,
        TemperatureUnit::Fahrenheit => value_k * 9.0 / 5.0 - 459.67,
    }
}

/// 섭씨 값을 원하는 단위로 변환한다.
pub fn from_celsius(value_c: f64, unit: TemperatureUnit) -> f64 {
    from_kelvin(value_c + KELVIN_OFFSET, unit)
}
