//! 단위 정의 및 변환 모듈 모음.

pub mod pressure;
pub mod temperature;

pub use pressure::{to_mpa, PressureReading, PressureUnit};
pub use temperature::{from_celsius, from_kelvin, TemperatureUnit, KELVIN_OFFSET};
