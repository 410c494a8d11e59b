use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::steam::{CurveKind, DEFAULT_CSV_FILE_NAME};
use crate::units::{PressureUnit, TemperatureUnit};

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 범위 표 입력 폼의 초기값.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeDefaults {
    pub start_bar: f64,
    pub end_bar: f64,
    pub num_points: usize,
}

impl Default for RangeDefaults {
    fn default() -> Self {
        Self {
            start_bar: 1.0,
            end_bar: 10.0,
            num_points: 10,
        }
    }
}

/// 애플리케이션 설정을 표현한다. 파일에 없는 항목은 기본값을 쓴다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 단일 조회 폼의 초기 압력 단위
    pub default_unit: PressureUnit,
    /// 단일 조회 결과에 함께 보여줄 온도 단위
    pub temperature_unit: TemperatureUnit,
    /// 포화선 계산기
    pub curve: CurveKind,
    /// CSV 저장 대화상자의 기본 파일명
    pub csv_file_name: String,
    /// 상단 로고 이미지 경로
    pub logo_path: String,
    // 하위 테이블은 TOML 특성상 마지막에 둔다.
    pub range: RangeDefaults,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_unit: PressureUnit::Bar,
            temperature_unit: TemperatureUnit::Celsius,
            curve: CurveKind::Seuif97,
            csv_file_name: DEFAULT_CSV_FILE_NAME.to_string(),
            logo_path: "assets/logo.png".to_string(),
            range: RangeDefaults::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Serde(e) => write!(f, "config parse error: {e}"),
            ConfigError::Serialize(e) => write!(f, "config serialize error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// 설정 파일을 읽는다. 파일이 없으면 기본 설정을 돌려주며 파일을 만들지는 않는다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        log::debug!("loaded config from {}", path.display());
        Ok(cfg)
    } else {
        log::debug!("{} not found, using defaults", path.display());
        Ok(Config::default())
    }
}

impl Config {
    /// 설정을 TOML 로 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
