//! 압력 범위(bar)를 균등 분할해 포화온도 표를 만들고 CSV 로 내보낸다.

use std::io;

use super::if97::{SaturationCurve, Seuif97Curve};
use super::saturation::{get_saturated_steam_with, SteamError};
use crate::units::{to_mpa, PressureUnit};

/// CSV 머리글. 열 순서는 압력, 온도.
pub const CSV_HEADER: [&str; 2] = ["Pressure (bar)", "Temperature (°C)"];
/// 내려받기 기본 파일명.
pub const DEFAULT_CSV_FILE_NAME: &str = "steam-table.csv";

/// 표의 한 행.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangePoint {
    pub pressure_bar: f64,
    pub temperature_celsius: f64,
}

/// 입력 순서를 유지한 (압력, 포화온도) 목록.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PressureRangeTable {
    pub points: Vec<RangePoint>,
}

impl PressureRangeTable {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// 차트용 `[x, y]` 배열.
    pub fn plot_points(&self) -> Vec<[f64; 2]> {
        self.points
            .iter()
            .map(|p| [p.pressure_bar, p.temperature_celsius])
            .collect()
    }

    /// 머리글과 각 행을 CSV 로 기록한다.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(CSV_HEADER)?;
        for p in &self.points {
            wtr.write_record([p.pressure_bar.to_string(), p.temperature_celsius.to_string()])?;
        }
        wtr.flush()?;
        Ok(())
    }

    pub fn to_csv_string(&self) -> Result<String, csv::Error> {
        let mut buf = Vec::new();
        self.write_csv(&mut buf)?;
        // csv 라이터는 입력 문자열을 그대로 쓰므로 UTF-8 이 보장된다.
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// start..=end 를 `num_points` 개로 균등 분할한다. 마지막 값은 정확히 `end`.
///
/// 점이 하나면 `start` 만 돌려준다.
pub fn linspace(start: f64, end: f64, num_points: usize) -> Vec<f64> {
    match num_points {
        0 => Vec::new(),
        1 => vec![start],
        n => {
            let step = (end - start) / (n - 1) as f64;
            let mut out: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            out[n - 1] = end;
            out
        }
    }
}

/// 기본 계산기(seuif97)로 범위 표를 만든다.
pub fn build_range(
    start_bar: f64,
    end_bar: f64,
    num_points: usize,
) -> Result<PressureRangeTable, SteamError> {
    build_range_with(&Seuif97Curve, start_bar, end_bar, num_points)
}

/// 지정한 계산기로 범위 표를 만든다. 한 점이라도 실패하면 표 전체가 실패한다.
pub fn build_range_with(
    curve: &dyn SaturationCurve,
    start_bar: f64,
    end_bar: f64,
    num_points: usize,
) -> Result<PressureRangeTable, SteamError> {
    if num_points == 0 {
        return Err(SteamError::DegenerateRange { num_points });
    }
    log::debug!("building range {start_bar}..={end_bar} bar, {num_points} points");
    let points = linspace(start_bar, end_bar, num_points)
        .into_iter()
        .map(|pressure_bar| {
            let p_mpa = to_mpa(pressure_bar, PressureUnit::Bar);
            let temperature_celsius = get_saturated_steam_with(curve, p_mpa)?;
            Ok(RangePoint {
                pressure_bar,
                temperature_celsius,
            })
        })
        .collect::<Result<Vec<_>, SteamError>>()?;
    Ok(PressureRangeTable { points })
}
