use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::config::{self, Config};
use crate::conversion::{self, parse_pressure_unit};
use crate::steam::{self, SaturationResult, SteamError};
use crate::ui_cli;
use crate::units::{from_celsius, PressureReading, TemperatureUnit};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(config::ConfigError),
    /// 단위 변환 오류
    Conversion(conversion::ConversionError),
    /// 포화선 계산 오류
    Steam(SteamError),
    /// CSV 기록 오류
    Csv(csv::Error),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "I/O error: {e}"),
            AppError::Config(e) => write!(f, "{e}"),
            AppError::Conversion(e) => write!(f, "{e}"),
            AppError::Steam(e) => write!(f, "{e}"),
            AppError::Csv(e) => write!(f, "CSV error: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(value: config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<conversion::ConversionError> for AppError {
    fn from(value: conversion::ConversionError) -> Self {
        AppError::Conversion(value)
    }
}

impl From<SteamError> for AppError {
    fn from(value: SteamError) -> Self {
        AppError::Steam(value)
    }
}

impl From<csv::Error> for AppError {
    fn from(value: csv::Error) -> Self {
        AppError::Csv(value)
    }
}

/// 포화 증기 온도 조회 CLI.
#[derive(Debug, Parser)]
#[command(name = "saturated_steam_tables_cli", version, about)]
pub struct Cli {
    /// 설정 파일 경로
    #[arg(long, global = true, default_value = config::DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// 압력 한 점의 포화온도를 조회한다.
    Lookup {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        /// bar, torr, mmHg, atm, psia, kg/cm2, kg/cm2g, barg, pa
        #[arg(short, long)]
        unit: Option<String>,
    },
    /// 압력 범위(bar)의 포화온도 표를 CSV 로 출력한다.
    Table {
        #[arg(long, allow_negative_numbers = true)]
        start: Option<f64>,
        #[arg(long, allow_negative_numbers = true)]
        end: Option<f64>,
        #[arg(long)]
        points: Option<usize>,
        /// 지정하면 파일로 저장, 없으면 표준출력
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// CSV 대신 정렬된 텍스트 표로 출력
        #[arg(long)]
        plain: bool,
    },
    /// 기본 설정 파일을 만든다.
    InitConfig {
        /// 기존 파일을 덮어쓴다.
        #[arg(long)]
        force: bool,
    },
}

/// 범위 표 요청. 생략한 값은 설정의 기본값을 쓴다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeRequest {
    pub start_bar: f64,
    pub end_bar: f64,
    pub num_points: usize,
}

impl RangeRequest {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            start_bar: cfg.range.start_bar,
            end_bar: cfg.range.end_bar,
            num_points: cfg.range.num_points,
        }
    }
}

/// 서브커맨드가 없으면 대화형 메뉴를, 있으면 해당 명령을 실행한다.
pub fn run(cli: &Cli, cfg: &Config) -> Result<(), AppError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match &cli.command {
        None => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            ui_cli::run_menu(&mut input, &mut out, cfg)
        }
        Some(cmd) => run_command(cmd, cfg, &cli.config, &mut out),
    }
}

/// 비대화형 명령을 실행해 결과를 `out` 에 쓴다.
pub fn run_command<W: Write>(
    cmd: &Command,
    cfg: &Config,
    config_path: &Path,
    out: &mut W,
) -> Result<(), AppError> {
    match cmd {
        Command::Lookup { value, unit } => {
            let unit = match unit {
                Some(s) => parse_pressure_unit(s)?,
                None => cfg.default_unit,
            };
            let res = lookup(PressureReading::new(*value, unit), cfg)?;
            write_readout(out, &res, cfg.temperature_unit)?;
        }
        Command::Table {
            start,
            end,
            points,
            output,
            plain,
        } => {
            let defaults = RangeRequest::from_config(cfg);
            let req = RangeRequest {
                start_bar: start.unwrap_or(defaults.start_bar),
                end_bar: end.unwrap_or(defaults.end_bar),
                num_points: points.unwrap_or(defaults.num_points),
            };
            let table = build_table(req, cfg)?;
            match output {
                Some(path) => {
                    let file = std::fs::File::create(path)?;
                    table.write_csv(file)?;
                    log::info!("wrote {} rows to {}", table.len(), path.display());
                    writeln!(out, "Saved {} rows to {}", table.len(), path.display())?;
                }
                None if *plain => write_plain_table(out, &table)?,
                None => table.write_csv(&mut *out)?,
            }
        }
        Command::InitConfig { force } => init_config(config_path, *force, cfg, out)?,
    }
    Ok(())
}

/// 설정에 지정된 계산기로 한 점을 조회한다.
pub fn lookup(reading: PressureReading, cfg: &Config) -> Result<SaturationResult, AppError> {
    log::debug!("lookup {} {}", reading.magnitude, reading.unit);
    Ok(steam::lookup(reading, cfg.curve.curve())?)
}

/// 설정에 지정된 계산기로 범위 표를 만든다.
pub fn build_table(
    req: RangeRequest,
    cfg: &Config,
) -> Result<steam::PressureRangeTable, AppError> {
    Ok(steam::build_range_with(
        cfg.curve.curve(),
        req.start_bar,
        req.end_bar,
        req.num_points,
    )?)
}

/// 결과 문구를 쓴다. 표시 단위가 °C 가 아니면 환산값을 한 줄 더 쓴다.
pub fn write_readout<W: Write>(
    out: &mut W,
    res: &SaturationResult,
    unit: TemperatureUnit,
) -> io::Result<()> {
    writeln!(out, "{}", res.readout())?;
    if unit != TemperatureUnit::Celsius {
        let t = from_celsius(res.temperature_celsius, unit);
        writeln!(out, "             ({t:.2} {})", unit.symbol())?;
    }
    Ok(())
}

pub fn write_plain_table<W: Write>(
    out: &mut W,
    table: &steam::PressureRangeTable,
) -> io::Result<()> {
    writeln!(out, "{:>16}  {:>18}", steam::CSV_HEADER[0], steam::CSV_HEADER[1])?;
    for p in &table.points {
        writeln!(out, "{:>16.4}  {:>18.2}", p.pressure_bar, p.temperature_celsius)?;
    }
    Ok(())
}

fn init_config<W: Write>(
    path: &Path,
    force: bool,
    cfg: &Config,
    out: &mut W,
) -> Result<(), AppError> {
    if path.exists() && !force {
        log::warn!("{} already exists, not overwriting", path.display());
        writeln!(out, "{} already exists (use --force to overwrite)", path.display())?;
        return Ok(());
    }
    cfg.save(path)?;
    writeln!(out, "Wrote {}", path.display())?;
    Ok(())
}
