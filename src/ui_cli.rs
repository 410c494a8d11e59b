use std::io::{BufRead, Write};
use std::path::Path;

use crate::app::{self, AppError, RangeRequest};
use crate::config::Config;
use crate::conversion::parse_pressure_unit;
use crate::units::{PressureReading, PressureUnit};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    SaturatedTemperature,
    SteamTable,
    Exit,
}

/// 입력이 끝날 때까지(또는 종료 선택까지) 메뉴를 반복한다.
pub fn run_menu<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    cfg: &Config,
) -> Result<(), AppError> {
    loop {
        match main_menu(input, out)? {
            MenuChoice::SaturatedTemperature => handle_saturated_temperature(input, out, cfg)?,
            MenuChoice::SteamTable => handle_steam_table(input, out, cfg)?,
            MenuChoice::Exit => break,
        }
    }
    Ok(())
}

/// 메인 메뉴를 표시하고 선택값을 반환한다. 입력이 끝나면 종료로 본다.
pub fn main_menu<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<MenuChoice, AppError> {
    writeln!(out, "\n=== Saturated Steam Tables ===")?;
    writeln!(out, "1) Saturated Temperature")?;
    writeln!(out, "2) Download Steam Tables")?;
    writeln!(out, "0) Exit")?;
    loop {
        let Some(sel) = read_line(input, out, "Select: ")? else {
            return Ok(MenuChoice::Exit);
        };
        match sel.as_str() {
            "1" => return Ok(MenuChoice::SaturatedTemperature),
            "2" => return Ok(MenuChoice::SteamTable),
            "0" => return Ok(MenuChoice::Exit),
            _ => writeln!(out, "Invalid choice, try again.")?,
        }
    }
}

/// 단일 압력 조회 화면.
pub fn handle_saturated_temperature<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    cfg: &Config,
) -> Result<(), AppError> {
    writeln!(out, "\n-- Get Steam Saturated Temperature --")?;
    let Some(value) = read_f64(input, out, "Enter Pressure Value: ", None)? else {
        return Ok(());
    };
    let codes: Vec<&str> = PressureUnit::ALL.iter().map(|u| u.code()).collect();
    writeln!(out, "Units: {}", codes.join(", "))?;
    let prompt = format!("Select Unit [{}]: ", cfg.default_unit);
    let Some(unit_str) = read_line(input, out, &prompt)? else {
        return Ok(());
    };
    let unit = if unit_str.is_empty() {
        cfg.default_unit
    } else {
        match parse_pressure_unit(&unit_str) {
            Ok(u) => u,
            Err(e) => {
                writeln!(out, "Error: {e}")?;
                return Ok(());
            }
        }
    };
    match app::lookup(PressureReading::new(value, unit), cfg) {
        Ok(res) => app::write_readout(out, &res, cfg.temperature_unit)?,
        Err(e) => writeln!(out, "Error: {e}")?,
    }
    Ok(())
}

/// 압력 범위 표 화면. 표를 보여주거나 CSV 로 저장한다.
pub fn handle_steam_table<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    cfg: &Config,
) -> Result<(), AppError> {
    writeln!(out, "\n-- Create Your Own Steam Table Given a Range of Pressure --")?;
    let defaults = RangeRequest::from_config(cfg);
    let Some(start_bar) = read_f64(input, out, "Start Pressure (bar)", Some(defaults.start_bar))?
    else {
        return Ok(());
    };
    let Some(end_bar) = read_f64(input, out, "End Pressure (bar)", Some(defaults.end_bar))? else {
        return Ok(());
    };
    let Some(num_points) =
        read_f64(input, out, "Number of Points", Some(defaults.num_points as f64))?
    else {
        return Ok(());
    };
    if num_points < 0.0 || num_points.fract() != 0.0 {
        writeln!(out, "Error: number of points must be a non-negative integer")?;
        return Ok(());
    }
    let req = RangeRequest {
        start_bar,
        end_bar,
        num_points: num_points as usize,
    };
    let table = match app::build_table(req, cfg) {
        Ok(t) => t,
        Err(e) => {
            writeln!(out, "Error: {e}")?;
            return Ok(());
        }
    };
    app::write_plain_table(out, &table)?;

    let prompt = format!("Save CSV as [{}] (enter '-' to skip): ", cfg.csv_file_name);
    let Some(name) = read_line(input, out, &prompt)? else {
        return Ok(());
    };
    if name == "-" {
        return Ok(());
    }
    let name = if name.is_empty() { cfg.csv_file_name.clone() } else { name };
    let file = std::fs::File::create(Path::new(&name))?;
    table.write_csv(file)?;
    log::info!("wrote {} rows to {name}", table.len());
    writeln!(out, "Saved {name}")?;
    Ok(())
}

/// 프롬프트를 출력하고 한 줄을 읽는다. 입력이 끝났으면 `None`.
fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<Option<String>, AppError> {
    write!(out, "{prompt}")?;
    out.flush()?;
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim().to_string()))
}

/// 숫자를 읽을 때까지 반복한다. 기본값이 있으면 빈 입력은 기본값으로 본다.
fn read_f64<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
    default: Option<f64>,
) -> Result<Option<f64>, AppError> {
    let prompt = match default {
        Some(d) => format!("{prompt} [{d}]: "),
        None => prompt.to_string(),
    };
    loop {
        let Some(s) = read_line(input, out, &prompt)? else {
            return Ok(None);
        };
        if s.is_empty() {
            if let Some(d) = default {
                return Ok(Some(d));
            }
        }
        match s.parse::<f64>() {
            Ok(v) => return Ok(Some(v)),
            Err(_) => writeln!(out, "Please enter a number.")?,
        }
    }
}
