#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use clap::Parser;
use eframe::{egui, App, Frame};
use egui_plot::{Line, Plot, PlotPoints, Points};
use image::GenericImageView;
use rfd::FileDialog;
use saturated_steam_tables::{
    app::{self, RangeRequest},
    config,
    steam::{PressureRangeTable, CSV_HEADER},
    units::{PressureReading, PressureUnit},
};
use std::path::{Path, PathBuf};

/// 로고 표시 배율.
const LOGO_SCALE: f64 = 0.25;

#[derive(Debug, Parser)]
struct GuiArgs {
    /// 설정 파일 경로
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
}

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    let args = GuiArgs::parse();
    let app_cfg = config::load_or_default(&args.config).unwrap_or_else(|e| {
        log::warn!("{e}; using default settings");
        config::Config::default()
    });
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([900.0, 700.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Saturated Steam Tables",
        options,
        Box::new(move |_cc| Box::new(GuiApp::new(app_cfg))),
    )
}

/// 원본 크기의 25% 로 줄인 크기. 0 이 되지 않게 최소 1 px 을 유지한다.
fn scaled_size(width: u32, height: u32) -> (u32, u32) {
    let w = (width as f64 * LOGO_SCALE) as u32;
    let h = (height as f64 * LOGO_SCALE) as u32;
    (w.max(1), h.max(1))
}

fn load_logo(path: &Path) -> Option<egui::ColorImage> {
    let bytes = match std::fs::read(path) {
        Ok(b) => b,
        Err(e) => {
            log::warn!("logo {} not loaded: {e}", path.display());
            return None;
        }
    };
    let img = match image::load_from_memory(&bytes) {
        Ok(img) => img,
        Err(e) => {
            log::warn!("logo {} is not a readable image: {e}", path.display());
            return None;
        }
    };
    let (w, h) = scaled_size(img.width(), img.height());
    let resized = img.resize_exact(w, h, image::imageops::FilterType::Triangle);
    let (w, h) = resized.dimensions();
    let rgba = resized.to_rgba8();
    Some(egui::ColorImage::from_rgba_unmultiplied(
        [w as usize, h as usize],
        rgba.as_raw(),
    ))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    SaturatedTemperature,
    SteamTables,
}

struct GuiApp {
    config: config::Config,
    page: Page,
    logo: Option<egui::TextureHandle>,
    logo_attempted: bool,
    // 단일 조회
    sat_value: f64,
    sat_unit: PressureUnit,
    sat_output: Option<String>,
    // 범위 표
    range_start: f64,
    range_end: f64,
    range_points: usize,
    plot_table: Option<PressureRangeTable>,
    frame_table: Option<PressureRangeTable>,
    range_error: Option<String>,
    save_status: Option<String>,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let req = RangeRequest::from_config(&config);
        Self {
            page: Page::SaturatedTemperature,
            logo: None,
            logo_attempted: false,
            sat_value: 0.0,
            sat_unit: config.default_unit,
            sat_output: None,
            range_start: req.start_bar,
            range_end: req.end_bar,
            range_points: req.num_points,
            plot_table: None,
            frame_table: None,
            range_error: None,
            save_status: None,
            config,
        }
    }

    fn range_request(&self) -> RangeRequest {
        RangeRequest {
            start_bar: self.range_start,
            end_bar: self.range_end,
            num_points: self.range_points,
        }
    }

    /// 단일 조회 버튼. 오류도 결과 자리에 그대로 보여준다.
    fn run_lookup(&mut self) {
        let reading = PressureReading::new(self.sat_value, self.sat_unit);
        self.sat_output = Some(match app::lookup(reading, &self.config) {
            Ok(res) => {
                let mut buf = Vec::new();
                match app::write_readout(&mut buf, &res, self.config.temperature_unit) {
                    Ok(()) => String::from_utf8_lossy(&buf).trim_end().to_string(),
                    Err(_) => res.readout(),
                }
            }
            Err(e) => format!("Error: {e}"),
        });
    }

    fn build_table(&mut self) -> Option<PressureRangeTable> {
        match app::build_table(self.range_request(), &self.config) {
            Ok(t) => {
                self.range_error = None;
                Some(t)
            }
            Err(e) => {
                self.range_error = Some(format!("Error: {e}"));
                None
            }
        }
    }

    fn plot_range(&mut self) {
        self.plot_table = self.build_table();
    }

    fn create_table(&mut self) {
        self.frame_table = self.build_table();
        self.save_status = None;
    }

    fn save_csv(&mut self, path: &Path) {
        let Some(table) = &self.frame_table else {
            return;
        };
        let result = std::fs::File::create(path)
            .map_err(|e| e.to_string())
            .and_then(|f| table.write_csv(f).map_err(|e| e.to_string()));
        self.save_status = Some(match result {
            Ok(()) => {
                log::info!("wrote {} rows to {}", table.len(), path.display());
                format!("Saved {}", path.display())
            }
            Err(e) => format!("Error: {e}"),
        });
    }

    fn ensure_logo(&mut self, ctx: &egui::Context) {
        if self.logo_attempted {
            return;
        }
        self.logo_attempted = true;
        if let Some(img) = load_logo(Path::new(&self.config.logo_path)) {
            self.logo = Some(ctx.load_texture("logo", img, egui::TextureOptions::LINEAR));
        }
    }

    fn ui_nav(&mut self, ui: &mut egui::Ui) {
        ui.heading("Navigation");
        ui.add_space(8.0);
        ui.radio_value(
            &mut self.page,
            Page::SaturatedTemperature,
            "Saturated Temperature",
        );
        ui.radio_value(&mut self.page, Page::SteamTables, "Download Steam Tables");
    }

    fn ui_saturated_temperature(&mut self, ui: &mut egui::Ui) {
        ui.heading("Get Steam Saturated Temperature");
        ui.add_space(8.0);
        egui::Grid::new("sat_grid")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label("Enter Pressure Value");
                ui.add(egui::DragValue::new(&mut self.sat_value).speed(0.1));
                ui.end_row();

                ui.label("Select Unit");
                egui::ComboBox::from_id_source("sat_unit")
                    .selected_text(self.sat_unit.code())
                    .show_ui(ui, |ui| {
                        for unit in PressureUnit::ALL {
                            ui.selectable_value(&mut self.sat_unit, unit, unit.code());
                        }
                    });
                ui.end_row();
            });
        ui.add_space(8.0);
        if ui.button("Get saturated steam temperature").clicked() {
            self.run_lookup();
        }
        if let Some(text) = &self.sat_output {
            ui.label(text);
        }
    }

    fn ui_steam_tables(&mut self, ui: &mut egui::Ui) {
        ui.heading("Create Your Own Steam Table Given a Range of Pressure");
        ui.add_space(8.0);
        egui::Grid::new("range_grid")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label("Start Pressure (bar)");
                ui.add(egui::DragValue::new(&mut self.range_start).speed(0.1));
                ui.end_row();

                ui.label("End Pressure (bar)");
                ui.add(egui::DragValue::new(&mut self.range_end).speed(0.1));
                ui.end_row();

                ui.label("Number of Points");
                ui.add(egui::DragValue::new(&mut self.range_points).clamp_range(0..=10_000));
                ui.end_row();
            });
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui.button("Plot Pressure Range").clicked() {
                self.plot_range();
            }
            if ui.button("Create DataFrame").clicked() {
                self.create_table();
            }
        });
        if let Some(err) = &self.range_error {
            let color = ui.visuals().error_fg_color;
            ui.colored_label(color, err);
        }

        if let Some(table) = &self.plot_table {
            ui.add_space(10.0);
            ui.strong("Saturated Steam Curve Against Pressure");
            let pts = table.plot_points();
            Plot::new("steam_curve")
                .height(300.0)
                .x_axis_label(CSV_HEADER[0])
                .y_axis_label(CSV_HEADER[1])
                .show(ui, |plot_ui| {
                    plot_ui.line(Line::new(PlotPoints::from(pts.clone())));
                    plot_ui.points(Points::new(pts).radius(3.0));
                });
        }

        let mut save_to = None;
        if let Some(table) = &self.frame_table {
            ui.add_space(10.0);
            egui::ScrollArea::vertical()
                .max_height(260.0)
                .show(ui, |ui| {
                    egui::Grid::new("frame_grid")
                        .num_columns(2)
                        .striped(true)
                        .spacing([24.0, 4.0])
                        .show(ui, |ui| {
                            ui.strong(CSV_HEADER[0]);
                            ui.strong(CSV_HEADER[1]);
                            ui.end_row();
                            for p in &table.points {
                                ui.label(p.pressure_bar.to_string());
                                ui.label(format!("{:.4}", p.temperature_celsius));
                                ui.end_row();
                            }
                        });
                });
            if ui.button("Download CSV").clicked() {
                save_to = FileDialog::new()
                    .set_file_name(self.config.csv_file_name.as_str())
                    .add_filter("CSV", &["csv"])
                    .save_file();
            }
        }
        if let Some(path) = save_to {
            self.save_csv(&path);
        }
        if let Some(status) = &self.save_status {
            ui.label(status);
        }
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.ensure_logo(ctx);

        egui::SidePanel::left("nav")
            .resizable(false)
            .show(ctx, |ui| self.ui_nav(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                if let Some(tex) = &self.logo {
                    ui.add(egui::Image::new(egui::load::SizedTexture::new(
                        tex.id(),
                        tex.size_vec2(),
                    )));
                }
                ui.heading("Saturated Steam Tables");
                ui.separator();
                match self.page {
                    Page::SaturatedTemperature => self.ui_saturated_temperature(ui),
                    Page::SteamTables => self.ui_steam_tables(ui),
                }
            });
        });
    }
}
