#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 대시보드 GUI 진입점.
//! 해석 왕복은 워커 스레드에서 수행하고 UI 스레드는 채널만 폴링한다.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use std::sync::mpsc;
use std::{env, fs, path::Path, thread};

use htc_cycle_dashboard::{
    analysis::client::{AnalysisClient, AnalysisError, RequestTracker},
    analysis::request::AnalysisRequest,
    analysis::response::AnalysisResponse,
    charts::{self, ChartId, CurveSpec},
    config,
    i18n::{self, keys},
    metrics::METRIC_FIELDS,
};

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt().init();

    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/en-us/ko-kr/ko)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if a == "--lang" || a == "-L" {
            if i + 1 < args.len() {
                cli_lang = Some(args[i + 1].clone());
                i += 1;
            }
        }
        i += 1;
    }

    let icon_data = load_app_icon();
    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(egui::vec2(1100.0, 780.0))
        .with_transparent(true);
    if let Some(icon) = icon_data {
        viewport = viewport.with_icon(icon);
    }
    let native = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    let mut app_cfg = config::load_or_default().unwrap_or_default();
    if let Some(lang_cli) = cli_lang {
        let resolved = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
        app_cfg.language = resolved;
    }

    eframe::run_native(
        "HTC Combined Cycle Dashboard",
        native,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                tracing::warn!("font setup: {e}");
            }
            Box::new(GuiApp::new(app_cfg.clone()))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../icon.png"];
    let path = search
        .iter()
        .find(|p| Path::new(*p).exists())
        .map(|s| s.to_string())?;
    let bytes = fs::read(&path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// 공통: 바이너리 폰트 바이트를 egui에 등록.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .insert(0, font_name);
    ctx.set_fonts(fonts);
}

/// 한글 표시를 위해 시스템 CJK 폰트를 탐색해 적용한다.
/// 1) assets/fonts/ 아래 사용자 폰트
/// 2) Windows 시스템 폰트(맑은 고딕/굴림 등)
/// 3) Linux/macOS의 Noto/나눔 계열
/// 모두 실패하면 Err를 반환하고 기본 폰트를 유지한다(영문 표시는 문제 없음).
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let asset_path = Path::new("assets/fonts/app_font.ttf");
    if asset_path.exists() {
        let bytes = fs::read(asset_path).map_err(|e| format!("Failed to read font file: {e}"))?;
        apply_font_bytes(ctx, bytes, "user_font");
        return Ok(());
    }

    if let Some(windir) = std::env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        let candidates = ["malgun.ttf", "malgunsl.ttf", "gulim.ttc", "batang.ttc"];
        for cand in candidates {
            let p = fonts.join(cand);
            if p.exists() {
                let bytes = fs::read(&p)
                    .map_err(|e| format!("Failed to read system font ({}): {e}", p.display()))?;
                apply_font_bytes(ctx, bytes, "korean_font");
                return Ok(());
            }
        }
    }

    let unix_candidates = [
        "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
        "/System/Library/Fonts/AppleSDGothicNeo.ttc",
    ];
    for cand in unix_candidates {
        let p = Path::new(cand);
        if p.exists() {
            let bytes = fs::read(p)
                .map_err(|e| format!("Failed to read system font ({}): {e}", p.display()))?;
            apply_font_bytes(ctx, bytes, "korean_font");
            return Ok(());
        }
    }

    Err("CJK font not found; falling back to default fonts.".into())
}

/// 워커 스레드가 돌려보내는 결과: (요청 일련번호, 해석 결과).
type WorkerResult = (u64, Result<AnalysisResponse, AnalysisError>);

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    // 설정 모달 입력
    lang_input: String,
    endpoint_input: String,
    save_status: Option<String>,
    ui_scale: f32,
    window_alpha: f32,
    show_settings_modal: bool,
    show_about_modal: bool,
    // 운전 조건 입력 (자유 텍스트, 파싱은 요청 조립 시점에)
    gt_temp_input: String,
    comp_ratio_input: String,
    htc_press_input: String,
    biomass_flow_input: String,
    // 요청 수명주기
    client: AnalysisClient,
    busy: bool,
    tracker: RequestTracker,
    tx: mpsc::Sender<WorkerResult>,
    rx: mpsc::Receiver<WorkerResult>,
    run_on_start: bool,
    // 렌더링 상태
    metric_texts: Vec<String>,
    hs_curves: Vec<CurveSpec>,
    th_curves: Vec<CurveSpec>,
    error_notice: Option<String>,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let lang_code = i18n::resolve_language("auto", Some(config.language.as_str()));
        let tr = i18n::Translator::new_with_pack(&lang_code, config.language_pack_dir.as_deref());
        tracing::info!(lang = %lang_code, endpoint = %config.endpoint_url, "GUI starting");
        let (tx, rx) = mpsc::channel();
        let placeholder = tr.t(keys::METRIC_PLACEHOLDER).to_string();
        Self {
            lang_input: config.language.clone(),
            endpoint_input: config.endpoint_url.clone(),
            save_status: None,
            ui_scale: 1.0,
            window_alpha: config.window_alpha.clamp(0.3, 1.0),
            show_settings_modal: false,
            show_about_modal: false,
            gt_temp_input: "1300".into(),
            comp_ratio_input: "15".into(),
            htc_press_input: "20".into(),
            biomass_flow_input: "5".into(),
            client: AnalysisClient::new(config.endpoint_url.clone()),
            busy: false,
            tracker: RequestTracker::default(),
            tx,
            rx,
            run_on_start: true,
            metric_texts: vec![placeholder; METRIC_FIELDS.len()],
            hs_curves: Vec::new(),
            th_curves: Vec::new(),
            error_notice: None,
            config,
            tr,
        }
    }

    /// 현재 입력 필드로 요청을 조립해 워커 스레드에서 왕복시킨다.
    /// 진행 중 재요청을 막지 않는다. 대신 일련번호가 오래된 응답은 버려진다.
    fn start_analysis(&mut self, ctx: &egui::Context) {
        let req = AnalysisRequest::from_fields(
            &self.gt_temp_input,
            &self.comp_ratio_input,
            &self.htc_press_input,
            &self.biomass_flow_input,
        );
        let seq = self.tracker.issue();
        self.busy = true;
        let client = self.client.clone();
        let tx = self.tx.clone();
        let ctx = ctx.clone();
        thread::spawn(move || {
            let result = client.analyze(&req);
            // 수신 측이 먼저 종료한 경우는 조용히 버린다.
            let _ = tx.send((seq, result));
            ctx.request_repaint();
        });
    }

    /// 워커 결과를 소진한다. 어떤 결과든 최신 요청의 것이면 바쁨 상태를
    /// 해제하므로 트리거 컨트롤 복원은 모든 종료 경로에서 일어난다.
    fn poll_worker(&mut self) {
        while let Ok((seq, result)) = self.rx.try_recv() {
            if !self.tracker.accepts(seq) {
                tracing::debug!(seq, latest = self.tracker.latest(), "discarding stale response");
                continue;
            }
            self.busy = false;
            match result {
                Ok(resp) => self.apply_response(&resp),
                Err(e) => self.error_notice = Some(e.user_notice(&self.tr)),
            }
        }
    }

    /// 성공 응답을 화면 상태로 매핑한다. 실패 시에는 호출되지 않으므로
    /// 차트 표면은 직전 내용을 유지한다.
    fn apply_response(&mut self, resp: &AnalysisResponse) {
        self.metric_texts = METRIC_FIELDS
            .iter()
            .map(|kind| kind.format(&resp.metrics))
            .collect();
        self.hs_curves = charts::hs_curves(&resp.charts.hs);
        self.th_curves = charts::th_curves(&resp.charts.th);
    }

    fn ui_inputs(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.strong(self.tr.t(keys::INPUT_HEADING));
        egui::Grid::new("operating_params")
            .num_columns(4)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                ui.label(self.tr.t(keys::INPUT_GT_TEMP));
                ui.add(egui::TextEdit::singleline(&mut self.gt_temp_input).desired_width(90.0));
                ui.label(self.tr.t(keys::INPUT_COMP_RATIO));
                ui.add(egui::TextEdit::singleline(&mut self.comp_ratio_input).desired_width(90.0));
                ui.end_row();
                ui.label(self.tr.t(keys::INPUT_HTC_PRESS));
                ui.add(egui::TextEdit::singleline(&mut self.htc_press_input).desired_width(90.0));
                ui.label(self.tr.t(keys::INPUT_BIOMASS_FLOW));
                ui.add(
                    egui::TextEdit::singleline(&mut self.biomass_flow_input).desired_width(90.0),
                );
                ui.end_row();
            });
        ui.add_space(6.0);
        let label = if self.busy {
            self.tr.t(keys::ANALYZE_BUSY)
        } else {
            self.tr.t(keys::ANALYZE_BUTTON)
        };
        let button = egui::Button::new(label).min_size(egui::vec2(140.0, 28.0));
        if ui.add_enabled(!self.busy, button).clicked() {
            self.start_analysis(ctx);
        }
    }

    fn ui_metrics(&mut self, ui: &mut egui::Ui) {
        ui.strong(self.tr.t(keys::METRIC_HEADING));
        ui.horizontal(|ui| {
            for (kind, text) in METRIC_FIELDS.iter().zip(self.metric_texts.iter()) {
                ui.group(|ui| {
                    ui.vertical(|ui| {
                        ui.label(self.tr.t(kind.label_key()));
                        ui.heading(text);
                    });
                });
            }
        });
    }

    fn ui_charts(&mut self, ui: &mut egui::Ui) {
        charts::draw_chart(ui, &self.tr, ChartId::HsDiagram, &self.hs_curves, 260.0);
        ui.add_space(10.0);
        charts::draw_chart(ui, &self.tr, ChartId::ThDiagram, &self.th_curves, 260.0);
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        // 시작 직후 1회 자동 해석
        if self.run_on_start {
            self.run_on_start = false;
            self.start_analysis(ctx);
        }

        self.poll_worker();

        // 투명도 적용 + 라벨 복사 방지 스타일
        let mut style = (*ctx.style()).clone();
        style.interaction.selectable_labels = false;
        style.visuals.window_fill = style.visuals.window_fill.linear_multiply(self.window_alpha);
        style.visuals.panel_fill = style.visuals.panel_fill.linear_multiply(self.window_alpha);
        ctx.set_style(style);

        // 상단 바
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(self.tr.t(keys::APP_TITLE));
                ui.label(self.tr.t(keys::APP_SUBTITLE));
                ui.separator();
                if ui.button(self.tr.t(keys::SETTINGS_TITLE)).clicked() {
                    self.show_settings_modal = true;
                }
                if ui.button(self.tr.t(keys::ABOUT_TITLE)).clicked() {
                    self.show_about_modal = true;
                }
            });
        });

        // 설정 모달
        if self.show_settings_modal {
            egui::Window::new(self.tr.t(keys::SETTINGS_TITLE))
                .collapsible(false)
                .resizable(true)
                .open(&mut self.show_settings_modal)
                .show(ctx, |ui| {
                    ui.label(self.tr.t(keys::SETTINGS_LANG));
                    egui::ComboBox::from_id_source("lang_choice")
                        .selected_text(&self.lang_input)
                        .show_ui(ui, |ui| {
                            ui.selectable_value(
                                &mut self.lang_input,
                                "auto".into(),
                                self.tr.t(keys::SETTINGS_LANG_AUTO),
                            );
                            ui.selectable_value(&mut self.lang_input, "en-us".into(), "English (US)");
                            ui.selectable_value(&mut self.lang_input, "ko-kr".into(), "한국어");
                        });
                    ui.separator();
                    ui.label(self.tr.t(keys::SETTINGS_ENDPOINT));
                    ui.add(
                        egui::TextEdit::singleline(&mut self.endpoint_input).desired_width(280.0),
                    );
                    ui.separator();
                    ui.label(self.tr.t(keys::SETTINGS_UI_SCALE));
                    if ui
                        .add(egui::Slider::new(&mut self.ui_scale, 0.8..=1.6).suffix(" x"))
                        .changed()
                    {
                        ctx.set_pixels_per_point(self.ui_scale);
                    }
                    ui.label(self.tr.t(keys::SETTINGS_ALPHA));
                    ui.add(egui::Slider::new(&mut self.window_alpha, 0.3..=1.0).text("alpha"));
                    ui.separator();
                    if ui.button(self.tr.t(keys::SETTINGS_SAVE)).clicked() {
                        self.config.language = self.lang_input.clone();
                        self.config.window_alpha = self.window_alpha;
                        self.config.endpoint_url = self.endpoint_input.clone();
                        // 즉시 반영: 번역기와 클라이언트를 다시 만든다
                        let resolved = i18n::resolve_language(&self.config.language, None);
                        self.tr = i18n::Translator::new_with_pack(
                            &resolved,
                            self.config.language_pack_dir.as_deref(),
                        );
                        self.client = AnalysisClient::new(self.config.endpoint_url.clone());
                        if let Err(e) = self.config.save() {
                            self.save_status = Some(format!("Save error: {e}"));
                        } else {
                            self.save_status = Some(self.tr.t(keys::SETTINGS_SAVED).to_string());
                        }
                    }
                    if let Some(msg) = &self.save_status {
                        ui.label(msg);
                    }
                });
        }

        // 도움말 모달
        if self.show_about_modal {
            egui::Window::new(self.tr.t(keys::ABOUT_TITLE))
                .collapsible(false)
                .resizable(true)
                .open(&mut self.show_about_modal)
                .show(ctx, |ui| {
                    ui.label(self.tr.t(keys::ABOUT_APP));
                    ui.label(self.tr.t(keys::ABOUT_HINT));
                });
        }

        // 차단형 오류 안내. 닫기 전까지 화면 위에 남는다.
        if let Some(notice) = self.error_notice.clone() {
            let mut close = false;
            egui::Window::new(self.tr.t(keys::ERROR_TITLE))
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
                .show(ctx, |ui| {
                    ui.label(notice);
                    ui.add_space(6.0);
                    if ui.button(self.tr.t(keys::ERROR_CLOSE)).clicked() {
                        close = true;
                    }
                });
            if close {
                self.error_notice = None;
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    self.ui_inputs(ui, ctx);
                    ui.separator();
                    self.ui_metrics(ui);
                    ui.separator();
                    self.ui_charts(ui);
                });
        });
    }
}
