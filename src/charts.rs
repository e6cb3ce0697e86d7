//! 해석 응답을 차트 기술자로 바꾸는 결정적 매핑과, 차트별 고정 표시 상수.
//! 데이터 매핑은 순수 함수로 두고 색/선폭 같은 코스메틱은 별도 표에서 가져온다.

use eframe::egui::{self, Color32};
use egui_plot::{Corner, Legend, Line, Plot, PlotPoints, Points};

use crate::analysis::response::{HsSeries, ThSeries};
use crate::i18n::{keys, Translator};

/// 차트 표면 식별자.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartId {
    /// 엔탈피-엔트로피 선도
    HsDiagram,
    /// 온도-누적열전달 선도
    ThDiagram,
}

impl ChartId {
    /// egui_plot에 넘기는 표면 ID. 호출마다 같은 표면을 통째로 대체한다.
    pub fn surface_id(&self) -> &'static str {
        match self {
            ChartId::HsDiagram => "hs_chart",
            ChartId::ThDiagram => "th_chart",
        }
    }
}

/// 곡선 하나의 표시 방식.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveStyle {
    pub color: Color32,
    pub width: f32,
    /// 연결선 위에 샘플점 마커를 함께 그릴지
    pub markers: bool,
    pub marker_radius: f32,
}

/// 곡선 하나: 좌표열 + 범례 이름 키 + 표시 방식.
/// 좌표는 응답 배열 순서를 그대로 보존한다.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveSpec {
    pub points: Vec<[f64; 2]>,
    pub name_key: &'static str,
    pub style: CurveStyle,
}

/// 차트 단위 레이아웃 기술자 (제목/축 라벨 키, 범례 위치).
#[derive(Debug, Clone, Copy)]
pub struct ChartPresentation {
    pub title_key: &'static str,
    pub x_axis_key: &'static str,
    pub y_axis_key: &'static str,
    /// None이면 범례를 그리지 않는다 (단일 곡선 차트).
    pub legend_corner: Option<Corner>,
}

/// h-s 곡선 스타일.
pub const HS_CURVE_STYLE: CurveStyle = CurveStyle {
    color: Color32::from_rgb(0x25, 0x63, 0xeb),
    width: 3.0,
    markers: true,
    marker_radius: 3.0,
};

/// T-Ḣ 배기가스 곡선 스타일.
pub const TH_GAS_STYLE: CurveStyle = CurveStyle {
    color: Color32::from_rgb(0xef, 0x44, 0x44),
    width: 3.0,
    markers: false,
    marker_radius: 0.0,
};

/// T-Ḣ 급수/증기 곡선 스타일.
pub const TH_STEAM_STYLE: CurveStyle = CurveStyle {
    color: Color32::from_rgb(0x3b, 0x82, 0xf6),
    width: 3.0,
    markers: false,
    marker_radius: 0.0,
};

/// 차트별 고정 표시 상수 표.
pub fn presentation(id: ChartId) -> ChartPresentation {
    match id {
        ChartId::HsDiagram => ChartPresentation {
            title_key: keys::CHART_HS_TITLE,
            x_axis_key: keys::CHART_HS_X,
            y_axis_key: keys::CHART_HS_Y,
            legend_corner: None,
        },
        ChartId::ThDiagram => ChartPresentation {
            title_key: keys::CHART_TH_TITLE,
            x_axis_key: keys::CHART_TH_X,
            y_axis_key: keys::CHART_TH_Y,
            // 범례는 플롯 영역 아래쪽에 배치한다.
            legend_corner: Some(Corner::LeftBottom),
        },
    }
}

/// h-s 응답 묶음을 곡선 하나로 매핑한다. x=엔트로피, y=엔탈피.
/// 집계/보간/재샘플링 없이 배열 순서를 그대로 넘긴다.
pub fn hs_curves(hs: &HsSeries) -> Vec<CurveSpec> {
    let points = hs
        .s
        .iter()
        .zip(hs.h.iter())
        .map(|(&s, &h)| [s, h])
        .collect();
    vec![CurveSpec {
        points,
        name_key: keys::CHART_HS_SERIES,
        style: HS_CURVE_STYLE,
    }]
}

/// T-Ḣ 응답 묶음을 독립 곡선 두 개(배기가스, 급수/증기)로 매핑한다.
pub fn th_curves(th: &ThSeries) -> Vec<CurveSpec> {
    let gas = th
        .gas_h
        .iter()
        .zip(th.gas_t.iter())
        .map(|(&q, &t)| [q, t])
        .collect();
    let steam = th
        .steam_h
        .iter()
        .zip(th.steam_t.iter())
        .map(|(&q, &t)| [q, t])
        .collect();
    vec![
        CurveSpec {
            points: gas,
            name_key: keys::CHART_TH_GAS,
            style: TH_GAS_STYLE,
        },
        CurveSpec {
            points: steam,
            name_key: keys::CHART_TH_STEAM,
            style: TH_STEAM_STYLE,
        },
    ]
}

/// 곡선 기술자들을 egui_plot 표면에 그린다. 이전 내용은 완전히 대체된다.
pub fn draw_chart(
    ui: &mut egui::Ui,
    tr: &Translator,
    id: ChartId,
    curves: &[CurveSpec],
    height: f32,
) {
    let pres = presentation(id);
    ui.strong(tr.t(pres.title_key));
    let mut plot = Plot::new(id.surface_id())
        .height(height)
        .x_axis_label(tr.t(pres.x_axis_key))
        .y_axis_label(tr.t(pres.y_axis_key));
    if let Some(corner) = pres.legend_corner {
        plot = plot.legend(Legend::default().position(corner));
    }
    plot.show(ui, |plot_ui| {
        for curve in curves {
            let line = Line::new(PlotPoints::from(curve.points.clone()))
                .color(curve.style.color)
                .width(curve.style.width)
                .name(tr.t(curve.name_key));
            plot_ui.line(line);
            if curve.style.markers {
                let marks = Points::new(PlotPoints::from(curve.points.clone()))
                    .color(curve.style.color)
                    .radius(curve.style.marker_radius)
                    .name(tr.t(curve.name_key));
                plot_ui.points(marks);
            }
        }
    });
}
