//! 차트 매핑 테스트. 응답 배열의 순서/길이가 그대로 곡선 기술자에
//! 넘어가는지, 표시 상수가 매핑과 분리되어 있는지 확인한다.
use htc_cycle_dashboard::analysis::response::{HsSeries, ThSeries};
use htc_cycle_dashboard::charts::{
    hs_curves, presentation, th_curves, ChartId, HS_CURVE_STYLE, TH_GAS_STYLE, TH_STEAM_STYLE,
};

#[test]
fn hs_maps_to_single_ordered_curve() {
    let hs = HsSeries {
        s: vec![1.0, 2.0, 3.0],
        h: vec![10.0, 20.0, 30.0],
    };
    let curves = hs_curves(&hs);
    assert_eq!(curves.len(), 1);
    assert_eq!(
        curves[0].points,
        vec![[1.0, 10.0], [2.0, 20.0], [3.0, 30.0]]
    );
    assert_eq!(curves[0].style, HS_CURVE_STYLE);
}

#[test]
fn hs_curve_keeps_revisited_points() {
    // 사이클 곡선은 시작점으로 되돌아온다. 중복 좌표도 재배열 없이 유지.
    let hs = HsSeries {
        s: vec![1.5, 7.5, 7.5, 1.5],
        h: vec![500.0, 3200.0, 2200.0, 500.0],
    };
    let curves = hs_curves(&hs);
    assert_eq!(curves[0].points.first(), curves[0].points.last());
    assert_eq!(curves[0].points.len(), 4);
}

#[test]
fn th_maps_to_two_independent_curves() {
    let th = ThSeries {
        gas_h: vec![0.0, 45000.0],
        gas_t: vec![620.0, 120.0],
        steam_h: vec![0.0, 8000.0, 45000.0],
        steam_t: vec![30.0, 212.0, 262.0],
    };
    let curves = th_curves(&th);
    assert_eq!(curves.len(), 2);
    // 배기가스가 먼저, 급수/증기가 나중. 서로 섞이지 않는다.
    assert_eq!(curves[0].points, vec![[0.0, 620.0], [45000.0, 120.0]]);
    assert_eq!(
        curves[1].points,
        vec![[0.0, 30.0], [8000.0, 212.0], [45000.0, 262.0]]
    );
    assert_eq!(curves[0].style, TH_GAS_STYLE);
    assert_eq!(curves[1].style, TH_STEAM_STYLE);
}

#[test]
fn empty_series_maps_to_empty_curve() {
    let hs = HsSeries {
        s: vec![],
        h: vec![],
    };
    let curves = hs_curves(&hs);
    assert_eq!(curves.len(), 1);
    assert!(curves[0].points.is_empty());
}

#[test]
fn presentation_constants_are_fixed_per_chart() {
    // 코스메틱은 차트 식별자로 조회하는 고정 표에서 나온다.
    let hs = presentation(ChartId::HsDiagram);
    let th = presentation(ChartId::ThDiagram);
    assert!(hs.legend_corner.is_none());
    assert!(th.legend_corner.is_some());
    assert_ne!(hs.title_key, th.title_key);
    assert_ne!(
        ChartId::HsDiagram.surface_id(),
        ChartId::ThDiagram.surface_id()
    );
    // 두 T-Ḣ 곡선은 색으로 구분된다.
    assert_ne!(TH_GAS_STYLE.color, TH_STEAM_STYLE.color);
    assert!(HS_CURVE_STYLE.markers);
    assert!(!TH_GAS_STYLE.markers);
}
