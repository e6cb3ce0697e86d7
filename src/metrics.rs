//! 성능 지표를 텍스트 필드로 바꾸는 고정 대응표와 포맷 규칙.

use crate::analysis::response::CycleMetrics;
use crate::i18n::keys;

/// 지표 종류. 응답의 지표 키와 1:1로 대응한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    /// 종합 효율 (응답은 0~1 분율, 표시 시 ×100)
    Efficiency,
    /// 총 출력 [MW]
    Power,
    /// CO₂ 저감 [%]
    Co2,
}

/// 지표 키 → UI 필드 라벨 키의 고정 표. 위치가 아니라 키로 대응하므로
/// 효율 지표가 늘어나면(가스/증기 분리 등) 행을 추가하면 된다.
pub const METRIC_FIELDS: &[MetricKind] = &[
    MetricKind::Efficiency,
    MetricKind::Power,
    MetricKind::Co2,
];

impl MetricKind {
    pub fn label_key(&self) -> &'static str {
        match self {
            MetricKind::Efficiency => keys::METRIC_EFFICIENCY,
            MetricKind::Power => keys::METRIC_POWER,
            MetricKind::Co2 => keys::METRIC_CO2,
        }
    }

    /// 응답 지표 묶음에서 해당 필드 값을 꺼내 포맷한다.
    pub fn format(&self, metrics: &CycleMetrics) -> String {
        match self {
            MetricKind::Efficiency => format_efficiency(metrics.efficiency),
            MetricKind::Power => format_power(metrics.power),
            MetricKind::Co2 => format_co2(metrics.co2),
        }
    }
}

/// 0~1 분율 효율을 백분율로 환산해 소수 1자리로 포맷한다.
pub fn format_efficiency(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

/// 출력 [MW]을 소수 1자리로 포맷한다.
pub fn format_power(mw: f64) -> String {
    format!("{mw:.1} MW")
}

/// CO₂ 저감 지표(이미 백분율 스케일)를 소수 1자리로 포맷한다.
pub fn format_co2(percent: f64) -> String {
    format!("{percent:.1}%")
}
