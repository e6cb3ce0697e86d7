//! 지표 포맷 회귀 테스트. 소수 1자리 고정 + 접미사, 효율은 분율×100.
use htc_cycle_dashboard::analysis::response::CycleMetrics;
use htc_cycle_dashboard::metrics::{
    format_co2, format_efficiency, format_power, MetricKind, METRIC_FIELDS,
};

#[test]
fn efficiency_scales_fraction_to_percent() {
    assert_eq!(format_efficiency(0.423), "42.3%");
    assert_eq!(format_efficiency(0.0), "0.0%");
    assert_eq!(format_efficiency(1.0), "100.0%");
}

#[test]
fn power_formats_one_decimal_with_unit() {
    assert_eq!(format_power(512.345), "512.3 MW");
    assert_eq!(format_power(12.0), "12.0 MW");
}

#[test]
fn co2_is_already_percent_scale() {
    assert_eq!(format_co2(19.04), "19.0%");
    assert_eq!(format_co2(15.85), "15.8%");
}

#[test]
fn metric_table_is_keyed_one_to_one() {
    let m = CycleMetrics {
        efficiency: 0.5,
        power: 10.0,
        co2: 20.0,
    };
    let texts: Vec<String> = METRIC_FIELDS.iter().map(|k| k.format(&m)).collect();
    assert_eq!(texts, vec!["50.0%", "10.0 MW", "20.0%"]);

    // 각 지표는 고유한 UI 필드로 간다 (위치가 아닌 키 대응).
    let mut label_keys: Vec<&str> = METRIC_FIELDS.iter().map(|k| k.label_key()).collect();
    label_keys.sort_unstable();
    label_keys.dedup();
    assert_eq!(label_keys.len(), METRIC_FIELDS.len());
    assert_eq!(
        MetricKind::Efficiency.format(&m),
        format_efficiency(m.efficiency)
    );
}
