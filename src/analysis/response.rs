use serde::Deserialize;

/// 해석 서버 응답 전문. 필수 필드가 하나라도 빠지면 역직렬화 단계에서
/// 오류로 처리되고, 부분적으로 채워진 값은 만들어지지 않는다.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisResponse {
    pub metrics: CycleMetrics,
    pub charts: ChartData,
}

/// 성능 지표 묶음.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CycleMetrics {
    /// 종합 효율 (0~1 분율)
    pub efficiency: f64,
    /// 총 출력 [MW]
    pub power: f64,
    /// CO₂ 저감 지표 [%]
    pub co2: f64,
}

/// 두 선도의 샘플 데이터.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartData {
    pub hs: HsSeries,
    pub th: ThSeries,
}

/// h-s 선도용 단일 곡선. s와 h는 인덱스가 맞춰진 등길이 배열이다.
#[derive(Debug, Clone, Deserialize)]
pub struct HsSeries {
    /// 엔트로피 샘플 [kJ/kg·K]
    pub s: Vec<f64>,
    /// 엔탈피 샘플 [kJ/kg]
    pub h: Vec<f64>,
}

/// T-Ḣ 선도용 독립 곡선 두 개 (배기가스 냉각, 급수/증기 가열).
#[derive(Debug, Clone, Deserialize)]
pub struct ThSeries {
    /// 배기가스 누적 열전달 [kW]
    #[serde(rename = "gas_H")]
    pub gas_h: Vec<f64>,
    /// 배기가스 온도 [°C]
    #[serde(rename = "gas_T")]
    pub gas_t: Vec<f64>,
    /// 급수/증기 누적 열전달 [kW]
    #[serde(rename = "steam_H")]
    pub steam_h: Vec<f64>,
    /// 급수/증기 온도 [°C]
    #[serde(rename = "steam_T")]
    pub steam_t: Vec<f64>,
}

/// 응답 본문을 스키마에 따라 해석한다. 스키마와 다른 본문은 오류 값으로
/// 태깅되어 돌아오고, 호출 측에서 연결 실패와 같은 부류로 보고한다.
pub fn decode(body: &[u8]) -> Result<AnalysisResponse, serde_json::Error> {
    serde_json::from_slice(body)
}
