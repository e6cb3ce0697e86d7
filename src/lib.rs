//! 원격 사이클 해석 서비스용 대시보드 클라이언트의 핵심 로직.
//! GUI 바이너리를 얇게 유지하기 위해 요청 조립/응답 해석/차트 매핑을 라이브러리로 분리한다.

pub mod analysis;
pub mod charts;
pub mod config;
pub mod i18n;
pub mod metrics;
