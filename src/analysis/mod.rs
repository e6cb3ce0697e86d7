//! 원격 해석 서비스와의 요청/응답 왕복을 담당한다.

pub mod client;
pub mod request;
pub mod response;
