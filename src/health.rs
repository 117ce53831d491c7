use axum::{routing::get, Json, Router};
use serde::Serialize;
use time::OffsetDateTime;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub ok: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub time: OffsetDateTime,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/ping", get(ping))
}

pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse {
        ok: true,
        time: OffsetDateTime::now_utc(),
    })
}
