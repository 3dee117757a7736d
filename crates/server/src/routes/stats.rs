use crate::error::ServerResult;
use crate::state::ServerState;
use axum::extract::State;
use axum::Json;
use lexreport::{MetricRecord, TOP_METRICS};
use std::sync::Arc;

/// Top word metrics
///
/// Returns at most five `{id, word, frequency}` records, most frequent
/// first; an empty store yields an empty array.
pub async fn top_metrics(
    State(state): State<Arc<ServerState>>,
) -> ServerResult<Json<Vec<MetricRecord>>> {
    let store = state.store.clone();
    let records = tokio::task::spawn_blocking(move || store.top(TOP_METRICS)).await??;
    Ok(Json(records))
}
