use axum::{
    Router,
    routing::get,
};

use scheduling_cell::{scheduling_routes, SchedulingState};

pub fn create_router(state: SchedulingState) -> Router {
    Router::new()
        .route("/", get(|| async { "Slot booking API is running!" }))
        .merge(scheduling_routes(state))
}
