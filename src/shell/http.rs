use async_graphql::http::GraphiQLSource;
use axum::{
    Extension, Router,
    response::Html,
    routing::{get, post, put},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::modules::work_timers::use_cases::get_active_work_timer::inbound::http as active_http;
use crate::modules::work_timers::use_cases::list_ticket_work_timers::inbound::http as list_http;
use crate::modules::work_timers::use_cases::pause_work_timer::inbound::http as pause_http;
use crate::modules::work_timers::use_cases::resume_work_timer::inbound::http as resume_http;
use crate::modules::work_timers::use_cases::start_work_timer::inbound::http as start_http;
use crate::modules::work_timers::use_cases::stop_work_timer::inbound::http as stop_http;
use crate::shell::graphql::{AppSchema, graphql};
use crate::shell::state::AppState;

pub fn router(state: AppState, schema: AppSchema, graphql_path: &str) -> Router {
    let endpoint = graphql_path.to_string();
    let graphiql = move || {
        let page = GraphiQLSource::build().endpoint(&endpoint).finish();
        async move { Html(page) }
    };

    Router::new()
        .route("/tickets/{ticket_id}/timer/active", get(active_http::handle))
        .route("/tickets/{ticket_id}/timer/start", post(start_http::handle))
        .route("/tickets/{ticket_id}/timers", get(list_http::handle))
        .route("/timers/{timer_id}/pause", put(pause_http::handle))
        .route("/timers/{timer_id}/resume", put(resume_http::handle))
        .route("/timers/{timer_id}/stop", put(stop_http::handle))
        .route(graphql_path, get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
