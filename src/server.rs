use std::fmt::Write as _;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::{rejection::FormRejection, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;
use thiserror::Error;
use tokio::net::TcpListener;

use crate::data::filter::{recommend, Query, Recommendation};
use crate::data::model::FoodDataset;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Malformed form submission")]
    MalformedForm(#[from] FormRejection),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::MalformedForm { .. } => StatusCode::BAD_REQUEST,
        };
        (status, self.to_string()).into_response()
    }
}

// ---------------------------------------------------------------------------
// Inbound form
// ---------------------------------------------------------------------------

/// The six filter fields of the search form.
///
/// Each one is optional: a field left empty, or omitted from the submission
/// entirely, places no constraint. (The legacy handler failed hard on an
/// absent field even though the filter already tolerated empty ones; absent
/// and empty are unified here.)
#[derive(Debug, Default, Deserialize)]
pub struct RecommendForm {
    ingredients: Option<String>,
    region: Option<String>,
    state: Option<String>,
    diet: Option<String>,
    flavor_profile: Option<String>,
    course: Option<String>,
}

impl RecommendForm {
    fn into_query(self) -> Query {
        Query {
            ingredients: self.ingredients,
            state: self.state,
            region: self.region,
            diet: self.diet,
            flavor_profile: self.flavor_profile,
            course: self.course,
        }
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

pub fn router(dataset: Arc<FoodDataset>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/recommend", post(recommend_handler))
        .with_state(dataset)
}

async fn index_handler() -> Html<String> {
    Html(render_page(None))
}

async fn recommend_handler(
    State(dataset): State<Arc<FoodDataset>>,
    form: Result<Form<RecommendForm>, FormRejection>,
) -> Result<Html<String>, AppError> {
    let Form(form) = form?;
    let results = recommend(&dataset, &form.into_query());
    log::debug!("Query matched {} row(s)", results.len());
    Ok(Html(render_page(Some(&results))))
}

// ---------------------------------------------------------------------------
// Server lifecycle
// ---------------------------------------------------------------------------

/// Bind and serve until Ctrl+C.
///
/// The dataset is fully loaded before the listener accepts its first
/// connection, so handlers share it read-only without locking.
pub async fn serve(dataset: Arc<FoodDataset>, address: &str) -> anyhow::Result<()> {
    let app = router(dataset);

    let listener = TcpListener::bind(address)
        .await
        .with_context(|| format!("binding {address}"))?;
    log::info!("Serving on http://{address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => log::info!("Received Ctrl+C, shutting down"),
        Err(e) => log::error!("Failed to install Ctrl+C handler: {e}"),
    }
}

// ---------------------------------------------------------------------------
// HTML rendering
// ---------------------------------------------------------------------------

/// Render the search form, followed by the results table when a query has
/// been run. All row values pass through [`escape_html`].
fn render_page(results: Option<&[Recommendation]>) -> String {
    let mut page = String::from(
        "<!DOCTYPE html>\n<html>\n<head>\n<title>Food Recommender</title>\n</head>\n<body>\n\
         <h1>Find a dish</h1>\n\
         <form method=\"post\" action=\"/recommend\">\n",
    );
    for (field, label) in [
        ("ingredients", "Ingredients (comma-separated)"),
        ("state", "State"),
        ("region", "Region"),
        ("diet", "Diet"),
        ("flavor_profile", "Flavor profile"),
        ("course", "Course"),
    ] {
        let _ = writeln!(
            page,
            "<label>{label}: <input type=\"text\" name=\"{field}\"></label><br>"
        );
    }
    page.push_str("<button type=\"submit\">Recommend</button>\n</form>\n");

    if let Some(results) = results {
        render_results(&mut page, results);
    }

    page.push_str("</body>\n</html>\n");
    page
}

fn render_results(page: &mut String, results: &[Recommendation]) {
    if results.first().is_some_and(Recommendation::is_sentinel) {
        let _ = writeln!(
            page,
            "<p>{}</p>",
            escape_html(&Recommendation::no_matches().name)
        );
        return;
    }

    page.push_str(
        "<table border=\"1\">\n<tr><th>Name</th><th>Prep time</th><th>Cook time</th>\
         <th>Diet</th><th>Flavor</th><th>Course</th><th>State</th><th>Region</th></tr>\n",
    );
    for r in results {
        let _ = writeln!(
            page,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape_html(&r.name),
            r.prep_time,
            r.cook_time,
            escape_html(&r.diet),
            escape_html(&r.flavor_profile),
            escape_html(&r.course),
            escape_html(&r.state),
            escape_html(&r.region),
        );
    }
    page.push_str("</table>\n");
}

fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
