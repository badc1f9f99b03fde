use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::Html,
    routing::get,
    Json, Router,
};
use gpp_core::{capacity_distribution, fuel_share, rank_plants, CountryView, DatasetSummary};
use gpp_viz::{distribution_chart, fuel_share_chart, ranking_chart, CountryFigures, Figure};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::state::DashboardState;

const INDEX_HTML: &str = include_str!("../assets/index.html");

#[derive(Debug, Default, Deserialize)]
pub struct CountryParams {
    pub country: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CountryList {
    pub default: String,
    pub countries: Vec<String>,
}

pub fn router(state: Arc<DashboardState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/summary", get(summary))
        .route("/api/countries", get(countries))
        .route("/api/choropleth", get(choropleth_figure))
        .route("/api/ranking", get(ranking))
        .route("/api/fuel-share", get(fuel_share_figure))
        .route("/api/distribution", get(distribution))
        .route("/api/country", get(country_figures))
        .layer(Extension(state))
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn summary(Extension(state): Extension<Arc<DashboardState>>) -> Json<DatasetSummary> {
    Json(state.summary)
}

async fn countries(Extension(state): Extension<Arc<DashboardState>>) -> Json<CountryList> {
    Json(CountryList {
        default: state.default_country.clone(),
        countries: state.countries.clone(),
    })
}

async fn choropleth_figure(Extension(state): Extension<Arc<DashboardState>>) -> Json<Figure> {
    Json(state.choropleth.clone())
}

async fn ranking(
    Query(params): Query<CountryParams>,
    Extension(state): Extension<Arc<DashboardState>>,
) -> Json<Figure> {
    let country = state.resolve_country(params.country.as_deref());
    debug!(%country, "ranking requested");
    Json(ranking_chart(&rank_plants(&state.dataset, country)))
}

async fn fuel_share_figure(
    Query(params): Query<CountryParams>,
    Extension(state): Extension<Arc<DashboardState>>,
) -> Json<Figure> {
    let country = state.resolve_country(params.country.as_deref());
    debug!(%country, "fuel share requested");
    Json(fuel_share_chart(&fuel_share(&state.dataset, country)))
}

async fn distribution(
    Query(params): Query<CountryParams>,
    Extension(state): Extension<Arc<DashboardState>>,
) -> Json<Figure> {
    let country = state.resolve_country(params.country.as_deref());
    debug!(%country, "distribution requested");
    Json(distribution_chart(&capacity_distribution(
        &state.dataset,
        country,
    )))
}

/// The three aggregates fan out on the rayon pool, so they run on a blocking
/// thread rather than the async worker.
async fn country_figures(
    Query(params): Query<CountryParams>,
    Extension(state): Extension<Arc<DashboardState>>,
) -> Result<Json<CountryFigures>, StatusCode> {
    let country = state.resolve_country(params.country.as_deref()).to_string();
    debug!(%country, "country view requested");
    let figures = tokio::task::spawn_blocking(move || {
        let view = CountryView::compute(&state.dataset, &country);
        CountryFigures::from_view(&view)
    })
    .await
    .map_err(|err| {
        error!(%err, "country view task failed");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    Ok(Json(figures))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpp_core::{PlantDataset, PowerPlantRecord};
    use serde_json::Value;

    fn state() -> Arc<DashboardState> {
        let dataset = PlantDataset::new(vec![
            PowerPlantRecord::new("Indonesia", "IDN", "Suralaya", "Coal", 3400.0)
                .with_start_year(1985),
            PowerPlantRecord::new("Indonesia", "IDN", "Cirata", "Hydro", 1008.0)
                .with_start_year(1988),
            PowerPlantRecord::new("Kenya", "KEN", "Olkaria", "Geothermal", 150.0),
        ]);
        Arc::new(DashboardState::new(Arc::new(dataset), "Indonesia"))
    }

    fn params(country: &str) -> Query<CountryParams> {
        Query(CountryParams {
            country: Some(country.to_string()),
        })
    }

    #[tokio::test]
    async fn test_missing_country_uses_default() {
        let Json(figure) = ranking(Query(CountryParams::default()), Extension(state())).await;
        let json = serde_json::to_value(&figure).unwrap();
        assert_eq!(
            json["layout"]["title"]["text"],
            "Ranking of Overall Power Plants in Indonesia"
        );
        assert_eq!(json["data"][0]["y"][1], "Suralaya");
    }

    #[tokio::test]
    async fn test_unknown_country_returns_empty_figures() {
        let Json(figures) = country_figures(params("Atlantis"), Extension(state()))
            .await
            .unwrap();
        let json: Value = serde_json::to_value(&figures).unwrap();
        assert_eq!(json["ranking"]["data"][0]["y"], serde_json::json!([]));
        assert_eq!(json["fuel_share"]["data"][0]["labels"], serde_json::json!([]));
        assert_eq!(figures.distribution.trace_count(), 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn test_country_view_runs_off_the_worker() {
        let Json(figures) = country_figures(params("Indonesia"), Extension(state()))
            .await
            .unwrap();
        let json = serde_json::to_value(&figures).unwrap();
        assert_eq!(json["ranking"]["data"][0]["y"], serde_json::json!(["Cirata", "Suralaya"]));
        assert_eq!(figures.distribution.trace_count(), 1);
    }

    #[tokio::test]
    async fn test_fuel_share_and_distribution_endpoints() {
        let Json(pie) = fuel_share_figure(params("Kenya"), Extension(state())).await;
        let json = serde_json::to_value(&pie).unwrap();
        assert_eq!(json["data"][0]["labels"], serde_json::json!(["Geothermal"]));

        let Json(boxes) = distribution(params("Indonesia"), Extension(state())).await;
        // Suralaya is above the outlier threshold
        assert_eq!(boxes.trace_count(), 1);
    }

    #[tokio::test]
    async fn test_summary_countries_and_cached_map() {
        let state = state();
        let Json(summary) = summary(Extension(state.clone())).await;
        assert_eq!(summary.country_count, 2);
        assert_eq!(summary.plant_count, 3);

        let Json(list) = countries(Extension(state.clone())).await;
        assert_eq!(list.default, "Indonesia");
        assert_eq!(list.countries, ["Indonesia", "Kenya"]);

        let Json(map) = choropleth_figure(Extension(state)).await;
        assert_eq!(map.frames.len(), 2);
    }

    #[tokio::test]
    async fn test_index_serves_dashboard() {
        let Html(body) = index().await;
        assert!(body.contains("Global Power Plant"));
        // failed slot fetches draw a placeholder instead of leaving the old chart
        assert!(body.contains("catch (err)"));
        assert!(body.contains("Could not load"));
        let _router = router(state());
    }
}
