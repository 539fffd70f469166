//! Settings API endpoints - JSON API

use axum::extract::State;
use axum::Json;
use bankweb_config::Config;

use crate::AppState;

pub async fn api_settings(State(state): State<AppState>) -> Json<Config> {
    Json(state.config.clone())
}

#[cfg(test)]
mod tests {
    use crate::create_router;
    use crate::test_support::{body_string, loaded_state, PRODUCTS};
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_settings_json() {
        let (_dir, state) = loaded_state(PRODUCTS).await;
        let response = create_router(state)
            .oneshot(Request::builder().uri("/api/settings").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();

        assert_eq!(json["server"]["port"], 8081);
        assert_eq!(json["accordion"]["allow_multiple"], false);
        assert_eq!(json["currency"]["default_currency"], "EUR");
    }
}
