/// The form driving the bundled prediction service over a real socket
use home_price_estimator::{
    artifacts::{PriceModel, COLUMNS_FILE, MODEL_FILE},
    client::HttpPredictionClient,
    config::ServiceConfig,
    form::{build_page, EstimatorPage, BATH_GROUP, BHK_GROUP, LOCATIONS_SELECT, RESULT_BOX, SQFT_INPUT},
    handlers::AppState,
    notify::RecordingNotifier,
    server::create_router,
};
use std::sync::Arc;

fn write_artifacts(dir: &std::path::Path) {
    std::fs::write(
        dir.join(COLUMNS_FILE),
        r#"{"data_columns": ["total_sqft", "bath", "bhk", "clifton", "orangi town", "saddar"]}"#,
    )
    .unwrap();
    std::fs::write(
        dir.join(MODEL_FILE),
        r#"{"intercept": 2.0, "coefficients": [0.1, 1.5, 2.5, 60.0, -10.0, 15.0]}"#,
    )
    .unwrap();
}

async fn spawn_service() -> String {
    let dir = tempfile::tempdir().unwrap();
    write_artifacts(dir.path());
    let model = PriceModel::load(dir.path()).unwrap();

    let app = create_router(AppState {
        model: Arc::new(model),
    });
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn test_load_then_estimate() {
    let base_url = spawn_service().await;
    let notifier = Arc::new(RecordingNotifier::new());
    let client = HttpPredictionClient::from_config(&ServiceConfig {
        base_url,
        timeout_seconds: Some(5),
    });
    let page = EstimatorPage::new(Arc::new(build_page()), Arc::new(client), notifier.clone());

    assert_eq!(page.on_page_load().await.unwrap(), 3);
    let doc = page.document();
    assert_eq!(doc.value(LOCATIONS_SELECT).unwrap(), "clifton");

    doc.set_value(SQFT_INPUT, "1000").unwrap();
    doc.check_radio(BHK_GROUP, "2");
    doc.check_radio(BATH_GROUP, "2");
    assert!(doc.select_option(LOCATIONS_SELECT, "orangi town").unwrap());

    // 2 + 100 + 3 + 5 - 10
    let price = page.on_clicked_estimate_price().await.unwrap();
    assert_eq!(price, 100.0);
    assert_eq!(doc.text(RESULT_BOX).unwrap(), "100 Lakh");
    assert!(notifier.messages().is_empty());
}
