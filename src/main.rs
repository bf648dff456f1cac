use std::time::Duration;

use poem::{listener::TcpListener, Route, Server};
use poem_openapi::OpenApiService;

use reusela_backend::api::{HealthApi, ItemsApi, RatingsApi, RequestsApi};
use reusela_backend::config::{self, init_logging, AppSettings};
use reusela_backend::AppData;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    init_logging().expect("Failed to initialize logging");

    let settings = AppSettings::from_env().expect("Failed to load settings");

    let db = config::database::connect_and_migrate(&settings.database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!(database_url = %settings.database_url, "Connected to database");

    let dispatch_interval = Duration::from_secs(settings.dispatch_interval_secs);
    let bind_addr = settings.bind_addr.clone();

    let app_data = AppData::init(db, settings);

    // Outbox dispatcher runs for the lifetime of the process
    app_data.dispatcher.clone().spawn(dispatch_interval);

    let items_api = ItemsApi::new(
        app_data.db.clone(),
        app_data.item_store.clone(),
        app_data.token_service.clone(),
    );
    let requests_api = RequestsApi::new(
        app_data.db.clone(),
        app_data.lifecycle.clone(),
        app_data.request_store.clone(),
        app_data.token_service.clone(),
    );
    let ratings_api = RatingsApi::new(
        app_data.db.clone(),
        app_data.item_store.clone(),
        app_data.rating_store.clone(),
        app_data.token_service.clone(),
    );

    let api_service = OpenApiService::new(
        (HealthApi, items_api, requests_api, ratings_api),
        "ReuseLa API",
        "1.0.0",
    )
    .server(format!("http://{}/api", bind_addr));

    let ui = api_service.swagger_ui();

    // Compose routes: nest API service under /api and Swagger UI under /swagger
    let app = Route::new().nest("/api", api_service).nest("/swagger", ui);

    tracing::info!(addr = %bind_addr, "Starting server");

    Server::new(TcpListener::bind(bind_addr)).run(app).await
}
