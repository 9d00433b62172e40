use std::sync::Arc;

use secrecy::ExposeSecret;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use campaign_brief::adapters::brandfetch::{self, BrandfetchClient};
use campaign_brief::adapters::documents::{DocumentServiceConfig, HttpDocumentService};
use campaign_brief::adapters::http::{api_router, BrandHandlers, RouterSettings, WizardHandlers};
use campaign_brief::application::handlers::{FetchSuggestionsHandler, ResolveBrandHandler};
use campaign_brief::application::{WizardRegistry, WizardServices};
use campaign_brief::config::{AppConfig, LogFormat, ValidationError};
use campaign_brief::ports::{BrandLookup, DocumentService};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    let lookup: Arc<dyn BrandLookup> = Arc::new(brand_lookup(&config)?);
    let documents: Arc<dyn DocumentService> = Arc::new(document_service(&config)?);

    let registry = Arc::new(WizardRegistry::new(
        WizardServices::new(Arc::clone(&lookup), documents),
        config.wizard_settings(),
    ));
    registry.spawn_sweeper();
    let brands = BrandHandlers::new(
        Arc::new(FetchSuggestionsHandler::new(Arc::clone(&lookup))),
        Arc::new(ResolveBrandHandler::new(lookup)),
    );
    let settings = RouterSettings {
        request_timeout: Some(config.server.request_timeout()),
        cors_origins: config.server.cors_origins_list(),
    };
    let app = api_router(brands, WizardHandlers::new(registry), &settings);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "campaign brief server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    match config.server.effective_log_format() {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}

fn brand_lookup(config: &AppConfig) -> Result<BrandfetchClient, Box<dyn std::error::Error>> {
    let api_key = config
        .brandfetch
        .api_key
        .as_ref()
        .ok_or(ValidationError::MissingRequired("BRANDFETCH__API_KEY"))?;

    let client_config = brandfetch::BrandfetchConfig::new(api_key.expose_secret().as_str())
        .with_base_url(config.brandfetch.base_url.clone())
        .with_timeout(config.brandfetch.timeout());
    Ok(BrandfetchClient::new(client_config)?)
}

fn document_service(config: &AppConfig) -> Result<HttpDocumentService, Box<dyn std::error::Error>> {
    let base_url = config
        .documents
        .base_url
        .clone()
        .ok_or(ValidationError::MissingRequired("DOCUMENTS__BASE_URL"))?;

    let mut service_config =
        DocumentServiceConfig::new(base_url).with_timeout(config.documents.timeout());
    if let Some(key) = config.documents.api_key() {
        service_config = service_config.with_api_key(key);
    }
    Ok(HttpDocumentService::new(service_config)?)
}
