use actix_cors::Cors;
use actix_web::middleware::Compress;
use actix_web::{http::header, web, App, HttpServer};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

pub mod generators;
pub mod pack;

/// Error body returned for every failed request: `{"error": "<message>"}`.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Server configuration, built once at process start and handed to `run`.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub allowed_origins: Vec<String>,
}

impl ServerConfig {
    /// Read configuration from the environment, falling back to local
    /// development defaults.
    pub fn from_env() -> Self {
        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let allowed_origins = std::env::var("ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(|origin| origin.trim().to_string())
                    .filter(|origin| !origin.is_empty())
                    .collect()
            })
            .unwrap_or_else(|_| {
                vec![
                    "http://localhost:5173".to_string(),
                    "http://localhost:3000".to_string(),
                    "http://127.0.0.1:8080".to_string(),
                ]
            });

        Self {
            bind_addr,
            allowed_origins,
        }
    }
}

pub async fn run(config: ServerConfig) -> std::io::Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        unsafe {
            std::env::set_var("RUST_LOG", "info");
        }
    }
    env_logger::init();

    #[derive(OpenApi)]
    #[openapi(
        paths(crate::pack::handlers::generate_pack),
        components(
            schemas(
                pack::models::CompanyProfileRequest,
                ErrorResponse,
            )
        ),
        tags(
            (name = "Template Pack", description = "Bilingual business template pack generation.")
        )
    )]
    struct ApiDoc;

    dotenvy::dotenv().ok();

    log::info!("Starting server at http://{}", config.bind_addr);

    let bind_addr = config.bind_addr.clone();
    HttpServer::new(move || {
        let mut cors = Cors::default()
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
            .max_age(3600);
        for origin in &config.allowed_origins {
            cors = cors.allowed_origin(origin);
        }

        App::new()
            .wrap(Compress::default())
            .wrap(cors)
            .service(web::scope("/api").service(
                web::resource("/generate-pack")
                    .route(web::post().to(pack::handlers::generate_pack)),
            ))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(bind_addr)?
    .run()
    .await
}
