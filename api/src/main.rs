use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};
use dotenvy::dotenv;
use log::info;
use std::sync::Arc;

use rp_api::middleware::{create_cors, JwtAuth};
use rp_api::routes::auth::{login, logout, refresh, register, AppState};
use rp_core::repositories::SessionRepository;
use rp_core::services::{AuthService, Rs256KeyManager, TokenService, TokenServiceConfig};
use rp_infra::database::{DatabasePool, MySqlSessionRepository, MySqlUserRepository};
use rp_infra::services::BcryptPasswordHasher;
use rp_shared::config::AppConfig;
use rp_shared::types::response::ErrorResponse;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting Ripple API server");

    let config = AppConfig::from_env();

    let pool = DatabasePool::new(&config.database)
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;

    let user_repository = Arc::new(MySqlUserRepository::new(pool.get_pool().clone()));
    let session_repository = Arc::new(MySqlSessionRepository::new(pool.get_pool().clone()));
    let password_hasher = Arc::new(BcryptPasswordHasher::from_env());

    let keys = Rs256KeyManager::new(&config.jwt.private_key_path, &config.jwt.public_key_path)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
    let token_service = Arc::new(TokenService::new(
        TokenServiceConfig::from(&config.jwt),
        keys,
    ));

    let auth_service = Arc::new(AuthService::new(
        user_repository,
        session_repository.clone(),
        password_hasher,
        token_service.clone(),
    ));

    let app_state = web::Data::new(AppState {
        auth_service,
        cookies: config.cookies,
    });

    // The middleware resolves sessions through a trait object so it stays
    // independent of the concrete repository type.
    let session_data: web::Data<Arc<dyn SessionRepository>> =
        web::Data::new(session_repository as Arc<dyn SessionRepository>);
    let token_data = web::Data::from(token_service);

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let workers = config.server.workers;

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(create_cors())
            .app_data(app_state.clone())
            .app_data(session_data.clone())
            .app_data(token_data.clone())
            .route("/health", web::get().to(health_check))
            .service(
                web::scope("/api/v1").service(
                    web::scope("/auth")
                        .route(
                            "/register",
                            web::post().to(register::<
                                MySqlUserRepository,
                                MySqlSessionRepository,
                                BcryptPasswordHasher,
                            >),
                        )
                        .route(
                            "/login",
                            web::post().to(login::<
                                MySqlUserRepository,
                                MySqlSessionRepository,
                                BcryptPasswordHasher,
                            >),
                        )
                        .route(
                            "/refresh",
                            web::post().to(refresh::<
                                MySqlUserRepository,
                                MySqlSessionRepository,
                                BcryptPasswordHasher,
                            >),
                        )
                        .route(
                            "/logout",
                            web::post()
                                .to(logout::<
                                    MySqlUserRepository,
                                    MySqlSessionRepository,
                                    BcryptPasswordHasher,
                                >)
                                .wrap(JwtAuth::new()),
                        ),
                ),
            )
            .default_service(web::route().to(not_found))
    })
    .bind(&bind_address)?;

    let server = if workers > 0 {
        server.workers(workers)
    } else {
        server
    };

    server.run().await
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "ripple-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        "NOT_FOUND",
        "The requested resource was not found",
    ))
}
