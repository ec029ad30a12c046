use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};
use chrono::Utc;
use sqlx::postgres::PgPoolOptions;
use std::collections::HashMap;
use std::io;
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hivelooks_service::db::ensure_tables;
use hivelooks_service::services::MediaService;
use hivelooks_service::{auth, handlers, middleware, Config};

struct HealthState {
    db_pool: sqlx::Pool<sqlx::Postgres>,
}

#[derive(serde::Serialize, Clone)]
#[serde(rename_all = "lowercase")]
enum ComponentStatus {
    Healthy,
    Unhealthy,
}

#[derive(serde::Serialize)]
struct ComponentCheck {
    status: ComponentStatus,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    latency_ms: Option<u64>,
}

impl HealthState {
    async fn check_postgres(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.db_pool)
            .await
            .map(|_| ())
    }
}

async fn health_summary(state: web::Data<HealthState>) -> HttpResponse {
    match state.check_postgres().await {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({
            "status": "ok",
            "service": "hivelooks-service",
            "version": env!("CARGO_PKG_VERSION")
        })),
        Err(e) => HttpResponse::ServiceUnavailable().json(serde_json::json!({
            "status": "unhealthy",
            "error": format!("PostgreSQL connection failed: {}", e),
            "service": "hivelooks-service"
        })),
    }
}

async fn readiness_summary(state: web::Data<HealthState>) -> HttpResponse {
    let mut checks = HashMap::new();

    let start = Instant::now();
    let pg_result = state.check_postgres().await;
    let latency_ms = Some(start.elapsed().as_millis() as u64);
    let ready = pg_result.is_ok();

    let postgres_check = match pg_result {
        Ok(_) => ComponentCheck {
            status: ComponentStatus::Healthy,
            message: "PostgreSQL connection successful".to_string(),
            latency_ms,
        },
        Err(e) => ComponentCheck {
            status: ComponentStatus::Unhealthy,
            message: format!("PostgreSQL connection failed: {}", e),
            latency_ms,
        },
    };
    checks.insert("postgres", postgres_check);

    let body = serde_json::json!({
        "ready": ready,
        "checks": checks,
        "timestamp": Utc::now().to_rfc3339(),
    });

    if ready {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}

async fn liveness_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "alive": true }))
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Configuration loading failed: {:#}", e);
            eprintln!("ERROR: Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting hivelooks-service v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);

    match std::env::var("JWT_PUBLIC_KEY_PEM") {
        Ok(public_key) => {
            if let Err(err) = auth::initialize_validation_key(&public_key) {
                return Err(io::Error::new(
                    io::ErrorKind::Other,
                    format!("Failed to initialize JWT key: {err}"),
                ));
            }
        }
        Err(err) => {
            tracing::warn!(
                "JWT public key not configured ({err}); authentication middleware will fail requests"
            );
        }
    }

    // Initialize database connection pool
    let db_pool = match PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await
    {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Database pool creation failed: {:#}", e);
            eprintln!("ERROR: Failed to create database pool: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = ensure_tables(&db_pool).await {
        tracing::error!("Schema bootstrap failed: {:#}", e);
        return Err(io::Error::new(io::ErrorKind::Other, e.to_string()));
    }

    let media_service = web::Data::new(MediaService::new(config.media.clone()));
    let health_state = web::Data::new(HealthState {
        db_pool: db_pool.clone(),
    });

    let bind_address = format!("{}:{}", config.app.host, config.app.port);
    tracing::info!("Starting HTTP server at {}", bind_address);

    let cors_origins = config.cors.allowed_origins.clone();

    HttpServer::new(move || {
        let mut cors = Cors::default();
        for origin in cors_origins.split(',') {
            let origin = origin.trim();
            if origin == "*" {
                cors = cors.allow_any_origin();
            } else {
                cors = cors.allowed_origin(origin);
            }
        }
        cors = cors.allow_any_method().allow_any_header().max_age(3600);

        App::new()
            .app_data(web::Data::new(db_pool.clone()))
            .app_data(media_service.clone())
            .app_data(health_state.clone())
            .wrap(cors)
            .wrap(Logger::default())
            .wrap(tracing_actix_web::TracingLogger::default())
            .route("/health", web::get().to(health_summary))
            .route("/health/ready", web::get().to(readiness_summary))
            .route("/health/live", web::get().to(liveness_check))
            .service(
                web::scope("/api/v1")
                    .wrap(middleware::JwtAuthMiddleware)
                    .service(
                        web::scope("/posts")
                            .service(
                                web::resource("")
                                    .route(web::get().to(handlers::get_all_posts))
                                    .route(web::post().to(handlers::create_post)),
                            )
                            .route(
                                "/user/{user_id}",
                                web::get().to(handlers::get_user_posts),
                            )
                            .service(
                                web::resource("/{post_id}")
                                    .route(web::get().to(handlers::get_post))
                                    .route(web::patch().to(handlers::update_post))
                                    .route(web::delete().to(handlers::delete_post)),
                            )
                            .service(
                                web::resource("/{post_id}/comments")
                                    .route(web::get().to(handlers::get_post_comments))
                                    .route(web::post().to(handlers::create_post_comment)),
                            )
                            .route(
                                "/{post_id}/like",
                                web::post().to(handlers::toggle_post_like),
                            )
                            .route(
                                "/{post_id}/comments/{comment_id}/like",
                                web::post().to(handlers::toggle_post_comment_like),
                            ),
                    )
                    .service(
                        web::scope("/looks")
                            .service(
                                web::resource("")
                                    .route(web::get().to(handlers::get_all_looks))
                                    .route(web::post().to(handlers::create_look)),
                            )
                            .route(
                                "/user/{user_id}",
                                web::get().to(handlers::get_user_looks),
                            )
                            .service(
                                web::resource("/{look_id}")
                                    .route(web::get().to(handlers::get_look))
                                    .route(web::patch().to(handlers::update_look))
                                    .route(web::delete().to(handlers::delete_look)),
                            )
                            .service(
                                web::resource("/{look_id}/comments")
                                    .route(web::get().to(handlers::get_look_comments))
                                    .route(web::post().to(handlers::create_look_comment)),
                            )
                            .route(
                                "/{look_id}/like",
                                web::post().to(handlers::toggle_look_like),
                            )
                            .route(
                                "/{look_id}/comments/{comment_id}/like",
                                web::post().to(handlers::toggle_look_comment_like),
                            ),
                    )
                    .service(
                        web::scope("/users")
                            .service(
                                web::resource("/me")
                                    .route(web::get().to(handlers::get_my_profile))
                                    .route(web::put().to(handlers::upsert_my_profile)),
                            )
                            .route("/{user_id}", web::get().to(handlers::get_user_profile)),
                    )
                    .service(
                        web::scope("/wardrobe")
                            .service(
                                web::resource("")
                                    .route(web::get().to(handlers::get_wardrobe))
                                    .route(web::post().to(handlers::add_item)),
                            )
                            .service(
                                web::resource("/{item_id}")
                                    .route(web::patch().to(handlers::update_item))
                                    .route(web::delete().to(handlers::delete_item)),
                            ),
                    )
                    .route("/media/uploads", web::post().to(handlers::upload_media)),
            )
    })
    .bind(&bind_address)?
    .run()
    .await
}
