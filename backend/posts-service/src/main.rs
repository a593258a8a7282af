use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use posts_service::config::{Config, StorageBackend};
use posts_service::db::{self, MemoryStore, PgCommentRepository, PgPostRepository};
use posts_service::handlers;
use posts_service::services::{CommentStore, PostStore};
use std::io;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,actix_web=info,sqlx=warn".into());
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Wire the stores to the configured storage backend
async fn build_stores(config: &Config) -> anyhow::Result<(PostStore, CommentStore)> {
    match config.storage.backend {
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; data is lost on restart");
            let memory = MemoryStore::new();
            let posts = PostStore::new(Arc::new(memory.clone()));
            let comments = CommentStore::new(posts.clone(), Arc::new(memory));
            Ok((posts, comments))
        }
        StorageBackend::Postgres => {
            let pool = db::create_pool(&config.database)
                .await
                .context("Failed to create database pool")?;

            if config.storage.run_migrations {
                db::run_migrations(&pool)
                    .await
                    .context("Failed to run database migrations")?;
                tracing::info!("Database migrations applied");
            }

            let posts = PostStore::new(Arc::new(PgPostRepository::new(pool.clone())));
            let comments = CommentStore::new(posts.clone(), Arc::new(PgCommentRepository::new(pool)));
            Ok((posts, comments))
        }
    }
}

/// Posts Service
///
/// # Routes
///
/// - `/api/posts` - list and create posts
/// - `/api/posts/{id}` - read, replace, delete a post
/// - `/api/posts/{id}/comments` - list and create comments of a post
/// - `/api/posts/{id}/comments/{comment_id}` - read one comment
/// - `/api/health`, `/api/health/live`, `/metrics`
#[actix_web::main]
async fn main() -> io::Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("ERROR: Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_tracing(config.app.json_logs);

    tracing::info!("Starting posts-service v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!(backend = ?config.storage.backend, "Storage backend selected");

    let (posts, comments) = build_stores(&config).await.map_err(|e| {
        tracing::error!("Storage initialization failed: {:#}", e);
        io::Error::new(io::ErrorKind::Other, format!("{e:#}"))
    })?;

    let posts_data = web::Data::new(posts);
    let comments_data = web::Data::new(comments);
    let responses_data = web::Data::new(config.responses.clone());

    let bind_address = format!("{}:{}", config.app.host, config.app.port);
    tracing::info!("Starting HTTP server at {}", bind_address);

    let allowed_origins = config.cors.allowed_origins.clone();

    HttpServer::new(move || {
        let mut cors = Cors::default();
        for origin in allowed_origins.split(',') {
            let origin = origin.trim();
            if origin == "*" {
                cors = cors.allow_any_origin();
            } else if !origin.is_empty() {
                cors = cors.allowed_origin(origin);
            }
        }
        cors = cors.allow_any_method().allow_any_header().max_age(3600);

        App::new()
            .app_data(posts_data.clone())
            .app_data(comments_data.clone())
            .app_data(responses_data.clone())
            .wrap(cors)
            .wrap(Logger::default())
            .wrap(tracing_actix_web::TracingLogger::default())
            .configure(handlers::configure)
    })
    .bind(&bind_address)?
    .shutdown_timeout(30)
    .run()
    .await?;

    tracing::info!("Posts-service shutting down");
    Ok(())
}
