use anyhow::Result;
use axum::{
    middleware,
    routing::{get, put},
    Router,
};
use std::path::Path;
use tokio::{signal, task::AbortHandle};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::info;

pub mod api;
pub mod board;
pub mod cli;
pub mod config;
mod context;
mod controller;
pub mod error;
mod extract;
pub mod model;
pub mod view;

pub use {
    api::{PostsApi, RemotePosts},
    config::Config,
    context::BoardContext,
};

pub struct Postboard {
    context: BoardContext,
    config: Config,
}

impl Postboard {
    pub fn boot(config: Config) -> Result<Self> {
        let api = RemotePosts::new(&config.api_base_url, config.request_timeout())?;
        let context = BoardContext::new(api, config.author_id);

        Ok(Self { context, config })
    }

    pub async fn serve(self) -> Result<()> {
        let load_task = tokio::task::spawn({
            let context = self.context.clone();
            async move { context.load_posts().await }
        });

        let router = router(self.context, &self.config.static_dir);

        let listener = tokio::net::TcpListener::bind(&self.config.listen_address).await?;
        info!("listening on {}", listener.local_addr()?);

        axum::serve(listener, router.into_make_service())
            .with_graceful_shutdown(shutdown_signal(load_task.abort_handle()))
            .await?;

        Ok(())
    }
}

pub fn router(context: BoardContext, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(controller::home))
        .route("/board", get(controller::board))
        .route(
            "/posts",
            get(controller::post::list).post(controller::post::create),
        )
        .route("/form/:field", put(controller::form::update))
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .fallback(controller::not_found)
        .layer(middleware::map_response(view::render_view))
        .layer(TraceLayer::new_for_http())
        .with_state(context)
}

pub async fn shutdown_signal(abort_handle: AbortHandle) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    abort_handle.abort();
}
