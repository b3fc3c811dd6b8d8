//! Preview server rendering pages straight from the content store

use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::content::{ArticleError, ArticleReader};
use crate::templates::TemplateRenderer;
use crate::Blog;

/// Server state
struct ServerState {
    reader: ArticleReader,
    renderer: TemplateRenderer,
}

impl ServerState {
    /// Turn a rendered template into a response
    fn page(&self, html: Result<String>) -> Response {
        match html {
            Ok(html) => Html(html).into_response(),
            Err(e) => {
                tracing::error!("Template error: {:#}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Template error").into_response()
            }
        }
    }

    /// Map a reader failure onto an HTTP status
    fn error(&self, err: ArticleError) -> Response {
        if err.is_not_found() {
            tracing::warn!("{}", err);
            let body = self
                .renderer
                .render_not_found(&err.to_string())
                .unwrap_or_else(|_| "Not found".to_string());
            (StatusCode::NOT_FOUND, Html(body)).into_response()
        } else {
            tracing::error!("{}", err);
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
        }
    }
}

/// Build the application router
pub fn router(blog: &Blog) -> Result<Router> {
    let state = Arc::new(ServerState {
        reader: blog.reader(),
        renderer: TemplateRenderer::new(&blog.config)?,
    });

    Ok(Router::new()
        .route("/", get(index_handler))
        .route("/:id", get(article_handler))
        .route("/:id/", get(article_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

/// Start the preview server
pub async fn start(blog: &Blog, ip: &str, port: u16, open: bool) -> Result<()> {
    let app = router(blog)?;

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    let url = format!("http://{}:{}", ip, port);
    println!("Server running at {}", url);
    println!("Press Ctrl+C to stop.");

    if open {
        if let Err(e) = open_browser(&url) {
            tracing::warn!("Failed to open browser: {}", e);
        }
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn index_handler(State(state): State<Arc<ServerState>>) -> Response {
    let reader = state.reader.clone();
    match read_blocking(move || reader.list()).await {
        Ok(articles) => state.page(state.renderer.render_index(&articles)),
        Err(e) => state.error(e),
    }
}

async fn article_handler(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
) -> Response {
    let reader = state.reader.clone();
    match read_blocking(move || reader.get(&id)).await {
        Ok(article) => state.page(state.renderer.render_article(&article)),
        Err(e) => state.error(e),
    }
}

/// Run a store read off the async workers; file I/O and highlighting block
async fn read_blocking<T, F>(read: F) -> Result<T, ArticleError>
where
    F: FnOnce() -> Result<T, ArticleError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(read).await.unwrap_or_else(|e| {
        Err(ArticleError::Io {
            path: "<blocking read>".into(),
            source: std::io::Error::new(std::io::ErrorKind::Other, e),
        })
    })
}

/// Open a URL in the default browser
fn open_browser(url: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open").arg(url).spawn()?;
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open").arg(url).spawn()?;
    }

    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/c", "start", url])
            .spawn()?;
    }

    Ok(())
}
