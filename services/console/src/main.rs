//! Perceive console HTTP service entry point.
//!
//! # Purpose
//! Wires configuration, the user directory, and the HTTP router, then starts
//! the console server and the metrics endpoint.
//!
//! # Notes
//! The `build_state` helper keeps wiring testable and minimizes main setup logic.
use perceive_authz::Role;
use perceive_console::app::{AppState, build_router};
use perceive_console::auth::session::SessionCookie;
use perceive_console::config::ConsoleConfig;
use perceive_console::directory::{InMemoryUserStore, UserRecord};
use perceive_console::observability;
use std::future::Future;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ConsoleConfig::from_env_or_yaml()?;
    run_with_shutdown(config, async {
        let _ = tokio::signal::ctrl_c().await;
    })
    .await
}

async fn run_with_shutdown<F>(config: ConsoleConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let metrics_handle = observability::init_observability("perceive-console")?;
    let state = build_state(config.clone());
    let metrics_task = tokio::spawn(observability::serve_metrics(
        metrics_handle,
        config.metrics_bind,
    ));

    let app = build_router(state);

    let addr = config.bind_addr;
    tracing::info!(%addr, "console listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tokio::pin!(shutdown);
    tokio::select! {
        result = axum::serve(listener, app.into_make_service()) => {
            result?;
        }
        _ = &mut shutdown => {}
    }

    metrics_task.abort();
    let _ = metrics_task.await;
    Ok(())
}

fn build_state(config: ConsoleConfig) -> AppState {
    let store = match config.users {
        Some(users) => {
            warn_unknown_roles(&users);
            InMemoryUserStore::new(users)
        }
        None => InMemoryUserStore::builtin(),
    };
    AppState::new(
        Arc::new(store),
        SessionCookie::new(config.session_max_age_secs, config.cookie_secure),
    )
}

// Such users can sign in but every protected route sends them home.
fn warn_unknown_roles(users: &[UserRecord]) {
    for user in users {
        if user.role.parse::<Role>().is_err() {
            tracing::warn!(email = %user.email, role = %user.role, "configured user has an unknown role");
        }
    }
}
