//! Canteen JSON API Server

use std::{process, sync::Arc};

use salvo::{affix_state::inject, prelude::*, trailing_slash::remove_slash};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use canteen_app::{
    auth::{AuthService, Principal, Role, StaticAuthService},
    context::AppContext,
    domain::payments::{PaymentAuthorizer, RandomDecider, SimulatedGateway},
    ids::CustomerUuid,
};

use crate::{config::ServerConfig, state::State};

mod auth;
mod config;
mod extensions;
mod feedback;
mod healthcheck;
mod orders;
mod router;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;

/// Canteen JSON API Server entry point
///
/// # Panics
///
/// Panics if the server fails to bind or serve requests
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.log_level)),
        )
        .init();

    let addr = config.socket_addr();

    info!("Starting server on {addr}");

    // Bind server
    let listener = TcpListener::new(addr).bind().await;

    // Development token table; session issuance is external.
    let auth: Arc<dyn AuthService> = Arc::new(
        StaticAuthService::new()
            .with_token(
                config.auth.customer_token.clone(),
                Principal {
                    customer: CustomerUuid::new(),
                    role: Role::Customer,
                },
            )
            .with_token(
                config.auth.admin_token.clone(),
                Principal {
                    customer: CustomerUuid::new(),
                    role: Role::Admin,
                },
            ),
    );

    let authorizer: Arc<dyn PaymentAuthorizer> =
        Arc::new(SimulatedGateway::with_decider(Arc::new(
            RandomDecider::default(),
        )));

    let app = match &config.database.database_url {
        Some(url) => match AppContext::from_database_url(url, auth, authorizer).await {
            Ok(app) => app,
            Err(init_error) => {
                error!("failed to initialize app context: {init_error}");

                process::exit(1);
            }
        },
        None => {
            info!("DATABASE_URL not set, running on in-memory storage");

            AppContext::in_memory(auth, authorizer)
        }
    };

    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(inject(State::from_app_context(app)))
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(router::app_router());

    let server = Server::new(listener);

    let handle = server.handle();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    // Start serving requests
    server.serve(router).await;
}
