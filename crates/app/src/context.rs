//! App context.

use std::sync::Arc;

use thiserror::Error;

use crate::{
    auth::AuthService,
    database::{self, Db},
    domain::{
        checkout::service::{Checkout, CheckoutService},
        feedback::{
            memory::MemoryFeedbackRepository,
            postgres::PgFeedbackRepository,
            service::{FeedbackIntake, FeedbackService},
        },
        notifications::dispatcher::{LogDispatcher, NotificationDispatcher},
        orders::{
            memory::MemoryOrdersRepository,
            postgres::PgOrdersRepository,
            service::{LedgerService, OrderLedger},
        },
        payments::gateway::PaymentAuthorizer,
        products::{memory::MemoryProductReputations, postgres::PgProductReputations},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to run database migrations")]
    Migrate(#[source] sqlx::migrate::MigrateError),
}

/// Every service the transport layer talks to, behind trait objects.
#[derive(Clone)]
pub struct AppContext {
    pub checkout: Arc<dyn CheckoutService>,
    pub orders: Arc<dyn OrderLedger>,
    pub feedback: Arc<dyn FeedbackService>,
    pub notifications: Arc<dyn NotificationDispatcher>,
    pub auth: Arc<dyn AuthService>,
}

impl AppContext {
    /// Build application context over Postgres.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(
        url: &str,
        auth: Arc<dyn AuthService>,
        authorizer: Arc<dyn PaymentAuthorizer>,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        database::migrate(&pool)
            .await
            .map_err(AppInitError::Migrate)?;

        let db = Db::new(pool);

        let orders: Arc<dyn OrderLedger> =
            Arc::new(LedgerService::new(Arc::new(PgOrdersRepository::new(db.clone()))));
        let feedback = Arc::new(FeedbackIntake::new(
            orders.clone(),
            Arc::new(PgFeedbackRepository::new(db.clone())),
            Arc::new(PgProductReputations::new(db)),
        ));

        Ok(Self {
            checkout: Arc::new(Checkout::new(orders.clone(), authorizer)),
            orders,
            feedback,
            notifications: Arc::new(LogDispatcher),
            auth,
        })
    }

    /// Build application context over process-local storage, for local
    /// development and transport tests.
    #[must_use]
    pub fn in_memory(auth: Arc<dyn AuthService>, authorizer: Arc<dyn PaymentAuthorizer>) -> Self {
        let orders: Arc<dyn OrderLedger> =
            Arc::new(LedgerService::new(Arc::new(MemoryOrdersRepository::new())));
        let feedback = Arc::new(FeedbackIntake::new(
            orders.clone(),
            Arc::new(MemoryFeedbackRepository::new()),
            Arc::new(MemoryProductReputations::new()),
        ));

        Self {
            checkout: Arc::new(Checkout::new(orders.clone(), authorizer)),
            orders,
            feedback,
            notifications: Arc::new(LogDispatcher),
            auth,
        }
    }
}
