use std::sync::Arc;

use tracing::{error, info};

use crate::admin::AdminContext;
use crate::api::BackendApi;
use crate::assignment::AssignmentContext;
use crate::booking::BookingContext;
use crate::catalog::CatalogContext;
use crate::clients::{AdminClient, AssignmentClient, BookingClient, CatalogClient, SessionClient};
use crate::session::{SessionContext, TokenVault};

/// The main runtime orchestrator for the storefront.
///
/// `Storefront` is responsible for:
/// - **Lifecycle Management**: Starting and stopping all stores in the system
/// - **Dependency Wiring**: Handing every store the shared backend and token vault
/// - **Graceful Shutdown**: Draining the stores without losing queued actions
///
/// # Architecture
///
/// The system consists of five stores:
/// - **Session Store**: Four independent role sessions (login, restore, logout)
/// - **Assignment Store**: Order loading and delivery-agent assignment
/// - **Booking Store**: Appointment booking and per-party listings
/// - **Catalog Store**: Insurance product CRUD with the multipart image contract
/// - **Admin Store**: Dashboard batch loading and administrative deletes
///
/// # Example
///
/// ```ignore
/// let backend = Arc::new(HttpBackend::new(config.base_url, config.request_timeout)?);
/// let vault = Arc::new(TokenVault::open(config.vault_path));
/// let storefront = Storefront::new(backend, vault);
///
/// storefront.session.login(Role::Admin, credentials).await?;
/// storefront.assignment.load_order("o1").await?;
///
/// // Gracefully shut down when done
/// storefront.shutdown().await?;
/// ```
pub struct Storefront {
    /// Client for the session store
    pub session: SessionClient,

    /// Client for the assignment store
    pub assignment: AssignmentClient,

    /// Client for the booking store
    pub booking: BookingClient,

    /// Client for the catalog store
    pub catalog: CatalogClient,

    /// Client for the admin dashboard store
    pub admin: AdminClient,

    /// Task handles for all running stores (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl Storefront {
    /// Creates and initializes a new `Storefront` with all stores running.
    ///
    /// Every store receives the same backend and token vault through its
    /// context at `run()`. Pass an [`crate::api::HttpBackend`] for the real
    /// server or a [`crate::api::MockBackend`] for tests.
    pub fn new(backend: Arc<dyn BackendApi>, vault: Arc<TokenVault>) -> Self {
        // 1. Create stores (no dependencies yet)
        let (session_actor, session) = crate::session::new();
        let (assignment_actor, assignment) = crate::assignment::new();
        let (booking_actor, booking) = crate::booking::new();
        let (catalog_actor, catalog) = crate::catalog::new();
        let (admin_actor, admin) = crate::admin::new();

        // 2. Start stores with injected context
        let handles = vec![
            tokio::spawn(session_actor.run(SessionContext {
                backend: backend.clone(),
                vault: vault.clone(),
            })),
            tokio::spawn(assignment_actor.run(AssignmentContext {
                backend: backend.clone(),
                vault: vault.clone(),
            })),
            tokio::spawn(booking_actor.run(BookingContext {
                backend: backend.clone(),
                vault: vault.clone(),
            })),
            tokio::spawn(catalog_actor.run(CatalogContext {
                backend: backend.clone(),
                vault: vault.clone(),
            })),
            tokio::spawn(admin_actor.run(AdminContext { backend, vault })),
        ];

        Self {
            session,
            assignment,
            booking,
            catalog,
            admin,
            handles,
        }
    }

    /// Gracefully shuts down the entire storefront.
    ///
    /// Dropping the clients closes every store channel; each store drains
    /// its queue and exits its event loop. Any action dispatched before the
    /// shutdown call is still applied.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all stores shut down cleanly
    /// - `Err(String)` if any store task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down storefront...");

        // Step 1: Close all channels by dropping clients
        drop(self.session);
        drop(self.assignment);
        drop(self.booking);
        drop(self.catalog);
        drop(self.admin);

        // Step 2: Wait for all store tasks to complete
        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Store task failed: {:?}", e);
                return Err(format!("Store task failed: {:?}", e));
            }
        }

        info!("Storefront shutdown complete.");
        Ok(())
    }
}
