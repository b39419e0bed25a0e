use crate::catalog_actor;
use crate::clients::{CatalogClient, OrderClient};
use crate::config::SystemConfig;
use crate::engine::OrderEngine;
use crate::model::{FoodPoint, ItemIdSequence};
use crate::notifications::{self, NotifierClient};
use crate::order_actor;
use tracing::{error, info};

/// The running order system: every actor started, every catalog open.
///
/// `FoodSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping the catalog, order and hub actors
/// - **Dependency Wiring**: handing the shared item id sequence to the catalog actor and the
///   three clients to the [`OrderEngine`]
///
/// # Example
///
/// ```ignore
/// let system = FoodSystem::start(&SystemConfig::default()).await?;
///
/// let item = system.engine.update_menu(update).await?;
/// let order_id = system.engine.place_order(&student, new_order).await?;
/// system.engine.advance_to_prepared(order_id).await?;
///
/// system.shutdown().await?;
/// ```
pub struct FoodSystem {
    pub engine: OrderEngine,

    /// Direct access to the inventory store.
    pub catalogs: CatalogClient,

    /// Direct access to the order store.
    pub orders: OrderClient,

    /// Subscribe here to receive events.
    pub notifier: NotifierClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl FoodSystem {
    /// Spawns all actors and opens one empty catalog per [`FoodPoint`].
    ///
    /// # Errors
    /// Fails only if the catalog actor stops before the catalogs are open.
    pub async fn start(config: &SystemConfig) -> Result<Self, String> {
        // 1. Create actors (no dependencies)
        let (catalog_actor, catalogs) = catalog_actor::new(config.actor_buffer);
        let (order_actor, orders) = order_actor::new(config.actor_buffer);
        let (hub, notifier) = notifications::new(config.hub_buffer, config.listener_buffer);

        // 2. Start actors with injected context
        let catalog_handle = tokio::spawn(catalog_actor.run(ItemIdSequence::new()));
        let order_handle = tokio::spawn(order_actor.run(()));
        let hub_handle = tokio::spawn(hub.run());

        for food_point in FoodPoint::ALL {
            catalogs
                .open_catalog(food_point)
                .await
                .map_err(|e| format!("Failed to open catalog for {food_point}: {e}"))?;
        }

        let engine = OrderEngine::new(catalogs.clone(), orders.clone(), notifier.clone());
        info!(food_points = FoodPoint::ALL.len(), "Food system started");

        Ok(Self {
            engine,
            catalogs,
            orders,
            notifier,
            handles: vec![catalog_handle, order_handle, hub_handle],
        })
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Drops every client this system holds, then waits for each actor to drain its inbox.
    /// Engine clones held elsewhere keep their actors alive, so drop them first.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all actors shut down cleanly
    /// - `Err(String)` if any actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down food system...");

        // Dropping the last sender closes each actor's receiver.
        drop(self.engine);
        drop(self.catalogs);
        drop(self.orders);
        drop(self.notifier);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Food system shutdown complete.");
        Ok(())
    }
}
