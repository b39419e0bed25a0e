//! # Campus Food Orders
//!
//! Demo run of the order engine against real actors.
//!
//! ## Core Components
//!
//! - **`model`**: Plain data (items, orders, events and views).
//! - **`catalog_actor` / `order_actor`**: The inventory and order stores, each a `ResourceActor`.
//! - **`notifications`**: The listener registry and best-effort broadcaster.
//! - **`engine`**: [`OrderEngine`](food_orders::engine::OrderEngine), the order lifecycle.
//! - **`lifecycle`**: [`FoodSystem`](food_orders::lifecycle::FoodSystem), which starts and stops everything.
//!
//! ## Walkthrough
//!
//! 1. A cook stocks the APU menu.
//! 2. A listener subscribes to events.
//! 3. A student orders; a second, oversized order is refused.
//! 4. The cook advances the first order to `PICKED_UP`.

use actor_framework::tracing::setup_tracing;
use food_orders::config::SystemConfig;
use food_orders::lifecycle::FoodSystem;
use food_orders::model::{Identity, MenuItemUpdate, NewOrder, NewOrderItem};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = SystemConfig::from_env().map_err(|e| e.to_string())?;
    let system = FoodSystem::start(&config).await?;
    let engine = system.engine.clone();

    let mut listener = system
        .notifier
        .subscribe()
        .await
        .map_err(|e| e.to_string())?;

    let span = tracing::info_span!("menu_update");
    let dosa = async {
        info!("Stocking menu");
        engine
            .update_menu(MenuItemUpdate {
                food_point: "APU".to_string(),
                name: "Masala Dosa".to_string(),
                pic_url: None,
                quantity: 5,
                price: 4500,
                id: None,
            })
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    let student = Identity::student("student_42");
    let cook = Identity::cook("cook_1");
    info!(cook = %cook.user_id, item = %dosa.id, "Menu ready");

    let span = tracing::info_span!("order_placement");
    let order_id = async {
        let order = NewOrder {
            food_point: "APU".to_string(),
            items: vec![NewOrderItem {
                id: dosa.id,
                quantity: 3,
            }],
        };
        engine
            .place_order(&student, order)
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    // Only 2 left, so the same order again must be refused.
    let second = NewOrder {
        food_point: "APU".to_string(),
        items: vec![NewOrderItem {
            id: dosa.id,
            quantity: 3,
        }],
    };
    match engine.place_order(&student, second).await {
        Ok(id) => error!(order = %id, "Oversized order was accepted"),
        Err(e) => info!(error = %e, "Second order refused as expected"),
    }

    engine
        .advance_to_prepared(order_id)
        .await
        .map_err(|e| e.to_string())?;
    engine
        .advance_to_picked_up(order_id)
        .await
        .map_err(|e| e.to_string())?;

    let history = engine
        .read_orders(&student)
        .await
        .map_err(|e| e.to_string())?;
    match serde_json::to_string(&history) {
        Ok(json) => info!(%json, "Order history"),
        Err(e) => error!(error = %e, "Could not render order history"),
    }

    // A hub round trip: every broadcast queued before it has been fanned out.
    let listeners = system
        .notifier
        .listener_count()
        .await
        .map_err(|e| e.to_string())?;
    info!(listeners, "Draining events");
    while let Some(event) = listener.try_recv() {
        info!(%event, "Event received");
    }

    drop(engine);
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
