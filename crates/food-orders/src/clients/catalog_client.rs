//! # Catalog Client
//!
//! Provides a high‑level API for interacting with the `Catalog` actor.
//! It wraps a `ResourceClient<Catalog>` and exposes the inventory store operations.
use crate::catalog_actor::{
    Catalog, CatalogAction, CatalogActionResult, CatalogCreate, CatalogError, StockRequest,
};
use crate::model::{FoodPoint, Item, ItemDraft, ItemId, OrderLine};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Catalog actor.
#[derive(Clone)]
pub struct CatalogClient {
    inner: ResourceClient<Catalog>,
}

impl CatalogClient {
    pub fn new(inner: ResourceClient<Catalog>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Catalog> for CatalogClient {
    type Error = CatalogError;

    fn inner(&self) -> &ResourceClient<Catalog> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.into_entity_error::<CatalogError>() {
            Ok(domain) => domain,
            Err(FrameworkError::NotFound(id)) => CatalogError::NotFound(id),
            Err(other) => CatalogError::ActorCommunicationError(other.to_string()),
        }
    }
}

fn unexpected(action: &str, result: CatalogActionResult) -> CatalogError {
    CatalogError::ActorCommunicationError(format!(
        "{action} answered with {result:?}"
    ))
}

impl CatalogClient {
    async fn act(
        &self,
        food_point: FoodPoint,
        action: CatalogAction,
    ) -> Result<CatalogActionResult, CatalogError> {
        self.inner
            .perform_action(food_point, action)
            .await
            .map_err(Self::map_error)
    }

    /// Opens an empty catalog for a food point.
    #[instrument(skip(self))]
    pub async fn open_catalog(&self, food_point: FoodPoint) -> Result<FoodPoint, CatalogError> {
        debug!("Sending request");
        self.inner
            .create(CatalogCreate { food_point })
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn find_item(
        &self,
        food_point: FoodPoint,
        item_id: ItemId,
    ) -> Result<Option<Item>, CatalogError> {
        match self.act(food_point, CatalogAction::FindItem(item_id)).await? {
            CatalogActionResult::FindItem(item) => Ok(item),
            other => Err(unexpected("FindItem", other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn can_decrement(
        &self,
        food_point: FoodPoint,
        item_id: ItemId,
        quantity: u32,
    ) -> Result<bool, CatalogError> {
        let request = StockRequest::new(item_id, quantity);
        match self.act(food_point, CatalogAction::CanDecrement(request)).await? {
            CatalogActionResult::CanDecrement(ok) => Ok(ok),
            other => Err(unexpected("CanDecrement", other)),
        }
    }

    /// Decrements one item's stock, re-checking availability in the same actor step.
    ///
    /// Returns the stock left.
    #[instrument(skip(self))]
    pub async fn decrement(
        &self,
        food_point: FoodPoint,
        item_id: ItemId,
        quantity: u32,
    ) -> Result<u32, CatalogError> {
        debug!("Decrementing {} units of {}", quantity, item_id);
        let request = StockRequest::new(item_id, quantity);
        match self.act(food_point, CatalogAction::Decrement(request)).await? {
            CatalogActionResult::Decrement(left) => Ok(left),
            other => Err(unexpected("Decrement", other)),
        }
    }

    /// Takes stock for every line at once and returns the priced snapshots.
    ///
    /// Fails without changing anything if any line cannot be served.
    #[instrument(skip(self))]
    pub async fn reserve(
        &self,
        food_point: FoodPoint,
        requests: Vec<StockRequest>,
    ) -> Result<Vec<OrderLine>, CatalogError> {
        match self.act(food_point, CatalogAction::Reserve(requests)).await? {
            CatalogActionResult::Reserve(lines) => Ok(lines),
            other => Err(unexpected("Reserve", other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn restock(
        &self,
        food_point: FoodPoint,
        requests: Vec<StockRequest>,
    ) -> Result<(), CatalogError> {
        match self.act(food_point, CatalogAction::Restock(requests)).await? {
            CatalogActionResult::Restock(()) => Ok(()),
            other => Err(unexpected("Restock", other)),
        }
    }

    /// Menu update keyed by `(food_point, name)`.
    #[instrument(skip(self))]
    pub async fn upsert_item(
        &self,
        food_point: FoodPoint,
        draft: ItemDraft,
    ) -> Result<Item, CatalogError> {
        match self.act(food_point, CatalogAction::Upsert(draft)).await? {
            CatalogActionResult::Upsert(item) => Ok(item),
            other => Err(unexpected("Upsert", other)),
        }
    }

    /// Every item of every food point, catalogs in food point order.
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<Item>, CatalogError> {
        let catalogs = self.list().await?;
        Ok(catalogs
            .into_iter()
            .flat_map(|catalog| catalog.items)
            .collect())
    }
}
