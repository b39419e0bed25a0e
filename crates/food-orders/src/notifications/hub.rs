use crate::model::Event;
use std::collections::BTreeMap;
use std::fmt::Display;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

/// Errors returned by [`NotifierClient`] requests that expect a reply.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum NotifyError {
    #[error("Notification hub closed")]
    HubClosed,
}

/// Opaque key for removing a listener. Never used to address one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionHandle(u64);

impl Display for SubscriptionHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "listener_{}", self.0)
    }
}

/// A registered listener: its handle plus the queue of serialized events.
#[derive(Debug)]
pub struct Subscription {
    pub handle: SubscriptionHandle,
    receiver: mpsc::Receiver<String>,
}

impl Subscription {
    /// Waits for the next event. `None` once the hub has shut down or dropped this listener.
    pub async fn recv(&mut self) -> Option<String> {
        self.receiver.recv().await
    }

    /// Next queued event, if one is already waiting.
    pub fn try_recv(&mut self) -> Option<String> {
        self.receiver.try_recv().ok()
    }
}

enum HubMessage {
    Subscribe {
        respond_to: oneshot::Sender<Subscription>,
    },
    Unsubscribe {
        handle: SubscriptionHandle,
        respond_to: oneshot::Sender<bool>,
    },
    Broadcast(Event),
    ListenerCount {
        respond_to: oneshot::Sender<usize>,
    },
}

/// Owns the listener registry. Runs in its own task; the registry is never shared.
pub struct NotificationHub {
    receiver: mpsc::Receiver<HubMessage>,
    listeners: BTreeMap<SubscriptionHandle, mpsc::Sender<String>>,
    next_handle: u64,
    listener_buffer: usize,
}

impl NotificationHub {
    /// Creates the hub and its client.
    ///
    /// * `buffer_size` - capacity of the hub inbox. Broadcasts beyond it are dropped.
    /// * `listener_buffer` - capacity of each listener's queue.
    pub fn new(buffer_size: usize, listener_buffer: usize) -> (Self, NotifierClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let hub = Self {
            receiver,
            listeners: BTreeMap::new(),
            next_handle: 1,
            listener_buffer,
        };
        (hub, NotifierClient { sender })
    }

    /// Processes requests until every [`NotifierClient`] is dropped.
    pub async fn run(mut self) {
        info!("Notification hub started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                HubMessage::Subscribe { respond_to } => {
                    let handle = SubscriptionHandle(self.next_handle);
                    self.next_handle += 1;
                    let (sender, receiver) = mpsc::channel(self.listener_buffer);
                    self.listeners.insert(handle, sender);
                    info!(%handle, listeners = self.listeners.len(), "Subscribed");
                    // A caller that gave up waiting leaves a dead entry; the next broadcast prunes it.
                    let _ = respond_to.send(Subscription { handle, receiver });
                }
                HubMessage::Unsubscribe { handle, respond_to } => {
                    let removed = self.listeners.remove(&handle).is_some();
                    debug!(%handle, removed, "Unsubscribe");
                    let _ = respond_to.send(removed);
                }
                HubMessage::Broadcast(event) => self.fan_out(&event),
                HubMessage::ListenerCount { respond_to } => {
                    let _ = respond_to.send(self.listeners.len());
                }
            }
        }

        info!(listeners = self.listeners.len(), "Notification hub shutdown");
    }

    fn fan_out(&mut self, event: &Event) {
        let kind = event.kind();
        let payload = match serde_json::to_string(event) {
            Ok(payload) => payload,
            Err(e) => {
                warn!(kind, error = %e, "Event not serializable, dropped");
                return;
            }
        };

        let mut delivered = 0usize;
        self.listeners.retain(|handle, listener| {
            match listener.try_send(payload.clone()) {
                Ok(()) => {
                    delivered += 1;
                    true
                }
                Err(mpsc::error::TrySendError::Full(_)) => {
                    warn!(%handle, kind, "Listener queue full, event skipped");
                    true
                }
                Err(mpsc::error::TrySendError::Closed(_)) => {
                    debug!(%handle, "Listener gone, pruned");
                    false
                }
            }
        });
        debug!(kind, delivered, listeners = self.listeners.len(), "Broadcast");
    }
}

/// Handle to the [`NotificationHub`].
#[derive(Clone)]
pub struct NotifierClient {
    sender: mpsc::Sender<HubMessage>,
}

impl NotifierClient {
    pub async fn subscribe(&self) -> Result<Subscription, NotifyError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(HubMessage::Subscribe { respond_to })
            .await
            .map_err(|_| NotifyError::HubClosed)?;
        response.await.map_err(|_| NotifyError::HubClosed)
    }

    /// Removes a listener. Unknown or already removed handles are ignored.
    ///
    /// Returns whether a listener was actually removed.
    pub async fn unsubscribe(&self, handle: SubscriptionHandle) -> Result<bool, NotifyError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(HubMessage::Unsubscribe { handle, respond_to })
            .await
            .map_err(|_| NotifyError::HubClosed)?;
        response.await.map_err(|_| NotifyError::HubClosed)
    }

    /// Queues an event for every listener and returns immediately.
    ///
    /// Never blocks and never fails the caller: a full hub inbox or a stopped hub drops the
    /// event with a log line.
    pub fn broadcast(&self, event: Event) {
        let kind = event.kind();
        match self.sender.try_send(HubMessage::Broadcast(event)) {
            Ok(()) => {}
            Err(mpsc::error::TrySendError::Full(_)) => {
                warn!(kind, "Hub inbox full, event dropped");
            }
            Err(mpsc::error::TrySendError::Closed(_)) => {
                debug!(kind, "Hub closed, event dropped");
            }
        }
    }

    pub async fn listener_count(&self) -> Result<usize, NotifyError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(HubMessage::ListenerCount { respond_to })
            .await
            .map_err(|_| NotifyError::HubClosed)?;
        response.await.map_err(|_| NotifyError::HubClosed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OrderId;

    fn start(listener_buffer: usize) -> NotifierClient {
        let (hub, client) = NotificationHub::new(16, listener_buffer);
        tokio::spawn(hub.run());
        client
    }

    fn prepared(id: u32) -> Event {
        Event::OrderPrepared {
            order_id: OrderId(id),
        }
    }

    #[tokio::test]
    async fn test_broadcast_without_listeners() {
        let client = start(4);
        client.broadcast(prepared(1));
        assert_eq!(client.listener_count().await, Ok(0));
    }

    #[tokio::test]
    async fn test_every_listener_gets_the_payload() {
        let client = start(4);
        let mut a = client.subscribe().await.unwrap();
        let mut b = client.subscribe().await.unwrap();
        assert_ne!(a.handle, b.handle);

        client.broadcast(prepared(9));

        let expected = r#"{"type":"ORDER_PREPARED","orderId":9}"#;
        assert_eq!(a.recv().await.as_deref(), Some(expected));
        assert_eq!(b.recv().await.as_deref(), Some(expected));
    }

    #[tokio::test]
    async fn test_dropped_listener_does_not_block_others() {
        let client = start(4);
        let gone = client.subscribe().await.unwrap();
        let mut alive = client.subscribe().await.unwrap();
        drop(gone);

        client.broadcast(prepared(1));
        assert!(alive.recv().await.is_some());

        // The closed listener was pruned during the broadcast.
        assert_eq!(client.listener_count().await, Ok(1));
    }

    #[tokio::test]
    async fn test_full_listener_is_skipped() {
        let client = start(1);
        let mut slow = client.subscribe().await.unwrap();
        let mut fast = client.subscribe().await.unwrap();

        client.broadcast(prepared(1));
        assert!(fast.recv().await.is_some());
        client.broadcast(prepared(2));
        assert!(fast.recv().await.unwrap().contains("\"orderId\":2"));

        // Only the first event fit in the slow listener's queue.
        assert!(slow.recv().await.unwrap().contains("\"orderId\":1"));
        assert_eq!(slow.try_recv(), None);
        assert_eq!(client.listener_count().await, Ok(2));
    }

    #[tokio::test]
    async fn test_unsubscribe_is_idempotent() {
        let client = start(4);
        let mut sub = client.subscribe().await.unwrap();

        assert_eq!(client.unsubscribe(sub.handle).await, Ok(true));
        assert_eq!(client.unsubscribe(sub.handle).await, Ok(false));
        assert_eq!(client.listener_count().await, Ok(0));

        // The hub dropped its sender, so the queue is closed.
        assert_eq!(sub.recv().await, None);
    }

    #[tokio::test]
    async fn test_requests_after_shutdown() {
        let (hub, client) = NotificationHub::new(4, 4);
        drop(hub);
        assert_eq!(client.subscribe().await.unwrap_err(), NotifyError::HubClosed);
        client.broadcast(prepared(1));
    }
}
