//! Session Domain Models
//!
//! A [`CafeSession`] is the whole UI state of one visitor: the menu they
//! see, their cart, the current status message and whether an order is on
//! its way to the order service.

use crate::cart::Cart;
use crate::error::{CafeError, Result};
use crate::menu::Menu;
use crate::order::{OrderReceipt, OrderRequest, OrderSubmitter};
use rust_decimal::Decimal;
use serde::Serialize;
use std::sync::Arc;

// =============================================================================
// Status Messages
// =============================================================================

pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty!";
pub const ORDER_FAILED_MESSAGE: &str = "Failed to place order. Please try again.";
pub const ORDER_IN_FLIGHT_MESSAGE: &str = "Your order is already being placed.";
pub const UNKNOWN_ITEM_MESSAGE: &str = "That item is not on the menu.";

/// The single user-facing outcome of the last action
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum StatusMessage {
    Success(String),
    Error(String),
}

impl StatusMessage {
    pub fn text(&self) -> &str {
        match self {
            Self::Success(text) | Self::Error(text) => text,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// Where the session is in the order submission cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderPhase {
    #[default]
    Idle,
    Submitting,
}

// =============================================================================
// Session
// =============================================================================

#[derive(Debug, Clone)]
pub struct CafeSession {
    menu: Arc<Menu>,
    cart: Cart,
    message: Option<StatusMessage>,
    phase: OrderPhase,
}

impl CafeSession {
    pub fn new(menu: Arc<Menu>) -> Self {
        Self {
            menu,
            cart: Cart::new(),
            message: None,
            phase: OrderPhase::Idle,
        }
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn message(&self) -> Option<&StatusMessage> {
        self.message.as_ref()
    }

    pub fn phase(&self) -> OrderPhase {
        self.phase
    }

    pub fn total(&self) -> Decimal {
        self.cart.total()
    }

    /// Adds the menu item `item_id` to the cart and clears the status
    /// message. Ids that are not on the menu leave the cart untouched.
    pub fn add(&mut self, item_id: &str) -> Result<()> {
        match self.menu.find(item_id) {
            Some(item) => {
                self.cart.add(item.clone());
                self.message = None;
                Ok(())
            }
            None => {
                self.message = Some(StatusMessage::Error(UNKNOWN_ITEM_MESSAGE.into()));
                Err(CafeError::UnknownItem(item_id.to_string()))
            }
        }
    }

    /// Removes the cart entry at `index` and clears the status message.
    /// Out-of-range indices are a no-op.
    pub fn remove_at(&mut self, index: usize) {
        self.cart.remove_at(index);
        self.message = None;
    }

    /// First half of an order submission.
    ///
    /// Returns the request to send, or `None` when nothing must be sent
    /// (empty cart, or another submission still running); in that case the
    /// status message says why.
    pub fn begin_order(&mut self) -> Option<OrderRequest> {
        if self.phase == OrderPhase::Submitting {
            self.message = Some(StatusMessage::Error(ORDER_IN_FLIGHT_MESSAGE.into()));
            return None;
        }

        if self.cart.is_empty() {
            self.message = Some(StatusMessage::Error(EMPTY_CART_MESSAGE.into()));
            return None;
        }

        self.phase = OrderPhase::Submitting;
        Some(OrderRequest {
            item_ids: self.cart.item_ids(),
        })
    }

    /// Second half of an order submission: applies the service's answer.
    pub fn finish_order(&mut self, outcome: Result<OrderReceipt>) {
        self.phase = OrderPhase::Idle;

        match outcome {
            Ok(receipt) => {
                self.message = Some(StatusMessage::Success(format!(
                    "Order {} placed successfully!",
                    receipt.id
                )));
                self.cart.clear();
            }
            Err(e) => {
                tracing::error!("Error placing order: {}", e);
                self.message = Some(StatusMessage::Error(ORDER_FAILED_MESSAGE.into()));
            }
        }
    }

    /// Drops an order that will never be answered: back to `Idle`, cart and
    /// status message untouched.
    pub fn abandon_order(&mut self) {
        self.phase = OrderPhase::Idle;
    }

    /// Places an order for an exclusively owned session. Dropping the
    /// returned future mid-request abandons the order.
    pub async fn place_order(&mut self, submitter: &dyn OrderSubmitter) {
        if let Some(request) = self.begin_order() {
            let in_flight = InFlight(Some(self));
            let outcome = submitter.submit(&request).await;
            in_flight.finish(outcome);
        }
    }
}

/// Borrow of a session whose order is with the service.
struct InFlight<'a>(Option<&'a mut CafeSession>);

impl InFlight<'_> {
    fn finish(mut self, outcome: Result<OrderReceipt>) {
        if let Some(session) = self.0.take() {
            session.finish_order(outcome);
        }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if let Some(session) = self.0.take() {
            session.abandon_order();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Records every request and answers with a fixed outcome.
    struct StubSubmitter {
        calls: AtomicUsize,
        last: Mutex<Option<OrderRequest>>,
        fail: bool,
    }

    impl StubSubmitter {
        fn new(fail: bool) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                last: Mutex::new(None),
                fail,
            }
        }
    }

    #[async_trait]
    impl OrderSubmitter for StubSubmitter {
        async fn submit(&self, order: &OrderRequest) -> Result<OrderReceipt> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last.lock().unwrap() = Some(order.clone());
            if self.fail {
                Err(CafeError::Status {
                    url: "http://test/api/orders/orders".into(),
                    status: 500,
                })
            } else {
                Ok(OrderReceipt {
                    id: "ORD-TEST1".into(),
                    item_ids: order.item_ids.clone(),
                    status: Some("pending".into()),
                })
            }
        }
    }

    fn session() -> CafeSession {
        CafeSession::new(Arc::new(Menu::fallback()))
    }

    #[tokio::test]
    async fn test_empty_cart_sends_nothing() {
        let submitter = StubSubmitter::new(false);
        let mut session = session();

        session.place_order(&submitter).await;

        assert_eq!(submitter.calls.load(Ordering::SeqCst), 0);
        assert_eq!(
            session.message(),
            Some(&StatusMessage::Error(EMPTY_CART_MESSAGE.into()))
        );
        assert_eq!(session.phase(), OrderPhase::Idle);
    }

    #[tokio::test]
    async fn test_successful_order_clears_cart() {
        let submitter = StubSubmitter::new(false);
        let mut session = session();
        session.add("1").unwrap();
        session.add("3").unwrap();
        session.add("1").unwrap();

        session.place_order(&submitter).await;

        assert_eq!(submitter.calls.load(Ordering::SeqCst), 1);
        let sent = submitter.last.lock().unwrap().clone().unwrap();
        assert_eq!(sent.item_ids, vec!["1", "3", "1"]);

        let message = session.message().unwrap();
        assert!(message.is_success());
        assert!(message.text().contains("ORD-TEST1"));
        assert!(session.cart().is_empty());
    }

    #[tokio::test]
    async fn test_failed_order_keeps_cart() {
        let submitter = StubSubmitter::new(true);
        let mut session = session();
        session.add("1").unwrap();
        session.add("3").unwrap();
        let before = session.cart().clone();

        session.place_order(&submitter).await;

        assert_eq!(session.cart(), &before);
        assert_eq!(
            session.message(),
            Some(&StatusMessage::Error(ORDER_FAILED_MESSAGE.into()))
        );
        assert_eq!(session.phase(), OrderPhase::Idle);
    }

    #[test]
    fn test_second_submit_while_in_flight_is_refused() {
        let mut session = session();
        session.add("2").unwrap();

        let first = session.begin_order();
        assert!(first.is_some());
        assert_eq!(session.phase(), OrderPhase::Submitting);

        assert!(session.begin_order().is_none());
        assert_eq!(session.message().unwrap().text(), ORDER_IN_FLIGHT_MESSAGE);

        session.finish_order(Ok(OrderReceipt {
            id: "ORD-1".into(),
            item_ids: vec![],
            status: None,
        }));
        assert_eq!(session.phase(), OrderPhase::Idle);
        assert!(session.cart().is_empty());
    }

    /// Never answers.
    struct SilentSubmitter;

    #[async_trait]
    impl OrderSubmitter for SilentSubmitter {
        async fn submit(&self, _order: &OrderRequest) -> Result<OrderReceipt> {
            std::future::pending::<Result<OrderReceipt>>().await
        }
    }

    #[tokio::test]
    async fn test_dropped_place_order_can_be_retried() {
        let mut session = session();
        session.add("1").unwrap();

        let dropped = tokio::time::timeout(
            std::time::Duration::from_millis(20),
            session.place_order(&SilentSubmitter),
        )
        .await;
        assert!(dropped.is_err());
        assert_eq!(session.phase(), OrderPhase::Idle);
        assert_eq!(session.cart().len(), 1);

        let submitter = StubSubmitter::new(false);
        session.place_order(&submitter).await;

        assert_eq!(submitter.calls.load(Ordering::SeqCst), 1);
        assert!(session.message().unwrap().is_success());
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_abandon_order_allows_a_new_submission() {
        let mut session = session();
        session.add("3").unwrap();

        assert!(session.begin_order().is_some());
        session.abandon_order();

        assert_eq!(session.phase(), OrderPhase::Idle);
        assert!(session.begin_order().is_some());
    }

    #[test]
    fn test_add_clears_message_and_rejects_unknown_items() {
        let mut session = session();
        assert!(session.begin_order().is_none());
        assert!(session.message().is_some());

        session.add("1").unwrap();
        assert!(session.message().is_none());

        let err = session.add("99").unwrap_err();
        assert!(matches!(err, CafeError::UnknownItem(id) if id == "99"));
        assert_eq!(session.cart().len(), 1);
        assert_eq!(session.message().unwrap().text(), UNKNOWN_ITEM_MESSAGE);
    }

    #[test]
    fn test_remove_at_updates_total() {
        let mut session = session();
        session.add("1").unwrap();
        session.add("2").unwrap();
        session.add("3").unwrap();

        session.remove_at(1);
        assert_eq!(session.total(), Decimal::new(575, 2));

        session.remove_at(7);
        assert_eq!(session.cart().item_ids(), vec!["1", "3"]);
    }
}
