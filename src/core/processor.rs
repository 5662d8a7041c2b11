//! Per-order processing
//!
//! Scans an order's items in feed order. Every item whose status is
//! "Delivered" (any case) gets one alert carrying its current counter, then
//! its counter is incremented by one. The increment happens whether or not
//! the alert endpoint accepted the alert.
//!
//! Processing is not idempotent: an order processed twice alerts twice and
//! increments twice.

use crate::adapters::orders::{CallOutcome, DeliveryAlert, OrdersGateway};
use crate::domain::{Order, Result};
use std::sync::Arc;

/// Counts produced by processing one order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessingReport {
    /// Items found in delivered status
    pub delivered_items: usize,
    /// Alerts accepted by the alert endpoint
    pub alerts_sent: usize,
    /// Alerts answered with a non-success status
    pub alerts_rejected: usize,
}

/// Sends delivery alerts and updates item counters
pub struct OrderProcessor {
    gateway: Arc<dyn OrdersGateway>,
}

impl OrderProcessor {
    /// Create a processor that alerts through `gateway`
    pub fn new(gateway: Arc<dyn OrdersGateway>) -> Self {
        Self { gateway }
    }

    /// Process one order in place
    ///
    /// Items are never added, removed or reordered.
    ///
    /// # Errors
    ///
    /// Returns an error if an alert cannot be delivered at the transport
    /// level or a counter would overflow. Items after the failing one are
    /// left untouched.
    pub async fn process_order(&self, order: &mut Order) -> Result<ProcessingReport> {
        let mut report = ProcessingReport::default();

        for item in order.items.iter_mut() {
            if !item.is_delivered() {
                continue;
            }
            report.delivered_items += 1;

            let alert = DeliveryAlert::for_item(&order.order_id, item);
            match self.gateway.send_alert(&alert).await? {
                CallOutcome::Accepted => report.alerts_sent += 1,
                CallOutcome::Rejected { .. } => report.alerts_rejected += 1,
            }

            item.record_notification()?;
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::RecordingGateway;
    use crate::domain::{DeliveryAlertsError, Item, OrderId};

    fn processor(gateway: &Arc<RecordingGateway>) -> OrderProcessor {
        OrderProcessor::new(gateway.clone())
    }

    #[tokio::test]
    async fn test_delivered_item_alerts_then_increments() {
        let gateway = Arc::new(RecordingGateway::new(vec![]));
        let mut order = Order::new(1u64, vec![Item::new("My item", "delivered", 0)]);

        let report = processor(&gateway).process_order(&mut order).await.unwrap();

        let alerts = gateway.alerts();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].notification_count, 0);
        assert_eq!(alerts[0].order_id, OrderId::from(1u64));
        assert_eq!(alerts[0].description, "My item");
        assert_eq!(order.items[0].delivery_notification, 1);
        assert_eq!(
            report,
            ProcessingReport {
                delivered_items: 1,
                alerts_sent: 1,
                alerts_rejected: 0
            }
        );
    }

    #[tokio::test]
    async fn test_pending_item_untouched() {
        let gateway = Arc::new(RecordingGateway::new(vec![]));
        let original = Order::new(1u64, vec![Item::new("Walker", "Pending", 4)]);
        let mut order = original.clone();

        let report = processor(&gateway).process_order(&mut order).await.unwrap();

        assert!(gateway.alerts().is_empty());
        assert_eq!(order, original);
        assert_eq!(report, ProcessingReport::default());
    }

    #[tokio::test]
    async fn test_processing_is_not_idempotent() {
        let gateway = Arc::new(RecordingGateway::new(vec![]));
        let processor = processor(&gateway);
        let mut order = Order::new(1u64, vec![Item::new("My item", "Delivered", 0)]);

        processor.process_order(&mut order).await.unwrap();
        processor.process_order(&mut order).await.unwrap();

        let counts: Vec<u64> = gateway
            .alerts()
            .iter()
            .map(|a| a.notification_count)
            .collect();
        assert_eq!(counts, vec![0, 1]);
        assert_eq!(order.items[0].delivery_notification, 2);
    }

    #[tokio::test]
    async fn test_items_processed_in_order() {
        let gateway = Arc::new(RecordingGateway::new(vec![]));
        let mut order = Order::new(
            "ORD-7",
            vec![
                Item::new("first", "Delivered", 2),
                Item::new("second", "Shipped", 0),
                Item::new("third", "DELIVERED", 0),
            ],
        );

        let report = processor(&gateway).process_order(&mut order).await.unwrap();

        let descriptions: Vec<String> = gateway
            .alerts()
            .into_iter()
            .map(|a| a.description)
            .collect();
        assert_eq!(descriptions, vec!["first", "third"]);
        assert_eq!(order.items[0].delivery_notification, 3);
        assert_eq!(order.items[1].delivery_notification, 0);
        assert_eq!(order.items[2].delivery_notification, 1);
        assert_eq!(report.delivered_items, 2);
    }

    #[tokio::test]
    async fn test_rejected_alert_still_increments() {
        let gateway = Arc::new(RecordingGateway::new(vec![]).with_alert_status(503));
        let mut order = Order::new(1u64, vec![Item::new("My item", "Delivered", 0)]);

        let report = processor(&gateway).process_order(&mut order).await.unwrap();

        assert_eq!(order.items[0].delivery_notification, 1);
        assert_eq!(report.alerts_sent, 0);
        assert_eq!(report.alerts_rejected, 1);
    }

    #[tokio::test]
    async fn test_transport_failure_propagates() {
        let gateway = Arc::new(RecordingGateway::new(vec![]).with_failing_alerts());
        let mut order = Order::new(
            1u64,
            vec![
                Item::new("a", "Delivered", 0),
                Item::new("b", "Delivered", 0),
            ],
        );

        let result = processor(&gateway).process_order(&mut order).await;

        assert!(matches!(result, Err(DeliveryAlertsError::OrdersApi(_))));
        assert_eq!(order.items[0].delivery_notification, 0);
        assert_eq!(order.items[1].delivery_notification, 0);
    }

    #[tokio::test]
    async fn test_empty_order() {
        let gateway = Arc::new(RecordingGateway::new(vec![]));
        let mut order = Order::new(1u64, vec![]);

        let report = processor(&gateway).process_order(&mut order).await.unwrap();

        assert_eq!(report, ProcessingReport::default());
        assert!(gateway.alerts().is_empty());
    }
}
