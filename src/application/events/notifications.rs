//! Notification subscribers for sales-opportunity events.
//!
//! Each notifier turns one event kind into a structured log record. They are
//! the hook point for real notification channels (email, chat).

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

use super::DomainEvents;
use crate::domain::events::{CrmEvent, EventKind};
use crate::domain::foundation::{DomainError, DomainEvent, ErrorCode};
use crate::ports::EventHandler;

/// Announces newly registered opportunities.
#[derive(Debug, Default)]
pub struct SalesOpportunityCreatedNotifier;

#[async_trait]
impl EventHandler for SalesOpportunityCreatedNotifier {
    async fn handle(&self, event: &CrmEvent) -> Result<(), DomainError> {
        if let CrmEvent::SalesOpportunityCreated(created) = event {
            info!(
                sales_opportunity_id = %created.sales_opportunity_id,
                client_id = %created.client_id,
                sales_rep_id = %created.sales_rep_id,
                title = %created.title,
                value = created.value,
                "new sales opportunity registered"
            );
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "SalesOpportunityCreatedNotifier"
    }
}

/// Alerts managers about high-value opportunities.
#[derive(Debug, Default)]
pub struct HighValueSalesOpportunityNotifier;

#[async_trait]
impl EventHandler for HighValueSalesOpportunityNotifier {
    async fn handle(&self, event: &CrmEvent) -> Result<(), DomainError> {
        if let CrmEvent::SalesOpportunityHighValue(high_value) = event {
            info!(
                sales_opportunity_id = %high_value.sales_opportunity_id,
                sales_rep_id = %high_value.sales_rep_id,
                title = %high_value.title,
                previous_value = high_value.previous_value,
                value = high_value.value,
                "high-value sales opportunity: notifying managers"
            );
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "HighValueSalesOpportunityNotifier"
    }
}

#[derive(Debug, Default)]
pub struct SalesOpportunityStatusNotifier;

#[async_trait]
impl EventHandler for SalesOpportunityStatusNotifier {
    async fn handle(&self, event: &CrmEvent) -> Result<(), DomainError> {
        if let CrmEvent::SalesOpportunityStatusUpdated(updated) = event {
            info!(
                sales_opportunity_id = %updated.sales_opportunity_id,
                sales_rep_id = %updated.sales_rep_id,
                title = %updated.title,
                from = %updated.previous_status,
                to = %updated.status,
                "sales opportunity status changed"
            );
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "SalesOpportunityStatusNotifier"
    }
}

#[derive(Debug, Default)]
pub struct LostSalesOpportunityNotifier;

#[async_trait]
impl EventHandler for LostSalesOpportunityNotifier {
    async fn handle(&self, event: &CrmEvent) -> Result<(), DomainError> {
        if let CrmEvent::SalesOpportunityLost(lost) = event {
            info!(
                sales_opportunity_id = %lost.sales_opportunity_id,
                sales_rep_id = %lost.sales_rep_id,
                title = %lost.title,
                value = lost.value,
                previous_status = %lost.previous_status,
                "sales opportunity lost"
            );
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "LostSalesOpportunityNotifier"
    }
}

#[derive(Debug, Default)]
pub struct DeliveredSalesOpportunityNotifier;

#[async_trait]
impl EventHandler for DeliveredSalesOpportunityNotifier {
    async fn handle(&self, event: &CrmEvent) -> Result<(), DomainError> {
        if let CrmEvent::SalesOpportunityDelivered(delivered) = event {
            info!(
                sales_opportunity_id = %delivered.sales_opportunity_id,
                sales_rep_id = %delivered.sales_rep_id,
                title = %delivered.title,
                value = delivered.value,
                photo_url = %delivered.delivery_photo_url,
                "sales opportunity delivered"
            );
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "DeliveredSalesOpportunityNotifier"
    }
}

/// Writes every event as JSON at debug level.
#[derive(Debug, Default)]
pub struct EventAuditLogger;

#[async_trait]
impl EventHandler for EventAuditLogger {
    async fn handle(&self, event: &CrmEvent) -> Result<(), DomainError> {
        let payload = serde_json::to_string(event).map_err(|e| {
            DomainError::new(
                ErrorCode::EventHandlerFailed,
                format!("cannot serialize event: {}", e),
            )
        })?;
        debug!(
            event_type = event.event_type(),
            event_id = %event.event_id(),
            aggregate_type = event.aggregate_type(),
            aggregate_id = %event.aggregate_id(),
            %payload,
            "domain event"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "EventAuditLogger"
    }
}

/// Subscribes the notifiers and the audit logger.
pub fn register_notification_handlers(events: &DomainEvents) {
    events.register(
        Arc::new(SalesOpportunityCreatedNotifier),
        EventKind::SalesOpportunityCreated,
    );
    events.register(
        Arc::new(HighValueSalesOpportunityNotifier),
        EventKind::SalesOpportunityHighValue,
    );
    events.register(
        Arc::new(SalesOpportunityStatusNotifier),
        EventKind::SalesOpportunityStatusUpdated,
    );
    events.register(
        Arc::new(LostSalesOpportunityNotifier),
        EventKind::SalesOpportunityLost,
    );
    events.register(
        Arc::new(DeliveredSalesOpportunityNotifier),
        EventKind::SalesOpportunityDelivered,
    );
    events.register_all(Arc::new(EventAuditLogger), &EventKind::ALL);
}
