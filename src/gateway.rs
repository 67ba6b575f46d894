//! Submission gateway abstraction for the contact form round trip
//!
//! There is no backend: the shipped gateway simulates delivery by logging the
//! request and handing back a receipt. The trait seam keeps the flow mockable
//! and leaves room for a real transport.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Contact form payload, constructed from field values at submit time and
/// discarded after the simulated round trip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

/// Acknowledgement returned by a gateway
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryReceipt {
    pub id: Uuid,
    pub accepted_at: DateTime<Utc>,
}

/// Trait for delivering contact submissions, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactGateway: Send + Sync {
    /// Deliver a submission and return its receipt
    async fn deliver(&self, request: &SubmissionRequest) -> Result<DeliveryReceipt>;
}

/// Gateway that simulates delivery: the request is logged for diagnostics
/// and otherwise discarded
#[derive(Debug, Default)]
pub struct SimulatedGateway;

#[async_trait]
impl ContactGateway for SimulatedGateway {
    async fn deliver(&self, request: &SubmissionRequest) -> Result<DeliveryReceipt> {
        let receipt = DeliveryReceipt {
            id: Uuid::new_v4(),
            accepted_at: Utc::now(),
        };
        let payload = serde_json::to_string(request)?;
        tracing::info!(receipt = %receipt.id, %payload, "تم إرسال نموذج الاتصال");
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request() -> SubmissionRequest {
        SubmissionRequest {
            name: "أحمد السالم".to_string(),
            email: "ahmed@example.com".to_string(),
            phone: "+966 50 123 4567".to_string(),
            subject: "استفسار".to_string(),
            message: "أرغب في معرفة المزيد عن خدماتكم.".to_string(),
        }
    }

    #[test]
    fn test_simulated_gateway_returns_receipt() {
        let gateway = SimulatedGateway;
        let receipt = tokio_test::block_on(gateway.deliver(&sample_request())).unwrap();
        assert!(receipt.accepted_at <= Utc::now());
    }

    #[test]
    fn test_receipts_are_unique() {
        let gateway = SimulatedGateway;
        let a = tokio_test::block_on(gateway.deliver(&sample_request())).unwrap();
        let b = tokio_test::block_on(gateway.deliver(&sample_request())).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_request_round_trips_through_json() {
        let request = sample_request();
        let json = serde_json::to_string(&request).unwrap();
        let parsed: SubmissionRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, request);
    }
}
