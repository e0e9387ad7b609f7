use async_trait::async_trait;
use rand::Rng;
use rand::distributions::Alphanumeric;
use std::time::Duration;

use crate::{
    app_error::AppResult,
    application::ports::payment_gateway::{CollectionRequest, GatewayReceipt, PaymentGatewayPort},
};

/// Length of the random part of a gateway reference.
const REFERENCE_LEN: usize = 12;

/// Simulated payment gateway client.
///
/// Accepts every collection after a configurable artificial latency and
/// hands back a fresh reference. No external calls are made; the settlement
/// outcome is delivered later through the simulated webhook path.
#[derive(Clone)]
pub struct DummyGatewayClient {
    latency: Duration,
}

impl DummyGatewayClient {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    fn generate_reference() -> String {
        let suffix: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(REFERENCE_LEN)
            .map(|b| (b as char).to_ascii_uppercase())
            .collect();
        format!("REF-{suffix}")
    }
}

#[async_trait]
impl PaymentGatewayPort for DummyGatewayClient {
    async fn initiate_collection(&self, request: &CollectionRequest) -> AppResult<GatewayReceipt> {
        tokio::time::sleep(self.latency).await;

        let reference = Self::generate_reference();
        tracing::debug!(
            reference = %reference,
            method = %request.method,
            amount = request.amount,
            currency = %request.currency,
            "Dummy gateway accepted collection"
        );

        Ok(GatewayReceipt { reference })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::subscription::{PaymentMethod, PricingTier};

    #[tokio::test]
    async fn test_reference_format() {
        let gateway = DummyGatewayClient::new(Duration::ZERO);
        let request = CollectionRequest {
            phone_number: Some("+256700000000".to_string()),
            card_number: None,
            amount: 15.0,
            currency: "USD".to_string(),
            method: PaymentMethod::MobileMoney,
            tier: PricingTier::Growth,
        };

        let receipt = gateway.initiate_collection(&request).await.unwrap();
        let suffix = receipt.reference.strip_prefix("REF-").unwrap();
        assert_eq!(suffix.len(), REFERENCE_LEN);
        assert!(suffix.chars().all(|c| c.is_ascii_alphanumeric()));
        assert!(!suffix.chars().any(|c| c.is_ascii_lowercase()));
    }

    #[tokio::test]
    async fn test_references_are_unique() {
        let a = DummyGatewayClient::generate_reference();
        let b = DummyGatewayClient::generate_reference();
        assert_ne!(a, b);
    }
}
