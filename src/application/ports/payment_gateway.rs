use async_trait::async_trait;

use crate::{
    app_error::AppResult,
    domain::entities::subscription::{PaymentMethod, PricingTier},
};

/// Collection request forwarded to the payment gateway.
#[derive(Debug, Clone)]
pub struct CollectionRequest {
    pub phone_number: Option<String>,
    pub card_number: Option<String>,
    pub amount: f64,
    pub currency: String,
    pub method: PaymentMethod,
    pub tier: PricingTier,
}

/// Acknowledgement returned by the gateway when a collection is accepted.
///
/// The gateway only acknowledges acceptance here; the settlement outcome
/// arrives later through the webhook path.
#[derive(Debug, Clone)]
pub struct GatewayReceipt {
    /// Opaque external reference for the attempt
    pub reference: String,
}

/// Port for the external payment gateway.
#[async_trait]
pub trait PaymentGatewayPort: Send + Sync {
    async fn initiate_collection(&self, request: &CollectionRequest) -> AppResult<GatewayReceipt>;
}
