use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentLinkRequest {
    pub ticket_id: String,
    pub return_url: String,
    pub cancel_url: String,
}

/// Checkout link issued for one ticket
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentLink {
    pub checkout_url: String,
    pub success: bool,
    pub order_code: i64,
    pub qr_code: String,
}
