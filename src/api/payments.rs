use crate::entities::payment::{CreatePaymentLinkRequest, PaymentLink};
use crate::error::ApiResult;
use crate::routes::Page;
use crate::transport::{Access, HttpClient};

#[derive(Clone)]
pub struct PaymentsApi {
    http: HttpClient,
    app_base_url: String,
}

impl PaymentsApi {
    pub const CREATE_LINK_PATH: &'static str = "/booking/payments/create-link";

    pub fn new(http: HttpClient, app_base_url: impl Into<String>) -> Self {
        Self {
            http,
            app_base_url: app_base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Ask the backend for a checkout link.
    ///
    /// No idempotency key is sent: calling twice for one ticket may create two
    /// payment intents.
    pub async fn create_payment_link(
        &self,
        request: &CreatePaymentLinkRequest,
    ) -> ApiResult<PaymentLink> {
        tracing::info!(ticket_id = %request.ticket_id, "Creating payment link");
        self.http
            .post(Self::CREATE_LINK_PATH, Access::Public, request)
            .await
    }

    /// Create a link whose return/cancel URLs point back at the payment pages
    pub async fn create_payment_link_for(&self, ticket_id: &str) -> ApiResult<PaymentLink> {
        let request = self.link_request(ticket_id);
        self.create_payment_link(&request).await
    }

    pub fn link_request(&self, ticket_id: &str) -> CreatePaymentLinkRequest {
        let success = Page::PaymentSuccess {
            ticket_id: ticket_id.to_string(),
        };
        let retry = Page::BookingPayment {
            ticket_id: ticket_id.to_string(),
        };

        CreatePaymentLinkRequest {
            ticket_id: ticket_id.to_string(),
            return_url: format!("{}{}", self.app_base_url, success.href()),
            cancel_url: format!("{}{}", self.app_base_url, retry.href()),
        }
    }
}
