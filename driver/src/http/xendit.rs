use serde::{Deserialize, Serialize};

use kernel::interface::gateway::{InvoiceDraft, InvoiceGateway, InvoiceUrl};
use kernel::KernelError;

use crate::env;
use crate::error::{ConvertError, DriverError};

static XENDIT_API_KEY: &str = "API_KEY_XENDIT";
static INVOICE_ENDPOINT: &str = "https://api.xendit.co/v2/invoices";

/// Invoice issuing through the Xendit REST API. The API key doubles as the
/// basic-auth username with an empty password.
pub struct XenditInvoicer {
    client: reqwest::Client,
    api_key: String,
}

impl XenditInvoicer {
    pub fn new() -> error_stack::Result<Self, KernelError> {
        Ok(Self {
            client: reqwest::Client::new(),
            api_key: env(XENDIT_API_KEY)?,
        })
    }
}

#[derive(Serialize)]
struct InvoiceRequest {
    external_id: String,
    amount: f64,
    description: String,
    invoice_duration: u32,
    currency: String,
    customer: CustomerBody,
    items: Vec<ItemBody>,
    fees: Vec<FeeBody>,
}

#[derive(Serialize)]
struct CustomerBody {
    email: String,
    mobile_number: String,
}

#[derive(Serialize)]
struct ItemBody {
    name: String,
    quantity: f64,
    price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<String>,
}

#[derive(Serialize)]
struct FeeBody {
    #[serde(rename = "type")]
    fee_type: String,
    value: f64,
}

#[derive(Deserialize)]
struct InvoiceResponse {
    invoice_url: String,
}

impl From<&InvoiceDraft> for InvoiceRequest {
    fn from(draft: &InvoiceDraft) -> Self {
        Self {
            external_id: draft.external_id().clone(),
            amount: *draft.amount(),
            description: draft.description().clone(),
            invoice_duration: *draft.duration_secs(),
            currency: draft.currency().clone(),
            customer: CustomerBody {
                email: draft.customer().email().as_ref().clone(),
                mobile_number: draft.customer().mobile_number().as_ref().clone(),
            },
            items: draft
                .items()
                .iter()
                .map(|item| ItemBody {
                    name: item.name().clone(),
                    quantity: *item.quantity(),
                    price: *item.price(),
                    category: item.category().clone(),
                })
                .collect(),
            fees: draft
                .fees()
                .iter()
                .map(|fee| FeeBody {
                    fee_type: fee.fee_type().clone(),
                    value: *fee.value(),
                })
                .collect(),
        }
    }
}

#[async_trait::async_trait]
impl InvoiceGateway for XenditInvoicer {
    async fn create(
        &self,
        draft: &InvoiceDraft,
    ) -> error_stack::Result<InvoiceUrl, KernelError> {
        let body = InvoiceRequest::from(draft);
        let response = self
            .client
            .post(INVOICE_ENDPOINT)
            .basic_auth(&self.api_key, Some(""))
            .json(&body)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(DriverError::from)
            .convert_error()?;
        let parsed = response
            .json::<InvoiceResponse>()
            .await
            .map_err(DriverError::from)
            .convert_error()?;
        Ok(InvoiceUrl::new(parsed.invoice_url))
    }
}
