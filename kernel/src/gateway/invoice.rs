use vodca::{AsRefln, Fromln, References};

use crate::entity::{PhoneNumber, UserEmail};
use crate::KernelError;

/// Payable link returned by the billing provider, forwarded to the customer
/// over the notification channel.
#[derive(Debug, Clone, Eq, PartialEq, Fromln, AsRefln)]
pub struct InvoiceUrl(String);

impl InvoiceUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }
}

#[derive(Debug, Clone, PartialEq, References)]
pub struct InvoiceCustomer {
    email: UserEmail,
    mobile_number: PhoneNumber,
}

impl InvoiceCustomer {
    pub fn new(email: UserEmail, mobile_number: PhoneNumber) -> Self {
        Self {
            email,
            mobile_number,
        }
    }
}

#[derive(Debug, Clone, PartialEq, References)]
pub struct InvoiceItem {
    name: String,
    quantity: f64,
    price: f64,
    category: Option<String>,
}

impl InvoiceItem {
    pub fn new(
        name: impl Into<String>,
        quantity: f64,
        price: f64,
        category: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            quantity,
            price,
            category,
        }
    }
}

#[derive(Debug, Clone, PartialEq, References)]
pub struct InvoiceFee {
    fee_type: String,
    value: f64,
}

impl InvoiceFee {
    pub fn new(fee_type: impl Into<String>, value: f64) -> Self {
        Self {
            fee_type: fee_type.into(),
            value,
        }
    }
}

/// Everything the billing provider needs to issue one invoice.
#[derive(Debug, Clone, PartialEq, References)]
pub struct InvoiceDraft {
    external_id: String,
    amount: f64,
    description: String,
    duration_secs: u32,
    currency: String,
    customer: InvoiceCustomer,
    items: Vec<InvoiceItem>,
    fees: Vec<InvoiceFee>,
}

impl InvoiceDraft {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        external_id: impl Into<String>,
        amount: f64,
        description: impl Into<String>,
        duration_secs: u32,
        currency: impl Into<String>,
        customer: InvoiceCustomer,
        items: Vec<InvoiceItem>,
        fees: Vec<InvoiceFee>,
    ) -> Self {
        Self {
            external_id: external_id.into(),
            amount,
            description: description.into(),
            duration_secs,
            currency: currency.into(),
            customer,
            items,
            fees,
        }
    }
}

#[async_trait::async_trait]
pub trait InvoiceGateway: 'static + Sync + Send {
    async fn create(&self, draft: &InvoiceDraft)
        -> error_stack::Result<InvoiceUrl, KernelError>;
}

pub trait DependOnInvoiceGateway: 'static + Sync + Send {
    type InvoiceGateway: InvoiceGateway;
    fn invoice_gateway(&self) -> &Self::InvoiceGateway;
}
