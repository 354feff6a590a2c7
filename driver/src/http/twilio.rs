use kernel::interface::gateway::NotificationGateway;
use kernel::prelude::entity::PhoneNumber;
use kernel::KernelError;

use crate::env;
use crate::error::ConvertError;

static TWILIO_ACCOUNT_SID: &str = "twilioAccountSID";
static TWILIO_AUTH_TOKEN: &str = "twilioAuthToken";
static TWILIO_PHONE_NUMBER: &str = "twilioPhoneNumber";

/// WhatsApp delivery through the Twilio messaging API.
pub struct TwilioNotifier {
    client: reqwest::Client,
    account_sid: String,
    auth_token: String,
    from: String,
}

impl TwilioNotifier {
    pub fn new() -> error_stack::Result<Self, KernelError> {
        Ok(Self {
            client: reqwest::Client::new(),
            account_sid: env(TWILIO_ACCOUNT_SID)?,
            auth_token: env(TWILIO_AUTH_TOKEN)?,
            from: env(TWILIO_PHONE_NUMBER)?,
        })
    }
}

#[async_trait::async_trait]
impl NotificationGateway for TwilioNotifier {
    async fn send(&self, to: &PhoneNumber, body: &str) -> error_stack::Result<(), KernelError> {
        let url = format!(
            "https://api.twilio.com/2010-04-01/Accounts/{}/Messages.json",
            self.account_sid
        );
        let params = [
            ("To", format!("whatsapp:+{}", to.as_ref())),
            ("From", format!("whatsapp:+{}", self.from)),
            ("Body", body.to_string()),
        ];
        self.client
            .post(&url)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&params)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map(|_| ())
            .map_err(crate::error::DriverError::from)
            .convert_error()
    }
}
