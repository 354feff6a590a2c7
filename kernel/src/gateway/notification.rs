use crate::entity::PhoneNumber;
use crate::KernelError;

/// Outbound messaging. Delivery is attempted once; there is no retry here,
/// callers decide whether a failed send fails the whole request.
#[async_trait::async_trait]
pub trait NotificationGateway: 'static + Sync + Send {
    async fn send(&self, to: &PhoneNumber, body: &str) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnNotificationGateway: 'static + Sync + Send {
    type NotificationGateway: NotificationGateway;
    fn notification_gateway(&self) -> &Self::NotificationGateway;
}
