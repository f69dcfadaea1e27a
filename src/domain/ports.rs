use super::account::{Account, AccountId};
use super::notification::Notification;
use super::payment::{NewPayment, Payment};
use crate::error::Result;
use async_trait::async_trait;

/// Client-side view of the remote account/payment service.
///
/// Every call is fallible; the caller decides how a failure surfaces.
#[async_trait]
pub trait PaymentApi: Send + Sync {
    async fn list_accounts(&self) -> Result<Vec<Account>>;
    async fn list_payments_by_account(&self, account_id: &AccountId) -> Result<Vec<Payment>>;
    /// Creates a payment record. The server may or may not echo the created
    /// record back in the response body.
    async fn create_payment(&self, payment: NewPayment) -> Result<Option<Payment>>;
}

pub type PaymentApiBox = Box<dyn PaymentApi>;

/// Sink for user-facing toast notifications.
///
/// Fire-and-forget: no return value and no delivery guarantee beyond
/// best-effort rendering.
pub trait Notifier: Send + Sync {
    fn display(&self, notification: Notification);
}

pub type NotifierBox = Box<dyn Notifier>;
