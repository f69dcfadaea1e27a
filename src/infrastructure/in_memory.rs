use crate::domain::account::{Account, AccountId};
use crate::domain::notification::Notification;
use crate::domain::payment::{NewPayment, Payment};
use crate::domain::ports::{Notifier, PaymentApi};
use crate::error::{PaymentError, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tokio::sync::RwLock;

/// A thread-safe in-memory implementation of the payment service.
///
/// Holds accounts and payments in plain vectors so listing preserves
/// insertion order. Ideal for tests and for running the CLI without a
/// remote backend.
#[derive(Default, Clone)]
pub struct InMemoryPaymentApi {
    inner: Arc<RwLock<Inner>>,
}

#[derive(Default)]
struct Inner {
    accounts: Vec<Account>,
    payments: Vec<Payment>,
    next_payment_id: u64,
}

impl InMemoryPaymentApi {
    /// Creates a new, empty in-memory service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a service pre-populated with accounts and payments.
    pub fn seeded(accounts: Vec<Account>, payments: Vec<Payment>) -> Self {
        let next_payment_id = payments.len() as u64 + 1;
        Self {
            inner: Arc::new(RwLock::new(Inner {
                accounts,
                payments,
                next_payment_id,
            })),
        }
    }
}

#[async_trait]
impl PaymentApi for InMemoryPaymentApi {
    async fn list_accounts(&self) -> Result<Vec<Account>> {
        let inner = self.inner.read().await;
        Ok(inner.accounts.clone())
    }

    async fn list_payments_by_account(&self, account_id: &AccountId) -> Result<Vec<Payment>> {
        let inner = self.inner.read().await;
        Ok(inner
            .payments
            .iter()
            .filter(|p| &p.account_id == account_id)
            .cloned()
            .collect())
    }

    async fn create_payment(&self, payment: NewPayment) -> Result<Option<Payment>> {
        let mut inner = self.inner.write().await;

        if !inner.accounts.iter().any(|a| a.id == payment.account_id) {
            return Err(PaymentError::ValidationError(format!(
                "unknown account: {}",
                payment.account_id
            )));
        }
        let payment_type = payment.payment_type.ok_or_else(|| {
            PaymentError::ValidationError("payment type is required".to_string())
        })?;
        let due_date = payment
            .due_date
            .ok_or_else(|| PaymentError::ValidationError("due date is required".to_string()))?;

        let id = format!("P-{:04}", inner.next_payment_id);
        inner.next_payment_id += 1;

        let created = Payment {
            id,
            account_id: payment.account_id,
            payment_type,
            amount: payment.amount,
            due_date,
            notes: payment.notes,
        };
        inner.payments.push(created.clone());
        Ok(Some(created))
    }
}

/// Recording notifier that keeps every displayed notification in memory.
///
/// Clones share the same buffer, so a test can hold one handle while the
/// component owns the other.
#[derive(Default, Clone)]
pub struct MemoryNotifier {
    notifications: Arc<Mutex<Vec<Notification>>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything displayed so far, in order.
    pub fn snapshot(&self) -> Vec<Notification> {
        self.notifications
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Drains and returns the recorded notifications.
    pub fn take(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.notifications.lock().unwrap_or_else(|e| e.into_inner()))
    }
}

impl Notifier for MemoryNotifier {
    fn display(&self, notification: Notification) {
        self.notifications
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(notification);
    }
}
