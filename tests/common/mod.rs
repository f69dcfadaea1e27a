use async_trait::async_trait;
use chrono::NaiveDate;
use paydesk::application::component::AccountPayments;
use paydesk::domain::account::{Account, AccountId};
use paydesk::domain::payment::{NewPayment, Payment, PaymentType};
use paydesk::domain::ports::PaymentApi;
use paydesk::error::{PaymentError, Result};
use paydesk::infrastructure::in_memory::MemoryNotifier;
use rust_decimal_macros::dec;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

/// Programmable service double: every operation counts its calls and can be
/// switched into failure mode mid-test.
#[derive(Clone, Default)]
pub struct StubApi {
    inner: Arc<StubInner>,
}

#[derive(Default)]
struct StubInner {
    accounts: Mutex<Vec<Account>>,
    payments: Mutex<Vec<Payment>>,
    fail_accounts: AtomicBool,
    fail_payments: AtomicBool,
    fail_create: AtomicBool,
    account_calls: AtomicUsize,
    payment_calls: AtomicUsize,
    create_calls: AtomicUsize,
    created: AtomicUsize,
}

impl StubApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_accounts(self, accounts: Vec<Account>) -> Self {
        *self.inner.accounts.lock().unwrap() = accounts;
        self
    }

    pub fn with_payments(self, payments: Vec<Payment>) -> Self {
        *self.inner.payments.lock().unwrap() = payments;
        self
    }

    pub fn fail_accounts(&self, on: bool) {
        self.inner.fail_accounts.store(on, Ordering::SeqCst);
    }

    pub fn fail_payments(&self, on: bool) {
        self.inner.fail_payments.store(on, Ordering::SeqCst);
    }

    pub fn fail_create(&self, on: bool) {
        self.inner.fail_create.store(on, Ordering::SeqCst);
    }

    pub fn account_calls(&self) -> usize {
        self.inner.account_calls.load(Ordering::SeqCst)
    }

    pub fn payment_calls(&self) -> usize {
        self.inner.payment_calls.load(Ordering::SeqCst)
    }

    pub fn create_calls(&self) -> usize {
        self.inner.create_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PaymentApi for StubApi {
    async fn list_accounts(&self) -> Result<Vec<Account>> {
        self.inner.account_calls.fetch_add(1, Ordering::SeqCst);
        if self.inner.fail_accounts.load(Ordering::SeqCst) {
            return Err(PaymentError::ServiceError("stub: accounts unavailable".into()));
        }
        Ok(self.inner.accounts.lock().unwrap().clone())
    }

    async fn list_payments_by_account(&self, account_id: &AccountId) -> Result<Vec<Payment>> {
        self.inner.payment_calls.fetch_add(1, Ordering::SeqCst);
        if self.inner.fail_payments.load(Ordering::SeqCst) {
            return Err(PaymentError::ServiceError("stub: payments unavailable".into()));
        }
        Ok(self
            .inner
            .payments
            .lock()
            .unwrap()
            .iter()
            .filter(|p| &p.account_id == account_id)
            .cloned()
            .collect())
    }

    async fn create_payment(&self, payment: NewPayment) -> Result<Option<Payment>> {
        self.inner.create_calls.fetch_add(1, Ordering::SeqCst);
        if self.inner.fail_create.load(Ordering::SeqCst) {
            return Err(PaymentError::ServiceError("stub: create unavailable".into()));
        }
        let n = self.inner.created.fetch_add(1, Ordering::SeqCst) + 1;
        let created = Payment {
            id: format!("P-stub-{n:04}"),
            account_id: payment.account_id,
            payment_type: payment.payment_type.unwrap_or(PaymentType::Other),
            amount: payment.amount,
            due_date: payment
                .due_date
                .unwrap_or_else(|| NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()),
            notes: payment.notes,
        };
        self.inner.payments.lock().unwrap().push(created.clone());
        Ok(Some(created))
    }
}

pub fn account(id: &str, name: &str) -> Account {
    Account::new(id, name)
}

pub fn payment(id: &str, account_id: &str) -> Payment {
    Payment {
        id: id.to_string(),
        account_id: AccountId::new(account_id),
        payment_type: PaymentType::Service,
        amount: dec!(150.00),
        due_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
        notes: "Monthly retainer".to_string(),
    }
}

pub fn harness(api: StubApi) -> (AccountPayments, MemoryNotifier) {
    let notifier = MemoryNotifier::new();
    let component = AccountPayments::new(Box::new(api), Box::new(notifier.clone()));
    (component, notifier)
}
