use super::state::TrackedField;
use crate::domain::account::{Account, AccountId, SelectOption};
use crate::domain::notification::Notification;
use crate::domain::payment::{DraftPayment, Payment, PaymentType};
use crate::domain::ports::{NotifierBox, PaymentApiBox};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::sync::atomic::{AtomicU64, Ordering};

/// The account/payment desk component.
///
/// Composes three responsibilities linearly: load the account list once at
/// mount, load payments whenever the selection changes, and create a new
/// payment against the selected account followed by a list refresh.
///
/// All failures are recovered here: each surfaces as a fixed notification
/// through the [`Notifier`](crate::domain::ports::Notifier) port while the
/// technical detail goes to the log. No failure is fatal; the component
/// stays interactive after any of them.
///
/// Lifecycle contract: construct with [`AccountPayments::new`], then have the
/// host call [`AccountPayments::on_ready`] exactly once when the component is
/// mounted.
pub struct AccountPayments {
    api: PaymentApiBox,
    notifier: NotifierBox,
    accounts: TrackedField<Vec<Account>>,
    account_options: TrackedField<Vec<SelectOption>>,
    payments: TrackedField<Vec<Payment>>,
    selected_account: TrackedField<Option<AccountId>>,
    draft: TrackedField<DraftPayment>,
    load_generation: AtomicU64,
}

impl AccountPayments {
    pub fn new(api: PaymentApiBox, notifier: NotifierBox) -> Self {
        Self {
            api,
            notifier,
            accounts: TrackedField::default(),
            account_options: TrackedField::default(),
            payments: TrackedField::default(),
            selected_account: TrackedField::default(),
            draft: TrackedField::default(),
            load_generation: AtomicU64::new(0),
        }
    }

    /// Lifecycle hook: invoked once by the host when the component is ready.
    pub async fn on_ready(&self) {
        self.load_accounts().await;
    }

    async fn load_accounts(&self) {
        match self.api.list_accounts().await {
            Ok(accounts) => {
                let options = accounts.iter().map(Account::to_option).collect();
                self.accounts.set(accounts);
                self.account_options.set(options);
            }
            Err(err) => {
                tracing::error!(error = %err, "account load failed");
                self.notifier
                    .display(Notification::error("Error", "Unable to load accounts"));
            }
        }
    }

    /// Changes the account selection and reloads the payment list.
    ///
    /// An empty selection clears the list synchronously without touching the
    /// service.
    pub async fn select_account(&self, account_id: Option<AccountId>) {
        self.selected_account.set(account_id.clone());
        match account_id {
            Some(id) => self.load_payments(&id).await,
            None => {
                // Invalidate any in-flight load so it cannot repopulate the
                // cleared list.
                self.load_generation.fetch_add(1, Ordering::SeqCst);
                self.payments.set(Vec::new());
            }
        }
    }

    /// Fetches payments for `account_id` and replaces the displayed list.
    ///
    /// Each load captures a generation token at dispatch. A response that is
    /// no longer the latest is discarded entirely, so rapid selection
    /// switching cannot let a stale response overwrite newer data. On
    /// failure the previous list stays in place.
    async fn load_payments(&self, account_id: &AccountId) {
        let generation = self.load_generation.fetch_add(1, Ordering::SeqCst) + 1;
        let result = self.api.list_payments_by_account(account_id).await;
        if self.load_generation.load(Ordering::SeqCst) != generation {
            tracing::debug!(account = %account_id, "discarding stale payment load");
            return;
        }
        match result {
            Ok(payments) => self.payments.set(payments),
            Err(err) => {
                tracing::error!(error = %err, account = %account_id, "payment load failed");
                self.notifier
                    .display(Notification::error("Error", "Unable to load payments"));
            }
        }
    }

    /// Submits the current draft against the selected account.
    ///
    /// On success the list is refreshed through the regular payment load
    /// path (whose own failure handling applies) and the draft resets to
    /// defaults regardless of the refresh outcome. On failure the draft is
    /// left untouched.
    pub async fn create_payment(&self) {
        let Some(account_id) = self.selected_account.get() else {
            self.notifier
                .display(Notification::error("Error", "Please select an account first"));
            return;
        };

        let payload = self.draft.get().into_submission(account_id.clone());
        match self.api.create_payment(payload).await {
            Ok(_) => {
                self.notifier
                    .display(Notification::success("Success", "Payment created successfully"));
                self.load_payments(&account_id).await;
                self.draft.set(DraftPayment::default());
            }
            Err(err) => {
                tracing::error!(error = %err, "payment creation failed");
                self.notifier
                    .display(Notification::error("Error", "Error creating payment"));
            }
        }
    }

    // Draft form input handlers.

    pub fn set_payment_type(&self, value: Option<PaymentType>) {
        self.draft.update(|d| d.payment_type = value);
    }

    pub fn set_amount(&self, value: Decimal) {
        self.draft.update(|d| d.amount = value);
    }

    pub fn set_due_date(&self, value: Option<NaiveDate>) {
        self.draft.update(|d| d.due_date = value);
    }

    pub fn set_notes(&self, value: impl Into<String>) {
        let notes = value.into();
        self.draft.update(|d| d.notes = notes);
    }

    // Observable state exposed to the host.

    pub fn accounts(&self) -> &TrackedField<Vec<Account>> {
        &self.accounts
    }

    pub fn account_options(&self) -> &TrackedField<Vec<SelectOption>> {
        &self.account_options
    }

    pub fn payments(&self) -> &TrackedField<Vec<Payment>> {
        &self.payments
    }

    pub fn selected_account(&self) -> &TrackedField<Option<AccountId>> {
        &self.selected_account
    }

    pub fn draft(&self) -> &TrackedField<DraftPayment> {
        &self.draft
    }

    /// The fixed payment-type option list offered by the form.
    pub fn payment_type_options(&self) -> Vec<SelectOption> {
        PaymentType::options()
    }
}
