use crate::domain::account::{Account, AccountId};
use crate::domain::payment::{NewPayment, Payment};
use crate::domain::ports::PaymentApi;
use crate::error::{PaymentError, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};

/// HTTP/JSON adapter for a remote payment service.
///
/// Routes:
/// - `GET  {base}/accounts`
/// - `GET  {base}/accounts/{id}/payments`
/// - `POST {base}/payments`
///
/// No explicit timeout is configured; the client's defaults govern.
#[derive(Clone)]
pub struct HttpPaymentApi {
    client: Client,
    base_url: String,
}

impl HttpPaymentApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    fn unexpected_status(url: &str, status: StatusCode) -> PaymentError {
        PaymentError::ServiceError(format!("{url} returned {status}"))
    }
}

#[async_trait]
impl PaymentApi for HttpPaymentApi {
    async fn list_accounts(&self) -> Result<Vec<Account>> {
        let url = format!("{}/accounts", self.base_url);
        let response = self.client.get(&url).send().await?;

        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            Err(Self::unexpected_status(&url, response.status()))
        }
    }

    async fn list_payments_by_account(&self, account_id: &AccountId) -> Result<Vec<Payment>> {
        let url = format!("{}/accounts/{}/payments", self.base_url, account_id);
        let response = self.client.get(&url).send().await?;

        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            Err(Self::unexpected_status(&url, response.status()))
        }
    }

    async fn create_payment(&self, payment: NewPayment) -> Result<Option<Payment>> {
        let url = format!("{}/payments", self.base_url);
        let response = self.client.post(&url).json(&payment).send().await?;

        if response.status() == StatusCode::NO_CONTENT {
            Ok(None)
        } else if response.status().is_success() {
            Ok(Some(response.json().await?))
        } else {
            Err(Self::unexpected_status(&url, response.status()))
        }
    }
}
