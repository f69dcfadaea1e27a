use super::account::{AccountId, SelectOption};
use crate::error::PaymentError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of a payment record.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum PaymentType {
    Service,
    Product,
    Other,
}

impl PaymentType {
    pub const ALL: [PaymentType; 3] = [Self::Service, Self::Product, Self::Other];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Service => "Service",
            Self::Product => "Product",
            Self::Other => "Other",
        }
    }

    /// The fixed option list offered by the payment-type selector.
    pub fn options() -> Vec<SelectOption> {
        Self::ALL
            .iter()
            .map(|t| SelectOption {
                label: t.label().to_string(),
                value: t.label().to_string(),
            })
            .collect()
    }
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PaymentType {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "service" => Ok(Self::Service),
            "product" => Ok(Self::Product),
            "other" => Ok(Self::Other),
            other => Err(PaymentError::ValidationError(format!(
                "unknown payment type: {other}"
            ))),
        }
    }
}

/// A financial obligation record linked to one account.
///
/// Created server-side; the client only ever holds a read-only copy, and the
/// list for the selected account is fully replaced on every load.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Payment {
    pub id: String,
    pub account_id: AccountId,
    #[serde(rename = "type")]
    pub payment_type: PaymentType,
    pub amount: Decimal,
    pub due_date: NaiveDate,
    pub notes: String,
}

/// The not-yet-submitted in-progress payment form state.
///
/// Mutated field-by-field by user input and reset to defaults after a
/// successful submission. `None` stands in for the form's "empty" type and
/// date fields.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct DraftPayment {
    pub payment_type: Option<PaymentType>,
    pub amount: Decimal,
    pub due_date: Option<NaiveDate>,
    pub notes: String,
}

impl DraftPayment {
    /// Builds the submission payload: the draft fields plus the selected
    /// account identifier as foreign key.
    pub fn into_submission(self, account_id: AccountId) -> NewPayment {
        NewPayment {
            account_id,
            payment_type: self.payment_type,
            amount: self.amount,
            due_date: self.due_date,
            notes: self.notes,
        }
    }
}

/// Creation request sent to the service. Type and date may be absent when
/// the form was submitted with those fields empty; the server decides
/// whether to accept that.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct NewPayment {
    pub account_id: AccountId,
    #[serde(rename = "type")]
    pub payment_type: Option<PaymentType>,
    pub amount: Decimal,
    pub due_date: Option<NaiveDate>,
    pub notes: String,
}
