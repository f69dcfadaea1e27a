use crate::domain::account::SelectOption;
use crate::domain::payment::Payment;
use crate::error::Result;
use std::io::Write;

/// Writes workflow output as CSV.
///
/// Used by the CLI to print the derived selector options and the payment
/// list of the selected account on stdout.
pub struct ReportWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(target: W) -> Self {
        Self {
            writer: csv::WriterBuilder::new().from_writer(target),
        }
    }

    /// Writes a `label,value` row per option.
    pub fn write_options(&mut self, options: &[SelectOption]) -> Result<()> {
        for option in options {
            self.writer.serialize(option)?;
        }
        self.writer.flush()?;
        Ok(())
    }

    /// Writes one row per payment record.
    pub fn write_payments(&mut self, payments: &[Payment]) -> Result<()> {
        for payment in payments {
            self.writer.serialize(payment)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::account::AccountId;
    use crate::domain::payment::PaymentType;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    #[test]
    fn test_write_options() {
        let options = vec![
            SelectOption {
                label: "Acme Corp".to_string(),
                value: "ACC-001".to_string(),
            },
            SelectOption {
                label: "Globex".to_string(),
                value: "ACC-002".to_string(),
            },
        ];

        let mut out = Vec::new();
        ReportWriter::new(&mut out).write_options(&options).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("label,value\n"));
        assert!(text.contains("Acme Corp,ACC-001"));
        assert!(text.contains("Globex,ACC-002"));
    }

    #[test]
    fn test_write_payments() {
        let payments = vec![Payment {
            id: "P-0001".to_string(),
            account_id: AccountId::new("ACC-001"),
            payment_type: PaymentType::Service,
            amount: dec!(150.00),
            due_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            notes: "Monthly retainer".to_string(),
        }];

        let mut out = Vec::new();
        ReportWriter::new(&mut out).write_payments(&payments).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("id,account_id,type,amount,due_date,notes\n"));
        assert!(text.contains("P-0001,ACC-001,service,150.00,2026-09-01,Monthly retainer"));
    }

    #[test]
    fn test_empty_list_writes_nothing() {
        let mut out = Vec::new();
        ReportWriter::new(&mut out).write_payments(&[]).unwrap();
        assert!(out.is_empty());
    }
}
