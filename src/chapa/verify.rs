use serde::{Deserialize, Serialize};

use crate::chapa::ChapaPaymentStatus;

/// Transaction details returned by `GET /transaction/verify/{tx_ref}`.
///
/// The response carries the full buyer and amount breakdown; only the fields
/// the relay inspects or logs are modeled here.
#[derive(Debug, Serialize, Deserialize)]
pub struct VerifyData {
    #[serde(default)]
    pub tx_ref: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub payment_status: ChapaPaymentStatus,
}

impl VerifyData {
    /// Only an explicit SUCCESS from the verification endpoint proves
    /// payment.
    pub fn is_paid(&self) -> bool {
        self.payment_status == ChapaPaymentStatus::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_label_proves_payment() {
        let data: VerifyData = serde_json::from_value(serde_json::json!({
            "tx_ref": "tx-1",
            "amount": 100.0,
            "currency": "ETB",
            "payment_status": "SUCCESS"
        }))
        .unwrap();
        assert!(data.is_paid());
    }

    #[test]
    fn missing_payment_status_does_not_prove_payment() {
        let data: VerifyData = serde_json::from_value(serde_json::json!({
            "tx_ref": "tx-1"
        }))
        .unwrap();
        assert_eq!(data.payment_status, ChapaPaymentStatus::Pending);
        assert!(!data.is_paid());
    }
}
