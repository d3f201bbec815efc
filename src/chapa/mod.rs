use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    chapa::error::{ErrorResponse, GatewayError},
    checkout::api::CheckoutRequest,
    config::Config,
};

pub mod api;
/// External gateway callback payload
mod callback;
mod error;
/// Type conversions between the checkout API and the Chapa wire format
mod from;
/// Buyer PII masking for logged payloads
pub mod mask;
mod payin;
/// External gateway verification response
mod verify;

pub use payin::InitializeData;
pub use verify::VerifyData;

pub type Result<T> = std::result::Result<T, GatewayError>;

#[derive(Debug, serde::Deserialize, serde::Serialize)]
pub struct ChapaOkResponse<T> {
    pub message: String,
    pub status: String,
    pub data: T,
}

#[derive(Debug, serde::Deserialize)]
pub enum ChapaResponse<T> {
    #[serde(untagged)]
    Ok(ChapaOkResponse<T>),
    #[serde(untagged)]
    Err(ErrorResponse),
}

impl<T> ChapaResponse<T> {
    pub fn into_std_result(self) -> std::result::Result<ChapaOkResponse<T>, ErrorResponse> {
        match self {
            ChapaResponse::Ok(ok) => Ok(ok),
            ChapaResponse::Err(e) => Err(e),
        }
    }
}

/// Payment state reported by Chapa's verification endpoint.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChapaPaymentStatus {
    Failed,
    #[default]
    Pending,
    Success,
}

/// The two gateway operations the relay consumes.
///
/// The checkout and callback handlers only ever talk to this trait, so the
/// real [ChapaGateway] can be swapped for a scripted double in tests.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Register a checkout attempt with the gateway and obtain the hosted
    /// checkout URL the buyer is sent to.
    async fn initialize(
        &self,
        checkout: &CheckoutRequest,
        tx_ref: &str,
    ) -> Result<payin::InitializeData>;

    /// Ask the gateway for the authoritative outcome of a transaction.
    async fn verify(&self, tx_ref: &str) -> Result<verify::VerifyData>;
}

#[derive(Debug, Clone)]
pub struct ChapaGateway {
    client: reqwest::Client,
    config: Arc<Config>,
}

impl ChapaGateway {
    pub fn new(config: Arc<Config>) -> Self {
        let client = reqwest::Client::new();
        Self { client, config }
    }
}

#[async_trait]
impl PaymentProvider for ChapaGateway {
    async fn initialize(
        &self,
        checkout: &CheckoutRequest,
        tx_ref: &str,
    ) -> Result<payin::InitializeData> {
        let request = payin::InitializeRequest::from_checkout(checkout, &self.config, tx_ref);
        let secured_request = mask::secure_serializable(&request);
        let url = format!("{}/transaction/initialize", self.config.api_url);
        tracing::debug!(%url, data = %secured_request, "Gateway API transaction initialize request");
        let res = self
            .client
            .post(&url)
            .bearer_auth(&self.config.secret_key)
            .json(&request)
            .send()
            .await?;
        let status = res.status();

        let response = res.json::<serde_json::Value>().await?;
        let secured_response = mask::secure_value(&response);
        tracing::debug!(
            data = %secured_response,
            %status,
            "Gateway API transaction initialize response"
        );
        let res: ChapaResponse<_> = serde_json::from_value(response)?;
        Ok(res.into_std_result()?.data)
    }

    async fn verify(&self, tx_ref: &str) -> Result<verify::VerifyData> {
        let url = format!("{}/transaction/verify/{}", self.config.api_url, tx_ref);
        tracing::debug!(%url, "Gateway API transaction verify request");
        let response = self
            .client
            .get(url)
            .bearer_auth(&self.config.secret_key)
            .send()
            .await?;
        let status = response.status();
        let response = response.json::<serde_json::Value>().await?;
        let secured_response = mask::secure_value(&response);
        tracing::debug!(data = %secured_response, %status, "Gateway API transaction verify response");
        let res: ChapaResponse<_> = serde_json::from_value(response)?;
        Ok(res.into_std_result()?.data)
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;

    /// Scripted gateway double for exercising handlers without network I/O.
    pub struct ScriptedGateway {
        verify_outcome: Option<ChapaPaymentStatus>,
        reject_initialize: bool,
    }

    impl ScriptedGateway {
        pub fn verifying(status: ChapaPaymentStatus) -> Self {
            Self {
                verify_outcome: Some(status),
                reject_initialize: false,
            }
        }

        /// Every verification call errors, as if the gateway were unreachable.
        pub fn erroring() -> Self {
            Self {
                verify_outcome: None,
                reject_initialize: false,
            }
        }

        pub fn rejecting_initialize() -> Self {
            Self {
                verify_outcome: Some(ChapaPaymentStatus::Pending),
                reject_initialize: true,
            }
        }
    }

    #[async_trait]
    impl PaymentProvider for ScriptedGateway {
        async fn initialize(
            &self,
            _checkout: &CheckoutRequest,
            _tx_ref: &str,
        ) -> Result<payin::InitializeData> {
            if self.reject_initialize {
                return Err(GatewayError::Rejected(ErrorResponse {
                    message: "Invalid API Key".into(),
                    status: "failed".to_string(),
                }));
            }
            Ok(payin::InitializeData {
                checkout_url: "https://checkout.chapa.co/checkout/payment/test".to_string(),
            })
        }

        async fn verify(&self, tx_ref: &str) -> Result<verify::VerifyData> {
            match self.verify_outcome {
                Some(payment_status) => Ok(verify::VerifyData {
                    tx_ref: Some(tx_ref.to_string()),
                    amount: None,
                    currency: None,
                    payment_status,
                }),
                None => {
                    use serde::de::Error;
                    Err(GatewayError::Decode(serde_json::Error::custom(
                        "connection reset by peer",
                    )))
                }
            }
        }
    }
}
