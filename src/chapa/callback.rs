/// Notification Chapa posts to the callback URL after a checkout attempt.
///
/// Only `tx_ref` is load-bearing. The self-reported fields are logged for
/// observability and otherwise ignored; the verification endpoint decides
/// the stored outcome.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct CallbackPayload {
    pub tx_ref: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}
