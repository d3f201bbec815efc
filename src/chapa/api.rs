use axum::{Json, extract::State, routing::post};
use reqwest::StatusCode;
use tracing::instrument;

use crate::{
    chapa::{self, PaymentProvider, mask},
    state::AppState,
    store::{PaymentStatus, StatusStore},
};

/// Chapa notifies this endpoint when a checkout attempt completes. The body
/// is untrusted input: whatever it claims, the outcome is re-queried from
/// the gateway before anything is recorded. An unverifiable payment is
/// recorded as failed.
#[instrument(skip_all)]
async fn callback_handler(
    State(AppState {
        provider, store, ..
    }): State<AppState>,
    axum::Json(callback): Json<serde_json::Value>,
) -> (StatusCode, &'static str) {
    tracing::trace!(
        data = %mask::secure_value(&callback),
        "Received callback from external gateway"
    );
    let Ok(callback) = serde_json::from_value::<chapa::callback::CallbackPayload>(callback) else {
        tracing::warn!("Failed to deserialize callback body");
        return (StatusCode::BAD_REQUEST, "Invalid callback payload");
    };
    tracing::info!(
        tx_ref = %callback.tx_ref,
        reported_status = callback.status.as_deref().unwrap_or("<none>"),
        "Gateway callback received"
    );

    match provider.verify(&callback.tx_ref).await {
        Ok(verification) if verification.is_paid() => {
            store.set(&callback.tx_ref, PaymentStatus::Success);
            tracing::info!(tx_ref = %callback.tx_ref, "Payment verified");
            (StatusCode::OK, "Payment successfully verified!")
        }
        Ok(verification) => {
            tracing::warn!(
                tx_ref = %callback.tx_ref,
                status = ?verification.payment_status,
                "Payment verification did not confirm success"
            );
            store.set(&callback.tx_ref, PaymentStatus::Failed);
            (StatusCode::BAD_REQUEST, "Payment verification failed!")
        }
        Err(e) => {
            tracing::error!("Failed to verify transaction: {e}");
            store.set(&callback.tx_ref, PaymentStatus::Failed);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error verifying transaction")
        }
    }
}

pub fn router() -> axum::Router<crate::state::AppState> {
    axum::Router::new().route("/callback", post(callback_handler))
}
