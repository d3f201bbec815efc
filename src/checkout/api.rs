use axum::{
    Json,
    extract::{Path, State},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{
    chapa::{PaymentProvider, mask},
    checkout::{InitiateErrorResponse, Result},
    state::AppState,
    store::{PaymentStatus, StatusStore},
};

fn default_currency() -> String {
    "ETB".to_string()
}

/// Buyer details collected by the checkout form. Fields are only required
/// to be present; the gateway does the real validation.
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub amount: f64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    #[serde(default = "default_currency")]
    pub currency: String,
}

#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    pub status: &'static str,
    pub checkout_url: String,
    pub tx_ref: String,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub tx_ref: String,
    pub status: PaymentStatus,
}

/// Start a checkout attempt: mint a reference, register it with the gateway
/// and hand the hosted checkout URL back to the client. Repeated calls with
/// identical input are independent attempts.
#[instrument(skip_all)]
pub async fn checkout(
    State(AppState {
        provider,
        store,
        tx_refs,
    }): State<AppState>,
    Json(request): Json<CheckoutRequest>,
) -> Result<Json<CheckoutResponse>> {
    tracing::debug!(data = %mask::secure_serializable(&request), "Checkout request");
    let tx_ref = tx_refs.next();
    match provider.initialize(&request, &tx_ref).await {
        Ok(init) => {
            store.set(&tx_ref, PaymentStatus::Pending);
            tracing::info!(%tx_ref, "Created checkout");
            Ok(Json(CheckoutResponse {
                status: "success",
                checkout_url: init.checkout_url,
                tx_ref,
            }))
        }
        Err(e) => {
            tracing::error!("Failed to initiate payment: {e}");
            Err(InitiateErrorResponse::new())
        }
    }
}

/// Current status of a checkout attempt. Unknown references read as
/// pending, which covers both the pre-callback window and references from
/// before a restart.
#[instrument(skip_all)]
pub async fn payment_status(
    State(AppState { store, .. }): State<AppState>,
    Path(tx_ref): Path<String>,
) -> Json<StatusResponse> {
    let status = store.get(&tx_ref).unwrap_or_default();
    Json(StatusResponse { tx_ref, status })
}

pub fn router() -> axum::Router<crate::state::AppState> {
    axum::Router::new()
        .route("/api/checkout", post(checkout))
        .route("/api/payment-status/{tx_ref}", get(payment_status))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{Json, extract::Path, extract::State};

    use crate::{
        chapa::{ChapaPaymentStatus, testing::ScriptedGateway},
        state::AppState,
        store::{MemoryStatusStore, PaymentStatus, StatusStore},
    };

    use super::CheckoutRequest;

    fn request() -> CheckoutRequest {
        CheckoutRequest {
            amount: 100.0,
            email: "a@b.com".to_string(),
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            phone_number: "0911000000".to_string(),
            currency: "ETB".to_string(),
        }
    }

    #[tokio::test]
    async fn checkout_records_pending_and_returns_reference() {
        let state = AppState::new(
            Arc::new(ScriptedGateway::verifying(ChapaPaymentStatus::Pending)),
            Arc::new(MemoryStatusStore::default()),
        );
        let Json(res) = super::checkout(State(state.clone()), Json(request()))
            .await
            .unwrap();
        assert_eq!(res.status, "success");
        assert!(res.tx_ref.starts_with("tx-"));
        assert_eq!(
            res.checkout_url,
            "https://checkout.chapa.co/checkout/payment/test"
        );
        assert_eq!(state.store.get(&res.tx_ref), Some(PaymentStatus::Pending));

        let Json(poll) =
            super::payment_status(State(state), Path(res.tx_ref.clone())).await;
        assert_eq!(poll.tx_ref, res.tx_ref);
        assert_eq!(poll.status, PaymentStatus::Pending);
    }

    #[tokio::test]
    async fn repeated_checkouts_get_independent_references() {
        let state = AppState::new(
            Arc::new(ScriptedGateway::verifying(ChapaPaymentStatus::Pending)),
            Arc::new(MemoryStatusStore::default()),
        );
        let Json(first) = super::checkout(State(state.clone()), Json(request()))
            .await
            .unwrap();
        let Json(second) = super::checkout(State(state), Json(request()))
            .await
            .unwrap();
        assert_ne!(first.tx_ref, second.tx_ref);
    }

    #[tokio::test]
    async fn failed_initiation_leaves_no_status_entry() {
        let store = Arc::new(MemoryStatusStore::default());
        let state = AppState::new(
            Arc::new(ScriptedGateway::rejecting_initialize()),
            store.clone(),
        );
        let res = super::checkout(State(state), Json(request())).await;
        assert!(res.is_err());
        assert_eq!(store.len(), 0);
    }

    #[tokio::test]
    async fn unknown_reference_polls_as_pending() {
        let state = AppState::new(
            Arc::new(ScriptedGateway::verifying(ChapaPaymentStatus::Pending)),
            Arc::new(MemoryStatusStore::default()),
        );
        let Json(poll) =
            super::payment_status(State(state), Path("tx-never-seen".to_string())).await;
        assert_eq!(poll.status, PaymentStatus::Pending);
    }

    #[tokio::test]
    async fn currency_defaults_to_etb() {
        let body = serde_json::json!({
            "amount": 100,
            "email": "a@b.com",
            "first_name": "A",
            "last_name": "B",
            "phone_number": "0911000000"
        });
        let request: CheckoutRequest = serde_json::from_value(body).unwrap();
        assert_eq!(request.currency, "ETB");
    }
}
