use dashmap::DashMap;
use serde::{Deserialize, Serialize};

/// Status of one checkout attempt as seen by the polling client.
///
/// `Success` and `Failed` are terminal. References the store has never seen
/// poll as `Pending`, which also covers the window between initiation and
/// callback arrival.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Success,
    Failed,
}

impl PaymentStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Success | Self::Failed)
    }
}

/// Keyed status storage shared by the checkout, callback and polling
/// handlers. Injected so request handling stays independent of the backing
/// store.
pub trait StatusStore: Send + Sync {
    fn get(&self, tx_ref: &str) -> Option<PaymentStatus>;
    fn set(&self, tx_ref: &str, status: PaymentStatus);
}

/// Process-local store. No persistence, no eviction.
#[derive(Debug, Default)]
pub struct MemoryStatusStore {
    entries: DashMap<String, PaymentStatus>,
}

#[cfg(test)]
impl MemoryStatusStore {
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl StatusStore for MemoryStatusStore {
    fn get(&self, tx_ref: &str) -> Option<PaymentStatus> {
        self.entries.get(tx_ref).map(|entry| *entry)
    }

    fn set(&self, tx_ref: &str, status: PaymentStatus) {
        use dashmap::mapref::entry::Entry;
        match self.entries.entry(tx_ref.to_string()) {
            Entry::Occupied(mut entry) => {
                // Terminal entries never regress to pending. Terminal
                // overwrites stay last-write-wins.
                if entry.get().is_terminal() && !status.is_terminal() {
                    tracing::warn!(
                        %tx_ref,
                        current = ?entry.get(),
                        "Refusing to downgrade terminal payment status"
                    );
                    return;
                }
                entry.insert(status);
            }
            Entry::Vacant(entry) => {
                entry.insert(status);
            }
        }
    }
}
