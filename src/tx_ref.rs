/// Allocates transaction references for checkout attempts.
///
/// References are random rather than time-based so bursts and process
/// restarts cannot collide. The `tx-` prefix marks relay-issued references
/// in gateway dashboards.
#[derive(Debug, Clone, Copy, Default)]
pub struct TxRefGenerator;

impl TxRefGenerator {
    pub fn next(&self) -> String {
        format!("tx-{}", uuid::Uuid::new_v4())
    }
}
