//! Credit administration API trait

use async_trait::async_trait;

use crate::client::models::{CreditAdjustRequest, CreditAdjustResponse};
use crate::error::Result;

/// Credit operations
#[async_trait]
pub trait CreditApi: Send + Sync {
    /// Add or subtract credits (`POST /credits/adjust/`).
    ///
    /// The server enforces that balances never go negative and reports the
    /// resulting balance; callers must use `new_balance` rather than their own
    /// arithmetic.
    async fn adjust_credits(&self, request: &CreditAdjustRequest) -> Result<CreditAdjustResponse>;
}
