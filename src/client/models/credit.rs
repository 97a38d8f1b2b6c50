//! Credit adjustment models

use serde::{Deserialize, Serialize};

/// Body for `POST /credits/adjust/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditAdjustRequest {
    /// Target user
    pub recruiter_id: i64,

    /// Signed amount; negative subtracts
    pub amount: i64,

    /// Audit justification
    pub notes: String,
}

/// Server acknowledgement of a credit adjustment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditAdjustResponse {
    #[serde(default)]
    pub message: String,

    pub recruiter_id: i64,

    /// Authoritative balance after the adjustment
    pub new_balance: i64,
}
