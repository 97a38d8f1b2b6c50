//! Credit adjustment display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::CreditAdjustResponse;

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct CreditResultDisplay {
    #[tabled(rename = "RECRUITER ID")]
    pub recruiter_id: i64,

    #[tabled(rename = "NEW BALANCE")]
    pub new_balance: i64,

    #[tabled(rename = "MESSAGE")]
    pub message: String,
}

impl From<CreditAdjustResponse> for CreditResultDisplay {
    fn from(response: CreditAdjustResponse) -> Self {
        Self {
            recruiter_id: response.recruiter_id,
            new_balance: response.new_balance,
            message: response.message,
        }
    }
}
