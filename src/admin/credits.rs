//! Credit adjustment form
//!
//! Validation happens entirely client-side; an invalid form never reaches
//! the network.

use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::client::api::CreditApi;
use crate::client::models::{CreditAdjustRequest, CreditAdjustResponse};
use crate::error::{ApiError, Error, Result, ValidationError};

/// Maximum length of the audit note
pub const MAX_NOTES_LEN: usize = 500;

/// Direction of a credit adjustment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreditOperation {
    #[default]
    Add,
    Subtract,
}

impl CreditOperation {
    /// Apply the direction to a positive magnitude
    pub fn signed(self, magnitude: i64) -> i64 {
        match self {
            CreditOperation::Add => magnitude,
            CreditOperation::Subtract => -magnitude,
        }
    }
}

impl fmt::Display for CreditOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreditOperation::Add => write!(f, "add"),
            CreditOperation::Subtract => write!(f, "subtract"),
        }
    }
}

impl FromStr for CreditOperation {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "add" | "+" => Ok(CreditOperation::Add),
            "subtract" | "sub" | "-" => Ok(CreditOperation::Subtract),
            other => Err(format!("Unknown operation '{}': use add or subtract", other)),
        }
    }
}

/// Raw credit form input, as typed by the operator
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreditForm {
    pub recruiter_id: String,
    /// Unsigned magnitude as entered
    pub amount: String,
    pub operation: CreditOperation,
    pub notes: String,
}

impl CreditForm {
    pub fn new(
        recruiter_id: impl Into<String>,
        amount: impl Into<String>,
        operation: CreditOperation,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            recruiter_id: recruiter_id.into(),
            amount: amount.into(),
            operation,
            notes: notes.into(),
        }
    }

    /// Validate the form and build the request with a signed amount.
    pub fn validate(&self) -> std::result::Result<CreditAdjustRequest, ValidationError> {
        let recruiter_id = self.recruiter_id.trim();
        let amount = self.amount.trim();
        let notes = self.notes.trim();

        if recruiter_id.is_empty() {
            return Err(ValidationError::Required("Recruiter ID"));
        }
        if amount.is_empty() {
            return Err(ValidationError::Required("Amount"));
        }
        if notes.is_empty() {
            return Err(ValidationError::Required("Notes"));
        }

        let recruiter_id: i64 = recruiter_id
            .parse()
            .map_err(|_| ValidationError::InvalidId("Recruiter ID"))?;

        let magnitude: i64 = amount
            .parse()
            .map_err(|_| ValidationError::NonPositiveAmount)?;
        if magnitude <= 0 {
            return Err(ValidationError::NonPositiveAmount);
        }

        if notes.chars().count() > MAX_NOTES_LEN {
            return Err(ValidationError::TooLong {
                field: "Notes",
                max: MAX_NOTES_LEN,
            });
        }

        Ok(CreditAdjustRequest {
            recruiter_id,
            amount: self.operation.signed(magnitude),
            notes: notes.to_string(),
        })
    }
}

/// Validate and submit a credit form.
///
/// A server "not found" answer is restated with the entered recruiter ID.
pub async fn submit<A: CreditApi + ?Sized>(
    api: &A,
    form: &CreditForm,
) -> Result<CreditAdjustResponse> {
    let request = form.validate()?;
    debug!(
        "Adjusting credits for recruiter {} by {}",
        request.recruiter_id, request.amount
    );

    match api.adjust_credits(&request).await {
        Ok(response) => Ok(response),
        Err(Error::Api(e)) if e.is_user_not_found() => Err(ApiError::NotFound(format!(
            "User not found: {}",
            form.recruiter_id.trim()
        ))
        .into()),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures::UserBuilder;
    use crate::client::mock::MockSuperAdminClient;
    use crate::client::SuperAdminClient;
    use crate::error::GENERIC_REQUEST_FAILURE;

    #[test]
    fn test_subtract_signs_amount() {
        let form = CreditForm::new("42", "50", CreditOperation::Subtract, "Refund");
        let request = form.validate().unwrap();
        assert_eq!(request.recruiter_id, 42);
        assert_eq!(request.amount, -50);
        assert_eq!(request.notes, "Refund");
    }

    #[test]
    fn test_add_keeps_amount_positive() {
        let form = CreditForm::new("42", " 15 ", CreditOperation::Add, "Promo");
        assert_eq!(form.validate().unwrap().amount, 15);
    }

    #[test]
    fn test_zero_and_negative_amounts_rejected() {
        for amount in ["0", "-5", "abc", "2.5"] {
            let form = CreditForm::new("1", amount, CreditOperation::Add, "note");
            let err = form.validate().unwrap_err();
            assert_eq!(err, ValidationError::NonPositiveAmount);
            assert!(err.to_string().contains("must be a positive number"));
        }
    }

    #[test]
    fn test_empty_notes_required() {
        let form = CreditForm::new("1", "10", CreditOperation::Add, "   ");
        let err = form.validate().unwrap_err();
        assert_eq!(err, ValidationError::Required("Notes"));
        assert!(err.to_string().contains("required"));
    }

    #[test]
    fn test_empty_fields_required() {
        let form = CreditForm::new("", "10", CreditOperation::Add, "x");
        assert_eq!(
            form.validate().unwrap_err(),
            ValidationError::Required("Recruiter ID")
        );

        let form = CreditForm::new("1", "", CreditOperation::Add, "x");
        assert_eq!(form.validate().unwrap_err(), ValidationError::Required("Amount"));
    }

    #[test]
    fn test_notes_length_bound() {
        let ok = CreditForm::new("1", "1", CreditOperation::Add, "n".repeat(500));
        assert!(ok.validate().is_ok());

        let long = CreditForm::new("1", "1", CreditOperation::Add, "n".repeat(501));
        assert!(matches!(
            long.validate(),
            Err(ValidationError::TooLong { max: 500, .. })
        ));
    }

    #[test]
    fn test_non_numeric_recruiter_id() {
        let form = CreditForm::new("abc", "1", CreditOperation::Add, "x");
        assert_eq!(
            form.validate().unwrap_err(),
            ValidationError::InvalidId("Recruiter ID")
        );
    }

    #[test]
    fn test_operation_parse() {
        assert_eq!("Subtract".parse::<CreditOperation>().unwrap(), CreditOperation::Subtract);
        assert_eq!("add".parse::<CreditOperation>().unwrap(), CreditOperation::Add);
        assert!("multiply".parse::<CreditOperation>().is_err());
    }

    #[tokio::test]
    async fn test_invalid_form_issues_no_request() {
        let mock = MockSuperAdminClient::new()
            .with_users(vec![UserBuilder::new(1).credit_balance(100).build()])
            .await;

        let form = CreditForm::new("1", "0", CreditOperation::Add, "note");
        let result = submit(&mock, &form).await;

        assert!(matches!(result, Err(Error::Validation(_))));
        assert_eq!(mock.call_counts().await.total(), 0);
    }

    #[tokio::test]
    async fn test_submit_returns_server_balance() {
        let mock = MockSuperAdminClient::new()
            .with_users(vec![UserBuilder::new(1).credit_balance(100).build()])
            .await;

        let form = CreditForm::new("1", "30", CreditOperation::Add, "Bonus");
        let response = submit(&mock, &form).await.unwrap();

        assert_eq!(response.new_balance, 130);
        let sent = &mock.captured_requests().await[0];
        assert_eq!(sent.body.as_ref().unwrap()["amount"], 30);
    }

    #[tokio::test]
    async fn test_user_not_found_restates_entered_id() {
        let mock = MockSuperAdminClient::new();

        let form = CreditForm::new(" 404 ", "5", CreditOperation::Add, "Bonus");
        let err = submit(&mock, &form).await.unwrap_err();

        assert_eq!(err.user_message(), "User not found: 404");
    }

    #[tokio::test]
    async fn test_route_404_without_body_is_generic_failure() {
        let mut server = mockito::Server::new_async().await;
        let _adjust = server
            .mock("POST", "/api/superadmin/credits/adjust/")
            .with_status(404)
            .with_header("content-type", "text/html")
            .with_body("<html><h1>Not Found</h1></html>")
            .create_async()
            .await;
        let client = SuperAdminClient::new(server.url(), None).unwrap();

        let form = CreditForm::new("7", "5", CreditOperation::Add, "note");
        let err = submit(&client, &form).await.unwrap_err();

        assert!(matches!(err, Error::Api(ApiError::NotFound(_))));
        assert_eq!(err.user_message(), GENERIC_REQUEST_FAILURE);
    }

    #[tokio::test]
    async fn test_server_not_found_detail_restates_entered_id() {
        let mut server = mockito::Server::new_async().await;
        let _adjust = server
            .mock("POST", "/api/superadmin/credits/adjust/")
            .with_status(404)
            .with_header("content-type", "application/json")
            .with_body(r#"{"detail": "Recruiter not found."}"#)
            .create_async()
            .await;
        let client = SuperAdminClient::new(server.url(), None).unwrap();

        let form = CreditForm::new("7", "5", CreditOperation::Add, "note");
        let err = submit(&client, &form).await.unwrap_err();

        assert_eq!(err.user_message(), "User not found: 7");
    }

    #[tokio::test]
    async fn test_other_server_errors_pass_through() {
        let mock = MockSuperAdminClient::new()
            .with_users(vec![UserBuilder::new(1).credit_balance(10).build()])
            .await;

        let form = CreditForm::new("1", "50", CreditOperation::Subtract, "Chargeback");
        let err = submit(&mock, &form).await.unwrap_err();

        assert_eq!(err.user_message(), "Insufficient credit balance.");
    }
}
