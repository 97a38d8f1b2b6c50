//! Users management view

use log::debug;

use super::credits::{self, CreditForm};
use super::list::ListView;
use crate::client::api::{CreditApi, UserAdminApi};
use crate::client::models::{CreditAdjustResponse, UpdateUserRequest, User};
use crate::error::{ApiError, Result};

/// Users list with status, staff and credit actions
#[derive(Debug, Clone, Default)]
pub struct UsersView {
    pub list: ListView<User>,
}

impl UsersView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the current page of users.
    pub async fn load<A: UserAdminApi + ?Sized>(&mut self, api: &A) -> Result<()> {
        self.list
            .load(|params| async move { api.list_users(&params).await })
            .await
    }

    pub async fn go_to_page<A: UserAdminApi + ?Sized>(
        &mut self,
        api: &A,
        page: usize,
    ) -> Result<()> {
        self.list
            .go_to_page(page, |params| async move { api.list_users(&params).await })
            .await
    }

    pub async fn next_page<A: UserAdminApi + ?Sized>(&mut self, api: &A) -> Result<bool> {
        self.list
            .next_page(|params| async move { api.list_users(&params).await })
            .await
    }

    pub async fn previous_page<A: UserAdminApi + ?Sized>(&mut self, api: &A) -> Result<bool> {
        self.list
            .previous_page(|params| async move { api.list_users(&params).await })
            .await
    }

    /// Walk pages from the current one until the user is loaded.
    pub async fn locate<A: UserAdminApi + ?Sized>(
        &mut self,
        api: &A,
        user_id: i64,
    ) -> Result<User> {
        self.list
            .locate(user_id, |params| async move { api.list_users(&params).await })
            .await
    }

    /// Find the user and open their detail panel with their jobs.
    pub async fn open<A: UserAdminApi + ?Sized>(&mut self, api: &A, user_id: i64) -> Result<()> {
        let user = self.locate(api, user_id).await?;
        self.list
            .open_entity(user, |user| async move { api.user_jobs(&user.email).await })
            .await
    }

    /// Set the active flag explicitly.
    pub async fn set_status<A: UserAdminApi + ?Sized>(
        &mut self,
        api: &A,
        user_id: i64,
        is_active: bool,
    ) -> Result<User> {
        debug!("Setting user {} active={}", user_id, is_active);
        match api.set_user_status(user_id, is_active).await {
            Ok(user) => {
                let verb = if user.is_active { "activated" } else { "deactivated" };
                self.list
                    .record_success(format!("User {} {}", user.email, verb));
                self.list.apply_update(user.clone());
                Ok(user)
            }
            Err(e) => {
                self.list.record_error(e.user_message());
                Err(e)
            }
        }
    }

    /// Flip the active flag of a loaded user.
    pub async fn toggle_status<A: UserAdminApi + ?Sized>(
        &mut self,
        api: &A,
        user_id: i64,
    ) -> Result<User> {
        let current = self.loaded(user_id)?;
        self.set_status(api, user_id, !current.is_active).await
    }

    /// Flip the staff flag of a loaded user.
    pub async fn toggle_staff<A: UserAdminApi + ?Sized>(
        &mut self,
        api: &A,
        user_id: i64,
    ) -> Result<User> {
        let current = self.loaded(user_id)?;
        let patch = UpdateUserRequest::staff(!current.is_staff);
        debug!("Setting user {} staff={}", user_id, !current.is_staff);

        match api.update_user(user_id, &patch).await {
            Ok(user) => {
                let message = if user.is_staff {
                    format!("{} is now staff", user.email)
                } else {
                    format!("{} is no longer staff", user.email)
                };
                self.list.record_success(message);
                self.list.apply_update(user.clone());
                Ok(user)
            }
            Err(e) => {
                self.list.record_error(e.user_message());
                Err(e)
            }
        }
    }

    /// Submit a credit adjustment and show the server's balance.
    ///
    /// The user's balance is replaced by `new_balance` wherever it is shown;
    /// no local arithmetic is applied.
    pub async fn adjust_credits<A: CreditApi + ?Sized>(
        &mut self,
        api: &A,
        form: &CreditForm,
    ) -> Result<CreditAdjustResponse> {
        match credits::submit(api, form).await {
            Ok(response) => {
                if let Some(user) = self.list.find(response.recruiter_id) {
                    let updated = User {
                        credit_balance: response.new_balance,
                        ..user.clone()
                    };
                    self.list.apply_update(updated);
                }
                let message = if response.message.is_empty() {
                    format!("Credits updated. New balance: {}", response.new_balance)
                } else {
                    format!("{} New balance: {}", response.message, response.new_balance)
                };
                self.list.record_success(message);
                Ok(response)
            }
            Err(e) => {
                self.list.record_error(e.user_message());
                Err(e)
            }
        }
    }

    fn loaded(&mut self, user_id: i64) -> Result<User> {
        match self.list.find(user_id) {
            Some(user) => Ok(user.clone()),
            None => {
                let message = format!("User {} is not loaded", user_id);
                self.list.record_error(message.clone());
                Err(ApiError::NotFound(message).into())
            }
        }
    }
}
