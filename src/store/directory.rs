//! Demo identity / organization / workspace directory
//!
//! Seed records load first and persisted records overlay them. Every mutation
//! updates memory, then writes back: users wholesale, organizations and
//! workspaces only for records that are not part of the seed.

use std::collections::HashSet;

use chrono::Utc;
use log::{debug, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::backend::KeyValueStore;
use super::models::{
    CascadeReport, DemoOrganization, DemoUser, DemoUserUpdate, NewDemoUser, Workspace,
    hash_password, next_id,
};
use super::seed;
use crate::error::StoreError;

pub const USERS_KEY: &str = "demo_users";
pub const ORGANIZATIONS_KEY: &str = "demo_organizations";
pub const WORKSPACES_KEY: &str = "demo_workspaces";

type Result<T> = std::result::Result<T, StoreError>;

/// Demo directory over an injected key-value backend
pub struct DemoDirectory<S> {
    store: S,
    users: Vec<DemoUser>,
    organizations: Vec<DemoOrganization>,
    workspaces: Vec<Workspace>,
    seed_org_ids: HashSet<String>,
    seed_workspace_ids: HashSet<String>,
}

impl<S: KeyValueStore> DemoDirectory<S> {
    /// Load seed records, then overlay whatever the store holds.
    ///
    /// A corrupt stored array is logged and ignored.
    pub fn open(store: S) -> Result<Self> {
        let seed_orgs = seed::organizations();
        let seed_workspaces = seed::workspaces();

        let mut directory = Self {
            seed_org_ids: seed_orgs.iter().map(|o| o.id.clone()).collect(),
            seed_workspace_ids: seed_workspaces.iter().map(|w| w.id.clone()).collect(),
            users: seed::users(),
            organizations: seed_orgs,
            workspaces: seed_workspaces,
            store,
        };

        if let Some(users) = directory.load_overlay::<DemoUser>(USERS_KEY)? {
            directory.users = users;
        }
        if let Some(orgs) = directory.load_overlay::<DemoOrganization>(ORGANIZATIONS_KEY)? {
            for org in orgs {
                upsert(&mut directory.organizations, org, |o| o.id.clone());
            }
        }
        if let Some(workspaces) = directory.load_overlay::<Workspace>(WORKSPACES_KEY)? {
            for ws in workspaces {
                upsert(&mut directory.workspaces, ws, |w| w.id.clone());
            }
        }

        debug!(
            "Demo directory loaded: {} users, {} organizations, {} workspaces",
            directory.users.len(),
            directory.organizations.len(),
            directory.workspaces.len()
        );
        Ok(directory)
    }

    fn load_overlay<T: DeserializeOwned>(&self, key: &str) -> Result<Option<Vec<T>>> {
        let Some(raw) = self.store.get(key)? else {
            return Ok(None);
        };
        match decode::<T>(key, &raw) {
            Ok(records) => Ok(Some(records)),
            Err(e) => {
                warn!("Ignoring stored records: {}", e);
                Ok(None)
            }
        }
    }

    /// Backend, for callers that manage its lifecycle
    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn users(&self) -> &[DemoUser] {
        &self.users
    }

    pub fn organizations(&self) -> &[DemoOrganization] {
        &self.organizations
    }

    pub fn workspaces(&self) -> &[Workspace] {
        &self.workspaces
    }

    pub fn user(&self, id: &str) -> Result<&DemoUser> {
        self.users
            .iter()
            .find(|u| u.id == id)
            .ok_or_else(|| not_found("User", id))
    }

    pub fn organization(&self, id: &str) -> Result<&DemoOrganization> {
        self.organizations
            .iter()
            .find(|o| o.id == id)
            .ok_or_else(|| not_found("Organization", id))
    }

    pub fn workspace(&self, id: &str) -> Result<&Workspace> {
        self.workspaces
            .iter()
            .find(|w| w.id == id)
            .ok_or_else(|| not_found("Workspace", id))
    }

    pub fn find_user_by_email(&self, email: &str) -> Option<&DemoUser> {
        let email = email.trim();
        self.users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
    }

    /// Whether a record came from the seed rather than a user action
    pub fn is_seed_organization(&self, id: &str) -> bool {
        self.seed_org_ids.contains(id)
    }

    pub fn is_seed_workspace(&self, id: &str) -> bool {
        self.seed_workspace_ids.contains(id)
    }

    /// Check a demo login.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<&DemoUser> {
        match self.find_user_by_email(email) {
            Some(user) if user.check_password(password) => Ok(user),
            _ => Err(StoreError::InvalidCredentials),
        }
    }

    // ========================================================================
    // Users
    // ========================================================================

    pub fn create_user(&mut self, new: NewDemoUser) -> Result<DemoUser> {
        let email = new.email.trim().to_string();
        let full_name = new.full_name.trim().to_string();
        if email.is_empty() || !email.contains('@') {
            return Err(StoreError::Invalid(format!("Invalid email: '{}'", email)));
        }
        if self.find_user_by_email(&email).is_some() {
            return Err(StoreError::Conflict(format!(
                "A user with email {} already exists",
                email
            )));
        }
        if let Some(ref org_id) = new.organization_id {
            self.organization(org_id)?;
        }

        let user = DemoUser {
            id: next_id("usr", self.users.iter().map(|u| u.id.as_str())),
            email,
            full_name,
            password_hash: hash_password(&new.password),
            role: new.role,
            organization_id: new.organization_id,
            workspace_ids: Vec::new(),
            created_at: Utc::now(),
        };
        debug!("Creating demo user {} ({})", user.id, user.email);

        self.users.push(user.clone());
        self.persist_users()?;
        Ok(user)
    }

    pub fn update_user(&mut self, id: &str, update: DemoUserUpdate) -> Result<DemoUser> {
        if let Some(Some(ref org_id)) = update.organization_id {
            self.organization(org_id)?;
        }

        let user = self
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| not_found("User", id))?;

        if let Some(name) = update.full_name {
            user.full_name = name.trim().to_string();
        }
        if let Some(role) = update.role {
            user.role = role;
        }
        if let Some(org) = update.organization_id {
            user.organization_id = org;
        }
        let updated = user.clone();
        debug!("Updated demo user {}", id);

        self.persist_users()?;
        Ok(updated)
    }

    /// Delete a user and drop them from every workspace.
    pub fn delete_user(&mut self, id: &str) -> Result<DemoUser> {
        let index = self
            .users
            .iter()
            .position(|u| u.id == id)
            .ok_or_else(|| not_found("User", id))?;
        let removed = self.users.remove(index);
        debug!("Deleting demo user {}", id);

        let mut touched_workspaces = false;
        for ws in &mut self.workspaces {
            let before = ws.member_ids.len();
            ws.member_ids.retain(|m| m != id);
            touched_workspaces |= ws.member_ids.len() != before;
        }

        self.persist_users()?;
        if touched_workspaces {
            self.persist_workspaces()?;
        }
        Ok(removed)
    }

    // ========================================================================
    // Organizations
    // ========================================================================

    pub fn create_organization(&mut self, name: &str, domain: &str) -> Result<DemoOrganization> {
        let name = name.trim();
        let domain = domain.trim().to_lowercase();
        if name.is_empty() {
            return Err(StoreError::Invalid("Organization name is required".to_string()));
        }
        self.ensure_domain_free(&domain, None)?;

        let org = DemoOrganization {
            id: next_id("org", self.organizations.iter().map(|o| o.id.as_str())),
            name: name.to_string(),
            domain,
            created_at: Utc::now(),
        };
        debug!("Creating demo organization {} ({})", org.id, org.name);

        self.organizations.push(org.clone());
        self.persist_organizations()?;
        Ok(org)
    }

    pub fn update_organization(
        &mut self,
        id: &str,
        name: Option<&str>,
        domain: Option<&str>,
    ) -> Result<DemoOrganization> {
        let name = name.map(str::trim);
        if name == Some("") {
            return Err(StoreError::Invalid("Organization name is required".to_string()));
        }
        let domain = domain.map(|d| d.trim().to_lowercase());
        if let Some(ref domain) = domain {
            self.ensure_domain_free(domain, Some(id))?;
        }

        let org = self
            .organizations
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| not_found("Organization", id))?;

        if let Some(name) = name {
            org.name = name.to_string();
        }
        if let Some(domain) = domain {
            org.domain = domain;
        }
        let updated = org.clone();

        self.persist_organizations()?;
        Ok(updated)
    }

    fn ensure_domain_free(&self, domain: &str, except: Option<&str>) -> Result<()> {
        let taken = self
            .organizations
            .iter()
            .any(|o| o.domain == domain && Some(o.id.as_str()) != except);
        if taken {
            return Err(StoreError::Conflict(format!(
                "An organization with domain {} already exists",
                domain
            )));
        }
        Ok(())
    }

    /// Delete an organization with its workspaces, detaching affected users.
    ///
    /// Each persistence step is attempted independently; a failure is logged
    /// and the in-memory cascade still completes.
    pub fn delete_organization(&mut self, id: &str) -> Result<CascadeReport> {
        let index = self
            .organizations
            .iter()
            .position(|o| o.id == id)
            .ok_or_else(|| not_found("Organization", id))?;
        self.organizations.remove(index);
        debug!("Deleting demo organization {}", id);

        if let Err(e) = self.persist_organizations() {
            warn!("Failed to persist organizations after deleting {}: {}", id, e);
        }

        let (owned, kept): (Vec<Workspace>, Vec<Workspace>) = std::mem::take(&mut self.workspaces)
            .into_iter()
            .partition(|w| w.organization_id == id);
        self.workspaces = kept;

        let removed_ids: HashSet<&str> = owned.iter().map(|w| w.id.as_str()).collect();
        let members: HashSet<&str> = owned
            .iter()
            .flat_map(|w| w.member_ids.iter().map(String::as_str))
            .collect();

        let mut detached = Vec::new();
        for user in &mut self.users {
            let in_org = user.organization_id.as_deref() == Some(id);
            let was_member = members.contains(user.id.as_str());
            if in_org || was_member {
                user.organization_id = None;
                user.workspace_ids.retain(|w| !removed_ids.contains(w.as_str()));
                detached.push(user.id.clone());
            }
        }

        if let Err(e) = self.persist_workspaces() {
            warn!("Failed to persist workspaces after deleting {}: {}", id, e);
        }
        if let Err(e) = self.persist_users() {
            warn!("Failed to persist users after deleting {}: {}", id, e);
        }

        Ok(CascadeReport {
            organization_id: id.to_string(),
            workspaces_removed: owned.into_iter().map(|w| w.id).collect(),
            users_detached: detached,
        })
    }

    // ========================================================================
    // Workspaces
    // ========================================================================

    pub fn create_workspace(&mut self, name: &str, organization_id: &str) -> Result<Workspace> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::Invalid("Workspace name is required".to_string()));
        }
        self.organization(organization_id)?;

        let ws = Workspace {
            id: next_id("ws", self.workspaces.iter().map(|w| w.id.as_str())),
            name: name.to_string(),
            organization_id: organization_id.to_string(),
            member_ids: Vec::new(),
            created_at: Utc::now(),
        };
        debug!("Creating demo workspace {} in {}", ws.id, organization_id);

        self.workspaces.push(ws.clone());
        self.persist_workspaces()?;
        Ok(ws)
    }

    /// Delete a workspace and drop it from its members' workspace lists.
    pub fn delete_workspace(&mut self, id: &str) -> Result<Workspace> {
        let index = self
            .workspaces
            .iter()
            .position(|w| w.id == id)
            .ok_or_else(|| not_found("Workspace", id))?;
        let removed = self.workspaces.remove(index);
        debug!("Deleting demo workspace {}", id);

        for user in &mut self.users {
            user.workspace_ids.retain(|w| w != id);
        }

        self.persist_workspaces()?;
        self.persist_users()?;
        Ok(removed)
    }

    pub fn add_member(&mut self, workspace_id: &str, user_id: &str) -> Result<Workspace> {
        self.user(user_id)?;
        let ws = self
            .workspaces
            .iter_mut()
            .find(|w| w.id == workspace_id)
            .ok_or_else(|| not_found("Workspace", workspace_id))?;

        if !ws.member_ids.iter().any(|m| m == user_id) {
            ws.member_ids.push(user_id.to_string());
        }
        let updated = ws.clone();

        if let Some(user) = self.users.iter_mut().find(|u| u.id == user_id)
            && !user.workspace_ids.iter().any(|w| w == workspace_id)
        {
            user.workspace_ids.push(workspace_id.to_string());
        }

        self.persist_workspaces()?;
        self.persist_users()?;
        Ok(updated)
    }

    pub fn remove_member(&mut self, workspace_id: &str, user_id: &str) -> Result<Workspace> {
        let ws = self
            .workspaces
            .iter_mut()
            .find(|w| w.id == workspace_id)
            .ok_or_else(|| not_found("Workspace", workspace_id))?;
        ws.member_ids.retain(|m| m != user_id);
        let updated = ws.clone();

        if let Some(user) = self.users.iter_mut().find(|u| u.id == user_id) {
            user.workspace_ids.retain(|w| w != workspace_id);
        }

        self.persist_workspaces()?;
        self.persist_users()?;
        Ok(updated)
    }

    /// Forget everything persisted and return to the seed.
    pub fn reset(&mut self) -> Result<()> {
        for key in [USERS_KEY, ORGANIZATIONS_KEY, WORKSPACES_KEY] {
            self.store.remove(key)?;
        }
        self.users = seed::users();
        self.organizations = seed::organizations();
        self.workspaces = seed::workspaces();
        debug!("Demo directory reset to seed");
        Ok(())
    }

    // ========================================================================
    // Persistence
    // ========================================================================

    fn persist_users(&mut self) -> Result<()> {
        let json = encode(&self.users)?;
        self.store.set(USERS_KEY, &json)
    }

    fn persist_organizations(&mut self) -> Result<()> {
        let custom: Vec<&DemoOrganization> = self
            .organizations
            .iter()
            .filter(|o| !self.seed_org_ids.contains(&o.id))
            .collect();
        let json = encode(&custom)?;
        self.store.set(ORGANIZATIONS_KEY, &json)
    }

    fn persist_workspaces(&mut self) -> Result<()> {
        let custom: Vec<&Workspace> = self
            .workspaces
            .iter()
            .filter(|w| !self.seed_workspace_ids.contains(&w.id))
            .collect();
        let json = encode(&custom)?;
        self.store.set(WORKSPACES_KEY, &json)
    }
}

fn not_found(entity: &'static str, id: &str) -> StoreError {
    StoreError::NotFound {
        entity,
        id: id.to_string(),
    }
}

fn upsert<T>(records: &mut Vec<T>, record: T, id: impl Fn(&T) -> String) {
    let key = id(&record);
    match records.iter_mut().find(|r| id(r) == key) {
        Some(existing) => *existing = record,
        None => records.push(record),
    }
}

fn encode<T: Serialize + ?Sized>(records: &T) -> Result<String> {
    serde_json::to_string(records).map_err(|e| StoreError::Backend(e.to_string()))
}

fn decode<T: DeserializeOwned>(key: &str, raw: &str) -> Result<Vec<T>> {
    serde_json::from_str(raw).map_err(|e| StoreError::Corrupt {
        key: key.to_string(),
        message: e.to_string(),
    })
}
