use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::identity::IdentityError;
use crate::identity::{IdentityAccount, IdentityProvider};

#[derive(Debug, Clone)]
struct StoredAccount {
    uid: String,
    email: String,
    password: String,
    display_name: Option<String>,
}

/// In-process identity provider keyed by email.
///
/// Holds passwords in plain text; only ever meant for tests and local runs.
#[derive(Debug, Default)]
pub struct MemoryIdentity {
    accounts: RwLock<HashMap<String, StoredAccount>>,
}

impl MemoryIdentity {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl IdentityProvider for MemoryIdentity {
    async fn create_account(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> Result<IdentityAccount, IdentityError> {
        let mut accounts = self
            .accounts
            .write()
            .map_err(|_| IdentityError::LockPoisoned)?;
        if accounts.contains_key(email) {
            return Err(IdentityError::EmailExists);
        }

        let account = StoredAccount {
            uid: Uuid::new_v4().to_string(),
            email: email.to_string(),
            password: password.to_string(),
            display_name: Some(display_name.to_string()),
        };
        accounts.insert(email.to_string(), account.clone());

        Ok(IdentityAccount {
            uid: account.uid,
            email: account.email,
            display_name: account.display_name,
        })
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<IdentityAccount>, IdentityError> {
        let accounts = self
            .accounts
            .read()
            .map_err(|_| IdentityError::LockPoisoned)?;
        Ok(accounts.get(email).map(|account| IdentityAccount {
            uid: account.uid.clone(),
            email: account.email.clone(),
            display_name: account.display_name.clone(),
        }))
    }

    async fn verify_password(&self, email: &str, password: &str) -> Result<bool, IdentityError> {
        let accounts = self
            .accounts
            .read()
            .map_err(|_| IdentityError::LockPoisoned)?;
        Ok(accounts
            .get(email)
            .is_some_and(|account| account.password == password))
    }

    async fn update_password(&self, uid: &str, new_password: &str) -> Result<(), IdentityError> {
        let mut accounts = self
            .accounts
            .write()
            .map_err(|_| IdentityError::LockPoisoned)?;
        let account = accounts
            .values_mut()
            .find(|account| account.uid == uid)
            .ok_or(IdentityError::AccountNotFound)?;
        account.password = new_password.to_string();
        Ok(())
    }

    async fn send_password_reset(&self, email: &str) -> Result<(), IdentityError> {
        let accounts = self
            .accounts
            .read()
            .map_err(|_| IdentityError::LockPoisoned)?;
        if accounts.contains_key(email) {
            Ok(())
        } else {
            Err(IdentityError::AccountNotFound)
        }
    }
}
