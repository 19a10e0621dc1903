use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;
use serde_json::json;

use crate::error::identity::IdentityError;
use crate::identity::{IdentityAccount, IdentityProvider};

/// Identity provider speaking the managed service's REST API.
///
/// Every operation is a `POST {base_url}/accounts:<op>?key={api_key}`.
/// Failures come back as a JSON body whose `error.message` holds a code
/// such as `EMAIL_EXISTS`; [`map_code`] translates the codes the auth flows
/// care about and passes the rest through.
#[derive(Debug, Clone)]
pub struct RestIdentity {
    client: Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountPayload {
    local_id: String,
    #[serde(default)]
    email: String,
    display_name: Option<String>,
    id_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LookupPayload {
    #[serde(default)]
    users: Vec<AccountPayload>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Translates a provider error code into the matching error variant.
fn map_code(code: &str) -> IdentityError {
    if code.starts_with("EMAIL_EXISTS") {
        IdentityError::EmailExists
    } else if code.starts_with("EMAIL_NOT_FOUND") || code.starts_with("USER_NOT_FOUND") {
        IdentityError::AccountNotFound
    } else if code.starts_with("INVALID_PASSWORD") || code.starts_with("INVALID_LOGIN_CREDENTIALS")
    {
        IdentityError::InvalidCredentials
    } else {
        IdentityError::Provider {
            code: code.to_string(),
        }
    }
}

impl RestIdentity {
    pub fn new(client: Client, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    async fn post(
        &self,
        operation: &str,
        body: serde_json::Value,
    ) -> Result<Response, IdentityError> {
        let response = self
            .client
            .post(format!("{}/accounts:{}", self.base_url, operation))
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        if response.status().is_success() {
            return Ok(response);
        }
        let body: ErrorBody = response.json().await?;
        Err(map_code(&body.error.message))
    }
}

#[async_trait]
impl IdentityProvider for RestIdentity {
    async fn create_account(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> Result<IdentityAccount, IdentityError> {
        let response = self
            .post(
                "signUp",
                json!({
                    "email": email,
                    "password": password,
                    "returnSecureToken": true,
                }),
            )
            .await?;
        let account: AccountPayload = response.json().await?;

        // The display name goes on in a second step, signUp does not accept
        // it.
        if let Some(token) = &account.id_token {
            self.post(
                "update",
                json!({
                    "idToken": token,
                    "displayName": display_name,
                    "returnSecureToken": false,
                }),
            )
            .await?;
        }

        Ok(IdentityAccount {
            uid: account.local_id,
            email: account.email,
            display_name: Some(display_name.to_string()),
        })
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<IdentityAccount>, IdentityError> {
        let result = self.post("lookup", json!({ "email": [email] })).await;
        let response = match result {
            Ok(response) => response,
            Err(IdentityError::AccountNotFound) => return Ok(None),
            Err(err) => return Err(err),
        };

        let payload: LookupPayload = response.json().await?;
        Ok(payload.users.into_iter().next().map(|user| IdentityAccount {
            uid: user.local_id,
            email: user.email,
            display_name: user.display_name,
        }))
    }

    async fn verify_password(&self, email: &str, password: &str) -> Result<bool, IdentityError> {
        let result = self
            .post(
                "signInWithPassword",
                json!({
                    "email": email,
                    "password": password,
                    "returnSecureToken": true,
                }),
            )
            .await;

        match result {
            Ok(_) => Ok(true),
            Err(IdentityError::InvalidCredentials) | Err(IdentityError::AccountNotFound) => {
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }

    async fn update_password(&self, uid: &str, new_password: &str) -> Result<(), IdentityError> {
        self.post(
            "update",
            json!({
                "localId": uid,
                "password": new_password,
                "returnSecureToken": false,
            }),
        )
        .await?;
        Ok(())
    }

    async fn send_password_reset(&self, email: &str) -> Result<(), IdentityError> {
        self.post(
            "sendOobCode",
            json!({
                "requestType": "PASSWORD_RESET",
                "email": email,
            }),
        )
        .await?;
        Ok(())
    }
}
