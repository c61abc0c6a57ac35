//! Authentication Wrappers
//!
//! Login exchanges credentials for an access/refresh token pair.

use reqwest::Method;
use serde::Deserialize;

use super::{fetch_json, request, Ack};
use crate::error::ApiResult;
use crate::forms::{Credentials, SignupPayload};
use crate::models::{LoginGrant, Rank, Role};

#[derive(Debug, Deserialize)]
struct TokenPair {
    access: String,
    refresh: String,
}

#[derive(Debug, Deserialize)]
struct OfficerLogin {
    name: String,
    rank: Rank,
    tokens: TokenPair,
}

#[derive(Debug, Deserialize)]
struct CitizenLogin {
    email: String,
    tokens: TokenPair,
}

impl From<OfficerLogin> for LoginGrant {
    fn from(res: OfficerLogin) -> Self {
        LoginGrant {
            access: res.tokens.access,
            refresh: res.tokens.refresh,
            display_name: res.name,
            role: Role::Officer(res.rank),
        }
    }
}

impl From<CitizenLogin> for LoginGrant {
    fn from(res: CitizenLogin) -> Self {
        LoginGrant {
            access: res.tokens.access,
            refresh: res.tokens.refresh,
            display_name: res.email,
            role: Role::Citizen,
        }
    }
}

pub async fn login_officer(creds: &Credentials) -> ApiResult<LoginGrant> {
    let res: OfficerLogin = fetch_json(request(Method::POST, "/api/officer/login/").json(creds)).await?;
    log::info!("[AUTH] officer {} signed in", res.name);
    Ok(res.into())
}

pub async fn login_citizen(creds: &Credentials) -> ApiResult<LoginGrant> {
    let res: CitizenLogin = fetch_json(request(Method::POST, "/api/users/login/").json(creds)).await?;
    log::info!("[AUTH] citizen {} signed in", res.email);
    Ok(res.into())
}

pub async fn signup_citizen(payload: &SignupPayload) -> ApiResult<Ack> {
    fetch_json(request(Method::POST, "/api/users/signup/").json(payload)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_officer_login_grant() {
        let body = r#"{"message":"Login successful","officer_id":3,"rank":"Inspector",
                       "name":"Asad","tokens":{"refresh":"r1","access":"a1"}}"#;
        let grant: LoginGrant = serde_json::from_str::<OfficerLogin>(body).unwrap().into();
        assert_eq!(grant.access, "a1");
        assert_eq!(grant.refresh, "r1");
        assert_eq!(grant.display_name, "Asad");
        assert_eq!(grant.role, Role::Officer(Rank::Inspector));
    }

    #[test]
    fn test_citizen_login_grant() {
        let body = r#"{"message":"Login successful","user_id":8,"email":"c@d.pk",
                       "tokens":{"access":"a2","refresh":"r2"}}"#;
        let grant: LoginGrant = serde_json::from_str::<CitizenLogin>(body).unwrap().into();
        assert_eq!(grant.display_name, "c@d.pk");
        assert_eq!(grant.role, Role::Citizen);
    }
}
