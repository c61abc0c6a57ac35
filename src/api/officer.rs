//! Officer and Area Wrappers

use reqwest::Method;
use serde::Deserialize;

use super::{authed, fetch_json, Ack};
use crate::error::ApiResult;
use crate::forms::OfficerPayload;
use crate::models::{Area, Officer};

#[derive(Debug, Clone, Deserialize)]
pub struct CreatedOfficer {
    pub officer_id: u32,
    #[serde(default)]
    pub message: Option<String>,
}

impl From<CreatedOfficer> for Ack {
    fn from(created: CreatedOfficer) -> Self {
        Ack { message: created.message }
    }
}

pub async fn list_officers(token: &str) -> ApiResult<Vec<Officer>> {
    fetch_json(authed(Method::GET, "/api/officer/list/", token)).await
}

/// Flat city/zone/sub-area table behind the cascading dropdowns
pub async fn list_areas(token: &str) -> ApiResult<Vec<Area>> {
    fetch_json(authed(Method::GET, "/api/officer/areas/", token)).await
}

pub async fn create_officer(token: &str, payload: &OfficerPayload) -> ApiResult<CreatedOfficer> {
    let created: CreatedOfficer =
        fetch_json(authed(Method::POST, "/api/officer/create/", token).json(payload)).await?;
    log::info!("[OFFICER] created #{}", created.officer_id);
    Ok(created)
}

pub async fn update_officer(token: &str, id: u32, payload: &OfficerPayload) -> ApiResult<Ack> {
    let path = format!("/api/officer/update/{}/", id);
    fetch_json(authed(Method::PATCH, &path, token).json(payload)).await
}

pub async fn delete_officer(token: &str, id: u32) -> ApiResult<Ack> {
    let path = format!("/api/officer/delete/{}/", id);
    let ack = fetch_json(authed(Method::DELETE, &path, token)).await?;
    log::info!("[OFFICER] deleted #{}", id);
    Ok(ack)
}
