//! Appeal Wrappers

use reqwest::multipart::Form;
use reqwest::Method;
use serde::Serialize;

use super::files::upload_part;
use super::{authed, fetch_json, request, Ack};
use crate::error::ApiResult;
use crate::forms::AppealSubmission;
use crate::models::{Appeal, AppealStatus};

#[derive(Serialize)]
struct ReviewArgs {
    status: AppealStatus,
}

/// File an appeal; the token is attached when someone is signed in
pub async fn create_appeal(token: Option<&str>, appeal: &AppealSubmission) -> ApiResult<Ack> {
    let mut form = Form::new()
        .text("challan", appeal.challan.to_string())
        .text("reason", appeal.reason.clone());
    if let Some(evidence) = &appeal.evidence {
        form = form.part("evidence_url", upload_part(evidence)?);
    }
    let path = "/api/challan/appeal/create/";
    let req = match token {
        Some(token) => authed(Method::POST, path, token),
        None => request(Method::POST, path),
    };
    let ack = fetch_json(req.multipart(form)).await?;
    log::info!("[APPEAL] filed for challan #{}", appeal.challan);
    Ok(ack)
}

pub async fn list_appeals(token: &str) -> ApiResult<Vec<Appeal>> {
    fetch_json(authed(Method::GET, "/api/challan/appeal/all/", token)).await
}

/// Approve or reject a pending appeal
pub async fn review_appeal(token: &str, id: u32, status: AppealStatus) -> ApiResult<Ack> {
    let path = format!("/api/challan/appeal/review/{}/", id);
    let ack = fetch_json(authed(Method::PATCH, &path, token).json(&ReviewArgs { status })).await?;
    log::info!("[APPEAL] #{} marked {}", id, status.label());
    Ok(ack)
}
