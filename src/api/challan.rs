//! Challan Wrappers

use reqwest::multipart::Form;
use reqwest::Method;

use super::files::upload_part;
use super::{authed, fetch_json, request, Ack};
use crate::error::ApiResult;
use crate::forms::{ChallanPayload, ChallanUpdate};
use crate::models::{Challan, Upload};

/// Public lookup by bike number; `NotFound` when the bike is unknown
pub async fn search_by_bike(bike_number: &str) -> ApiResult<Vec<Challan>> {
    let req = request(Method::GET, "/api/challan/public/search/")
        .query(&[("bike_number", bike_number)]);
    fetch_json(req).await
}

/// Public payment proof upload
pub async fn submit_payment(challan_id: u32, proof: &Upload) -> ApiResult<Ack> {
    let path = format!("/api/challan/public/pay/{}/", challan_id);
    let form = Form::new().part("payment_proof", upload_part(proof)?);
    let ack = fetch_json(request(Method::POST, &path).multipart(form)).await?;
    log::info!("[CHALLAN] payment proof sent for #{}", challan_id);
    Ok(ack)
}

/// Challans issued by officers
pub async fn list_challans(token: &str) -> ApiResult<Vec<Challan>> {
    fetch_json(authed(Method::GET, "/api/challan/all/", token)).await
}

pub async fn issue_challan(token: &str, payload: &ChallanPayload) -> ApiResult<Challan> {
    let challan: Challan =
        fetch_json(authed(Method::POST, "/api/challan/create/", token).json(payload)).await?;
    log::info!("[CHALLAN] issued #{} to {}", challan.id, challan.bike_number);
    Ok(challan)
}

/// Partial update: status, or rule with its fine
pub async fn update_challan(token: &str, id: u32, update: &ChallanUpdate) -> ApiResult<Ack> {
    let path = format!("/api/challan/update/{}/", id);
    let ack = fetch_json(authed(Method::PATCH, &path, token).json(update)).await?;
    log::info!("[CHALLAN] updated #{}", id);
    Ok(ack)
}

/// Challans on the signed-in citizen's bikes
pub async fn my_challans(token: &str) -> ApiResult<Vec<Challan>> {
    fetch_json(authed(Method::GET, "/api/challan/my-challans/", token)).await
}
