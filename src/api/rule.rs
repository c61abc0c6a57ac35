//! Rule Wrappers

use reqwest::Method;

use super::{authed, fetch_json, request, Ack, Envelope};
use crate::error::ApiResult;
use crate::forms::RulePayload;
use crate::models::Rule;

/// All rules, newest first (officer view)
pub async fn list_rules(token: &str) -> ApiResult<Vec<Rule>> {
    fetch_json(authed(Method::GET, "/api/challan/rules/all/", token)).await
}

/// Rules shown to the public
pub async fn public_rules() -> ApiResult<Vec<Rule>> {
    fetch_json(request(Method::GET, "/api/challan/public/rules/")).await
}

pub async fn add_rule(token: &str, payload: &RulePayload) -> ApiResult<Rule> {
    let env: Envelope<Rule> =
        fetch_json(authed(Method::POST, "/api/challan/rules/add/", token).json(payload)).await?;
    log::info!("[RULE] created #{} {}", env.data.id, env.data.rule_name);
    Ok(env.data)
}

pub async fn update_rule(token: &str, id: u32, payload: &RulePayload) -> ApiResult<Rule> {
    let path = format!("/api/challan/rules/update/{}/", id);
    let env: Envelope<Rule> = fetch_json(authed(Method::PATCH, &path, token).json(payload)).await?;
    Ok(env.data)
}

pub async fn delete_rule(token: &str, id: u32) -> ApiResult<Ack> {
    let path = format!("/api/challan/rules/delete/{}/", id);
    let ack = fetch_json(authed(Method::DELETE, &path, token)).await?;
    log::info!("[RULE] deleted #{}", id);
    Ok(ack)
}
