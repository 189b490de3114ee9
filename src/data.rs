//! Enemy definition loading.
//!
//! The world is described by a static `data/enemies.json` asset fetched once
//! at startup. Field names keep the original data file's attribute spelling.

use serde::Deserialize;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// One raw enemy record from the definition file.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnemyDef {
    pub id: u32,
    pub name: String,
    pub zone: u32,
    #[serde(rename = "baseXP")]
    pub base_xp: f64,
    pub unlock_cost: f64,
    /// Automation cycle length in milliseconds.
    pub base_time: f64,
    /// Automation purchase cost in XP.
    pub base_cost: f64,
}

#[derive(Debug, Error)]
pub enum DataError {
    #[error("fetch failed: {0}")]
    Fetch(String),
    #[error("parse failed: {0}")]
    Parse(#[from] serde_json::Error),
}

pub fn parse_enemy_defs(text: &str) -> Result<Vec<EnemyDef>, DataError> {
    Ok(serde_json::from_str(text)?)
}

/// Fetches and parses the enemy definition file. Called once at startup;
/// a failure leaves the UI empty.
pub async fn fetch_enemy_defs(url: &str) -> Result<Vec<EnemyDef>, DataError> {
    let window = web_sys::window().ok_or_else(|| DataError::Fetch("no window".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_err)?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| DataError::Fetch("fetch did not yield a Response".into()))?;
    if !resp.ok() {
        return Err(DataError::Fetch(format!("HTTP {}", resp.status())));
    }
    let text_value = JsFuture::from(resp.text().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    let text = text_value
        .as_string()
        .ok_or_else(|| DataError::Fetch("response body is not text".into()))?;
    parse_enemy_defs(&text)
}

fn js_err(value: JsValue) -> DataError {
    DataError::Fetch(format!("{value:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_original_attribute_names() {
        let text = r#"[
            { "id": 1, "name": "Slime", "zone": 1, "baseXP": 1,
              "unlockCost": 0, "baseTime": 1000, "baseCost": 50 },
            { "id": 2, "name": "Wolf", "zone": 1, "baseXP": 2.5,
              "unlockCost": 25, "baseTime": 1500, "baseCost": 150 }
        ]"#;
        let defs = parse_enemy_defs(text).unwrap();
        assert_eq!(defs.len(), 2);
        assert_eq!(defs[0].name, "Slime");
        assert_eq!(defs[0].base_xp, 1.0);
        assert_eq!(defs[1].base_xp, 2.5);
        assert_eq!(defs[1].unlock_cost, 25.0);
        assert_eq!(defs[1].base_time, 1500.0);
        assert_eq!(defs[1].base_cost, 150.0);
    }

    #[test]
    fn malformed_input_is_a_parse_error() {
        let err = parse_enemy_defs("{ not json").unwrap_err();
        assert!(matches!(err, DataError::Parse(_)));

        // Missing required attribute.
        let err = parse_enemy_defs(r#"[{ "id": 1, "name": "Slime", "zone": 1 }]"#).unwrap_err();
        assert!(matches!(err, DataError::Parse(_)));
    }

    #[test]
    fn empty_file_is_an_empty_world() {
        assert!(parse_enemy_defs("[]").unwrap().is_empty());
    }
}
