//! Hosted app URL construction

use serde::Deserialize;
use url::Url;

use crate::domain::{BridgeConfig, CardType, WalletError, WalletResult};

/// Inputs for the hosted card-issuance app URL
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BridgeUrlParams {
    pub pwa_base_url: String,
    pub user_token: String,
    /// Preselect a card type in the hosted flow
    pub card_type: Option<CardType>,
    pub bank_id: Option<String>,
    /// Environment tag, e.g. "staging"
    pub env: Option<String>,
    /// Sub-route inside the hosted app, e.g. "add-card/details"
    pub route: Option<String>,
}

impl BridgeUrlParams {
    pub fn new(pwa_base_url: impl Into<String>, user_token: impl Into<String>) -> Self {
        Self {
            pwa_base_url: pwa_base_url.into(),
            user_token: user_token.into(),
            ..Self::default()
        }
    }
}

/// What the caller asks for when opening the bridge. The base URL and
/// environment tag come from configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeRequest {
    pub user_token: String,
    #[serde(default)]
    pub card_type: Option<CardType>,
    #[serde(default)]
    pub bank_id: Option<String>,
    #[serde(default)]
    pub route: Option<String>,
}

impl BridgeRequest {
    pub fn into_params(self, config: &BridgeConfig) -> BridgeUrlParams {
        BridgeUrlParams {
            pwa_base_url: config.pwa_base_url.clone(),
            user_token: self.user_token,
            card_type: self.card_type,
            bank_id: self.bank_id,
            env: config.env.clone(),
            route: self.route,
        }
    }
}

/// Build the URL the web view loads.
///
/// Optional parameters that are absent or blank are omitted. Fails if the
/// base URL does not parse or the sub-route would leave the base path.
pub fn build_url(params: &BridgeUrlParams) -> WalletResult<Url> {
    let mut url = Url::parse(params.pwa_base_url.trim())
        .map_err(|e| WalletError::InvalidUrl(format!("'{}': {e}", params.pwa_base_url)))?;

    if let Some(route) = params.route.as_deref().map(str::trim).filter(|r| !r.is_empty()) {
        push_route(&mut url, route)?;
    }

    {
        let mut query = url.query_pairs_mut();
        query.append_pair("token", &params.user_token);
        if let Some(card_type) = params.card_type {
            query.append_pair("cardType", card_type.as_str());
        }
        if let Some(bank_id) = non_blank(&params.bank_id) {
            query.append_pair("bankId", bank_id);
        }
        if let Some(env) = non_blank(&params.env) {
            query.append_pair("env", env);
        }
    }

    Ok(url)
}

/// Nest `route` under the base path, one segment at a time. Absolute URLs,
/// schemes and `..` are refused so the origin and base path never change.
fn push_route(url: &mut Url, route: &str) -> WalletResult<()> {
    let refused = || WalletError::InvalidUrl(format!("route '{route}' leaves the base path"));
    if route.contains(':') || route.contains('\\') {
        return Err(refused());
    }
    let segments: Vec<&str> = route
        .split('/')
        .filter(|seg| !seg.is_empty() && *seg != ".")
        .collect();
    if segments.contains(&"..") {
        return Err(refused());
    }

    let base = url.to_string();
    url.path_segments_mut()
        .map_err(|()| WalletError::InvalidUrl(format!("'{base}' cannot take a route")))?
        .pop_if_empty()
        .extend(segments);
    Ok(())
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}
