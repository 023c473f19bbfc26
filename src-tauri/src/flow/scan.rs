//! Scan screen: turn a scanned UPI QR payload into an amount-entry route.
//!
//! UPI QR codes carry a URI such as
//! `upi://pay?pa=chaipoint@okaxis&pn=Chai%20Point&am=120.00&tn=Lunch`.

use serde::Serialize;
use url::Url;

use crate::domain::{WalletError, WalletResult};

use super::dispatch::{FlowCommand, Route};
use super::params::{self, RouteParams};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScannedPayee {
    /// Payee VPA, e.g. "chaipoint@okaxis"
    pub upi_id: String,
    pub name: String,
    /// Amount fixed by the merchant, if any
    pub amount: Option<String>,
    pub note: Option<String>,
}

pub fn parse_upi_qr(raw: &str) -> WalletResult<ScannedPayee> {
    let url = Url::parse(raw.trim()).map_err(|_| WalletError::Scan("Not a UPI QR code".into()))?;
    if !url.scheme().eq_ignore_ascii_case("upi") || url.host_str() != Some("pay") {
        return Err(WalletError::Scan("Not a UPI payment QR code".into()));
    }

    let mut upi_id = None;
    let mut name = None;
    let mut amount = None;
    let mut note = None;
    for (key, value) in url.query_pairs() {
        let value = value.trim().to_string();
        if value.is_empty() {
            continue;
        }
        match key.as_ref() {
            "pa" => upi_id = Some(value),
            "pn" => name = Some(value),
            "am" => amount = Some(value),
            "tn" => note = Some(value),
            _ => {}
        }
    }

    let upi_id = upi_id
        .filter(|id| id.contains('@'))
        .ok_or_else(|| WalletError::Scan("QR code has no valid payee address".into()))?;
    Ok(ScannedPayee {
        name: name.unwrap_or_else(|| upi_id.clone()),
        upi_id,
        amount,
        note,
    })
}

/// Handle a scanned QR payload
pub fn on_scanned(raw: &str) -> WalletResult<FlowCommand> {
    let payee = parse_upi_qr(raw)?;
    log::info!("Scanned payee {}", payee.upi_id);

    let mut route_params = RouteParams::new()
        .with(params::UPI_ID, payee.upi_id)
        .with(params::RECIPIENT_NAME, payee.name);
    if let Some(amount) = payee.amount {
        route_params.set(params::AMOUNT, amount);
    }
    if let Some(note) = payee.note {
        route_params.set(params::MESSAGE, note);
    }
    Ok(FlowCommand::navigate(Route::AmountEntry, route_params))
}
