//! Flow commands and the channel that carries them

use crossbeam_channel::{unbounded, Receiver, Sender};
use serde::Serialize;

use crate::domain::{WalletError, WalletResult};

use super::params::RouteParams;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Route {
    Scan,
    AmountEntry,
    BankSelection,
    PinEntry,
    Success,
}

/// What a screen asks the navigator to do
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum FlowCommand {
    Navigate { route: Route, params: RouteParams },
    Back,
    /// Leave the payment flow
    Finish,
}

impl FlowCommand {
    pub fn navigate(route: Route, params: RouteParams) -> Self {
        FlowCommand::Navigate { route, params }
    }
}

/// Sending half of the flow command channel. Cheap to clone.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    tx: Sender<FlowCommand>,
}

impl Dispatcher {
    pub fn channel() -> (Self, Receiver<FlowCommand>) {
        let (tx, rx) = unbounded();
        (Self { tx }, rx)
    }

    pub fn dispatch(&self, command: FlowCommand) -> WalletResult<()> {
        log::debug!("Flow command: {command:?}");
        self.tx
            .send(command)
            .map_err(|_| WalletError::Flow("Payment flow is gone".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_arrive_in_order() {
        let (dispatcher, rx) = Dispatcher::channel();
        dispatcher.dispatch(FlowCommand::Back).unwrap();
        dispatcher.clone().dispatch(FlowCommand::Finish).unwrap();
        assert_eq!(rx.try_recv().unwrap(), FlowCommand::Back);
        assert_eq!(rx.try_recv().unwrap(), FlowCommand::Finish);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn dispatch_fails_once_receiver_is_dropped() {
        let (dispatcher, rx) = Dispatcher::channel();
        drop(rx);
        assert!(matches!(
            dispatcher.dispatch(FlowCommand::Back),
            Err(WalletError::Flow(_))
        ));
    }

    #[test]
    fn navigate_serializes_for_the_frontend() {
        let cmd = FlowCommand::navigate(Route::PinEntry, RouteParams::new().with("amount", "5"));
        let json = serde_json::to_value(&cmd).unwrap();
        assert_eq!(json["command"], "navigate");
        assert_eq!(json["route"], "pinEntry");
        assert_eq!(json["params"]["amount"], "5");
    }
}
