//! QR payment flow
//!
//! scan → amount entry → bank selection → PIN → success.
//!
//! Each screen model handles its own input and answers with a
//! `FlowCommand` rather than calling into its neighbours. Commands travel
//! through one `Dispatcher` channel to the `PaymentFlow` navigator, which
//! owns the route stack. Data moves between screens only as string route
//! parameters, the same way a navigation stack would pass them.

pub mod amount;
pub mod bank;
pub mod dispatch;
pub mod navigator;
pub mod params;
pub mod pin;
pub mod receipt;
pub mod scan;

pub use amount::AmountScreen;
pub use bank::BankScreen;
pub use dispatch::{Dispatcher, FlowCommand, Route};
pub use navigator::{PaymentFlow, Screen, ScreenView};
pub use params::RouteParams;
pub use pin::{PinScreen, PinStatus};
pub use receipt::Receipt;
pub use scan::{parse_upi_qr, ScannedPayee};
