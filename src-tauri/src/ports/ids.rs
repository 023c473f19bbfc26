//! Transaction id port

/// Generates client-side transaction references
pub trait TransactionIdSource: Send {
    /// Next id, formatted `TXN` followed by 10 digits
    fn next_transaction_id(&mut self) -> String;
}
