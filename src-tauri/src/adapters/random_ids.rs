//! Transaction id adapters

use rand::Rng;

use crate::ports::TransactionIdSource;

pub const TRANSACTION_ID_PREFIX: &str = "TXN";
pub const TRANSACTION_ID_DIGITS: usize = 10;

/// Random `TXN##########` ids from the thread-local RNG
pub struct RandomTransactionIds;

impl TransactionIdSource for RandomTransactionIds {
    fn next_transaction_id(&mut self) -> String {
        let mut rng = rand::rng();
        let digits: String = (0..TRANSACTION_ID_DIGITS)
            .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
            .collect();
        format!("{TRANSACTION_ID_PREFIX}{digits}")
    }
}

/// Deterministic ids counting up from `next`, for demos and tests
pub struct SequentialTransactionIds {
    next: u64,
}

impl SequentialTransactionIds {
    pub fn starting_at(next: u64) -> Self {
        Self { next }
    }
}

impl TransactionIdSource for SequentialTransactionIds {
    fn next_transaction_id(&mut self) -> String {
        let id = self.next % 10u64.pow(TRANSACTION_ID_DIGITS as u32);
        self.next += 1;
        format!("{TRANSACTION_ID_PREFIX}{id:010}")
    }
}

/// Whether `id` has the `TXN` + 10 digits shape
pub fn is_transaction_id(id: &str) -> bool {
    id.strip_prefix(TRANSACTION_ID_PREFIX)
        .is_some_and(|digits| {
            digits.len() == TRANSACTION_ID_DIGITS && digits.chars().all(|c| c.is_ascii_digit())
        })
}
