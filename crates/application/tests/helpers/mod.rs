#![allow(dead_code)]

mod mock_store;

pub use mock_store::MockTransactionStore;
