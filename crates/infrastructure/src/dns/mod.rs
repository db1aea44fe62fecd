pub mod doh_client;

pub use doh_client::{normalize_answers, DohAnswer, DohClient};
