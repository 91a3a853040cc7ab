pub mod accounts;
pub mod adverts;
pub mod lipa;
pub mod orders;
pub mod packages;
pub mod premium;
pub mod store;
pub mod support;
pub mod wallet;
