pub mod calculate;
pub mod rates;
pub mod routes;
