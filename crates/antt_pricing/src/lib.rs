pub mod adjustment;
pub mod axle_class;
pub mod calculation_request;
pub mod calculation_result;
pub mod calculator;
pub mod cargo_type;
pub mod distance;
pub mod error;
pub mod json;
pub mod rate_table;

#[cfg(test)]
pub(crate) mod test_utils;
