pub mod db;
pub mod errors;
pub mod gcd_result;
pub mod user;
