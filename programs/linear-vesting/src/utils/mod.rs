pub mod release;
pub mod token;
