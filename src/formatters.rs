pub mod markdown;
pub mod table;
