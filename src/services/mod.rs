pub mod quote_service;
pub mod table_service;
