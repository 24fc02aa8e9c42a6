pub mod data_storage;
pub mod date_util;
pub mod messages;
pub mod parser;
pub mod view;
