pub mod error_log;
pub mod postgres;
pub mod result_log;

pub use error_log::append_error;
pub use postgres::insert_record;
pub use result_log::append_record;
