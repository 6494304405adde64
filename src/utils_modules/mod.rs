pub mod io_utils;
pub mod kibana_utils;
pub mod logger_utils;
