pub mod monitor_error;
