use crate::common::*;

#[doc = "Helper that reads a required environment variable."]
fn get_env_or_panic(key: &str) -> String {
    match std::env::var(key) {
        Ok(val) => val,
        Err(_) => {
            let msg: String = format!("[ENV file read Error] '{}' must be set", key);
            error!("{}", msg);
            panic!("{}", msg);
        }
    }
}

#[doc = "Function to globally initialize the 'SYSTEM_CONFIG_PATH' variable"]
pub static SYSTEM_CONFIG_PATH: once_lazy<String> =
    once_lazy::new(|| get_env_or_panic("SYSTEM_CONFIG_PATH"));

#[doc = "Function to globally initialize the 'QUERY_TEMPLATE_PATH' variable"]
pub static QUERY_TEMPLATE_PATH: once_lazy<String> =
    once_lazy::new(|| get_env_or_panic("QUERY_TEMPLATE_PATH"));
