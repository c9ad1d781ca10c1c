//! Browser LocalStorage access
//!
//! Values are stored as raw JSON strings under a fixed key. Natively there is
//! no storage: reads find nothing and writes are dropped.

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Raw string stored under `key`, if any
#[cfg(target_arch = "wasm32")]
pub fn read(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

/// Store `value` under `key`. Returns whether the write went through.
#[cfg(target_arch = "wasm32")]
pub fn write(key: &str, value: &str) -> bool {
    local_storage().is_some_and(|s| s.set_item(key, value).is_ok())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn read(_key: &str) -> Option<String> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
pub fn write(_key: &str, _value: &str) -> bool {
    false
}
