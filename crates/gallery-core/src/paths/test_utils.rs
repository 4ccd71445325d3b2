//! Environment isolation for tests that touch `GALLERY_ROOT`.

use std::env;
use std::ffi::OsString;
use std::sync::Mutex;

/// Held by every test that reads or writes process environment variables.
pub static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Puts one environment variable back the way it was when dropped.
///
/// Take [`ENV_LOCK`] first and keep it for the guard's lifetime.
pub struct EnvVarGuard {
    key: &'static str,
    previous: Option<OsString>,
}

impl EnvVarGuard {
    pub fn set(key: &'static str, value: &str) -> Self {
        Self::apply(key, Some(value))
    }

    pub fn unset(key: &'static str) -> Self {
        Self::apply(key, None)
    }

    #[allow(unsafe_code)]
    fn apply(key: &'static str, value: Option<&str>) -> Self {
        let previous = env::var_os(key);
        // SAFETY: callers hold ENV_LOCK, so no other test thread touches the environment
        unsafe {
            match value {
                Some(value) => env::set_var(key, value),
                None => env::remove_var(key),
            }
        }
        Self { key, previous }
    }
}

impl Drop for EnvVarGuard {
    #[allow(unsafe_code)]
    fn drop(&mut self) {
        // SAFETY: see `apply`
        unsafe {
            match self.previous.take() {
                Some(value) => env::set_var(self.key, value),
                None => env::remove_var(self.key),
            }
        }
    }
}
