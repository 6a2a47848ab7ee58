//! The writable configuration root under the user's home directory.

use std::env;
use std::path::PathBuf;

use crate::domain::AppError;

const CONFIG_DIR_NAME: &str = "menv";

/// `<HOME>/.config/menv/`, the single writable location the CLI touches.
pub fn user_config_root() -> Result<PathBuf, AppError> {
    let home = env::var_os("HOME")
        .filter(|value| !value.is_empty())
        .ok_or_else(|| AppError::validation("HOME environment variable is not set"))?;
    Ok(PathBuf::from(home).join(".config").join(CONFIG_DIR_NAME))
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    #[test]
    #[serial]
    fn config_root_derives_from_home() {
        let original = env::var_os("HOME");
        unsafe {
            env::set_var("HOME", "/Users/example");
        }

        let root = user_config_root().unwrap();
        assert_eq!(root, PathBuf::from("/Users/example/.config/menv"));

        match original {
            Some(value) => unsafe { env::set_var("HOME", value) },
            None => unsafe { env::remove_var("HOME") },
        }
    }

    #[test]
    #[serial]
    fn missing_home_is_a_validation_error() {
        let original = env::var_os("HOME");
        unsafe {
            env::remove_var("HOME");
        }

        let err = user_config_root().unwrap_err();
        assert!(err.to_string().contains("HOME"));

        if let Some(value) = original {
            unsafe { env::set_var("HOME", value) }
        }
    }
}
