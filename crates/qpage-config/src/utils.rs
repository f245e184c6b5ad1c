use std::{env, path::PathBuf};

/// Returns the user's config directory, honoring `XDG_CONFIG_HOME` and
/// falling back to `$HOME/.config`.
pub fn xdg_config_home() -> PathBuf {
    env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"))
}

fn home_dir() -> PathBuf {
    env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/"))
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;
    use crate::test_utils::with_env;

    #[test]
    #[serial]
    fn test_xdg_config_home_env() {
        with_env(vec![("XDG_CONFIG_HOME", Some("/tmp/xdg"))], || {
            assert_eq!(xdg_config_home(), PathBuf::from("/tmp/xdg"));
        });
    }

    #[test]
    #[serial]
    fn test_xdg_config_home_fallback() {
        with_env(
            vec![("XDG_CONFIG_HOME", None), ("HOME", Some("/home/qpage"))],
            || {
                assert_eq!(xdg_config_home(), PathBuf::from("/home/qpage/.config"));
            },
        );
    }
}
