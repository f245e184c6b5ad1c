use std::env;

/// Restores the captured variables when dropped, even if the test panics.
struct EnvSnapshot(Vec<(String, Option<String>)>);

impl Drop for EnvSnapshot {
    fn drop(&mut self) {
        for (key, value) in self.0.drain(..) {
            match value {
                Some(v) => env::set_var(&key, v),
                None => env::remove_var(&key),
            }
        }
    }
}

/// Runs `f` with `vars` set (`Some`) or unset (`None`).
///
/// Callers must be `#[serial]`; the process environment is shared.
pub fn with_env<F>(vars: Vec<(&str, Option<&str>)>, f: F)
where
    F: FnOnce(),
{
    let _snapshot = EnvSnapshot(
        vars.iter()
            .map(|(key, _)| (key.to_string(), env::var(key).ok()))
            .collect(),
    );

    for (key, value) in vars {
        match value {
            Some(v) => env::set_var(key, v),
            None => env::remove_var(key),
        }
    }

    f();
}
