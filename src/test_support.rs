use crate::selection::{ColorSlot, FillType, FreeTextInputs, SelectionState};
use std::sync::{LazyLock, Mutex, MutexGuard};

static ENV_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

/// Sets an environment variable for the guard's lifetime and restores the
/// previous value on drop.
pub(crate) struct EnvGuard {
    originals: Vec<(&'static str, Option<String>)>,
    _lock: MutexGuard<'static, ()>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: Option<&str>) -> Self {
        Self::set_all(&[(key, value)])
    }

    /// Set several variables under one lock. `None` removes the variable.
    pub(crate) fn set_all(vars: &[(&'static str, Option<&str>)]) -> Self {
        // The environment is process-global. Lock it so tests don't race even
        // if a #[serial] annotation is missed.
        let lock = ENV_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let mut originals = Vec::with_capacity(vars.len());
        for &(key, value) in vars {
            originals.push((key, std::env::var(key).ok()));
            // SAFETY: access to the environment is serialized by ENV_LOCK.
            unsafe {
                match value {
                    Some(v) => std::env::set_var(key, v),
                    None => std::env::remove_var(key),
                }
            }
        }
        Self {
            originals,
            _lock: lock,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, original) in self.originals.iter().rev() {
            // SAFETY: the lock is still held until this guard is dropped.
            unsafe {
                match original {
                    Some(v) => std::env::set_var(key, v),
                    None => std::env::remove_var(key),
                }
            }
        }
    }
}

/// Free text with only the first name line filled in.
pub(crate) fn named(name: &str) -> FreeTextInputs {
    FreeTextInputs {
        name_line1: name.to_string(),
        ..FreeTextInputs::default()
    }
}

/// A solid-fill selection with bottom text off and the given name preset.
pub(crate) fn solid_selection(name_preset: &str) -> SelectionState {
    SelectionState {
        fill_type: FillType::Solid,
        bottom_on: false,
        transparent: false,
        name_color: ColorSlot::preset(name_preset),
        ..SelectionState::default()
    }
}
