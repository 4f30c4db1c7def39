use crate::models::User;
use web_sys::{window, Storage};

const SESSION_ID_KEY: &str = "session_id";
const USER_KEY: &str = "user";

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

/// Anonymous session id, generated once per browser and kept in localStorage.
/// The backend uses it to track the free analysis quota before login.
pub fn get_or_create_session_id() -> Option<String> {
    let storage = local_storage()?;
    if let Ok(Some(existing)) = storage.get_item(SESSION_ID_KEY) {
        if !existing.is_empty() {
            return Some(existing);
        }
    }
    let id = format_session_id(js_sys::Date::now() as u64, js_sys::Math::random());
    let _ = storage.set_item(SESSION_ID_KEY, &id);
    Some(id)
}

/// Cache the user returned by the auth exchange so the header can render the
/// logged-in state immediately. The authoritative session is the httpOnly
/// cookie set by the backend; this cache is display-only.
pub fn cache_user(user: &User) {
    if let Some(storage) = local_storage() {
        if let Ok(json) = serde_json::to_string(user) {
            let _ = storage.set_item(USER_KEY, &json);
        }
    }
}

pub fn load_cached_user() -> Option<User> {
    let storage = local_storage()?;
    let json = storage.get_item(USER_KEY).ok().flatten()?;
    serde_json::from_str(&json).ok()
}

pub fn clear_cached_user() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(USER_KEY);
    }
}

/// `session-<millis>-<9 base36 chars>`, same shape the backend has always
/// received from anonymous clients.
fn format_session_id(millis: u64, random: f64) -> String {
    format!("session-{}-{}", millis, base36_suffix(random, 9))
}

fn base36_suffix(fraction: f64, len: usize) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut frac = fraction.clamp(0.0, 0.999_999_999);
    let mut out = String::with_capacity(len);
    for _ in 0..len {
        frac *= 36.0;
        let idx = (frac as usize).min(35);
        out.push(DIGITS[idx] as char);
        frac -= idx as f64;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_id_has_expected_shape() {
        let id = format_session_id(1700000000000, 0.123456789);
        let parts: Vec<&str> = id.splitn(3, '-').collect();
        assert_eq!(parts[0], "session");
        assert_eq!(parts[1], "1700000000000");
        assert_eq!(parts[2].len(), 9);
    }

    #[test]
    fn base36_suffix_uses_only_base36_digits() {
        for fraction in [0.0, 0.1, 0.5, 0.999, 0.33333] {
            let suffix = base36_suffix(fraction, 9);
            assert_eq!(suffix.len(), 9);
            assert!(suffix
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn base36_suffix_is_deterministic_per_fraction() {
        assert_eq!(base36_suffix(0.42, 9), base36_suffix(0.42, 9));
        assert_ne!(base36_suffix(0.42, 9), base36_suffix(0.43, 9));
    }

    #[test]
    fn out_of_range_fraction_is_clamped() {
        let suffix = base36_suffix(1.5, 9);
        assert_eq!(suffix.len(), 9);
        assert!(suffix.starts_with('z'));
    }
}
