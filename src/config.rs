/// Backend API origin. Overridable at compile time so local builds can point
/// at a dev server without touching the source.
pub fn get_backend_url() -> String {
    option_env!("BACKEND_URL")
        .unwrap_or("https://api.arsaekspertiz.com")
        .to_string()
}

/// Hosted auth provider entry page. Login redirects the whole browser there;
/// the provider sends the user back to /auth/callback with a session id in
/// the URL fragment.
pub fn get_auth_url() -> String {
    option_env!("AUTH_URL")
        .unwrap_or("https://auth.emergentagent.com")
        .to_string()
}
