use crate::models::{SessionExchangeRequest, User};
use crate::utils::api::{error_detail, Api};
use crate::utils::session;
use crate::Route;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys::window;
use yew::prelude::*;
use yew_router::prelude::*;

/// Pull the opaque session id out of the URL fragment the hosted auth
/// provider redirects back with (`#session_id=...`, possibly with further
/// `&`-separated params).
pub fn parse_session_id(fragment: &str) -> Option<String> {
    let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
    for pair in fragment.split('&') {
        let mut parts = pair.splitn(2, '=');
        if parts.next() == Some("session_id") {
            match parts.next() {
                Some(value) if !value.is_empty() => return Some(value.to_string()),
                _ => return None,
            }
        }
    }
    None
}

#[derive(Clone, PartialEq)]
enum CallbackState {
    Exchanging,
    Done,
    Failed(String),
}

#[function_component]
pub fn AuthCallback() -> Html {
    let navigator = use_navigator().unwrap();
    let state = use_state(|| CallbackState::Exchanging);

    fn noop() {}

    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let fragment = window()
                    .and_then(|w| w.location().hash().ok())
                    .unwrap_or_default();

                let Some(session_id) = parse_session_id(&fragment) else {
                    state.set(CallbackState::Failed(
                        "Oturum bilgisi bulunamadı. Lütfen tekrar giriş yapın.".to_string(),
                    ));
                    return noop;
                };

                spawn_local(async move {
                    let request = SessionExchangeRequest { session_id };
                    match Api::post("/api/auth/session")
                        .json(&request)
                        .expect("Failed to serialize session exchange request")
                        .send()
                        .await
                    {
                        Ok(response) => {
                            if response.ok() {
                                match response.json::<User>().await {
                                    Ok(user) => {
                                        session::cache_user(&user);
                                        // Drop the fragment so the token never
                                        // lingers in the address bar or history.
                                        if let Some(w) = window() {
                                            if let Ok(history) = w.history() {
                                                let _ = history.replace_state_with_url(
                                                    &JsValue::NULL,
                                                    "",
                                                    Some("/auth/callback"),
                                                );
                                            }
                                        }
                                        state.set(CallbackState::Done);
                                        TimeoutFuture::new(1_500).await;
                                        navigator.push(&Route::Home);
                                    }
                                    Err(_) => {
                                        state.set(CallbackState::Failed(
                                            "Sunucu yanıtı okunamadı.".to_string(),
                                        ));
                                    }
                                }
                            } else {
                                let detail = error_detail(
                                    response,
                                    "Giriş yapılırken bir hata oluştu.",
                                )
                                .await;
                                state.set(CallbackState::Failed(detail));
                            }
                        }
                        Err(_) => {
                            state.set(CallbackState::Failed(
                                "Sunucuya ulaşılamadı. Lütfen tekrar deneyin.".to_string(),
                            ));
                        }
                    }
                });
                noop
            },
            (),
        );
    }

    html! {
        <>
        <div class="callback-container">
            <div class="callback-panel">
                {
                    match &*state {
                        CallbackState::Exchanging => html! {
                            <>
                                <div class="spinner"></div>
                                <h2>{"Giriş yapılıyor..."}</h2>
                                <p>{"Oturumunuz doğrulanıyor, lütfen bekleyin."}</p>
                            </>
                        },
                        CallbackState::Done => html! {
                            <>
                                <div class="success-check">{"✓"}</div>
                                <h2>{"Giriş başarılı!"}</h2>
                                <p>{"Ana sayfaya yönlendiriliyorsunuz..."}</p>
                            </>
                        },
                        CallbackState::Failed(message) => html! {
                            <>
                                <h2>{"Giriş başarısız"}</h2>
                                <p class="callback-error">{message}</p>
                                <Link<Route> to={Route::Home} classes="back-home-link">
                                    {"Ana sayfaya dön"}
                                </Link<Route>>
                            </>
                        },
                    }
                }
            </div>
        </div>
        <style>
            {r#"
.callback-container {
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 1rem;
}
.callback-panel {
    text-align: center;
    max-width: 420px;
    width: 100%;
    padding: 3rem 2rem;
    border: 2px solid #111;
    border-radius: 12px;
}
.callback-panel h2 {
    margin: 1rem 0 0.5rem;
}
.callback-panel p {
    color: #555;
}
.spinner {
    width: 40px;
    height: 40px;
    margin: 0 auto;
    border: 4px solid #e5e5e5;
    border-top-color: #111;
    border-radius: 50%;
    animation: spin 0.8s linear infinite;
}
@keyframes spin {
    to { transform: rotate(360deg); }
}
.success-check {
    width: 48px;
    height: 48px;
    margin: 0 auto;
    border-radius: 50%;
    background: #111;
    color: #fff;
    font-size: 1.5rem;
    line-height: 48px;
}
.callback-error {
    color: #b91c1c;
    background: rgba(185, 28, 28, 0.08);
    padding: 0.8rem;
    border-radius: 8px;
}
.back-home-link {
    display: inline-block;
    margin-top: 1rem;
    font-weight: 600;
    text-decoration: underline;
}
            "#}
        </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::parse_session_id;

    #[test]
    fn parses_plain_fragment() {
        assert_eq!(
            parse_session_id("#session_id=abc123"),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn parses_fragment_without_hash_prefix() {
        assert_eq!(
            parse_session_id("session_id=abc123"),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn picks_session_id_among_other_params() {
        assert_eq!(
            parse_session_id("#state=xyz&session_id=tok-1&foo=bar"),
            Some("tok-1".to_string())
        );
    }

    #[test]
    fn missing_key_yields_none() {
        assert_eq!(parse_session_id("#state=xyz&foo=bar"), None);
        assert_eq!(parse_session_id(""), None);
        assert_eq!(parse_session_id("#"), None);
    }

    #[test]
    fn empty_value_yields_none() {
        assert_eq!(parse_session_id("#session_id="), None);
        assert_eq!(parse_session_id("#session_id"), None);
    }

    #[test]
    fn value_may_contain_equals_sign() {
        assert_eq!(
            parse_session_id("#session_id=a=b"),
            Some("a=b".to_string())
        );
    }
}
