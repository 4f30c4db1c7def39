use crate::config;
use crate::models::{CreditsResponse, User};
use crate::utils::api::Api;
use crate::utils::session;
use crate::Route;
use wasm_bindgen_futures::spawn_local;
use web_sys::window;
use yew::prelude::*;
use yew_router::prelude::*;

/// A zero bump is the mount value; the mount effect already fetched, so only
/// later bumps trigger a re-fetch.
fn should_refetch(bump: u32) -> bool {
    bump > 0
}

/// Badge copy. Anonymous visitors see their position in the free quota,
/// logged-in users their purchased balance.
fn credits_label(remaining: i32, is_authenticated: bool) -> String {
    if is_authenticated {
        format!("{} Hak", remaining.max(0))
    } else {
        format!("{}/5 Hak Kaldı", remaining.clamp(0, 5))
    }
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    /// Bumped by pages to force a credits re-fetch (after an analysis or a
    /// payment confirmation).
    #[prop_or_default]
    pub refresh: u32,
}

#[function_component]
pub fn Header(props: &HeaderProps) -> Html {
    let credits = use_state(|| None::<CreditsResponse>);
    let user = use_state(session::load_cached_user);

    let fetch_credits = {
        let credits = credits.clone();
        move || {
            let credits = credits.clone();
            spawn_local(async move {
                match Api::get("/api/credits").send().await {
                    Ok(response) => {
                        if response.ok() {
                            if let Ok(data) = response.json::<CreditsResponse>().await {
                                credits.set(Some(data));
                            }
                        }
                    }
                    Err(_) => {
                        gloo_console::error!("Failed to fetch credits");
                    }
                }
            });
        }
    };

    // Validate the cached identity and poll the balance.
    {
        let user = user.clone();
        let fetch_credits = fetch_credits.clone();
        use_effect_with_deps(
            move |_| {
                {
                    let user = user.clone();
                    spawn_local(async move {
                        match Api::get("/api/auth/me").send().await {
                            Ok(response) if response.ok() => {
                                if let Ok(me) = response.json::<User>().await {
                                    session::cache_user(&me);
                                    user.set(Some(me));
                                }
                            }
                            Ok(_) => {
                                // 401: cookie expired or never logged in.
                                session::clear_cached_user();
                                user.set(None);
                            }
                            Err(_) => {}
                        }
                    });
                }

                fetch_credits();
                let interval = gloo_timers::callback::Interval::new(30_000, move || {
                    fetch_credits();
                });
                move || drop(interval)
            },
            (),
        );
    }

    // Pages bump `refresh` when they already know the balance changed.
    {
        let fetch_credits = fetch_credits.clone();
        use_effect_with_deps(
            move |refresh: &u32| {
                if should_refetch(*refresh) {
                    fetch_credits();
                }
                || ()
            },
            props.refresh,
        );
    }

    let on_login = Callback::from(move |_| {
        if let Some(w) = window() {
            let origin = w.location().origin().unwrap_or_default();
            let auth_url = format!(
                "{}/?redirect={}/auth/callback",
                config::get_auth_url(),
                origin
            );
            let _ = w.location().set_href(&auth_url);
        }
    });

    let on_logout = {
        let user = user.clone();
        let fetch_credits = fetch_credits.clone();
        Callback::from(move |_| {
            let user = user.clone();
            let fetch_credits = fetch_credits.clone();
            spawn_local(async move {
                let _ = Api::post("/api/auth/logout").send().await;
                session::clear_cached_user();
                user.set(None);
                fetch_credits();
            });
        })
    };

    html! {
        <>
        <header class="site-header">
            <div class="header-inner">
                <Link<Route> to={Route::Home} classes="logo">
                    {"ArsaEkspertizAI"}
                </Link<Route>>
                <nav class="header-nav">
                    <Link<Route> to={Route::Packages} classes="nav-link">
                        {"Paketler"}
                    </Link<Route>>
                    {
                        if let Some(c) = (*credits).as_ref() {
                            html! {
                                <span class="credits-badge">
                                    {credits_label(c.remaining_credits, c.is_authenticated)}
                                </span>
                            }
                        } else {
                            html! { <span class="credits-badge">{"..."}</span> }
                        }
                    }
                    {
                        if let Some(u) = (*user).as_ref() {
                            html! {
                                <>
                                    <span class="user-name">{u.name.clone()}</span>
                                    <button class="auth-button" onclick={on_logout}>
                                        {"Çıkış"}
                                    </button>
                                </>
                            }
                        } else {
                            html! {
                                <button class="auth-button" onclick={on_login}>
                                    {"Giriş Yap"}
                                </button>
                            }
                        }
                    }
                </nav>
            </div>
        </header>
        <style>
            {r#"
.site-header {
    border-bottom: 1px solid #e5e5e5;
}
.header-inner {
    max-width: 960px;
    margin: 0 auto;
    padding: 1rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 1rem;
}
.logo {
    font-size: 1.25rem;
    font-weight: 600;
    text-decoration: none;
    color: #111;
}
.header-nav {
    display: flex;
    align-items: center;
    gap: 1rem;
}
.nav-link {
    color: #555;
    text-decoration: none;
    font-size: 0.95rem;
}
.nav-link:hover {
    color: #111;
}
.credits-badge {
    background: #111;
    color: #fff;
    padding: 0.4rem 1rem;
    border-radius: 999px;
    font-size: 0.85rem;
    font-weight: 500;
    white-space: nowrap;
}
.user-name {
    color: #555;
    font-size: 0.9rem;
}
.auth-button {
    background: #fff;
    color: #111;
    border: 1px solid #111;
    border-radius: 6px;
    padding: 0.4rem 1rem;
    font-size: 0.9rem;
    cursor: pointer;
    transition: all 0.2s ease;
}
.auth-button:hover {
    background: #111;
    color: #fff;
}
@media (max-width: 600px) {
    .user-name { display: none; }
}
            "#}
        </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::{credits_label, should_refetch};

    #[test]
    fn anonymous_label_shows_quota_out_of_five() {
        assert_eq!(credits_label(3, false), "3/5 Hak Kaldı");
        assert_eq!(credits_label(0, false), "0/5 Hak Kaldı");
    }

    #[test]
    fn authenticated_label_shows_balance() {
        assert_eq!(credits_label(42, true), "42 Hak");
    }

    #[test]
    fn negative_balances_never_render() {
        assert_eq!(credits_label(-1, true), "0 Hak");
        assert_eq!(credits_label(-1, false), "0/5 Hak Kaldı");
    }

    #[test]
    fn initial_bump_does_not_refetch() {
        assert!(!should_refetch(0));
        assert!(should_refetch(1));
        assert!(should_refetch(2));
    }
}
