use crate::components::header::Header;
use crate::models::{CreditsResponse, Package, PaymentCreateResponse};
use crate::utils::api::{error_detail, Api};
use crate::utils::session;
use wasm_bindgen_futures::spawn_local;
use web_sys::window;
use yew::prelude::*;

fn format_price(price: f64) -> String {
    format!("{:.0} TL", price)
}

#[function_component]
pub fn Packages() -> Html {
    let packages = use_state(Vec::<Package>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let info = use_state(|| None::<String>);
    let header_refresh = use_state(|| 0u32);

    {
        let packages = packages.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match Api::get("/api/payment/packages").send().await {
                        Ok(response) => {
                            if response.ok() {
                                match response.json::<Vec<Package>>().await {
                                    Ok(list) => packages.set(list),
                                    Err(_) => error.set(Some(
                                        "Paket listesi okunamadı.".to_string(),
                                    )),
                                }
                            } else {
                                error.set(Some("Paketler yüklenemedi.".to_string()));
                            }
                        }
                        Err(_) => {
                            error.set(Some(
                                "Sunucuya ulaşılamadı. Lütfen tekrar deneyin.".to_string(),
                            ));
                        }
                    }
                    loading.set(false);
                });
                || ()
            },
            (),
        );
    }

    let on_buy = {
        let error = error.clone();
        let info = info.clone();
        Callback::from(move |package_id: String| {
            let error = error.clone();
            let info = info.clone();

            if session::load_cached_user().is_none() {
                error.set(Some(
                    "Kredi satın almak için önce giriş yapmalısınız.".to_string(),
                ));
                return;
            }

            spawn_local(async move {
                match Api::post(&format!("/api/payment/create?package_id={}", package_id))
                    .send()
                    .await
                {
                    Ok(response) => {
                        if response.ok() {
                            match response.json::<PaymentCreateResponse>().await {
                                Ok(payment) => {
                                    // Shopier checkout opens in a new tab so the
                                    // user can come back and refresh the balance.
                                    if let Some(w) = window() {
                                        let _ = w.open_with_url_and_target(
                                            &payment.payment_url,
                                            "_blank",
                                        );
                                    }
                                    error.set(None);
                                    info.set(Some(
                                        "Ödeme sayfası yeni sekmede açıldı. Ödemeyi tamamladıktan sonra kredilerinizi güncelleyin."
                                            .to_string(),
                                    ));
                                }
                                Err(_) => {
                                    error.set(Some(
                                        "Ödeme bağlantısı okunamadı.".to_string(),
                                    ));
                                }
                            }
                        } else {
                            let detail =
                                error_detail(response, "Ödeme oluşturulamadı.").await;
                            error.set(Some(detail));
                        }
                    }
                    Err(_) => {
                        error.set(Some(
                            "Sunucuya ulaşılamadı. Lütfen tekrar deneyin.".to_string(),
                        ));
                    }
                }
            });
        })
    };

    // Shopier credits the account through a backend webhook; the client only
    // learns about it by asking for the balance again.
    let on_refresh_credits = {
        let error = error.clone();
        let info = info.clone();
        let header_refresh = header_refresh.clone();
        Callback::from(move |_| {
            let error = error.clone();
            let info = info.clone();
            let header_refresh = header_refresh.clone();
            spawn_local(async move {
                match Api::get("/api/credits").send().await {
                    Ok(response) => {
                        if response.ok() {
                            match response.json::<CreditsResponse>().await {
                                Ok(data) => {
                                    error.set(None);
                                    info.set(Some(format!(
                                        "Güncel bakiyeniz: {} hak",
                                        data.remaining_credits
                                    )));
                                    header_refresh.set(*header_refresh + 1);
                                }
                                Err(_) => {
                                    error.set(Some(
                                        "Bakiye bilgisi okunamadı.".to_string(),
                                    ));
                                }
                            }
                        } else {
                            error.set(Some("Bakiye sorgulanamadı.".to_string()));
                        }
                    }
                    Err(_) => {
                        error.set(Some(
                            "Sunucuya ulaşılamadı. Lütfen tekrar deneyin.".to_string(),
                        ));
                    }
                }
            });
        })
    };

    html! {
        <>
        <Header refresh={*header_refresh} />
        <main class="page-main">
            <div class="hero">
                <h1>{"Kredi Paketleri"}</h1>
                <p>{"İhtiyacınıza uygun paketi seçin, Shopier güvencesiyle ödeyin"}</p>
            </div>

            {
                if let Some(message) = (*error).as_ref() {
                    html! { <div class="error-alert">{message}</div> }
                } else if let Some(message) = (*info).as_ref() {
                    html! { <div class="info-alert">{message}</div> }
                } else {
                    html! {}
                }
            }

            {
                if *loading {
                    html! { <p class="packages-loading">{"Paketler yükleniyor..."}</p> }
                } else {
                    html! {
                        <div class="packages-grid">
                            { packages.iter().map(|pkg| {
                                let on_buy = on_buy.clone();
                                let package_id = pkg.id.clone();
                                html! {
                                    <div class={classes!("package-card", pkg.popular.then_some("popular"))}>
                                        {
                                            if pkg.popular {
                                                html! { <span class="popular-ribbon">{"En Popüler"}</span> }
                                            } else {
                                                html! {}
                                            }
                                        }
                                        <h3>{pkg.name.clone()}</h3>
                                        <div class="package-price">{format_price(pkg.price)}</div>
                                        <div class="package-credits">{format!("{} analiz hakkı", pkg.credits)}</div>
                                        <p class="package-description">{pkg.description.clone()}</p>
                                        <button
                                            class="buy-button"
                                            onclick={Callback::from(move |_| on_buy.emit(package_id.clone()))}
                                        >
                                            {"Satın Al"}
                                        </button>
                                    </div>
                                }
                            }).collect::<Html>() }
                        </div>
                    }
                }
            }

            <div class="refresh-section">
                <p>{"Ödemenizi tamamladınız mı? Krediler birkaç dakika içinde hesabınıza tanımlanır."}</p>
                <button class="refresh-button" onclick={on_refresh_credits}>
                    {"Ödemeyi yaptım, kredileri güncelle"}
                </button>
            </div>
        </main>
        <footer class="site-footer">
            {"© 2025 ArsaEkspertizAI - Yapay Zeka Destekli Arsa Analizi"}
        </footer>
        <style>
            {r#"
.page-main {
    max-width: 960px;
    margin: 0 auto;
    padding: 2rem 1rem;
}
.hero {
    text-align: center;
    margin-bottom: 2rem;
}
.hero h1 {
    font-size: 2.2rem;
    margin: 0 0 0.75rem;
}
.hero p {
    color: #555;
    margin: 0;
}
.packages-loading {
    text-align: center;
    color: #666;
}
.packages-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
    gap: 1.5rem;
    margin-bottom: 2.5rem;
}
.package-card {
    position: relative;
    border: 2px solid #e5e5e5;
    border-radius: 12px;
    padding: 2rem 1.5rem;
    text-align: center;
    transition: all 0.2s ease;
}
.package-card:hover {
    transform: translateY(-4px);
    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.1);
}
.package-card.popular {
    border-color: #111;
}
.popular-ribbon {
    position: absolute;
    top: -12px;
    left: 50%;
    transform: translateX(-50%);
    background: #111;
    color: #fff;
    font-size: 0.75rem;
    font-weight: 600;
    padding: 0.25rem 0.9rem;
    border-radius: 999px;
    white-space: nowrap;
}
.package-card h3 {
    margin: 0 0 0.75rem;
    font-size: 1.2rem;
}
.package-price {
    font-size: 2rem;
    font-weight: 700;
    margin-bottom: 0.25rem;
}
.package-credits {
    color: #555;
    margin-bottom: 0.75rem;
}
.package-description {
    color: #777;
    font-size: 0.9rem;
    min-height: 2.4em;
}
.buy-button {
    width: 100%;
    padding: 0.8rem;
    background: #111;
    color: #fff;
    border: none;
    border-radius: 6px;
    font-size: 1rem;
    font-weight: 600;
    cursor: pointer;
    transition: background 0.2s ease;
}
.buy-button:hover {
    background: #333;
}
.refresh-section {
    text-align: center;
    border-top: 1px solid #e5e5e5;
    padding-top: 2rem;
}
.refresh-section p {
    color: #555;
}
.refresh-button {
    background: #fff;
    color: #111;
    border: 1px solid #111;
    border-radius: 6px;
    padding: 0.7rem 1.5rem;
    font-size: 0.95rem;
    font-weight: 500;
    cursor: pointer;
    transition: all 0.2s ease;
}
.refresh-button:hover {
    background: #111;
    color: #fff;
}
.error-alert {
    border: 1px solid #fca5a5;
    background: #fef2f2;
    color: #b91c1c;
    padding: 1rem;
    border-radius: 8px;
    margin-bottom: 1.5rem;
}
.info-alert {
    border: 1px solid #bfdbfe;
    background: #eff6ff;
    color: #1d4ed8;
    padding: 1rem;
    border-radius: 8px;
    margin-bottom: 1.5rem;
}
.site-footer {
    border-top: 1px solid #e5e5e5;
    margin-top: 3rem;
    padding: 1.5rem 1rem;
    text-align: center;
    color: #666;
    font-size: 0.9rem;
}
            "#}
        </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::format_price;

    #[test]
    fn prices_render_as_whole_lira() {
        assert_eq!(format_price(50.0), "50 TL");
        assert_eq!(format_price(75.0), "75 TL");
        assert_eq!(format_price(100.0), "100 TL");
    }
}
