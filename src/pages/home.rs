use crate::components::header::Header;
use crate::models::{AnalysisRequest, AnalysisResponse, CreditsResponse};
use crate::utils::api::{error_detail, Api};
use crate::utils::session;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Client-side gate before the backend is called: every cadastral field must
/// carry something other than whitespace.
fn all_fields_filled(fields: &[&str]) -> bool {
    fields.iter().all(|f| !f.trim().is_empty())
}

fn bind(state: UseStateHandle<String>) -> Callback<InputEvent> {
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        state.set(input.value());
    })
}

#[function_component]
pub fn Home() -> Html {
    let il = use_state(String::new);
    let ilce = use_state(String::new);
    let mahalle = use_state(String::new);
    let ada = use_state(String::new);
    let parsel = use_state(String::new);

    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);
    let analysis = use_state(|| None::<String>);
    let remaining = use_state(|| None::<i32>);
    let header_refresh = use_state(|| 0u32);

    // Initial balance, so the submit button can grey out at zero.
    {
        let remaining = remaining.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    if let Ok(response) = Api::get("/api/credits").send().await {
                        if response.ok() {
                            if let Ok(data) = response.json::<CreditsResponse>().await {
                                remaining.set(Some(data.remaining_credits));
                            }
                        }
                    }
                });
                || ()
            },
            (),
        );
    }

    let onsubmit = {
        let il = il.clone();
        let ilce = ilce.clone();
        let mahalle = mahalle.clone();
        let ada = ada.clone();
        let parsel = parsel.clone();
        let loading = loading.clone();
        let error = error.clone();
        let analysis = analysis.clone();
        let remaining = remaining.clone();
        let header_refresh = header_refresh.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let il = (*il).clone();
            let ilce = (*ilce).clone();
            let mahalle = (*mahalle).clone();
            let ada = (*ada).clone();
            let parsel = (*parsel).clone();
            let loading = loading.clone();
            let error = error.clone();
            let analysis = analysis.clone();
            let remaining = remaining.clone();
            let header_refresh = header_refresh.clone();

            error.set(None);
            analysis.set(None);

            if !all_fields_filled(&[&il, &ilce, &mahalle, &ada, &parsel]) {
                error.set(Some("Lütfen tüm alanları doldurun".to_string()));
                return;
            }

            loading.set(true);

            spawn_local(async move {
                let request = AnalysisRequest {
                    il,
                    ilce,
                    mahalle,
                    ada,
                    parsel,
                    session_id: session::get_or_create_session_id().unwrap_or_default(),
                };

                match Api::post("/api/analyze-property")
                    .json(&request)
                    .expect("Failed to serialize analysis request")
                    .send()
                    .await
                {
                    Ok(response) => {
                        if response.ok() {
                            match response.json::<AnalysisResponse>().await {
                                Ok(result) => {
                                    analysis.set(Some(result.analysis));
                                    remaining.set(Some(result.remaining_credits));
                                    header_refresh.set(*header_refresh + 1);
                                }
                                Err(_) => {
                                    error.set(Some(
                                        "Sunucu yanıtı okunamadı.".to_string(),
                                    ));
                                }
                            }
                        } else {
                            let detail = error_detail(
                                response,
                                "Analiz yapılırken bir hata oluştu",
                            )
                            .await;
                            error.set(Some(detail));
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
        })
    };

    let out_of_credits = matches!(*remaining, Some(n) if n <= 0);

    html! {
        <>
        <Header refresh={*header_refresh} />
        <main class="page-main">
            <div class="hero">
                <h1>{"Arsa İmar Durumu Analizi"}</h1>
                <p>{"Ada ve parsel bilgilerinizi girin, yapay zeka destekli imar analizi alın"}</p>
            </div>

            <div class="form-card">
                <h2>{"Arsa Bilgileri"}</h2>
                <p class="card-description">{"Analiz yapmak istediğiniz arsanın bilgilerini giriniz"}</p>
                <form onsubmit={onsubmit}>
                    <div class="field-row">
                        <div class="field">
                            <label for="il">{"İl"}</label>
                            <input
                                id="il"
                                type="text"
                                placeholder="Örn: Adana"
                                value={(*il).clone()}
                                oninput={bind(il.clone())}
                            />
                        </div>
                        <div class="field">
                            <label for="ilce">{"İlçe"}</label>
                            <input
                                id="ilce"
                                type="text"
                                placeholder="Örn: Seyhan"
                                value={(*ilce).clone()}
                                oninput={bind(ilce.clone())}
                            />
                        </div>
                    </div>
                    <div class="field">
                        <label for="mahalle">{"Mahalle"}</label>
                        <input
                            id="mahalle"
                            type="text"
                            placeholder="Örn: Köprülü"
                            value={(*mahalle).clone()}
                            oninput={bind(mahalle.clone())}
                        />
                    </div>
                    <div class="field-row">
                        <div class="field">
                            <label for="ada">{"Ada"}</label>
                            <input
                                id="ada"
                                type="text"
                                placeholder="Örn: 1234"
                                value={(*ada).clone()}
                                oninput={bind(ada.clone())}
                            />
                        </div>
                        <div class="field">
                            <label for="parsel">{"Parsel"}</label>
                            <input
                                id="parsel"
                                type="text"
                                placeholder="Örn: 56"
                                value={(*parsel).clone()}
                                oninput={bind(parsel.clone())}
                            />
                        </div>
                    </div>
                    <button
                        type="submit"
                        class="analyze-button"
                        disabled={*loading || out_of_credits}
                    >
                        {
                            if *loading {
                                html! { <><span class="button-spinner"></span>{"Analiz Yapılıyor..."}</> }
                            } else {
                                html! { {"Analiz Yap"} }
                            }
                        }
                    </button>
                    {
                        if out_of_credits {
                            html! {
                                <p class="quota-note">
                                    {"Analiz hakkınız kalmadı. Devam etmek için giriş yapın veya kredi satın alın."}
                                </p>
                            }
                        } else {
                            html! {}
                        }
                    }
                </form>
            </div>

            {
                if let Some(message) = (*error).as_ref() {
                    html! { <div class="error-alert">{message}</div> }
                } else {
                    html! {}
                }
            }

            {
                if let Some(text) = (*analysis).as_ref() {
                    html! {
                        <div class="result-card">
                            <h2>{"Analiz Sonucu"}</h2>
                            <div class="result-text">{text}</div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </main>
        <footer class="site-footer">
            {"© 2025 ArsaEkspertizAI - Yapay Zeka Destekli Arsa Analizi"}
        </footer>
        <style>
            {r#"
.page-main {
    max-width: 820px;
    margin: 0 auto;
    padding: 2rem 1rem;
}
.hero {
    text-align: center;
    margin-bottom: 2rem;
}
.hero h1 {
    font-size: 2.4rem;
    margin: 0 0 0.75rem;
}
.hero p {
    color: #555;
    font-size: 1.05rem;
    margin: 0;
}
.form-card, .result-card {
    border: 2px solid #111;
    border-radius: 12px;
    padding: 1.5rem;
    margin-bottom: 1.5rem;
    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.08);
}
.form-card h2, .result-card h2 {
    margin: 0 0 0.25rem;
    font-size: 1.5rem;
}
.card-description {
    color: #666;
    margin: 0 0 1.25rem;
    font-size: 0.95rem;
}
.field-row {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 1rem;
}
.field {
    margin-bottom: 1rem;
}
.field label {
    display: block;
    font-weight: 500;
    margin-bottom: 0.3rem;
}
.field input {
    width: 100%;
    padding: 0.6rem 0.75rem;
    border: 1px solid #ccc;
    border-radius: 6px;
    font-size: 1rem;
}
.field input:focus {
    outline: none;
    border-color: #111;
}
.analyze-button {
    width: 100%;
    padding: 1rem;
    background: #111;
    color: #fff;
    border: none;
    border-radius: 6px;
    font-size: 1.1rem;
    font-weight: 600;
    cursor: pointer;
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    transition: background 0.2s ease;
}
.analyze-button:hover:not(:disabled) {
    background: #333;
}
.analyze-button:disabled {
    background: #888;
    cursor: not-allowed;
}
.button-spinner {
    width: 18px;
    height: 18px;
    border: 2px solid rgba(255, 255, 255, 0.4);
    border-top-color: #fff;
    border-radius: 50%;
    animation: spin 0.8s linear infinite;
}
@keyframes spin {
    to { transform: rotate(360deg); }
}
.quota-note {
    color: #b45309;
    font-size: 0.9rem;
    margin: 0.75rem 0 0;
}
.error-alert {
    border: 1px solid #fca5a5;
    background: #fef2f2;
    color: #b91c1c;
    padding: 1rem;
    border-radius: 8px;
    margin-bottom: 1.5rem;
}
.result-text {
    white-space: pre-wrap;
    line-height: 1.6;
    color: #222;
}
.site-footer {
    border-top: 1px solid #e5e5e5;
    margin-top: 3rem;
    padding: 1.5rem 1rem;
    text-align: center;
    color: #666;
    font-size: 0.9rem;
}
@media (max-width: 600px) {
    .field-row { grid-template-columns: 1fr; }
    .hero h1 { font-size: 1.8rem; }
}
            "#}
        </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::all_fields_filled;

    #[test]
    fn complete_form_passes() {
        assert!(all_fields_filled(&[
            "Adana", "Seyhan", "Köprülü", "1234", "56"
        ]));
    }

    #[test]
    fn any_empty_field_fails() {
        assert!(!all_fields_filled(&["Adana", "", "Köprülü", "1234", "56"]));
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        assert!(!all_fields_filled(&["Adana", "   ", "Köprülü", "1234", "56"]));
    }

    #[test]
    fn no_fields_is_trivially_complete() {
        assert!(all_fields_filled(&[]));
    }
}
