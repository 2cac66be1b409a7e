//! Personality test wizard and result pages.

use leptos::*;
use leptos_router::{use_navigate, use_params_map, NavigateOptions, Redirect, A};
use newmeclass::api::endpoints::encode_component;
use newmeclass::models::{test_title, TestResult, TEST_TYPES};
use newmeclass::{
    Advance, Backend, BackendAccess, TestWizard, Toast, ValidationError, WizardError, WizardState,
};

use crate::components::use_toaster;
use crate::services::GlooBackend;

/// Result of the last completed test, carried from the wizard to the
/// result page.
#[derive(Clone, Copy)]
pub struct LastResult(pub RwSignal<Option<TestResult>>);

fn result_route(test_type: &str, result: &TestResult) -> String {
    format!(
        "/test/result/{}/{}",
        encode_component(test_type),
        encode_component(&result.result)
    )
}

#[component]
pub fn PersonalityTestsPage() -> impl IntoView {
    view! {
        <div class="container page tests-page">
            <h1>"Tes Kepribadian"</h1>
            <div class="card-grid">
                {TEST_TYPES
                    .iter()
                    .map(|t| view! {
                        <div class="card">
                            <h3>{test_title(t)}</h3>
                            <A href=format!("/test/{}", t) class="button-primary">"Mulai Tes"</A>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn TestPage() -> impl IntoView {
    let params = use_params_map();
    let test_type = params.with_untracked(|p| p.get("testType").cloned().unwrap_or_default());
    let toaster = use_toaster();
    let navigate = store_value(use_navigate());
    let last_result = use_context::<LastResult>();

    let wizard = create_rw_signal(TestWizard::loading(&test_type, false));
    let test_type = store_value(test_type);

    let load = move || {
        spawn_local(async move {
            let backend = GlooBackend::default();
            let test_type = test_type.get_value();
            let loaded = TestWizard::load(&backend, &BackendAccess::new(&backend), &test_type).await;
            wizard.try_set(loaded);
        });
    };
    load();

    let retry = move |_| {
        if wizard.try_update(|w| w.retry()).is_some_and(|r| r.is_ok()) {
            load();
        }
    };

    let submit = move || {
        match wizard.try_update(|w| w.begin_submit()) {
            Some(Ok(submission)) => spawn_local(async move {
                let outcome = GlooBackend::default().submit_test(&submission).await;
                let finished = wizard.try_update(|w| w.finish_submit(outcome).cloned());
                match finished {
                    Some(Ok(result)) => {
                        let route = result_route(&submission.test_type, &result);
                        if let Some(LastResult(slot)) = last_result {
                            slot.set(Some(result));
                        }
                        navigate.with_value(|nav| nav(&route, NavigateOptions::default()));
                    }
                    Some(Err(e)) => toaster.push(Toast::error(
                        "Gagal Mengirim Jawaban",
                        match &e {
                            WizardError::Api(api) => api.user_message("Terjadi kesalahan. Silakan coba lagi."),
                            other => other.to_string(),
                        },
                    )),
                    None => {}
                }
            }),
            Some(Err(WizardError::Validation(e @ ValidationError::UnansweredQuestions(_)))) => {
                toaster.push(Toast::error("Pertanyaan Belum Dijawab", e.user_message()));
            }
            Some(Err(e)) => log::warn!("Submit ignored: {}", e),
            None => {}
        }
    };

    let next = move |_| {
        let advanced = wizard.try_update(|w| w.next());
        if let Some(Ok(Advance::Locked)) = advanced {
            log::info!("🔒 Premium question reached");
        }
    };
    let previous = move |_| {
        wizard.update(|w| {
            if let Err(e) = w.previous() {
                log::warn!("{}", e);
            }
        });
    };

    let question_view = move || {
        wizard.with(|w| {
            let question = w.current()?.clone();
            let selected = w.answer(&question.id);
            let number = w.index() + 1;
            let total = w.questions().len();
            let progress = w.progress() * 100.0;
            let is_last = w.is_last();
            let at_start = w.index() == 0;

            Some(view! {
                <div class="wizard">
                    <div class="progress-bar">
                        <div class="progress-fill" style=format!("width: {:.0}%;", progress)></div>
                    </div>
                    <div class="wizard-count">
                        {format!("Pertanyaan {} dari {}", number, total)}
                        {question.is_premium.then(|| view! { <span class="badge">"Premium"</span> })}
                    </div>
                    <h2 class="wizard-question">{question.question.clone()}</h2>
                    <div class="wizard-options">
                        {question
                            .options
                            .iter()
                            .enumerate()
                            .map(|(i, option)| view! {
                                <button
                                    class="wizard-option"
                                    class:selected=selected == Some(i)
                                    on:click=move |_| {
                                        wizard.update(|w| {
                                            if let Err(e) = w.select(i) {
                                                log::warn!("{}", e);
                                            }
                                        });
                                    }
                                >
                                    {option.clone()}
                                </button>
                            })
                            .collect_view()}
                    </div>
                    <div class="wizard-nav">
                        <button class="button-secondary" disabled=at_start on:click=previous>
                            "Sebelumnya"
                        </button>
                        {if is_last {
                            view! {
                                <button class="button-primary" on:click=move |_| submit()>
                                    "Lihat Hasil"
                                </button>
                            }
                        } else {
                            view! {
                                <button class="button-primary" on:click=next>
                                    "Selanjutnya"
                                </button>
                            }
                        }}
                    </div>
                </div>
            })
        })
    };

    let lock_view = move || {
        let upgrade = wizard.with_untracked(|w| w.upgrade_target());
        view! {
            <div class="premium-lock">
                <div class="lock-icon">"🔒"</div>
                <h2>"Pertanyaan Premium"</h2>
                <p>
                    "Pertanyaan berikutnya hanya tersedia untuk pengguna premium. "
                    "Upgrade untuk hasil yang lebih lengkap, atau lihat hasil dari pertanyaan gratis."
                </p>
                <div class="wizard-nav">
                    <button class="button-secondary" on:click=move |_| {
                        wizard.update(|w| {
                            if let Err(e) = w.back_to_questions() {
                                log::warn!("{}", e);
                            }
                        });
                    }>
                        "Kembali"
                    </button>
                    <button class="button-secondary" on:click=move |_| submit()>
                        "Lihat Hasil Gratis"
                    </button>
                    <button class="button-primary" on:click=move |_| {
                        navigate.with_value(|nav| nav(upgrade, NavigateOptions::default()));
                    }>
                        "Upgrade Premium"
                    </button>
                </div>
            </div>
        }
    };

    view! {
        <div class="container page test-page">
            <h1>{move || test_title(&test_type.get_value())}</h1>
            {move || match wizard.with(|w| w.state().clone()) {
                WizardState::Loading => view! { <div class="loading">"Memuat pertanyaan..."</div> }.into_view(),
                WizardState::InProgress => question_view().into_view(),
                WizardState::PremiumLock => lock_view().into_view(),
                WizardState::Submitting(_) => view! { <div class="loading">"Menghitung hasil..."</div> }.into_view(),
                WizardState::Completed(_) => view! { <div class="loading">"Selesai!"</div> }.into_view(),
                WizardState::Empty => view! {
                    <div class="empty">"Belum ada pertanyaan untuk tes ini."</div>
                }.into_view(),
                WizardState::Failed(e) => view! {
                    <div class="error-message">
                        {e.user_message("Gagal memuat pertanyaan.")}
                        <button class="button-secondary" on:click=retry>"Coba Lagi"</button>
                    </div>
                }.into_view(),
            }}
        </div>
    }
}

#[component]
pub fn ResultPage() -> impl IntoView {
    let result = use_context::<LastResult>().and_then(|LastResult(slot)| slot.get_untracked());

    let Some(result) = result else {
        return view! { <Redirect path="/personality-tests"/> }.into_view();
    };

    let title = match result.description_field("title") {
        t if t.is_empty() => result.result.clone(),
        t => t,
    };
    let description = result.description_field("description");
    let percentages = result.percentages();

    view! {
        <div class="container page result-page">
            <h1>"Hasil Tes"</h1>
            <h2 class="result-title">{title}</h2>
            <p class="result-description">{description}</p>
            <div class="result-scores">
                {percentages
                    .into_iter()
                    .map(|(kind, pct)| view! {
                        <div class="score-row">
                            <span class="score-label">{kind}</span>
                            <div class="progress-bar">
                                <div class="progress-fill" style=format!("width: {:.0}%;", pct)></div>
                            </div>
                            <span class="score-value">{format!("{:.0}%", pct)}</span>
                        </div>
                    })
                    .collect_view()}
            </div>
            <A href="/personality-tests" class="button-secondary">"Tes Lainnya"</A>
        </div>
    }
    .into_view()
}
