//! Admin login and the team listing editor.

use leptos::ev::SubmitEvent;
use leptos::*;
use leptos_router::{use_navigate, NavigateOptions, Redirect};
use newmeclass::config::ADMIN_TOKEN_KEY;
use newmeclass::flows::team::commit;
use newmeclass::models::{TeamList, TeamMember};
use newmeclass::flows::PendingWrite;
use newmeclass::{Backend, EditorError, LoginForm, TeamEditor, Toast};
use uuid::Uuid;

use crate::components::use_toaster;
use crate::services::{storage, BrowserFile, GlooBackend};

const ADMIN_LOGIN_ROUTE: &str = "/admin/login";
const ADMIN_TEAM_ROUTE: &str = "/admin/team";

#[component]
pub fn AdminLoginPage() -> impl IntoView {
    let toaster = use_toaster();
    let navigate = use_navigate();
    let form = create_rw_signal(LoginForm::default());
    let (sending, set_sending) = create_signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if sending.get_untracked() {
            return;
        }
        let mut current = form.get_untracked();
        let navigate = navigate.clone();
        set_sending.set(true);

        spawn_local(async move {
            let outcome = current.submit(&GlooBackend::default()).await;
            form.try_set(current);
            set_sending.try_set(false);
            match outcome {
                Ok(token) => {
                    storage::set(ADMIN_TOKEN_KEY, &token.access_token);
                    toaster.push(Toast::success("Login Berhasil", format!("Selamat datang, {}", token.user.username)));
                    navigate(ADMIN_TEAM_ROUTE, NavigateOptions::default());
                }
                Err(toast) => toaster.push(toast),
            }
        });
    };

    view! {
        <div class="container page admin-login">
            <h1>"Admin Login"</h1>
            <form class="form" on:submit=on_submit>
                <label>"Email"</label>
                <input
                    type="email"
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    prop:disabled=move || sending.get()
                />
                <label>"Password"</label>
                <input
                    type="password"
                    prop:value=move || form.with(|f| f.password.clone())
                    on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    prop:disabled=move || sending.get()
                />
                <button type="submit" class="button-primary" disabled=move || sending.get()>
                    {move || if sending.get() { "Masuk..." } else { "Masuk" }}
                </button>
            </form>
        </div>
    }
}

fn confirm(message: &str) -> bool {
    gloo_utils::window().confirm_with_message(message).unwrap_or(false)
}

#[component]
pub fn AdminTeamPage() -> impl IntoView {
    if storage::get(ADMIN_TOKEN_KEY).is_none() {
        return view! { <Redirect path=ADMIN_LOGIN_ROUTE/> }.into_view();
    }

    let toaster = use_toaster();
    let navigate = store_value(use_navigate());
    let backend = store_value(GlooBackend::default());
    let editor = create_rw_signal(None::<TeamEditor>);
    let (busy, set_busy) = create_signal(false);

    spawn_local(async move {
        match TeamEditor::load(&backend.get_value()).await {
            Ok(loaded) => {
                editor.try_set(Some(loaded));
            }
            Err(e) => toaster.push(Toast::error("Gagal Memuat", e.user_message())),
        }
    });

    // Write `write`, fold the outcome back into the editor.
    let run_commit = move |write: PendingWrite, done: &'static str| {
        set_busy.set(true);
        spawn_local(async move {
            let outcome = commit(&backend.get_value(), &write).await;
            set_busy.try_set(false);
            let applied = outcome.and_then(|outcome| {
                editor
                    .try_update(|e| e.as_mut().map(|e| e.apply_commit(&write, outcome)))
                    .flatten()
                    .unwrap_or(Err(EditorError::NotLoaded))
            });
            match applied {
                Ok(()) => toaster.push(Toast::success("Berhasil", done)),
                Err(EditorError::Api(e)) if e.is_unauthorized() => {
                    storage::remove(ADMIN_TOKEN_KEY);
                    navigate.with_value(|nav| nav(ADMIN_LOGIN_ROUTE, NavigateOptions::default()));
                }
                Err(e) => toaster.push(Toast::error("Gagal Menyimpan", e.user_message())),
            }
        });
    };

    let on_save = move |ev: SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let planned = editor
            .with_untracked(|e| e.as_ref().map(TeamEditor::plan_save))
            .unwrap_or(Err(EditorError::NotLoaded));
        match planned {
            Ok(write) => run_commit(write, "Data berhasil disimpan"),
            Err(e) => toaster.push(Toast::error("Data Tidak Lengkap", e.user_message())),
        }
    };

    let on_delete = move |id: Uuid| {
        if busy.get_untracked() || !confirm("Hapus data ini?") {
            return;
        }
        let planned = editor
            .with_untracked(|e| e.as_ref().map(|e| e.plan_delete(id)))
            .unwrap_or(Err(EditorError::NotLoaded));
        match planned {
            Ok(write) => run_commit(write, "Data berhasil dihapus"),
            Err(e) => toaster.push(Toast::error("Gagal Menghapus", e.user_message())),
        }
    };

    let on_photo = move |ev: web_sys::Event| {
        let Some(file) = BrowserFile::from_input_event(&ev) else {
            return;
        };
        set_busy.set(true);
        spawn_local(async move {
            let uploaded = backend.get_value().upload_team_photo(&file).await;
            set_busy.try_set(false);
            match uploaded {
                Ok(url) => {
                    editor.try_update(|e| e.as_mut().map(|e| e.set_photo(url)));
                }
                Err(e) => toaster.push(Toast::error("Upload Gagal", e.user_message("Gagal mengupload foto"))),
            }
        });
    };

    let logout = move |_| {
        storage::remove(ADMIN_TOKEN_KEY);
        navigate.with_value(|nav| nav(ADMIN_LOGIN_ROUTE, NavigateOptions::default()));
    };

    let edit_field = move |apply: fn(&mut TeamMember, String)| {
        move |ev: web_sys::Event| {
            let value = event_target_value(&ev);
            editor.update(|e| {
                if let Some(form) = e.as_mut().and_then(TeamEditor::form_mut) {
                    apply(&mut form.member, value);
                }
            });
        }
    };
    let field_value = move |read: fn(&TeamMember) -> String| {
        move || {
            editor.with(|e| {
                e.as_ref()
                    .and_then(TeamEditor::form)
                    .map(|f| read(&f.member))
                    .unwrap_or_default()
            })
        }
    };

    let tabs = move || {
        TeamList::ALL
            .into_iter()
            .map(|list| {
                view! {
                    <button
                        class="tab"
                        class:active=move || editor.with(|e| e.as_ref().is_some_and(|e| e.active() == list))
                        on:click=move |_| editor.update(|e| {
                            if let Some(e) = e.as_mut() {
                                e.select_tab(list);
                            }
                        })
                    >
                        {list.label()}
                    </button>
                }
            })
            .collect_view()
    };

    let rows = move || {
        let assets = backend.get_value();
        editor.with(|e| match e {
            None => view! { <div class="loading">"Memuat data..."</div> }.into_view(),
            Some(e) if e.entries().is_empty() => {
                view! { <div class="empty">"Belum ada data."</div> }.into_view()
            }
            Some(e) => e
                .entries()
                .iter()
                .map(|entry| {
                    let id = entry.id;
                    let photo = (!entry.member.photo.is_empty()).then(|| assets.asset_url(&entry.member.photo));
                    view! {
                        <div class="team-row">
                            {photo.map(|src| view! { <img class="team-photo" src=src alt=""/> })}
                            <div class="team-info">
                                <strong>{entry.member.name.clone()}</strong>
                                <span class="muted">{entry.member.position.clone()}</span>
                            </div>
                            <button
                                class="button-secondary"
                                on:click=move |_| {
                                    let started = editor.try_update(|e| e.as_mut().map(|e| e.start_edit(id)));
                                    if let Some(Some(Err(e))) = started {
                                        toaster.push(Toast::error("Gagal", e.user_message()));
                                    }
                                }
                            >
                                "Edit"
                            </button>
                            <button class="button-danger" on:click=move |_| on_delete(id)>"Hapus"</button>
                        </div>
                    }
                })
                .collect_view(),
        })
    };

    // Only open/close and add/edit switches rebuild the modal.
    let form_title = create_memo(move |_| {
        editor.with(|e| e.as_ref().and_then(TeamEditor::form).map(|f| f.title()))
    });

    let modal = move || {
        let title = form_title.get()?;
        Some(view! {
            <div class="modal-backdrop">
                <form class="modal form" on:submit=on_save>
                    <h2>{title} " Data"</h2>
                    <label>"Nama *"</label>
                    <input
                        type="text"
                        prop:value=field_value(|m| m.name.clone())
                        on:input=edit_field(|m, v| m.name = v)
                    />
                    <label>"Jabatan *"</label>
                    <input
                        type="text"
                        prop:value=field_value(|m| m.position.clone())
                        on:input=edit_field(|m, v| m.position = v)
                    />
                    <label>"Deskripsi"</label>
                    <textarea
                        prop:value=field_value(|m| m.description.clone())
                        on:input=edit_field(|m, v| m.description = v)
                    ></textarea>
                    <label>"Foto"</label>
                    <input type="file" accept="image/*" on:change=on_photo/>
                    <div class="modal-actions">
                        <button
                            type="button"
                            class="button-secondary"
                            on:click=move |_| editor.update(|e| {
                                if let Some(e) = e.as_mut() {
                                    e.cancel();
                                }
                            })
                        >
                            "Batal"
                        </button>
                        <button type="submit" class="button-primary" disabled=move || busy.get()>
                            {move || if busy.get() { "Menyimpan..." } else { "Simpan" }}
                        </button>
                    </div>
                </form>
            </div>
        })
    };

    view! {
        <div class="container page admin-team">
            <div class="admin-header">
                <h1>"Kelola Tim"</h1>
                <button class="button-secondary" on:click=logout>"Logout"</button>
            </div>
            <div class="tabs">{tabs}</div>
            <button
                class="button-primary"
                on:click=move |_| editor.update(|e| {
                    if let Some(e) = e.as_mut() {
                        e.start_add();
                    }
                })
            >
                "+ Tambah"
            </button>
            <div class="team-list">{rows}</div>
            {modal}
        </div>
    }
    .into_view()
}
