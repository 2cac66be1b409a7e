//! Toast notifications.
//!
//! A [`Toaster`] is provided at the root; pages push [`Toast`]s into it and
//! [`ToastViewport`] renders them until they expire.

use gloo_timers::future::TimeoutFuture;
use leptos::*;
use newmeclass::Toast;

use crate::config::{MAX_TOASTS, TOAST_DURATION_MS};

#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<(u64, Toast)>>,
    next_id: StoredValue<u64>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            toasts: create_rw_signal(Vec::new()),
            next_id: store_value(0),
        }
    }

    /// Show `toast`; it disappears after [`TOAST_DURATION_MS`].
    pub fn push(&self, toast: Toast) {
        if toast.is_error() {
            log::warn!("❌ {}: {}", toast.title, toast.description);
        } else {
            log::info!("✅ {}: {}", toast.title, toast.description);
        }

        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.toasts.update(|toasts| {
            toasts.push((id, toast));
            if toasts.len() > MAX_TOASTS {
                toasts.remove(0);
            }
        });

        let toasts = self.toasts;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            toasts.try_update(|t| t.retain(|(i, _)| *i != id));
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|t| t.retain(|(i, _)| *i != id));
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_toaster() -> Toaster {
    let toaster = Toaster::new();
    provide_context(toaster);
    toaster
}

/// The root toaster, or a detached one outside the app tree.
pub fn use_toaster() -> Toaster {
    use_context::<Toaster>().unwrap_or_default()
}

#[component]
pub fn ToastViewport() -> impl IntoView {
    let toaster = use_toaster();

    view! {
        <div class="toast-viewport">
            <For
                each=move || toaster.toasts.get()
                key=|(id, _)| *id
                children=move |(id, toast)| {
                    view! {
                        <div class=format!("toast {}", toast.kind.css_class())>
                            <span class="toast-icon">{toast.kind.icon()}</span>
                            <div class="toast-body">
                                <div class="toast-title">{toast.title.clone()}</div>
                                <div class="toast-description">{toast.description.clone()}</div>
                            </div>
                            <button class="toast-close" on:click=move |_| toaster.dismiss(id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
