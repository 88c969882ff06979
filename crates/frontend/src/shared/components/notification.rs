//! Transient success/error messages shown in the bottom-right corner.
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const DISMISS_AFTER_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    id: u64,
    kind: NoticeKind,
    text: String,
}

#[derive(Clone, Copy)]
pub struct NotificationService {
    notices: RwSignal<Vec<Notice>>,
    next_id: StoredValue<u64>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            notices: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn success(&self, text: impl Into<String>) {
        self.push(NoticeKind::Success, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.push(NoticeKind::Error, text.into());
    }

    fn push(&self, kind: NoticeKind, text: String) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.notices.update(|n| n.push(Notice { id, kind, text }));

        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(DISMISS_AFTER_MS).await;
            this.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.notices.update(|n| n.retain(|notice| notice.id != id));
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not found in context")
}

#[component]
pub fn NotificationHost() -> impl IntoView {
    let service = use_notifications();

    view! {
        <div class="notifications">
            <For
                each=move || service.notices.get()
                key=|notice| notice.id
                children=move |notice: Notice| {
                    let id = notice.id;
                    let class = match notice.kind {
                        NoticeKind::Success => "notification notification--success",
                        NoticeKind::Error => "notification notification--error",
                    };
                    view! {
                        <div class=class on:click=move |_| service.dismiss(id)>
                            {notice.text}
                        </div>
                    }
                }
            />
        </div>
    }
}
