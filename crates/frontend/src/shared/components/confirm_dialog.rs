use leptos::prelude::*;
use thaw::*;

/// Yes/no confirmation built on the thaw dialog.
///
/// `open` controls visibility. `on_confirm` runs after the dialog closes.
#[component]
pub fn ConfirmDialog(
    open: RwSignal<bool>,
    #[prop(into)] title: String,
    #[prop(into)] message: Signal<String>,
    #[prop(optional, into)] confirm_label: Option<String>,
    on_confirm: Callback<()>,
) -> impl IntoView {
    let confirm_label = confirm_label.unwrap_or_else(|| "削除".to_string());

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{title}</DialogTitle>
                    <DialogContent>
                        <p>{move || message.get()}</p>
                    </DialogContent>
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| open.set(false)>
                            "キャンセル"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| {
                                open.set(false);
                                on_confirm.run(());
                            }
                        >
                            {confirm_label}
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
