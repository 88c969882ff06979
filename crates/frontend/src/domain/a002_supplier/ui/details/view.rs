use super::view_model::SupplierDetailsViewModel;
use crate::shared::api_utils::use_api;
use contracts::domain::a002_supplier::aggregate::{Supplier, SupplierStatus};
use contracts::shared::status::HasStatusDisplay;
use leptos::prelude::*;

#[component]
pub fn SupplierDetails(
    initial: Option<Supplier>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = SupplierDetailsViewModel::new(initial);
    let api_client = use_api();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.save_command(api_client.clone(), on_saved);
    };

    view! {
        <form class="details-container supplier-details" on:submit=on_submit>
            <div class="details-header">
                <h3>{move || vm.title()}</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="details-form">
                <div class="form-row">
                    <div class="form-group">
                        <label for="supplier-code">"取引先コード" <span class="required">"*"</span></label>
                        <input
                            type="text"
                            id="supplier-code"
                            required
                            prop:value=move || vm.form.with(|f| f.code.clone())
                            on:input=move |ev| vm.form.update(|f| f.code = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="supplier-name">"取引先名" <span class="required">"*"</span></label>
                        <input
                            type="text"
                            id="supplier-name"
                            required
                            prop:value=move || vm.form.with(|f| f.name.clone())
                            on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                        />
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="supplier-contact">"担当者"</label>
                        <input
                            type="text"
                            id="supplier-contact"
                            prop:value=move || vm.form.with(|f| f.contact_person.clone())
                            on:input=move |ev| vm.form.update(|f| f.contact_person = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="supplier-status">"ステータス"</label>
                        <select
                            id="supplier-status"
                            prop:value=move || vm.form.with(|f| f.status.as_str().to_string())
                            on:change=move |ev| {
                                vm.form.update(|f| f.status = SupplierStatus::from(event_target_value(&ev)))
                            }
                        >
                            {SupplierStatus::SELECTABLE
                                .iter()
                                .map(|s| view! { <option value=s.as_str().to_string()>{s.display().label}</option> })
                                .collect_view()}
                        </select>
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="supplier-email">"メールアドレス"</label>
                        <input
                            type="email"
                            id="supplier-email"
                            prop:value=move || vm.form.with(|f| f.email.clone())
                            on:input=move |ev| vm.form.update(|f| f.email = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="supplier-phone">"電話番号"</label>
                        <input
                            type="tel"
                            id="supplier-phone"
                            prop:value=move || vm.form.with(|f| f.phone.clone())
                            on:input=move |ev| vm.form.update(|f| f.phone = event_target_value(&ev))
                        />
                    </div>
                </div>

                <div class="form-group">
                    <label for="supplier-address">"住所"</label>
                    <input
                        type="text"
                        id="supplier-address"
                        prop:value=move || vm.form.with(|f| f.address.clone())
                        on:input=move |ev| vm.form.update(|f| f.address = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="supplier-notes">"備考"</label>
                    <textarea
                        id="supplier-notes"
                        rows="3"
                        prop:value=move || vm.form.with(|f| f.notes.clone())
                        on:input=move |ev| vm.form.update(|f| f.notes = event_target_value(&ev))
                    ></textarea>
                </div>
            </div>

            <div class="details-actions">
                <button type="button" class="btn-secondary" on:click=move |_| on_cancel.run(())>
                    "キャンセル"
                </button>
                <button type="submit" class="btn-primary" disabled=move || vm.saving.get()>
                    {move || if vm.saving.get() { "保存中..." } else { "保存" }}
                </button>
            </div>
        </form>
    }
}
