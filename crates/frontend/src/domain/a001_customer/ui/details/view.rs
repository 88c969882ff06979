use super::view_model::CustomerDetailsViewModel;
use crate::shared::api_utils::use_api;
use contracts::domain::a001_customer::aggregate::Customer;
use leptos::prelude::*;

#[component]
pub fn CustomerDetails(
    initial: Option<Customer>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = CustomerDetailsViewModel::new(initial);
    let api_client = use_api();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.save_command(api_client.clone(), on_saved);
    };

    view! {
        <form class="details-container customer-details" on:submit=on_submit>
            <div class="details-header">
                <h3>{move || if vm.is_edit_mode() { "顧客を編集" } else { "顧客を追加" }}</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="details-form">
                <div class="form-row">
                    <div class="form-group">
                        <label for="customer-code">"顧客コード" <span class="required">"*"</span></label>
                        <input
                            type="text"
                            id="customer-code"
                            required
                            prop:value=move || vm.form.with(|f| f.code.clone())
                            on:input=move |ev| vm.form.update(|f| f.code = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="customer-name">"顧客名" <span class="required">"*"</span></label>
                        <input
                            type="text"
                            id="customer-name"
                            required
                            prop:value=move || vm.form.with(|f| f.name.clone())
                            on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                        />
                    </div>
                </div>

                <div class="form-group">
                    <label for="customer-contact">"担当者"</label>
                    <input
                        type="text"
                        id="customer-contact"
                        prop:value=move || vm.form.with(|f| f.contact_person.clone())
                        on:input=move |ev| vm.form.update(|f| f.contact_person = event_target_value(&ev))
                    />
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="customer-email">"メールアドレス"</label>
                        <input
                            type="email"
                            id="customer-email"
                            prop:value=move || vm.form.with(|f| f.email.clone())
                            on:input=move |ev| vm.form.update(|f| f.email = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="customer-phone">"電話番号"</label>
                        <input
                            type="tel"
                            id="customer-phone"
                            prop:value=move || vm.form.with(|f| f.phone.clone())
                            on:input=move |ev| vm.form.update(|f| f.phone = event_target_value(&ev))
                        />
                    </div>
                </div>

                <div class="form-group">
                    <label for="customer-address">"住所"</label>
                    <textarea
                        id="customer-address"
                        rows="2"
                        prop:value=move || vm.form.with(|f| f.address.clone())
                        on:input=move |ev| vm.form.update(|f| f.address = event_target_value(&ev))
                    ></textarea>
                </div>

                <label class="form-check">
                    <input
                        type="checkbox"
                        prop:checked=move || vm.form.with(|f| f.is_active)
                        on:change=move |ev| vm.form.update(|f| f.is_active = event_target_checked(&ev))
                    />
                    "有効"
                </label>
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
