use super::view_model::ItemDetailsViewModel;
use crate::shared::api_utils::use_api;
use contracts::domain::a003_item::aggregate::Item;
use leptos::prelude::*;

#[component]
pub fn ItemDetails(
    initial: Option<Item>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = ItemDetailsViewModel::new(initial);
    let api_client = use_api();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.save_command(api_client.clone(), on_saved);
    };

    view! {
        <form class="details-container item-details" on:submit=on_submit>
            <div class="details-header">
                <h3>{move || if vm.is_edit_mode() { "部品を編集" } else { "部品を追加" }}</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="details-form">
                <div class="form-row">
                    <div class="form-group">
                        <label for="item-code">"部品コード" <span class="required">"*"</span></label>
                        <input
                            type="text"
                            id="item-code"
                            required
                            prop:value=move || vm.form.with(|f| f.code.clone())
                            on:input=move |ev| vm.form.update(|f| f.code = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="item-name">"部品名" <span class="required">"*"</span></label>
                        <input
                            type="text"
                            id="item-name"
                            required
                            prop:value=move || vm.form.with(|f| f.name.clone())
                            on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                        />
                    </div>
                </div>

                <div class="form-group">
                    <label for="item-description">"説明"</label>
                    <textarea
                        id="item-description"
                        rows="2"
                        prop:value=move || vm.form.with(|f| f.description.clone())
                        on:input=move |ev| vm.form.update(|f| f.description = event_target_value(&ev))
                    ></textarea>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="item-spec">"仕様"</label>
                        <input
                            type="text"
                            id="item-spec"
                            prop:value=move || vm.form.with(|f| f.specification.clone())
                            on:input=move |ev| vm.form.update(|f| f.specification = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="item-unit">"単位"</label>
                        <input
                            type="text"
                            id="item-unit"
                            prop:value=move || vm.form.with(|f| f.unit.clone())
                            on:input=move |ev| vm.form.update(|f| f.unit = event_target_value(&ev))
                        />
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="item-price">"単価"</label>
                        <input
                            type="number"
                            id="item-price"
                            min="0"
                            step="0.01"
                            prop:value=move || vm.form.with(|f| f.unit_price.clone())
                            on:input=move |ev| vm.form.update(|f| f.unit_price = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="item-min-stock">"最小在庫"</label>
                        <input
                            type="number"
                            id="item-min-stock"
                            min="0"
                            prop:value=move || vm.form.with(|f| f.min_stock.clone())
                            on:input=move |ev| vm.form.update(|f| f.min_stock = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="item-current-stock">"現在庫"</label>
                        <input
                            type="number"
                            id="item-current-stock"
                            min="0"
                            prop:value=move || vm.form.with(|f| f.current_stock.clone())
                            on:input=move |ev| vm.form.update(|f| f.current_stock = event_target_value(&ev))
                        />
                    </div>
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
