use super::view_model::ProductDetailsViewModel;
use crate::shared::api_utils::use_api;
use contracts::domain::a004_product::aggregate::{Product, CATEGORIES};
use leptos::prelude::*;

#[component]
pub fn ProductDetails(
    initial: Option<Product>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = ProductDetailsViewModel::new(initial);
    let api_client = use_api();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.save_command(api_client.clone(), on_saved);
    };

    view! {
        <form class="details-container product-details" on:submit=on_submit>
            <div class="details-header">
                <h3>{move || if vm.is_edit_mode() { "商品を編集" } else { "商品を追加" }}</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="details-form">
                <div class="form-row">
                    <div class="form-group">
                        <label for="product-code">"商品コード" <span class="required">"*"</span></label>
                        <input
                            type="text"
                            id="product-code"
                            required
                            prop:value=move || vm.form.with(|f| f.code.clone())
                            on:input=move |ev| vm.form.update(|f| f.code = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="product-name">"商品名" <span class="required">"*"</span></label>
                        <input
                            type="text"
                            id="product-name"
                            required
                            prop:value=move || vm.form.with(|f| f.name.clone())
                            on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                        />
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="product-category">"カテゴリ"</label>
                        <select
                            id="product-category"
                            prop:value=move || vm.form.with(|f| f.category.clone())
                            on:change=move |ev| vm.form.update(|f| f.category = event_target_value(&ev))
                        >
                            <option value="">"選択してください"</option>
                            {CATEGORIES
                                .iter()
                                .map(|c| view! { <option value=*c>{*c}</option> })
                                .collect_view()}
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="product-price">"価格"</label>
                        <input
                            type="number"
                            id="product-price"
                            min="0"
                            prop:value=move || vm.form.with(|f| f.price.clone())
                            on:input=move |ev| vm.form.update(|f| f.price = event_target_value(&ev))
                        />
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="product-stock">"在庫数"</label>
                        <input
                            type="number"
                            id="product-stock"
                            min="0"
                            prop:value=move || vm.form.with(|f| f.stock_quantity.clone())
                            on:input=move |ev| vm.form.update(|f| f.stock_quantity = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="product-min-stock">"最小在庫数"</label>
                        <input
                            type="number"
                            id="product-min-stock"
                            min="0"
                            prop:value=move || vm.form.with(|f| f.minimum_stock.clone())
                            on:input=move |ev| vm.form.update(|f| f.minimum_stock = event_target_value(&ev))
                        />
                    </div>
                </div>

                <div class="form-group">
                    <label for="product-description">"説明"</label>
                    <textarea
                        id="product-description"
                        rows="3"
                        prop:value=move || vm.form.with(|f| f.description.clone())
                        on:input=move |ev| vm.form.update(|f| f.description = event_target_value(&ev))
                    ></textarea>
                </div>

                <div class="form-group">
                    <label for="product-image">"画像URL"</label>
                    <input
                        type="url"
                        id="product-image"
                        prop:value=move || vm.form.with(|f| f.image_url.clone())
                        on:input=move |ev| vm.form.update(|f| f.image_url = event_target_value(&ev))
                    />
                    {move || vm.image_preview().map(|src| view! {
                        <img class="product-details__preview" src=src alt="商品画像" />
                    })}
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
