use super::view_model::OrderWizardViewModel;
use crate::layout::global_context::use_tabs;
use crate::layout::tabs::{order_detail_key, tab_label_for_key};
use crate::shared::api_utils::use_api;
use crate::shared::components::notification::use_notifications;
use crate::shared::icons::icon;
use crate::shared::number_format::format_yen;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};
use contracts::domain::a005_order::aggregate::{Order, OrderStep};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn OrderWizard(on_close: Callback<()>) -> impl IntoView {
    let vm = OrderWizardViewModel::new();
    let api_client = StoredValue::new(use_api());
    let tabs = use_tabs();
    let notifications = use_notifications();

    vm.load_options(api_client.get_value());

    let on_created = Callback::new(move |order: Order| {
        notifications.success(format!("注文 {} を登録しました", order.order_number()));
        let key = order_detail_key(order.id);
        tabs.open_tab(&key, &tab_label_for_key(&key));
        on_close.run(());
    });

    view! {
        <PageFrame page_id="a005_order_new--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("orders")}
                    <h1 class="page__title">"新規注文"</h1>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                        {icon("x")}
                        " キャンセル"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <ol class="wizard-steps">
                    {OrderStep::ALL
                        .iter()
                        .map(|s| {
                            let s = *s;
                            view! {
                                <li
                                    class="wizard-steps__item"
                                    class=("wizard-steps__item--active", move || vm.step.get() == s)
                                    class=("wizard-steps__item--done", move || vm.step.get().index() > s.index())
                                >
                                    <span class="wizard-steps__number">{s.index() + 1}</span>
                                    <span class="wizard-steps__label">{s.label()}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>

                {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <Show
                    when=move || !vm.options_loading.get()
                    fallback=|| view! {
                        <div class="list-placeholder">
                            <Spinner label="読み込み中..." />
                        </div>
                    }
                >
                    <div class="wizard-body">
                        {move || match vm.step.get() {
                            OrderStep::Customer => customer_step(vm).into_any(),
                            OrderStep::Items => items_step(vm).into_any(),
                            OrderStep::Delivery => delivery_step(vm).into_any(),
                        }}
                    </div>
                </Show>

                <div class="wizard-actions">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled=Signal::derive(move || vm.step.get().prev().is_none())
                        on_click=move |_| vm.prev()
                    >
                        "戻る"
                    </Button>
                    {move || {
                        if vm.step.get().next().is_some() {
                            view! {
                                <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.next()>
                                    "次へ"
                                </Button>
                            }
                            .into_any()
                        } else {
                            view! {
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    disabled=vm.saving
                                    on_click=move |_| vm.submit(api_client.get_value(), on_created)
                                >
                                    {move || if vm.saving.get() { "登録中..." } else { "注文を確定" }}
                                </Button>
                            }
                            .into_any()
                        }
                    }}
                </div>
            </div>
        </PageFrame>
    }
}

fn customer_step(vm: OrderWizardViewModel) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for="order-customer">"顧客" <span class="required">"*"</span></label>
            <select
                id="order-customer"
                prop:value=move || vm.draft.with(|d| d.customer_id.map(|id| id.to_string()).unwrap_or_default())
                on:change=move |ev| vm.select_customer(&event_target_value(&ev))
            >
                <option value="">"顧客を選択してください"</option>
                {move || vm.customers.get()
                    .into_iter()
                    .map(|c| view! { <option value=c.id.to_string()>{format!("{} ({})", c.name, c.code)}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}

fn items_step(vm: OrderWizardViewModel) -> impl IntoView {
    let line_count = Memo::new(move |_| vm.draft.with(|d| d.lines.len()));

    view! {
        <table class="wizard-lines">
            <thead>
                <tr>
                    <th>"商品"</th>
                    <th>"単価"</th>
                    <th>"数量"</th>
                    <th>"小計"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {move || (0..line_count.get())
                    .map(|index| {
                        let line = move || vm.draft.with(|d| d.lines.get(index).cloned().unwrap_or_default());
                        view! {
                            <tr>
                                <td>
                                    <select
                                        prop:value=move || line().item_id.map(|id| id.to_string()).unwrap_or_default()
                                        on:change=move |ev| vm.select_item(index, &event_target_value(&ev))
                                    >
                                        <option value="">"商品を選択してください"</option>
                                        {vm.items.get_untracked()
                                            .into_iter()
                                            .map(|i| view! { <option value=i.id.to_string()>{format!("{} ({})", i.name, i.code)}</option> })
                                            .collect_view()}
                                    </select>
                                </td>
                                <td>{move || format_yen(line().unit_price)}</td>
                                <td>
                                    <input
                                        type="number"
                                        min="1"
                                        class="wizard-lines__quantity"
                                        prop:value=move || line().quantity
                                        on:input=move |ev| vm.set_quantity(index, event_target_value(&ev))
                                    />
                                </td>
                                <td>{move || format_yen(line().subtotal())}</td>
                                <td>
                                    <button
                                        type="button"
                                        class="btn-icon"
                                        title="行を削除"
                                        disabled=move || line_count.get() <= 1
                                        on:click=move |_| vm.remove_line(index)
                                    >
                                        {icon("delete")}
                                    </button>
                                </td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
        <div class="wizard-lines__footer">
            <button type="button" class="btn-secondary" on:click=move |_| vm.add_line()>
                {icon("plus")}
                " 商品を追加"
            </button>
            <span class="order-total">
                <span class="order-total__label">"合計"</span>
                <span class="order-total__value">{move || format_yen(vm.draft.with(|d| d.total_amount()))}</span>
            </span>
        </div>
    }
}

fn delivery_step(vm: OrderWizardViewModel) -> impl IntoView {
    view! {
        <div class="details-form">
            <div class="form-group">
                <label for="order-delivery-date">"配送希望日" <span class="required">"*"</span></label>
                <input
                    type="date"
                    id="order-delivery-date"
                    required
                    prop:value=move || vm.draft.with(|d| d.delivery_date.clone())
                    on:input=move |ev| vm.draft.update(|d| d.delivery_date = event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="order-address">"配送先住所"</label>
                <textarea
                    id="order-address"
                    rows="2"
                    prop:value=move || vm.draft.with(|d| d.shipping_address.clone())
                    on:input=move |ev| vm.draft.update(|d| d.shipping_address = event_target_value(&ev))
                ></textarea>
            </div>
            <div class="form-group">
                <label for="order-notes">"備考"</label>
                <textarea
                    id="order-notes"
                    rows="3"
                    prop:value=move || vm.draft.with(|d| d.notes.clone())
                    on:input=move |ev| vm.draft.update(|d| d.notes = event_target_value(&ev))
                ></textarea>
            </div>

            <div class="order-summary">
                <div>"顧客: " {move || vm.draft.with(|d| d.customer_name.clone())}</div>
                <div>"明細: " {move || vm.draft.with(|d| d.lines.len())} "件"</div>
                <div class="order-total">
                    <span class="order-total__label">"合計"</span>
                    <span class="order-total__value">{move || format_yen(vm.draft.with(|d| d.total_amount()))}</span>
                </div>
            </div>
        </div>
    }
}
