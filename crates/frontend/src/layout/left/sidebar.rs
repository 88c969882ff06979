//! Sidebar with top-level entries and the collapsible 連携 group.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    /// Tab key for leaf entries, group id otherwise.
    id: &'static str,
    label: String,
    icon: &'static str,
    items: Vec<(&'static str, String, &'static str)>, // (tab key, label, icon)
}

fn leaf(id: &'static str, icon: &'static str) -> MenuGroup {
    MenuGroup {
        id,
        label: tab_label_for_key(id),
        icon,
        items: vec![],
    }
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        leaf("d400_dashboard", "dashboard"),
        leaf("a005_order", "orders"),
        leaf("a001_customer", "customers"),
        leaf("a003_item", "items"),
        leaf("a004_product", "products"),
        leaf("a002_supplier", "suppliers"),
        leaf("d401_reports", "reports"),
        MenuGroup {
            id: "integrations",
            label: "連携".to_string(),
            icon: "plug",
            items: vec![
                ("u501_excel_sync", tab_label_for_key("u501_excel_sync"), "file-spreadsheet"),
                ("u502_access_sync", tab_label_for_key("u502_access_sync"), "database"),
            ],
        },
        leaf("sys_settings", "settings"),
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let expanded_groups = RwSignal::new(vec!["integrations".to_string()]);

    view! {
        <div class="app-sidebar__content">
            {get_menu_groups()
                .into_iter()
                .map(|group| {
                    let has_children = !group.items.is_empty();
                    let group_id = group.id.to_string();
                    let group_id_for_active = group_id.clone();
                    let group_id_for_exp = group_id.clone();
                    let group_id_for_show = group_id.clone();
                    let label = group.label.clone();

                    view! {
                        <div>
                            <div
                                class="app-sidebar__item"
                                class:app-sidebar__item--active=move || {
                                    !has_children
                                        && ctx.active.with(|a| a.as_deref() == Some(group_id_for_active.as_str()))
                                }
                                style:padding-left="12px"
                                on:click=move |_| {
                                    if has_children {
                                        let gid = group_id.clone();
                                        expanded_groups.update(move |items| {
                                            if let Some(pos) = items.iter().position(|x| x == &gid) {
                                                items.remove(pos);
                                            } else {
                                                items.push(gid);
                                            }
                                        });
                                    } else {
                                        ctx.open_tab(group.id, &label);
                                    }
                                }
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(group.icon)}
                                    <span>{group.label.clone()}</span>
                                </div>
                                {has_children.then(|| {
                                    view! {
                                        <div
                                            class="app-sidebar__chevron"
                                            class:app-sidebar__chevron--expanded=move || {
                                                expanded_groups.with(|g| g.contains(&group_id_for_exp))
                                            }
                                        >
                                            {icon("chevron-right")}
                                        </div>
                                    }
                                })}
                            </div>

                            {has_children.then(|| {
                                let items_stored = StoredValue::new(group.items.clone());
                                view! {
                                    <Show when=move || expanded_groups.with(|g| g.contains(&group_id_for_show))>
                                        <div class="app-sidebar__children">
                                            {items_stored
                                                .get_value()
                                                .into_iter()
                                                .map(|(id, label, icon_name)| {
                                                    let label_for_click = label.clone();
                                                    view! {
                                                        <div
                                                            class="app-sidebar__item"
                                                            class:app-sidebar__item--active=move || {
                                                                ctx.active.with(|a| a.as_deref() == Some(id))
                                                            }
                                                            style:padding-left="10px"
                                                            on:click=move |_| ctx.open_tab(id, &label_for_click)
                                                        >
                                                            <div class="app-sidebar__item-content">
                                                                {icon(icon_name)}
                                                                <span>{label}</span>
                                                            </div>
                                                        </div>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </Show>
                                }
                            })}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_order_and_labels() {
        let labels: Vec<String> = get_menu_groups().into_iter().map(|g| g.label).collect();
        assert_eq!(
            labels,
            vec!["ダッシュボード", "注文管理", "顧客管理", "部品管理", "商品管理", "取引先管理", "レポート", "連携", "設定"]
        );
    }

    #[test]
    fn test_every_menu_key_has_a_label() {
        for group in get_menu_groups() {
            for (key, label, _) in &group.items {
                assert_ne!(key, label);
            }
            if group.items.is_empty() {
                assert_ne!(group.label, group.id);
            }
        }
    }
}
