use crate::shared::icons::icon;
use leptos::prelude::*;

/// Visual accent of a stat card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatAccent {
    #[default]
    Neutral,
    Success,
    Warning,
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    /// Formatted value (None = loading)
    #[prop(into)]
    value: Signal<Option<String>>,
    #[prop(optional)]
    accent: StatAccent,
    /// Optional subtitle below the value
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let class = match accent {
        StatAccent::Neutral => "stat-card",
        StatAccent::Success => "stat-card stat-card--success",
        StatAccent::Warning => "stat-card stat-card--warning",
    };

    view! {
        <div class=class>
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">
                    {move || value.get().unwrap_or_else(|| "—".to_string())}
                </div>
                {move || subtitle.get().map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
            </div>
        </div>
    }
}
