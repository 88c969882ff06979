//! The one place where status tones become badge colors.
use contracts::shared::status::{HasStatusDisplay, StatusDisplay, StatusTone};
use leptos::prelude::*;
use thaw::{Badge, BadgeAppearance, BadgeColor};

pub fn badge_color(tone: StatusTone) -> BadgeColor {
    match tone {
        StatusTone::Neutral => BadgeColor::Subtle,
        StatusTone::Brand => BadgeColor::Brand,
        StatusTone::Info => BadgeColor::Informative,
        StatusTone::Success => BadgeColor::Success,
        StatusTone::Warning => BadgeColor::Warning,
        StatusTone::Danger => BadgeColor::Danger,
    }
}

#[component]
pub fn StatusBadge(display: StatusDisplay) -> impl IntoView {
    view! {
        <Badge appearance=BadgeAppearance::Tint color=badge_color(display.tone)>
            {display.label}
        </Badge>
    }
}

/// Badge for any value with a status display entry.
pub fn status_badge<S: HasStatusDisplay>(status: &S) -> impl IntoView {
    view! { <StatusBadge display=status.display() /> }
}
