// src/icons.rs
// Inline SVG line icons (Lucide paths), so the page needs no icon font.
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Mail,
    Phone,
    MapPin,
    MessageCircle,
    ChevronRight,
    Star,
}

impl IconKind {
    pub fn name(self) -> &'static str {
        match self {
            IconKind::Mail => "mail",
            IconKind::Phone => "phone",
            IconKind::MapPin => "map-pin",
            IconKind::MessageCircle => "message-circle",
            IconKind::ChevronRight => "chevron-right",
            IconKind::Star => "star",
        }
    }

    fn body(self) -> Html {
        match self {
            IconKind::Mail => html! {
                <>
                  <rect width="20" height="16" x="2" y="4" rx="2" />
                  <path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" />
                </>
            },
            IconKind::Phone => html! {
                <path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z" />
            },
            IconKind::MapPin => html! {
                <>
                  <path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z" />
                  <circle cx="12" cy="10" r="3" />
                </>
            },
            IconKind::MessageCircle => html! {
                <path d="M7.9 20A9 9 0 1 0 4 16.1L2 22Z" />
            },
            IconKind::ChevronRight => html! {
                <path d="m9 18 6-6-6-6" />
            },
            IconKind::Star => html! {
                <polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2" />
            },
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub kind: IconKind,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    html! {
        <svg
            class={classes!("icon", props.class.clone())}
            data-icon={props.kind.name()}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { props.kind.body() }
        </svg>
    }
}
