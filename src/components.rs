// src/components.rs
use yew::prelude::*;

use crate::icons::{Icon, IconKind};

pub const MAX_STARS: i32 = 5;

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub id: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

/// Centered, width-capped page region addressable as `#id`.
#[function_component(Section)]
pub fn section(props: &SectionProps) -> Html {
    html! {
        <section
            id={props.id.clone()}
            class={classes!("w-full", "max-w-6xl", "mx-auto", "px-6", "md:px-10", props.class.clone())}
        >
            { props.children.clone() }
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct BadgeProps {
    #[prop_or_default]
    pub children: Html,
}

#[function_component(Badge)]
pub fn badge(props: &BadgeProps) -> Html {
    html! {
        <span class="badge inline-block text-xs uppercase tracking-wide px-2 py-1 rounded-full border border-[#0057A7] text-[#0057A7]">
            { props.children.clone() }
        </span>
    }
}

/// Ratings are drawn out of five; out-of-range input is clamped, not trusted.
pub fn star_count(n: i32) -> usize {
    n.clamp(0, MAX_STARS) as usize
}

#[derive(Properties, PartialEq)]
pub struct StarsProps {
    #[prop_or(MAX_STARS)]
    pub n: i32,
}

#[function_component(Stars)]
pub fn stars(props: &StarsProps) -> Html {
    html! {
        <div class="stars flex items-center gap-1">
            { for (0..star_count(props.n)).map(|i| html! {
                <Icon key={i} kind={IconKind::Star} class="w-4 h-4 fill-current text-[#ED1C24]" />
            }) }
        </div>
    }
}
