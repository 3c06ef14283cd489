use dioxus::prelude::*;
use quiz_core::model::Fraction;

use crate::vm::{SliceFill, map_pie};

const CHART_SIZE: u32 = 140;

/// Pie chart of `numerator/denominator`: one slice per denominator unit,
/// the first `numerator` slices highlighted.
#[component]
pub fn FractionCircle(numerator: u32, denominator: u32, filled: bool) -> Element {
    let pie = map_pie(numerator, denominator, filled, CHART_SIZE);
    let view_box = pie.view_box();
    let whole_class = pie.whole.unwrap_or(SliceFill::Empty).class();
    let has_whole = pie.whole.is_some();

    rsx! {
        figure { class: "fraction-circle",
            svg {
                width: "{pie.size}",
                height: "{pie.size}",
                view_box: "{view_box}",
                role: "img",
                "aria-label": "{pie.label}",
                if has_whole {
                    circle {
                        cx: "{pie.center}",
                        cy: "{pie.center}",
                        r: "{pie.radius}",
                        class: whole_class,
                    }
                }
                for slice in pie.slices.iter() {
                    path { d: "{slice.path}", class: slice.fill.class() }
                }
            }
            figcaption { class: "fraction-caption", "{pie.label}" }
        }
    }
}

/// Stacked numerator over denominator.
#[component]
pub fn FractionText(fraction: Fraction) -> Element {
    rsx! {
        div { class: "fraction-text",
            span { class: "fraction-num", "{fraction.numerator}" }
            span { class: "fraction-bar" }
            span { class: "fraction-den", "{fraction.denominator}" }
        }
    }
}
