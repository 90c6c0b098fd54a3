use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::dom;
use crate::motion::clock::{frame_interval, FrameClock};
use crate::motion::spring::{Spring, SpringConfig};

const PROGRESS_SPRING: SpringConfig = SpringConfig::new(100.0, 30.0, 1.0).with_rest_delta(0.001);

/// Thin bar along the top edge showing how far the page has been scrolled.
#[function_component(ScrollProgress)]
pub fn scroll_progress() -> Html {
    let spring = use_mut_ref(|| {
        let start = dom::scroll_metrics().map(|m| m.progress()).unwrap_or(0.0);
        Spring::new(PROGRESS_SPRING, start)
    });
    let clock = use_mut_ref(FrameClock::new);
    let redraw = use_force_update();

    {
        let spring = spring.clone();
        let redraw = redraw.clone();
        use_event_with_window("scroll", move |_: web_sys::Event| {
            let Some(metrics) = dom::scroll_metrics() else {
                return;
            };
            let woke = {
                let mut spring = spring.borrow_mut();
                let idle = spring.is_settled();
                spring.set_target(metrics.progress());
                idle && !spring.is_settled()
            };
            if woke {
                redraw.force_update();
            }
        });
    }

    let moving = !spring.borrow().is_settled();
    {
        let spring = spring.clone();
        let redraw = redraw.clone();
        use_interval(
            move || {
                let elapsed = clock.borrow_mut().tick(dom::now_ms());
                let moved = {
                    let mut spring = spring.borrow_mut();
                    let moved = spring.step(elapsed);
                    if spring.is_settled() {
                        clock.borrow_mut().pause();
                    }
                    moved
                };
                if moved {
                    redraw.force_update();
                }
            },
            frame_interval(moving),
        );
    }

    let progress = spring.borrow().value();

    html! {
        <div
            class="scroll-progress"
            style={format!(
                "position: fixed; top: 0; left: 0; right: 0; height: 4px; z-index: 60; \
                 background: linear-gradient(90deg, #3b82f6, #dc2626); \
                 transform-origin: 0% 50%; transform: scaleX({:.4});",
                progress
            )}
        />
    }
}
