use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::cursor::CursorState;
use crate::dom;
use crate::motion::clock::{frame_interval, FrameClock};

/// Ring that trails the pointer and grows over interactive elements.
#[function_component(CustomCursor)]
pub fn custom_cursor() -> Html {
    let cursor = use_mut_ref(CursorState::new);
    let clock = use_mut_ref(FrameClock::new);
    let redraw = use_force_update();

    // A resting ring has no frame loop running; redrawing restarts it.
    {
        let cursor = cursor.clone();
        let redraw = redraw.clone();
        use_event_with_window("mousemove", move |e: MouseEvent| {
            let woke = {
                let mut cursor = cursor.borrow_mut();
                let idle = !cursor.is_moving();
                cursor.pointer_moved(f64::from(e.client_x()), f64::from(e.client_y()));
                idle && cursor.is_moving()
            };
            if woke {
                redraw.force_update();
            }
        });
    }

    {
        let cursor = cursor.clone();
        let redraw = redraw.clone();
        use_event_with_window("mouseover", move |e: MouseEvent| {
            let target = e.target().and_then(|t| t.dyn_into::<Element>().ok());
            let woke = {
                let mut cursor = cursor.borrow_mut();
                let idle = !cursor.is_moving();
                cursor.hover(target.as_ref());
                idle && cursor.is_moving()
            };
            if woke {
                redraw.force_update();
            }
        });
    }

    let moving = cursor.borrow().is_moving();
    {
        let cursor = cursor.clone();
        let redraw = redraw.clone();
        use_interval(
            move || {
                let elapsed = clock.borrow_mut().tick(dom::now_ms());
                let moved = {
                    let mut cursor = cursor.borrow_mut();
                    let moved = cursor.step(elapsed);
                    if !cursor.is_moving() {
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

    let cursor = cursor.borrow();
    let ring = cursor.transform();

    html! {
        <>
            <div
                class={classes!("custom-cursor", cursor.is_hovering().then_some("hovering"))}
                style={format!(
                    "transform: translate3d({:.2}px, {:.2}px, 0) scale({:.3});",
                    ring.x, ring.y, ring.scale
                )}
            />
            <style>
                {r#"
                    .custom-cursor {
                        position: fixed;
                        top: 0;
                        left: 0;
                        z-index: 100;
                        width: 32px;
                        height: 32px;
                        border: 2px solid #3b82f6;
                        border-radius: 50%;
                        pointer-events: none;
                        transition: background-color 0.2s ease;
                    }
                    .custom-cursor.hovering {
                        background-color: rgba(59, 130, 246, 0.2);
                    }
                    @media (hover: none), (pointer: coarse) {
                        .custom-cursor {
                            display: none;
                        }
                    }
                "#}
            </style>
        </>
    }
}
