use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::gooey_nav::GooeyNav;
use crate::dom;
use crate::motion::timer::TimerId;
use crate::nav::sections::{nav_items, Section};
use crate::nav::visibility::VisibilityController;

type Controller = Rc<RefCell<VisibilityController<Timeout>>>;

/// Schedules a hide countdown as a browser timeout. The timeout only holds a
/// weak reference, so an unmounted navbar is never touched.
fn hide_timer(
    controller: &Controller,
    visible: UseStateSetter<bool>,
) -> impl FnOnce(TimerId, u32) -> Timeout {
    let controller = Rc::downgrade(controller);
    move |id, delay| {
        Timeout::new(delay, move || {
            let Some(controller) = controller.upgrade() else {
                return;
            };
            let hidden = controller.borrow_mut().timer_fired(id);
            if hidden {
                debug!("Hiding navigation after {}ms", delay);
                visible.set(false);
            }
        })
    }
}

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub active: Section,
    pub on_navigate: Callback<Section>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let controller: Controller = use_mut_ref(VisibilityController::new);
    let visible = use_state(|| false);
    let scrolled = use_state(|| false);
    let menu_open = use_state(|| false);
    let items = use_memo(|_| nav_items(), ());

    {
        let controller = controller.clone();
        let visible = visible.setter();
        use_event_with_window("mousemove", move |_: MouseEvent| {
            let shown = controller
                .borrow_mut()
                .pointer_moved(hide_timer(&controller, visible.clone()));
            if shown {
                visible.set(true);
            }
        });
    }

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let update = move || {
                    if let Some(metrics) = dom::scroll_metrics() {
                        scrolled.set(metrics.past_hero());
                    }
                };
                update();
                let scroll_callback = Closure::wrap(Box::new(update) as Box<dyn FnMut()>);
                if let Some(window) = &window {
                    if window
                        .add_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .is_err()
                    {
                        warn!("Could not listen for scroll, nav colours stay fixed");
                    }
                }
                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    {
        let controller = controller.clone();
        use_effect_with_deps(
            move |_| move || controller.borrow_mut().teardown(),
            (),
        );
    }

    let on_enter = {
        let controller = controller.clone();
        let visible = visible.clone();
        Callback::from(move |_: MouseEvent| {
            if controller.borrow_mut().nav_entered() {
                visible.set(true);
            }
        })
    };

    let on_leave = {
        let controller = controller.clone();
        let visible = visible.setter();
        Callback::from(move |_: MouseEvent| {
            controller
                .borrow_mut()
                .nav_left(hide_timer(&controller, visible.clone()));
        })
    };

    let on_select = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |index: usize| {
            if let Some(section) = Section::ALL.get(index) {
                on_navigate.emit(*section);
            }
        })
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let choose = |section: Section| {
        let menu_open = menu_open.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            on_navigate.emit(section);
        })
    };

    html! {
        <>
            <div
                class={classes!(
                    "desktop-nav",
                    (!*visible).then_some("nav-hidden"),
                    scrolled.then_some("scrolled"),
                )}
                onmouseenter={on_enter}
                onmouseleave={on_leave}
            >
                <GooeyNav
                    items={(*items).clone()}
                    active={props.active.index()}
                    on_select={on_select}
                />
            </div>

            <div class={classes!("mobile-nav", scrolled.then_some("scrolled"))}>
                <span class="mobile-brand">{"MS BUILDERS"}</span>
                <button
                    class={classes!("burger-menu", menu_open.then_some("active"))}
                    onclick={toggle_menu}
                    aria-label="Toggle menu"
                    data-interactive="true"
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
            <div class={classes!("mobile-menu", menu_open.then_some("open"))}>
                { for Section::ALL.into_iter().map(|section| html! {
                    <a
                        href={format!("#{}", section.id())}
                        class={classes!((section == props.active).then_some("active"))}
                        onclick={choose(section)}
                    >
                        {section.label()}
                    </a>
                }) }
            </div>

            <style>
                {r#"
                    .desktop-nav {
                        position: fixed;
                        top: 1.5rem;
                        left: 50%;
                        z-index: 50;
                        transform: translate(-50%, 0);
                        opacity: 1;
                        transition: transform 0.4s ease, opacity 0.4s ease;
                    }
                    .desktop-nav.nav-hidden {
                        transform: translate(-50%, -150%);
                        opacity: 0;
                    }
                    .desktop-nav.scrolled .gooey-nav {
                        background: rgba(30, 58, 138, 0.9);
                    }
                    .desktop-nav.scrolled .gooey-nav a {
                        color: #f8fafc;
                    }
                    .mobile-nav,
                    .mobile-menu {
                        display: none;
                    }
                    @media (max-width: 768px) {
                        .desktop-nav {
                            display: none;
                        }
                        .mobile-nav {
                            position: fixed;
                            top: 0;
                            left: 0;
                            right: 0;
                            z-index: 50;
                            display: flex;
                            justify-content: space-between;
                            align-items: center;
                            padding: 1rem 1.5rem;
                            background: rgba(255, 255, 255, 0.9);
                            backdrop-filter: blur(8px);
                        }
                        .mobile-nav.scrolled {
                            box-shadow: 0 4px 12px rgba(30, 58, 138, 0.15);
                        }
                        .mobile-brand {
                            font-weight: 900;
                            letter-spacing: 0.1em;
                            color: #1e3a8a;
                        }
                        .burger-menu {
                            display: flex;
                            flex-direction: column;
                            gap: 5px;
                            background: none;
                            border: none;
                            cursor: pointer;
                        }
                        .burger-menu span {
                            width: 24px;
                            height: 2px;
                            background: #1e3a8a;
                            transition: transform 0.3s ease, opacity 0.3s ease;
                        }
                        .burger-menu.active span:nth-child(1) {
                            transform: translateY(7px) rotate(45deg);
                        }
                        .burger-menu.active span:nth-child(2) {
                            opacity: 0;
                        }
                        .burger-menu.active span:nth-child(3) {
                            transform: translateY(-7px) rotate(-45deg);
                        }
                        .mobile-menu.open {
                            position: fixed;
                            inset: 0;
                            z-index: 40;
                            display: flex;
                            flex-direction: column;
                            justify-content: center;
                            align-items: center;
                            gap: 2rem;
                            background: rgba(248, 250, 252, 0.97);
                        }
                        .mobile-menu a {
                            font-size: 1.75rem;
                            font-weight: 700;
                            color: #1e293b;
                            text-decoration: none;
                        }
                        .mobile-menu a.active {
                            color: #3b82f6;
                        }
                    }
                "#}
            </style>
        </>
    }
}
