use std::cell::RefCell;
use std::num::NonZeroUsize;
use std::rc::Rc;

use log::{debug, warn};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use web_sys::{Element, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::dom;
use crate::motion::clock::frame_interval;
use crate::nav::gooey::{clamp_index, GooeyConfig, GooeyIndicator, Rect};
use crate::nav::sections::NavItem;

#[derive(Properties, PartialEq)]
pub struct GooeyNavProps {
    pub items: Vec<NavItem>,
    /// Externally owned active index. Out-of-range values fall back to 0.
    pub active: usize,
    #[prop_or_default]
    pub config: GooeyConfig,
    pub on_select: Callback<usize>,
}

fn measure(container: &NodeRef, item: Option<&NodeRef>) -> Option<Rect> {
    let container = container.cast::<Element>()?;
    let item = item?.cast::<Element>()?;
    dom::relative_rect(&item, &container)
}

type Indicator = Rc<RefCell<GooeyIndicator<SmallRng>>>;

#[function_component(GooeyNav)]
pub fn gooey_nav(props: &GooeyNavProps) -> Html {
    let count = NonZeroUsize::new(props.items.len()).unwrap_or(NonZeroUsize::MIN);
    let indicator: Indicator = {
        let active = clamp_index(Some(props.active), count.get());
        let config = props.config.clone();
        use_mut_ref(move || {
            GooeyIndicator::new(count, Some(active), config, SmallRng::from_entropy())
        })
    };
    let redraw = use_force_update();
    let container = use_node_ref();
    let item_refs = use_memo(
        |n| (0..*n).map(|_| NodeRef::default()).collect::<Vec<_>>(),
        count.get(),
    );
    let (viewport_w, viewport_h) = use_window_size();

    // Mount and viewport resize: snap the blob onto the active item.
    {
        let indicator = indicator.clone();
        let container = container.clone();
        let item_refs = item_refs.clone();
        let redraw = redraw.clone();
        use_effect_with_deps(
            move |_| {
                let active = indicator.borrow().active_index();
                let rect = measure(&container, item_refs.get(active));
                if rect.is_none() {
                    debug!("Nav item {} not measurable, blob disabled", active);
                }
                indicator.borrow_mut().resize(rect);
                redraw.force_update();
                || ()
            },
            (viewport_w as i64, viewport_h as i64),
        );
    }

    // External changes of the active item animate like a click would.
    {
        let indicator = indicator.clone();
        let container = container.clone();
        let item_refs = item_refs.clone();
        let redraw = redraw.clone();
        use_effect_with_deps(
            move |active: &usize| {
                let index = clamp_index(Some(*active), count.get());
                let mut ind = indicator.borrow_mut();
                if ind.active_index() != index {
                    let rect = measure(&container, item_refs.get(index));
                    if let Err(err) = ind.activate(index, rect, dom::now_ms()) {
                        warn!("Ignoring nav activation: {}", err);
                    }
                    drop(ind);
                    redraw.force_update();
                }
                || ()
            },
            props.active,
        );
    }

    // Frame loop. Runs only while the blob or particles move; clicks and
    // external activations redraw first, which starts it.
    let animating = indicator.borrow().is_animating(dom::now_ms());
    {
        let indicator = indicator.clone();
        let redraw = redraw.clone();
        use_interval(
            move || {
                let now = dom::now_ms();
                let (animating, settled) = {
                    let mut ind = indicator.borrow_mut();
                    let animating = ind.is_animating(now);
                    (animating, ind.tick(now))
                };
                if animating || settled {
                    redraw.force_update();
                }
            },
            frame_interval(animating),
        );
    }

    let on_click = |index: usize| {
        let indicator = indicator.clone();
        let container = container.clone();
        let item_refs = item_refs.clone();
        let redraw = redraw.clone();
        let on_select = props.on_select.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let rect = measure(&container, item_refs.get(index));
            let result = indicator
                .borrow_mut()
                .activate(index, rect, dom::now_ms());
            match result {
                Ok(activation) => debug!(
                    "Nav item {} activated, blob moved: {}, {} particles",
                    activation.index,
                    activation.geometry_change.is_some(),
                    activation.particles_spawned
                ),
                Err(err) => warn!("Ignoring nav click: {}", err),
            }
            redraw.force_update();
            on_select.emit(index);
        })
    };

    let now = dom::now_ms();
    let ind = indicator.borrow();
    let active = ind.active_index();
    let blob = ind.blob_at(now).map(|r| {
        html! {
            <span
                class="gooey-blob"
                style={format!(
                    "transform: translate({:.2}px, {:.2}px); width: {:.2}px; height: {:.2}px;",
                    r.x, r.y, r.width, r.height
                )}
            />
        }
    });
    let particles = ind.particle_frames(now).into_iter().map(|((ox, oy), f)| {
        html! {
            <span
                class="gooey-particle"
                style={format!(
                    "left: {:.2}px; top: {:.2}px; opacity: {:.3}; background: var(--particle-color-{}); \
                     transform: translate({:.2}px, {:.2}px) rotate({:.1}deg) scale({:.3});",
                    ox, oy, f.opacity, f.color_index, f.dx, f.dy, f.rotation, f.scale
                )}
            />
        }
    });
    let is_static = blob.is_none();

    html! {
        <nav class={classes!("gooey-nav", is_static.then_some("static"))} ref={container.clone()}>
            <style>
                {r#"
                    .gooey-nav {
                        position: relative;
                        display: inline-flex;
                        padding: 0.5rem;
                        border-radius: 999px;
                        background: rgba(255, 255, 255, 0.85);
                        backdrop-filter: blur(8px);
                        box-shadow: 0 8px 24px rgba(30, 58, 138, 0.15);
                        --particle-color-1: #3b82f6;
                        --particle-color-2: #1e3a8a;
                        --particle-color-3: #dc2626;
                        --particle-color-4: #f8fafc;
                    }
                    .gooey-nav ul {
                        position: relative;
                        z-index: 2;
                        display: flex;
                        gap: 0.5rem;
                        margin: 0;
                        padding: 0;
                        list-style: none;
                    }
                    .gooey-nav a {
                        display: inline-block;
                        padding: 0.6rem 1.1rem;
                        color: #1e293b;
                        font-weight: 600;
                        letter-spacing: 0.05em;
                        text-decoration: none;
                        transition: color 0.3s ease;
                    }
                    .gooey-nav li.active a {
                        color: #ffffff;
                    }
                    .gooey-nav.static li.active a {
                        color: #3b82f6;
                        text-decoration: underline;
                    }
                    .gooey-effects {
                        position: absolute;
                        inset: 0;
                        z-index: 1;
                        pointer-events: none;
                        filter: url(#gooey-filter);
                    }
                    .gooey-blob {
                        position: absolute;
                        top: 0;
                        left: 0;
                        border-radius: 999px;
                        background: #3b82f6;
                    }
                    .gooey-particle {
                        position: absolute;
                        width: 10px;
                        height: 10px;
                        margin: -5px 0 0 -5px;
                        border-radius: 50%;
                    }
                "#}
            </style>
            <svg width="0" height="0" style="position: absolute;">
                <filter id="gooey-filter">
                    <feGaussianBlur in="SourceGraphic" stdDeviation="6" result="blur" />
                    <feColorMatrix in="blur" mode="matrix" values="1 0 0 0 0  0 1 0 0 0  0 0 1 0 0  0 0 0 20 -9" />
                </filter>
            </svg>
            <div class="gooey-effects">
                { for blob }
                { for particles }
            </div>
            <ul>
                { for props.items.iter().enumerate().map(|(i, item)| html! {
                    <li class={classes!((i == active).then_some("active"))}>
                        <a
                            href={item.href()}
                            ref={item_refs.get(i).cloned().unwrap_or_default()}
                            onclick={on_click(i)}
                            data-interactive="true"
                        >
                            {item.label}
                        </a>
                    </li>
                }) }
            </ul>
        </nav>
    }
}
