use log::debug;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::custom_cursor::CustomCursor;
use crate::gallery::{GallerySelection, PROJECTS};
use crate::Route;

/// Every project with an expandable photo gallery under each card.
#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let selection = use_state(GallerySelection::default);
    let navigator = use_navigator();

    use_effect_with_deps(
        |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let close = Callback::from(move |_: MouseEvent| match &navigator {
        Some(navigator) => navigator.push(&Route::Home),
        None => debug!("No router available to close the portfolio"),
    });

    let toggle = |project_id: u32| {
        let selection = selection.clone();
        Callback::from(move |_: MouseEvent| {
            let next = selection.toggle(project_id);
            debug!("Gallery selection now {:?}", next.selected());
            selection.set(next);
        })
    };

    html! {
        <div class="portfolio">
            <CustomCursor />
            <button class="portfolio-close" onclick={close} aria-label="Close portfolio" data-interactive="true">
                {"×"}
            </button>
            <div class="container">
                <h4 class="eyebrow">{"COMPLETE PORTFOLIO"}</h4>
                <h1>{"All Our Projects"}</h1>
                <p class="muted">
                    {"Explore our complete collection of residential and commercial construction projects across \
                      Pollachi and Coimbatore."}
                </p>
                <div class="portfolio-grid">
                    { for PROJECTS.iter().map(|project| {
                        let images = selection.visible_images(project.id);
                        html! {
                            <div class="portfolio-item">
                                <div
                                    class={classes!("portfolio-card", selection.is_open(project.id).then_some("open"))}
                                    onclick={toggle(project.id)}
                                    data-interactive="true"
                                >
                                    <img src={project.cover} alt={project.title} />
                                    <div class="portfolio-caption">
                                        <h3>{project.title}</h3>
                                        <p>{"Click to view gallery"}</p>
                                    </div>
                                </div>
                                if !images.is_empty() {
                                    <div class="portfolio-gallery">
                                        <h4>{"Project Gallery"}</h4>
                                        <div class="gallery-images">
                                            { for images.iter().enumerate().map(|(i, src)| html! {
                                                <img
                                                    src={*src}
                                                    alt={format!("{} - Image {}", project.title, i + 1)}
                                                />
                                            }) }
                                        </div>
                                    </div>
                                }
                            </div>
                        }
                    }) }
                </div>
            </div>
            <style>
                {r#"
                    .portfolio {
                        min-height: 100vh;
                        padding: 5rem 0;
                        background: #f8fafc;
                        color: #1e293b;
                        text-align: center;
                    }
                    .portfolio h1 {
                        font-size: clamp(2.5rem, 7vw, 4.5rem);
                    }
                    .portfolio-close {
                        position: fixed;
                        top: 1.5rem;
                        right: 1.5rem;
                        z-index: 50;
                        width: 3rem;
                        height: 3rem;
                        border: none;
                        border-radius: 50%;
                        background: #1e3a8a;
                        color: #ffffff;
                        font-size: 1.5rem;
                        cursor: pointer;
                    }
                    .portfolio-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                        gap: 2rem;
                        margin-top: 4rem;
                        text-align: left;
                    }
                    .portfolio-card {
                        position: relative;
                        height: 320px;
                        overflow: hidden;
                        cursor: pointer;
                    }
                    .portfolio-card img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.5s ease;
                    }
                    .portfolio-card.open img {
                        transform: scale(1.05);
                    }
                    .portfolio-caption {
                        position: absolute;
                        inset: auto 0 0 0;
                        padding: 1.5rem;
                        background: linear-gradient(to top, rgba(15, 23, 42, 0.9), transparent);
                        color: #ffffff;
                    }
                    .portfolio-gallery {
                        padding: 1.5rem;
                        background: #ffffff;
                        box-shadow: 0 10px 15px rgba(15, 23, 42, 0.08);
                    }
                    .gallery-images {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(120px, 1fr));
                        gap: 0.75rem;
                    }
                    .gallery-images img {
                        width: 100%;
                        height: 120px;
                        object-fit: cover;
                        border-radius: 0.25rem;
                    }
                "#}
            </style>
        </div>
    }
}
