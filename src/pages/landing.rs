use log::debug;
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::components::custom_cursor::CustomCursor;
use crate::components::navbar::Navbar;
use crate::components::scroll_progress::ScrollProgress;
use crate::components::text_hover::TextHoverEffect;
use crate::dom;
use crate::gallery::PROJECTS;
use crate::motion::easing::map_range_clamped;
use crate::nav::sections::Section;
use crate::nav::visibility::ScrollMetrics;
use crate::pages::contact::ContactSection;
use crate::Route;

struct Service {
    title: &'static str,
    desc: &'static str,
}

const SERVICES: [Service; 9] = [
    Service {
        title: "CONTRACTS",
        desc: "End-to-end construction contracts ensuring quality and timely delivery.",
    },
    Service {
        title: "APPROVAL DRAWING",
        desc: "Complete architectural approval drawings for regulatory compliance and project authorization.",
    },
    Service {
        title: "2D PLAN 3D ELEVATION",
        desc: "Detailed 2D floor plans and stunning 3D elevation designs for visualization.",
    },
    Service {
        title: "ESTIMATION",
        desc: "Accurate cost estimation and budget planning for your construction projects.",
    },
    Service {
        title: "INTERIOR DESIGNS",
        desc: "Creative and functional interior design solutions tailored to your lifestyle.",
    },
    Service {
        title: "3D WALKTHROUGH",
        desc: "Immersive 3D walkthroughs to experience your dream home before construction.",
    },
    Service {
        title: "ELECTRICAL DESIGN",
        desc: "Comprehensive electrical design and planning for safety and efficiency.",
    },
    Service {
        title: "RENOVATION WORK",
        desc: "Professional renovation services to transform and upgrade existing spaces.",
    },
    Service {
        title: "CONSULTING",
        desc: "Expert construction consulting services from planning to execution.",
    },
];

#[derive(Properties, PartialEq)]
pub struct SectionNavProps {
    pub on_navigate: Callback<Section>,
}

fn go_to(on_navigate: &Callback<Section>, section: Section) -> Callback<MouseEvent> {
    let on_navigate = on_navigate.clone();
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        on_navigate.emit(section);
    })
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let active = use_state(|| {
        dom::current_fragment()
            .and_then(|f| Section::from_fragment(&f))
            .unwrap_or(Section::Home)
    });
    let navigate = {
        let active = active.clone();
        Callback::from(move |section: Section| {
            debug!("Navigating to {}", section.id());
            active.set(section);
            dom::scroll_to_section(section.id());
        })
    };

    // Jump to the section named in the URL once the page has laid out.
    use_effect_with_deps(
        |_| {
            if let Some(section) = dom::current_fragment().and_then(|f| Section::from_fragment(&f)) {
                dom::scroll_to_section(section.id());
            }
            || ()
        },
        (),
    );

    html! {
        <div class="landing">
            <ScrollProgress />
            <CustomCursor />
            <Navbar active={*active} on_navigate={navigate.clone()} />
            <CornerLogo on_navigate={navigate.clone()} />
            <Hero on_navigate={navigate.clone()} />
            <About />
            <MissionVision />
            <Services />
            <Projects />
            <ContactSection />
            <Footer on_navigate={navigate} />
            <style>
                {LANDING_CSS}
            </style>
        </div>
    }
}

/// Logo in the corner while the hero is on screen.
#[function_component(CornerLogo)]
fn corner_logo(props: &SectionNavProps) -> Html {
    let (_, scroll_y) = use_window_scroll();
    let (_, viewport_height) = use_window_size();
    let metrics = ScrollMetrics {
        scroll_y,
        viewport_height,
        ..ScrollMetrics::default()
    };
    if !metrics.in_hero() {
        return html! {};
    }

    html! {
        <a
            class="corner-logo"
            href="#home"
            onclick={go_to(&props.on_navigate, Section::Home)}
            data-interactive="true"
        >
            <img src="/images/logo.png" alt="MS Builders" />
        </a>
    }
}

/// Vertical offsets of the hero text and background for a scroll position.
fn parallax(scroll_y: f64) -> (f64, f64) {
    (
        map_range_clamped(scroll_y, (0.0, 500.0), (0.0, 200.0)),
        map_range_clamped(scroll_y, (0.0, 500.0), (0.0, -100.0)),
    )
}

#[function_component(Hero)]
fn hero(props: &SectionNavProps) -> Html {
    let (_, scroll_y) = use_window_scroll();
    let (text_shift, background_shift) = parallax(scroll_y);

    html! {
        <section id="home" class="hero">
            <div
                class="hero-background"
                style={format!("transform: translateY({:.1}px);", background_shift)}
            >
                <div class="hero-overlay" />
                <video
                    src="/images/Video_Ready_After_User_Request.mp4"
                    autoplay=true
                    loop=true
                    muted=true
                    playsinline=true
                />
            </div>
            <div class="hero-content" style={format!("transform: translateY({:.1}px);", text_shift)}>
                <span class="hero-tag">{"ENGINEERS, PLANNERS, CONTRACTORS"}</span>
                <h1>
                    <TextHoverEffect text="BUILD YOUR" class={classes!("hero-line")} />
                    <TextHoverEffect text="DREAM HOME" class={classes!("hero-line", "hero-highlight")} />
                    <TextHoverEffect text="WITH US" class={classes!("hero-line")} />
                </h1>
                <p>
                    {"From approval drawings to complete construction contracts, we bring your vision to life with expertise and precision."}
                </p>
                <div class="hero-actions">
                    <button
                        class="primary-button"
                        onclick={go_to(&props.on_navigate, Section::Projects)}
                        data-interactive="true"
                    >
                        {"VIEW PROJECTS"}
                    </button>
                    <button
                        class="outline-button"
                        onclick={go_to(&props.on_navigate, Section::Services)}
                        data-interactive="true"
                    >
                        {"OUR SERVICES"}
                    </button>
                </div>
            </div>
            <div class="scroll-hint">{"Scroll"}</div>
        </section>
    }
}

#[function_component(About)]
fn about() -> Html {
    html! {
        <section id="about" class="about">
            <div class="container two-columns">
                <div>
                    <h4 class="eyebrow">{"WHO WE ARE"}</h4>
                    <h2>{"Building Dreams, "}<br />{"Creating "}<span class="accent-red">{"Legacies"}</span></h2>
                    <p>
                        {"Led by "}<strong>{"Er. M. Suganeshwaran BE., ME Struct."}</strong>
                        {", MS Builders is a trusted name in construction services in Pollachi and Coimbatore."}
                    </p>
                    <p class="muted">
                        {"From approval drawings and 3D designs to complete construction contracts, we handle every \
                          aspect of your dream home with precision and care. Our comprehensive services ensure your \
                          project is delivered on time, within budget, and beyond expectations."}
                    </p>
                    <ul class="about-contact">
                        <li>{"8973636860"}</li>
                        <li>{"Lakshmi Nagar, Pollachi 642001"}</li>
                        <li>{"@_ms_builders_design_"}</li>
                    </ul>
                </div>
                <div class="owner">
                    <img src="/images/owner.jpeg" alt="Er. M. Suganeshwaran - Founder" />
                    <div class="experience-badge" data-interactive="true">
                        <strong>{"10+"}</strong>
                        <span>{"Years Experience"}</span>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(MissionVision)]
fn mission_vision() -> Html {
    html! {
        <section class="mission-vision">
            <div class="container">
                <div class="slogan">
                    <h3 class="accent-navy">{"Zero Surprises."}</h3>
                    <h3 class="accent-blue">{"Just What We Promised"}</h3>
                </div>
                <div class="cards">
                    <div class="card mission">
                        <h4>{"Our Mission"}</h4>
                        <p>
                            {"To deliver exceptional construction services that exceed expectations, combining \
                              innovative design with superior craftsmanship. We are committed to building lasting \
                              relationships with our clients by providing transparent, reliable, and high-quality \
                              solutions for every project."}
                        </p>
                    </div>
                    <div class="card vision">
                        <h4>{"Our Vision"}</h4>
                        <p>
                            {"To be the most trusted construction partner in South India, recognized for our \
                              integrity, innovation, and commitment to excellence. We envision creating sustainable, \
                              beautiful spaces that enhance communities and stand the test of time."}
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Services)]
fn services() -> Html {
    let hovered = use_state(|| None::<usize>);

    html! {
        <section id="services" class="services">
            <div class="container">
                <h4 class="eyebrow">{"OUR SERVICES"}</h4>
                <h2>{"Comprehensive Construction Solutions"}</h2>
                <div class="service-grid">
                    { for SERVICES.iter().enumerate().map(|(idx, service)| {
                        let on_enter = {
                            let hovered = hovered.clone();
                            Callback::from(move |_: MouseEvent| hovered.set(Some(idx)))
                        };
                        let on_leave = {
                            let hovered = hovered.clone();
                            Callback::from(move |_: MouseEvent| hovered.set(None))
                        };
                        html! {
                            <div
                                class={classes!("service-card", (*hovered == Some(idx)).then_some("filled"))}
                                onmouseenter={on_enter}
                                onmouseleave={on_leave}
                                data-interactive="true"
                            >
                                <h3>{service.title}</h3>
                                <p>{service.desc}</p>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Projects)]
fn projects() -> Html {
    html! {
        <section id="projects" class="projects">
            <div class="container">
                <h4 class="eyebrow">{"PORTFOLIO"}</h4>
                <h2>{"Our Projects"}</h2>
                <div class="project-grid">
                    { for PROJECTS.iter().map(|project| html! {
                        <div class="project-card" data-interactive="true">
                            <img src={project.cover} alt={project.title} />
                            <div class="project-caption">
                                <span>{project.category}</span>
                                <h3>{project.title}</h3>
                            </div>
                        </div>
                    }) }
                </div>
                <div class="explore">
                    <Link<Route> to={Route::Portfolio} classes="primary-button">
                        {"EXPLORE ALL PROJECTS"}
                    </Link<Route>>
                </div>
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer(props: &SectionNavProps) -> Html {
    html! {
        <footer class="footer">
            <div class="container footer-columns">
                <div>
                    <img class="footer-logo" src="/images/logo.png" alt="MS Builders" />
                    <p>
                        {"Building excellence since 2001. From concept to completion, we deliver quality \
                          construction services in Pollachi and Coimbatore."}
                    </p>
                </div>
                <div>
                    <h3>{"QUICK LINKS"}</h3>
                    <ul>
                        { for Section::ALL.into_iter().map(|section| html! {
                            <li>
                                <button onclick={go_to(&props.on_navigate, section)} data-interactive="true">
                                    {if section == Section::About { "About Us" } else { section.label() }}
                                </button>
                            </li>
                        }) }
                    </ul>
                </div>
                <div>
                    <h3>{"CONTACT INFO"}</h3>
                    <ul>
                        <li>{"Lakshmi Nagar, Pollachi 642001, Tamil Nadu"}</li>
                        <li><a href="tel:8973636860">{"+91 8973636860"}</a></li>
                        <li>
                            <a href="mailto:msbuildersdesignpollachi12@gmail.com">
                                {"msbuildersdesignpollachi12@gmail.com"}
                            </a>
                        </li>
                    </ul>
                </div>
            </div>
            <p class="copyright">
                {"© 2026 MS Builders - Engineers, Planners, Contractors. All rights reserved."}
            </p>
        </footer>
    }
}

const LANDING_CSS: &str = r#"
    .landing {
        background: #f8fafc;
        color: #1e293b;
        font-family: 'Inter', sans-serif;
        overflow-x: hidden;
    }
    .container {
        max-width: 1200px;
        margin: 0 auto;
        padding: 0 1.5rem;
    }
    .eyebrow {
        color: #3b82f6;
        font-weight: 700;
        letter-spacing: 0.2em;
        margin-bottom: 1rem;
    }
    .accent-red { color: #dc2626; }
    .accent-blue { color: #3b82f6; }
    .accent-navy { color: #1e3a8a; }
    .muted { color: #475569; }
    .primary-button,
    .outline-button {
        display: inline-block;
        padding: 1rem 2rem;
        font-weight: 700;
        letter-spacing: 0.15em;
        text-decoration: none;
        cursor: pointer;
        transition: background 0.3s ease, color 0.3s ease;
    }
    .primary-button {
        background: #3b82f6;
        color: #ffffff;
        border: none;
    }
    .primary-button:hover { background: #dc2626; }
    .outline-button {
        background: rgba(255, 255, 255, 0.8);
        color: #3b82f6;
        border: 2px solid #3b82f6;
    }
    .outline-button:hover {
        background: #3b82f6;
        color: #ffffff;
    }
    .corner-logo {
        position: fixed;
        top: 1.5rem;
        left: 1.5rem;
        z-index: 45;
    }
    .corner-logo img { height: 64px; }
    .hero {
        position: relative;
        height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        overflow: hidden;
        text-align: center;
    }
    .hero-background {
        position: absolute;
        inset: 0;
    }
    .hero-background video {
        width: 100%;
        height: 100%;
        object-fit: cover;
        opacity: 0.7;
    }
    .hero-overlay {
        position: absolute;
        inset: 0;
        z-index: 1;
        background: linear-gradient(to bottom, rgba(30, 58, 138, 0.8), rgba(59, 130, 246, 0.4), rgba(255, 255, 255, 0.9));
    }
    .hero-content {
        position: relative;
        z-index: 2;
        max-width: 64rem;
        padding: 0 1rem;
    }
    .hero-tag {
        display: inline-block;
        padding: 0.25rem 0.75rem;
        border: 1px solid #3b82f6;
        border-radius: 999px;
        background: #ffffff;
        color: #3b82f6;
        font-size: 0.75rem;
        font-weight: 700;
        letter-spacing: 0.2em;
    }
    .hero h1 {
        display: flex;
        flex-direction: column;
        align-items: center;
        font-size: clamp(2.5rem, 8vw, 6rem);
        line-height: 1.1;
    }
    .hero-highlight {
        color: #ffffff;
        font-weight: 900;
        text-shadow: 0 0 30px rgba(255, 255, 255, 0.5), 0 4px 8px rgba(0, 0, 0, 0.7);
    }
    .hero-actions {
        display: flex;
        flex-wrap: wrap;
        gap: 1rem;
        justify-content: center;
    }
    .scroll-hint {
        position: absolute;
        bottom: 2.5rem;
        left: 50%;
        z-index: 2;
        transform: translateX(-50%);
        font-size: 0.75rem;
        letter-spacing: 0.2em;
        text-transform: uppercase;
    }
    .about,
    .mission-vision,
    .services,
    .projects {
        padding: 6rem 0;
    }
    .two-columns {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
        gap: 4rem;
        align-items: center;
    }
    .about-contact {
        padding: 1.5rem;
        border-left: 4px solid #3b82f6;
        background: #f1f5f9;
        list-style: none;
    }
    .owner { position: relative; }
    .owner img {
        width: 100%;
        box-shadow: 0 25px 50px rgba(15, 23, 42, 0.25);
    }
    .experience-badge {
        position: absolute;
        bottom: -1.5rem;
        left: -1.5rem;
        display: flex;
        flex-direction: column;
        padding: 1.5rem;
        border-radius: 0.5rem;
        background: #dc2626;
        color: #ffffff;
    }
    .experience-badge strong { font-size: 1.875rem; }
    .slogan {
        text-align: center;
        margin-bottom: 4rem;
        font-size: 2rem;
        font-weight: 900;
    }
    .cards {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
        gap: 2rem;
    }
    .card {
        padding: 2.5rem;
        border-radius: 0.5rem;
        background: #ffffff;
        box-shadow: 0 20px 25px rgba(15, 23, 42, 0.1);
    }
    .card.mission { border-top: 4px solid #3b82f6; }
    .card.vision { border-top: 4px solid #dc2626; }
    .service-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
        gap: 1.5rem;
        margin-top: 3rem;
    }
    .service-card {
        padding: 2rem;
        border-radius: 0.5rem;
        background: #ffffff;
        box-shadow: 0 10px 15px rgba(15, 23, 42, 0.08);
        transition: background 0.3s ease, color 0.3s ease;
    }
    .service-card p { color: #475569; }
    .service-card.filled {
        background: linear-gradient(135deg, #3b82f6, #1e3a8a);
        color: #ffffff;
    }
    .service-card.filled p { color: rgba(255, 255, 255, 0.9); }
    .project-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
        gap: 2rem;
        margin-top: 3rem;
    }
    .project-card {
        position: relative;
        height: 420px;
        overflow: hidden;
    }
    .project-card img {
        width: 100%;
        height: 100%;
        object-fit: cover;
        transition: transform 0.7s ease;
    }
    .project-card:hover img { transform: scale(1.1); }
    .project-caption {
        position: absolute;
        inset: auto 0 0 0;
        padding: 2rem;
        background: linear-gradient(to top, rgba(15, 23, 42, 0.9), transparent);
        color: #ffffff;
    }
    .explore {
        margin-top: 3rem;
        text-align: center;
    }
    .footer {
        padding: 4rem 0 1.5rem;
        background: linear-gradient(135deg, #1e3a8a, #1e293b);
        color: rgba(255, 255, 255, 0.8);
    }
    .footer-columns {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
        gap: 3rem;
    }
    .footer h3 {
        color: #ffffff;
        letter-spacing: 0.1em;
    }
    .footer ul {
        list-style: none;
        padding: 0;
    }
    .footer button {
        background: none;
        border: none;
        color: inherit;
        cursor: pointer;
        padding: 0.25rem 0;
    }
    .footer button:hover { color: #ffffff; }
    .footer a { color: inherit; }
    .footer-logo { height: 8rem; }
    .copyright {
        margin-top: 3rem;
        text-align: center;
        font-size: 0.875rem;
        color: rgba(255, 255, 255, 0.6);
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parallax_follows_first_500px() {
        assert_eq!(parallax(0.0), (0.0, 0.0));
        assert_eq!(parallax(250.0), (100.0, -50.0));
        assert_eq!(parallax(500.0), (200.0, -100.0));
        assert_eq!(parallax(4_000.0), (200.0, -100.0));
    }
}
