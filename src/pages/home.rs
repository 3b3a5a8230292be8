use web_sys::MouseEvent;
use yew::prelude::*;

use crate::animation::{use_parallax, Reveal};
use crate::components::{
    accordion::Accordion,
    contact_form::ContactForm,
    project_modal::ProjectModal,
    stat_counter::StatCounter,
    tabs::{TabItem, Tabs},
    terminal::Terminal,
};
use crate::content::{matches_filter, ALL_PROJECTS, FAQ, PROJECTS, PROJECT_FILTERS, SERVICES, STATS};
use crate::scroll::scroll_to_section;

const HOME_CSS: &str = r#"
    .hero {
        min-height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        text-align: center;
        padding: 8rem 2rem 4rem;
    }
    .hero {
        position: relative;
        overflow: hidden;
    }
    .orb {
        position: absolute;
        border-radius: 50%;
        filter: blur(80px);
        opacity: 0.35;
        pointer-events: none;
        transition: transform 0.2s ease-out;
        z-index: -1;
    }
    .orb-front {
        width: 420px;
        height: 420px;
        top: 10%;
        left: 8%;
        background: var(--accent);
    }
    .orb-back {
        width: 320px;
        height: 320px;
        bottom: 8%;
        right: 10%;
        background: #8a5cff;
    }
    .terminal {
        max-width: 520px;
        margin: 2.5rem auto 0;
        background: #0d0f12;
        border: 1px solid var(--border);
        border-radius: 12px;
        text-align: left;
        font-family: "SFMono-Regular", Consolas, monospace;
        font-size: 0.9rem;
    }
    .terminal-bar {
        display: flex;
        gap: 6px;
        padding: 0.7rem 1rem;
        border-bottom: 1px solid var(--border);
    }
    .terminal-bar span {
        width: 10px;
        height: 10px;
        border-radius: 50%;
        background: rgba(255, 255, 255, 0.2);
    }
    .terminal-body {
        padding: 1rem;
        color: #9fe3a6;
    }
    .terminal-line {
        opacity: 0;
        animation: typeLine 0.4s ease forwards;
    }
    @keyframes typeLine {
        from { opacity: 0; transform: translateX(-8px); }
        to { opacity: 1; transform: none; }
    }
    .filter-row {
        display: flex;
        flex-wrap: wrap;
        justify-content: center;
        gap: 0.5rem;
        margin-bottom: 2rem;
    }
    .filter-btn {
        background: transparent;
        color: var(--muted);
        border: 1px solid var(--border);
        border-radius: 999px;
        padding: 0.5rem 1.1rem;
        cursor: pointer;
    }
    .filter-btn.active {
        background: var(--accent);
        border-color: var(--accent);
        color: #fff;
    }
    .reveal.hidden {
        display: none;
    }
    @keyframes slideInUp {
        from { opacity: 0; transform: translateY(20px); }
        to { opacity: 1; transform: none; }
    }
    .hero h1 {
        font-size: 3.2rem;
        margin-bottom: 1rem;
        background: linear-gradient(45deg, var(--text), var(--accent));
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .hero p {
        font-size: 1.25rem;
        color: var(--muted);
        max-width: 640px;
        margin: 0 auto 2rem;
    }
    .section {
        padding: 6rem 2rem;
        max-width: 1100px;
        margin: 0 auto;
    }
    .section h2 {
        font-size: 2.2rem;
        text-align: center;
        margin-bottom: 2.5rem;
    }
    .tab-list {
        display: flex;
        flex-wrap: wrap;
        gap: 0.5rem;
        justify-content: center;
        margin-bottom: 2rem;
    }
    .tab-button {
        background: transparent;
        color: var(--muted);
        border: 1px solid var(--border);
        border-radius: 999px;
        padding: 0.6rem 1.2rem;
        cursor: pointer;
        display: inline-flex;
        gap: 0.5rem;
        align-items: center;
    }
    .tab-button.active {
        background: var(--accent);
        color: #fff;
        border-color: var(--accent);
    }
    .tab-panel {
        background: var(--surface);
        border: 1px solid var(--border);
        border-radius: 16px;
        padding: 2rem;
    }
    .stats-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
        gap: 2rem;
        text-align: center;
    }
    .stat-value {
        display: block;
        font-size: 3rem;
        font-weight: 700;
        color: var(--accent);
    }
    .stat-label {
        color: var(--muted);
    }
    .project-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
        gap: 1.5rem;
    }
    .project-card {
        background: var(--surface);
        border: 1px solid var(--border);
        border-radius: 16px;
        padding: 1.5rem;
        cursor: pointer;
        transition: transform 0.2s ease, border-color 0.2s ease;
        text-align: left;
        color: inherit;
        font: inherit;
        width: 100%;
    }
    .project-card:hover {
        transform: translateY(-4px);
        border-color: var(--accent);
    }
    .accordion-item {
        border-bottom: 1px solid var(--border);
    }
    .accordion-question {
        width: 100%;
        display: flex;
        justify-content: space-between;
        background: none;
        border: none;
        color: var(--text);
        font-size: 1.1rem;
        padding: 1.2rem 0;
        cursor: pointer;
        text-align: left;
    }
    .accordion-answer {
        max-height: 0;
        overflow: hidden;
        color: var(--muted);
        transition: max-height 0.3s ease;
    }
    .accordion-item.open .accordion-answer {
        max-height: 400px;
    }
    .contact-form {
        display: flex;
        flex-direction: column;
        gap: 1rem;
        max-width: 680px;
        margin: 0 auto;
    }
    .contact-form label {
        display: flex;
        flex-direction: column;
        gap: 0.4rem;
        flex: 1;
        color: var(--muted);
    }
    .form-row {
        display: flex;
        gap: 1rem;
    }
    .contact-form input,
    .contact-form select,
    .contact-form textarea {
        background: var(--surface);
        border: 1px solid var(--border);
        border-radius: 8px;
        padding: 0.8rem;
        color: var(--text);
        font: inherit;
    }
    .contact-submit:disabled {
        opacity: 0.6;
        cursor: wait;
    }
    @media (max-width: 768px) {
        .hero h1 {
            font-size: 2.2rem;
        }
        .form-row {
            flex-direction: column;
        }
        .section {
            padding: 4rem 1rem;
        }
    }
"#;

fn service_tabs() -> Vec<TabItem> {
    SERVICES
        .iter()
        .map(|service| TabItem {
            id: service.id,
            label: service.label,
            icon: service.icon,
            body: html! {
                <>
                    <h3>{service.headline}</h3>
                    <ul>
                        { for service.points.iter().map(|point| html! { <li>{*point}</li> }) }
                    </ul>
                </>
            },
        })
        .collect()
}

#[function_component(Home)]
pub fn home() -> Html {
    let open_project = use_state(|| None::<AttrValue>);
    let filter = use_state(|| ALL_PROJECTS);
    let front_orb = use_node_ref();
    let back_orb = use_node_ref();
    use_parallax(front_orb.clone(), back_orb.clone());

    let open = |id: &'static str| {
        let open_project = open_project.clone();
        Callback::from(move |_: MouseEvent| open_project.set(Some(AttrValue::from(id))))
    };
    let close = {
        let open_project = open_project.clone();
        Callback::from(move |_: ()| open_project.set(None))
    };
    let select_filter = |value: &'static str| {
        let filter = filter.clone();
        Callback::from(move |_: MouseEvent| filter.set(value))
    };
    let to_contact = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_section("contact");
    });

    html! {
        <div class="home-page">
            <style>{HOME_CSS}</style>

            <header class="hero" id="home">
                <div class="orb orb-front" ref={front_orb}></div>
                <div class="orb orb-back" ref={back_orb}></div>
                <Reveal>
                    <h1>{"Technology advice from people who still ship"}</h1>
                    <p>{"Northwind Advisory helps growing companies untangle their systems, data and delivery, and then stays to help build the fix."}</p>
                    <a href="#contact" class="hero-cta" onclick={to_contact}>{"Book a free call"}</a>
                    <Terminal />
                </Reveal>
            </header>

            <section class="section" id="services">
                <Reveal><h2>{"What we do"}</h2></Reveal>
                <Reveal delay_ms={100}>
                    <Tabs items={service_tabs()} />
                </Reveal>
            </section>

            <section class="section" id="results">
                <Reveal><h2>{"Results so far"}</h2></Reveal>
                <div class="stats-grid">
                    { for STATS.iter().map(|(value, label)| html! {
                        <StatCounter value={*value} label={*label} />
                    }) }
                </div>
            </section>

            <section class="section" id="projects">
                <Reveal><h2>{"Selected work"}</h2></Reveal>
                <div class="filter-row">
                    { for PROJECT_FILTERS.iter().map(|(value, label)| html! {
                        <button
                            class={classes!("filter-btn", (*filter == *value).then_some("active"))}
                            onclick={select_filter(*value)}
                        >
                            {*label}
                        </button>
                    }) }
                </div>
                <div class="project-grid">
                    { for PROJECTS.iter().enumerate().map(|(i, (id, detail))| html! {
                        <Reveal
                            delay_ms={(i as u32) * 100}
                            class={classes!((!matches_filter(*filter, detail.category)).then_some("hidden"))}
                        >
                            // Re-keyed per filter so the entry animation replays.
                            <button
                                key={format!("{}-{}", id, *filter)}
                                class="project-card"
                                style="animation: slideInUp 0.5s ease forwards;"
                                onclick={open(*id)}
                            >
                                <h3>{detail.title}</h3>
                                <p>{detail.summary}</p>
                                <span class="project-more">{"Read case study "}<i class="fas fa-arrow-right"></i></span>
                            </button>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section class="section" id="faq">
                <Reveal><h2>{"Frequently asked questions"}</h2></Reveal>
                <Reveal delay_ms={100}>
                    <Accordion items={FAQ.to_vec()} />
                </Reveal>
            </section>

            <section class="section" id="contact">
                <Reveal><h2>{"Start a conversation"}</h2></Reveal>
                <Reveal delay_ms={100}>
                    <ContactForm />
                </Reveal>
            </section>

            <ProjectModal project_id={(*open_project).clone()} on_close={close} />
        </div>
    }
}
