use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::use_bool_toggle;

use crate::components::icons;
use crate::components::section::SectionTitle;
use crate::components::video_modal::VideoModal;
use crate::config;
use crate::i18n::{Addon, Content, FaqEntry, Lang, Plan, Project, Service};

#[derive(Properties, PartialEq)]
struct ServiceCardProps {
    service: &'static Service,
}

#[function_component(ServiceCard)]
fn service_card(props: &ServiceCardProps) -> Html {
    let s = props.service;
    html! {
        <div class="service-card">
            <div class="card-icon">{s.icon.svg()}</div>
            <h3>{s.title}</h3>
            <p class="card-desc">{s.desc}</p>
            <ul class="check-list">
                { s.bullets.iter().map(|b| html! { <li>{*b}</li> }).collect::<Html>() }
            </ul>
            <div class="card-note">
                <span class="note-label">{"Perfect for: "}</span>{s.perfect_for}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct PlanCardProps {
    plan: &'static Plan,
}

#[function_component(PlanCard)]
fn plan_card(props: &PlanCardProps) -> Html {
    let p = props.plan;
    html! {
        <div class={classes!("pricing-card", p.popular.then(|| "popular"))}>
            if p.popular {
                <div class="popular-badge">{"MOST POPULAR"}</div>
            }
            <h3>{p.name}</h3>
            <div class="price-row">
                <span class="price">{p.price}</span>
                <span class="price-period">{"/ month"}</span>
            </div>
            <ul class="check-list">
                { p.features.iter().map(|f| html! { <li>{*f}</li> }).collect::<Html>() }
            </ul>
            <div class="card-note">
                <span class="note-label">{"Best for: "}</span>{p.best_for}
            </div>
            <a class="btn-primary plan-cta" href={config::TELEGRAM_URL}>{p.cta}</a>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct AddonCardProps {
    addon: &'static Addon,
}

#[function_component(AddonCard)]
fn addon_card(props: &AddonCardProps) -> Html {
    let a = props.addon;
    html! {
        <div class="addon-card">
            <h3>{a.title}</h3>
            <p class="card-desc">{a.text}</p>
            <div class="addon-price">{a.price}</div>
            <a class="btn-primary" href={config::TELEGRAM_URL}>{a.cta}</a>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: &'static Project,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let p = props.project;
    html! {
        <div class="project-card">
            <div class="project-emoji">{p.emoji}</div>
            <div class="project-body">
                <h3>{p.title}</h3>
                if let Some(url) = p.url {
                    <a class="project-link" href={url}>{p.url_label.unwrap_or(url)}</a>
                }
                <p>{p.summary}</p>
                if let Some(extra) = p.extra {
                    <p>{extra}</p>
                }
                <h4>{p.list_heading}</h4>
                <ul class="check-list">
                    { p.items.iter().map(|item| html! { <li>{*item}</li> }).collect::<Html>() }
                </ul>
                if let Some(client) = p.client {
                    <p class="project-client">{client}</p>
                }
                if let Some(footnote) = p.footnote {
                    <p class="project-client">{footnote}</p>
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    entry: &'static FaqEntry,
}

/// One accordion row. Each item owns its flag, so opening one never
/// touches its neighbours.
#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_bool_toggle(false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.toggle();
        })
    };

    html! {
        <div class={classes!("faq-item", (*is_open).then(|| "open"))}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{props.entry.question}</span>
                <span class="toggle-icon">{ if *is_open { "−" } else { "+" } }</span>
            </button>
            <div class="faq-answer">
                <p>{props.entry.answer}</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub lang: Lang,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let t = Content::get(props.lang);
    let show_video = use_bool_toggle(false);

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let open_video = {
        let show_video = show_video.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            show_video.set(true);
        })
    };

    let close_video = {
        let show_video = show_video.clone();
        Callback::from(move |_: MouseEvent| {
            show_video.set(false);
        })
    };

    html! {
        <div class="home-page">
            // HERO
            <section id="top" class="hero">
                <div class="hero-backdrop">
                    <div class="blob blob-a"></div>
                    <div class="blob blob-b"></div>
                </div>
                <div class="container hero-grid">
                    <div>
                        <h1 class="hero-heading">{t.hero_heading}</h1>
                        <p class="hero-sub">{t.hero_sub}</p>
                        <div class="hero-actions">
                            <a class="btn-primary" href={config::TELEGRAM_URL}>{t.cta_primary}</a>
                            <button class="btn-ghost" onclick={open_video}>
                                {icons::play()}{t.cta_secondary}
                            </button>
                        </div>
                        <div class="hero-metrics">
                            {
                                t.metrics.iter().map(|m| html! {
                                    <div class="metric-chip">{*m}</div>
                                }).collect::<Html>()
                            }
                        </div>
                    </div>
                    <div class="hero-card">
                        <div class="tile-grid">
                            {
                                t.tiles.iter().map(|tile| html! {
                                    <div class="tile">
                                        <div class="tile-head">
                                            <span class="tile-icon">{tile.icon.svg()}</span>
                                            <span class="tile-title">{tile.title}</span>
                                        </div>
                                        <p>{tile.text}</p>
                                    </div>
                                }).collect::<Html>()
                            }
                        </div>
                        <div class="hero-security">
                            {icons::shield()}
                            <span>{t.security_note}</span>
                        </div>
                    </div>
                </div>

                // Floating CTA dock
                <div class="cta-dock">
                    {icons::message()}
                    <span class="dock-text">{t.misc.have_questions}</span>
                    <a class="btn-primary dock-btn" href={config::TELEGRAM_URL}>{t.misc.open_chat}</a>
                </div>
            </section>

            if *show_video {
                <VideoModal lang={props.lang} on_close={close_video} />
            }

            <div class="divider"></div>

            // ABOUT
            <section id="about" class="section">
                <div class="container">
                    <SectionTitle title={t.about.title} eyebrow={Some(config::BRAND)} />
                    <div class="about-card">
                        <h3>{t.about.legal_heading}</h3>
                        <p>{t.about.legal_body}</p>
                        { t.about.intro.iter().map(|paragraph| html! { <p>{*paragraph}</p> }).collect::<Html>() }
                        <h3>{t.about.what_heading}</h3>
                        <ul class="check-list">
                            { t.about.what_items.iter().map(|item| html! { <li>{*item}</li> }).collect::<Html>() }
                        </ul>
                        <h3>{t.about.approach_heading}</h3>
                        <p>{t.about.approach_body}</p>
                        <h3>{t.about.security_heading}</h3>
                        <p>{t.about.security_body}</p>
                        <h3>{t.about.audience_heading}</h3>
                        <p>{t.about.audience_body}</p>
                        <div class="about-closing">
                            <p class="closing-main">{t.about.closing}</p>
                            <p>{t.about.closing_sub}</p>
                        </div>
                    </div>
                </div>
            </section>

            <div class="divider"></div>

            // PROJECTS
            <section id="projects" class="section">
                <div class="container">
                    <SectionTitle title={t.projects_title} />
                    <div class="project-list">
                        {
                            t.projects.iter().map(|project| html! {
                                <ProjectCard {project} />
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            <div class="divider"></div>

            // SERVICES
            <section id="services" class="section">
                <div class="container">
                    <SectionTitle eyebrow={Some(t.services_eyebrow)} title={t.services_title} />
                    <div class="card-grid three">
                        {
                            t.services.iter().map(|service| html! {
                                <ServiceCard {service} />
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            <div class="divider"></div>

            // HOW IT WORKS
            <section id="how" class="section">
                <div class="container">
                    <SectionTitle eyebrow={Some(t.how_eyebrow)} title={t.how_title} />
                    <div class="card-grid four">
                        {
                            t.how.iter().map(|step| html! {
                                <div class="step-card">
                                    <div class="step-badge">{format!("Step {}", step.step)}</div>
                                    <h3>{step.title}</h3>
                                    <p>{step.text}</p>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            <div class="divider"></div>

            // PRICING
            <section id="pricing" class="section">
                <div class="container">
                    <SectionTitle eyebrow={Some(t.pricing_eyebrow)} title={t.pricing_title} />
                    <div class="card-grid three">
                        {
                            t.pricing.iter().map(|plan| html! {
                                <PlanCard {plan} />
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            <div class="divider"></div>

            // ADD-ONS
            <section id="add-ons" class="section">
                <div class="container">
                    <SectionTitle title={t.addons_title} />
                    <div class="card-grid three">
                        {
                            t.addons.iter().map(|addon| html! {
                                <AddonCard {addon} />
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            <div class="divider"></div>

            // TECH STACK
            <section id="tech" class="section">
                <div class="container">
                    <SectionTitle eyebrow={Some(t.tech_eyebrow)} title={t.tech_title} />
                    <h3 class="chip-heading">{t.tools_title}</h3>
                    <div class="chip-row">
                        { t.tools.iter().map(|tool| html! { <div class="chip">{*tool}</div> }).collect::<Html>() }
                    </div>
                    <h3 class="chip-heading">{t.local_title}</h3>
                    <div class="chip-row">
                        { t.local.iter().map(|item| html! { <div class="chip">{*item}</div> }).collect::<Html>() }
                    </div>
                </div>
            </section>

            <div class="divider"></div>

            // FAQ
            <section id="faq" class="section">
                <div class="container">
                    <SectionTitle title={t.faq_title} />
                    <div class="faq-list">
                        {
                            t.faq.iter().map(|entry| html! {
                                <FaqItem {entry} />
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            <div class="divider"></div>

            // FINAL CTA
            <section class="final-cta">
                <div class="container">
                    <h2>{t.final_cta.heading}</h2>
                    <p class="final-sub">{t.final_cta.sub}</p>
                    <div class="cta-actions">
                        <a class="btn-primary" href={config::TELEGRAM_URL}>{t.final_cta.primary}</a>
                        <a class="btn-ghost inverted" href={config::TELEGRAM_URL}>{t.final_cta.ghost}</a>
                    </div>
                    <div class="cta-chips">
                        {
                            t.final_cta.chips.iter().map(|chip| html! {
                                <div class="cta-chip">{*chip}</div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            <style>
                {r#"
                .home-page {
                    overflow-x: hidden;
                }

                .section {
                    padding: 1rem 0;
                }

                .divider {
                    height: 1px;
                    width: 100%;
                    margin: 4rem 0;
                    background: linear-gradient(to right, transparent, #e2e8f0, transparent);
                }

                .hero {
                    position: relative;
                    padding: 5rem 0 6rem;
                }

                .hero-backdrop {
                    position: absolute;
                    inset: 0;
                    z-index: -1;
                    overflow: hidden;
                    pointer-events: none;
                }

                .blob {
                    position: absolute;
                    border-radius: 50%;
                    filter: blur(64px);
                }

                .blob-a {
                    top: -10rem;
                    left: 50%;
                    width: 500px;
                    height: 500px;
                    transform: translateX(-50%);
                    background: linear-gradient(45deg, rgba(99, 102, 241, 0.3), rgba(217, 70, 239, 0.3), rgba(16, 185, 129, 0.3));
                    animation: drift-a 14s ease-in-out infinite;
                }

                .blob-b {
                    bottom: -10rem;
                    right: -5rem;
                    width: 420px;
                    height: 420px;
                    background: linear-gradient(45deg, rgba(244, 63, 94, 0.25), rgba(249, 115, 22, 0.25), rgba(234, 179, 8, 0.25));
                    animation: drift-b 18s ease-in-out infinite;
                }

                @keyframes drift-a {
                    0%, 100% { transform: translateX(-50%) translateY(0); }
                    35% { transform: translateX(-50%) translateY(30px); }
                    70% { transform: translateX(-50%) translateY(-20px); }
                }

                @keyframes drift-b {
                    0%, 100% { transform: translate(0, 0); }
                    35% { transform: translate(15px, -20px); }
                    70% { transform: translate(-10px, 10px); }
                }

                .hero-grid {
                    display: grid;
                    gap: 2.5rem;
                    align-items: center;
                }

                .hero-heading {
                    font-size: 2.5rem;
                    font-weight: 800;
                    line-height: 1.1;
                    letter-spacing: -0.02em;
                }

                .hero-sub {
                    max-width: 42rem;
                    margin-top: 1.25rem;
                    font-size: 1.05rem;
                    color: #475569;
                }

                .hero-actions {
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    gap: 1rem;
                    margin-top: 2rem;
                }

                .hero-metrics {
                    display: grid;
                    grid-template-columns: repeat(3, minmax(0, 1fr));
                    gap: 0.75rem;
                    max-width: 28rem;
                    margin-top: 2.5rem;
                }

                .metric-chip {
                    padding: 0.75rem 1rem;
                    border: 1px solid #e2e8f0;
                    border-radius: 16px;
                    background: rgba(255, 255, 255, 0.6);
                    backdrop-filter: blur(4px);
                    text-align: center;
                    font-size: 0.85rem;
                    font-weight: 700;
                    color: #1e293b;
                }

                .hero-card {
                    position: relative;
                    overflow: hidden;
                    padding: 1.5rem;
                    border: 1px solid #e2e8f0;
                    border-radius: 24px;
                    background: #fff;
                    box-shadow: 0 20px 25px -5px rgba(15, 23, 42, 0.1);
                }

                .tile-grid {
                    display: grid;
                    gap: 1rem;
                }

                .tile {
                    padding: 1rem;
                    border: 1px solid #e2e8f0;
                    border-radius: 16px;
                }

                .tile-head {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin-bottom: 0.5rem;
                    color: #334155;
                }

                .tile-icon {
                    display: inline-flex;
                    padding: 0.5rem;
                    border-radius: 10px;
                    background: #f1f5f9;
                }

                .tile-icon .icon {
                    width: 1.25rem;
                    height: 1.25rem;
                }

                .tile-title {
                    font-weight: 600;
                }

                .tile p {
                    font-size: 0.9rem;
                    color: #475569;
                }

                .hero-security {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin-top: 1.25rem;
                    font-size: 0.8rem;
                    color: #64748b;
                }

                .hero-security .icon {
                    width: 1rem;
                    height: 1rem;
                }

                .cta-dock {
                    position: fixed;
                    bottom: 1.5rem;
                    left: 50%;
                    z-index: 30;
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 0.5rem 1rem;
                    border: 1px solid #e2e8f0;
                    border-radius: 999px;
                    background: rgba(255, 255, 255, 0.9);
                    backdrop-filter: blur(8px);
                    box-shadow: 0 20px 25px -5px rgba(15, 23, 42, 0.15);
                    transform: translateX(-50%);
                }

                .cta-dock .icon {
                    width: 1rem;
                    height: 1rem;
                    color: #c026d3;
                }

                .dock-text {
                    display: none;
                    font-size: 0.9rem;
                    color: #334155;
                }

                .dock-btn {
                    padding: 0.5rem 1rem;
                    font-size: 0.9rem;
                }

                .about-card {
                    margin-top: 2.5rem;
                    padding: 2rem;
                    border: 1px solid #e2e8f0;
                    border-radius: 24px;
                    background: #fff;
                }

                .about-card h3 {
                    margin: 1.5rem 0 0.75rem;
                    font-size: 1.1rem;
                }

                .about-card h3:first-child {
                    margin-top: 0;
                }

                .about-card p {
                    margin-bottom: 1rem;
                    color: #475569;
                }

                .about-closing {
                    margin-top: 2rem;
                    padding-top: 1.5rem;
                    border-top: 1px solid #e2e8f0;
                    text-align: center;
                }

                .closing-main {
                    font-size: 1.1rem;
                    font-weight: 600;
                    color: #1e293b;
                }

                .project-list {
                    display: grid;
                    gap: 2rem;
                    margin-top: 2.5rem;
                }

                .project-card {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    padding: 1.5rem;
                    border: 1px solid #e2e8f0;
                    border-radius: 24px;
                    background: #fff;
                }

                .project-emoji {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    flex-shrink: 0;
                    width: 3rem;
                    height: 3rem;
                    border: 1px solid #e2e8f0;
                    border-radius: 12px;
                    background: linear-gradient(135deg, #eef2ff, #fdf4ff);
                    font-size: 1.25rem;
                }

                .project-body h3 {
                    font-size: 1.2rem;
                }

                .project-link {
                    display: inline-block;
                    margin-top: 0.25rem;
                    color: #4f46e5;
                    text-decoration: none;
                }

                .project-link:hover {
                    text-decoration: underline;
                }

                .project-body p {
                    margin-top: 0.75rem;
                    color: #475569;
                }

                .project-body h4 {
                    margin-top: 1rem;
                    font-weight: 600;
                    color: #1e293b;
                }

                .project-client {
                    font-size: 0.9rem;
                }

                .card-grid {
                    display: grid;
                    gap: 1.5rem;
                    margin-top: 2.5rem;
                }

                .service-card,
                .addon-card,
                .step-card {
                    display: flex;
                    flex-direction: column;
                    padding: 1.5rem;
                    border: 1px solid #e2e8f0;
                    border-radius: 24px;
                    background: linear-gradient(to bottom, #fff, #f8fafc);
                    transition: box-shadow 0.2s ease;
                }

                .service-card:hover {
                    box-shadow: 0 10px 15px -3px rgba(15, 23, 42, 0.1);
                }

                .card-icon {
                    display: inline-flex;
                    align-self: flex-start;
                    margin-bottom: 1rem;
                    padding: 0.75rem;
                    border: 1px solid #e2e8f0;
                    border-radius: 16px;
                    background: linear-gradient(135deg, #eef2ff, #fdf4ff);
                    color: #4f46e5;
                }

                .card-icon .icon {
                    width: 1.5rem;
                    height: 1.5rem;
                }

                .card-desc {
                    margin-top: 0.5rem;
                    font-size: 0.9rem;
                    color: #475569;
                }

                .check-list {
                    margin: 1rem 0 0;
                    padding: 0;
                    list-style: none;
                }

                .check-list li {
                    position: relative;
                    padding: 0.25rem 0 0.25rem 1.5rem;
                    font-size: 0.9rem;
                    color: #334155;
                }

                .check-list li::before {
                    content: '✓';
                    position: absolute;
                    left: 0;
                    color: #4f46e5;
                }

                .card-note {
                    margin-top: 1rem;
                    font-size: 0.8rem;
                    color: #64748b;
                }

                .note-label {
                    font-weight: 600;
                }

                .step-card {
                    position: relative;
                    margin-top: 0.75rem;
                }

                .step-badge {
                    position: absolute;
                    top: -0.75rem;
                    left: 1.5rem;
                    padding: 0.25rem 0.75rem;
                    border-radius: 999px;
                    background: #0f172a;
                    font-size: 0.75rem;
                    font-weight: 700;
                    color: #fff;
                }

                .step-card h3 {
                    margin-top: 0.5rem;
                    font-size: 1.05rem;
                }

                .step-card p {
                    margin-top: 0.5rem;
                    font-size: 0.9rem;
                    color: #475569;
                }

                .pricing-card {
                    position: relative;
                    display: flex;
                    flex-direction: column;
                    padding: 1.5rem;
                    border: 1px solid #e2e8f0;
                    border-radius: 24px;
                    background: #fff;
                }

                .pricing-card.popular {
                    border-color: #e879f9;
                    background: linear-gradient(to bottom, #fff, #fdf4ff, #fff);
                    box-shadow: 0 10px 15px -3px rgba(192, 38, 211, 0.15);
                }

                .popular-badge {
                    position: absolute;
                    top: -0.75rem;
                    right: 1.5rem;
                    padding: 0.25rem 0.75rem;
                    border-radius: 999px;
                    background: linear-gradient(to right, #c026d3, #e11d48);
                    font-size: 0.7rem;
                    font-weight: 700;
                    color: #fff;
                }

                .price-row {
                    display: flex;
                    align-items: flex-end;
                    gap: 0.5rem;
                    margin-top: 0.5rem;
                }

                .price {
                    font-size: 1.9rem;
                    font-weight: 700;
                }

                .price-period {
                    padding-bottom: 0.3rem;
                    font-size: 0.85rem;
                    color: #64748b;
                }

                .plan-cta {
                    margin-top: 1.5rem;
                    justify-content: center;
                }

                .addon-price {
                    margin-top: 0.75rem;
                    font-weight: 600;
                }

                .addon-card .btn-primary {
                    align-self: flex-start;
                    margin-top: 1rem;
                }

                .chip-heading {
                    margin: 2.5rem 0 1rem;
                    font-size: 1.1rem;
                }

                .chip-row {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                }

                .chip {
                    padding: 0.4rem 0.8rem;
                    border-radius: 999px;
                    background: #f1f5f9;
                    font-size: 0.85rem;
                    color: #334155;
                }

                .faq-list {
                    display: grid;
                    gap: 1rem;
                    margin-top: 2.5rem;
                }

                .faq-item {
                    border: 1px solid #e2e8f0;
                    border-radius: 16px;
                    background: rgba(255, 255, 255, 0.7);
                    overflow: hidden;
                }

                .faq-question {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    width: 100%;
                    padding: 1.25rem;
                    border: none;
                    background: none;
                    font-size: 0.95rem;
                    font-weight: 600;
                    color: #0f172a;
                    text-align: left;
                    cursor: pointer;
                }

                .toggle-icon {
                    font-size: 1.25rem;
                    color: #4f46e5;
                    transition: transform 0.3s ease;
                }

                .faq-item.open .toggle-icon {
                    transform: rotate(180deg);
                }

                .faq-answer {
                    max-height: 0;
                    padding: 0 1.25rem;
                    overflow: hidden;
                    transition: max-height 0.4s ease;
                }

                .faq-item.open .faq-answer {
                    max-height: 20rem;
                    padding: 0 1.25rem 1.25rem;
                }

                .faq-answer p {
                    font-size: 0.9rem;
                    color: #475569;
                    line-height: 1.6;
                }

                .final-cta {
                    overflow: hidden;
                    padding: 4rem 0;
                    border-radius: 24px;
                    background: linear-gradient(to right, #4f46e5, #c026d3, #e11d48);
                    color: #fff;
                    text-align: center;
                }

                .final-cta h2 {
                    font-size: 2rem;
                }

                .final-sub {
                    max-width: 42rem;
                    margin: 0.75rem auto 0;
                    color: #e2e8f0;
                }

                .cta-actions {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 1rem;
                    margin-top: 2rem;
                }

                .btn-ghost.inverted {
                    border-color: rgba(255, 255, 255, 0.3);
                    background: rgba(255, 255, 255, 0.1);
                    color: #fff;
                }

                .btn-ghost.inverted:hover {
                    background: rgba(255, 255, 255, 0.2);
                }

                .cta-chips {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 0.5rem;
                    margin-top: 1.5rem;
                }

                .cta-chip {
                    padding: 0.25rem 0.75rem;
                    border-radius: 999px;
                    background: rgba(255, 255, 255, 0.1);
                    font-size: 0.75rem;
                }

                @media (min-width: 640px) {
                    .tile-grid {
                        grid-template-columns: repeat(2, minmax(0, 1fr));
                    }

                    .dock-text {
                        display: block;
                    }

                    .project-card {
                        flex-direction: row;
                    }
                }

                @media (min-width: 768px) {
                    .card-grid.three {
                        grid-template-columns: repeat(2, minmax(0, 1fr));
                    }
                }

                @media (min-width: 1024px) {
                    .hero {
                        padding-top: 7rem;
                    }

                    .hero-heading {
                        font-size: 3.5rem;
                    }

                    .hero-grid {
                        grid-template-columns: repeat(2, minmax(0, 1fr));
                    }

                    .card-grid.three {
                        grid-template-columns: repeat(3, minmax(0, 1fr));
                    }

                    .card-grid.four {
                        grid-template-columns: repeat(4, minmax(0, 1fr));
                    }
                }
                "#}
            </style>
        </div>
    }
}
