use yew::prelude::*;

/// Icons referenced by content entries. Every tile and service names its
/// icon explicitly; nothing is derived from list position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    FileText,
    Bot,
    BarChart,
    Workflow,
    Brain,
    Users,
}

impl Icon {
    pub fn svg(self) -> Html {
        match self {
            Icon::FileText => html! {
                <svg class="icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                    <path d="M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8l-6-6z" />
                    <path d="M14 2v6h6" />
                    <path d="M16 13H8" />
                    <path d="M16 17H8" />
                </svg>
            },
            Icon::Bot => html! {
                <svg class="icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                    <path d="M12 8V4" />
                    <rect x="4" y="8" width="16" height="12" rx="2" />
                    <path d="M9 14h.01" />
                    <path d="M15 14h.01" />
                </svg>
            },
            Icon::BarChart => html! {
                <svg class="icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                    <path d="M6 20v-8" />
                    <path d="M12 20V4" />
                    <path d="M18 20v-6" />
                </svg>
            },
            Icon::Workflow => html! {
                <svg class="icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                    <rect x="3" y="3" width="7" height="7" rx="1" />
                    <rect x="14" y="14" width="7" height="7" rx="1" />
                    <path d="M10 6.5h5a2 2 0 0 1 2 2V14" />
                </svg>
            },
            Icon::Brain => html! {
                <svg class="icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                    <path d="M12 5a3 3 0 0 0-5.8 1A3.5 3.5 0 0 0 4 9.5c0 .8.3 1.6.8 2.2A3.5 3.5 0 0 0 6.5 18 3 3 0 0 0 12 17z" />
                    <path d="M12 5a3 3 0 0 1 5.8 1A3.5 3.5 0 0 1 20 9.5c0 .8-.3 1.6-.8 2.2A3.5 3.5 0 0 1 17.5 18 3 3 0 0 1 12 17z" />
                </svg>
            },
            Icon::Users => html! {
                <svg class="icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                    <path d="M17 21v-2a4 4 0 0 0-4-4H5a4 4 0 0 0-4 4v2" />
                    <circle cx="9" cy="7" r="4" />
                    <path d="M23 21v-2a4 4 0 0 0-3-3.87" />
                    <path d="M16 3.13a4 4 0 0 1 0 7.75" />
                </svg>
            },
        }
    }
}

/// Play glyph for the demo button.
pub fn play() -> Html {
    html! {
        <svg class="icon" viewBox="0 0 24 24" fill="currentColor" stroke="none">
            <polygon points="6 3 20 12 6 21 6 3" />
        </svg>
    }
}

/// Chat glyph for the floating dock.
pub fn message() -> Html {
    html! {
        <svg class="icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d="M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z" />
        </svg>
    }
}

/// Shield glyph for the security note under the hero tiles.
pub fn shield() -> Html {
    html! {
        <svg class="icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d="M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z" />
        </svg>
    }
}
