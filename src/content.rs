/// Case study shown in the project modal.
#[derive(Debug, PartialEq)]
pub struct ProjectDetail {
    pub title: &'static str,
    pub category: &'static str,
    pub summary: &'static str,
    pub tags: &'static [&'static str],
    pub content: &'static [&'static str],
}

pub const PROJECTS: &[(&str, ProjectDetail)] = &[
    (
        "logistics-platform",
        ProjectDetail {
            title: "Freight Logistics Platform",
            category: "engineering",
            summary: "Re-architected a regional carrier's dispatch system.",
            tags: &["Architecture", "Cloud migration"],
            content: &[
                "A regional freight carrier was running dispatch on a fifteen-year-old monolith that could no longer keep up with same-day delivery volumes.",
                "We split routing, billing and driver management into independently deployed services and moved them to managed infrastructure over four release trains.",
                "Dispatch latency dropped from minutes to seconds and the carrier onboarded two new depots without adding operations staff.",
            ],
        },
    ),
    (
        "retail-analytics",
        ProjectDetail {
            title: "Retail Analytics Rollout",
            category: "data",
            summary: "Unified sales data for 300 stores into one reporting layer.",
            tags: &["Data", "Reporting"],
            content: &[
                "Store managers were reconciling spreadsheets from three point-of-sale vendors every Monday morning.",
                "We built a nightly ingestion pipeline, a shared product catalogue and a set of dashboards agreed with regional leads.",
                "Weekly reporting now lands before stores open and stock-outs on top sellers fell by a fifth in the first quarter.",
            ],
        },
    ),
    (
        "clinic-booking",
        ProjectDetail {
            title: "Clinic Booking Service",
            category: "product",
            summary: "Patient self-booking for a network of private clinics.",
            tags: &["Product", "Accessibility"],
            content: &[
                "Reception teams at a network of twelve clinics handled every appointment by phone.",
                "We ran discovery with patients and staff, then shipped an accessible booking flow integrated with the existing practice management system.",
                "Half of all appointments moved online within six months and phone wait times dropped accordingly.",
            ],
        },
    ),
    (
        "fintech-audit",
        ProjectDetail {
            title: "Payments Security Review",
            category: "security",
            summary: "Pre-launch security and resilience audit for a payments start-up.",
            tags: &["Security", "Resilience"],
            content: &[
                "A payments start-up needed an independent review before its banking partner would approve go-live.",
                "We audited key management, incident runbooks and failover, and paired with the team on the fixes.",
                "The partner signed off on the first submission and the launch went ahead on schedule.",
            ],
        },
    ),
];

/// Filter value that shows every project.
pub const ALL_PROJECTS: &str = "all";

/// Portfolio filter buttons as `(filter, label)`, in display order.
pub const PROJECT_FILTERS: &[(&str, &str)] = &[
    (ALL_PROJECTS, "All"),
    ("engineering", "Engineering"),
    ("data", "Data"),
    ("product", "Product"),
    ("security", "Security"),
];

pub fn matches_filter(filter: &str, category: &str) -> bool {
    filter == ALL_PROJECTS || filter == category
}

pub fn project(id: &str) -> Option<&'static ProjectDetail> {
    PROJECTS
        .iter()
        .find(|(key, _)| *key == id)
        .map(|(_, detail)| detail)
}

pub struct Service {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub headline: &'static str,
    pub points: &'static [&'static str],
}

pub const SERVICES: &[Service] = &[
    Service {
        id: "strategy",
        label: "Strategy",
        icon: "fas fa-compass",
        headline: "Technology strategy that survives contact with reality",
        points: &[
            "Architecture and platform reviews",
            "Build-versus-buy assessments",
            "Roadmaps tied to measurable outcomes",
        ],
    },
    Service {
        id: "engineering",
        label: "Engineering",
        icon: "fas fa-code",
        headline: "Senior engineers embedded with your team",
        points: &[
            "Legacy modernisation and migrations",
            "Performance and reliability work",
            "Delivery coaching and code review",
        ],
    },
    Service {
        id: "data",
        label: "Data",
        icon: "fas fa-chart-line",
        headline: "Data you can actually make decisions with",
        points: &[
            "Pipelines and warehouse design",
            "Reporting agreed with the people who read it",
            "Data quality monitoring",
        ],
    },
    Service {
        id: "security",
        label: "Security",
        icon: "fas fa-shield-halved",
        headline: "Practical security for growing companies",
        points: &[
            "Pre-launch and partner audits",
            "Incident readiness exercises",
            "Secure development training",
        ],
    },
];

pub const FAQ: &[(&str, &str)] = &[
    (
        "How does an engagement usually start?",
        "With a free one-hour call. If there is a fit we follow up with a short written proposal covering scope, team and a fixed price for the first phase.",
    ),
    (
        "Do you work with small companies?",
        "Yes. Roughly half of our clients have fewer than fifty employees. Smaller engagements are often a few days of review followed by a written report.",
    ),
    (
        "Can you work alongside our existing team?",
        "That is how we prefer to work. Our engineers join your stand-ups, use your tools and leave the knowledge behind when the engagement ends.",
    ),
    (
        "Where are you based?",
        "Our team is spread across three time zones in Europe, so we overlap comfortably with both UK and US East Coast working hours.",
    ),
    (
        "How quickly can you start?",
        "Typically within two to three weeks of signing. Short audits can sometimes start the following week.",
    ),
];

/// Lines typed out one after another in the hero terminal.
pub const TERMINAL_LINES: &[&str] = &[
    "$ northwind audit --scope platform",
    "> mapping 42 services...",
    "> 3 single points of failure found",
    "> roadmap ready. let's talk.",
];

/// Values are parsed by the counter animation, labels are shown as is.
pub const STATS: &[(&str, &str)] = &[
    ("120+", "Projects delivered"),
    ("98%", "Client retention"),
    ("15", "Years in practice"),
    ("99.95%", "Uptime of systems we run"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::counter::CounterSpec;

    #[test]
    fn looks_up_known_project() {
        let detail = project("clinic-booking").unwrap();
        assert_eq!(detail.title, "Clinic Booking Service");
        assert!(!detail.content.is_empty());
    }

    #[test]
    fn unknown_project_is_none() {
        assert!(project("nope").is_none());
    }

    #[test]
    fn project_ids_are_unique() {
        for (i, (id, _)) in PROJECTS.iter().enumerate() {
            assert!(PROJECTS[i + 1..].iter().all(|(other, _)| other != id), "duplicate {}", id);
        }
    }

    #[test]
    fn all_filter_shows_every_project() {
        assert!(PROJECTS.iter().all(|(_, p)| matches_filter(ALL_PROJECTS, p.category)));
    }

    #[test]
    fn category_filter_shows_only_its_projects() {
        let shown: Vec<&str> = PROJECTS
            .iter()
            .filter(|(_, p)| matches_filter("data", p.category))
            .map(|(id, _)| *id)
            .collect();
        assert_eq!(shown, vec!["retail-analytics"]);
        assert!(!matches_filter("security", "data"));
    }

    #[test]
    fn every_project_has_a_filter_button() {
        for (id, detail) in PROJECTS {
            assert!(
                PROJECT_FILTERS.iter().any(|(filter, _)| *filter == detail.category),
                "{} cannot be filtered",
                id
            );
        }
    }

    #[test]
    fn every_stat_is_a_counter() {
        for (value, label) in STATS {
            assert!(CounterSpec::parse(value).is_some(), "{} would not animate", label);
        }
    }
}
