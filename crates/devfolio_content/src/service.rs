use serde::Serialize;

/// Grid footprint of a service card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceSize {
    Large,
    Medium,
    Small,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Service {
    pub slug: &'static str,
    pub size: ServiceSize,
    pub icon: &'static str,
    /// Brand names, never translated.
    pub platforms: &'static [&'static str],
}

impl Service {
    pub fn title_key(&self) -> String {
        format!("services.cards.{}.title", self.slug)
    }

    pub fn description_key(&self) -> String {
        format!("services.cards.{}.description", self.slug)
    }
}

pub const SERVICES: &[Service] = &[
    Service {
        slug: "custom-software",
        size: ServiceSize::Large,
        icon: "code",
        platforms: &[],
    },
    Service {
        slug: "legacy-migration",
        size: ServiceSize::Medium,
        icon: "refresh-cw",
        platforms: &[],
    },
    Service {
        slug: "multi-platform",
        size: ServiceSize::Medium,
        icon: "smartphone",
        platforms: &["iOS", "Android", "Web"],
    },
    Service {
        slug: "ai-integration",
        size: ServiceSize::Medium,
        icon: "bot",
        platforms: &[],
    },
    Service {
        slug: "ux-ui-design",
        size: ServiceSize::Small,
        icon: "palette",
        platforms: &[],
    },
    Service {
        slug: "landing-pages",
        size: ServiceSize::Small,
        icon: "layout",
        platforms: &[],
    },
];
