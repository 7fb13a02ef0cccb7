use serde::Serialize;

/// A headline number in the hero section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct HeroStat {
    pub slug: &'static str,
    pub icon: &'static str,
}

impl HeroStat {
    pub fn value_key(&self) -> String {
        format!("stats.{}.value", self.slug)
    }

    pub fn label_key(&self) -> String {
        format!("stats.{}.label", self.slug)
    }
}

pub const HERO_STATS: &[HeroStat] = &[
    HeroStat {
        slug: "achievements",
        icon: "award",
    },
    HeroStat {
        slug: "experience",
        icon: "calendar",
    },
    HeroStat {
        slug: "mvps",
        icon: "rocket",
    },
];
