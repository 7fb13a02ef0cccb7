use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub slug: &'static str,
    pub name: &'static str,
    pub url: &'static str,
    pub icon: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        slug: "email",
        name: "Email",
        url: "mailto:hello@devportfolio.com",
        icon: "at-sign",
    },
    SocialLink {
        slug: "github",
        name: "GitHub",
        url: "https://github.com/devportfolio",
        icon: "terminal",
    },
];
