//! Featured projects and their localized card / case-study view.
//!
//! A [`Project`] only carries structure. Every visible string lives in the
//! dictionaries under `projects.items.<slug>` and
//! `projects.caseStudies.<slug>`, and is pulled in by
//! [`LocalizedProject::resolve`].

use devfolio_i18n::LocaleContext;
use serde::Serialize;

use crate::tech::icons_for;

/// Layout slot of a project card in the bento grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectVariant {
    Featured,
    Small,
    Icon,
    Wide,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub slug: &'static str,
    pub variant: ProjectVariant,
    pub tags: &'static [&'static str],
    pub image: Option<&'static str>,
    pub icon: Option<&'static str>,
    pub has_category: bool,
    pub has_stat: bool,
    pub tech_stack: &'static [&'static str],
    pub has_case_study: bool,
}

impl Project {
    fn item_key(&self, field: &str) -> String {
        format!("projects.items.{}.{field}", self.slug)
    }

    pub fn title_key(&self) -> String {
        self.item_key("title")
    }

    pub fn description_key(&self) -> String {
        self.item_key("description")
    }

    pub fn category_key(&self) -> Option<String> {
        self.has_category.then(|| self.item_key("category"))
    }

    pub fn stat_key(&self) -> Option<String> {
        self.has_stat.then(|| self.item_key("stat"))
    }

    /// Prefix of the case-study subtree, e.g. `projects.caseStudies.defi`.
    pub fn case_study_key(&self) -> Option<String> {
        self.has_case_study
            .then(|| format!("projects.caseStudies.{}", self.slug))
    }
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        slug: "defi",
        variant: ProjectVariant::Featured,
        tags: &["Next.js", "Solidity", "Tailwind"],
        image: Some("/defi-dashboard-crypto-finance-dark-ui.jpg"),
        icon: None,
        has_category: false,
        has_stat: false,
        tech_stack: &["react", "typescript"],
        has_case_study: true,
    },
    Project {
        id: 2,
        slug: "neural",
        variant: ProjectVariant::Small,
        tags: &["Python", "PyTorch"],
        image: None,
        icon: None,
        has_category: true,
        has_stat: false,
        tech_stack: &["nodejs", "python"],
        has_case_study: false,
    },
    Project {
        id: 3,
        slug: "saas",
        variant: ProjectVariant::Icon,
        tags: &[],
        image: None,
        icon: Some("activity"),
        has_category: false,
        has_stat: true,
        tech_stack: &["typescript"],
        has_case_study: false,
    },
    Project {
        id: 4,
        slug: "fintech",
        variant: ProjectVariant::Wide,
        tags: &["TypeScript", "PostgreSQL"],
        image: None,
        icon: None,
        has_category: false,
        has_stat: false,
        tech_stack: &["java", "postgres"],
        has_case_study: false,
    },
];

pub fn project(slug: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.slug == slug)
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LocalizedTech {
    pub name: &'static str,
    pub icon: &'static str,
    pub alt: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Section {
    pub title: String,
    pub description: String,
    pub items: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Capability {
    pub icon: String,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudy {
    pub title: String,
    pub problem: String,
    pub problem_section: Section,
    pub solution_section: Section,
    pub capabilities_title: String,
    pub capabilities: Vec<Capability>,
}

/// A project with every display string resolved for one locale.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedProject {
    pub id: u32,
    pub slug: &'static str,
    pub variant: ProjectVariant,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stat: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<&'static str>,
    pub tags: Vec<&'static str>,
    pub tech_stack: Vec<LocalizedTech>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_study: Option<CaseStudy>,
}

impl LocalizedProject {
    /// Resolve `project` against a root (non-namespaced) context.
    pub fn resolve(ctx: &LocaleContext<'_>, project: &Project) -> Self {
        let tech_stack = icons_for(project.tech_stack)
            .into_iter()
            .map(|tech| LocalizedTech {
                name: tech.name,
                icon: tech.icon,
                alt: ctx.t(&tech.alt_key()),
            })
            .collect();

        Self {
            id: project.id,
            slug: project.slug,
            variant: project.variant,
            title: ctx.t(&project.title_key()),
            description: ctx.t(&project.description_key()),
            category: project.category_key().map(|k| ctx.t(&k)),
            stat: project.stat_key().map(|k| ctx.t(&k)),
            image: project.image,
            icon: project.icon,
            tags: project.tags.to_vec(),
            tech_stack,
            case_study: project
                .case_study_key()
                .map(|k| resolve_case_study(&ctx.namespace(&k))),
        }
    }

    /// All catalog projects, in display order.
    pub fn resolve_all(ctx: &LocaleContext<'_>) -> Vec<Self> {
        PROJECTS.iter().map(|p| Self::resolve(ctx, p)).collect()
    }
}

fn resolve_case_study(cs: &LocaleContext<'_>) -> CaseStudy {
    CaseStudy {
        title: cs.t("title"),
        problem: cs.t("problem"),
        problem_section: resolve_section(&cs.namespace("problemSection")),
        solution_section: resolve_section(&cs.namespace("solutionSection")),
        capabilities_title: cs.t("capabilitiesSection.title"),
        capabilities: (0..list_len(cs, "capabilitiesSection.items", Some("text")))
            .map(|i| Capability {
                icon: cs.t(&format!("capabilitiesSection.items.{i}.icon")),
                text: cs.t(&format!("capabilitiesSection.items.{i}.text")),
            })
            .collect(),
    }
}

fn resolve_section(section: &LocaleContext<'_>) -> Section {
    Section {
        title: section.t("title"),
        description: section.t("description"),
        items: (0..list_len(section, "items", None))
            .map(|i| section.t(&format!("items.{i}")))
            .collect(),
    }
}

/// Length of a dictionary list, counting up to the first missing entry.
/// `field` names the leaf to probe for lists of objects.
fn list_len(ctx: &LocaleContext<'_>, list: &str, field: Option<&str>) -> usize {
    (0..)
        .take_while(|i| match field {
            Some(field) => ctx.has(&format!("{list}.{i}.{field}")),
            None => ctx.has(&format!("{list}.{i}")),
        })
        .count()
}
