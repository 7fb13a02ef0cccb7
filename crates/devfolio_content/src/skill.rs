use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Database,
    Devops,
    Ai,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 5] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Database,
        SkillCategory::Devops,
        SkillCategory::Ai,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            SkillCategory::Frontend => "frontend",
            SkillCategory::Backend => "backend",
            SkillCategory::Database => "database",
            SkillCategory::Devops => "devops",
            SkillCategory::Ai => "ai",
        }
    }

    pub fn label_key(self) -> String {
        format!("skills.categories.{}", self.slug())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Skill {
    pub slug: &'static str,
    pub icon: &'static str,
    pub category: SkillCategory,
}

impl Skill {
    pub fn name_key(&self) -> String {
        format!("skills.items.{}", self.slug)
    }
}

pub const SKILLS: &[Skill] = &[
    Skill {
        slug: "react",
        icon: "layers",
        category: SkillCategory::Frontend,
    },
    Skill {
        slug: "typescript",
        icon: "file-code",
        category: SkillCategory::Frontend,
    },
    Skill {
        slug: "python",
        icon: "code2",
        category: SkillCategory::Backend,
    },
    Skill {
        slug: "postgresql",
        icon: "database",
        category: SkillCategory::Database,
    },
    Skill {
        slug: "aws",
        icon: "cloud",
        category: SkillCategory::Devops,
    },
    Skill {
        slug: "openai",
        icon: "bot",
        category: SkillCategory::Ai,
    },
];

pub fn skills_in(category: SkillCategory) -> impl Iterator<Item = &'static Skill> {
    SKILLS.iter().filter(move |s| s.category == category)
}
