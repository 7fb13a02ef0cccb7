//! Technology badges shown on project cards.

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Tech {
    pub key: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
}

impl Tech {
    /// Translation key of the badge's alt text.
    pub fn alt_key(&self) -> String {
        format!("techStack.{}", self.key)
    }
}

pub const TECH_STACK: &[Tech] = &[
    Tech {
        key: "react",
        name: "REACT",
        icon: "/icons/react.svg",
    },
    Tech {
        key: "typescript",
        name: "TYPESCRIPT",
        icon: "/icons/typescript.svg",
    },
    Tech {
        key: "nodejs",
        name: "NODE.JS",
        icon: "/icons/nodejs.svg",
    },
    Tech {
        key: "python",
        name: "PYTHON",
        icon: "/icons/python.svg",
    },
    Tech {
        key: "postgres",
        name: "POSTGRES",
        icon: "/icons/postgres.svg",
    },
    Tech {
        key: "java",
        name: "JAVA",
        icon: "/icons/java.svg",
    },
    Tech {
        key: "aws",
        name: "AWS",
        icon: "/icons/aws.svg",
    },
    Tech {
        key: "openai",
        name: "OPENAI",
        icon: "/icons/openai.svg",
    },
];

pub fn tech(key: &str) -> Option<&'static Tech> {
    TECH_STACK.iter().find(|t| t.key == key)
}

/// Look up badges for `keys`, keeping their order. Unknown keys are skipped.
pub fn icons_for<S: AsRef<str>>(keys: &[S]) -> Vec<&'static Tech> {
    keys.iter().filter_map(|k| tech(k.as_ref())).collect()
}
