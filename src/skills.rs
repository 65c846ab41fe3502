use std::{collections::HashSet, sync::LazyLock};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::content::{load_json, ContentError};

pub const DEFAULT_SKILL_COLOR: &str = "#14B8A6";

static SKILLS: LazyLock<SkillList> =
    LazyLock::new(|| SkillList::load().expect("Embedded skill list should be valid"));

pub fn skills() -> &'static SkillList {
    &SKILLS
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Tools,
    Other,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SkillFilter {
    #[default]
    All,
    Only(SkillCategory),
}

impl SkillFilter {
    pub const TABS: [SkillFilter; 5] = [
        SkillFilter::All,
        SkillFilter::Only(SkillCategory::Frontend),
        SkillFilter::Only(SkillCategory::Backend),
        SkillFilter::Only(SkillCategory::Tools),
        SkillFilter::Only(SkillCategory::Other),
    ];

    pub fn label(self) -> &'static str {
        match self {
            SkillFilter::All => "All Skills",
            SkillFilter::Only(SkillCategory::Frontend) => "Frontend",
            SkillFilter::Only(SkillCategory::Backend) => "Backend",
            SkillFilter::Only(SkillCategory::Tools) => "Tools",
            SkillFilter::Only(SkillCategory::Other) => "Other",
        }
    }

    pub fn matches(self, category: SkillCategory) -> bool {
        match self {
            SkillFilter::All => true,
            SkillFilter::Only(c) => c == category,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
    pub category: SkillCategory,
    #[serde(default)]
    pub color: Option<String>,
}

impl Skill {
    pub fn color(&self) -> &str {
        self.color.as_deref().unwrap_or(DEFAULT_SKILL_COLOR)
    }

    /// Level as a CSS width percentage.
    pub fn percent(&self) -> u8 {
        self.level.min(100)
    }
}

#[derive(Error, Debug)]
pub enum SkillError {
    #[error("Duplicate skill: {0}")]
    Duplicate(String),
    #[error(transparent)]
    Content(#[from] ContentError),
}

#[derive(Debug, Clone)]
pub struct SkillList {
    skills: Vec<Skill>,
}

impl SkillList {
    pub fn new(skills: Vec<Skill>) -> Result<Self, SkillError> {
        let mut seen = HashSet::new();
        if let Some(dup) = skills.iter().find(|s| !seen.insert(s.name.as_str())) {
            return Err(SkillError::Duplicate(dup.name.clone()));
        }
        Ok(Self { skills })
    }

    pub fn load() -> Result<Self, SkillError> {
        Self::new(load_json("skills.json")?)
    }

    pub fn all(&self) -> &[Skill] {
        &self.skills
    }

    pub fn filter(&self, filter: SkillFilter) -> Vec<&Skill> {
        self.skills
            .iter()
            .filter(|s| filter.matches(s.category))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(name: &str, category: SkillCategory) -> Skill {
        Skill {
            name: name.to_string(),
            level: 50,
            category,
            color: None,
        }
    }

    #[test]
    fn test_filter() {
        let list = SkillList::new(vec![
            skill("Rust", SkillCategory::Backend),
            skill("CSS", SkillCategory::Frontend),
            skill("Go", SkillCategory::Backend),
        ])
        .expect("valid list");
        let names = |v: Vec<&Skill>| v.into_iter().map(|s| s.name.clone()).collect::<Vec<_>>();

        assert_eq!(names(list.filter(SkillFilter::All)), vec!["Rust", "CSS", "Go"]);
        assert_eq!(
            names(list.filter(SkillFilter::Only(SkillCategory::Backend))),
            vec!["Rust", "Go"]
        );
        assert!(list.filter(SkillFilter::Only(SkillCategory::Other)).is_empty());
    }

    #[test]
    fn test_duplicate_rejected() {
        let res = SkillList::new(vec![
            skill("Git", SkillCategory::Tools),
            skill("Git", SkillCategory::Other),
        ]);
        assert!(matches!(res, Err(SkillError::Duplicate(n)) if n == "Git"));
    }

    #[test]
    fn test_color_and_percent() {
        let mut s = skill("Docker", SkillCategory::Tools);
        assert_eq!(s.color(), DEFAULT_SKILL_COLOR);
        s.color = Some("#2496ED".to_string());
        assert_eq!(s.color(), "#2496ED");
        s.level = 250;
        assert_eq!(s.percent(), 100);
    }

    #[test]
    fn test_embedded_skills_load() {
        let list = SkillList::load().expect("embedded skills parse");
        assert_eq!(list.all().len(), 8);
        assert_eq!(list.filter(SkillFilter::Only(SkillCategory::Backend)).len(), 4);
        assert_eq!(SkillFilter::TABS[0].label(), "All Skills");
    }
}
