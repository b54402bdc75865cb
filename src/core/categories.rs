use std::collections::BTreeMap;
use std::sync::LazyLock;

/// A named category and the lowercase keyword substrings that select it
#[derive(Debug, Clone)]
pub struct Category {
    pub name: String,
    pub keywords: Vec<String>,
}

/// Ordered, read-only mapping from category name to keyword substrings
///
/// Iteration order is the order categories were declared in, which is also
/// the order explanations pick the "first" shared category from.
#[derive(Debug, Clone)]
pub struct CategoryDictionary {
    categories: Vec<Category>,
}

impl CategoryDictionary {
    /// Build a dictionary from static `(name, keywords)` pairs
    pub fn from_static(entries: &[(&str, &[&str])]) -> Self {
        let categories = entries
            .iter()
            .map(|(name, keywords)| Category {
                name: name.to_string(),
                keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            })
            .collect();

        Self { categories }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Set of categories matched from one dictionary
///
/// Keys are positions in the source dictionary so that iteration follows
/// dictionary order rather than insertion or alphabetical order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySet<'d> {
    members: BTreeMap<usize, &'d str>,
}

impl<'d> CategorySet<'d> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, position: usize, name: &'d str) {
        self.members.insert(position, name);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.members.values().any(|n| *n == name)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Category names in dictionary order
    pub fn names(&self) -> impl Iterator<Item = &'d str> + '_ {
        self.members.values().copied()
    }

    pub fn intersection_len(&self, other: &CategorySet<'_>) -> usize {
        self.members
            .keys()
            .filter(|k| other.members.contains_key(k))
            .count()
    }

    pub fn union_len(&self, other: &CategorySet<'_>) -> usize {
        self.members.len() + other.members.len() - self.intersection_len(other)
    }

    /// First category (in dictionary order) present in both sets
    pub fn first_shared(&self, other: &CategorySet<'_>) -> Option<&'d str> {
        self.members
            .iter()
            .find(|(k, _)| other.members.contains_key(k))
            .map(|(_, name)| *name)
    }

    pub fn extend(&mut self, other: CategorySet<'d>) {
        self.members.extend(other.members);
    }
}

/// Classify one free-text field against a dictionary
///
/// The text is trimmed and lower-cased; a category matches when any of its
/// keywords occurs as a substring. Empty or whitespace-only text yields an
/// empty set.
pub fn classify<'d>(text: &str, dict: &'d CategoryDictionary) -> CategorySet<'d> {
    let normalized = normalize_text(text);
    let mut matches = CategorySet::new();

    if normalized.is_empty() {
        return matches;
    }

    for (position, category) in dict.categories.iter().enumerate() {
        if category
            .keywords
            .iter()
            .any(|keyword| normalized.contains(keyword.as_str()))
        {
            matches.insert(position, category.name.as_str());
        }
    }

    matches
}

/// Union of [`classify`] over every text
pub fn classify_all<'d, I, S>(texts: I, dict: &'d CategoryDictionary) -> CategorySet<'d>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut all = CategorySet::new();
    for text in texts {
        all.extend(classify(text.as_ref(), dict));
    }
    all
}

/// Lower-case and trim text before matching
#[inline]
pub fn normalize_text(text: &str) -> String {
    text.trim().to_lowercase()
}

const SKILL_ENTRIES: &[(&str, &[&str])] = &[
    (
        "programming",
        &[
            "python", "java", "javascript", "c++", "c", "php", "django", "programming", "coding",
            "development", "backend", "frontend", "full stack",
        ],
    ),
    (
        "data",
        &[
            "data", "sql", "excel", "analytics", "visualization", "tableau", "matplotlib",
            "reporting", "mis", "database",
        ],
    ),
    (
        "web",
        &["html", "css", "web", "ui", "ux", "figma", "cms", "frontend", "react", "angular"],
    ),
    (
        "devops",
        &[
            "git", "version control", "devops", "cloud", "linux", "deployment", "docker",
            "kubernetes", "ci/cd",
        ],
    ),
    (
        "testing",
        &[
            "testing", "selenium", "postman", "qa", "manual testing", "automation testing",
            "quality",
        ],
    ),
    (
        "ai_ml",
        &["ai", "machine learning", "computer vision", "deep learning", "neural", "model"],
    ),
    (
        "business",
        &[
            "business", "analytics", "management", "project", "agile", "scrum", "jira", "erp",
            "crm",
        ],
    ),
    (
        "security",
        &["security", "cybersecurity", "network security", "compliance", "audit"],
    ),
    (
        "support",
        &["support", "helpdesk", "troubleshooting", "it support", "technical support"],
    ),
    (
        "systems",
        &["system", "administration", "linux", "server", "infrastructure", "virtual machine"],
    ),
];

const INDUSTRY_ENTRIES: &[(&str, &[&str])] = &[
    ("software", &["software", "developer", "engineer", "architect", "programmer"]),
    ("data", &["data", "analyst", "scientist", "bi", "business intelligence"]),
    ("it_ops", &["it", "administrator", "operations", "support", "helpdesk"]),
    ("devops", &["devops", "cloud", "sre", "reliability", "deployment"]),
    ("security", &["security", "compliance", "governance"]),
    ("consulting", &["consultant", "specialist", "lead"]),
    ("product", &["product", "project", "manager", "coordinator"]),
    ("finance", &["finance", "banking", "fintech", "accounting"]),
];

static SKILL_CATEGORIES: LazyLock<CategoryDictionary> =
    LazyLock::new(|| CategoryDictionary::from_static(SKILL_ENTRIES));

static INDUSTRY_CATEGORIES: LazyLock<CategoryDictionary> =
    LazyLock::new(|| CategoryDictionary::from_static(INDUSTRY_ENTRIES));

/// Built-in technical skill categories
pub fn skill_categories() -> &'static CategoryDictionary {
    &SKILL_CATEGORIES
}

/// Built-in industry and role categories
pub fn industry_categories() -> &'static CategoryDictionary {
    &INDUSTRY_CATEGORIES
}
