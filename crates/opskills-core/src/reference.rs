//! Static reference data: the skill catalog and the answer key.
//!
//! Both tables are compiled in and never change at runtime. The answer key
//! is keyed by the sector and role titles exactly as they were authored;
//! callers look contexts up through [`crate::resolver`], which tolerates
//! casing and punctuation drift in those titles.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::model::Category;
use crate::normalize::canonicalize_label;

/// A role title and its ordered list of correct skill labels.
pub type RoleAnswers = (&'static str, &'static [&'static str]);

/// A sector title and the answers for each of its roles.
pub type SectorAnswers = (&'static str, &'static [RoleAnswers]);

/// Every selectable skill, grouped by category, in table order.
pub const SKILL_CATALOG: &[(Category, &[&str])] = &[
    (
        Category::Personal,
        &[
            "Responsiveness",
            "Adapting to changing situations",
            "Manual Dexterity",
            "Meet commitments (e.g., working plan and deadlines)",
            "Observation skills",
            "Dealing with challenging and stressful work conditions",
            "Physical strength",
        ],
    ),
    (
        Category::Management,
        &[
            "Task/Production planning",
            "Safety checking",
            "Conflict resolution",
            "Team management",
            "Supervising staff",
            "Risk assessment",
            "Monitoring workers' safety on the production floor",
            "Monitoring security procedures in warehouse operations",
        ],
    ),
    (
        Category::Collaboration,
        &[
            "Quality assessment",
            "Use of the Robot controller",
            "Setting up the robot",
            "Digital systems usage",
            "Machine/Robot maintenance",
            "Turning on machines/robot",
            "Data processing",
            "Know how to interact with robots",
            "Technical inspection",
        ],
    ),
    (
        Category::Interaction,
        &[
            "Production monitoring",
            "Use gesture-based controls",
            "Interact physically with cobots",
            "Navigate and operate touchscreen-based interfaces",
            "Use voice commands to start, stop, or adjust machinery without physical interaction.",
            "Collaborate with robotic systems in shared workspaces",
            "Respond to haptic (vibration) signals or tactile feedback",
            "Utilize AR devices (such as smart glasses or tablets) to receive real-time, step-by-step assembly instructions and visual guidance.",
        ],
    ),
    (
        Category::Analytical,
        &[
            "Problem solving",
            "Data interpretation",
            "Decision Making",
            "Making time-critical decisions",
            "Risk assessment",
            "Problem identification",
            "Predictive maintenance",
            "Preventive maintenance",
        ],
    ),
    (
        Category::Operational,
        &[
            "Procedures knowledge of error situation",
            "Task knowledge",
            "Time management",
            "Coping with pressure",
            "Situational awareness",
            "Fast task execution",
            "Procedures knowledge",
            "Handling unexpected events and emergencies",
        ],
    ),
    (
        Category::Technical,
        &[
            "Quality assessment",
            "Use of the Robot controller",
            "Data processing",
            "Setting up the robot",
            "Know how to interact with robots",
            "Digital systems usage",
            "Technical inspection",
            "Machine/Robot maintenance",
            "Turning on machines/robot",
            "Statistical process control",
            "Knowledge of robot mechanisms",
            "Robot programming",
            "Process awareness",
            "Digital data management",
            "Knowledge of Machine/Robot task",
            "Algorithms output understanding",
            "Setting up the activity",
            "Understanding the Robot coding/language",
            "General programming skills",
            "Understand the robot feedback",
            "Technical issues resolution",
            "System state interpretation",
            "Problem/Alert management",
            "Machine/Robot setting parameters",
        ],
    ),
];

/// Correct skills per (sector, role), as authored.
///
/// Some labels here have no exact counterpart in [`SKILL_CATALOG`]; those
/// are left out of scoring. `opskills audit` lists them.
pub const ANSWER_KEY: &[SectorAnswers] = &[
    (
        "AUTOMOTIVE SECTOR",
        &[
            (
                "SMART LINE OPERATOR",
                &[
                    "Task knowledge",
                    "Procedures knowledge of error situation",
                    "Situational awareness",
                    "Use of the Robot controller",
                    "Process awareness",
                    "Understand the robot feedback",
                    "Know how to interact with robots",
                    "Technical issues resolution",
                    "Knowledge of Machine/Robot task",
                    "Coordination with the robot work",
                    "Collaborate with robotic systems in shared workspaces",
                ],
            ),
            (
                "PLANT FLOW-KEEPER",
                &[
                    "Know how to interact with robots",
                    "Use of the Robot controller",
                    "Understand the robot feedback",
                    "Handling unexpected events and emergencies",
                    "Coordination across operators",
                    "Conflict resolution",
                    "Team management",
                    "Supervising staff",
                    "Monitoring security procedures in warehouse operations",
                ],
            ),
            (
                "TECH SOLVER",
                &[
                    "Knowledge of robot mechanisms",
                    "Robot programming",
                    "Know how to interact with robots",
                    "Use of the Robot controller",
                    "Understand the robot feedback",
                    "Technical issues resolution",
                    "Technical inspection",
                    "Interact physically with cobots",
                    "Problem identification",
                ],
            ),
        ],
    ),
    (
        "FOOD SECTOR",
        &[
            (
                "SMART LINE OPERATOR",
                &[
                    "System state interpretation",
                    "Turning on machines/robot",
                    "Setting up the robot",
                    "Problem / Alert management",
                    "Quality assessment",
                    "Use of the Robot controller",
                    "Understand the robot feedback",
                    "Process awareness",
                    "Digital systems usage",
                    "Know how to interact with robots",
                    "Coordination with the robot work",
                    "Situational awareness",
                    "Task knowledge",
                    "Procedures knowledge",
                    "Procedures knowledge of error situation",
                    "Production monitoring",
                    "Collaborate with robotic systems in shared workspaces",
                ],
            ),
            (
                "PLANT FLOW-KEEPER",
                &[
                    "Task/Production planning",
                    "Safety checking",
                    "Setting up the activity",
                    "Machine/Robot setting parameters",
                    "Digital systems usage",
                    "Risk assessment",
                    "Problem identification",
                    "Task knowledge",
                    "Handling unexpected events and emergencies",
                ],
            ),
            (
                "TECH SOLVER",
                &[
                    "Technical inspection",
                    "Use of the robot controller",
                    "Data interpretation",
                    "Knowledge of robot mechanisms",
                    "Know how to interact with robots",
                    "Robot programming",
                    "Technical issues resolution",
                    "Understand the robot feedback",
                    "Problem identification",
                ],
            ),
        ],
    ),
    (
        "LOGISTIC SECTOR",
        &[
            (
                "SMART LINE OPERATOR",
                &[
                    "Task knowledge",
                    "Procedures knowledge of error situation",
                    "Use of the Robot controller",
                    "Problem / Alert management",
                    "Setting up the activity",
                    "System state interpretation",
                    "Machine/robot setting parameters",
                    "Process awareness",
                    "Know how to interact with robots",
                    "Task/Production planning",
                    "Safety checking",
                    "Decision making",
                    "Problem solving",
                    "Problem identification",
                    "Data interpretation",
                    "Coordination with the robot work",
                ],
            ),
            (
                "PLANT FLOW-KEEPER",
                &[
                    "Task/Production planning",
                    "Alert management",
                    "Safety checking",
                    "Data interpretation",
                    "Decision Making",
                ],
            ),
            (
                "TECH SOLVER",
                &[
                    "Predictive maintenance",
                    "Data interpretation",
                    "Use of the Robot controller",
                    "Setting up the robot",
                    "Machine/robot setting parameters",
                    "Understanding the Robot coding/language",
                    "Technical inspection",
                    "Algorithms output understanding",
                    "Knowledge of robot mechanisms",
                    "Digital System/Machine/Robot automatic reports understanding",
                    "Alert management",
                    "Safety checking",
                    "Interact physically with cobots",
                    "Understand the robot feedback",
                ],
            ),
        ],
    ),
];

/// Exact label -> owning category. Later categories overwrite earlier ones.
static OWNING_CATEGORY: LazyLock<HashMap<&'static str, Category>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    for (category, labels) in SKILL_CATALOG {
        for label in *labels {
            map.insert(*label, *category);
        }
    }
    map
});

/// Canonical label -> catalog spelling, first listing wins.
static CATALOG_BY_CANON: LazyLock<HashMap<String, &'static str>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    for (_, labels) in SKILL_CATALOG {
        for label in *labels {
            map.entry(canonicalize_label(label)).or_insert(*label);
        }
    }
    map
});

/// The category that owns `label`, by exact match against the catalog.
pub fn category_of(label: &str) -> Option<Category> {
    OWNING_CATEGORY.get(label).copied()
}

/// The catalog spelling of `label` if it matches one after trimming and
/// lowercasing.
pub fn catalog_label(label: &str) -> Option<&'static str> {
    CATALOG_BY_CANON.get(&canonicalize_label(label)).copied()
}

/// Catalog skills listed under `category`.
pub fn skills_in(category: Category) -> &'static [&'static str] {
    SKILL_CATALOG
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, labels)| *labels)
        .unwrap_or(&[])
}

/// Every category that lists `label`, in table order.
pub fn listing_categories(label: &str) -> Vec<Category> {
    SKILL_CATALOG
        .iter()
        .filter(|(_, labels)| labels.contains(&label))
        .map(|(c, _)| *c)
        .collect()
}

/// Every (sector, role) title pair in the answer key.
pub fn contexts() -> impl Iterator<Item = (&'static str, &'static str)> {
    ANSWER_KEY.iter().flat_map(|(sector, roles)| {
        roles.iter().map(move |(role, _)| (*sector, *role))
    })
}
