//! Explicit per-lesson session state.
//!
//! Every lesson page owns one of these structs in a signal and hands it to
//! its handlers. Recognized fields are enumerated here with their defaults;
//! there is no ambient lookup by string key anywhere in the app.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::{Deserialize, Serialize};

/// Chart recipe selection. Consumed by exhaustive matching in the renderer
/// and the previews; radio widgets map to variants at the edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChartKind {
    #[default]
    Bar,
    Pie,
}

impl ChartKind {
    pub fn all() -> [ChartKind; 2] {
        [ChartKind::Bar, ChartKind::Pie]
    }

    pub fn label(self) -> &'static str {
        match self {
            ChartKind::Bar => "Bar chart",
            ChartKind::Pie => "Pie chart",
        }
    }
}

/// One find-and-replace cleaning rule from the pantry exercise.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CleaningRule {
    pub find: String,
    pub replace: String,
}

impl CleaningRule {
    pub fn new(find: &str, replace: &str) -> Self {
        Self {
            find: find.to_string(),
            replace: replace.to_string(),
        }
    }

    /// A rule only counts once both sides are filled in.
    pub fn is_complete(&self) -> bool {
        !self.find.trim().is_empty() && !self.replace.trim().is_empty()
    }
}

/// The three "messy ingredient" discovery examples on the pantry page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessyExample {
    Typo,
    Variant,
    Noise,
}

impl MessyExample {
    pub fn caption(self) -> &'static str {
        match self {
            MessyExample::Typo => {
                "Found one! '김치찌게' snuck in — that should be '김치찌개'."
            }
            MessyExample::Variant => {
                "Look at that: '돈까스' and '돈까쓰' are the same dish wearing two name tags. Pick one."
            }
            MessyExample::Noise => {
                "Uh oh, someone answered 'ㅋㅋㅋ'. Funny, but it won't cook."
            }
        }
    }
}

/// An uploaded image kept as an opaque blob plus its file name.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadBlob {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl UploadBlob {
    pub fn new(name: String, bytes: Vec<u8>) -> Self {
        Self { name, bytes }
    }

    /// Data URL for inline preview. The blob itself is never decoded.
    pub fn data_url(&self) -> String {
        let mime = if self.name.to_ascii_lowercase().ends_with(".png") {
            "image/png"
        } else {
            "image/jpeg"
        };
        format!("data:{mime};base64,{}", BASE64.encode(&self.bytes))
    }
}

/// Lesson 1 — ingredient prep (data cleaning).
#[derive(Debug, Clone, PartialEq)]
pub struct PantrySession {
    pub example: Option<MessyExample>,
    pub exploration_notes: String,
    pub rules: Vec<CleaningRule>,
    pub counting_source: String,
    pub counting_criteria: String,
    pub principles: [String; 3],
}

impl Default for PantrySession {
    fn default() -> Self {
        Self {
            example: None,
            exploration_notes: String::new(),
            // Seeded with the classic tteokbokki typo so the rule UI never
            // starts empty.
            rules: vec![CleaningRule::new("떠뽀끼", "떡볶이")],
            counting_source: String::new(),
            counting_criteria: String::new(),
            principles: Default::default(),
        }
    }
}

impl PantrySession {
    pub fn complete_rules(&self) -> Vec<&CleaningRule> {
        self.rules.iter().filter(|rule| rule.is_complete()).collect()
    }

    /// Precondition for the COUNTIF exercise; checked before any counting.
    pub fn counting_ready(&self) -> Result<(), &'static str> {
        if self.counting_source.trim().is_empty() {
            return Err("Paste an ingredient list into the data range first.");
        }
        if self.counting_criteria.trim().is_empty() {
            return Err("Fill in the ingredient name inside the COUNTIF function.");
        }
        Ok(())
    }

    pub fn principles_complete(&self) -> bool {
        self.principles.iter().all(|p| !p.trim().is_empty())
    }
}

/// Lesson 2 — plating (first signature chart).
#[derive(Debug, Clone, PartialEq)]
pub struct PlatingSession {
    pub raw_data: String,
    pub chart_kind: ChartKind,
    pub mission_a: MissionChoice,
    pub mission_b: MissionChoice,
    pub dish_title: String,
    pub dish_note: String,
    pub upload: Option<UploadBlob>,
}

impl Default for PlatingSession {
    fn default() -> Self {
        Self {
            raw_data: "국어: 15\n수학: 10\n사회: 20\n과학: 25\n체육: 30".to_string(),
            chart_kind: ChartKind::Bar,
            mission_a: MissionChoice::default(),
            mission_b: MissionChoice {
                kind: ChartKind::Pie,
                reason: String::new(),
            },
            dish_title: String::new(),
            dish_note: String::new(),
            upload: None,
        }
    }
}

impl PlatingSession {
    /// Precondition for submitting the signature dish.
    pub fn submission_ready(&self) -> Result<(), &'static str> {
        if self.dish_title.trim().is_empty() {
            return Err("Give your dish (chart) a name before submitting.");
        }
        if self.dish_note.trim().is_empty() {
            return Err("Add a chef's note describing what the chart shows.");
        }
        Ok(())
    }
}

/// A chart-kind pick plus the learner's reasoning, for the recipe missions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MissionChoice {
    pub kind: ChartKind,
    pub reason: String,
}

/// One course on the final menu: a title, a recipe, and its data lines.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseChart {
    pub role: &'static str,
    pub title: String,
    pub kind: ChartKind,
    pub data: String,
}

impl CourseChart {
    fn new(role: &'static str, kind: ChartKind) -> Self {
        Self {
            role,
            title: String::new(),
            kind,
            data: String::new(),
        }
    }
}

/// The four-point upgrade checklist from the judging lesson.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpgradeChecklist {
    pub title: bool,
    pub axis_labels: bool,
    pub color_emphasis: bool,
    pub data_labels: bool,
}

impl UpgradeChecklist {
    pub fn applied(&self) -> usize {
        [
            self.title,
            self.axis_labels,
            self.color_emphasis,
            self.data_labels,
        ]
        .iter()
        .filter(|done| **done)
        .count()
    }

    /// One-line digest for the summary image and the logbook row.
    pub fn digest(&self) -> String {
        let mut applied = Vec::new();
        if self.title {
            applied.push("title");
        }
        if self.axis_labels {
            applied.push("axis labels");
        }
        if self.color_emphasis {
            applied.push("color emphasis");
        }
        if self.data_labels {
            applied.push("data labels");
        }
        if applied.is_empty() {
            "Upgrades applied: none yet".to_string()
        } else {
            format!("Upgrades applied ({}/4): {}", applied.len(), applied.join(", "))
        }
    }
}

/// Lesson 3 — judging (critique and the three-course menu).
#[derive(Debug, Clone, PartialEq)]
pub struct JudgingSession {
    pub critiques: [String; 3],
    pub checklist: UpgradeChecklist,
    pub courses: [CourseChart; 3],
    pub course_note: String,
}

impl Default for JudgingSession {
    fn default() -> Self {
        Self {
            critiques: Default::default(),
            checklist: UpgradeChecklist::default(),
            courses: [
                CourseChart::new("Appetizer", ChartKind::Bar),
                CourseChart::new("Main dish", ChartKind::Bar),
                CourseChart::new("Dessert", ChartKind::Pie),
            ],
            course_note: String::new(),
        }
    }
}

impl JudgingSession {
    /// Precondition for plating the course menu. Empty course data is fine
    /// (placeholders render), but the chef's note is required.
    pub fn menu_ready(&self) -> Result<(), &'static str> {
        if self.course_note.trim().is_empty() {
            return Err("Write the course description (chef's note) before plating the menu.");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pantry_defaults_seed_one_rule() {
        let session = PantrySession::default();
        assert_eq!(session.rules.len(), 1);
        assert!(session.rules[0].is_complete());
        assert!(session.example.is_none());
    }

    #[test]
    fn incomplete_rules_are_filtered() {
        let mut session = PantrySession::default();
        session.rules.push(CleaningRule::new("", ""));
        session.rules.push(CleaningRule::new("돈까쓰", ""));
        assert_eq!(session.complete_rules().len(), 1);
    }

    #[test]
    fn counting_preconditions_fire_before_any_work() {
        let mut session = PantrySession::default();
        assert!(session.counting_ready().is_err());
        session.counting_source = "돈까스\n스파게티".to_string();
        assert!(session.counting_ready().is_err());
        session.counting_criteria = "돈까스".to_string();
        assert!(session.counting_ready().is_ok());
    }

    #[test]
    fn principles_require_all_three() {
        let mut session = PantrySession::default();
        assert!(!session.principles_complete());
        session.principles = [
            "keep the original".into(),
            "unify names".into(),
            "flag the noise".into(),
        ];
        assert!(session.principles_complete());
    }

    #[test]
    fn plating_submission_requires_title_and_note() {
        let mut session = PlatingSession::default();
        assert!(session.submission_ready().is_err());
        session.dish_title = "급식의 제왕".to_string();
        assert!(session.submission_ready().is_err());
        session.dish_note = "돈까스 압승".to_string();
        assert!(session.submission_ready().is_ok());
    }

    #[test]
    fn checklist_digest_counts_applied_items() {
        let mut checklist = UpgradeChecklist::default();
        assert_eq!(checklist.applied(), 0);
        assert_eq!(checklist.digest(), "Upgrades applied: none yet");
        checklist.title = true;
        checklist.data_labels = true;
        assert_eq!(checklist.applied(), 2);
        assert_eq!(
            checklist.digest(),
            "Upgrades applied (2/4): title, data labels"
        );
    }

    #[test]
    fn menu_requires_a_course_note_but_not_course_data() {
        let mut session = JudgingSession::default();
        assert!(session.menu_ready().is_err());
        session.course_note = "Three charts, one story.".to_string();
        assert!(session.menu_ready().is_ok());
        assert!(session.courses.iter().all(|course| course.data.is_empty()));
    }

    #[test]
    fn upload_preview_picks_mime_from_extension() {
        let png = UploadBlob::new("dish.PNG".into(), vec![1, 2, 3]);
        assert!(png.data_url().starts_with("data:image/png;base64,"));
        let jpg = UploadBlob::new("dish.jpg".into(), vec![1, 2, 3]);
        assert!(jpg.data_url().starts_with("data:image/jpeg;base64,"));
    }
}
