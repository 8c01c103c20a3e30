// Fixed report text. Everything that does not depend on the input lives
// here so synthesis only decides which variant to pick.

pub const CONCERN_EMOTIONAL: &str = "Content uses emotional manipulation tactics";
pub const CONCERN_NEUTRAL: &str = "Content appears relatively neutral";

pub const EMOTIONAL_TACTIC_NAME: &str = "Emotional Manipulation";
pub const EMOTIONAL_TACTIC_DESCRIPTION: &str =
    "Uses strong emotional language to bypass critical thinking";

pub const DEMO_TACTIC_NAME: &str = "Demo Mode Active";
pub const DEMO_TACTIC_DESCRIPTION: &str =
    "This is a demonstration response showing system capabilities";
pub const DEMO_TACTIC_EXAMPLE: &str = "Sample analysis";

/// Longest excerpt quoted back in `example_from_content`, in characters.
pub const EXAMPLE_EXCERPT_CHARS: usize = 100;

pub struct BiasTemplate {
    pub bias_name: &'static str,
    pub explanation: &'static str,
    pub how_its_exploited: &'static str,
    pub resistance_tip: &'static str,
}

pub const FOMO_BIAS: BiasTemplate = BiasTemplate {
    bias_name: "Fear of Missing Out (FOMO)",
    explanation: "The tendency to feel anxiety about missing beneficial opportunities",
    how_its_exploited: "Content suggests exclusive or time-limited information",
    resistance_tip: "Ask yourself: What's the real urgency? Can I verify this independently?",
};

pub const VAGUE_CLAIM_FLAG_CLAIM: &str = "Claims require verification";
pub const VAGUE_CLAIM_FLAG_REASON: &str = "Vague or unsupported claims detected";
pub const VAGUE_CLAIM_FLAG_SUGGESTION: &str = "Look for peer-reviewed studies and credible sources";

pub const WHY_CONVINCING_EMOTIONAL: &str = "Uses emotional triggers to create trust and urgency";
pub const WHY_CONVINCING_NEUTRAL: &str = "Content appears straightforward";
pub const TARGET_AUDIENCE: &str = "People seeking exclusive information or solutions";
pub const APPEAL_EMOTIONAL: &str = "Combines fear, hope, and exclusivity";
pub const APPEAL_NEUTRAL: &str = "Neutral presentation";

pub const CRITICAL_QUESTIONS: [&str; 4] = [
    "What evidence supports these claims?",
    "Who are the sources cited?",
    "What might be the motivation behind this content?",
    "Are there alternative explanations?",
];

pub const VERIFICATION_STEPS: [&str; 4] = [
    "Search for peer-reviewed research on this topic",
    "Check multiple reputable sources",
    "Look for expert opinions from relevant fields",
    "Consider potential conflicts of interest",
];

pub const ACTION_VERIFY: &str = "Verify claims through multiple credible sources";
pub const ACTION_NORMAL: &str = "Proceed with normal fact-checking";

pub const FURTHER_RESEARCH: [&str; 3] = [
    "Search scientific databases",
    "Check fact-checking websites",
    "Consult domain experts",
];

pub const LEARNING_OPPORTUNITY: &str = "Practice identifying emotional manipulation in content";

pub const ANALYSIS_CONFIDENCE: u8 = 75;
pub const DATA_COMPLETENESS: u8 = 60;
pub const CONTEXT_AVAILABILITY: &str = "PARTIAL";

pub const SOURCE_TYPE: &str = "text";

/// Built-in sample served by /demo and `lielens demo`.
pub const DEMO_CONTENT: &str = "BREAKING: Scientists SHOCKED by this simple trick that Big Pharma HATES!
They don't want you to know this one secret that could save your life.
Thousands of people are already using this, but the mainstream media won't report it.
Act fast - this information might be taken down soon!";
