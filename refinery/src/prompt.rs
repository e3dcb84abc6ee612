//! Prompt inputs and the two prompt-construction strategies.
//!
//! Both builders are total: every field has a fallback, so any form submission yields
//! a prompt. The tone sentence and audience always appear verbatim.

use serde::Deserialize;

const DEFAULT_AUDIENCE: &str = "general";
const NO_CONSTRAINTS: &str = "No additional constraints.";
const BASE_PROMPT_PLACEHOLDER: &str = "[Paste your base prompt here]";
const GOAL_PLACEHOLDER: &str = "[Describe the outcome you want to achieve]";

/// Which strategy builds the prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Mode {
    /// Rewrite an existing prompt.
    #[default]
    Refine,
    /// Create a new prompt from a goal.
    Generate,
}

impl Mode {
    /// Only the exact string `"refine"` selects [`Mode::Refine`]; anything else generates.
    pub fn from_form(s: &str) -> Self {
        if s == "refine" {
            Self::Refine
        } else {
            Self::Generate
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Refine => "refine",
            Self::Generate => "generate",
        }
    }
}

/// Tone of the generated prompt. Unknown values fall back to [`Tone::Neutral`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Neutral,
    Friendly,
    Professional,
    Playful,
}

impl Tone {
    pub const ALL: [Tone; 4] = [
        Tone::Neutral,
        Tone::Friendly,
        Tone::Professional,
        Tone::Playful,
    ];

    pub fn from_form(s: &str) -> Self {
        match s {
            "friendly" => Self::Friendly,
            "professional" => Self::Professional,
            "playful" => Self::Playful,
            _ => Self::Neutral,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Friendly => "friendly",
            Self::Professional => "professional",
            Self::Playful => "playful",
        }
    }
}

/// One-sentence guidance for a tone.
pub fn tone_guidance(tone: Tone) -> &'static str {
    match tone {
        Tone::Neutral => "Use a clear, neutral tone.",
        Tone::Friendly => "Use a warm, friendly tone that feels approachable.",
        Tone::Professional => "Use a crisp, professional tone with confident wording.",
        Tone::Playful => "Use a playful, light tone that still feels helpful.",
    }
}

/// Raw form submission. Every field is optional; missing fields deserialize as empty.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct PromptForm {
    pub mode: String,
    pub original_prompt: String,
    pub goal: String,
    pub audience: String,
    pub tone: String,
    pub constraints: String,
}

impl PromptForm {
    /// Sets one field by its form name. Unknown names are ignored.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let slot = match name {
            "mode" => &mut self.mode,
            "original_prompt" => &mut self.original_prompt,
            "goal" => &mut self.goal,
            "audience" => &mut self.audience,
            "tone" => &mut self.tone,
            "constraints" => &mut self.constraints,
            _ => return,
        };
        *slot = value.into();
    }
}

/// Folds submitted pairs in order; a repeated field keeps its last value.
impl<K, V> FromIterator<(K, V)> for PromptForm
where
    K: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(pairs: I) -> Self {
        let mut form = Self::default();
        for (name, value) in pairs {
            form.set(name.as_ref(), value);
        }
        form
    }
}

/// Normalised inputs for one request: trimmed text, parsed mode and tone, audience defaulted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PromptInputs {
    pub mode: Mode,
    pub original_prompt: String,
    pub goal: String,
    pub audience: String,
    pub tone: Tone,
    pub constraints: String,
}

impl PromptInputs {
    pub fn from_form(form: &PromptForm) -> Self {
        let audience = form.audience.trim();
        Self {
            mode: Mode::from_form(form.mode.trim()),
            original_prompt: form.original_prompt.trim().to_string(),
            goal: form.goal.trim().to_string(),
            audience: if audience.is_empty() {
                DEFAULT_AUDIENCE.to_string()
            } else {
                audience.to_string()
            },
            tone: Tone::from_form(form.tone.trim()),
            constraints: form.constraints.trim().to_string(),
        }
    }

    fn constraints_or_default(&self) -> &str {
        or_placeholder(&self.constraints, NO_CONSTRAINTS)
    }
}

impl From<PromptForm> for PromptInputs {
    fn from(form: PromptForm) -> Self {
        Self::from_form(&form)
    }
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

/// Instructions to rewrite the supplied base prompt.
pub fn build_refined_prompt(inputs: &PromptInputs) -> String {
    let base_prompt = or_placeholder(&inputs.original_prompt, BASE_PROMPT_PLACEHOLDER);
    format!(
        "Rewrite the prompt below so it is clear, specific, and easy to execute.\n\
         Include a concise role, the task, required inputs, constraints, and output format.\n\
         Audience: {audience}.\n\
         {guidance}\n\
         Constraints: {constraints}\n\
         \n\
         Original prompt:\n\
         {base_prompt}",
        audience = inputs.audience,
        guidance = tone_guidance(inputs.tone),
        constraints = inputs.constraints_or_default(),
    )
}

/// Instructions to create a new prompt that achieves the stated goal.
pub fn build_generated_prompt(inputs: &PromptInputs) -> String {
    let goal = or_placeholder(&inputs.goal, GOAL_PLACEHOLDER);
    format!(
        "Create a new prompt that guides an assistant to achieve the goal below.\n\
         Include a concise role, the task, required inputs, constraints, and output format.\n\
         Use placeholders for missing details the user should fill in.\n\
         Goal: {goal}\n\
         Audience: {audience}.\n\
         {guidance}\n\
         Constraints: {constraints}",
        audience = inputs.audience,
        guidance = tone_guidance(inputs.tone),
        constraints = inputs.constraints_or_default(),
    )
}

/// Builds the prompt with the strategy selected by `inputs.mode`.
pub fn build_prompt(inputs: &PromptInputs) -> String {
    match inputs.mode {
        Mode::Refine => build_refined_prompt(inputs),
        Mode::Generate => build_generated_prompt(inputs),
    }
}
