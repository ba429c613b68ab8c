use serde::Deserialize;

/// Raw form fields as submitted. Missing fields default to empty strings so a
/// partial submission falls through to validation instead of a decode failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub hobby: String,
}

impl FormInput {
    pub fn new(
        name: impl Into<String>,
        age: impl Into<String>,
        hobby: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            age: age.into(),
            hobby: hobby.into(),
        }
    }
}

/// Field values after sanitization, safe to embed in markup as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SanitizedInput {
    pub name: String,
    pub age: String,
    pub hobby: String,
}

/// Per-field validation messages; all `None` means the submission is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub name: Option<String>,
    pub age: Option<String>,
    pub hobby: Option<String>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.hobby.is_none()
    }
}

/// The four age brackets. Labels and messages are fixed constants, not
/// extensible policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeBracket {
    Developing,
    YoungPro,
    Professional,
    Senior,
}

impl AgeBracket {
    pub fn label(&self) -> &'static str {
        match self {
            AgeBracket::Developing => "Developing",
            AgeBracket::YoungPro => "Young Pro",
            AgeBracket::Professional => "Professional",
            AgeBracket::Senior => "Senior",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            AgeBracket::Developing => {
                "You have much to discover! Explore and learn through your hobby."
            }
            AgeBracket::YoungPro => {
                "Energy and growth: turn your hobby into a challenging project."
            }
            AgeBracket::Professional => {
                "Experience in motion: balance goals and passion for your hobby."
            }
            AgeBracket::Senior => {
                "Active wisdom: share experience and enjoy at your own pace."
            }
        }
    }
}

/// A completed profile card. Name and hobby carry the sanitized text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileCard {
    pub name: String,
    pub age: u32,
    pub hobby: String,
    pub bracket: AgeBracket,
}

/// What the renderer sees for one request. The sanitized values ride along in
/// the submitted states so the form can be re-filled on display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageState {
    /// No submission yet: render the empty form.
    Initial,
    /// Submission validated: render the form plus the profile card.
    Result {
        input: SanitizedInput,
        card: ProfileCard,
    },
    /// At least one field was invalid: re-render the form with the prior
    /// values and inline messages.
    ResultWithErrors {
        input: SanitizedInput,
        errors: ValidationErrors,
    },
}
