//! Emotional states offered before a person starts writing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Emotional state selected by the person at the start of a session.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    /// Many things moving too fast.
    Anxiety,
    /// Weight, intensity, and difficulty seeing the horizon.
    Overwhelm,
    /// The path is unclear right now.
    Confusion,
    /// An open space.
    #[default]
    Free,
}

/// Descriptive material attached to each [`Mood`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MoodProfile {
    /// Short display label (e.g. "Storm").
    pub label: &'static str,
    /// One-line description shown next to the label.
    pub description: &'static str,
    /// Qualities typically present in this state.
    pub qualities: &'static str,
    /// How a response should meet someone in this state.
    pub approach: &'static str,
    /// Contextual guiding questions offered before writing.
    pub guiding_questions: [&'static str; 3],
}

const ANXIETY: MoodProfile = MoodProfile {
    label: "Whirlwind",
    description: "Many things moving too fast.",
    qualities: "racing thoughts, scattered attention, internal acceleration, difficulty grounding",
    approach: "Use grounding, present-moment language. Acknowledge the speed without trying to \
               slow it. Mirror the movement while offering a point of stillness.",
    guiding_questions: [
        "What seems to be accelerating right now?",
        "What would you like to slow down?",
        "Among so many movements, what stands out most?",
    ],
};

const OVERWHELM: MoodProfile = MoodProfile {
    label: "Storm",
    description: "Weight, intensity, and difficulty seeing the horizon.",
    qualities: "heaviness, pressure, difficulty seeing forward, feeling crushed by weight",
    approach: "Validate the weight without minimizing. Use spacious language. Acknowledge the \
               difficulty of carrying what they carry.",
    guiding_questions: [
        "What weighs heaviest right now?",
        "If you could set something aside, what would it be?",
        "Where do you feel this intensity in your body?",
    ],
};

const CONFUSION: MoodProfile = MoodProfile {
    label: "Fog",
    description: "The path is unclear right now.",
    qualities: "uncertainty, unclear path, multiple conflicting directions, searching for clarity",
    approach: "Honor the not-knowing. Don't offer false clarity. Help them sit with ambiguity as \
               a valid state.",
    guiding_questions: [
        "What feels uncertain right now?",
        "What question keeps coming back?",
        "What would clarity about this look like?",
    ],
};

const FREE: MoodProfile = MoodProfile {
    label: "Clearing",
    description: "An open space.",
    qualities: "openness, possibility, presence, willingness to explore",
    approach: "Match their openness. Invite deeper exploration without directing. Celebrate \
               their presence.",
    guiding_questions: [
        "What is present for you right now?",
        "What do you wish to express?",
        "What are you noticing?",
    ],
};

impl Mood {
    /// Every known mood, in the order they are offered.
    pub const ALL: [Self; 4] = [Self::Anxiety, Self::Overwhelm, Self::Confusion, Self::Free];

    /// Returns the lowercase identifier used in session state and storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Anxiety => "anxiety",
            Self::Overwhelm => "overwhelm",
            Self::Confusion => "confusion",
            Self::Free => "free",
        }
    }

    /// Returns the descriptive profile for this mood.
    #[must_use]
    pub const fn profile(self) -> &'static MoodProfile {
        match self {
            Self::Anxiety => &ANXIETY,
            Self::Overwhelm => &OVERWHELM,
            Self::Confusion => &CONFUSION,
            Self::Free => &FREE,
        }
    }

    /// Resolves a free-form label, falling back to [`Mood::Free`] when it is
    /// not recognised.
    #[must_use]
    pub fn resolve(label: &str) -> Self {
        label.parse().unwrap_or_default()
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|mood| mood.as_str() == s)
            .ok_or_else(|| Error::UnknownMood { label: s.into() })
    }
}
