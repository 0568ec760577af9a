//! Prompt templates with strict named-placeholder substitution.

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Result alias for template operations.
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Errors that can occur during template operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    /// The template's placeholders and the supplied fields disagree.
    #[error(
        "template placeholders do not match supplied fields (unfilled: {unfilled:?}, unused: {unused:?})"
    )]
    Mismatch {
        /// Placeholders in the template with no supplied value.
        unfilled: Vec<String>,
        /// Supplied fields the template never references.
        unused: Vec<String>,
    },

    /// The template text could not be parsed.
    #[error("malformed template at byte {position}: {reason}")]
    Malformed {
        /// Byte offset of the offending character.
        position: usize,
        /// Reason for the failure.
        reason: &'static str,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Field(String),
}

/// An immutable prompt template with `{name}` placeholders.
///
/// `{{` and `}}` produce literal braces. Substitution is all-or-nothing: every
/// placeholder must receive a value and every supplied value must be used.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
///
/// use limen_prompts::PromptTemplate;
///
/// let template = PromptTemplate::parse("Mood: {mood}. Reflection: {text}").unwrap();
/// let fields = HashMap::from([("mood", "calm"), ("text", "Today was fine.")]);
///
/// let rendered = template.substitute(&fields).unwrap();
/// assert_eq!(rendered, "Mood: calm. Reflection: Today was fine.");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PromptTemplate {
    source: String,
    segments: Vec<Segment>,
}

impl PromptTemplate {
    /// Parses template text.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::Malformed`] on unbalanced braces, empty
    /// placeholders, or placeholder names outside `[A-Za-z0-9_]`.
    pub fn parse(source: impl Into<String>) -> TemplateResult<Self> {
        let source = source.into();
        let segments = parse_segments(&source)?;
        Ok(Self { source, segments })
    }

    /// Returns the distinct placeholder names referenced by the template.
    #[must_use]
    pub fn placeholders(&self) -> BTreeSet<&str> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Field(name) => Some(name.as_str()),
                Segment::Literal(_) => None,
            })
            .collect()
    }

    /// Verifies that the template references exactly the given field names.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::Mismatch`] listing the disagreeing names.
    pub fn check_fields(&self, names: &[&str]) -> TemplateResult<()> {
        let expected = self.placeholders();
        let supplied: BTreeSet<&str> = names.iter().copied().collect();

        let unfilled: Vec<String> = expected
            .difference(&supplied)
            .map(|name| (*name).to_owned())
            .collect();
        let unused: Vec<String> = supplied
            .difference(&expected)
            .map(|name| (*name).to_owned())
            .collect();

        if unfilled.is_empty() && unused.is_empty() {
            Ok(())
        } else {
            Err(TemplateError::Mismatch { unfilled, unused })
        }
    }

    /// Substitutes every placeholder with its field value.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::Mismatch`] if the fields do not match the
    /// template's placeholders exactly. No partial output is produced.
    pub fn substitute(&self, fields: &HashMap<&str, &str>) -> TemplateResult<String> {
        let names: Vec<&str> = fields.keys().copied().collect();
        self.check_fields(&names)?;

        let mut rendered = String::with_capacity(self.source.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => rendered.push_str(text),
                Segment::Field(name) => {
                    if let Some(value) = fields.get(name.as_str()) {
                        rendered.push_str(value);
                    }
                }
            }
        }

        Ok(rendered)
    }

    /// Returns the raw template string.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl fmt::Display for PromptTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl FromStr for PromptTemplate {
    type Err = TemplateError;

    fn from_str(s: &str) -> TemplateResult<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PromptTemplate {
    type Error = TemplateError;

    fn try_from(value: String) -> TemplateResult<Self> {
        Self::parse(value)
    }
}

impl From<PromptTemplate> for String {
    fn from(value: PromptTemplate) -> Self {
        value.source
    }
}

fn parse_segments(source: &str) -> TemplateResult<Vec<Segment>> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut chars = source.char_indices().peekable();

    while let Some((position, ch)) = chars.next() {
        match ch {
            '{' if chars.next_if(|&(_, next)| next == '{').is_some() => literal.push('{'),
            '}' if chars.next_if(|&(_, next)| next == '}').is_some() => literal.push('}'),
            '}' => {
                return Err(TemplateError::Malformed {
                    position,
                    reason: "unmatched `}`",
                });
            }
            '{' => {
                let name = read_placeholder(&mut chars, position)?;
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Field(name));
            }
            _ => literal.push(ch),
        }
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }

    Ok(segments)
}

/// Reads a placeholder name up to and including the closing brace.
fn read_placeholder(
    chars: &mut impl Iterator<Item = (usize, char)>,
    open: usize,
) -> TemplateResult<String> {
    let mut name = String::new();
    loop {
        match chars.next() {
            Some((_, '}')) => break,
            Some((_, ch)) if ch == '_' || ch.is_ascii_alphanumeric() => name.push(ch),
            Some((position, _)) => {
                return Err(TemplateError::Malformed {
                    position,
                    reason: "placeholder names may only contain ASCII letters, digits, and `_`",
                });
            }
            None => {
                return Err(TemplateError::Malformed {
                    position: open,
                    reason: "unclosed `{`",
                });
            }
        }
    }

    if name.is_empty() {
        return Err(TemplateError::Malformed {
            position: open,
            reason: "empty placeholder",
        });
    }

    Ok(name)
}
