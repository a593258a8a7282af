/// Payload validation for posts and comments
///
/// Request bodies reach the stores as untyped JSON. Each expected field is
/// checked for presence and type here before the typed draft is built and
/// its length rules are enforced by `validator`.
use crate::models::{CommentDraft, PostDraft};
use serde_json::{Map, Value};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

const POST_FIELDS: [&str; 2] = ["title", "contents"];
const COMMENT_FIELDS: [&str; 1] = ["text"];

/// Input was rejected and nothing was persisted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct ValidationFailed {
    pub reason: String,
}

impl ValidationFailed {
    fn post(problems: &[String]) -> Self {
        Self {
            reason: format!(
                "Please provide title and contents for the post ({})",
                problems.join("; ")
            ),
        }
    }

    fn comment(problems: &[String]) -> Self {
        Self {
            reason: format!(
                "Please provide text for the comment ({})",
                problems.join("; ")
            ),
        }
    }
}

/// Validate a post payload into a [`PostDraft`].
///
/// Every offending field is reported, whether it is missing, not a string,
/// or empty.
pub fn post_draft(payload: &Value) -> Result<PostDraft, ValidationFailed> {
    let fields = object(payload, &POST_FIELDS).map_err(|p| ValidationFailed::post(&p))?;

    let title = text_field(fields, "title");
    let contents = text_field(fields, "contents");

    let draft = PostDraft {
        title: title.clone().unwrap_or_default(),
        contents: contents.clone().unwrap_or_default(),
    };
    let length_errors = draft.validate().err();

    let problems = field_problems(
        &[("title", &title), ("contents", &contents)],
        length_errors.as_ref(),
    );
    if !problems.is_empty() {
        return Err(ValidationFailed::post(&problems));
    }

    Ok(draft)
}

/// Validate a comment payload into a [`CommentDraft`].
///
/// Fields other than `text` are ignored; a comment always binds to the post
/// named by the caller, never to a `post_id` carried in the body.
pub fn comment_draft(payload: &Value) -> Result<CommentDraft, ValidationFailed> {
    let fields = object(payload, &COMMENT_FIELDS).map_err(|p| ValidationFailed::comment(&p))?;

    let text = text_field(fields, "text");

    let draft = CommentDraft {
        text: text.clone().unwrap_or_default(),
    };
    let length_errors = draft.validate().err();

    let problems = field_problems(&[("text", &text)], length_errors.as_ref());
    if !problems.is_empty() {
        return Err(ValidationFailed::comment(&problems));
    }

    Ok(draft)
}

fn object<'a>(payload: &'a Value, expected: &[&str]) -> Result<&'a Map<String, Value>, Vec<String>> {
    payload.as_object().ok_or_else(|| {
        vec![format!(
            "body must be a JSON object with {}",
            expected.join(" and ")
        )]
    })
}

/// Presence and type check; the error is the problem description
fn text_field(fields: &Map<String, Value>, name: &str) -> Result<String, String> {
    match fields.get(name) {
        None | Some(Value::Null) => Err(format!("{name}: is required")),
        Some(Value::String(value)) => Ok(value.clone()),
        Some(_) => Err(format!("{name}: must be a string")),
    }
}

/// Problems in field order. Length errors only count for fields that were
/// present as strings.
fn field_problems(
    checked: &[(&str, &Result<String, String>)],
    length_errors: Option<&ValidationErrors>,
) -> Vec<String> {
    let too_short = length_errors.map(|errors| errors.field_errors());

    checked
        .iter()
        .filter_map(|(name, field)| match field {
            Err(problem) => Some(problem.clone()),
            Ok(_) if too_short
                .as_ref()
                .is_some_and(|failed| failed.contains_key(*name)) =>
            {
                Some(format!("{name}: must be a non-empty string"))
            }
            Ok(_) => None,
        })
        .collect()
}
