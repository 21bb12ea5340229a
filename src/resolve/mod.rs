mod messages;

use crate::config::{parse_rules, LabelRule, ParseError};
use crate::context::ActionContext;
use crate::github::{find_merged_pull_request, LookupError, PullRequestSource};
use crate::protocol::{
    ErrorCode, PullRequest, ERROR_OUTPUT, LABEL_NAME_OUTPUT, LABEL_VALUE_OUTPUT,
};

/// Input holding the priority list.
pub const LABELS_INPUT: &str = "labels";
/// Input holding the API token, needed only when the event has no pull request.
pub const TOKEN_INPUT: &str = "GitHubToken";

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// The strongest rule present on the pull request.
    Matched(LabelRule),
    /// No pull request is associated with the triggering commit.
    NoPullRequest,
    /// The pull request carries none of the configured labels.
    NoMatch,
}

impl Resolution {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Resolution::Matched(_) => ErrorCode::NoError,
            Resolution::NoPullRequest => ErrorCode::NoPullRequest,
            Resolution::NoMatch => ErrorCode::NoWantedLabel,
        }
    }
}

/// Errors that fail the step.
///
/// By the time one is returned it has already been reported through
/// [`ActionContext::set_failed`].
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum RunError {
    #[error("Error on parsing input labels. Error Message: {0}")]
    #[diagnostic(
        code(strongest_label::labels),
        help("`labels` takes a JSON array or one `name[, value]` pair per line")
    )]
    Parse(ParseError),

    #[error("No GitHub Token")]
    #[diagnostic(
        code(strongest_label::token),
        help("set the `GitHubToken` input; it is required when the event has no pull request")
    )]
    MissingToken,

    #[error("Error on getting pull request")]
    #[diagnostic(code(strongest_label::lookup))]
    Lookup(#[source] LookupError),

    #[error("failed to set output '{name}'")]
    #[diagnostic(code(strongest_label::output))]
    Output {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

/// Return the first rule whose label is attached to the pull request.
///
/// Rule order decides; the order of labels on the pull request does not.
///
/// # Examples
///
/// ```
/// use strongest_label::config::parse_rules;
/// use strongest_label::protocol::PullRequest;
/// use strongest_label::resolve::strongest_label;
///
/// let rules = parse_rules("major\nminor\npatch").unwrap().rules;
/// let pr: PullRequest = serde_json::from_str(
///     r#"{"number": 1, "labels": [{"name": "patch"}, {"name": "minor"}]}"#,
/// ).unwrap();
///
/// let strongest = strongest_label(&rules, &pr).unwrap();
/// assert_eq!(strongest.label_name.as_str(), "minor");
/// ```
pub fn strongest_label<'r>(
    rules: &'r [LabelRule],
    pull_request: &PullRequest,
) -> Option<&'r LabelRule> {
    rules
        .iter()
        .find(|rule| pull_request.has_label(rule.label_name.as_str()))
}

/// Run the action once against `ctx`.
///
/// Reports `error=0` first, parses the `labels` input, takes the pull request
/// from the event or looks it up through `source`, then reports the
/// strongest label. Missing pull requests and unmatched labels are
/// [`Resolution`]s, not errors.
pub async fn run<C, S>(ctx: &mut C, source: &S) -> Result<Resolution, RunError>
where
    C: ActionContext + ?Sized,
    S: PullRequestSource + ?Sized,
{
    report(ctx, ERROR_OUTPUT, &ErrorCode::NoError.to_string())?;

    let parsed = match parse_rules(&ctx.input(LABELS_INPUT)) {
        Ok(parsed) => parsed,
        Err(e) => return Err(fail(ctx, RunError::Parse(e))),
    };
    for warning in &parsed.warnings {
        ctx.warning(warning);
    }
    tracing::debug!(rules = parsed.rules.len(), "parsed label rules");

    let pull_request = match ctx.pull_request().cloned() {
        Some(pr) => pr,
        None => match lookup(ctx, source).await? {
            Some(pr) => pr,
            None => {
                report(ctx, ERROR_OUTPUT, &ErrorCode::NoPullRequest.to_string())?;
                ctx.info(messages::NOT_A_PULL_REQUEST);
                return Ok(Resolution::NoPullRequest);
            }
        },
    };

    let Some(rule) = strongest_label(&parsed.rules, &pull_request) else {
        report(ctx, ERROR_OUTPUT, &ErrorCode::NoWantedLabel.to_string())?;
        ctx.info(messages::NO_WANTED_LABEL);
        return Ok(Resolution::NoMatch);
    };
    tracing::debug!(pull_request = pull_request.number, label = %rule.label_name, "matched rule");

    report(ctx, LABEL_NAME_OUTPUT, rule.label_name.as_str())?;
    report(ctx, LABEL_VALUE_OUTPUT, &rule.value.to_string())?;
    ctx.info(&messages::matched_summary(rule));
    ctx.info(messages::OUTPUT_USAGE);

    Ok(Resolution::Matched(rule.clone()))
}

/// Find the merged pull request for the current commit.
async fn lookup<C, S>(ctx: &mut C, source: &S) -> Result<Option<PullRequest>, RunError>
where
    C: ActionContext + ?Sized,
    S: PullRequestSource + ?Sized,
{
    let token = ctx.input(TOKEN_INPUT);
    if token.is_empty() {
        return Err(fail(ctx, RunError::MissingToken));
    }

    let repository = ctx.repository().cloned();
    let sha = ctx.sha().map(str::to_string);
    let result = match (repository, sha) {
        (None, _) => Err(LookupError::MissingRepository),
        (_, None) => Err(LookupError::MissingSha),
        (Some(repository), Some(sha)) => {
            find_merged_pull_request(source, &repository, &token, &sha).await
        }
    };

    result.map_err(|e| {
        tracing::error!(error = %e, "pull request lookup failed");
        fail(ctx, RunError::Lookup(e))
    })
}

fn report<C>(ctx: &mut C, name: &str, value: &str) -> Result<(), RunError>
where
    C: ActionContext + ?Sized,
{
    match ctx.set_output(name, value) {
        Ok(()) => Ok(()),
        Err(source) => Err(fail(
            ctx,
            RunError::Output {
                name: name.to_string(),
                source,
            },
        )),
    }
}

/// Report `err` as a step failure and hand it back for propagation.
fn fail<C>(ctx: &mut C, err: RunError) -> RunError
where
    C: ActionContext + ?Sized,
{
    ctx.set_failed(&err.to_string());
    if let RunError::Lookup(cause) = &err {
        ctx.error(&format!("{err}: {cause}"));
    }
    err
}

#[cfg(test)]
mod tests;
