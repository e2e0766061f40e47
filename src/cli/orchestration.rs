//! Main workflow orchestration logic
//!
//! Keeps the release flow independent of argument parsing so it can be
//! driven with any tag source and publisher.

use crate::boundary::BoundaryWarning;
use crate::config::ReleaseConfig;
use crate::domain::strip_tag_ref;
use crate::error::Result;
use crate::git::TagSource;
use crate::outputs::{ActionOutputs, CURRENT_TAG, HTML_URL, ID, PREVIOUS_TAG, UPLOAD_URL};
use crate::publish::{PublishedRelease, ReleasePublisher, ReleaseRequest};
use crate::resolver::{next_tag, select_previous_tag, unparsed_tags};
use crate::ui;

/// Tag chosen for the release, and the tag it was derived from
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTag {
    pub tag: String,
    /// `None` for an explicit tag name or a repository without tags
    pub previous: Option<String>,
}

/// Result of a successful release workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// The tag the release was created for
    pub tag: String,

    /// The tag the new one was derived from
    pub previous_tag: Option<String>,

    /// The request handed to the publisher
    pub request: ReleaseRequest,

    /// What the publisher reported back
    pub published: PublishedRelease,
}

/// Work out the tag for this release.
///
/// An explicit tag name wins. Otherwise the existing tags are listed once,
/// the most recent is selected and bumped. The previous tag is reported as
/// the `previous_tag` output before the next tag is computed.
pub fn resolve_tag<S: TagSource + ?Sized>(
    config: &ReleaseConfig,
    source: &S,
    outputs: &mut ActionOutputs,
) -> Result<ResolvedTag> {
    if let Some(tag) = &config.tag_name {
        ui::display_status(&format!("Using configured tag: {}", tag));
        return Ok(ResolvedTag {
            tag: tag.clone(),
            previous: None,
        });
    }

    let listed = source.list_tags()?;
    let tags: Vec<&str> = listed.iter().map(|tag| strip_tag_ref(tag)).collect();
    ui::display_status(&format!("Found {} existing tag(s)", tags.len()));

    let textual = unparsed_tags(&tags);
    if !textual.is_empty() {
        ui::display_boundary_warning(&BoundaryWarning::TextualTagComparison {
            tags: textual.iter().map(|tag| tag.to_string()).collect(),
        });
    }

    let previous = select_previous_tag(&tags);
    if let Some(previous) = previous {
        ui::display_status(&format!("Computing the next tag based on: {}", previous));
        outputs.set(PREVIOUS_TAG, previous);
    }

    let tag = next_tag(previous, &config.bump)?;
    ui::display_proposed_tag(previous, &tag);

    Ok(ResolvedTag {
        tag,
        previous: previous.map(str::to_string),
    })
}

/// Main release workflow
///
/// Orchestrates the entire release:
/// 1. Report configuration warnings
/// 2. Resolve the tag (explicit, or previous tag + bump)
/// 3. Build the release request and hand it to the publisher
/// 4. Record `current_tag` and whatever the publisher reported
///
/// Nothing past `previous_tag` is recorded when a step fails.
pub fn run_release_workflow<S, P>(
    config: &ReleaseConfig,
    source: &S,
    publisher: &P,
    outputs: &mut ActionOutputs,
) -> Result<WorkflowResult>
where
    S: TagSource + ?Sized,
    P: ReleasePublisher + ?Sized,
{
    for warning in &config.warnings {
        ui::display_boundary_warning(warning);
    }

    let resolved = resolve_tag(config, source, outputs)?;

    let request = ReleaseRequest {
        tag_name: resolved.tag.clone(),
        name: config.release_name_for(&resolved.tag),
        body: config.body.clone(),
        draft: config.draft,
        prerelease: config.bump.prerelease,
    };

    ui::display_status(&format!("Creating release: {}", request.name));
    let published = publisher.create_release(&request)?;

    outputs.set(CURRENT_TAG, resolved.tag.as_str());
    let reported = [
        (ID, &published.id),
        (HTML_URL, &published.html_url),
        (UPLOAD_URL, &published.upload_url),
    ];
    for (key, value) in reported {
        if let Some(value) = value {
            outputs.set(key, value.as_str());
        }
    }
    ui::display_success(&format!("Release {} prepared", resolved.tag));

    Ok(WorkflowResult {
        tag: resolved.tag,
        previous_tag: resolved.previous,
        request,
        published,
    })
}
