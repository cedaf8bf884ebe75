//! Requirement collection.
//!
//! Walks `feature` elements, then the `extension` elements of the
//! `extensions` container, recording for every required command the group of
//! symbols that enables it. Document order is preserved throughout; it
//! decides the order of the emitted `#if` sections.

use dispatchgen_domain::{CommandRequirements, RequirementGroup};
use tracing::debug;

use crate::error::ApplicationResult;
use crate::ports::RegistryNode;

/// Collects per-command requirement groups from the whole registry.
///
/// Feature and extension elements carrying a `platform` attribute are
/// skipped so that platform-specific commands never reach the ABI-neutral
/// artifacts. A registry without an `extensions` container contributes
/// features only.
///
/// # Errors
///
/// Returns an error if a feature, extension or required command lacks its
/// `name` attribute.
pub fn collect_requirements<N: RegistryNode>(root: &N) -> ApplicationResult<CommandRequirements> {
    let mut requirements = CommandRequirements::new();

    for feature in root.children("feature") {
        collect_from(&feature, &mut requirements)?;
    }

    if let Some(extensions) = root.child("extensions") {
        for extension in extensions.children("extension") {
            collect_from(&extension, &mut requirements)?;
        }
    }

    debug!(commands = requirements.len(), "collected command requirements");
    Ok(requirements)
}

/// Records the requirement groups of one feature or extension element.
fn collect_from<N: RegistryNode>(node: &N, out: &mut CommandRequirements) -> ApplicationResult<()> {
    if let Some(platform) = node.attribute("platform") {
        debug!(
            name = node.attribute("name").unwrap_or_default(),
            platform, "skipping platform-specific block"
        );
        return Ok(());
    }

    let root_symbol = node.required_attribute("name")?;

    for require in node.children("require") {
        let group = require_group(root_symbol, &require);
        for command in require.children("command") {
            out.add(command.required_attribute("name")?, group.clone());
        }
    }

    Ok(())
}

/// Builds the conjunction for one `require` block: the enclosing element's
/// name, its `feature` attribute, then each of its comma-separated
/// `extension` attribute values.
fn require_group<N: RegistryNode>(root_symbol: &str, require: &N) -> RequirementGroup {
    let mut group = RequirementGroup::new(root_symbol);
    if let Some(feature) = require.attribute("feature") {
        group.push(feature);
    }
    if let Some(extensions) = require.attribute("extension") {
        for extension in extensions.split(',') {
            group.push(extension);
        }
    }
    group
}
