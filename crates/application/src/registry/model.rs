//! Command ingestion.

use dispatchgen_domain::{Argument, CommandSet, Function};
use indexmap::IndexMap;
use tracing::debug;

use crate::error::ApplicationResult;
use crate::ports::RegistryNode;

/// A `<command>` element before alias resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedCommand {
    /// A command with its own prototype.
    Concrete(Function),
    /// A command that reuses another command's signature.
    AliasOf {
        /// Alias name.
        name: String,
        /// Name of the aliased command.
        target: String,
    },
}

/// Concrete commands and pending aliases, both in document order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegistryCommands {
    /// Commands defined by a prototype.
    pub concrete: CommandSet,
    /// Alias name to target name.
    pub aliases: IndexMap<String, String>,
}

/// Rebuilds the C type text of a `proto` or `param` element.
///
/// The text before the element's first child, the `type` child's text and
/// the right-trimmed text following it are concatenated, so
/// `const <type>VkAllocationCallbacks</type>* <name>pAllocator</name>`
/// yields `const VkAllocationCallbacks*`.
///
/// # Errors
///
/// Returns an error if the element has no `type` child.
pub fn parse_type<N: RegistryNode>(node: &N) -> ApplicationResult<String> {
    let ty = node.required_child("type")?;
    let prefix = node.leading_text();
    let tail = node.tail_of("type");
    Ok(format!("{prefix}{}{}", ty.text(), tail.trim_end()))
}

/// Returns true if a comma-separated `api` attribute includes `api`.
fn api_matches(list: &str, api: &str) -> bool {
    list.split(',').any(|candidate| candidate == api)
}

/// Parses one `<command>` element.
///
/// Returns `None` for commands tagged for a different API. Parameters tagged
/// for a different API are dropped.
///
/// # Errors
///
/// Returns an error if a prototype, name or type is missing.
pub fn parse_command<N: RegistryNode>(node: &N, api: &str) -> ApplicationResult<Option<ParsedCommand>> {
    if let Some(apis) = node.attribute("api")
        && !api_matches(apis, api)
    {
        debug!(api = apis, "skipping command defined for another API");
        return Ok(None);
    }

    if let Some(target) = node.attribute("alias") {
        let name = node.required_attribute("name")?;
        return Ok(Some(ParsedCommand::AliasOf {
            name: name.to_string(),
            target: target.to_string(),
        }));
    }

    let proto = node.required_child("proto")?;
    let name = proto.required_child("name")?.text();
    let return_type = parse_type(&proto)?;

    let args = node
        .children("param")
        .iter()
        .filter(|param| param.attribute("api").is_none_or(|tag| tag == api))
        .map(|param| -> ApplicationResult<Argument> {
            let arg_name = param.required_child("name")?.text();
            Ok(Argument::new(parse_type(param)?, arg_name))
        })
        .collect::<ApplicationResult<Vec<_>>>()?;

    Ok(Some(ParsedCommand::Concrete(Function::new(name, return_type, args))))
}

/// Parses every command of the registry's `commands` container.
///
/// # Errors
///
/// Returns an error if the container is missing or a command is malformed.
pub fn parse_commands<N: RegistryNode>(root: &N, api: &str) -> ApplicationResult<RegistryCommands> {
    let mut commands = RegistryCommands::default();

    for node in root.required_child("commands")?.children("command") {
        match parse_command(&node, api)? {
            Some(ParsedCommand::Concrete(function)) => {
                commands.concrete.insert(function);
            }
            Some(ParsedCommand::AliasOf { name, target }) => {
                commands.aliases.insert(name, target);
            }
            None => {}
        }
    }

    debug!(
        concrete = commands.concrete.len(),
        aliases = commands.aliases.len(),
        "parsed registry commands"
    );
    Ok(commands)
}
