//! Go parser using tree-sitter
//!
//! This module parses Go source text and turns every top-level function
//! into a [`Command`]. Methods (declarations with a receiver) are skipped.
//!
//! Parameters typed exactly `bool` become flags, everything else becomes a
//! positional argument carrying the literal type spelling from the source.

use tree_sitter::{Node, Parser as TsParser};
use tree_sitter_go::LANGUAGE;

use super::comment;
use crate::command::{Argument, Command, Flag};
use crate::error::{Error, Result};

/// The one type spelling that classifies a parameter as a flag
const BOOL_TYPE: &str = "bool";

/// Extract commands from Go source text
///
/// # Arguments
/// * `file_name` - Name used in error messages only
/// * `source` - Complete Go source file
///
/// # Returns
/// One `Command` per top-level function, in source order
///
/// # Errors
/// - `Error::Parse` if the text is not a valid Go file
/// - `Error::Declaration` if a function cannot be converted
///
/// Nothing is returned on error, even if earlier functions converted fine.
pub fn extract(file_name: &str, source: &str) -> Result<Vec<Command>> {
    let mut parser = TsParser::new();
    parser.set_language(&LANGUAGE.into())?;

    let tree = parser.parse(source, None).ok_or_else(|| Error::Parse {
        file: file_name.to_string(),
        line: 1,
        column: 1,
        message: "parser produced no syntax tree".to_string(),
    })?;

    let root = tree.root_node();
    check_syntax(file_name, &root, source)?;

    let mut commands = Vec::new();
    let mut cursor = root.walk();

    // Go has no nested named functions, so direct children of the root are
    // the only place declarations live
    for node in root.children(&mut cursor) {
        match node.kind() {
            "function_declaration" => {
                let command = extract_function(&node, source)?;
                tracing::debug!(
                    file = file_name,
                    command = %command.name,
                    arguments = command.arguments.len(),
                    flags = command.flags.len(),
                    "extracted command"
                );
                commands.push(command);
            }
            "method_declaration" => {
                tracing::trace!(
                    file = file_name,
                    method = node_text(&node, source).lines().next().unwrap_or_default(),
                    "skipping method"
                );
            }
            _ => {}
        }
    }

    Ok(commands)
}

/// Reject trees with syntax errors, a missing package clause, or structure
/// the Go grammar forbids but tree-sitter accepts
fn check_syntax(file_name: &str, root: &Node, source: &str) -> Result<()> {
    let parse_error = |node: &Node, message: String| {
        let position = node.start_position();
        Error::Parse {
            file: file_name.to_string(),
            line: position.row + 1,
            column: position.column + 1,
            message,
        }
    };

    if let Some(bad) = first_syntax_error(*root) {
        let message = if bad.is_missing() {
            format!("missing `{}`", bad.kind())
        } else {
            let snippet: String = node_text(&bad, source)
                .lines()
                .next()
                .unwrap_or_default()
                .chars()
                .take(24)
                .collect();
            format!("unexpected `{}`", snippet.trim())
        };
        return Err(parse_error(&bad, message));
    }

    let mut cursor = root.walk();
    let first = root
        .named_children(&mut cursor)
        .find(|node| node.kind() != "comment");

    match first {
        Some(node) if node.kind() == "package_clause" => {}
        Some(node) => {
            return Err(parse_error(
                &node,
                format!("expected 'package', found {}", node.kind()),
            ))
        }
        None => {
            let end = root.end_position();
            return Err(Error::Parse {
                file: file_name.to_string(),
                line: end.row + 1,
                column: end.column + 1,
                message: "expected 'package', found EOF".to_string(),
            });
        }
    }

    match first_structure_error(root) {
        Some((node, message)) => Err(parse_error(&node, message.to_string())),
        None => Ok(()),
    }
}

/// Find top-level content or parameter lists that `go/parser` rejects
///
/// tree-sitter-go allows statements at the top level, imports anywhere and
/// parameter lists mixing named and unnamed groups.
fn first_structure_error<'t>(root: &Node<'t>) -> Option<(Node<'t>, &'static str)> {
    let mut cursor = root.walk();
    let mut past_imports = false;

    for node in root.named_children(&mut cursor) {
        match node.kind() {
            "comment" | "package_clause" => {}
            "import_declaration" if past_imports => {
                return Some((node, "imports must appear before other declarations"));
            }
            "import_declaration" => {}
            "function_declaration" if node.child_by_field_name("name").is_none() => {
                return Some((node, "expected function name"));
            }
            "function_declaration" | "method_declaration" | "type_declaration"
            | "const_declaration" | "var_declaration" => past_imports = true,
            _ => return Some((node, "non-declaration statement outside function body")),
        }
    }

    mixed_parameters(*root).map(|node| (node, "mixed named and unnamed parameters"))
}

/// First unnamed group in a parameter list that also has named groups
fn mixed_parameters(node: Node) -> Option<Node> {
    let mut cursor = node.walk();
    let children: Vec<Node> = node.named_children(&mut cursor).collect();

    if node.kind() == "parameter_list" {
        let groups: Vec<&Node> = children.iter().filter(|c| is_parameter_group(c)).collect();
        let named = groups
            .iter()
            .any(|group| group.child_by_field_name("name").is_some());
        if named {
            if let Some(unnamed) = groups
                .iter()
                .find(|group| group.child_by_field_name("name").is_none())
            {
                return Some(**unnamed);
            }
        }
    }

    children.into_iter().find_map(mixed_parameters)
}

fn is_parameter_group(node: &Node) -> bool {
    matches!(
        node.kind(),
        "parameter_declaration" | "variadic_parameter_declaration"
    )
}

/// Depth-first search for the first ERROR or MISSING node
fn first_syntax_error(node: Node) -> Option<Node> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }

    let mut cursor = node.walk();
    let children: Vec<Node> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_syntax_error)
}

/// Convert one `function_declaration` node into a command
fn extract_function(node: &Node, source: &str) -> Result<Command> {
    let name_node = node
        .child_by_field_name("name")
        .ok_or_else(|| Error::Declaration {
            function: "<unnamed>".to_string(),
            reason: "function has no name".to_string(),
        })?;
    let name = utf8(&name_node, source, "<unnamed>")?.to_string();

    let declaration_error = |reason: &str| Error::Declaration {
        function: name.clone(),
        reason: reason.to_string(),
    };

    let params = node
        .child_by_field_name("parameters")
        .ok_or_else(|| declaration_error("function has no parameter list"))?;

    let mut command = Command::new(name.clone()).with_description(doc_comment(node, source));

    let mut cursor = params.walk();
    let children: Vec<Node> = params.children(&mut cursor).collect();

    for (i, param) in children.iter().enumerate() {
        let variadic = match param.kind() {
            "parameter_declaration" => false,
            "variadic_parameter_declaration" => true,
            _ => continue,
        };

        let type_node = param
            .child_by_field_name("type")
            .ok_or_else(|| declaration_error("parameter has no type"))?;

        // `...T` is spelled from the ellipsis, matching how it reads in source
        let start = if variadic {
            let mut param_cursor = param.walk();
            let ellipsis = param
                .children(&mut param_cursor)
                .find(|child| child.kind() == "...");
            ellipsis.map_or(type_node.start_byte(), |e| e.start_byte())
        } else {
            type_node.start_byte()
        };
        let type_name = source
            .get(start..type_node.end_byte())
            .ok_or_else(|| declaration_error("parameter type lies outside the source text"))?;

        let description = trailing_comment(param, &children[i + 1..], source);

        let mut name_cursor = param.walk();
        for ident in param.children_by_field_name("name", &mut name_cursor) {
            let param_name = utf8(&ident, source, &name)?;

            if type_name == BOOL_TYPE {
                command
                    .flags
                    .push(Flag::new(param_name).with_description(description.clone()));
            } else {
                command.arguments.push(
                    Argument::new(param_name, type_name).with_description(description.clone()),
                );
            }
        }
    }

    Ok(command)
}

/// Collect the doc comment group directly above a declaration
///
/// The group is the run of comments with no blank line between them whose
/// last line sits right above the declaration. A comment on the same line
/// as `func` is not a doc comment. A comment sharing a line with the
/// previous declaration belongs to that declaration and ends the group.
fn doc_comment(node: &Node, source: &str) -> String {
    let mut group: Vec<&str> = Vec::new();
    let start_row = node.start_position().row;
    let mut boundary_row = start_row;
    let mut current = node.prev_named_sibling();

    while let Some(candidate) = current {
        if candidate.kind() != "comment" {
            break;
        }
        let end_row = candidate.end_position().row;
        let adjacent = if group.is_empty() {
            end_row + 1 == start_row
        } else {
            end_row + 1 >= boundary_row
        };
        if !adjacent {
            break;
        }

        let previous = candidate.prev_named_sibling();
        let shares_line = previous.is_some_and(|prev| {
            prev.kind() != "comment" && prev.end_position().row == candidate.start_position().row
        });
        if shares_line {
            break;
        }

        group.push(node_text(&candidate, source));
        boundary_row = candidate.start_position().row;
        current = previous;
    }

    group.reverse();
    comment::text(&group).trim().to_string()
}

/// Comment on the line where a parameter group ends
///
/// `following` are the parameter list children after `param`; only commas
/// may sit between the group and its comment. A comment followed on its
/// line by another group leads that group instead.
fn trailing_comment(param: &Node, following: &[Node], source: &str) -> String {
    let row = param.end_position().row;

    let mut inner_cursor = param.walk();
    let inner = param
        .children(&mut inner_cursor)
        .filter(|child| child.kind() == "comment")
        .last();

    let found = inner.or_else(|| {
        let mut rest = following.iter().skip_while(|sibling| sibling.kind() == ",");
        let candidate = rest
            .next()
            .filter(|sibling| sibling.kind() == "comment" && sibling.start_position().row == row)?;

        let leads_next = rest.next().is_some_and(|next| {
            is_parameter_group(next) && next.start_position().row == candidate.end_position().row
        });
        (!leads_next).then_some(*candidate)
    });

    found
        .map(|c| comment::text(&[node_text(&c, source)]).trim().to_string())
        .unwrap_or_default()
}

fn node_text<'s>(node: &Node, source: &'s str) -> &'s str {
    source.get(node.byte_range()).unwrap_or_default()
}

/// Source text of an identifier, or a declaration error naming `function`
fn utf8<'s>(node: &Node, source: &'s str, function: &str) -> Result<&'s str> {
    node.utf8_text(source.as_bytes())
        .map_err(|e| Error::Declaration {
            function: function.to_string(),
            reason: format!("identifier is not valid UTF-8: {}", e),
        })
}
