//! Help text rendering
//!
//! Renders a [`Command`] through a static Liquid template. The command is
//! converted with `liquid::model::to_value`, so template field names are the
//! serde field names of the model.

use crate::command::Command;
use crate::error::Result;

/// Help layout: header, synopsis, then optional `Options:` and `Commands:`
/// sections that only appear when they have entries
const HELP_TEMPLATE: &str = concat!(
    "{{ name }}: {{ description }}\n",
    "\n",
    "{{ name }} [flags]{% for argument in arguments %} {{ argument.name }}{% endfor %}\n",
    "{% for flag in flags %}",
    "{% if forloop.first %}\nOptions:\n{% endif %}",
    "  {% if flag.short_name %}-{{ flag.short_name }} {{ flag.name }}{% else %}-{{ flag.name }}{% endif %}",
    "\t{{ flag.description }}\n",
    "{% endfor %}",
    "{% for command in sub_commands %}",
    "{% if forloop.first %}\nCommands:\n{% endif %}",
    "  {{ command.name }}\n",
    "{% endfor %}",
);

impl Command {
    /// Render the help message for this command
    ///
    /// # Errors
    /// Returns `Error::Template` if the template does not parse, the command
    /// cannot be bound to it, or rendering fails. No partial text is
    /// returned.
    ///
    /// # Example
    /// ```
    /// use cligen_core::{Argument, Command, Flag};
    ///
    /// let cmd = Command::new("Copy")
    ///     .with_description("Copy files and directories.")
    ///     .with_argument(Argument::new("src", "string"))
    ///     .with_flag(Flag::new("recursive"));
    ///
    /// let help = cmd.help().unwrap();
    /// assert!(help.starts_with("Copy: Copy files and directories.\n"));
    /// assert!(help.contains("Copy [flags] src\n"));
    /// ```
    pub fn help(&self) -> Result<String> {
        render(HELP_TEMPLATE, self)
    }
}

fn render(template: &str, command: &Command) -> Result<String> {
    let parser = liquid::ParserBuilder::with_stdlib().build()?;
    let template = parser.parse(template)?;
    let globals = match liquid::model::to_value(command)? {
        liquid::model::Value::Object(object) => object,
        _ => return Err(liquid::Error::with_msg("command did not bind to an object").into()),
    };

    Ok(template.render(&globals)?)
}
