//! Interactive session: one controller, many line commands.
//!
//! DESIGN
//! ======
//! The shell is the rendering surface. It parses a line, forwards it to one
//! controller command, and re-renders the whole state. Failed commands are
//! logged and the loop carries on; the list simply does not change.

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

use std::io::{BufRead, Write};

use client::{ClientError, ItemId, ItemListClient, ItemsApi};

use crate::CliError;
use crate::render::render_state;

pub const HELP: &str = "\
commands:
  list                 show the list again
  refresh              reload the list from the server
  name <text>          set the new item's name
  desc <text>          set the new item's description
  add [name]           create the new item
  edit <id>            start editing an item
  ename <text>         set the edited name
  edesc <text>         set the edited description
  done yes|no          set the edited completion flag
  save                 send the edit
  cancel               leave edit mode
  delete <id>          delete an item
  help                 show this text
  quit                 leave the shell";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Noop,
    List,
    Refresh,
    DraftName(String),
    DraftDescription(String),
    Add(Option<String>),
    Edit(ItemId),
    EditName(String),
    EditDescription(String),
    EditCompleted(bool),
    Save,
    Cancel,
    Delete(ItemId),
    Help,
    Quit,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error("invalid item id `{0}`")]
    InvalidId(String),
    #[error("expected yes or no, got `{0}`")]
    InvalidFlag(String),
}

fn required(rest: &str, command: &'static str) -> Result<String, ParseError> {
    if rest.is_empty() {
        return Err(ParseError::MissingArgument(command));
    }
    Ok(rest.to_owned())
}

fn parse_id(rest: &str, command: &'static str) -> Result<ItemId, ParseError> {
    if rest.is_empty() {
        return Err(ParseError::MissingArgument(command));
    }
    rest.parse().map_err(|_| ParseError::InvalidId(rest.to_owned()))
}

fn parse_flag(rest: &str) -> Result<bool, ParseError> {
    match rest.to_ascii_lowercase().as_str() {
        "yes" | "y" | "true" | "on" => Ok(true),
        "no" | "n" | "false" | "off" => Ok(false),
        "" => Err(ParseError::MissingArgument("done")),
        _ => Err(ParseError::InvalidFlag(rest.to_owned())),
    }
}

/// Parse one input line. Text arguments keep inner spacing; `desc` and
/// `edesc` accept an empty argument to clear the field.
pub fn parse_command(line: &str) -> Result<ShellCommand, ParseError> {
    let line = line.trim();
    let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();

    match word {
        "" => Ok(ShellCommand::Noop),
        "list" | "ls" => Ok(ShellCommand::List),
        "refresh" => Ok(ShellCommand::Refresh),
        "name" => required(rest, "name").map(ShellCommand::DraftName),
        "desc" => Ok(ShellCommand::DraftDescription(rest.to_owned())),
        "add" => Ok(ShellCommand::Add((!rest.is_empty()).then(|| rest.to_owned()))),
        "edit" => parse_id(rest, "edit").map(ShellCommand::Edit),
        "ename" => required(rest, "ename").map(ShellCommand::EditName),
        "edesc" => Ok(ShellCommand::EditDescription(rest.to_owned())),
        "done" => parse_flag(rest).map(ShellCommand::EditCompleted),
        "save" => Ok(ShellCommand::Save),
        "cancel" => Ok(ShellCommand::Cancel),
        "delete" | "rm" => parse_id(rest, "delete").map(ShellCommand::Delete),
        "help" | "?" => Ok(ShellCommand::Help),
        "quit" | "exit" => Ok(ShellCommand::Quit),
        other => Err(ParseError::UnknownCommand(other.to_owned())),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Render,
    Help,
    Quiet,
    Quit,
}

async fn apply<A: ItemsApi>(client: &mut ItemListClient<A>, command: ShellCommand) -> Result<Flow, ClientError> {
    match command {
        ShellCommand::Noop => return Ok(Flow::Quiet),
        ShellCommand::Help => return Ok(Flow::Help),
        ShellCommand::Quit => return Ok(Flow::Quit),
        ShellCommand::List => {}
        ShellCommand::Refresh => client.refresh().await?,
        ShellCommand::DraftName(name) => client.set_draft_name(&name),
        ShellCommand::DraftDescription(description) => client.set_draft_description(&description),
        ShellCommand::Add(name) => {
            if let Some(name) = name {
                client.set_draft_name(&name);
            }
            client.submit_draft().await?;
        }
        ShellCommand::Edit(id) => client.begin_edit(id)?,
        ShellCommand::EditName(name) => client.set_edit_name(&name)?,
        ShellCommand::EditDescription(description) => client.set_edit_description(&description)?,
        ShellCommand::EditCompleted(completed) => client.set_edit_completed(completed)?,
        ShellCommand::Save => {
            client.submit_edit().await?;
        }
        ShellCommand::Cancel => client.cancel_edit(),
        ShellCommand::Delete(id) => client.delete(id).await?,
    }
    Ok(Flow::Render)
}

/// Run the shell until `quit` or end of input.
///
/// # Errors
///
/// Only I/O failures on `input`/`output` end the session early.
pub async fn run_shell<A, R, W>(client: &mut ItemListClient<A>, input: R, mut output: W) -> Result<(), CliError>
where
    A: ItemsApi,
    R: BufRead,
    W: Write,
{
    if let Err(e) = client.mount().await {
        tracing::warn!(error = %e, "initial load failed; starting with an empty list");
    }
    writeln!(output, "{}", render_state(client.state()))?;

    for line in input.lines() {
        let line = line?;
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(output, "{e}; type `help` for commands")?;
                continue;
            }
        };

        match apply(client, command).await {
            Ok(Flow::Quit) => break,
            Ok(Flow::Quiet) => {}
            Ok(Flow::Help) => writeln!(output, "{HELP}")?,
            Ok(Flow::Render) => writeln!(output, "{}", render_state(client.state()))?,
            Err(e) => {
                tracing::warn!(error = %e, %line, "command failed");
                writeln!(output, "{}", render_state(client.state()))?;
            }
        }
    }
    output.flush()?;
    Ok(())
}
