//! Numbered console menus
//!
//! Options are printed as a framed list and picked by typing their key.
//! Invalid answers are rejected inline and asked again. Domain failures are
//! reported and the menu goes on; data file failures end the session.

pub mod catalog_menu;
pub mod registry_menu;

use anyhow::Result;
use dialoguer::theme::Theme;
use dialoguer::Input;

use roster::config::Config;
use roster::presentation::{create_catalog_use_case, create_roster_use_case};
use roster::{RosterError, RosterResult};

use crate::ui::context::UiContext;
use crate::ui::views::options::{render_indexed_options, render_keyed_options};

const INVALID_OPTION: &str = "Invalid option! Choose again.";

/// Entry point when `roster` runs without a subcommand.
pub fn cmd_interactive(config: &Config, ui: &UiContext) -> Result<()> {
    if ui.json || !ui.caps.is_interactive() {
        print_commands();
        return Ok(());
    }

    let prompt = Prompter::new(ui);
    loop {
        let choice = prompt.choose_key(&[
            ("1", "Product catalog"),
            ("2", "Musician registry"),
            ("0", "Exit"),
        ])?;
        match choice.as_str() {
            "1" => catalog_menu::run(&create_catalog_use_case(config)?, ui)?,
            "2" => registry_menu::run(&create_roster_use_case(config), ui)?,
            _ => break,
        }
    }
    println!("Goodbye!");
    Ok(())
}

/// Menus reached through a subcommand still need a person at the keyboard.
pub(crate) fn require_terminal(ui: &UiContext) -> Result<()> {
    if !ui.caps.is_interactive() {
        anyhow::bail!("the menu needs an interactive terminal; use the subcommands instead");
    }
    Ok(())
}

fn print_commands() {
    println!("roster needs a terminal for the interactive menu. Commands:\n");
    println!("  roster catalog categories|list|cheapest|priciest|top");
    println!("  roster musicians register|search|modify|bands");
    println!("\nRun 'roster --help' for details.");
}

/// Print a recoverable failure and swallow it; let anything else through.
pub(crate) fn recover<T>(result: RosterResult<T>, ui: &UiContext) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) if err.is_recoverable() => {
            report(&err, ui);
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}

fn report(err: &RosterError, ui: &UiContext) {
    println!("{}\n", crate::ui::error::format_recoverable(err, ui));
}

/// Text prompts bound to the session's theme.
pub(crate) struct Prompter<'a> {
    ui: &'a UiContext,
    theme: Box<dyn Theme>,
}

impl<'a> Prompter<'a> {
    pub fn new(ui: &'a UiContext) -> Self {
        Self {
            ui,
            theme: crate::ui::theme::prompt_theme(ui.color),
        }
    }

    /// Ask until `validate` accepts the answer.
    pub fn ask<E: ToString>(
        &self,
        prompt: &str,
        validate: impl Fn(&str) -> Result<(), E>,
    ) -> Result<String> {
        let answer = Input::<String>::with_theme(&*self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .validate_with(|input: &String| -> Result<(), String> {
                validate(input).map_err(|e| e.to_string())
            })
            .interact_text()?;
        Ok(answer)
    }

    /// Ask once; blank answers are allowed.
    pub fn ask_optional(&self, prompt: &str) -> Result<String> {
        self.ask(prompt, |_| Ok::<(), String>(()))
    }

    pub fn choose_key(&self, options: &[(&str, &str)]) -> Result<String> {
        print!("\n{}", render_keyed_options("Options", options, self.ui.color));
        let answer = self.ask(">> Enter the desired option", |input| {
            if options.iter().any(|(key, _)| *key == input.trim()) {
                Ok(())
            } else {
                Err(INVALID_OPTION)
            }
        })?;
        Ok(answer.trim().to_string())
    }

    pub fn choose_index<S: AsRef<str>>(&self, title: &str, options: &[S]) -> Result<usize> {
        print!("\n{}", render_indexed_options(title, options, self.ui.color));
        let answer = self.ask(">> Enter the option number", |input| {
            match input.trim().parse::<usize>() {
                Ok(index) if index < options.len() => Ok(()),
                _ => Err(INVALID_OPTION),
            }
        })?;
        Ok(answer.trim().parse()?)
    }
}
