use anyhow::Result;

use roster::domain::value_objects::normalize;
use roster::{FieldOp, ListField, MatchMode, RosterUseCase, SearchField, SearchFilters};

use super::{recover, require_terminal, Prompter};
use crate::commands::input::{
    parse_member_count, parse_yes_no, validate_email, validate_list, validate_name,
    validate_required,
};
use crate::commands::musicians::musician_from_input;
use crate::ui::context::UiContext;
use crate::ui::views::bands::BandsView;
use crate::ui::views::musicians::{render_success, SearchResultsView};

const OPTIONS: &[(&str, &str)] = &[
    ("1", "Register a musician"),
    ("2", "Search musicians"),
    ("3", "Modify a musician"),
    ("4", "Assemble a band"),
    ("5", "Exit"),
];

pub fn run(roster: &RosterUseCase, ui: &UiContext) -> Result<()> {
    require_terminal(ui)?;
    let prompt = Prompter::new(ui);

    loop {
        match prompt.choose_key(OPTIONS)?.as_str() {
            "1" => register(roster, &prompt, ui)?,
            "2" => search(roster, &prompt, ui)?,
            "3" => modify(roster, &prompt, ui)?,
            "4" => assemble(roster, &prompt, ui)?,
            _ => break,
        }
    }
    Ok(())
}

fn register(roster: &RosterUseCase, prompt: &Prompter<'_>, ui: &UiContext) -> Result<()> {
    let name = prompt.ask("Name", validate_name)?;
    let email = prompt.ask("E-mail", validate_email)?;
    let genres = prompt.ask("Genres (comma separated)", |s| validate_list("genres", s))?;
    let instruments =
        prompt.ask("Instruments (comma separated)", |s| validate_list("instruments", s))?;

    let musician = musician_from_input(&name, &email, &genres, &instruments)?;
    if recover(roster.register(musician), ui)?.is_some() {
        print!("{}", render_success("Musician registered.", ui.color, ui.unicode));
    }
    Ok(())
}

fn search(roster: &RosterUseCase, prompt: &Prompter<'_>, ui: &UiContext) -> Result<()> {
    let exact = prompt.ask("Exact search? (s/n)", |s| parse_yes_no(s).map(|_| ()))?;
    let exact = parse_yes_no(&exact)?;

    let mut filters = SearchFilters::new();
    for (field, label) in [
        (SearchField::Name, "Name"),
        (SearchField::Email, "E-mail"),
        (SearchField::Genres, "Genre"),
        (SearchField::Instruments, "Instrument"),
    ] {
        let value = normalize(&prompt.ask_optional(label)?);
        if !value.is_empty() {
            filters.insert(field, value);
        }
    }

    if let Some(found) = recover(roster.search(MatchMode::from_exact(exact), &filters), ui)? {
        print!("\n{}", SearchResultsView::new(&found).render(ui.color, ui.unicode));
    }
    Ok(())
}

fn modify(roster: &RosterUseCase, prompt: &Prompter<'_>, ui: &UiContext) -> Result<()> {
    let email = prompt.ask("Musician e-mail", validate_email)?;

    println!("What do you want to modify?");
    let field = match prompt.choose_key(&[("1", "Genres"), ("2", "Instruments")])?.as_str() {
        "1" => ListField::Genres,
        _ => ListField::Instruments,
    };

    println!("Add or remove?");
    let op = match prompt.choose_key(&[("1", "Add"), ("2", "Remove")])?.as_str() {
        "1" => FieldOp::Add,
        _ => FieldOp::Remove,
    };

    let value = prompt.ask("Value", |s| validate_required("value", s))?;

    let result = roster.modify(&normalize(&email), op, &[(field, normalize(&value))]);
    if recover(result, ui)?.is_some() {
        print!("{}", render_success("Musician updated.", ui.color, ui.unicode));
    }
    Ok(())
}

fn assemble(roster: &RosterUseCase, prompt: &Prompter<'_>, ui: &UiContext) -> Result<()> {
    let genre = prompt.ask("Genre", |s| validate_required("genre", s))?;
    let count = prompt.ask("How many members?", |s| parse_member_count(s).map(|_| ()))?;
    let count = parse_member_count(&count)?;

    let mut instruments = Vec::new();
    for i in 1..=count {
        let instrument = prompt.ask(&format!("Instrument of member {i}"), |s| {
            validate_required("instrument", s)
        })?;
        instruments.push(normalize(&instrument));
    }

    let genre = normalize(&genre);
    if let Some(bands) = recover(roster.assemble_bands(&genre, &instruments), ui)? {
        print!("\n{}", BandsView::new(&genre, &bands).render(ui.color, ui.unicode));
    }
    Ok(())
}
