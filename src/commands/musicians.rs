use anyhow::Result;
use serde_json::json;

use roster::config::Config;
use roster::domain::value_objects::{normalize, split_list};
use roster::presentation::cli::{MusiciansCommand, SearchArgs};
use roster::presentation::create_roster_use_case;
use roster::{FieldOp, MatchMode, Musician, RosterError, SearchField, SearchFilters};

use crate::commands::input::{validate_email, validate_list, validate_name, validate_required};
use crate::ui::context::UiContext;
use crate::ui::views::bands::BandsView;
use crate::ui::views::musicians::{render_musician, render_success, SearchResultsView};

pub fn cmd_musicians(command: MusiciansCommand, config: &Config, ui: &UiContext) -> Result<()> {
    let roster = create_roster_use_case(config);

    match command {
        MusiciansCommand::Register {
            name,
            email,
            genres,
            instruments,
        } => {
            let musician = musician_from_input(&name, &email, &genres, &instruments)?;
            roster.register(musician.clone())?;
            if ui.json {
                crate::ui::json::emit(json!({
                    "event": "registered",
                    "musician": crate::ui::json::musician(&musician),
                }))?;
            } else {
                print!("{}", render_success("Musician registered.", ui.color, ui.unicode));
            }
        }
        MusiciansCommand::Search { any, filters } => {
            let mode = MatchMode::from_exact(!any);
            let found = roster.search(mode, &filters_from_args(&filters)?)?;
            if ui.json {
                crate::ui::json::emit(json!({
                    "event": "search",
                    "mode": if any { "any" } else { "exact" },
                    "musicians": crate::ui::json::musicians(&found),
                }))?;
            } else {
                print!("{}", SearchResultsView::new(&found).render(ui.color, ui.unicode));
            }
        }
        MusiciansCommand::Modify {
            email,
            add,
            remove: _,
            field,
            value,
        } => {
            validate_required("value", &value)?;
            let updated = roster.modify(
                &normalize(&email),
                FieldOp::from_add(add),
                &[(field, normalize(&value))],
            )?;
            if ui.json {
                crate::ui::json::emit(json!({
                    "event": "modified",
                    "musician": crate::ui::json::musician(&updated),
                }))?;
            } else {
                print!("{}", render_success("Musician updated.", ui.color, ui.unicode));
                print!("{}", render_musician(&updated));
            }
        }
        MusiciansCommand::Bands { genre, instruments } => {
            let genre = normalize(&genre);
            let instruments: Vec<String> = instruments.iter().map(|i| normalize(i)).collect();
            let bands = roster.assemble_bands(&genre, &instruments)?;
            if ui.json {
                crate::ui::json::emit(json!({
                    "event": "bands",
                    "genre": genre,
                    "instruments": instruments,
                    "bands": crate::ui::json::bands(&bands),
                }))?;
            } else {
                print!("{}", BandsView::new(&genre, &bands).render(ui.color, ui.unicode));
            }
        }
        MusiciansCommand::Menu => super::interactive::registry_menu::run(&roster, ui)?,
    }

    Ok(())
}

/// Validate raw console values and build a normalized record.
pub(crate) fn musician_from_input(
    name: &str,
    email: &str,
    genres: &str,
    instruments: &str,
) -> Result<Musician> {
    validate_name(name)?;
    validate_email(email)?;
    validate_list("genres", genres)?;
    validate_list("instruments", instruments)?;

    Ok(Musician::new(
        normalize(name),
        normalize(email),
        split_list(genres),
        split_list(instruments),
    ))
}

/// Blank flags are dropped; the rest are normalized like stored values.
/// Raw `--filter` pairs first, then the named flags, which win on overlap.
fn filters_from_args(args: &SearchArgs) -> Result<SearchFilters, RosterError> {
    let raw = args
        .raw
        .iter()
        .map(|(key, value)| (key, normalize(value)))
        .filter(|(_, value)| !value.is_empty());
    let mut filters = SearchFilters::parse(raw)?;
    let pairs = [
        (SearchField::Name, &args.name),
        (SearchField::Email, &args.email),
        (SearchField::Genres, &args.genre),
        (SearchField::Instruments, &args.instrument),
    ];
    for (field, value) in pairs {
        if let Some(value) = value.as_deref().map(normalize).filter(|v| !v.is_empty()) {
            filters.insert(field, value);
        }
    }
    Ok(filters)
}
