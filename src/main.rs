use clap::{command, value_parser, Arg, ArgAction, ArgMatches};
use color_eyre::eyre::Result;
use log::*;
use std::path::PathBuf;
use theme_playground::config::PlaygroundConfig;
use theme_playground::logger::{setup_logger, LOG_FILE};
use theme_playground::playground::editor::editor_rows;
use theme_playground::playground::{
    apply_edits, search_editable_slots, search_variables, Action, PlaygroundState, ScriptedEdit,
};
use theme_playground::theme::{Density, ThemeFamily, ThemeRegistry, ThemeSlot};

fn cli() -> clap::Command {
    command!()
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("Config file, defaults to ~/.config/theme-playground/playground.yml"),
        )
        .arg(
            Arg::new("family")
                .long("family")
                .value_name("FAMILY")
                .help("Theme family to preview: default, dark or flat"),
        )
        .arg(
            Arg::new("dense")
                .long("dense")
                .action(ArgAction::SetTrue)
                .help("Preview the 8px grid variant"),
        )
        .arg(
            Arg::new("set")
                .long("set")
                .value_name("SLOT:VARIABLE=VALUE")
                .action(ArgAction::Append)
                .value_parser(value_parser!(ScriptedEdit))
                .help("Edit a theme variable, can be repeated"),
        )
        .arg(
            Arg::new("search")
                .long("search")
                .value_name("QUERY")
                .help("List theme slots and editable variables matching QUERY"),
        )
        .arg(
            Arg::new("export")
                .long("export")
                .action(ArgAction::SetTrue)
                .help("Print the previewed theme's differences from the default theme as JSON"),
        )
}

fn initial_state(config: &PlaygroundConfig, matches: &ArgMatches) -> Result<PlaygroundState> {
    let registry = ThemeRegistry::load(config.theme_dir.as_deref())?;
    let mut state = PlaygroundState::new(registry);

    let family = match matches.get_one::<String>("family") {
        Some(name) => name.parse::<ThemeFamily>().unwrap_or_else(|e| {
            warn!("{e}, previewing the default theme");
            ThemeFamily::Default
        }),
        None => config.family,
    };
    let density = if matches.get_flag("dense") {
        Density::Dense
    } else {
        config.density()
    };
    state = state
        .reduce(Action::SwitchFamily(family))
        .reduce(Action::SetDensity(density));

    state = apply_edits(state, &config.edits);
    let cli_edits: Vec<ScriptedEdit> = matches
        .get_many::<ScriptedEdit>("set")
        .map(|edits| edits.cloned().collect())
        .unwrap_or_default();
    Ok(apply_edits(state, &cli_edits))
}

fn print_theme(state: &PlaygroundState) {
    let slot = state.current_slot();
    println!("{} ({slot})", state.current_theme().name());
    for row in editor_rows(state.current_theme(), slot, state.errors()) {
        let marker = if row.invalid { " !" } else { "" };
        println!(
            "  {:<36} {:<22} {}{marker}",
            row.label,
            row.key,
            row.value.as_deref().unwrap_or("-")
        );
    }
    for slot in enum_iterator::all::<ThemeSlot>() {
        for variable in state.errors().invalid_variables(slot) {
            println!("  rejected edit: {slot}:{variable}");
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let matches = cli().get_matches();

    let config = PlaygroundConfig::load(matches.get_one::<PathBuf>("config").map(PathBuf::as_path))?;
    setup_logger(config.log_level(), LOG_FILE)?;

    let state = initial_state(&config, &matches)?;

    if let Some(query) = matches.get_one::<String>("search") {
        for item in search_editable_slots(query).await {
            println!("theme     {:<22} {}", item.slot.file_stem(), item.label);
        }
        for variable in search_variables(query).await {
            println!("variable  {:<22} {}", variable.key, variable.label);
        }
    } else {
        print_theme(&state);
    }

    if matches.get_flag("export") {
        let json = state.export_current_json()?;
        info!("Theme export: {json}");
        println!("{json}");
    }

    Ok(())
}
