use crate::cli::core::{config_snapshot, CliMode, CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::config::Config;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "Show or change preferences",
        "config [show | set <key> <value>]",
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] if context.mode() == CliMode::Interactive => {
            show(context);
            edit_interactive(context)
        }
        [] => {
            show(context);
            Ok(())
        }
        [action] if action.eq_ignore_ascii_case("show") => {
            show(context);
            Ok(())
        }
        [action, key, value @ ..] if action.eq_ignore_ascii_case("set") => {
            set(context, key, &value.join(" "))
        }
        _ => Err(CommandError::InvalidArguments(
            "usage: config [show | set <key> <value>]".into(),
        )),
    }
}

fn show(context: &ShellContext) {
    output::section("Preferences");
    for (key, value) in config_snapshot(&context.config) {
        io::print_info(format!("  {:<18} {}", key, value));
    }
    io::print_info(format!(
        "  Stored at {}",
        context.config_manager.config_path().display()
    ));
}

fn edit_interactive(context: &mut ShellContext) -> CommandResult {
    let Some(choice) = io::select_index(context.theme(), "Preference to change", &Config::KEYS)?
    else {
        return Ok(());
    };
    let key = Config::KEYS[choice];
    let current = context.config.display_value(key).unwrap_or_default();
    let value = io::prompt_text_with_initial(context.theme(), key, &current)?;
    set(context, key, &value)
}

fn set(context: &mut ShellContext, key: &str, value: &str) -> CommandResult {
    let mut updated = context.config.clone();
    updated
        .set(key, value)
        .map_err(CommandError::InvalidArguments)?;
    context.config = updated;
    context.persist_config()?;
    io::print_success(format!("Preference `{}` updated.", key.to_ascii_lowercase()));
    Ok(())
}
