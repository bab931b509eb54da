use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success, warning};
use std::process::Command;

fn default_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

fn run_editor(editor: &str, path: &std::path::Path) -> bool {
    matches!(Command::new(editor).arg(path).status(), Ok(s) if s.success())
}

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            info(format!("Current configuration ({}):\n", path.display()));
            println!("{}", cfg.to_yaml()?);
        }

        if *edit_config {
            let fallback = default_editor();
            let requested = editor.clone().unwrap_or_else(|| fallback.clone());

            if run_editor(&requested, &path) {
                success(format!(
                    "Configuration file edited successfully using '{requested}'"
                ));
            } else {
                warning(format!(
                    "Editor '{requested}' not available, falling back to '{fallback}'"
                ));
                if run_editor(&fallback, &path) {
                    success(format!(
                        "Configuration file edited successfully using fallback '{fallback}'"
                    ));
                } else {
                    error(format!(
                        "Failed to edit configuration file using fallback '{fallback}'"
                    ));
                }
            }
        }

        if !*print_config && !*edit_config {
            info("Nothing to do. Use `config --print` or `config --edit`.");
        }
    }

    Ok(())
}
