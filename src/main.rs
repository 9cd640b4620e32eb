//! Terminal shim and entry point.
//!
//! A thin integration layer between the ladle library and the terminal: it
//! reads one command per line from stdin, translates it into a typed
//! [`Command`], lets the coordinator dispatch it, and prints the markup of
//! every region that currently has content.
//!
//! # Commands
//!
//! ```text
//! search <query>        run a search
//! open <id>             open a recipe by id
//! page <n>              jump to a page of the current results
//! servings <n>          rescale the open recipe
//! bookmark              toggle the bookmark on the open recipe
//! form                  open or close the submission form
//! upload k=v; k=v; ...  submit a recipe from form entries
//! delete                delete the open (user-submitted) recipe
//! help                  show this list
//! quit                  exit
//! ```
//!
//! An upload line uses the form's field names, e.g.:
//!
//! ```text
//! upload title=Toast; source_url=https://example.com; image_url=https://example.com/t.jpg; \
//!        publisher=Me; cooking_time=5; servings=1; ingredient-1=2,slice,bread
//! ```

use ladle::{initialize, observability, App, Command, Config};
use std::io::{self, BufRead, Write};

const HELP: &str = "\
Commands:
  search <query>         run a search
  open <id>              open a recipe by id
  page <n>               jump to a page of the current results
  servings <n>           rescale the open recipe
  bookmark               toggle the bookmark on the open recipe
  form                   open or close the submission form
  upload k=v; k=v; ...   submit a recipe from form entries
  delete                 delete the open (user-submitted) recipe
  quit                   exit";

#[tokio::main]
async fn main() {
    let config = Config::from_env();
    observability::init_tracing(&config);

    let mut app = match initialize(&config) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("ladle: {e}");
            std::process::exit(1);
        }
    };

    println!("ladle - type 'help' for commands");
    render(&app);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush().ok();

        let Some(Ok(line)) = lines.next() else { break };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "help" {
            println!("{HELP}");
            continue;
        }

        match parse_command(line) {
            Ok(command) => {
                if !app.dispatch(command).await {
                    break;
                }
                render(&app);
            }
            Err(message) => println!("{message}"),
        }
    }
}

/// Prints every region that currently has markup.
fn render(app: &App) {
    for (name, markup) in app.regions() {
        if !markup.is_empty() {
            println!("── {name} ──");
            print!("{markup}");
        }
    }
}

/// Translates an input line into a command.
fn parse_command(line: &str) -> Result<Command, String> {
    let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));
    let rest = rest.trim();

    match verb {
        "search" if !rest.is_empty() => Ok(Command::Search {
            query: rest.to_string(),
        }),
        "search" => Err("usage: search <query>".to_string()),
        "open" if !rest.is_empty() => Ok(Command::ShowRecipe {
            id: rest.to_string(),
        }),
        "open" => Err("usage: open <id>".to_string()),
        "page" => rest
            .parse()
            .map(|page| Command::Paginate { page })
            .map_err(|_| "usage: page <number>".to_string()),
        "servings" => rest
            .parse()
            .map(|servings| Command::SetServings { servings })
            .map_err(|_| "usage: servings <count>".to_string()),
        "bookmark" => Ok(Command::ToggleBookmark),
        "form" => Ok(Command::ToggleRecipeForm),
        "upload" => Ok(Command::Upload {
            entries: parse_entries(rest),
        }),
        "delete" => Ok(Command::Delete),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(format!("unknown command: {other} (try 'help')")),
    }
}

/// Splits `k=v; k=v; ...` into form entries.
fn parse_entries(raw: &str) -> Vec<(String, String)> {
    raw.split(';')
        .filter_map(|pair| {
            pair.split_once('=')
                .map(|(name, value)| (name.trim().to_string(), value.trim().to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbs_map_to_commands() {
        assert_eq!(
            parse_command("search pizza margherita"),
            Ok(Command::Search {
                query: "pizza margherita".to_string()
            })
        );
        assert_eq!(
            parse_command("open abc123"),
            Ok(Command::ShowRecipe {
                id: "abc123".to_string()
            })
        );
        assert_eq!(parse_command("page 3"), Ok(Command::Paginate { page: 3 }));
        assert_eq!(
            parse_command("servings 4"),
            Ok(Command::SetServings { servings: 4 })
        );
        assert_eq!(parse_command("bookmark"), Ok(Command::ToggleBookmark));
        assert_eq!(parse_command("quit"), Ok(Command::Quit));
    }

    #[test]
    fn malformed_numbers_report_usage() {
        assert!(parse_command("page three").is_err());
        assert!(parse_command("servings -1").is_err());
    }

    #[test]
    fn unknown_verbs_are_rejected() {
        assert!(parse_command("sear pizza").is_err());
    }

    #[test]
    fn upload_entries_split_on_semicolons() {
        let entries = parse_entries("title=Toast; servings=1; ingredient-1=2,slice,bread");
        assert_eq!(
            entries,
            vec![
                ("title".to_string(), "Toast".to_string()),
                ("servings".to_string(), "1".to_string()),
                ("ingredient-1".to_string(), "2,slice,bread".to_string()),
            ]
        );
    }
}
