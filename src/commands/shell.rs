//! Shell command - Interactive list view on stdin/stdout.

use tokio::io::{stdin, AsyncBufReadExt, BufReader};

use crate::config::Config;
use crate::errors::AppResult;
use crate::services::{ServiceContainer, Services};
use crate::ui::UserList;

const HELP: &str = "\
Commands:
  list                 re-fetch and show users
  first <name>         set the first name field
  last <name>          set the last name field
  add [<first> <last>] submit the form (optionally filling it first)
  toggle <n>           toggle developer flag of user n
  remove <n>           delete user n
  stories              show the story listing
  help                 show this help
  quit                 leave the shell";

/// A parsed shell input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    List,
    First(String),
    Last(String),
    Add(Option<(String, String)>),
    Toggle(usize),
    Remove(usize),
    Stories,
    Help,
    Quit,
}

impl ShellCommand {
    /// Parse one line of input. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };
        let rest: Vec<&str> = words.collect();

        let command = match (verb.to_ascii_lowercase().as_str(), rest.as_slice()) {
            ("list" | "ls", []) => ShellCommand::List,
            ("first", _) => ShellCommand::First(rest.join(" ")),
            ("last", _) => ShellCommand::Last(rest.join(" ")),
            ("add", []) => ShellCommand::Add(None),
            ("add", [first, last]) => {
                ShellCommand::Add(Some((first.to_string(), last.to_string())))
            }
            ("toggle", [n]) => ShellCommand::Toggle(parse_position(n)?),
            ("remove" | "rm", [n]) => ShellCommand::Remove(parse_position(n)?),
            ("stories", []) => ShellCommand::Stories,
            ("help" | "?", []) => ShellCommand::Help,
            ("quit" | "exit" | "q", []) => ShellCommand::Quit,
            (verb, _) => return Err(format!("Unrecognized input: {} (try 'help')", verb)),
        };

        Ok(Some(command))
    }
}

fn parse_position(value: &str) -> Result<usize, String> {
    value
        .parse::<usize>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| format!("Expected a list position, got '{}'", value))
}

/// Execute the shell command
pub async fn execute(config: Config) -> AppResult<()> {
    let services = Services::from_config(&config);
    let mut view = UserList::from_container(&services);

    println!("Loading users...");
    view.mount().await;
    print_list(&view);
    println!("Type 'help' for commands.");

    let mut lines = BufReader::new(stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match ShellCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                println!("{}", message);
                continue;
            }
        };

        match command {
            ShellCommand::Quit => break,
            ShellCommand::Help => println!("{}", HELP),
            ShellCommand::Stories => {
                let response = services.stories().list_stories().await?;
                for story in response.data.stories {
                    println!(
                        "  {} ({}) by {}: {} comments, {} points",
                        story.title, story.url, story.author, story.num_comments, story.points
                    );
                }
            }
            ShellCommand::First(name) => view.change_first_name(name),
            ShellCommand::Last(name) => view.change_last_name(name),
            ShellCommand::List => {
                view.reload().await;
                print_list(&view);
            }
            ShellCommand::Add(fields) => {
                if let Some((first, last)) = fields {
                    view.change_first_name(first);
                    view.change_last_name(last);
                }
                view.submit().await;
                print_list(&view);
            }
            ShellCommand::Toggle(position) => match view.user_at(position).map(|u| u.id) {
                Some(id) => {
                    view.toggle_developer(id).await;
                    print_list(&view);
                }
                None => println!("No user at position {}", position),
            },
            ShellCommand::Remove(position) => match view.user_at(position).map(|u| u.id) {
                Some(id) => {
                    view.remove(id).await;
                    print_list(&view);
                }
                None => println!("No user at position {}", position),
            },
        }
    }

    services.shutdown().await;
    Ok(())
}

fn print_list(view: &UserList) {
    if !view.is_loaded() {
        println!("(users not loaded)");
        return;
    }
    for (position, line) in view.render().iter().enumerate() {
        println!("{:>3}. {}", position + 1, line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(ShellCommand::parse("  "), Ok(None));
        assert_eq!(ShellCommand::parse("list"), Ok(Some(ShellCommand::List)));
        assert_eq!(
            ShellCommand::parse("first Mary Ann"),
            Ok(Some(ShellCommand::First("Mary Ann".to_string())))
        );
        assert_eq!(
            ShellCommand::parse("add Ann Lee"),
            Ok(Some(ShellCommand::Add(Some((
                "Ann".to_string(),
                "Lee".to_string()
            )))))
        );
        assert_eq!(ShellCommand::parse("TOGGLE 2"), Ok(Some(ShellCommand::Toggle(2))));
        assert_eq!(ShellCommand::parse("rm 1"), Ok(Some(ShellCommand::Remove(1))));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(ShellCommand::parse("toggle 0").is_err());
        assert!(ShellCommand::parse("remove two").is_err());
        assert!(ShellCommand::parse("add Ann").is_err());
        assert!(ShellCommand::parse("dance").is_err());
    }

    #[test]
    fn test_first_without_value_clears_field() {
        assert_eq!(
            ShellCommand::parse("first"),
            Ok(Some(ShellCommand::First(String::new())))
        );
    }
}
