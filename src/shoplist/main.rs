use clap::Parser;
use colored::*;
use shoplist::api::{CmdMessage, ItemUpdate, MessageLevel, ShoplistApi};
use shoplist::error::Result;
use shoplist::model::Unit;
use std::io::{self, BufRead, Write};

mod args;
use args::{ReplCommand, ReplLine};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

enum Flow {
    Continue,
    Quit,
}

fn run() -> Result<()> {
    println!(
        "{}",
        "shoplist — type 'help' for commands, 'quit' to leave".dimmed()
    );

    let mut api = ShoplistApi::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        let line = line?;
        let tokens = split_line(&line);
        if tokens.is_empty() {
            continue;
        }

        let parsed = match ReplLine::try_parse_from(&tokens) {
            Ok(parsed) => parsed,
            Err(e) => {
                let _ = e.print();
                continue;
            }
        };

        match dispatch(&mut api, parsed.command) {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            // Failed operations are session messages, never fatal
            Err(e) => println!("{}", e.to_string().red()),
        }
    }

    Ok(())
}

fn dispatch(api: &mut ShoplistApi, command: ReplCommand) -> Result<Flow> {
    match command {
        ReplCommand::Add {
            description,
            amount,
            unit,
        } => {
            let result = api.add_item(description, amount, unit)?;
            print_messages(&result.messages);
            print_list(api)?;
        }
        ReplCommand::List { json } => {
            let result = api.list_items()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&result.listed_items)?);
            } else {
                print_lines(&result.lines);
            }
        }
        ReplCommand::Show { position } => {
            let result = api.show_item(position)?;
            for line in &result.lines {
                println!("{}", line);
            }
        }
        ReplCommand::Edit {
            position,
            description,
            amount,
            unit,
        } => {
            let update = ItemUpdate {
                description,
                amount,
                unit,
            };
            let result = api.update_item(position, update)?;
            print_messages(&result.messages);
            print_list(api)?;
        }
        ReplCommand::Remove { position } => {
            let result = api.delete_item(position)?;
            print_messages(&result.messages);
            print_list(api)?;
        }
        ReplCommand::Units => {
            for unit in Unit::ALL {
                println!("{}", unit.name());
            }
        }
        ReplCommand::Quit => return Ok(Flow::Quit),
    }

    Ok(Flow::Continue)
}

/// Reprint the whole list after a mutation, so the session always shows
/// the current state.
fn print_list(api: &ShoplistApi) -> Result<()> {
    let result = api.list_items()?;
    print_lines(&result.lines);
    Ok(())
}

fn print_lines(lines: &[String]) {
    if lines.is_empty() {
        println!("{}", "The list is empty.".dimmed());
        return;
    }
    for (i, line) in lines.iter().enumerate() {
        println!("{:>3}  {}", i + 1, line);
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// Split an input line into tokens, grouping double-quoted spans so
/// descriptions can contain spaces. A bare `""` produces an empty token.
fn split_line(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut quoted = false;

    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                quoted = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if quoted || !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                    quoted = false;
                }
            }
            c => current.push(c),
        }
    }
    if quoted || !current.is_empty() {
        tokens.push(current);
    }

    tokens
}
