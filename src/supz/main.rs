use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::io::{self, Write};
use std::path::PathBuf;
use supz::api::{CmdMessage, MessageLevel, SupzApi};
use supz::config::SupzConfig;
use supz::error::{Result, SupzError};
use supz::media::FileMedia;
use supz::model::{Draft, Field, Supplier};
use unicode_width::UnicodeWidthStr;

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: SupzApi<FileMedia>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }
    let mut ctx = init_context(&cli)?;
    session(&mut ctx)
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config = match ProjectDirs::from("com", "supz", "supz") {
        Some(dirs) => SupzConfig::load(dirs.config_dir()).unwrap_or_default(),
        None => SupzConfig::default(),
    };
    let placeholder = cli
        .placeholder
        .clone()
        .unwrap_or(config.placeholder_image);

    let gallery = match &cli.gallery {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    };

    let api = SupzApi::new(FileMedia::new(gallery), placeholder);
    Ok(AppContext { api })
}

enum Flow {
    Continue,
    Quit,
}

/// The session loop: one line, one event. Command failures are advisories;
/// the loop only ends on quit or end of input.
fn session(ctx: &mut AppContext) -> Result<()> {
    println!("{}", "supz — supplier registry".bold());
    println!("{}", "Type 'help' for commands.".dimmed());

    let mut line = String::new();
    loop {
        print!("supz> ");
        io::stdout().flush()?;

        line.clear();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let (verb, rest) = match input.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (input, ""),
        };

        match dispatch(ctx, verb, rest) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(e) => print_advisory(&e),
        }
    }
    Ok(())
}

fn dispatch(ctx: &mut AppContext, verb: &str, rest: &str) -> Result<Flow> {
    match verb {
        "name" | "address" | "contact" | "category" => {
            let field: Field = verb.parse()?;
            ctx.api.set_field(field, rest.to_string())?;
            println!("{}", format!("{} = {}", field, rest).dimmed());
        }
        "image" => {
            let result = ctx.api.request_image()?;
            print_messages(&result.messages);
        }
        "clear-image" => {
            let result = ctx.api.clear_image()?;
            print_messages(&result.messages);
        }
        "draft" | "show" => {
            let result = ctx.api.show_draft()?;
            if let Some(draft) = &result.draft {
                print_draft(draft);
            }
        }
        "add" => {
            let result = ctx.api.commit()?;
            print_messages(&result.messages);
        }
        "list" | "ls" => {
            let term = if rest.is_empty() { None } else { Some(rest) };
            let result = ctx.api.visible_suppliers(term)?;
            print_suppliers(&result.listed);
        }
        "find" | "search" => {
            let result = ctx.api.visible_suppliers(Some(rest))?;
            print_suppliers(&result.listed);
        }
        "help" | "?" => print_help(),
        "quit" | "exit" | "q" => return Ok(Flow::Quit),
        other => {
            return Err(SupzError::Api(format!(
                "unknown command: {} (try 'help')",
                other
            )))
        }
    }
    Ok(Flow::Continue)
}

/// Validation and permission failures are expected user-facing outcomes,
/// not faults; they render as warnings.
fn print_advisory(err: &SupzError) {
    match err {
        SupzError::MissingField(_) | SupzError::PermissionDenied => {
            println!("{}", err.to_string().yellow());
        }
        _ => println!("{}", err.to_string().red()),
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

fn print_draft(draft: &Draft) {
    for field in Field::ALL {
        let value = draft.get(field);
        if value.is_empty() {
            println!("  {:<10} {}", field.as_str(), "(required)".dimmed());
        } else {
            println!("  {:<10} {}", field.as_str(), value);
        }
    }
    match &draft.image {
        Some(uri) => println!("  {:<10} {}", "image", uri),
        None => println!("  {:<10} {}", "image", "(placeholder)".dimmed()),
    }
}

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;

fn print_suppliers(suppliers: &[Supplier]) {
    if suppliers.is_empty() {
        println!("No suppliers found.");
        return;
    }

    for (i, supplier) in suppliers.iter().enumerate() {
        let idx_str = format!("{:>3}. ", i + 1);
        let head = format!("{} [{}]", supplier.name, supplier.category);

        let available = LINE_WIDTH.saturating_sub(idx_str.width() + TIME_WIDTH);
        let head_display = truncate_to_width(&head, available);
        let padding = available.saturating_sub(head_display.width());
        let time_ago = format_time_ago(supplier.created_at);

        println!(
            "{}{}{}{}",
            idx_str,
            head_display.bold(),
            " ".repeat(padding),
            time_ago.dimmed()
        );
        println!("     {} · {}", supplier.address, supplier.contact);
        println!("     {}", format!("image: {}", supplier.image).dimmed());
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: chrono::DateTime<chrono::Utc>) -> String {
    let now = chrono::Utc::now();
    let duration = now.signed_duration_since(timestamp);

    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

fn print_help() {
    println!("Commands:");
    println!("  name <value>       set the draft's supplier name");
    println!("  address <value>    set the draft's address");
    println!("  contact <value>    set the draft's contact");
    println!("  category <value>   set the draft's category");
    println!("  image              pick an image from the gallery directory");
    println!("  clear-image        unset the draft's image");
    println!("  draft              show the in-progress draft");
    println!("  add                validate the draft and add it to the registry");
    println!("  list [term]        list suppliers, optionally filtered by name/category");
    println!("  find <term>        same as 'list <term>'");
    println!("  quit               leave the session");
}
