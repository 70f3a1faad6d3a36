use fontcat::{
    catalog::{self, Item},
    query::{self, EvalError, Symbol},
};

use clap::{Args, Parser, Subcommand};
use colored::*;
use human_panic::setup_panic;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use std::fs::File;
use std::io::{self, BufRead, BufReader};

#[derive(Parser, Debug)]
#[clap(about, version, propagate_version = true)]
struct Arguments {
    #[clap(subcommand)]
    command: Command,

    /// Print scanned symbols and trace evaluation
    #[clap(short, long)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    Check(Check),
    Match(Match),
    Filter(Filter),
}

/// Checks that a query is well-formed
#[derive(Args, Debug)]
struct Check {
    /// Query, words are joined with spaces
    #[clap(required = true)]
    query: Vec<String>,
}

/// Tests a query against a single searchable text
#[derive(Args, Debug)]
struct Match {
    /// Searchable text of the item, e.g. "Fira Sans : {sans},{ui}"
    #[clap(short, long)]
    text: String,

    /// Query, words are joined with spaces
    #[clap(required = true)]
    query: Vec<String>,
}

/// Prints catalog items matching a query
#[derive(Args, Debug)]
struct Filter {
    /// Read items from file instead of standard input
    #[clap(short, long)]
    file: Option<String>,

    /// Treat every line as searchable text instead of `name<TAB>tag,tag`
    #[clap(long)]
    raw: bool,

    /// Query, words are joined with spaces
    #[clap(required = true)]
    query: Vec<String>,
}

fn main() {
    setup_panic!();

    let args = Arguments::parse();
    init_tracing(args.debug);

    let mut eprint = ErrorPrinter::new();

    match args.command {
        Command::Check(check) => {
            let query = check.query.join(" ");
            if let Err(()) = check_query(&mut eprint, &query, args.debug) {
                std::process::exit(1);
            }

            println!("{}", "Query is well-formed".bold().green());
        },
        Command::Match(matching) => {
            let query = matching.query.join(" ");
            if let Err(()) = check_query(&mut eprint, &query, args.debug) {
                std::process::exit(1);
            }

            if query::matches(&matching.text, &query) {
                println!("{}", "Text matches the query".bold().green());
            } else {
                println!("{}", "Text does not match the query".bold().red());
                std::process::exit(1);
            }
        },
        Command::Filter(filter) => {
            let query = filter.query.join(" ");
            if let Err(()) = check_query(&mut eprint, &query, args.debug) {
                std::process::exit(1);
            }

            let lines = match read_lines(filter.file.as_deref()) {
                Ok(lines) => lines,
                Err(err) => {
                    eprint.error(&err.to_string());
                    std::process::exit(1);
                },
            };

            let mut matched = 0;
            if filter.raw {
                for line in lines.iter().filter(|line| query::matches(line, &query)) {
                    println!("{}", line);
                    matched += 1;
                }
            } else {
                let items = catalog::read_items(&lines);
                for item in catalog::filter(&items, &query) {
                    print_item(item);
                    matched += 1;
                }
            }

            if matched == 0 {
                eprintln!("{}", "No item matched this query".bold().blue());
            }
        },
    }
}

fn init_tracing(debug: bool) {
    let level = if debug { Level::TRACE } else { Level::WARN };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("{}", "unable to install log subscriber".yellow());
    }
}

fn check_query(eprint: &mut ErrorPrinter, query: &str, debug: bool) -> Result<(), ()> {
    eprint.set_src(query);

    let mut scanner = query::scan(query);
    let symbols: Vec<_> = scanner.by_ref().collect();
    if debug {
        println!("{}", "Symbols:".bold());
        symbols.iter().for_each(|s| println!("{:?}", s));
        println!();
    }

    if let Some(column) = scanner.pending_literal() {
        let len = query.chars().count() + 1 - column;
        eprint.warning_pos("tag literal is never closed and will be ignored", column, len);
    }

    if let Err(error) = query::evaluate("", query) {
        eprint.eval_error(&error, &symbols);
        return Err(());
    }

    Ok(())
}

fn read_lines(path: Option<&str>) -> io::Result<Vec<String>> {
    match path {
        Some(path) => BufReader::new(File::open(path)?).lines().collect(),
        None => io::stdin().lock().lines().collect(),
    }
}

fn print_item(item: &Item) {
    let mut line = vec![item.name.bold()];

    for (index, tag) in item.tags.iter().enumerate() {
        line.push(if index == 0 { " ".normal() } else { ", ".normal() });
        line.push(tag.blue());
    }

    line.iter().for_each(|part| print!("{}", part));
    println!();
}

const SRC_PREFIX: &str = "query:  ";

struct ErrorPrinter {
    first_error: bool,
    src: Option<String>,
}

impl ErrorPrinter {
    fn new() -> ErrorPrinter {
        ErrorPrinter {
            first_error: true,
            src: None,
        }
    }

    fn set_src(&mut self, src: &str) {
        self.src = Some(src.to_string());
    }

    fn check_line(&mut self) {
        if self.first_error {
            self.first_error = false;
        } else {
            eprintln!();
        }
    }

    fn error(&mut self, msg: &str) {
        self.first_error = false;

        eprintln!(
            "{}{}",
            "error: ".bold().red(),
            msg.bold(),
        );
    }

    fn show_pos(&self, column: usize, len: usize) {
        if let Some(src) = &self.src {
            eprintln!("{}{}", SRC_PREFIX.bold().dimmed(), src);

            let pos_offset = SRC_PREFIX.len() + column - 1;
            eprintln!("{}{}", " ".repeat(pos_offset), "^".repeat(len.max(1)).yellow());
        }
    }

    fn error_pos(&mut self, msg: &str, column: usize, len: usize) {
        self.check_line();
        self.show_pos(column, len);
        self.error(msg);
    }

    fn warning_pos(&mut self, msg: &str, column: usize, len: usize) {
        self.check_line();
        self.show_pos(column, len);

        eprintln!(
            "{}{}",
            "warning: ".bold().yellow(),
            msg.bold(),
        );
    }

    fn eval_error(&mut self, error: &EvalError, symbols: &[Symbol]) {
        let msg = error.to_string();
        match error.column() {
            Some(column) => self.error_pos(&msg, column, marker_len(symbols, column)),
            None => self.error(&msg),
        }
    }
}

/// Width of the caret under `column`: the whole symbol starting there, if any.
fn marker_len(symbols: &[Symbol], column: usize) -> usize {
    symbols
        .iter()
        .find(|symbol| symbol.get_column() == column)
        .map_or(1, |symbol| symbol.get_len())
}
