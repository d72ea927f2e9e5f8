//! Interactive menu: create / view / update / search / exit.
//!
//! Plain line-oriented stdin dialogue, outside raw mode. Every branch
//! reports its own failures and returns to the menu; only `Exit` (or EOF on
//! stdin) leaves the loop.

use anyhow::Result;
use chisel_config::Config;
use chisel_highlight::{TokenKind, highlight};
use crossterm::style::Stylize;
use std::{
    fs,
    io::{self, Write},
    path::Path,
};
use tracing::info;

use crate::session;

pub fn run(config: &Config) -> Result<()> {
    loop {
        println!("chisel - Basic Text Editor");
        println!("1. Create File");
        println!("2. View File");
        println!("3. Update File");
        println!("4. Search in File");
        println!("5. Exit");
        let Some(choice) = prompt("Enter your choice: ")? else {
            return Ok(());
        };
        match choice.as_str() {
            "1" => {
                if let Some(name) = prompt("Enter file name to create: ")? {
                    create_file(Path::new(&name));
                }
            }
            "2" => {
                if let Some(name) = prompt("Enter file name to view: ")? {
                    view_file(Path::new(&name));
                }
            }
            "3" => {
                if let Some(name) = prompt("Enter file name to update: ")? {
                    if let Err(e) = session::run(Path::new(&name), config) {
                        eprintln!("editor error: {e:#}");
                    }
                }
            }
            "4" => {
                if let Some(name) = prompt("Enter file name to search: ")? {
                    if let Some(word) = prompt("Enter the word to search: ")? {
                        search_in_file(Path::new(&name), &word);
                    }
                }
            }
            "5" => return Ok(()),
            _ => println!("Invalid choice. Try again."),
        }
    }
}

/// Print `msg` and read one trimmed line; `None` on EOF. Locks stdin per
/// call — the editor session reads stdin between prompts.
fn prompt(msg: &str) -> Result<Option<String>> {
    print!("{msg}");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn create_file(path: &Path) {
    match fs::File::create(path) {
        Ok(_) => {
            info!(target: "io", path = %path.display(), "file_created");
            println!("File created successfully.");
        }
        Err(_) => println!("Failed to create file."),
    }
}

fn view_file(path: &Path) {
    let Ok(content) = fs::read_to_string(path) else {
        println!("File not found.");
        return;
    };
    println!("Contents of {}:", path.display());
    for line in content.lines() {
        print_highlighted(line);
    }
}

/// Case-sensitive substring scan, printing 1-based line numbers.
fn search_in_file(path: &Path, word: &str) {
    let Ok(content) = fs::read_to_string(path) else {
        println!("File not found.");
        return;
    };
    let mut found = false;
    for (idx, line) in content.lines().enumerate() {
        if line.contains(word) {
            println!("Found '{word}' on line {}: {line}", idx + 1);
            found = true;
        }
    }
    if !found {
        println!("'{word}' not found in the file.");
    }
}

fn print_highlighted(line: &str) {
    for span in highlight(line) {
        match span.kind {
            TokenKind::Plain => print!("{}", span.text),
            TokenKind::Keyword => print!("{}", span.text.blue().bold()),
            TokenKind::StringLit => print!("{}", span.text.dark_green()),
            TokenKind::Comment => print!("{}", span.text.dark_cyan()),
            TokenKind::Number => print!("{}", span.text.dark_yellow()),
        }
    }
    println!();
}
