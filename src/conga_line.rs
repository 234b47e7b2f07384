use std::io;

use crate::conga_command::CongaCommand;
use linked_list::LinkedList;
use rustyline::error::ReadlineError;
use rustyline::Editor;

pub struct CongaLine {
    history_path: String,
    readline: Editor<()>,
    dancers: LinkedList<String>,
}

impl CongaLine {
    /// Starts a line of two dancers, with `first` leading.
    pub fn new(first: &str, second: &str) -> CongaLine {
        let mut dancers = LinkedList::new();
        dancers.append(first.to_string());
        dancers.append(second.to_string());

        let history_path = format!("{}/.conga_history", std::env::var("HOME").unwrap());
        let mut readline = Editor::<()>::new();
        // Attempt to load history from ~/.conga_history if it exists
        let _ = readline.load_history(&history_path);

        CongaLine {
            history_path,
            readline,
            dancers,
        }
    }

    /// Replaces the whole line with the dancers saved in `path`.
    pub fn load(&mut self, path: &str) -> io::Result<()> {
        self.dancers.read_from_path(path)
    }

    pub fn run(&mut self) {
        println!("Everybody conga!");
        self.print_line();
        println!("Type \"help\" for the list of commands.");
        loop {
            match self.get_next_command() {
                CongaCommand::End(name) => {
                    self.dancers.append(name);
                    self.print_line();
                }
                CongaCommand::Front(name) => {
                    self.dancers.prepend(name);
                    self.print_line();
                }
                CongaCommand::Behind(name, friend) => {
                    if self.dancers.insert_after(&friend, name) {
                        self.print_line();
                    } else {
                        println!("{} is not in the line.", friend);
                    }
                }
                CongaCommand::Before(name, friend) => {
                    if self.dancers.insert_before(&friend, name) {
                        self.print_line();
                    } else {
                        println!("{} is not in the line.", friend);
                    }
                }
                CongaCommand::Spot(name, index) => {
                    self.dancers.insert_at(name, index);
                    self.print_line();
                }
                CongaCommand::Leave(index) => match self.dancers.remove_at(index) {
                    Ok(name) => {
                        println!("{} leaves the line.", name);
                        self.print_line();
                    }
                    Err(err) => println!("Nobody can leave: {}.", err),
                },
                CongaCommand::Find(name) => match self.dancers.index_of(&name) {
                    Some(index) => println!("{} is at spot {}.", name, index),
                    None => println!("{} is not in the line.", name),
                },
                CongaCommand::Ends => {
                    match (self.dancers.first(), self.dancers.last()) {
                        (Ok(first), Ok(last)) => {
                            println!("{} leads and {} brings up the rear.", first, last)
                        }
                        _ => println!("The line is empty."),
                    }
                }
                CongaCommand::Line => self.print_line(),
                CongaCommand::Save(file) => match self.dancers.write_to_path(&file, ' ') {
                    Ok(()) => println!("Saved the line to {}.", file),
                    Err(err) => println!("Could not save to {}: {}", file, err),
                },
                CongaCommand::Load(file) => match self.load(&file) {
                    Ok(()) => self.print_line(),
                    Err(err) => println!("Could not load from {}: {}", file, err),
                },
                CongaCommand::Help => print_help(),
                CongaCommand::Quit => return,
            }
        }
    }

    fn print_line(&self) {
        if self.dancers.is_empty() {
            println!("The conga line is empty.");
        } else {
            println!("The line ({} dancers):{}", self.dancers.size(), self.dancers);
        }
    }

    /// This function prompts the user to enter a command, and continues re-prompting until the user
    /// enters a valid command. It uses CongaCommand::from_tokens to do the command parsing.
    fn get_next_command(&mut self) -> CongaCommand {
        loop {
            // Print prompt and get next line of user input
            match self.readline.readline("(conga) ") {
                Err(ReadlineError::Interrupted) => {
                    // User pressed ctrl+c. We're going to ignore it
                    println!("Type \"quit\" to exit");
                }
                Err(ReadlineError::Eof) => {
                    // User pressed ctrl+d, which is the equivalent of "quit" for our purposes
                    return CongaCommand::Quit;
                }
                Err(err) => {
                    panic!("Unexpected I/O error: {:?}", err);
                }
                Ok(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    self.readline.add_history_entry(line.as_str());
                    if let Err(err) = self.readline.save_history(&self.history_path) {
                        println!(
                            "Warning: failed to save history file at {}: {}",
                            self.history_path, err
                        );
                    }
                    let tokens: Vec<&str> = line.split_whitespace().collect();
                    if let Some(cmd) = CongaCommand::from_tokens(&tokens) {
                        return cmd;
                    } else {
                        println!("Unrecognized command.");
                    }
                }
            }
        }
    }
}

fn print_help() {
    println!("end NAME            NAME joins at the back of the line");
    println!("front NAME          NAME takes over the lead");
    println!("behind NAME FRIEND  NAME joins right behind FRIEND");
    println!("before NAME FRIEND  NAME cuts in right in front of FRIEND");
    println!("spot NAME INDEX     NAME grabs spot INDEX (clamped to the ends)");
    println!("leave INDEX         whoever holds spot INDEX leaves (clamped)");
    println!("find NAME           report NAME's spot, counting from 0");
    println!("ends                report who leads and who is last");
    println!("line                print the whole line");
    println!("save FILE           write the line to FILE");
    println!("load FILE           replace the line with FILE's contents");
    println!("help                print this message");
    println!("quit                exit");
}
