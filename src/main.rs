use std::fs;
use std::io::{self, BufRead, Write};
use std::process;

use clap::{Arg, Command};
use colored::Colorize;

use snek::builtin::Registry;
use snek::evaluator::Evaluator;
use snek::scanner::Scanner;

fn main() {
  env_logger::init();

  let matches = Command::new("snek")
    .version(env!("CARGO_PKG_VERSION"))
    .about("A tiny Python-flavoured script scanner and evaluator")
    .arg(
      Arg::new("script")
        .help("Script file to run; omit to start a REPL")
        .value_parser(clap::value_parser!(String)),
    )
    .get_matches();

  let registry = Registry::with_builtins();

  match matches.get_one::<String>("script") {
    Some(path) => run_file(path, &registry),
    None => repl(&registry),
  }
}

fn run_file(path: &str, registry: &Registry) {
  let source = match fs::read_to_string(path) {
    Ok(source) => source,
    Err(err) => {
      eprintln!("{}", format!("{}: {}", path, err).red());
      process::exit(1);
    }
  };

  let mut evaluator = Evaluator::new(Scanner::new(path, &source), registry);

  loop {
    match evaluator.next_token() {
      Ok(token) if token.is_none() => break,
      Ok(_) => {}
      Err(err) => {
        eprintln!("{}", err.to_string().red());
        process::exit(1);
      }
    }
  }
}

fn repl(registry: &Registry) {
  let stdin = io::stdin();

  loop {
    print!("> ");
    io::stdout().flush().ok();

    let mut line = String::new();
    match stdin.lock().read_line(&mut line) {
      Ok(0) | Err(_) => break,
      Ok(_) => {}
    }

    let mut evaluator = Evaluator::new(Scanner::new("<stdin>", &line), registry);

    loop {
      match evaluator.next_token() {
        Ok(token) if token.is_none() => break,
        Ok(token) => println!("{}", token.value),
        Err(err) => {
          eprintln!("{}", err.to_string().red());
          break;
        }
      }
    }
  }
}
