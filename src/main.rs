// Window and pixel-buffer plumbing follows the pixels conway example
//https://github.com/parasyte/pixels/tree/c2454b01abc11c007d4b9de8525195af942fef0d/examples/conway

use std::io;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

mod auxiliary;
mod projects;
mod traits_and_structs;

use projects::life::config::LifeConfig;
use projects::life::{run_life, Life, Start};
use traits_and_structs::automata_trait::CellAutomata;

fn read_line() -> Result<String> {
    let mut text = String::new();
    io::stdin()
        .read_line(&mut text)
        .context("Failed to read line")?;
    Ok(text.trim().to_string())
}

/// Keep asking until the answer parses and lies in `range`. An empty answer
/// keeps `default`.
fn prompt<T>(question: &str, default: T, range: std::ops::RangeInclusive<T>) -> Result<T>
where
    T: FromStr + PartialOrd + std::fmt::Display + Copy,
{
    loop {
        println!("{} [{}]", question, default);
        let text = read_line()?;
        if text.is_empty() {
            return Ok(default);
        }
        match text.parse() {
            Ok(n) if range.contains(&n) => return Ok(n),
            _ => println!(
                "\nERROR: expected a number from {} to {}.",
                range.start(),
                range.end()
            ),
        }
    }
}

fn custom_config() -> Result<LifeConfig> {
    let defaults = LifeConfig::default();
    let cell_size = prompt("Cell size in pixels", defaults.cell_size, 1..=200)?;
    let margin = prompt("Gap between cells in pixels", defaults.margin, 0..=50)?;
    let delay = prompt(
        "Delay between generations in milliseconds",
        defaults.step_delay.as_millis() as u64,
        0..=5_000,
    )?;
    Ok(LifeConfig {
        cell_size,
        margin,
        step_delay: Duration::from_millis(delay),
        ..defaults
    })
}

fn select_board(input: &str) -> Result<()> {
    match input {
        "1" => run_life(LifeConfig::default(), Start::Blank),
        "2" => run_life(LifeConfig::default(), Start::Soup),
        "3" => run_life(custom_config()?, Start::Blank),
        _ => {
            println!("unknown board");
            Ok(())
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    println!("\nWelcome to the Game of Life!\nPress 'q' to quit this screen.");
    println!("\n{}", Life::describe());
    loop {
        println!("\n\nHow would you like to start?\n\n1) Blank board\n2) Random soup\n3) Blank board, custom cell size and speed");
        let val = read_line()?;

        if val == "q" || val == "quit" {
            break;
        }

        if val.is_empty() || !val.chars().all(char::is_numeric) {
            println!("\nERROR: Must input an integer or a valid command.");
            continue;
        }
        println!("\n\nControls for the board:\nLEFT CLICK: bring a cell to life\nRIGHT CLICK: kill a cell\nSPACE: run/pause\nC: clear board\nR: randomize board\nESC: close screen");
        match select_board(&val) {
            Ok(_) => continue,
            Err(e) => println!("{:#}", e),
        }
    }
    Ok(())
}
