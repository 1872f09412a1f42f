use anyhow::{Context, Result, bail};
use clap::Parser;
use pocketcalc::config::Config;
use pocketcalc::screen::parse_keys;
use pocketcalc::ui::{TerminalPicker, render_display};
use pocketcalc::{CalculatorScreen, Language, Translations, logging};
use std::io::{self, BufRead};
use std::path::PathBuf;

/// A four-function pocket calculator.
///
/// Keys: 0-9, `.` or `,` decimal, + - * / operators, `=` evaluate,
/// `C` clear, `<` backspace, `~` toggle sign, `L` change language.
#[derive(Parser, Debug)]
#[command(name = "pocketcalc", version, about)]
struct Cli {
    /// Language to start in (ru, en, fr). Defaults to the host language.
    #[arg(short, long)]
    lang: Option<Language>,

    /// Path to a config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Keys to press, e.g. "12+3=". Starts an interactive session if omitted.
    keys: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref()).context("Failed to load config")?;
    logging::init(&config.log_level);

    let language = config.resolve_language(cli.lang)?;
    let translations = Translations::load(language).context("Failed to load translations")?;
    let mut screen = CalculatorScreen::new(translations);
    tracing::debug!(%language, "Calculator started");

    match cli.keys {
        Some(keys) => {
            let keys = parse_keys(&keys)?;
            let mut picker = TerminalPicker::new(io::stdin().lock(), io::stdout());
            screen.press_all(&keys, &mut picker);

            let view = screen.view();
            match view.number() {
                Some(number) => println!("{}", number),
                None => bail!("{}", view.display),
            }
        }
        None => run_interactive(&mut screen)?,
    }

    Ok(())
}

/// Read key sequences line by line until `q` or end of input.
fn run_interactive(screen: &mut CalculatorScreen) -> Result<()> {
    let mut input = io::stdin().lock();
    let mut stdout = io::stdout();

    println!("{}", render_display(&screen.view()));
    loop {
        let mut line = String::new();
        if input.read_line(&mut line).context("Failed to read keys")? == 0 {
            break;
        }

        let line = line.trim();
        if line == "q" {
            break;
        }

        match parse_keys(line) {
            Ok(keys) => {
                let mut picker = TerminalPicker::new(&mut input, &mut stdout);
                screen.press_all(&keys, &mut picker);
            }
            Err(e) => {
                tracing::warn!("{}", e);
                eprintln!("{}", e);
            }
        }

        println!("{}", render_display(&screen.view()));
    }

    Ok(())
}
