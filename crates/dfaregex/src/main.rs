use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use dfaregex::automaton::ToDot;
use dfaregex::{Regex, RegexBuilder, assemble, syntax};
use log::{LevelFilter, info};
use std::io::{self, BufRead, Write};

#[derive(Parser)]
#[command(version, about = "Match strings against DFA-compiled regular expressions")]
struct Cli {
    /// Keep the raw subset construction DFA instead of merging states
    #[arg(long)]
    no_minimize: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Match each input against the pattern
    Match {
        pattern: String,
        #[arg(required = true)]
        inputs: Vec<String>,
        /// Exit with failure unless every input matches
        #[arg(long)]
        all: bool,
    },
    /// Print the automaton of the pattern in Graphviz DOT format
    Dot {
        pattern: String,
        /// Print the epsilon-NFA instead of the DFA
        #[arg(long)]
        nfa: bool,
    },
    /// Read a pattern, then match lines from stdin against it
    Repl,
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn build(pattern: &str, minimize: bool) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .minimize(minimize)
        .build()
        .with_context(|| format!("invalid pattern {pattern:?}"))
}

fn verdict(input: &str, matched: bool) -> String {
    if matched {
        format!("{input} => Match!")
    } else {
        format!("{input} => Not match.")
    }
}

fn run_match(re: &Regex, inputs: &[String], all: bool) -> Result<()> {
    let mut rt = re.runtime();
    let mut failed = 0;
    for input in inputs {
        let matched = rt.matches(input);
        if !matched {
            failed += 1;
        }
        println!("{}", verdict(input, matched));
    }
    if all && failed > 0 {
        bail!("{failed} of {} inputs did not match", inputs.len());
    }
    Ok(())
}

fn run_dot(pattern: &str, minimize: bool, nfa: bool) -> Result<()> {
    let mut stdout = io::stdout().lock();
    if nfa {
        let node = syntax::parse(pattern).with_context(|| format!("invalid pattern {pattern:?}"))?;
        assemble(&node).write_dot(&mut stdout)?;
    } else {
        build(pattern, minimize)?.dfa().write_dot(&mut stdout)?;
    }
    stdout.flush()?;
    Ok(())
}

fn prompt(out: &mut impl Write, text: &str) -> Result<()> {
    write!(out, "{text}")?;
    out.flush().context("failed to flush stdout")
}

fn run_repl(minimize: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut out = io::stdout();

    let mut re: Option<Regex> = None;
    let mut need_pattern = true;
    loop {
        if need_pattern {
            prompt(&mut out, "input regex: ")?;
            let Some(line) = lines.next() else {
                return Ok(());
            };
            let line = line.context("failed to read pattern")?;
            match build(&line, minimize) {
                Ok(compiled) => {
                    info!("compiled {:?}", compiled.as_str());
                    re = Some(compiled);
                    need_pattern = false;
                }
                Err(err) => writeln!(out, "error: {err:#}")?,
            }
            continue;
        }

        prompt(&mut out, "input string to match: ")?;
        let Some(line) = lines.next() else {
            writeln!(out)?;
            return Ok(());
        };
        let line = line.context("failed to read input")?;
        match line.as_str() {
            "<EXIT>" => {
                writeln!(out, "Bye:)")?;
                return Ok(());
            }
            "<REGEX>" => need_pattern = true,
            input => {
                if let Some(re) = &re {
                    writeln!(out, "{}", verdict(input, re.is_match(input)))?;
                }
            }
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);
    let minimize = !cli.no_minimize;

    match cli.command {
        Command::Match {
            pattern,
            inputs,
            all,
        } => run_match(&build(&pattern, minimize)?, &inputs, all),
        Command::Dot { pattern, nfa } => run_dot(&pattern, minimize, nfa),
        Command::Repl => run_repl(minimize),
    }
}
