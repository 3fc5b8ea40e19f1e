use {
    crate::logging,
    clap::{Args, Parser, Subcommand},
    log::debug,
    repl::Input,
    std::io::{self, BufRead, Write},
};

const INTRO: &str = "Is it Prime?\n\
                     ------------\n\
                     Enter a whole number, and we'll tell you if it is a prime number or not. \
                     Enter q to quit.";
const FAREWELL: &str = "Goodbye.";

#[derive(Debug, Parser)]
#[command(about = "Tells you whether whole numbers are prime")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check numbers read from stdin, one per line, until `q` [default]
    Repl {
        #[command(flatten)]
        repl_options: ReplOptions,
    },
    /// Check each argument as if it had been entered on its own line
    Check {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<String>,
    },
}

#[derive(Debug, Default, Args)]
struct ReplOptions {
    /// Print an introduction before the first prompt and a farewell at the end
    #[arg(long)]
    greet: bool,
}

pub(crate) fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.debug);
    match cli.command {
        Some(Command::Check { values }) => check(&values, &mut io::stdout().lock())?,
        Some(Command::Repl { repl_options }) => repl(
            &repl_options,
            &mut io::stdin().lock(),
            &mut io::stdout().lock(),
        )?,
        None => repl(
            &ReplOptions::default(),
            &mut io::stdin().lock(),
            &mut io::stdout().lock(),
        )?,
    }
    Ok(())
}

fn repl(
    options: &ReplOptions,
    stdin: &mut impl BufRead,
    stdout: &mut impl Write,
) -> anyhow::Result<()> {
    if options.greet {
        debug!("greeting enabled");
        writeln!(stdout, "{INTRO}")?;
    }
    repl::run(stdin, stdout)?;
    if options.greet {
        writeln!(stdout, "{FAREWELL}")?;
        stdout.flush()?;
    }
    Ok(())
}

fn check(values: &[String], stdout: &mut impl Write) -> anyhow::Result<()> {
    for value in values {
        let input = Input::from(value.as_str());
        let Some(reply) = repl::reply(input) else {
            debug!("quit token among arguments, skipping the rest");
            break;
        };
        debug!("{input:?} -> {reply:?}");
        writeln!(stdout, "{reply}")?;
    }
    stdout.flush()?;
    Ok(())
}
