use {
    argh::FromArgs,
    culpa::{throw, throws},
    imagelex::{LexError, Token},
    liso::{liso, OutputOnly, Response},
    miette::{miette, ErrReport, Report},
    std::sync::OnceLock,
    tabular::{Row, Table},
    thiserror::Error,
};

const APP_NAME: &str = env!("CARGO_PKG_NAME");
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Dump the tokens of an image script, or scan lines typed at a prompt.
#[derive(FromArgs)]
struct Args {
    /// print version information
    #[argh(switch, short = 'v')]
    version: bool,

    /// script to tokenize; without one an interactive prompt is started
    #[argh(positional)]
    script: Vec<String>,
}

#[derive(Error)]
enum RuntimeError {
    #[error("Usage: {0}")]
    Usage(ErrReport),
    #[error("Could not read script: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Could not install report handler: {0}")]
    ReportHook(#[from] miette::InstallError),
    /// Lexical error already rendered against its source.
    #[error("{0}")]
    Lex(String),
}

// `main` reports a returned error through `Debug`; show the rendered form.
impl std::fmt::Debug for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

static OUT: OnceLock<OutputOnly> = OnceLock::new();

#[throws(RuntimeError)]
fn main() {
    let args: Args = argh::from_env();

    if args.version {
        println!("{} {}", APP_NAME, APP_VERSION);
        return;
    }

    let script = match args.script.as_slice() {
        [] => None,
        [script] => Some(script.as_str()),
        _ => throw!(RuntimeError::Usage(miette!("{} [script file]", APP_NAME))),
    };

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .unicode(true)
                .color(false) // liso would mangle escape codes
                .context_lines(3)
                .build(),
        )
    }))?;

    let io = liso::InputOutput::new();
    let _ = OUT.set(io.clone_output());

    match script {
        Some(script) => run_script(script)?,
        None => run_repl(io),
    }
}

fn run_repl(mut io: liso::InputOutput) {
    io.prompt(liso!(fg = green, bold, "> ", reset), true, false);
    loop {
        match io.read_blocking() {
            Response::Input(line) => {
                io.echoln(liso!(fg = green, dim, "> ", fg = none, line.as_str()));
                // A bad line is reported and the prompt carries on.
                match imagelex::tokenize(&line) {
                    Ok(tokens) => print(token_table(&tokens).to_string()),
                    Err(lex_error) => error(render(lex_error, &line)),
                }
            }
            Response::Discarded(line) => {
                io.echoln(liso!(bold + dim, "X ", -bold, line));
            }
            Response::Dead | Response::Quit | Response::Finish => break,
            _ => {}
        }
    }
}

#[throws(RuntimeError)]
fn run_script(script: &str) {
    let contents = std::fs::read_to_string(script)?;
    let tokens = imagelex::tokenize(&contents)
        .map_err(|lex_error| RuntimeError::Lex(render(lex_error, &contents)))?;
    print(token_table(&tokens).to_string());
}

/// One row per token: location, kind, lexeme.
fn token_table(tokens: &[Token]) -> Table {
    let mut table = Table::new("{:>}  {:<}  {:<}");
    for token in tokens {
        table.add_row(
            Row::new()
                .with_cell(token.location)
                .with_cell(token.kind)
                .with_cell(token.text()),
        );
    }
    table
}

fn render(lex_error: LexError, source: &str) -> String {
    let location = lex_error.location;
    let report = Report::new(lex_error).with_source_code(source.to_string());
    format!("[{}] {:?}", location, report)
}

fn print(text: impl AsRef<str>) {
    OUT.get()
        .expect("Must be set at start")
        .println(liso!(fg = blue, text.as_ref(), fg = none));
}

fn error(text: impl AsRef<str>) {
    OUT.get()
        .expect("Must be set at start")
        .println(liso!(fg = red, bold, text.as_ref(), fg = none));
}
