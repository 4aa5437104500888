use std::{
    borrow::Cow,
    fs,
    io::{self, BufRead, BufReader},
    path::PathBuf,
    process,
};

use clap::Parser;
use lox::{Engine, EngineOptions, Error, Value, printer::print_stmt, render_error, scanner};
use miette::{Diagnostic, Result};
use reedline::{
    DefaultCompleter, DescriptionMode, EditCommand, Emacs, ExampleHighlighter, IdeMenu, KeyCode,
    KeyModifiers, Keybindings, MenuBuilder, Prompt, PromptEditMode, PromptHistorySearch,
    PromptHistorySearchStatus, Reedline, ReedlineEvent, ReedlineMenu, Signal,
    default_emacs_keybindings,
};
use thiserror::Error;
use tracing::{debug, info};

/// Lox - a small dynamically-typed scripting language
#[derive(Parser, Debug)]
#[command(name = "lox")]
#[command(about = "Run a Lox script, or start an interactive prompt", long_about = None)]
struct Args {
    /// Print every token before running (for debugging)
    #[arg(long)]
    debug_tokens: bool,

    /// Print every parsed statement before running (for debugging)
    #[arg(long)]
    debug_parse: bool,

    /// Show errors with source snippets instead of one line each
    #[arg(long)]
    fancy: bool,

    /// Script to run (if not provided, reads from stdin)
    script: Option<PathBuf>,
}

#[derive(Debug, Error, Diagnostic)]
enum CliError {
    #[error("could not read script '{}'", .path.display())]
    #[diagnostic(code(lox::read_script), help("check that the file exists and is readable"))]
    ReadScript {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

const KEYWORDS: &[&str] = &[
    "and", "class", "else", "false", "for", "fun", "if", "nil", "or", "print", "return", "super",
    "this", "true", "var", "while",
];

/// Interpreter state shared by every line or file we run.
struct Session {
    engine: Engine,
    args: Args,
}

impl Session {
    fn new(args: Args, options: EngineOptions) -> Self {
        Self {
            engine: Engine::new(options),
            args,
        }
    }

    fn run(&mut self, source: &str) -> Result<Option<Value>, Error> {
        if self.args.debug_tokens {
            for token in scanner::scan(source).tokens {
                println!("{token}");
            }
        }

        let program = self.engine.compile(source)?;

        if self.args.debug_parse {
            for statement in program.valid_statements() {
                println!("{}", print_stmt(statement));
            }
        }

        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.engine.execute(&program, source, &mut out)
    }

    fn report(&self, error: &Error) {
        if self.args.fancy {
            render_error(error);
        } else {
            for diagnostic in error.diagnostics() {
                eprintln!("{diagnostic}");
            }
        }
    }

    /// Run a whole line and echo the value of a trailing expression.
    fn run_line(&mut self, line: &str) {
        match self.run(line) {
            Ok(Some(value)) => println!("{}", value.stringify()),
            Ok(None) => {}
            Err(error) => self.report(&error),
        }
    }
}

fn run_file(args: Args) -> Result<()> {
    let Some(path) = args.script.clone() else {
        return Ok(());
    };
    let source = fs::read_to_string(&path).map_err(|source| CliError::ReadScript {
        path: path.clone(),
        source,
    })?;
    info!(path = %path.display(), bytes = source.len(), "running script");

    let mut session = Session::new(args, EngineOptions::default());
    if let Err(error) = session.run(&source) {
        session.report(&error);
        process::exit(error.exit_code());
    }
    Ok(())
}

fn add_menu_keybindings(keybindings: &mut Keybindings) {
    keybindings.add_binding(
        KeyModifiers::NONE,
        KeyCode::Tab,
        ReedlineEvent::UntilFound(vec![
            ReedlineEvent::Menu("completion_menu".to_string()),
            ReedlineEvent::MenuNext,
        ]),
    );
    keybindings.add_binding(
        KeyModifiers::ALT,
        KeyCode::Enter,
        ReedlineEvent::Edit(vec![EditCommand::InsertNewline]),
    );
}

fn setup_reedline() -> Reedline {
    let keywords: Vec<String> = KEYWORDS.iter().map(|k| k.to_string()).collect();

    let completer = Box::new({
        let mut completions = DefaultCompleter::with_inclusions(&['_']);
        completions.insert(keywords.clone());
        completions
    });

    let ide_menu = IdeMenu::default()
        .with_name("completion_menu")
        .with_min_completion_width(0)
        .with_max_completion_width(50)
        .with_max_completion_height(u16::MAX)
        .with_padding(0)
        .with_cursor_offset(0)
        .with_description_mode(DescriptionMode::PreferRight)
        .with_min_description_width(0)
        .with_max_description_width(50)
        .with_description_offset(1)
        .with_correct_cursor_pos(false);

    let mut keybindings = default_emacs_keybindings();
    add_menu_keybindings(&mut keybindings);

    Reedline::create()
        .with_highlighter(Box::new(ExampleHighlighter::new(keywords)))
        .with_completer(completer)
        .with_menu(ReedlineMenu::EngineCompleter(Box::new(ide_menu)))
        .with_edit_mode(Box::new(Emacs::new(keybindings)))
}

/// Plain `> ` prompt.
struct LoxPrompt;

impl Prompt for LoxPrompt {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_indicator(&self, _edit_mode: PromptEditMode) -> Cow<'_, str> {
        Cow::Borrowed("> ")
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        Cow::Borrowed("... ")
    }

    fn render_prompt_history_search_indicator(
        &self,
        history_search: PromptHistorySearch,
    ) -> Cow<'_, str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "failing ",
        };
        Cow::Owned(format!(
            "({prefix}reverse-search: {}) ",
            history_search.term
        ))
    }
}

fn run_prompt(args: Args) -> Result<()> {
    let mut session = Session::new(args, EngineOptions::interactive());

    if atty::is(atty::Stream::Stdin) {
        // Interactive mode
        let mut line_editor = setup_reedline();

        loop {
            let signal = match line_editor.read_line(&LoxPrompt) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Reedline error: {e}");
                    return Ok(());
                }
            };

            match signal {
                Signal::Success(buffer) => session.run_line(&buffer),
                Signal::CtrlD | Signal::CtrlC => return Ok(()),
            }
        }
    } else {
        // Pipe mode
        let stdin = io::stdin();
        let reader = BufReader::new(stdin.lock());

        for line in reader.lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("Error reading line from stdin: {e}");
                    return Ok(());
                }
            };
            session.run_line(&line);
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use LOX_LOG or RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_env("LOX_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    debug!(?args, "starting");

    if args.script.is_some() {
        run_file(args)
    } else {
        run_prompt(args)
    }
}
