use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    process::ExitCode,
    time::Instant,
};

use clap::Parser;
use faq_matcher::{Decision, FaqConfig, Matcher};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

/// Terminal front-end for the FAQ matcher
#[derive(Parser, Debug)]
#[command(name = "faq-matcher", version, about = "Ask questions against a FAQ set")]
struct Cli {
    /// FAQ set in TOML (built-in college FAQ when omitted)
    #[arg(long)]
    faq: Option<PathBuf>,

    /// Similarity threshold in [0, 1], overrides the config file
    #[arg(short, long)]
    threshold: Option<f64>,

    /// Answer this question and exit (interactive prompt otherwise)
    #[arg(short, long)]
    query: Option<String>,

    /// Print the matched entry and its score to stderr
    #[arg(long)]
    explain: bool,
}

/// Presentation state, owned by the front-end only
#[derive(Debug, Default)]
struct Session {
    asked: usize,
    answered: usize,
    fallbacks: usize,
}

impl Session {
    fn record(&mut self, decision: &Decision) {
        self.asked += 1;
        if decision.is_answered() {
            self.answered += 1;
        } else {
            self.fallbacks += 1;
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let matcher = match load_matcher(&cli) {
        Ok(matcher) => matcher,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let mut session = Session::default();
    let result = if let Some(query) = cli.query.as_deref() {
        let stdout = io::stdout();
        run_single_query(&matcher, &mut session, query, &mut stdout.lock(), cli.explain)
    } else {
        let stdin = io::stdin();
        let stdout = io::stdout();
        run_interactive(&matcher, &mut session, stdin.lock(), &mut stdout.lock(), cli.explain)
    };
    info!(asked = session.asked, answered = session.answered, fallbacks = session.fallbacks, "session finished");

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("i/o error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn load_matcher(cli: &Cli) -> faq_matcher::Result<Matcher> {
    let mut config = match &cli.faq {
        Some(path) => FaqConfig::from_path(path)?,
        None => FaqConfig::default(),
    };
    if let Some(threshold) = cli.threshold {
        config = config.with_threshold(threshold);
    }
    let start = Instant::now();
    let matcher = config.into_matcher()?;
    debug!(
        entries = matcher.index().len(),
        vocab_size = matcher.index().vocab_size(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "index ready"
    );
    Ok(matcher)
}

fn run_single_query<W: Write>(
    matcher: &Matcher,
    session: &mut Session,
    query: &str,
    out: &mut W,
    explain: bool,
) -> io::Result<()> {
    let decision = matcher.decide(query);
    session.record(&decision);
    if explain {
        explain_decision(matcher, &decision);
    }
    writeln!(out, "{}", matcher.answer_for(decision))
}

fn run_interactive<R: BufRead, W: Write>(
    matcher: &Matcher,
    session: &mut Session,
    mut input: R,
    out: &mut W,
    explain: bool,
) -> io::Result<()> {
    let mut line = String::new();
    loop {
        write!(out, "Your Question: ")?;
        out.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("exit") || trimmed.eq_ignore_ascii_case("quit") {
            break;
        }
        run_single_query(matcher, session, trimmed, out, explain)?;
    }
    Ok(())
}

fn explain_decision(matcher: &Matcher, decision: &Decision) {
    match *decision {
        Decision::Answered { index, score } => {
            let question = matcher.index().entry(index).map(|e| e.question.as_str()).unwrap_or("");
            eprintln!("[match] #{index} {score:.4} {question}");
        }
        Decision::Fallback { best_score } => {
            eprintln!("[fallback] best {best_score:.4} < threshold {:.4}", matcher.config().threshold);
        }
    }
}
