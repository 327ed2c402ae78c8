use std::fmt;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use flag_core::model::{
    DEFAULT_QUESTIONS_PER_GAME, Difficulty, GameQuestion, GameSettings, MAX_QUESTIONS_PER_GAME,
    QUESTION_COUNT_OPTIONS, QuestionKind, SELECTABLE_REGIONS,
};
use flag_core::{Catalog, GamePhase};
use services::{Clock, GameError, GameLoopService, GameSession, StatsService};
use storage::repository::Storage;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

const HISTORY_LIMIT: u32 = 100;
const RECENT_LIMIT: u32 = 10;

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
    InvalidQuestions { raw: String },
    InvalidRegions { raw: String },
    InvalidDifficulty { raw: String },
    InvalidSeed { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::InvalidQuestions { raw } => write!(f, "invalid --questions value: {raw}"),
            ArgsError::InvalidRegions { raw } => write!(f, "invalid --regions value: {raw}"),
            ArgsError::InvalidDifficulty { raw } => {
                write!(f, "invalid --difficulty value: {raw}")
            }
            ArgsError::InvalidSeed { raw } => write!(f, "invalid --seed value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn parse_question_count(raw: &str) -> Option<u32> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|n| (1..=MAX_QUESTIONS_PER_GAME).contains(n))
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  flags play    [--db <sqlite_url>] [--questions <n>] [--regions <a,b,..>]");
    eprintln!("                [--difficulty <easy|medium|hard>] [--catalog <file.json>] [--seed <n>]");
    eprintln!("  flags regions [--catalog <file.json>]");
    eprintln!("  flags stats   [--db <sqlite_url>]");
    eprintln!();
    eprintln!("Defaults for play:");
    eprintln!("  --db sqlite:flags.sqlite3");
    eprintln!(
        "  --questions {DEFAULT_QUESTIONS_PER_GAME} (1..={MAX_QUESTIONS_PER_GAME}, common choices: {})",
        QUESTION_COUNT_OPTIONS.map(|n| n.to_string()).join(", ")
    );
    eprintln!("  all regions, all difficulties");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  FLAGS_DB_URL, FLAGS_QUESTIONS, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Play,
    Regions,
    Stats,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "play" => Some(Self::Play),
            "regions" => Some(Self::Regions),
            "stats" => Some(Self::Stats),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    db_url: String,
    questions: u32,
    regions: Option<Vec<String>>,
    difficulty: Option<Difficulty>,
    catalog: Option<PathBuf>,
    seed: Option<u64>,
}

impl Args {
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut db_url = env("FLAGS_DB_URL")
            .map_or_else(|| "sqlite://flags.sqlite3".into(), normalize_sqlite_url);
        let mut questions = env("FLAGS_QUESTIONS")
            .and_then(|value| parse_question_count(&value))
            .unwrap_or(DEFAULT_QUESTIONS_PER_GAME);
        let mut regions = None;
        let mut difficulty = None;
        let mut catalog = None;
        let mut seed = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--questions" => {
                    let value = require_value(args, "--questions")?;
                    questions = parse_question_count(&value)
                        .ok_or(ArgsError::InvalidQuestions { raw: value })?;
                }
                "--regions" => {
                    let value = require_value(args, "--regions")?;
                    let list: Vec<String> = value
                        .split(',')
                        .map(str::trim)
                        .filter(|r| !r.is_empty())
                        .map(str::to_string)
                        .collect();
                    if list.is_empty() {
                        return Err(ArgsError::InvalidRegions { raw: value });
                    }
                    regions = Some(list);
                }
                "--difficulty" => {
                    let value = require_value(args, "--difficulty")?;
                    let parsed = value
                        .parse::<Difficulty>()
                        .map_err(|_| ArgsError::InvalidDifficulty { raw: value.clone() })?;
                    difficulty = Some(parsed);
                }
                "--catalog" => {
                    catalog = Some(PathBuf::from(require_value(args, "--catalog")?));
                }
                "--seed" => {
                    let value = require_value(args, "--seed")?;
                    let parsed: u64 = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidSeed { raw: value.clone() })?;
                    seed = Some(parsed);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            db_url,
            questions,
            regions,
            difficulty,
            catalog,
            seed,
        })
    }

    fn game_settings(&self) -> Result<GameSettings, flag_core::Error> {
        let settings = match &self.regions {
            Some(regions) => GameSettings::new(regions, self.questions)?,
            None => GameSettings::all_regions(self.questions)?,
        };
        Ok(settings.with_difficulty(self.difficulty))
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

fn load_catalog(path: Option<&PathBuf>) -> Result<Catalog, Box<dyn std::error::Error>> {
    let Some(path) = path else {
        return Ok(Catalog::builtin());
    };
    let raw = std::fs::read_to_string(path)?;
    let catalog = Catalog::from_json(&raw).map_err(flag_core::Error::from)?;
    debug!(path = %path.display(), countries = catalog.len(), "custom catalog loaded");
    Ok(catalog)
}

/// Line-oriented prompt on stdin/stdout.
struct Terminal {
    lines: Lines<BufReader<Stdin>>,
}

impl Terminal {
    fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }

    /// `None` once stdin is closed.
    async fn ask(&mut self, prompt: &str) -> std::io::Result<Option<String>> {
        print!("{prompt}");
        std::io::stdout().flush()?;
        Ok(self
            .lines
            .next_line()
            .await?
            .map(|line| line.trim().to_string()))
    }
}

enum Choice {
    Option(usize),
    Quit,
}

fn parse_choice(input: &str, options: usize) -> Option<Choice> {
    if input.eq_ignore_ascii_case("q") {
        return Some(Choice::Quit);
    }
    let n: usize = input.parse().ok()?;
    (1..=options).contains(&n).then(|| Choice::Option(n - 1))
}

fn render_question(question: &GameQuestion, position: usize, total: usize) {
    println!();
    match question.kind() {
        QuestionKind::FlagToCountry => {
            println!(
                "[{position}/{total}] Which country does this flag belong to? {}",
                question.correct_answer().flag
            );
            for (i, option) in question.options().iter().enumerate() {
                println!("  {}. {}", i + 1, option.name);
            }
        }
        QuestionKind::CountryToFlag => {
            println!(
                "[{position}/{total}] Which flag belongs to {}?",
                question.correct_answer().name
            );
            for (i, option) in question.options().iter().enumerate() {
                println!("  {}. {}", i + 1, option.flag);
            }
        }
    }
}

/// Answers the current question and reports whether it was correct.
///
/// A failed save of the final result is retried once; if that fails too the
/// player is told and the game still ends normally.
async fn submit_answer(
    loop_svc: &GameLoopService,
    session: &mut GameSession,
    index: usize,
) -> Result<bool, GameError> {
    match loop_svc.answer_current(session, index).await {
        Ok(outcome) => Ok(outcome.record.is_correct),
        Err(GameError::Storage(err)) if session.is_complete() => {
            warn!(error = %err, "saving game result failed, retrying");
            if let Err(retry) = loop_svc.finalize_result(session).await {
                eprintln!("Could not save this game: {retry}");
            }
            Ok(session
                .engine()
                .current_question()
                .and_then(GameQuestion::is_correct)
                .unwrap_or(false))
        }
        Err(err) => Err(err),
    }
}

/// Plays one game to completion. Returns `false` if the player quit.
async fn play_game(
    loop_svc: &GameLoopService,
    session: &mut GameSession,
    terminal: &mut Terminal,
) -> Result<bool, Box<dyn std::error::Error>> {
    while session.engine().phase() == GamePhase::InProgress {
        let Some(question) = session.engine().current_question().cloned() else {
            break;
        };
        let position = session.engine().state().current_question_index() + 1;
        let total = session.engine().state().questions().len();
        render_question(&question, position, total);

        let choice = loop {
            let Some(input) = terminal.ask("Your answer (1-4, q to quit): ").await? else {
                return Ok(false);
            };
            match parse_choice(&input, question.options().len()) {
                Some(choice) => break choice,
                None => println!("Please enter a number between 1 and {}.", question.options().len()),
            }
        };
        let Choice::Option(index) = choice else {
            return Ok(false);
        };

        if submit_answer(loop_svc, session, index).await? {
            println!("Correct!");
        } else {
            println!("Wrong, it was {}.", question.correct_answer().name);
        }
        session.engine_mut().next_question();
    }

    let engine = session.engine();
    let result = engine.result()?;
    println!();
    println!(
        "Score: {}/{} ({:.0}%) in {}s",
        result.score(),
        result.total_questions(),
        result.percentage(),
        result.duration().num_seconds()
    );
    println!("{}", result.tier().message());
    Ok(true)
}

async fn run_play(parsed: &Args, storage: &Storage) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Arc::new(load_catalog(parsed.catalog.as_ref())?);
    let settings = parsed.game_settings()?;
    let loop_svc = GameLoopService::new(
        Clock::default_clock(),
        catalog,
        Arc::clone(&storage.results),
    )
    .with_seed(parsed.seed);

    let mut terminal = Terminal::new();
    let mut session = loop_svc.start_game(&settings);
    loop {
        if !play_game(&loop_svc, &mut session, &mut terminal).await? {
            println!("Game abandoned.");
            return Ok(());
        }
        let again = terminal.ask("Play again? [y/N] ").await?;
        if !matches!(again.as_deref(), Some("y" | "Y" | "yes")) {
            return Ok(());
        }
        loop_svc.restart_game(&mut session, &settings);
    }
}

fn run_regions(parsed: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = load_catalog(parsed.catalog.as_ref())?;
    let counts = catalog.region_counts();
    for region in SELECTABLE_REGIONS {
        println!("{region:<16} {:>3}", counts.get(region).copied().unwrap_or(0));
    }
    // Custom catalogs may use regions outside the standard list.
    for (region, count) in counts
        .iter()
        .filter(|(region, _)| !SELECTABLE_REGIONS.contains(&region.as_str()))
    {
        println!("{region:<16} {count:>3}");
    }
    println!("{:<16} {:>3}", "total", catalog.len());
    Ok(())
}

async fn run_stats(storage: &Storage) -> Result<(), Box<dyn std::error::Error>> {
    let stats_svc = StatsService::new(Arc::clone(&storage.results));
    let stats = stats_svc.stats(HISTORY_LIMIT).await?;
    if stats.total_games_played == 0 {
        println!("No games played yet.");
        return Ok(());
    }

    println!("Games played:   {}", stats.total_games_played);
    println!(
        "Correct:        {}/{} ({:.0}%)",
        stats.total_correct_answers,
        stats.total_questions,
        stats.accuracy()
    );
    println!("Average score:  {:.0}%", stats.average_score);
    println!("Best score:     {:.0}%", stats.best_score);
    if let Some(region) = &stats.favorite_region {
        println!("Favorite region: {region}");
    }

    println!();
    println!("Recent games:");
    for item in stats_svc.recent_results(RECENT_LIMIT).await? {
        let difficulty = item.difficulty.map_or("any", Difficulty::as_str);
        println!(
            "  {}  {:>2}/{:<2} {:>3.0}%  {:<6} {}",
            item.completed_at.format("%Y-%m-%d %H:%M"),
            item.score,
            item.total_questions,
            item.percentage,
            difficulty,
            item.selected_regions.join(", ")
        );
    }
    Ok(())
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: play when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Play,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Play,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let parsed = Args::parse(&mut argv.into_iter(), |key| std::env::var(key).ok()).map_err(
        |e| {
            eprintln!("{e}");
            print_usage();
            e
        },
    )?;

    if cmd == Command::Regions {
        return run_regions(&parsed);
    }

    // Open + migrate SQLite at startup. Keep this in the binary glue so core/services stay pure.
    prepare_sqlite_file(&parsed.db_url)?;
    let storage = Storage::sqlite(&parsed.db_url).await?;

    match cmd {
        Command::Play => run_play(&parsed, &storage).await,
        Command::Stats => run_stats(&storage).await,
        Command::Regions => Ok(()),
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use flag_core::model::GameResult;
    use flag_core::time::fixed_clock;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use storage::repository::{
        GameResultRepository, GameResultRow, InMemoryRepository, StorageError,
    };

    fn parse(args: &[&str]) -> Result<Args, ArgsError> {
        let mut iter = args.iter().map(|s| (*s).to_string());
        Args::parse(&mut iter, |_| None)
    }

    #[test]
    fn defaults_without_flags() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.questions, DEFAULT_QUESTIONS_PER_GAME);
        assert!(args.db_url.starts_with("sqlite://"));
        assert!(args.db_url.ends_with("flags.sqlite3"));
        assert_eq!(args.regions, None);
        assert_eq!(args.difficulty, None);
        assert_eq!(args.seed, None);
    }

    #[test]
    fn parses_game_flags() {
        let args = parse(&[
            "--questions",
            "10",
            "--regions",
            "Europe, Asia,",
            "--difficulty",
            "Hard",
            "--seed",
            "99",
            "--db",
            "sqlite::memory:",
        ])
        .unwrap();

        assert_eq!(args.questions, 10);
        assert_eq!(
            args.regions,
            Some(vec!["Europe".to_string(), "Asia".to_string()])
        );
        assert_eq!(args.difficulty, Some(Difficulty::Hard));
        assert_eq!(args.seed, Some(99));
        assert_eq!(args.db_url, "sqlite::memory:");

        let settings = args.game_settings().unwrap();
        assert_eq!(settings.number_of_questions(), 10);
        assert_eq!(settings.selected_regions(), ["Europe", "Asia"]);
        assert_eq!(settings.difficulty(), Some(Difficulty::Hard));
    }

    #[test]
    fn env_supplies_defaults() {
        let mut iter = std::iter::empty();
        let args = Args::parse(&mut iter, |key| match key {
            "FLAGS_DB_URL" => Some("sqlite:///tmp/flags-test.sqlite3".into()),
            "FLAGS_QUESTIONS" => Some("15".into()),
            _ => None,
        })
        .unwrap();
        assert_eq!(args.db_url, "sqlite:///tmp/flags-test.sqlite3");
        assert_eq!(args.questions, 15);
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(
            parse(&["--questions", "0"]),
            Err(ArgsError::InvalidQuestions { raw: "0".into() })
        );
        assert_eq!(
            parse(&["--difficulty", "brutal"]),
            Err(ArgsError::InvalidDifficulty {
                raw: "brutal".into()
            })
        );
        assert_eq!(
            parse(&["--regions", " , "]),
            Err(ArgsError::InvalidRegions { raw: " , ".into() })
        );
        assert_eq!(
            parse(&["--seed"]),
            Err(ArgsError::MissingValue { flag: "--seed" })
        );
        assert_eq!(
            parse(&["--verbose"]),
            Err(ArgsError::UnknownArg("--verbose".into()))
        );
    }

    #[test]
    fn question_count_is_capped() {
        assert_eq!(
            parse(&["--questions", "4294967295"]),
            Err(ArgsError::InvalidQuestions {
                raw: "4294967295".into()
            })
        );
        let max = MAX_QUESTIONS_PER_GAME.to_string();
        assert_eq!(
            parse(&["--questions", max.as_str()]).unwrap().questions,
            MAX_QUESTIONS_PER_GAME
        );

        let mut iter = std::iter::empty();
        let args = Args::parse(&mut iter, |key| {
            (key == "FLAGS_QUESTIONS").then(|| "1000000".to_string())
        })
        .unwrap();
        assert_eq!(args.questions, DEFAULT_QUESTIONS_PER_GAME);
    }

    /// Fails the first `failures` appends, then stores in memory.
    struct FailingRepository {
        failures: AtomicUsize,
        inner: InMemoryRepository,
    }

    impl FailingRepository {
        fn new(failures: usize) -> Self {
            Self {
                failures: AtomicUsize::new(failures),
                inner: InMemoryRepository::new(),
            }
        }
    }

    #[async_trait]
    impl GameResultRepository for FailingRepository {
        async fn append_result(&self, result: &GameResult) -> Result<i64, StorageError> {
            let left = self.failures.load(Ordering::SeqCst);
            if left > 0 {
                self.failures.store(left - 1, Ordering::SeqCst);
                return Err(StorageError::Connection("database is locked".into()));
            }
            self.inner.append_result(result).await
        }

        async fn get_result(&self, id: i64) -> Result<GameResult, StorageError> {
            self.inner.get_result(id).await
        }

        async fn list_results(&self, limit: u32) -> Result<Vec<GameResultRow>, StorageError> {
            self.inner.list_results(limit).await
        }
    }

    fn one_question_game(repo: Arc<FailingRepository>) -> (GameLoopService, GameSession) {
        let loop_svc = GameLoopService::new(fixed_clock(), Arc::new(Catalog::builtin()), repo)
            .with_seed(Some(3));
        let session = loop_svc.start_game(&GameSettings::all_regions(1).unwrap());
        (loop_svc, session)
    }

    fn correct_index(session: &GameSession) -> usize {
        session
            .engine()
            .current_question()
            .and_then(GameQuestion::correct_index)
            .unwrap()
    }

    #[tokio::test]
    async fn failed_save_is_retried_once() {
        let repo = Arc::new(FailingRepository::new(1));
        let (loop_svc, mut session) = one_question_game(Arc::clone(&repo));
        let index = correct_index(&session);

        assert!(submit_answer(&loop_svc, &mut session, index).await.unwrap());
        assert!(session.is_complete());
        assert!(session.result_id().is_some());
        assert_eq!(repo.inner.list_results(10).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn unsaved_game_still_finishes() {
        let repo = Arc::new(FailingRepository::new(2));
        let (loop_svc, mut session) = one_question_game(Arc::clone(&repo));
        let index = correct_index(&session);

        assert!(submit_answer(&loop_svc, &mut session, index).await.unwrap());
        assert!(session.is_complete());
        assert_eq!(session.result_id(), None);
        assert_eq!(session.engine().result().unwrap().score(), 1);
    }

    #[test]
    fn relative_sqlite_paths_become_absolute() {
        let url = normalize_sqlite_url("sqlite:data/flags.db".into());
        assert!(url.starts_with("sqlite:///"));
        assert!(url.ends_with("data/flags.db"));
    }

    #[test]
    fn choices_are_one_based() {
        assert!(matches!(parse_choice("1", 4), Some(Choice::Option(0))));
        assert!(matches!(parse_choice("4", 4), Some(Choice::Option(3))));
        assert!(matches!(parse_choice("Q", 4), Some(Choice::Quit)));
        assert!(parse_choice("0", 4).is_none());
        assert!(parse_choice("5", 4).is_none());
        assert!(parse_choice("abc", 4).is_none());
    }
}
