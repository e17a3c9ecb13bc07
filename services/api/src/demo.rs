use crate::infra::load_catalog;
use crate::printable::render_footprint_report;
use chrono::{Local, NaiveDate};
use clap::Args;
use footprint_quiz::config::AppConfig;
use footprint_quiz::error::AppError;
use footprint_quiz::quiz::{
    AnswerSet, CalculationResult, FootprintReport, FootprintScorer, FootprintService,
    QuestionCatalog, QuizSession, ScoreRequest, ScoreResponse, StudentProfile,
};
use footprint_quiz::quiz::report::REFLECTIVE_QUESTIONS;
use footprint_quiz::telemetry;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogArgs {
    /// CSV catalog to list instead of the built-in questions
    #[arg(long)]
    pub(crate) catalog_csv: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ScoreArgs {
    /// Answer given as question_id=weight; repeat for each question
    #[arg(long, value_parser = crate::infra::parse_answer)]
    pub(crate) answer: Vec<(String, f64)>,
    /// JSON object mapping question ids to weights
    #[arg(long)]
    pub(crate) answers_json: Option<PathBuf>,
    /// Year the overshoot date falls in (defaults to the current year)
    #[arg(long)]
    pub(crate) year: Option<i32>,
    /// Print the full result as JSON instead of the text report
    #[arg(long)]
    pub(crate) json: bool,
    /// CSV catalog to score against instead of the built-in questions
    #[arg(long)]
    pub(crate) catalog_csv: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct QuizArgs {
    /// Year the overshoot date falls in (defaults to the current year)
    #[arg(long)]
    pub(crate) year: Option<i32>,
    /// CSV catalog to ask instead of the built-in questions
    #[arg(long)]
    pub(crate) catalog_csv: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Year the overshoot date falls in (defaults to the current year)
    #[arg(long)]
    pub(crate) year: Option<i32>,
    /// Student name printed on the report
    #[arg(long, default_value = "Estudiante de ejemplo")]
    pub(crate) name: String,
    /// Student code printed on the report
    #[arg(long, default_value = "2025-0001")]
    pub(crate) student_code: String,
}

/// Loads configuration, installs stderr logging and builds the scoring service.
fn prepare(catalog_csv: Option<PathBuf>) -> Result<FootprintService, AppError> {
    let mut config = AppConfig::load()?;
    if let Some(path) = catalog_csv {
        config.footprint.catalog_csv = Some(path);
    }

    telemetry::init_cli(&config.telemetry)?;

    let catalog = load_catalog(config.footprint.catalog_csv.as_deref())?;
    Ok(FootprintService::new(catalog, config.footprint.scoring))
}

pub(crate) fn run_catalog(args: CatalogArgs) -> Result<(), AppError> {
    let service = prepare(args.catalog_csv)?;
    let stdout = io::stdout();
    render_catalog(service.catalog(), &mut stdout.lock())?;
    Ok(())
}

fn render_catalog<W: Write>(catalog: &QuestionCatalog, output: &mut W) -> io::Result<()> {
    writeln!(output, "Cuestionario de huella ecológica ({} preguntas)", catalog.len())?;

    let mut current_category = None;
    for question in catalog.questions() {
        if current_category != Some(question.category) {
            current_category = Some(question.category);
            writeln!(
                output,
                "\n{} - {}",
                question.category.label(),
                question.category.description()
            )?;
        }

        writeln!(output, "  [{}] {}", question.id, question.prompt)?;
        for option in &question.options {
            writeln!(output, "      {:>5.2}  {}", option.weight, option.label)?;
        }
    }

    Ok(())
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        answer,
        answers_json,
        year,
        json,
        catalog_csv,
    } = args;

    let service = prepare(catalog_csv)?;
    let answers = collect_answers(answers_json, answer)?;
    debug!(answered = answers.len(), "collected answers");

    let response = service.score(ScoreRequest {
        answers,
        year,
        ..ScoreRequest::default()
    })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print!("{}", render_footprint_report(&response, None, today())?);
    }

    Ok(())
}

/// Reads the JSON answer file first so flags override individual entries.
fn collect_answers(
    answers_json: Option<PathBuf>,
    flags: Vec<(String, f64)>,
) -> Result<AnswerSet, AppError> {
    let mut answers = match answers_json {
        Some(path) => {
            let reader = BufReader::new(File::open(&path)?);
            serde_json::from_reader::<_, AnswerSet>(reader).map_err(|err| {
                AppError::Input(format!(
                    "failed to read answers from {}: {err}",
                    path.display()
                ))
            })?
        }
        None => AnswerSet::new(),
    };

    for (question_id, weight) in flags {
        answers.record(question_id, weight);
    }

    Ok(answers)
}

pub(crate) fn run_quiz(args: QuizArgs) -> Result<(), AppError> {
    let service = prepare(args.catalog_csv)?;
    let scorer = service.scorer(args.year);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    let Some(result) = run_quiz_session(service.catalog(), &scorer, &mut input, &mut output)?
    else {
        writeln!(output, "\nCuestionario cancelado.")?;
        return Ok(());
    };

    info!(total_gha = result.total_gha, "quiz completed");
    let reflective_answers = ask_reflective_questions(&mut input, &mut output)?;
    let report = FootprintReport::new(&result, scorer.config().biocapacity_per_person);
    let response = ScoreResponse {
        result,
        report,
        advice_request: None,
        reflective_answers,
    };
    write!(
        output,
        "\n{}",
        render_footprint_report(&response, None, today())?
    )?;
    Ok(())
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Collects free-text reflections; an empty line leaves a question unanswered.
fn ask_reflective_questions<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<BTreeMap<usize, String>> {
    writeln!(
        output,
        "\nCuestionario reflexivo (deja la línea vacía para omitir)"
    )?;

    let mut answers = BTreeMap::new();
    let mut line = String::new();
    for (index, question) in REFLECTIVE_QUESTIONS.iter().enumerate() {
        writeln!(output, "\n{}. {}", index + 1, question)?;
        write!(output, "> ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let answer = line.trim();
        if !answer.is_empty() {
            answers.insert(index, answer.to_string());
        }
    }

    Ok(answers)
}

/// Asks every question in order. Returns `None` when the user quits or input ends.
fn run_quiz_session<R: BufRead, W: Write>(
    catalog: &QuestionCatalog,
    scorer: &FootprintScorer,
    input: &mut R,
    output: &mut W,
) -> Result<Option<CalculationResult>, AppError> {
    let mut session = QuizSession::new(catalog);
    let mut line = String::new();

    while let Some(question) = session.current() {
        let chosen = session.answers().get(&question.id);

        writeln!(
            output,
            "\n[{}/{}] {}: {}",
            session.position() + 1,
            catalog.len(),
            question.category.label(),
            question.prompt
        )?;
        for (index, option) in question.options.iter().enumerate() {
            let marker = if chosen == Some(option.weight) { " *" } else { "" };
            writeln!(output, "  {}) {}{}", index + 1, option.label, marker)?;
        }
        write!(
            output,
            "Opción (1-{}, b = atrás, q = salir): ",
            question.options.len()
        )?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        match line.trim() {
            "q" | "Q" => return Ok(None),
            "b" | "B" => {
                if !session.previous() {
                    writeln!(output, "Ya estás en la primera pregunta.")?;
                }
            }
            choice => match choice.parse::<usize>() {
                Ok(number) if number >= 1 => {
                    if let Err(err) = session.answer(number - 1) {
                        writeln!(output, "{err}")?;
                    }
                }
                _ => writeln!(output, "Respuesta no válida: '{choice}'")?,
            },
        }
    }

    Ok(Some(session.finish(scorer)?))
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        year,
        name,
        student_code,
    } = args;

    let service = prepare(None)?;
    let profile = StudentProfile::new(name, student_code);
    let answers = sample_answers(service.catalog());

    let response = service.score(ScoreRequest {
        answers,
        year,
        profile: Some(profile.clone()),
        ..ScoreRequest::default()
    })?;

    println!("Demostración del cuestionario de huella ecológica\n");
    print!(
        "{}",
        render_footprint_report(&response, Some(&profile), today())?
    );

    if let Some(advice) = &response.advice_request {
        println!("\nSolicitud de recomendaciones personalizadas");
        println!("{}", advice.prompt);
    }

    Ok(())
}

/// Picks the middle option of every question.
fn sample_answers(catalog: &QuestionCatalog) -> AnswerSet {
    catalog
        .questions()
        .iter()
        .filter_map(|question| {
            question
                .options
                .get(question.options.len() / 2)
                .map(|option| (question.id.clone(), option.weight))
        })
        .collect()
}
