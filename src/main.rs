use std::{
    io::{self, Read},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use smart_lms::{
    config::DEFAULT_NEIGHBORS,
    recommender::parse_terms,
    ClassifierConfig, Config, CourseRecommender, Dataset, InternshipRecommender, Recommendation,
    ResumeCategoryPredictor, ResumeSkillRecommender,
};

/// Smart LMS recommendation utilities
#[derive(Parser)]
#[command(name = "smart-lms")]
#[command(about = "Internship, course and resume recommendations from CSV datasets")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    paths: PathArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct PathArgs {
    /// Internship listings CSV
    #[arg(long, global = true, env = "SMART_LMS_INTERNSHIP_CSV", default_value = "data/internship.csv")]
    internship_csv: PathBuf,

    /// Course catalogue CSV
    #[arg(long, global = true, env = "SMART_LMS_COURSE_CSV", default_value = "data/Coursera.csv")]
    course_csv: PathBuf,

    /// Resume skills CSV
    #[arg(long, global = true, env = "SMART_LMS_RESUME_SKILL_CSV", default_value = "data/final_resume_dataset.csv")]
    resume_skill_csv: PathBuf,

    /// Labelled resumes CSV used to train the category classifier
    #[arg(long, global = true, env = "SMART_LMS_RESUME_CATEGORY_CSV", default_value = "data/UpdatedResumeDataSet.csv")]
    resume_category_csv: PathBuf,

    /// Directory receiving the trained classifier artifacts
    #[arg(long, global = true, env = "SMART_LMS_ARTIFACT_DIR", default_value = "models")]
    artifact_dir: PathBuf,

    /// Do not write classifier artifacts
    #[arg(long, global = true, env = "SMART_LMS_NO_SAVE")]
    no_save: bool,

    /// Neighbours consulted by the category classifier
    #[arg(long, global = true, env = "SMART_LMS_NEIGHBORS", default_value_t = DEFAULT_NEIGHBORS)]
    neighbors: usize,
}

impl From<PathArgs> for Config {
    fn from(args: PathArgs) -> Self {
        Config {
            internship_csv: args.internship_csv,
            course_csv: args.course_csv,
            resume_skill_csv: args.resume_skill_csv,
            resume_category_csv: args.resume_category_csv,
            artifact_dir: args.artifact_dir,
            save_artifacts: !args.no_save,
            neighbors: args.neighbors,
            ..Config::default()
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend internships for a comma-separated skill list
    Internship {
        #[arg(short, long)]
        skills: String,
        /// Rows to return (defaults to the configured size)
        #[arg(short = 'n', long)]
        top_n: Option<usize>,
    },
    /// Recommend courses for a comma-separated skill list
    Course {
        #[arg(short, long)]
        skills: String,
        /// Rows to return (defaults to the configured size)
        #[arg(short = 'n', long)]
        top_n: Option<usize>,
    },
    /// Missing skills and similar resumes for one resume row
    Skills {
        #[arg(short, long)]
        index: usize,
        /// Rows to return (defaults to the configured size)
        #[arg(short = 'n', long)]
        top_n: Option<usize>,
    },
    /// Predict the category and rating of a resume (reads stdin without --file/--text)
    Classify {
        #[arg(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,
        #[arg(short, long)]
        text: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::from(cli.paths);
    info!("smart-lms v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Internship { skills, top_n } => {
            let dataset = load(&config.internship_csv)?;
            let recommender = InternshipRecommender::new(dataset).context("building internship recommender")?;
            let result = recommender
                .recommend(&parse_terms(&skills), top_n.unwrap_or(config.top_n))
                .context("recommending internships")?;
            print_recommendation("internships", &result);
        }
        Commands::Course { skills, top_n } => {
            let dataset = load(&config.course_csv)?;
            let recommender = CourseRecommender::new(dataset).context("building course recommender")?;
            let result = recommender
                .recommend(&parse_terms(&skills), top_n.unwrap_or(config.top_n))
                .context("recommending courses")?;
            print_recommendation("courses", &result);
        }
        Commands::Skills { index, top_n } => {
            let dataset = load(&config.resume_skill_csv)?;
            let recommender = ResumeSkillRecommender::new(dataset).context("building resume skill recommender")?;
            let missing = recommender
                .missing_skills(index)
                .with_context(|| format!("looking up missing skills for row {index}"))?;
            if missing.is_empty() {
                println!("no missing skills");
            } else {
                println!("missing skills:");
                for skill in &missing {
                    println!("  - {skill}");
                }
            }
            let similar = recommender
                .similar_rows(index, top_n.unwrap_or(config.similar_top_n))
                .with_context(|| format!("finding resumes similar to row {index}"))?;
            print_recommendation("similar resumes", &similar);
        }
        Commands::Classify { file, text } => {
            let resume = read_resume(file, text)?;
            let dataset = load(&config.resume_category_csv)?;
            let predictor = ResumeCategoryPredictor::new(&dataset, &ClassifierConfig::from(&config))
                .context("training resume category classifier")?;
            let rating = predictor.rate_breakdown(&resume);
            println!("category: {}", predictor.predict_category(&resume));
            println!(
                "rating: {}/5 ({} words, {} keywords)",
                rating.rating, rating.word_count, rating.keyword_hits
            );
        }
    }
    Ok(())
}

fn load(path: &Path) -> Result<Dataset> {
    Dataset::from_csv_path(path).with_context(|| format!("loading dataset {}", path.display()))
}

fn read_resume(file: Option<PathBuf>, text: Option<String>) -> Result<String> {
    match (file, text) {
        (Some(path), _) => {
            std::fs::read_to_string(&path).with_context(|| format!("reading resume {}", path.display()))
        }
        (None, Some(text)) => Ok(text),
        (None, None) => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).context("reading resume from stdin")?;
            Ok(buf)
        }
    }
}

fn print_recommendation(title: &str, result: &Recommendation) {
    if !result.missing_columns.is_empty() {
        eprintln!("note: dataset has no column(s) {}", result.missing_columns.join(", "));
    }
    if !result.has_match() {
        println!("no matching {title} found");
        return;
    }
    println!("{title}:");
    for row in &result.rows {
        println!("#{} (score {:.3})", row.index, row.score);
        for (column, value) in &row.fields {
            println!("  {column}: {value}");
        }
    }
}
