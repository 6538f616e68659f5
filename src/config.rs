//! Runtime configuration and the fixed lexicons used by cleaning and rating.

use std::path::PathBuf;

/// Keywords the resume rater looks for, matched as substrings of the cleaned text
pub const RESUME_KEYWORDS: [&str; 7] = [
    "project",
    "experience",
    "skills",
    "education",
    "internship",
    "certificate",
    "achievement",
];

/// Upper bound of the resume rating
pub const MAX_RATING: u8 = 5;

/// Neighbours consulted by the category classifier
pub const DEFAULT_NEIGHBORS: usize = 5;

pub const DEFAULT_TOP_N: usize = 5;
pub const DEFAULT_SIMILAR_TOP_N: usize = 3;

/// English stop words excluded from the classifier vocabulary
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all", "almost",
    "alone", "along", "already", "also", "although", "always", "am", "among", "amongst",
    "amoungst", "amount", "an", "and", "another", "any", "anyhow", "anyone", "anything", "anyway",
    "anywhere", "are", "around", "as", "at", "back", "be", "became", "because", "become",
    "becomes", "becoming", "been", "before", "beforehand", "behind", "being", "below", "beside",
    "besides", "between", "beyond", "bill", "both", "bottom", "but", "by", "call", "can",
    "cannot", "cant", "co", "con", "could", "couldnt", "cry", "de", "describe", "detail", "do",
    "done", "down", "due", "during", "each", "eg", "eight", "either", "eleven", "else",
    "elsewhere", "empty", "enough", "etc", "even", "ever", "every", "everyone", "everything",
    "everywhere", "except", "few", "fifteen", "fifty", "fill", "find", "fire", "first", "five",
    "for", "former", "formerly", "forty", "found", "four", "from", "front", "full", "further",
    "get", "give", "go", "had", "has", "hasnt", "have", "he", "hence", "her", "here",
    "hereafter", "hereby", "herein", "hereupon", "hers", "herself", "him", "himself", "his",
    "how", "however", "hundred", "i", "ie", "if", "in", "inc", "indeed", "interest", "into",
    "is", "it", "its", "itself", "keep", "last", "latter", "latterly", "least", "less", "ltd",
    "made", "many", "may", "me", "meanwhile", "might", "mill", "mine", "more", "moreover",
    "most", "mostly", "move", "much", "must", "my", "myself", "name", "namely", "neither",
    "never", "nevertheless", "next", "nine", "no", "nobody", "none", "noone", "nor", "not",
    "nothing", "now", "nowhere", "of", "off", "often", "on", "once", "one", "only", "onto",
    "or", "other", "others", "otherwise", "our", "ours", "ourselves", "out", "over", "own",
    "part", "per", "perhaps", "please", "put", "rather", "re", "same", "see", "seem", "seemed",
    "seeming", "seems", "serious", "several", "she", "should", "show", "side", "since",
    "sincere", "six", "sixty", "so", "some", "somehow", "someone", "something", "sometime",
    "sometimes", "somewhere", "still", "such", "system", "take", "ten", "than", "that", "the",
    "their", "them", "themselves", "then", "thence", "there", "thereafter", "thereby",
    "therefore", "therein", "thereupon", "these", "they", "thick", "thin", "third", "this",
    "those", "though", "three", "through", "throughout", "thru", "thus", "to", "together",
    "too", "top", "toward", "towards", "twelve", "twenty", "two", "un", "under", "until", "up",
    "upon", "us", "very", "via", "was", "we", "well", "were", "what", "whatever", "when",
    "whence", "whenever", "where", "whereafter", "whereas", "whereby", "wherein", "whereupon",
    "wherever", "whether", "which", "while", "whither", "who", "whoever", "whole", "whom",
    "whose", "why", "will", "with", "within", "without", "would", "yet", "you", "your",
    "yours", "yourself", "yourselves",
];

/// Where datasets come from and where trained artifacts go
#[derive(Debug, Clone)]
pub struct Config {
    pub internship_csv: PathBuf,
    pub course_csv: PathBuf,
    pub resume_skill_csv: PathBuf,
    pub resume_category_csv: PathBuf,
    /// Directory receiving the classifier artifacts
    pub artifact_dir: PathBuf,
    /// Write artifacts when the classifier is trained
    pub save_artifacts: bool,
    pub neighbors: usize,
    /// Rows returned by the internship and course recommenders
    pub top_n: usize,
    /// Similar resumes returned by the skills lookup
    pub similar_top_n: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            internship_csv: PathBuf::from("data/internship.csv"),
            course_csv: PathBuf::from("data/Coursera.csv"),
            resume_skill_csv: PathBuf::from("data/final_resume_dataset.csv"),
            resume_category_csv: PathBuf::from("data/UpdatedResumeDataSet.csv"),
            artifact_dir: PathBuf::from("models"),
            save_artifacts: true,
            neighbors: DEFAULT_NEIGHBORS,
            top_n: DEFAULT_TOP_N,
            similar_top_n: DEFAULT_SIMILAR_TOP_N,
        }
    }
}

/// Settings the category classifier needs at training time
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    pub neighbors: usize,
    /// `None` disables artifact persistence
    pub artifact_dir: Option<PathBuf>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            neighbors: DEFAULT_NEIGHBORS,
            artifact_dir: None,
        }
    }
}

impl From<&Config> for ClassifierConfig {
    fn from(config: &Config) -> Self {
        Self {
            neighbors: config.neighbors,
            artifact_dir: config.save_artifacts.then(|| config.artifact_dir.clone()),
        }
    }
}
