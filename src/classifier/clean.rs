use std::sync::OnceLock;

use regex::Regex;

struct Patterns {
    url: Regex,
    retweet_cc: Regex,
    /// `retweet_cc` for text that is already lowercased
    retweet_cc_lower: Regex,
    mention: Regex,
    hashtag: Regex,
    non_letter: Regex,
    whitespace: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        url: Regex::new(r"http\S+").expect("url pattern is valid"),
        retweet_cc: Regex::new(r"\b(?:RT|cc)\b").expect("rt/cc pattern is valid"),
        retweet_cc_lower: Regex::new(r"\b(?:rt|cc)\b").expect("rt/cc pattern is valid"),
        mention: Regex::new(r"@\S+").expect("mention pattern is valid"),
        hashtag: Regex::new(r"#\S+").expect("hashtag pattern is valid"),
        non_letter: Regex::new(r"[^A-Za-z\s]").expect("letter pattern is valid"),
        whitespace: Regex::new(r"\s+").expect("whitespace pattern is valid"),
    })
}

/// One pass of the cleaning pipeline, substitutions in fixed order
fn clean_pass(text: &str, retweet_cc: &Regex) -> String {
    let p = patterns();
    let text = p.url.replace_all(text, "");
    let text = retweet_cc.replace_all(&text, "");
    let text = p.mention.replace_all(&text, "");
    let text = p.hashtag.replace_all(&text, "");
    let text = p.non_letter.replace_all(&text, "");
    let text = p.whitespace.replace_all(&text, " ");
    text.trim().to_lowercase()
}

/// Normalize resume text for training and prediction.
///
/// Drops URLs, `RT`/`cc` tokens, mentions, hashtags and every non-letter
/// character, collapses whitespace and lowercases. The pass is repeated
/// until the text stops changing: stripping characters can expose new
/// removable tokens (`c1c` becomes `cc`, `RT1` becomes `rt`), and the result
/// must be a fixed point. Passes after the first run on lowercased text and
/// match `rt` in lowercase.
pub fn clean_resume(text: &str) -> String {
    let p = patterns();
    let mut current = clean_pass(text, &p.retweet_cc);
    loop {
        let next = clean_pass(&current, &p.retweet_cc_lower);
        if next == current {
            return current;
        }
        current = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_urls_mentions_hashtags_and_digits() {
        let raw = "Visit https://example.com/me @john #hiring  Python3 dev, 5+ years!";
        assert_eq!(clean_resume(raw), "visit python dev years");
    }

    #[test]
    fn removes_rt_and_cc_tokens_only() {
        assert_eq!(clean_resume("RT cc success accent"), "success accent");
    }

    #[test]
    fn tokens_exposed_by_stripping_are_removed() {
        assert_eq!(clean_resume("RT1 java"), "java");
        assert_eq!(clean_resume("cc1 java"), "java");
        assert_eq!(clean_resume("R1T java"), "java");
        assert_eq!(clean_resume(&clean_resume("RT1 java")), "java");
    }

    #[test]
    fn empty_and_symbol_only_inputs_clean_to_empty() {
        assert_eq!(clean_resume(""), "");
        assert_eq!(clean_resume("  123 !!! "), "");
    }

    #[test]
    fn cleaning_is_idempotent() {
        let samples = [
            "c1c", "CC and Cc", "ht1tp://x", "Skills: C++, Java; SQL\n\nEducation - B.Tech",
            "@a@b #x#y", "RT@x", "RT1", "r1t and R2T", "naïve café résumé", "  multiple   spaces\tand\ttabs ",
        ];
        for sample in samples {
            let once = clean_resume(sample);
            assert_eq!(clean_resume(&once), once, "not idempotent for {sample:?}");
        }
    }

    #[test]
    fn lowercases_after_removal() {
        assert_eq!(clean_resume("Machine LEARNING"), "machine learning");
    }
}
