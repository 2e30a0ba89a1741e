//! Regex filters selecting papers from the library
//!
//! Filter words use a small keyword grammar: a bare word matches the title,
//! `as` matches the nickname, `by` any author, `by1` the first author,
//! `at`/`on` the venue, and `in` the year. Each keyword consumes the next
//! word as a regex pattern.

use regex::Regex;

use crate::error::{PaperwikiError, Result};
use crate::paper::Paper;

/// A compiled paper filter
#[derive(Default, Debug, Clone)]
pub struct PaperFilter {
    pub title: Vec<Regex>,
    pub nickname: Vec<Regex>,
    pub author: Vec<Regex>,
    pub first_author: Vec<Regex>,
    pub venue: Vec<Regex>,
    pub year: Vec<Regex>,
}

impl PaperFilter {
    /// Build a filter from command-line filter words.
    pub fn from_args(args: &[String]) -> Result<Self> {
        let mut filter = Self::default();
        let mut arg_iter = args.iter();
        while let Some(arg) = arg_iter.next() {
            let (place, pattern) = match arg.as_str() {
                "as" => (&mut filter.nickname, arg_iter.next()),
                "by" => (&mut filter.author, arg_iter.next()),
                "by1" => (&mut filter.first_author, arg_iter.next()),
                "at" | "on" => (&mut filter.venue, arg_iter.next()),
                "in" => (&mut filter.year, arg_iter.next()),
                _ => (&mut filter.title, Some(arg)),
            };
            let pattern = pattern
                .ok_or_else(|| PaperwikiError::FilterKeywordNoPattern(arg.to_string()))?;
            place.push(Regex::new(pattern)?);
        }
        Ok(filter)
    }

    /// True when no patterns were supplied; an empty filter matches
    /// every paper.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.nickname.is_empty()
            && self.author.is_empty()
            && self.first_author.is_empty()
            && self.venue.is_empty()
            && self.year.is_empty()
    }

    /// Check whether the filter matches the given paper.
    ///
    /// Every supplied pattern must match its field. Author patterns match
    /// when any author matches; first-author patterns only the first.
    pub fn matches(&self, paper: &Paper) -> bool {
        if !self.title.iter().all(|re| re.is_match(&paper.title)) {
            return false;
        }

        let nickname = paper.nickname.as_deref().unwrap_or("");
        if !self.nickname.iter().all(|re| re.is_match(nickname)) {
            return false;
        }

        if !self
            .author
            .iter()
            .all(|re| paper.authors.iter().any(|a| re.is_match(a)))
        {
            return false;
        }

        let first_author = paper.authors.first().map(String::as_str).unwrap_or("");
        if !self.first_author.iter().all(|re| re.is_match(first_author)) {
            return false;
        }

        if !self.venue.iter().all(|re| re.is_match(&paper.venue)) {
            return false;
        }

        self.year.iter().all(|re| re.is_match(&paper.year))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(words: &[&str]) -> Vec<String> {
        words.iter().map(|s| s.to_string()).collect()
    }

    fn paper() -> Paper {
        Paper {
            title: "Attention Is All You Need".to_string(),
            nickname: Some("transformer".to_string()),
            authors: vec!["Ashish Vaswani".to_string(), "Noam Shazeer".to_string()],
            venue: "NeurIPS".to_string(),
            year: "2017".to_string(),
        }
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = PaperFilter::default();
        assert!(filter.is_empty());
        assert!(filter.matches(&paper()));
    }

    #[test]
    fn test_title_from_bare_words() {
        let filter = PaperFilter::from_args(&args(&["Attention"])).unwrap();
        assert_eq!(filter.title.len(), 1);
        assert!(filter.matches(&paper()));

        let miss = PaperFilter::from_args(&args(&["Convolution"])).unwrap();
        assert!(!miss.matches(&paper()));
    }

    #[test]
    fn test_keyword_fields() {
        let filter =
            PaperFilter::from_args(&args(&["by", "Vaswani", "at", "NeurIPS", "in", "2017"]))
                .unwrap();
        assert_eq!(filter.author.len(), 1);
        assert_eq!(filter.venue.len(), 1);
        assert_eq!(filter.year.len(), 1);
        assert!(filter.matches(&paper()));
    }

    #[test]
    fn test_author_matches_any_author() {
        let filter = PaperFilter::from_args(&args(&["by", "Shazeer"])).unwrap();
        assert!(filter.matches(&paper()));
    }

    #[test]
    fn test_first_author_only_matches_first() {
        let first = PaperFilter::from_args(&args(&["by1", "Vaswani"])).unwrap();
        assert!(first.matches(&paper()));

        let second = PaperFilter::from_args(&args(&["by1", "Shazeer"])).unwrap();
        assert!(!second.matches(&paper()));
    }

    #[test]
    fn test_nickname_keyword() {
        let filter = PaperFilter::from_args(&args(&["as", "transformer"])).unwrap();
        assert!(filter.matches(&paper()));
    }

    #[test]
    fn test_all_patterns_must_match() {
        let filter =
            PaperFilter::from_args(&args(&["by", "Vaswani", "in", "2020"])).unwrap();
        assert!(!filter.matches(&paper()));
    }

    #[test]
    fn test_keyword_without_pattern() {
        let result = PaperFilter::from_args(&args(&["by"]));
        assert!(matches!(
            result,
            Err(PaperwikiError::FilterKeywordNoPattern(_))
        ));
    }

    #[test]
    fn test_invalid_regex() {
        let result = PaperFilter::from_args(&args(&["["]));
        assert!(matches!(result, Err(PaperwikiError::FilterPattern(_))));
    }

    #[test]
    fn test_on_is_alias_for_at() {
        let filter = PaperFilter::from_args(&args(&["on", "NeurIPS"])).unwrap();
        assert_eq!(filter.venue.len(), 1);
        assert!(filter.matches(&paper()));
    }
}
