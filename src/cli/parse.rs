use verse_judge_core::rubric::Rubric;

/// Parse rubric from its wire name
pub fn parse_rubric(s: &str) -> std::result::Result<Rubric, String> {
    s.parse::<Rubric>().map_err(|e| e.to_string())
}
