//! Built-in study-design questionnaire
//!
//! Prompts keep their "n/30 - " numbering: the analysis service receives
//! them verbatim as answer keys.

use super::question::{Question, QuestionSet};

const BUILTIN: &[(&str, &[&str])] = &[
    ("1/30 - What is the type of your study?", &["Experimental", "Observational", "Not applicable / Unsure"]),
    ("2/30 - What is your research design?", &["Between-subjects", "Within-subjects (Repeated measures)", "Mixed design", "Not applicable / Unsure"]),
    ("3/30 - Is your data collection longitudinal or cross-sectional?", &["Longitudinal", "Cross-sectional", "Not applicable / Unsure"]),
    ("4/30 - How did you sample your participants?", &["Random sampling", "Stratified sampling", "Convenience sampling", "Other / Unsure"]),
    ("5/30 - What is your approximate sample size?", &["Small (<30)", "Medium (30–100)", "Large (>100)"]),
    ("6/30 - Are observations independent, or are they nested/clustered/repeated within subjects?", &["Independent observations", "Nested or clustered", "Repeated measures", "Not applicable / Unsure"]),
    ("7/30 - What types of dependent variables do you have?", &["Continuous", "Categorical nominal", "Categorical ordinal", "Binary", "Count data (Poisson)"]),
    ("8/30 - What types of independent variables do you have?", &["Continuous", "Categorical", "Binary"]),
    ("9/30 - Are your groups balanced or unbalanced in size?", &["Balanced", "Unbalanced", "Not applicable"]),
    ("10/30 - Do you have missing data?", &["Minimal (<5%)", "Moderate (5–15%)", "High (>15%)"]),
    ("11/30 - Is your data approximately normally distributed?", &["Approximately normal", "Mildly skewed", "Severely skewed", "Unknown"]),
    ("12/30 - Do your variables meet the assumption of homogeneity of variances?", &["Yes", "No", "Unknown", "Not applicable"]),
    ("13/30 - Are linear relationships expected between your variables?", &["Yes", "No", "Unknown / Unsure"]),
    ("14/30 - Does your data closely match any known statistical distribution?", &["Normal", "Binomial", "Poisson", "Unknown", "Unsure"]),
    ("15/30 - Is multicollinearity likely?", &["Yes", "No", "Not applicable", "Unsure"]),
    ("16/30 - Do you have substantial outliers that could influence the analysis?", &["Yes", "No", "Unknown"]),
    ("17/30 - What is your primary analytical goal?", &["Hypothesis testing", "Parameter estimation", "Predictive accuracy", "Exploratory analysis"]),
    ("18/30 - How critical is interpretability of your results?", &["Very critical", "Moderately important", "Not critical"]),
    ("19/30 - Do you need explicit quantification of uncertainty?", &["Yes", "No", "Unsure"]),
    ("20/30 - Do you have prior knowledge or research findings to incorporate into the analysis?", &["Yes, explicit priors", "Yes, vague priors", "No", "Unsure"]),
    ("21/30 - What is your data size for predictive modeling purposes?", &["Small (<100)", "Medium (100–1000)", "Large (>1000)"]),
    ("22/30 - Which matters more in your analysis: interpretability or predictive accuracy?", &["Predictive accuracy", "Interpretability", "Both equally", "Unsure"]),
    ("23/30 - Will you be able to validate your models using new or held-out data?", &["Yes", "No", "No validation feasible", "Unsure"]),
    ("24/30 - Do you plan to use clustering methods or unsupervised learning techniques?", &["Yes", "No", "Maybe/Unsure"]),
    ("25/30 - Is your data structured as a time series?", &["Yes", "No", "Unsure"]),
    ("26/30 - Is your data spatial or geographic?", &["Yes", "No", "Unsure"]),
    ("27/30 - Do you have high-dimensional data?", &["Yes", "No", "Unsure"]),
    ("28/30 - Do you have sufficient computational resources?", &["High", "Moderate", "Low"]),
    ("29/30 - Do you require real-time results?", &["Yes", "No"]),
    ("30/30 - Do you have strict ethical or regulatory standards?", &["Yes, very strict", "Moderate", "Flexible or none"]),
];

impl QuestionSet {
    /// The 30-question study-design questionnaire shipped with the client
    pub fn builtin() -> Self {
        let questions = BUILTIN
            .iter()
            .map(|(prompt, options)| Question::new(*prompt, options.iter().copied()))
            .collect();

        // The table above is checked by `test_builtin_set_is_valid`
        Self::new(questions).unwrap_or_else(|e| panic!("built-in question set is invalid: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questionnaire::question::{MAX_OPTIONS, MIN_OPTIONS};

    #[test]
    fn test_builtin_set_is_valid() {
        let set = QuestionSet::builtin();
        assert_eq!(set.len(), 30);
        for question in &set {
            assert!((MIN_OPTIONS..=MAX_OPTIONS).contains(&question.options.len()));
        }
    }

    #[test]
    fn test_builtin_prompts_are_numbered() {
        let set = QuestionSet::builtin();
        for (i, question) in set.iter().enumerate() {
            assert!(question.prompt.starts_with(&format!("{}/30 - ", i + 1)));
        }
    }
}
