/// Chat models Lookout has been exercised against, with display labels.
const KNOWN_MODELS: &[(&str, &str)] = &[
    ("gpt-4o", "GPT-4 Optimized"),
    ("gpt-4o-mini", "GPT-4 Optimized Mini"),
    ("gpt-4-turbo", "GPT-4 Turbo"),
    ("gpt-4", "GPT-4"),
    ("gpt-3.5-turbo", "GPT-3.5 Turbo"),
];

/// Whether `model` appears in the known-model table. Exact string match.
///
/// # Examples
///
/// ```
/// use lookout_review::model::is_known_model;
///
/// assert!(is_known_model("gpt-4-turbo"));
/// assert!(!is_known_model("gpt-4-TURBO"));
/// ```
pub fn is_known_model(model: &str) -> bool {
    KNOWN_MODELS.iter().any(|(name, _)| *name == model)
}

/// Human-readable label for a known model.
pub fn model_label(model: &str) -> Option<&'static str> {
    KNOWN_MODELS
        .iter()
        .find(|(name, _)| *name == model)
        .map(|(_, label)| *label)
}

/// Validate a configured model name against the known-model table.
///
/// The name is always returned unchanged; an unknown name only earns a
/// warning on stderr, never a rejection or a substitution.
///
/// # Examples
///
/// ```
/// use lookout_review::model::validate_model;
///
/// assert_eq!(validate_model("gpt-4-turbo"), "gpt-4-turbo");
/// assert_eq!(validate_model("experimental-model"), "experimental-model");
/// ```
pub fn validate_model(model: &str) -> &str {
    if !is_known_model(model) {
        eprintln!("warning: model '{model}' is not in the list of known models, using anyway");
    }
    model
}
