/// Turns a raw classifier label such as `golden_retriever` into `Golden Retriever`.
///
/// Underscores become spaces and the first character of every space-separated
/// word is uppercased. The rest of each word is left alone, so an already
/// formatted label comes back unchanged.
pub fn format_breed(raw: &str) -> String {
    raw.replace('_', " ")
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
