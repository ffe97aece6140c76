//! Small formatting helpers shared across the application.

/// Capitalize a Pokémon `name` for display: first letter uppercased, the
/// rest lowercased. Examples: `pikachu` -> `Pikachu`, `MEW` -> `Mew`.
pub fn capitalize(name: &str) -> String {
    let mut chs = name.chars();
    match chs.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + &chs.as_str().to_lowercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_first_letter_only() {
        assert_eq!(capitalize("bulbasaur"), "Bulbasaur");
        assert_eq!(capitalize("MEWTWO"), "Mewtwo");
        assert_eq!(capitalize(""), "");
    }
}
