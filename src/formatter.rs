/// Two-letter avatar text for a participant.
///
/// Uses the local part of the address (everything before the first `@`), split on
/// `.`, `-` and `_`. A single segment yields its first two characters, otherwise the
/// first characters of the first two segments are joined.
pub fn initials_from_email(email: &str) -> String {
    let local = email.split_once('@').map_or(email, |(local, _)| local);
    let parts: Vec<&str> = local
        .split(['.', '-', '_'])
        .filter(|part| !part.is_empty())
        .collect();

    let initials: String = match parts.as_slice() {
        [only] => only.chars().take(2).collect(),
        _ => parts
            .iter()
            .take(2)
            .filter_map(|part| part.chars().next())
            .collect(),
    };

    initials.to_uppercase()
}
