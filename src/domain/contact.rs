#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Contact {
    pub name: String,
    pub phone: String,
}

pub fn normalize_username(name: &str) -> String {
    // First character uppercased, everything after it lowercased
    // So "bob", "BOB", and "bOb" all key the same entry
    let mut chars = name.chars();

    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}
