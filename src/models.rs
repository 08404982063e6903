#[derive(Debug, Clone)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
}

impl Person {
    /// Stores the three values exactly as given. Nothing is trimmed or
    /// validated here; an empty name or a negative age is kept verbatim.
    pub fn new(first_name: &str, last_name: &str, age: i32) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            age,
        }
    }

    pub fn full_name(&self) -> String {
        Self::compute_full_name(&self.first_name, &self.last_name)
    }

    /// The one formatting rule, also callable without an instance.
    /// No trimming or emptiness handling: an empty part keeps its
    /// separating space, so `("", "Turing")` yields `" Turing"`.
    pub fn compute_full_name(first_name: &str, last_name: &str) -> String {
        format!("{first_name} {last_name}")
    }
}
