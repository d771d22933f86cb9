use std_util::str;

/// A type or field identifier split into its snake case parts.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Name {
    pub parts: Vec<String>,
}

impl Name {
    pub fn new(src: &str) -> Self {
        let snake = str::snake_case(src);
        let parts = snake.split('_').map(String::from).collect();
        Self { parts }
    }

    pub fn snake_case(&self) -> String {
        self.parts.join("_")
    }
}

/// Derives a table or column name from a type or field identifier.
///
/// `TestModel` maps to `test_model`, `FirstName` to `first_name`.
pub fn underscore_name(ident: &str) -> String {
    Name::new(ident).snake_case()
}
