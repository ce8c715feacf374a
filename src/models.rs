//! Greeting models.

/// Literal greeting printed before any named greeting.
pub const HELLO_WORLD: &str = "Hello, World!";

/// Greeting subject: holds a name fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeter {
    name: String,
}

impl Greeter {
    /// Create a new greeter. Any text is accepted, including the empty string.
    pub fn new(name: impl Into<String>) -> Self {
        Greeter { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Greet the stored name.
    pub fn greet(&self) -> String {
        say_hello(&self.name)
    }
}

/// Greeting function: `"Hello, " + name + "!"`.
pub fn say_hello(name: &str) -> String {
    format!("Hello, {name}!")
}
