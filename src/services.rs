//! Entry sequence.
use crate::models::{say_hello, Greeter, HELLO_WORLD};

/// Name passed to the greeting function.
pub const FUNCTION_NAME: &str = "C++";

/// Name stored in the greeting subject.
pub const SUBJECT_NAME: &str = "C++ OOP";

pub struct GreetingService;

impl GreetingService {
    /// Build the greeting lines in print order.
    pub fn greetings(&self) -> [String; 3] {
        let greeter = Greeter::new(SUBJECT_NAME);
        tracing::debug!(name = greeter.name(), "greeter constructed");
        [
            HELLO_WORLD.to_string(),
            say_hello(FUNCTION_NAME),
            greeter.greet(),
        ]
    }
}
