use dci_core::player;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    first_name: String,
    last_name: String,
}

impl Person {
    pub fn new(first_name: &str, last_name: &str) -> Self {
        Self { first_name: first_name.to_string(),
               last_name: last_name.to_string() }
    }

    pub fn first_name(&self) -> &str { &self.first_name }
    pub fn last_name(&self) -> &str { &self.last_name }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

player! {
    Person {
        fn first_name(this) -> String { this.first_name.clone() }
        fn last_name(this) -> String { this.last_name.clone() }
        fn full_name(this) -> String { this.full_name() }
        fn set_first_name(this, name: String) { this.first_name = name; }
        fn set_last_name(this, name: String) { this.last_name = name; }
    }
}
